// src/app.rs

use ratatui::widgets::{ScrollbarState, TableState};
use surface_mapper::{RiskAssessment, ScanReport, ScanRequest};

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

pub struct App {
    pub should_quit: bool,
    pub show_disclaimer: bool,
    pub state: AppState,
    pub input: String,
    pub input_error: Option<String>,
    pub scan_report: Option<ScanReport>,
    pub findings_state: TableState,
    pub scenario_scroll: usize,
    pub scenario_scroll_state: ScrollbarState,
    pub spinner_frame: usize,
    pub export_status: ExportStatus,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            show_disclaimer: true,
            state: AppState::Idle,
            input: String::new(),
            input_error: None,
            scan_report: None,
            findings_state: TableState::default(),
            scenario_scroll: 0,
            scenario_scroll_state: ScrollbarState::default(),
            spinner_frame: 0,
            export_status: ExportStatus::Idle,
        }
    }

    /// Validates the input box. On success the app switches to scanning.
    pub fn submit(&mut self) -> Option<ScanRequest> {
        match ScanRequest::parse(&self.input) {
            Ok(request) => {
                self.input_error = None;
                self.state = AppState::Scanning;
                Some(request)
            }
            Err(e) => {
                self.input_error = Some(e.to_string());
                None
            }
        }
    }

    pub fn finish_scan(&mut self, outcome: Result<ScanReport, String>) {
        match outcome {
            Ok(report) => {
                let selected = if report.scan_results.is_empty() { None } else { Some(0) };
                self.findings_state.select(selected);
                self.scenario_scroll = 0;
                self.scenario_scroll_state = ScrollbarState::new(report.attack_simulation.len());
                self.scan_report = Some(report);
                self.state = AppState::Finished;
            }
            Err(e) => {
                self.input_error = Some(e);
                self.state = AppState::Idle;
            }
        }
    }

    pub fn findings(&self) -> &[RiskAssessment] {
        self.scan_report.as_ref().map(|r| r.scan_results.as_slice()).unwrap_or_default()
    }

    pub fn selected_finding(&self) -> Option<&RiskAssessment> {
        self.findings_state.selected().and_then(|i| self.findings().get(i))
    }

    pub fn select_previous(&mut self) {
        if self.findings().is_empty() {
            return;
        }
        let i = self.findings_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.findings_state.select(Some(i));
    }

    pub fn select_next(&mut self) {
        let len = self.findings().len();
        if len == 0 {
            return;
        }
        let i = self.findings_state.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.findings_state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        self.scenario_scroll = self.scenario_scroll.saturating_sub(1);
        self.scenario_scroll_state = self.scenario_scroll_state.position(self.scenario_scroll);
    }

    pub fn scroll_down(&mut self) {
        let max = self.scan_report.as_ref().map_or(0, |r| r.attack_simulation.len().saturating_sub(1));
        self.scenario_scroll = self.scenario_scroll.saturating_add(1).min(max);
        self.scenario_scroll_state = self.scenario_scroll_state.position(self.scenario_scroll);
    }

    pub fn on_tick(&mut self) {
        if let AppState::Scanning = self.state {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.input_error = None;
        self.scan_report = None;
        self.findings_state = TableState::default();
        self.scenario_scroll = 0;
        self.scenario_scroll_state = ScrollbarState::default();
        self.spinner_frame = 0;
        self.export_status = ExportStatus::Idle;
    }
}
