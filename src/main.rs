// src/main.rs

use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use surface_mapper::logging::{get_data_dir, initialize_logging};
use surface_mapper::report::export_report;
use surface_mapper::{run_assessment, PortScanner, ScanReport, ScannerConfig};
use tokio::sync::mpsc;
use tracing::{error, info};

mod app;
mod ui;

use app::{App, AppState, ExportStatus};

type ScanOutcome = Result<ScanReport, String>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = initialize_logging()?;

    let scanner = Arc::new(PortScanner::new(ScannerConfig::from_env()));
    let config = scanner.config();
    info!(log = %log_path.display(), workers = config.workers, timeout = ?config.connect_timeout, "Surface mapper starting.");

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run(&mut terminal, scanner).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, scanner: Arc<PortScanner>) -> Result<()> {
    let mut app = App::new();
    let (tx, mut rx) = mpsc::channel::<ScanOutcome>(1);

    while !app.should_quit {
        terminal.draw(|frame| ui::render(&mut app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            handle_events(&mut app, &tx, &scanner)?;
        }
        app.on_tick();

        if let Ok(outcome) = rx.try_recv() {
            app.finish_scan(outcome);
        }
    }
    Ok(())
}

fn handle_events(app: &mut App, tx: &mpsc::Sender<ScanOutcome>, scanner: &Arc<PortScanner>) -> Result<()> {
    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if app.show_disclaimer {
            match key.code {
                KeyCode::Enter => app.show_disclaimer = false,
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => app.quit(),
                _ => {}
            }
            return Ok(());
        }
        match app.state {
            AppState::Idle => handle_idle_input(app, key.code, tx, scanner),
            AppState::Finished => handle_finished_input(app, key.code),
            AppState::Scanning => handle_scanning_input(app, key.code),
        }
    }
    Ok(())
}

fn handle_idle_input(app: &mut App, key_code: KeyCode, tx: &mpsc::Sender<ScanOutcome>, scanner: &Arc<PortScanner>) {
    match key_code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => {
            let Some(request) = app.submit() else {
                return;
            };
            let tx = tx.clone();
            let scanner = Arc::clone(scanner);
            tokio::spawn(async move {
                let outcome = run_assessment(&scanner, &request).await.map_err(|e| {
                    error!(error = %e, "Scan failed.");
                    format!("Scan failed: {e}")
                });
                let _ = tx.send(outcome).await;
            });
        }
        _ => {}
    }
}

fn handle_scanning_input(app: &mut App, key_code: KeyCode) {
    if let KeyCode::Char('q' | 'Q') = key_code {
        app.quit();
    }
}

fn handle_finished_input(app: &mut App, key_code: KeyCode) {
    match key_code {
        KeyCode::Char('q' | 'Q') => app.quit(),
        KeyCode::Char('n' | 'N') => app.reset(),
        KeyCode::Char('e' | 'E') => export(app),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        _ => {}
    }
}

fn export(app: &mut App) {
    let Some(report) = &app.scan_report else {
        return;
    };
    app.export_status = match export_report(report, &get_data_dir().join("reports")) {
        Ok(path) => ExportStatus::Success(path.display().to_string()),
        Err(e) => {
            error!(error = %e, "Report export failed.");
            ExportStatus::Error(e.to_string())
        }
    };
}
