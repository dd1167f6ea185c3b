// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, computed once per frame.
pub struct AppLayout {
    pub input: Rect,
    pub findings: Rect,
    pub details: Rect,
    pub scenarios: Rect,
    pub summary: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input bar, the report area and the footer.
///
/// The report area holds the findings table, the selected finding's details and the
/// attack scenarios on the left (65%), with the summary panel on the right (35%).
pub fn create_layout(frame_size: Rect) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(main_chunks[1]);

    let report_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(7),
            Constraint::Min(0),
        ])
        .split(content_chunks[0]);

    AppLayout {
        input: main_chunks[0],
        findings: report_chunks[0],
        details: report_chunks[1],
        scenarios: report_chunks[2],
        summary: content_chunks[1],
        footer: main_chunks[2],
    }
}
