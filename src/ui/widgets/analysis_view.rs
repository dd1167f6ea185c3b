// src/ui/widgets/analysis_view.rs

use super::risk_style;
use crate::app::{App, AppState, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

pub fn render_analysis_view(frame: &mut Frame, app: &mut App, table_area: Rect, details_area: Rect) {
    let main_block = Block::default()
        .borders(Borders::ALL)
        .title("Open Ports (Navigate with ↑ ↓)");

    if !matches!(app.state, AppState::Finished) {
        let content = match app.state {
            AppState::Idle => Paragraph::new("Enter a target and press Enter. Results will appear here...")
                .alignment(Alignment::Center),
            AppState::Scanning => {
                let spinner_char = SPINNER_CHARS[app.spinner_frame];
                Paragraph::new(Line::from(vec![
                    Span::styled(format!("{} ", spinner_char), Style::default().fg(Color::Cyan)),
                    Span::raw("Scanning ports... Please wait."),
                ]))
                .alignment(Alignment::Center)
            }
            AppState::Finished => Paragraph::new(""),
        };
        frame.render_widget(content.block(main_block), table_area);
        frame.render_widget(Block::default().borders(Borders::ALL).title("Details"), details_area);
        return;
    }

    if app.findings().is_empty() {
        let p = Paragraph::new(Text::from(vec![
            Line::from(""),
            Line::from("✓ NO OPEN PORTS DETECTED".bold().fg(Color::Green)),
            Line::from(""),
            Line::from("Current attack surface is minimal."),
        ]))
        .alignment(Alignment::Center)
        .block(main_block);
        frame.render_widget(p, table_area);
        frame.render_widget(Block::default().borders(Borders::ALL).title("Details"), details_area);
        return;
    }

    let header = Row::new(["PORT", "SERVICE", "RISK", "REASON"])
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::DarkGray));
    let rows: Vec<Row> = app
        .findings()
        .iter()
        .map(|f| {
            Row::new(vec![
                Cell::from(f.port.to_string()),
                Cell::from(f.service.clone()),
                Cell::from(f.risk_level.to_string()).style(risk_style(f.risk_level)),
                Cell::from(f.reason.clone()),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(main_block)
    .row_highlight_style(Style::new().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    frame.render_stateful_widget(table, table_area, &mut app.findings_state);

    let detail_block = Block::default().borders(Borders::ALL).title("Details");
    let text = match app.selected_finding() {
        Some(finding) => vec![
            Line::from(vec![
                Span::styled(format!("{} ({}) ", finding.service, finding.port), Style::default().bold()),
                Span::styled(finding.risk_level.to_string(), risk_style(finding.risk_level)),
            ]),
            Line::from(vec!["WHY: ".yellow().bold(), Span::raw(finding.reason.clone())]),
            Line::from(vec!["FIX: ".yellow().bold(), Span::raw(finding.mitigation.clone())]),
        ],
        None => vec![Line::from("Select a port above to see details.")],
    };
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }).block(detail_block), details_area);
}
