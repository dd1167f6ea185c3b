// src/ui/widgets/summary.rs

use super::{rating_style, risk_style};
use crate::app::{App, AppState};
use strum::IntoEnumIterator;
use surface_mapper::RiskLevel;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

/// Renders the executive summary: score, rating, risk breakdown and priority actions.
///
/// Nothing but the frame is drawn until a scan has finished.
pub fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary_container = Block::default().borders(Borders::ALL).title("Executive Summary");
    frame.render_widget(summary_container, area);

    let summary_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4), // Score & Rating section
            Constraint::Length(1), // Gauge chart
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Risk breakdown
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Priority actions
        ])
        .split(area);

    let (AppState::Finished, Some(report)) = (&app.state, &app.scan_report) else {
        return;
    };
    let summary = &report.executive_summary;
    let style = rating_style(summary.rating);

    // --- Score & Rating Section ---
    let score_text = Text::from(vec![
        Line::from(Span::styled(format!("Security Score ({})", report.target), Style::default().bold())),
        Line::from(format!("{}/100 ({})", summary.security_score.value(), summary.rating)).style(style),
        Line::from(summary.rating_description.as_str()).style(Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(score_text).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        summary_chunks[0],
    );

    let score_gauge = Gauge::default()
        .percent(u16::from(summary.security_score.value()))
        .label("")
        .gauge_style(style);
    frame.render_widget(score_gauge, summary_chunks[1]);

    // --- Risk Breakdown Section ---
    let breakdown_block = Block::default().title("RISK BREAKDOWN".bold());
    let mut breakdown: Vec<Line> = RiskLevel::iter()
        .map(|level| {
            Line::from(vec![
                Span::raw(format!("{:<8}", format!("{level}:"))),
                Span::styled(summary.count_for(level).to_string(), risk_style(level)),
            ])
        })
        .collect();
    breakdown.push(Line::from(format!(
        "Open {} of {} ports ({}-{})",
        report.scan_metadata.open_ports_count,
        report.scan_metadata.total_ports_scanned,
        report.scan_metadata.start_port,
        report.scan_metadata.end_port
    )));
    frame.render_widget(Paragraph::new(breakdown).block(breakdown_block), summary_chunks[3]);

    // --- Priority Actions Section ---
    let actions_block = Block::default().title("PRIORITY ACTIONS".bold());
    let actions: Vec<Line> = summary
        .priority_actions
        .iter()
        .map(|a| Line::from(vec![Span::styled("› ", Style::default().fg(Color::Cyan)), Span::raw(a.as_str())]))
        .collect();
    frame.render_widget(
        Paragraph::new(actions).block(actions_block).wrap(Wrap { trim: true }),
        summary_chunks[5],
    );
}
