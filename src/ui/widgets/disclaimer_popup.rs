// src/ui/widgets/disclaimer_popup.rs

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the authorized-use notice as a centered modal over the rest of the UI.
pub fn render_disclaimer_popup(frame: &mut Frame, area: Rect) {
    let disclaimer_text = Text::from(vec![
        Line::from("EDUCATIONAL USE ONLY".bold().yellow()),
        Line::from(""),
        Line::from("Surface Mapper probes TCP ports on a target host, classifies the services it finds by risk and describes how an attacker could use them."),
        Line::from(""),
        Line::from("Only scan systems you own or have explicit, written permission to test. Unauthorized network scanning is illegal in many jurisdictions."),
        Line::from(""),
        Line::from("By continuing you agree that:"),
        Line::from("1. You are authorized to scan every target you enter."),
        Line::from("2. Reports produced here reflect the target's state at scan time only."),
        Line::from("3. The authors accept NO liability for misuse of this program."),
        Line::from(""),
        Line::from("Press ".bold() + "Enter".bold().yellow() + " to Acknowledge and Continue".bold()),
    ]);

    let block = Block::default()
        .title("Disclaimer")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let popup_area = centered_rect(70, 60, area);

    let popup = Paragraph::new(disclaimer_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    // Clear first so the report underneath does not bleed through.
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// A `percent_x` by `percent_y` rectangle centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
