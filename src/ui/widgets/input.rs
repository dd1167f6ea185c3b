// src/ui/widgets/input.rs
use crate::app::{App, AppState};
use ratatui::{prelude::*, widgets::{Block, Borders, Paragraph}};

/// Renders the target input box. Validation errors replace the title.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = match &app.input_error {
        Some(err) => Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!("Target IP[:start-end] - {err}")),
        None => Block::default().borders(Borders::ALL).title("Target IP[:start-end] (default ports 1-1024)"),
    };
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only while typing.
    if let AppState::Idle = app.state {
        if !app.show_disclaimer {
            frame.set_cursor_position((area.x + app.input.len() as u16 + 1, area.y + 1));
        }
    }
}
