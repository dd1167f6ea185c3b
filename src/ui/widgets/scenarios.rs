// src/ui/widgets/scenarios.rs

use crate::app::{App, AppState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Scrollbar, ScrollbarOrientation},
};

/// Renders the attack-scenario narrative, one list entry per scenario.
pub fn render_scenarios(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Attack Scenarios (PgUp/PgDn)");

    let Some(report) = app.scan_report.as_ref().filter(|_| matches!(app.state, AppState::Finished)) else {
        frame.render_widget(block, area);
        return;
    };

    let width = block.inner(area).width.saturating_sub(2).max(1) as usize;
    let items: Vec<ListItem> = report
        .attack_simulation
        .iter()
        .skip(app.scenario_scroll)
        .map(|scenario| {
            let style = if scenario.starts_with("CRITICAL") {
                Style::default().fg(Color::Red)
            } else if scenario.starts_with("HIGH") {
                Style::default().fg(Color::Yellow)
            } else if scenario.starts_with("RECOMMENDED") {
                Style::default().fg(Color::Green)
            } else {
                Style::default().bold()
            };
            let mut lines: Vec<Line> = wrap(scenario, width)
                .into_iter()
                .map(|l| Line::styled(l, style))
                .collect();
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut app.scenario_scroll_state,
    );
}

/// Greedy word wrap; `List` items do not wrap on their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("unbreakableword", 4), vec!["unbreakableword"]);
    }
}
