// src/ui/widgets/mod.rs

pub mod analysis_view; // Findings table and the selected finding's details.
pub mod disclaimer_popup;
pub mod footer;
pub mod input;
pub mod scenarios; // Attack-scenario narrative.
pub mod summary;

use ratatui::style::{Color, Style};
use surface_mapper::{Rating, RiskLevel};

pub fn risk_style(level: RiskLevel) -> Style {
    match level {
        RiskLevel::High => Style::default().fg(Color::Red),
        RiskLevel::Medium => Style::default().fg(Color::Yellow),
        RiskLevel::Low => Style::default().fg(Color::Green),
    }
}

pub fn rating_style(rating: Rating) -> Style {
    match rating {
        Rating::Excellent => Style::default().fg(Color::Green),
        Rating::Good => Style::default().fg(Color::Cyan),
        Rating::Fair => Style::default().fg(Color::Yellow),
        Rating::Poor => Style::default().fg(Color::LightRed),
        Rating::Critical => Style::default().fg(Color::Red),
    }
}
