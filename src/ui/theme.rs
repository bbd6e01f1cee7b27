use crate::models::{FactorStatus, RiskCategory};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // Base colors
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;

    // Risk colors
    pub const HEALTHY: Color = Color::Green;
    pub const MODERATE: Color = Color::Yellow;
    pub const DEGRADED: Color = Color::Red;

    // Styles
    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn risk_color(category: RiskCategory) -> Color {
        match category {
            RiskCategory::Healthy => Self::HEALTHY,
            RiskCategory::Moderate => Self::MODERATE,
            RiskCategory::Degraded => Self::DEGRADED,
        }
    }

    pub fn risk(category: RiskCategory) -> Style {
        Style::default()
            .fg(Self::risk_color(category))
            .add_modifier(Modifier::BOLD)
    }

    pub fn status(status: FactorStatus) -> Style {
        if status.is_favourable() {
            Style::default().fg(Self::HEALTHY)
        } else {
            Style::default().fg(Self::MODERATE)
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }
}
