use crate::report::Report;
use crate::ui::components::score_gauge;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct ReportScreen<'a> {
    report: &'a Report<'a>,
    degraded_below: u8,
    healthy_at_least: u8,
}

impl<'a> ReportScreen<'a> {
    pub fn new(report: &'a Report<'a>) -> Self {
        Self {
            report,
            degraded_below: 40,
            healthy_at_least: 70,
        }
    }

    pub fn thresholds(mut self, degraded_below: u8, healthy_at_least: u8) -> Self {
        self.degraded_below = degraded_below;
        self.healthy_at_least = healthy_at_least;
        self
    }
}

impl Widget for ReportScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Score gauge
                Constraint::Length(1), // Risk
                Constraint::Length(5), // Factors
                Constraint::Min(4),    // Recommendations
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let lang = self.report.language();
        let result = self.report.result;

        // Title
        let mut title = vec![Span::styled(
            format!("AI4Farm - {}", self.report.title()),
            Theme::title(),
        )];
        if let Some(location) = self.report.options.location {
            title.push(Span::styled(format!("  ({})", location), Theme::dim()));
        }
        Paragraph::new(Line::from(title)).render(chunks[0], buf);

        score_gauge(
            lang.pick("Soil Health Score", "Score de santé du sol"),
            result.score,
            self.degraded_below,
            self.healthy_at_least,
        )
        .render(chunks[1], buf);

        let risk = Line::from(vec![
            Span::styled(
                format!("{}: ", lang.pick("Risk Level", "Niveau de risque")),
                Theme::dim(),
            ),
            Span::styled(
                format!(
                    "{} {}",
                    result.risk_category.symbol(),
                    result.risk_category.label(lang)
                ),
                Theme::risk(result.risk_category),
            ),
        ]);
        Paragraph::new(risk).render(chunks[2], buf);

        self.render_factors(chunks[3], buf);
        self.render_recommendations(chunks[4], buf);

        // Navigation
        let nav = Line::from(vec![
            Span::styled("[q]", Theme::nav_key()),
            Span::styled(lang.pick("Quit ", "Quitter "), Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled(lang.pick("Close", "Fermer"), Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[5], buf);
    }
}

impl ReportScreen<'_> {
    fn render_factors(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.report.language();
        let block = Block::default()
            .title(lang.pick("Factors", "Facteurs"))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .report
            .result
            .factor_statuses
            .iter()
            .map(|(factor, status)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", factor.label(lang)), Theme::header()),
                    Span::styled(status.label(lang), Theme::status(*status)),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_recommendations(&self, area: Rect, buf: &mut Buffer) {
        let lang = self.report.language();
        let block = Block::default()
            .title(lang.pick("Recommendations", "Recommandations"))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .report
            .recommendations()
            .iter()
            .map(|bullet| Line::from(Span::styled(format!("• {}", bullet), Theme::normal())))
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
