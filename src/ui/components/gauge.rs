use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct GaugeWidget<'a> {
    title: &'a str,
    value: f64,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: f64, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    /// Number of filled cells for a bar of `width` cells.
    fn filled(&self, width: u16) -> u16 {
        let ratio = ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        (width as f64 * ratio) as u16
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let color = self.get_color(self.value);
        let value_str = format!("{:.0}{}", self.value, self.unit);

        let value_line = Line::from(vec![Span::styled(value_str, Style::default().fg(color))]);
        Paragraph::new(value_line).render(inner, buf);

        // Render bar if space allows
        if inner.height >= 2 {
            let bar_area = Rect {
                x: inner.x,
                y: inner.y + 1,
                width: inner.width,
                height: 1,
            };

            let filled = self.filled(bar_area.width);

            for x in bar_area.x..bar_area.x + bar_area.width {
                let ch = if x < bar_area.x + filled { '█' } else { '░' };
                buf[(x, bar_area.y)].set_char(ch).set_fg(color);
            }
        }
    }
}

/// Score gauge colored by the configured risk thresholds.
pub fn score_gauge(title: &str, score: u8, degraded_below: u8, healthy_at_least: u8) -> GaugeWidget<'_> {
    GaugeWidget::new(title, score as f64, "/100")
        .range(0.0, 100.0)
        .thresholds(vec![
            (0.0, Theme::DEGRADED),
            (degraded_below as f64, Theme::MODERATE),
            (healthy_at_least as f64, Theme::HEALTHY),
        ])
}
