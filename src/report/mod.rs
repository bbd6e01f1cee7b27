//! Report rendering for a scored sample.
//!
//! Every renderer takes the language and location explicitly through
//! [`ReportOptions`].

pub mod export;
pub mod text;

pub use export::export_document;
pub use text::render_text;

use crate::error::Result;
use crate::logic::recommendations;
use crate::models::{Factor, Language, Location, ScoreResult, SoilSample};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportOptions {
    pub language: Language,
    pub location: Option<Location>,
    /// Include the per-term score breakdown.
    pub explain: bool,
}

/// Everything a renderer needs, borrowed from one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub sample: &'a SoilSample,
    pub result: &'a ScoreResult,
    pub options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(sample: &'a SoilSample, result: &'a ScoreResult, options: ReportOptions) -> Self {
        Self {
            sample,
            result,
            options,
        }
    }

    pub fn language(&self) -> Language {
        self.options.language
    }

    pub fn title(&self) -> &'static str {
        self.language()
            .pick("Soil Health Report", "Rapport sur la santé du sol")
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        recommendations(self.result.risk_category, self.language())
    }

    /// Localised (label, status) pairs in factor order.
    pub fn status_lines(&self) -> Vec<(&'static str, &'static str)> {
        let lang = self.language();
        Factor::ALL
            .iter()
            .filter_map(|factor| {
                self.result
                    .status(*factor)
                    .map(|status| (factor.label(lang), status.label(lang)))
            })
            .collect()
    }

    /// Localised (label, value) pairs describing the entered sample.
    pub fn input_lines(&self) -> Vec<(&'static str, String)> {
        let lang = self.language();
        let s = self.sample;
        vec![
            (lang.pick("Soil color", "Couleur du sol"), s.color.to_string()),
            (lang.pick("Soil texture", "Texture du sol"), s.texture.to_string()),
            (lang.pick("Crop type", "Culture"), s.crop.to_string()),
            (
                lang.pick("Soil moisture", "Humidité du sol"),
                format!("{}%", s.moisture_pct),
            ),
            (
                lang.pick("Organic matter", "Matière organique"),
                format!("{}%", s.organic_pct),
            ),
            (
                lang.pick("Rainfall (last 7 days)", "Pluie (7 derniers jours)"),
                format!("{} mm", s.rainfall_mm),
            ),
        ]
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    language: &'static str,
    sample: &'a SoilSample,
    result: &'a ScoreResult,
    risk_label: &'static str,
    recommendations: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
}

pub fn render_json(report: &Report<'_>) -> Result<String> {
    let payload = JsonReport {
        language: report.language().code(),
        sample: report.sample,
        result: report.result,
        risk_label: report.result.risk_category.label(report.language()),
        recommendations: report.recommendations(),
        location: report.options.location,
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_report_contains_score_and_advice() {
        let (sample, result) = fixtures::healthy();
        let report = Report::new(&sample, &result, ReportOptions::default());
        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["score"], 95);
        assert_eq!(value["result"]["risk_category"], "Healthy");
        assert_eq!(value["result"]["factor_statuses"]["moisture"], "Optimal moisture");
        assert_eq!(
            value["result"]["factor_statuses"]["organic_matter"],
            "High organic content"
        );
        assert_eq!(value["result"]["factor_statuses"]["rainfall"], "Healthy rainfall");
        assert_eq!(value["recommendations"][0], "Soil is healthy");
        assert_eq!(value["language"], "en");
        assert!(value.get("location").is_none());
    }

    #[test]
    fn json_statuses_use_factor_names_and_labels() {
        let (sample, result) = fixtures::degraded();
        let report = Report::new(&sample, &result, ReportOptions::default());
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(
            value["result"]["factor_statuses"],
            serde_json::json!({
                "moisture": "Too dry",
                "organic_matter": "Low organic matter",
                "rainfall": "Insufficient rainfall"
            })
        );
    }

    #[test]
    fn status_lines_follow_language() {
        let (sample, result) = fixtures::degraded();
        let options = ReportOptions {
            language: Language::French,
            ..ReportOptions::default()
        };
        let report = Report::new(&sample, &result, options);
        let lines = report.status_lines();
        assert_eq!(lines[0], ("Humidité", "Trop sec"));
        assert_eq!(lines.len(), 3);
    }
}
