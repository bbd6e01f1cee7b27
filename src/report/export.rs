use super::Report;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write;

pub const DISCLAIMER: &str = "This report is an illustrative heuristic estimate and is not a \
                              substitute for laboratory soil testing.";

const DISCLAIMER_FR: &str = "Ce rapport est une estimation heuristique indicative et ne remplace \
                             pas une analyse de sol en laboratoire.";

/// Exportable summary document. The returned bytes are always 7-bit ASCII.
pub fn export_document(report: &Report<'_>, generated_at: DateTime<Utc>) -> Vec<u8> {
    let lang = report.language();
    let result = report.result;
    let mut doc = String::new();

    let _ = writeln!(doc, "AI4Farm - {}", report.title());
    let _ = writeln!(
        doc,
        "{}: {}",
        lang.pick("Generated", "Généré le"),
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    if let Some(location) = report.options.location {
        let _ = writeln!(doc, "{}: {}", lang.pick("Location", "Position"), location);
    }
    doc.push('\n');

    let _ = writeln!(
        doc,
        "{}: {}/100",
        lang.pick("Soil Health Score", "Score de santé du sol"),
        result.score
    );
    let _ = writeln!(
        doc,
        "{}: {}",
        lang.pick("Risk Level", "Niveau de risque"),
        result.risk_category.label(lang)
    );
    doc.push('\n');

    for (label, status) in report.status_lines() {
        let _ = writeln!(doc, "{}: {}", label, status);
    }
    doc.push('\n');

    let _ = writeln!(doc, "{}", lang.pick("Inputs", "Données saisies"));
    for (label, value) in report.input_lines() {
        let _ = writeln!(doc, "  {}: {}", label, value);
    }
    doc.push('\n');

    let _ = writeln!(doc, "{}", lang.pick("Recommendations", "Recommandations"));
    for bullet in report.recommendations() {
        let _ = writeln!(doc, "  - {}", bullet);
    }
    doc.push('\n');

    let _ = writeln!(doc, "{}", lang.pick(DISCLAIMER, DISCLAIMER_FR));

    to_ascii(&doc).into_bytes()
}

/// Fold accented Latin letters to their base letter; anything else
/// outside ASCII becomes '?'.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                return c;
            }
            match c {
                'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
                'À' | 'Á' | 'Â' | 'Ä' | 'Ã' | 'Å' => 'A',
                'ç' => 'c',
                'Ç' => 'C',
                'è' | 'é' | 'ê' | 'ë' => 'e',
                'È' | 'É' | 'Ê' | 'Ë' => 'E',
                'ì' | 'í' | 'î' | 'ï' => 'i',
                'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
                'ñ' => 'n',
                'Ñ' => 'N',
                'ò' | 'ó' | 'ô' | 'ö' | 'õ' => 'o',
                'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' => 'O',
                'ù' | 'ú' | 'û' | 'ü' => 'u',
                'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
                'ÿ' => 'y',
                '’' | '‘' => '\'',
                '–' | '—' => '-',
                _ => '?',
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Language, Location};
    use crate::report::{fixtures, ReportOptions};
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn export_contains_required_sections() {
        let (sample, result) = fixtures::healthy();
        let options = ReportOptions {
            location: Some(Location::new(5.6037, -0.187).unwrap()),
            ..ReportOptions::default()
        };
        let bytes = export_document(&Report::new(&sample, &result, options), timestamp());
        let doc = String::from_utf8(bytes).unwrap();

        assert!(doc.starts_with("AI4Farm - Soil Health Report\n"));
        assert!(doc.contains("Generated: 2025-03-14T09:30:00Z"));
        assert!(doc.contains("Location: 5.6037, -0.1870"));
        assert!(doc.contains("Soil Health Score: 95/100"));
        assert!(doc.contains("Risk Level: Low Risk - Healthy Soil"));
        assert!(doc.contains("Moisture: Optimal moisture"));
        assert!(doc.contains("  Soil color: Dark"));
        assert!(doc.contains("  Rainfall (last 7 days): 60 mm"));
        assert!(doc.contains(DISCLAIMER));
    }

    #[test]
    fn french_export_is_ascii() {
        let (sample, result) = fixtures::degraded();
        let options = ReportOptions {
            language: Language::French,
            ..ReportOptions::default()
        };
        let bytes = export_document(&Report::new(&sample, &result, options), timestamp());
        assert!(bytes.is_ascii());
        let doc = String::from_utf8(bytes).unwrap();
        assert!(doc.contains("Rapport sur la sante du sol"));
        assert!(doc.contains("Risque eleve - Sol degrade"));
        assert!(!doc.contains("Location"));
    }

    #[test]
    fn to_ascii_folds_and_replaces() {
        assert_eq!(to_ascii("Humidité élevée"), "Humidite elevee");
        assert_eq!(to_ascii("ok ✓"), "ok ?");
        assert_eq!(to_ascii("plain"), "plain");
    }
}
