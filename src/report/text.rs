use super::Report;
use std::fmt::Write;

/// Plain-text report for the terminal.
pub fn render_text(report: &Report<'_>) -> String {
    let lang = report.language();
    let result = report.result;
    let mut out = String::new();

    let _ = writeln!(out, "{}", report.title());
    let _ = writeln!(out, "{}", "=".repeat(report.title().chars().count()));
    let _ = writeln!(
        out,
        "{}: {}/100",
        lang.pick("Soil Health Score", "Score de santé du sol"),
        result.score
    );
    let _ = writeln!(
        out,
        "{}: {} {}",
        lang.pick("Risk Level", "Niveau de risque"),
        result.risk_category.symbol(),
        result.risk_category.label(lang)
    );
    if let Some(location) = report.options.location {
        let _ = writeln!(out, "{}: {}", lang.pick("Location", "Position"), location);
    }
    out.push('\n');

    for (label, status) in report.status_lines() {
        let _ = writeln!(out, "  - {}: {}", label, status);
    }
    out.push('\n');

    let _ = writeln!(out, "{}", lang.pick("Recommendations", "Recommandations"));
    for bullet in report.recommendations() {
        let _ = writeln!(out, "  - {}", bullet);
    }

    if report.options.explain {
        out.push('\n');
        let _ = writeln!(
            out,
            "{}",
            lang.pick("Score breakdown", "Détail du score")
        );
        for c in &result.contributions {
            let _ = writeln!(out, "  {:>+8.2}  {}", c.points, c.source);
        }
        let _ = writeln!(
            out,
            "  {:>+8.2}  {}",
            result.raw_score,
            lang.pick("total before clamping", "total avant bornage")
        );
    }

    out
}
