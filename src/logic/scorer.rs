use super::rules::{
    category::{ColorRule, TextureRule},
    crop::CropAdjustmentRule,
    moisture::MoistureRule,
    organic::OrganicMatterRule,
    rainfall::RainfallRule,
    Rule, Tally,
};
use crate::error::{Ai4FarmError, Result};
use crate::models::{RiskCategory, ScoreResult, SoilSample, WeightConfig};

/// Weighted additive soil health scorer.
///
/// Holds an immutable, validated [`WeightConfig`]; every call to
/// [`SoilScorer::evaluate`] is independent and deterministic.
pub struct SoilScorer {
    weights: WeightConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl SoilScorer {
    pub fn new(weights: WeightConfig) -> Result<Self> {
        weights.validate()?;
        Ok(Self {
            weights,
            rules: default_rules(),
        })
    }

    /// Score a sample. Out-of-range numeric fields are rejected before any
    /// rule runs.
    pub fn evaluate(&self, sample: &SoilSample) -> Result<ScoreResult> {
        sample.check_ranges(&self.weights.ranges)?;

        let mut tally = Tally::default();
        tally.add("base", self.weights.base_score);
        for rule in &self.rules {
            rule.apply(sample, &self.weights, &mut tally);
        }

        let raw_score = tally.total();
        if !raw_score.is_finite() {
            return Err(Ai4FarmError::Config(format!(
                "weights produce a non-finite score ({}) for this sample",
                raw_score
            )));
        }
        let score = raw_score.clamp(0.0, 100.0).round() as u8;
        let risk_category = RiskCategory::from_score(score, &self.weights.risk);
        let (contributions, factor_statuses) = tally.into_parts();

        tracing::debug!(
            score,
            raw_score,
            risk = %risk_category,
            "evaluated soil sample"
        );

        Ok(ScoreResult {
            score,
            raw_score,
            risk_category,
            factor_statuses,
            contributions,
        })
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for SoilScorer {
    fn default() -> Self {
        Self {
            weights: WeightConfig::default(),
            rules: default_rules(),
        }
    }
}

fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ColorRule),
        Box::new(TextureRule),
        Box::new(OrganicMatterRule),
        Box::new(MoistureRule),
        Box::new(RainfallRule),
        Box::new(CropAdjustmentRule),
    ]
}

/// One-shot evaluation against an arbitrary configuration.
pub fn evaluate(sample: &SoilSample, weights: &WeightConfig) -> Result<ScoreResult> {
    SoilScorer::new(weights.clone())?.evaluate(sample)
}
