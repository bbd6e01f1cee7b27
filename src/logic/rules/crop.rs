use super::{Rule, Tally};
use crate::models::{SoilSample, WeightConfig};

/// Applies every configured crop rule matching the sample's crop.
///
/// A rule fires when `crop` matches and `organic_pct < organic_below`.
/// Maize is a heavy feeder, so the weighted preset penalises it on
/// low-organic soil.
pub struct CropAdjustmentRule;

impl Rule for CropAdjustmentRule {
    fn id(&self) -> &'static str {
        "crop"
    }

    fn name(&self) -> &'static str {
        "Crop Adjustments"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        for rule in weights
            .crop_rules
            .iter()
            .filter(|r| r.crop == sample.crop && sample.organic_pct < r.organic_below)
        {
            tracing::trace!(rule = %rule.name, points = rule.points, "crop rule fired");
            tally.add(format!("crop rule: {}", rule.name), rule.points);
        }
    }
}
