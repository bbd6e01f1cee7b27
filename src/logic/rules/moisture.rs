use super::{classify_band, BandTier, Rule, Tally};
use crate::models::{Factor, FactorStatus, SoilSample, WeightConfig};

/// Soil moisture rule
///
/// - Too dry: moisture < low (largest penalty in every preset)
/// - Too wet: moisture > high
/// - Optimal: low..=high
pub struct MoistureRule;

impl Rule for MoistureRule {
    fn id(&self) -> &'static str {
        "moisture"
    }

    fn name(&self) -> &'static str {
        "Soil Moisture"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        let band = &weights.moisture;
        tally.add_linear("moisture", sample.moisture_pct, band.linear);

        let (tier, points) = classify_band(sample.moisture_pct, band);
        let status = match tier {
            BandTier::Below => FactorStatus::TooDry,
            BandTier::Within => FactorStatus::OptimalMoisture,
            BandTier::Above => FactorStatus::TooWet,
        };

        tally.add(format!("moisture: {}", status), points);
        tally.set_status(Factor::Moisture, status);
    }
}
