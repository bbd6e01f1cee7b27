use super::{classify_band, BandTier, Rule, Tally};
use crate::models::{Factor, FactorStatus, SoilSample, WeightConfig};

/// Rainfall over the last 7 days.
///
/// Too little rain stresses seedlings; too much leaches nutrients and
/// waterlogs heavy soils.
pub struct RainfallRule;

impl Rule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn name(&self) -> &'static str {
        "Rainfall"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        let band = &weights.rainfall;
        tally.add_linear("rainfall", sample.rainfall_mm, band.linear);

        let (tier, points) = classify_band(sample.rainfall_mm, band);
        let status = match tier {
            BandTier::Below => FactorStatus::InsufficientRainfall,
            BandTier::Within => FactorStatus::HealthyRainfall,
            BandTier::Above => FactorStatus::ExcessiveRainfall,
        };

        tally.add(format!("rainfall: {}", status), points);
        tally.set_status(Factor::Rainfall, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, SoilColor, SoilTexture};

    fn apply(rainfall: f64, weights: &WeightConfig) -> (FactorStatus, f64) {
        let sample = SoilSample::new(
            SoilColor::Brown,
            SoilTexture::Loamy,
            50.0,
            4.0,
            rainfall,
            Crop::Other,
        );
        let mut tally = Tally::default();
        RainfallRule.apply(&sample, weights, &mut tally);
        let total = tally.total();
        let (_, statuses) = tally.into_parts();
        (statuses[&Factor::Rainfall], total)
    }

    #[test]
    fn classic_thresholds() {
        let w = WeightConfig::classic();
        assert_eq!(apply(19.0, &w), (FactorStatus::InsufficientRainfall, -10.0));
        assert_eq!(apply(20.0, &w), (FactorStatus::HealthyRainfall, 5.0));
        assert_eq!(apply(150.0, &w), (FactorStatus::HealthyRainfall, 5.0));
        assert_eq!(apply(151.0, &w), (FactorStatus::ExcessiveRainfall, -5.0));
    }

    #[test]
    fn weighted_linear_term() {
        let w = WeightConfig::weighted();
        let (status, total) = apply(60.0, &w);
        assert_eq!(status, FactorStatus::HealthyRainfall);
        assert!((total - 4.0).abs() < 1e-9);
        assert_eq!(apply(10.0, &w).0, FactorStatus::HealthyRainfall);
        assert_eq!(apply(181.0, &w).0, FactorStatus::ExcessiveRainfall);
    }
}
