use super::{Rule, Tally};
use crate::models::{Factor, FactorStatus, SoilSample, WeightConfig};

/// Organic matter rule
///
/// Tiers:
/// - Low: organic < low_below
/// - High: organic >= high_at_least
/// - Average: everything in between
///
/// An optional linear term per percentage point is added on top.
pub struct OrganicMatterRule;

impl Rule for OrganicMatterRule {
    fn id(&self) -> &'static str {
        "organic_matter"
    }

    fn name(&self) -> &'static str {
        "Organic Matter"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        let tiers = &weights.organic;
        let organic = sample.organic_pct;

        tally.add_linear("organic", organic, tiers.linear);

        let (status, points) = if organic < tiers.low_below {
            (FactorStatus::LowOrganic, tiers.low)
        } else if organic >= tiers.high_at_least {
            (FactorStatus::HighOrganic, tiers.high)
        } else {
            (FactorStatus::AverageOrganic, tiers.mid)
        };

        tally.add(format!("organic: {}", status), points);
        tally.set_status(Factor::OrganicMatter, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Crop, SoilColor, SoilTexture};

    fn status_for(organic: f64, weights: &WeightConfig) -> (FactorStatus, f64) {
        let sample = SoilSample::new(
            SoilColor::Brown,
            SoilTexture::Loamy,
            50.0,
            organic,
            60.0,
            Crop::Other,
        );
        let mut tally = Tally::default();
        OrganicMatterRule.apply(&sample, weights, &mut tally);
        let total = tally.total();
        let (_, statuses) = tally.into_parts();
        (statuses[&Factor::OrganicMatter], total)
    }

    #[test]
    fn classic_tiers() {
        let w = WeightConfig::classic();
        assert_eq!(status_for(2.9, &w), (FactorStatus::LowOrganic, -10.0));
        assert_eq!(status_for(3.0, &w), (FactorStatus::AverageOrganic, 5.0));
        assert_eq!(status_for(4.9, &w), (FactorStatus::AverageOrganic, 5.0));
        assert_eq!(status_for(5.0, &w), (FactorStatus::HighOrganic, 10.0));
    }

    #[test]
    fn weighted_adds_linear_term() {
        let w = WeightConfig::weighted();
        let (status, total) = status_for(6.0, &w);
        assert_eq!(status, FactorStatus::HighOrganic);
        assert!((total - 27.0).abs() < 1e-9);

        let (status, total) = status_for(2.0, &w);
        assert_eq!(status, FactorStatus::AverageOrganic);
        assert!((total - 4.0).abs() < 1e-9);
    }
}
