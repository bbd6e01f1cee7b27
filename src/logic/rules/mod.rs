pub mod category;
pub mod crop;
pub mod moisture;
pub mod organic;
pub mod rainfall;

use crate::models::{Band, Contribution, Factor, FactorStatus, SoilSample, WeightConfig};
use std::collections::BTreeMap;

/// Trait for scoring rules. Each rule adds zero or more terms to the tally.
pub trait Rule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Add this rule's contribution for the sample
    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally);
}

/// Running sum of contributions and the factor statuses recorded along the way.
#[derive(Debug, Default)]
pub struct Tally {
    contributions: Vec<Contribution>,
    statuses: BTreeMap<Factor, FactorStatus>,
}

impl Tally {
    pub fn add(&mut self, source: impl Into<String>, points: f64) {
        self.contributions.push(Contribution::new(source, points));
    }

    /// Linear terms are only recorded when the configuration enables them.
    pub fn add_linear(&mut self, source: &str, value: f64, per_unit: f64) {
        if per_unit != 0.0 {
            self.add(format!("{} ({} x {})", source, value, per_unit), value * per_unit);
        }
    }

    pub fn set_status(&mut self, factor: Factor, status: FactorStatus) {
        self.statuses.insert(factor, status);
    }

    pub fn total(&self) -> f64 {
        self.contributions.iter().map(|c| c.points).sum()
    }

    pub fn into_parts(self) -> (Vec<Contribution>, BTreeMap<Factor, FactorStatus>) {
        (self.contributions, self.statuses)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTier {
    Below,
    Within,
    Above,
}

/// Place a value in its band. Both thresholds belong to the `Within` tier.
pub fn classify_band(value: f64, band: &Band) -> (BandTier, f64) {
    if value < band.low {
        (BandTier::Below, band.below)
    } else if value > band.high {
        (BandTier::Above, band.above)
    } else {
        (BandTier::Within, band.within)
    }
}
