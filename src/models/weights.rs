use crate::error::{Ai4FarmError, Result};
use crate::models::{Crop, SoilColor, SoilTexture};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRanges {
    pub moisture: Range,
    pub organic: Range,
    pub rainfall: Range,
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            moisture: Range::new(0.0, 100.0),
            organic: Range::new(0.0, 10.0),
            rainfall: Range::new(0.0, 200.0),
        }
    }
}

/// Low/optimal/high banding used for moisture and rainfall.
///
/// `value < low` scores `below`, `value > high` scores `above`, anything
/// in between (thresholds included) scores `within`. `linear` is added
/// per unit of the raw value on top of the tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
    pub below: f64,
    pub within: f64,
    pub above: f64,
    #[serde(default)]
    pub linear: f64,
}

/// Three-tier organic matter scheme.
///
/// `organic < low_below` scores `low`, `organic >= high_at_least` scores
/// `high`, otherwise `mid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrganicTiers {
    pub low_below: f64,
    pub high_at_least: f64,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    #[serde(default)]
    pub linear: f64,
}

/// Crop-specific adjustment applied when organic matter is under a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRule {
    pub name: String,
    pub crop: Crop,
    pub organic_below: f64,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub degraded_below: u8,
    pub healthy_at_least: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            degraded_below: 40,
            healthy_at_least: 70,
        }
    }
}

/// Every constant the scorer uses. Presets are named instances of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub base_score: f64,
    pub color_weights: BTreeMap<SoilColor, f64>,
    #[serde(default = "default_multiplier")]
    pub color_multiplier: f64,
    pub texture_weights: BTreeMap<SoilTexture, f64>,
    #[serde(default = "default_multiplier")]
    pub texture_multiplier: f64,
    pub organic: OrganicTiers,
    pub moisture: Band,
    pub rainfall: Band,
    #[serde(default)]
    pub crop_rules: Vec<CropRule>,
    #[serde(default)]
    pub risk: RiskThresholds,
    #[serde(default)]
    pub ranges: InputRanges,
}

fn default_multiplier() -> f64 {
    1.0
}

impl WeightConfig {
    /// Integer base-50 additive scheme shipped with the first release.
    pub fn classic() -> Self {
        Self {
            base_score: 50.0,
            color_weights: base_color_weights(),
            color_multiplier: 1.0,
            texture_weights: base_texture_weights(),
            texture_multiplier: 1.0,
            organic: OrganicTiers {
                low_below: 3.0,
                high_at_least: 5.0,
                low: -10.0,
                mid: 5.0,
                high: 10.0,
                linear: 0.0,
            },
            moisture: Band {
                low: 30.0,
                high: 70.0,
                below: -15.0,
                within: 5.0,
                above: -5.0,
                linear: 0.0,
            },
            rainfall: Band {
                low: 20.0,
                high: 150.0,
                below: -10.0,
                within: 5.0,
                above: -5.0,
                linear: 0.0,
            },
            crop_rules: Vec::new(),
            risk: RiskThresholds::default(),
            ranges: InputRanges::default(),
        }
    }

    /// Zero-based scheme with multipliers and linear terms on every factor.
    pub fn weighted() -> Self {
        Self {
            base_score: 0.0,
            color_weights: base_color_weights(),
            color_multiplier: 1.2,
            texture_weights: base_texture_weights(),
            texture_multiplier: 1.5,
            organic: OrganicTiers {
                low_below: 2.0,
                high_at_least: 5.0,
                low: -10.0,
                mid: 0.0,
                high: 15.0,
                linear: 2.0,
            },
            moisture: Band {
                low: 20.0,
                high: 80.0,
                below: -5.0,
                within: 2.0,
                above: -3.0,
                linear: 0.1,
            },
            rainfall: Band {
                low: 10.0,
                high: 180.0,
                below: -5.0,
                within: 1.0,
                above: -3.0,
                linear: 0.05,
            },
            crop_rules: vec![CropRule {
                name: "maize_low_organic".into(),
                crop: Crop::Maize,
                organic_below: 3.0,
                points: -3.0,
            }],
            risk: RiskThresholds::default(),
            ranges: InputRanges {
                moisture: Range::new(0.0, 100.0),
                organic: Range::new(0.0, 15.0),
                rainfall: Range::new(0.0, 300.0),
            },
        }
    }

    pub fn color_weight(&self, color: SoilColor) -> f64 {
        self.color_weights.get(&color).copied().unwrap_or(0.0)
    }

    pub fn texture_weight(&self, texture: SoilTexture) -> f64 {
        self.texture_weights.get(&texture).copied().unwrap_or(0.0)
    }

    /// Check internal consistency. Thresholds must be ordered and every number finite.
    pub fn validate(&self) -> Result<()> {
        let mut numbers = vec![
            ("base_score", self.base_score),
            ("color_multiplier", self.color_multiplier),
            ("texture_multiplier", self.texture_multiplier),
            ("organic.low_below", self.organic.low_below),
            ("organic.high_at_least", self.organic.high_at_least),
            ("organic.low", self.organic.low),
            ("organic.mid", self.organic.mid),
            ("organic.high", self.organic.high),
            ("organic.linear", self.organic.linear),
        ];
        for (prefix, band) in [("moisture", &self.moisture), ("rainfall", &self.rainfall)] {
            for (name, value) in [
                ("low", band.low),
                ("high", band.high),
                ("below", band.below),
                ("within", band.within),
                ("above", band.above),
                ("linear", band.linear),
            ] {
                if !value.is_finite() {
                    return Err(Ai4FarmError::Config(format!(
                        "{}.{} must be a finite number",
                        prefix, name
                    )));
                }
            }
            if band.low > band.high {
                return Err(Ai4FarmError::Config(format!(
                    "{} band low ({}) exceeds high ({})",
                    prefix, band.low, band.high
                )));
            }
        }
        numbers.extend(self.color_weights.values().map(|w| ("color_weights", *w)));
        numbers.extend(self.texture_weights.values().map(|w| ("texture_weights", *w)));
        numbers.extend(
            self.crop_rules
                .iter()
                .flat_map(|r| [("crop_rules", r.organic_below), ("crop_rules", r.points)]),
        );

        if let Some((name, _)) = numbers.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Ai4FarmError::Config(format!(
                "{} must be a finite number",
                name
            )));
        }

        if self.organic.low_below > self.organic.high_at_least {
            return Err(Ai4FarmError::Config(format!(
                "organic low_below ({}) exceeds high_at_least ({})",
                self.organic.low_below, self.organic.high_at_least
            )));
        }

        let risk = self.risk;
        if risk.degraded_below > risk.healthy_at_least || risk.healthy_at_least > 100 {
            return Err(Ai4FarmError::Config(format!(
                "risk thresholds must satisfy degraded_below <= healthy_at_least <= 100 (got {} / {})",
                risk.degraded_below, risk.healthy_at_least
            )));
        }

        for (name, range) in [
            ("moisture", self.ranges.moisture),
            ("organic", self.ranges.organic),
            ("rainfall", self.ranges.rainfall),
        ] {
            if !(range.min.is_finite() && range.max.is_finite() && range.min < range.max) {
                return Err(Ai4FarmError::Config(format!(
                    "{} range [{}, {}] is empty or not finite",
                    name, range.min, range.max
                )));
            }
        }

        Ok(())
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::classic()
    }
}

fn base_color_weights() -> BTreeMap<SoilColor, f64> {
    BTreeMap::from([
        (SoilColor::Dark, 15.0),
        (SoilColor::Brown, 5.0),
        (SoilColor::Reddish, -5.0),
        (SoilColor::Pale, -10.0),
        (SoilColor::Yellowish, -5.0),
        (SoilColor::Gray, -10.0),
    ])
}

fn base_texture_weights() -> BTreeMap<SoilTexture, f64> {
    BTreeMap::from([
        (SoilTexture::Loamy, 10.0),
        (SoilTexture::Sandy, -5.0),
        (SoilTexture::Clay, -5.0),
        (SoilTexture::Silty, 0.0),
        (SoilTexture::Gravelly, -10.0),
    ])
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Classic,
    Weighted,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Classic, Preset::Weighted];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Weighted => "weighted",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Classic => "Base 50, integer additive factors (default)",
            Preset::Weighted => "Base 0, multiplied tables plus linear terms and crop rules",
        }
    }

    pub fn weights(&self) -> WeightConfig {
        match self {
            Preset::Classic => WeightConfig::classic(),
            Preset::Weighted => WeightConfig::weighted(),
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for preset in Preset::ALL {
            assert!(preset.weights().validate().is_ok(), "{} invalid", preset);
        }
    }

    #[test]
    fn presets_cover_every_category() {
        for preset in Preset::ALL {
            let weights = preset.weights();
            for color in SoilColor::ALL {
                assert!(weights.color_weights.contains_key(&color));
            }
            for texture in SoilTexture::ALL {
                assert!(weights.texture_weights.contains_key(&texture));
            }
        }
    }

    #[test]
    fn missing_table_entry_weighs_zero() {
        let mut weights = WeightConfig::classic();
        weights.color_weights.remove(&SoilColor::Gray);
        assert_eq!(weights.color_weight(SoilColor::Gray), 0.0);
        assert_eq!(weights.color_weight(SoilColor::Dark), 15.0);
    }

    #[test]
    fn validate_rejects_inverted_band() {
        let mut weights = WeightConfig::classic();
        weights.moisture.low = 80.0;
        let err = weights.validate().unwrap_err();
        assert!(err.to_string().contains("moisture band"));
    }

    #[test]
    fn validate_rejects_inverted_risk_thresholds() {
        let mut weights = WeightConfig::classic();
        weights.risk = RiskThresholds {
            degraded_below: 70,
            healthy_at_least: 40,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_weight() {
        let mut weights = WeightConfig::weighted();
        weights.texture_weights.insert(SoilTexture::Clay, f64::INFINITY);
        assert!(weights.validate().is_err());

        let mut weights = WeightConfig::weighted();
        weights.rainfall.linear = f64::NAN;
        assert!(weights.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_range() {
        let mut weights = WeightConfig::classic();
        weights.ranges.organic = Range::new(5.0, 5.0);
        assert!(weights.validate().is_err());
    }

    #[test]
    fn weights_yaml_round_trip_keeps_tables() {
        let yaml = serde_yaml::to_string(&WeightConfig::weighted()).unwrap();
        assert!(yaml.contains("Dark"));
        let parsed: WeightConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, WeightConfig::weighted());
    }

    #[test]
    fn preset_serde_names() {
        let preset: Preset = serde_yaml::from_str("weighted").unwrap();
        assert_eq!(preset, Preset::Weighted);
        assert!(serde_yaml::from_str::<Preset>("legacy").is_err());
    }
}
