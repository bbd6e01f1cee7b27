use crate::models::{Language, RiskThresholds};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    Degraded,
    Moderate,
    Healthy,
}

impl RiskCategory {
    /// Map a rounded score onto its tier. Lower bounds are inclusive.
    pub fn from_score(score: u8, thresholds: &RiskThresholds) -> Self {
        if score < thresholds.degraded_below {
            RiskCategory::Degraded
        } else if score < thresholds.healthy_at_least {
            RiskCategory::Moderate
        } else {
            RiskCategory::Healthy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Degraded => "Degraded",
            RiskCategory::Moderate => "Moderate",
            RiskCategory::Healthy => "Healthy",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            RiskCategory::Healthy => {
                lang.pick("Low Risk - Healthy Soil", "Risque faible - Sol sain")
            }
            RiskCategory::Moderate => lang.pick(
                "Medium Risk - Average Soil",
                "Risque moyen - Sol moyen",
            ),
            RiskCategory::Degraded => lang.pick(
                "High Risk - Unhealthy Soil",
                "Risque élevé - Sol dégradé",
            ),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            RiskCategory::Healthy => "✓",
            RiskCategory::Moderate => "⚠",
            RiskCategory::Degraded => "✗",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Moisture,
    OrganicMatter,
    Rainfall,
}

impl Factor {
    pub const ALL: [Factor; 3] = [Factor::Moisture, Factor::OrganicMatter, Factor::Rainfall];

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Factor::Moisture => lang.pick("Moisture", "Humidité"),
            Factor::OrganicMatter => lang.pick("Organic Matter", "Matière organique"),
            Factor::Rainfall => lang.pick("Rainfall", "Pluviométrie"),
        }
    }
}

/// Serialized as its English label, e.g. "Too dry".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorStatus {
    TooDry,
    OptimalMoisture,
    TooWet,
    LowOrganic,
    AverageOrganic,
    HighOrganic,
    InsufficientRainfall,
    HealthyRainfall,
    ExcessiveRainfall,
}

impl FactorStatus {
    pub const ALL: [FactorStatus; 9] = [
        FactorStatus::TooDry,
        FactorStatus::OptimalMoisture,
        FactorStatus::TooWet,
        FactorStatus::LowOrganic,
        FactorStatus::AverageOrganic,
        FactorStatus::HighOrganic,
        FactorStatus::InsufficientRainfall,
        FactorStatus::HealthyRainfall,
        FactorStatus::ExcessiveRainfall,
    ];

    pub fn as_str(&self) -> &'static str {
        self.label(Language::English)
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            FactorStatus::TooDry => lang.pick("Too dry", "Trop sec"),
            FactorStatus::OptimalMoisture => lang.pick("Optimal moisture", "Humidité optimale"),
            FactorStatus::TooWet => lang.pick("Too wet", "Trop humide"),
            FactorStatus::LowOrganic => lang.pick("Low organic matter", "Faible matière organique"),
            FactorStatus::AverageOrganic => {
                lang.pick("Average organic matter", "Matière organique moyenne")
            }
            FactorStatus::HighOrganic => {
                lang.pick("High organic content", "Teneur organique élevée")
            }
            FactorStatus::InsufficientRainfall => {
                lang.pick("Insufficient rainfall", "Pluies insuffisantes")
            }
            FactorStatus::HealthyRainfall => lang.pick("Healthy rainfall", "Pluies favorables"),
            FactorStatus::ExcessiveRainfall => {
                lang.pick("Excessive rainfall", "Pluies excessives")
            }
        }
    }

    /// Whether the status is the favourable band for its factor.
    pub fn is_favourable(&self) -> bool {
        matches!(
            self,
            FactorStatus::OptimalMoisture
                | FactorStatus::AverageOrganic
                | FactorStatus::HighOrganic
                | FactorStatus::HealthyRainfall
        )
    }
}

impl std::fmt::Display for FactorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for FactorStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FactorStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        FactorStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown factor status '{}'", label)))
    }
}

/// One additive term of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub source: String,
    pub points: f64,
}

impl Contribution {
    pub fn new(source: impl Into<String>, points: f64) -> Self {
        Self {
            source: source.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u8,
    pub raw_score: f64,
    pub risk_category: RiskCategory,
    pub factor_statuses: BTreeMap<Factor, FactorStatus>,
    pub contributions: Vec<Contribution>,
}

impl ScoreResult {
    pub fn status(&self, factor: Factor) -> Option<FactorStatus> {
        self.factor_statuses.get(&factor).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_category_boundaries() {
        let t = RiskThresholds::default();
        assert_eq!(RiskCategory::from_score(0, &t), RiskCategory::Degraded);
        assert_eq!(RiskCategory::from_score(39, &t), RiskCategory::Degraded);
        assert_eq!(RiskCategory::from_score(40, &t), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(69, &t), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(70, &t), RiskCategory::Healthy);
        assert_eq!(RiskCategory::from_score(100, &t), RiskCategory::Healthy);
    }

    #[test]
    fn risk_category_is_monotonic() {
        let t = RiskThresholds::default();
        let mut previous = RiskCategory::Degraded;
        for score in 0..=100u8 {
            let category = RiskCategory::from_score(score, &t);
            assert!(category >= previous, "category dropped at {}", score);
            previous = category;
        }
    }

    #[test]
    fn risk_category_custom_thresholds() {
        let t = RiskThresholds {
            degraded_below: 50,
            healthy_at_least: 50,
        };
        assert_eq!(RiskCategory::from_score(49, &t), RiskCategory::Degraded);
        assert_eq!(RiskCategory::from_score(50, &t), RiskCategory::Healthy);
    }

    #[test]
    fn factor_status_labels() {
        assert_eq!(FactorStatus::TooDry.as_str(), "Too dry");
        assert_eq!(FactorStatus::OptimalMoisture.as_str(), "Optimal moisture");
        assert_eq!(
            FactorStatus::ExcessiveRainfall.label(Language::French),
            "Pluies excessives"
        );
        assert!(FactorStatus::HighOrganic.is_favourable());
        assert!(!FactorStatus::TooWet.is_favourable());
    }

    #[test]
    fn statuses_serialize_as_labels_keyed_by_factor() {
        let statuses = BTreeMap::from([
            (Factor::Moisture, FactorStatus::TooDry),
            (Factor::OrganicMatter, FactorStatus::LowOrganic),
            (Factor::Rainfall, FactorStatus::InsufficientRainfall),
        ]);
        let json = serde_json::to_value(&statuses).unwrap();
        assert_eq!(json["moisture"], "Too dry");
        assert_eq!(json["organic_matter"], "Low organic matter");
        assert_eq!(json["rainfall"], "Insufficient rainfall");

        let parsed: BTreeMap<Factor, FactorStatus> = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, statuses);
        assert!(serde_json::from_str::<FactorStatus>("\"TooDry\"").is_err());
    }

    #[test]
    fn risk_labels_match_language() {
        assert_eq!(
            RiskCategory::Healthy.label(Language::English),
            "Low Risk - Healthy Soil"
        );
        assert!(RiskCategory::Degraded
            .label(Language::French)
            .contains("dégradé"));
    }
}
