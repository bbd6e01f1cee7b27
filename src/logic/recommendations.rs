use crate::models::{Language, RiskCategory};

const DEGRADED_EN: &[&str] = &[
    "Add compost or manure",
    "Increase organic matter",
    "Improve irrigation or water retention",
    "Avoid planting sensitive crops",
];

const DEGRADED_FR: &[&str] = &[
    "Ajouter du compost ou du fumier",
    "Augmenter la matière organique",
    "Améliorer l'irrigation ou la rétention d'eau",
    "Éviter de planter des cultures sensibles",
];

const MODERATE_EN: &[&str] = &[
    "Monitor watering carefully",
    "Add moderate organic amendments",
    "Choose crops adapted to medium fertility",
];

const MODERATE_FR: &[&str] = &[
    "Surveiller attentivement l'arrosage",
    "Apporter des amendements organiques modérés",
    "Choisir des cultures adaptées à une fertilité moyenne",
];

const HEALTHY_EN: &[&str] = &[
    "Soil is healthy",
    "Maintain current practices",
    "Avoid overwatering and excessive fertilizer",
];

const HEALTHY_FR: &[&str] = &[
    "Le sol est en bonne santé",
    "Maintenir les pratiques actuelles",
    "Éviter l'arrosage excessif et l'excès d'engrais",
];

/// Canned advice for a risk category. Selection depends on nothing else.
pub fn recommendations(category: RiskCategory, lang: Language) -> &'static [&'static str] {
    match (category, lang) {
        (RiskCategory::Degraded, Language::English) => DEGRADED_EN,
        (RiskCategory::Degraded, Language::French) => DEGRADED_FR,
        (RiskCategory::Moderate, Language::English) => MODERATE_EN,
        (RiskCategory::Moderate, Language::French) => MODERATE_FR,
        (RiskCategory::Healthy, Language::English) => HEALTHY_EN,
        (RiskCategory::Healthy, Language::French) => HEALTHY_FR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_advice_starts_with_compost() {
        let bullets = recommendations(RiskCategory::Degraded, Language::English);
        assert_eq!(bullets.len(), 4);
        assert_eq!(bullets[0], "Add compost or manure");
    }

    #[test]
    fn translations_have_same_length() {
        for category in [
            RiskCategory::Degraded,
            RiskCategory::Moderate,
            RiskCategory::Healthy,
        ] {
            assert_eq!(
                recommendations(category, Language::English).len(),
                recommendations(category, Language::French).len()
            );
        }
    }
}
