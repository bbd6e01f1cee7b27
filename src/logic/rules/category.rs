use super::{Rule, Tally};
use crate::models::{SoilSample, WeightConfig};

/// Soil color lookup. Darker soils usually carry more humus.
pub struct ColorRule;

impl Rule for ColorRule {
    fn id(&self) -> &'static str {
        "color"
    }

    fn name(&self) -> &'static str {
        "Soil Color"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        let points = weights.color_weight(sample.color) * weights.color_multiplier;
        tally.add(format!("color: {}", sample.color), points);
    }
}

/// Soil texture lookup. Loam holds water and nutrients best.
pub struct TextureRule;

impl Rule for TextureRule {
    fn id(&self) -> &'static str {
        "texture"
    }

    fn name(&self) -> &'static str {
        "Soil Texture"
    }

    fn apply(&self, sample: &SoilSample, weights: &WeightConfig, tally: &mut Tally) {
        let points = weights.texture_weight(sample.texture) * weights.texture_multiplier;
        tally.add(format!("texture: {}", sample.texture), points);
    }
}
