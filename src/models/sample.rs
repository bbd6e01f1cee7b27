use crate::error::{Ai4FarmError, Result};
use crate::models::weights::{InputRanges, Range};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoilColor {
    Dark,
    Brown,
    Reddish,
    Pale,
    Yellowish,
    Gray,
}

impl SoilColor {
    pub const ALL: [SoilColor; 6] = [
        SoilColor::Dark,
        SoilColor::Brown,
        SoilColor::Reddish,
        SoilColor::Pale,
        SoilColor::Yellowish,
        SoilColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilColor::Dark => "Dark",
            SoilColor::Brown => "Brown",
            SoilColor::Reddish => "Reddish",
            SoilColor::Pale => "Pale",
            SoilColor::Yellowish => "Yellowish",
            SoilColor::Gray => "Gray",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" | "black" => Some(SoilColor::Dark),
            "brown" => Some(SoilColor::Brown),
            "reddish" | "red" => Some(SoilColor::Reddish),
            "pale" => Some(SoilColor::Pale),
            "yellowish" | "yellow" => Some(SoilColor::Yellowish),
            "gray" | "grey" => Some(SoilColor::Gray),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoilTexture {
    Sandy,
    Loamy,
    Clay,
    Silty,
    Gravelly,
}

impl SoilTexture {
    pub const ALL: [SoilTexture; 5] = [
        SoilTexture::Sandy,
        SoilTexture::Loamy,
        SoilTexture::Clay,
        SoilTexture::Silty,
        SoilTexture::Gravelly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilTexture::Sandy => "Sandy",
            SoilTexture::Loamy => "Loamy",
            SoilTexture::Clay => "Clay",
            SoilTexture::Silty => "Silty",
            SoilTexture::Gravelly => "Gravelly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sandy" | "sand" => Some(SoilTexture::Sandy),
            "loamy" | "loam" => Some(SoilTexture::Loamy),
            "clay" | "clayey" => Some(SoilTexture::Clay),
            "silty" | "silt" => Some(SoilTexture::Silty),
            "gravelly" | "gravel" => Some(SoilTexture::Gravelly),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Crop {
    Maize,
    Cassava,
    Beans,
    Rice,
    Other,
}

impl Crop {
    pub const ALL: [Crop; 5] = [Crop::Maize, Crop::Cassava, Crop::Beans, Crop::Rice, Crop::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crop::Maize => "Maize",
            Crop::Cassava => "Cassava",
            Crop::Beans => "Beans",
            Crop::Rice => "Rice",
            Crop::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "maize" | "corn" => Some(Crop::Maize),
            "cassava" | "manioc" => Some(Crop::Cassava),
            "beans" | "bean" => Some(Crop::Beans),
            "rice" => Some(Crop::Rice),
            "other" => Some(Crop::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated set of soil observations, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSample {
    pub color: SoilColor,
    pub texture: SoilTexture,
    pub moisture_pct: f64,
    pub organic_pct: f64,
    pub rainfall_mm: f64,
    pub crop: Crop,
}

impl SoilSample {
    pub fn new(
        color: SoilColor,
        texture: SoilTexture,
        moisture_pct: f64,
        organic_pct: f64,
        rainfall_mm: f64,
        crop: Crop,
    ) -> Self {
        Self {
            color,
            texture,
            moisture_pct,
            organic_pct,
            rainfall_mm,
            crop,
        }
    }

    /// Reject any numeric field that is non-finite or outside its declared range.
    pub fn check_ranges(&self, ranges: &InputRanges) -> Result<()> {
        check_range("moisture", self.moisture_pct, ranges.moisture)?;
        check_range("organic", self.organic_pct, ranges.organic)?;
        check_range("rainfall", self.rainfall_mm, ranges.rainfall)?;
        Ok(())
    }
}

pub(crate) fn check_range(field: &'static str, value: f64, range: Range) -> Result<()> {
    if value.is_finite() && range.contains(value) {
        Ok(())
    } else {
        Err(Ai4FarmError::OutOfRange {
            field,
            value,
            min: range.min,
            max: range.max,
        })
    }
}

/// Unvalidated sample as it arrives from flags, prompts or a JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub color: Option<String>,
    pub texture: Option<String>,
    pub crop: Option<String>,
    #[serde(alias = "moisture_pct")]
    pub moisture: Option<f64>,
    #[serde(alias = "organic_pct")]
    pub organic: Option<f64>,
    #[serde(alias = "rainfall_mm")]
    pub rainfall: Option<f64>,
}

impl RawSample {
    /// Parse and range-check every field, failing on the first bad one.
    ///
    /// Fields are checked in order: color, texture, crop, moisture, organic, rainfall.
    pub fn validate(&self, ranges: &InputRanges) -> Result<SoilSample> {
        let color = parse_field("color", self.color.as_deref(), SoilColor::from_str)?;
        let texture = parse_field("texture", self.texture.as_deref(), SoilTexture::from_str)?;
        let crop = parse_field("crop", self.crop.as_deref(), Crop::from_str)?;

        let moisture = require("moisture", self.moisture)?;
        check_range("moisture", moisture, ranges.moisture)?;
        let organic = require("organic", self.organic)?;
        check_range("organic", organic, ranges.organic)?;
        let rainfall = require("rainfall", self.rainfall)?;
        check_range("rainfall", rainfall, ranges.rainfall)?;

        Ok(SoilSample::new(color, texture, moisture, organic, rainfall, crop))
    }
}

impl From<&SoilSample> for RawSample {
    fn from(sample: &SoilSample) -> Self {
        Self {
            color: Some(sample.color.as_str().to_string()),
            texture: Some(sample.texture.as_str().to_string()),
            crop: Some(sample.crop.as_str().to_string()),
            moisture: Some(sample.moisture_pct),
            organic: Some(sample.organic_pct),
            rainfall: Some(sample.rainfall_mm),
        }
    }
}

pub(crate) const MISSING: &str = "<missing>";

fn parse_field<T>(
    field: &'static str,
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T> {
    let value = value.ok_or_else(|| Ai4FarmError::invalid(field, MISSING))?;
    parse(value).ok_or_else(|| Ai4FarmError::invalid(field, value))
}

fn require(field: &'static str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| Ai4FarmError::invalid(field, MISSING))
}
