//! Input collection: flags, JSON files and interactive prompts all end up
//! as a [`RawSample`] that is validated into a [`SoilSample`].

use crate::error::{Ai4FarmError, Result};
use crate::models::{Crop, InputRanges, Range, RawSample, SoilColor, SoilSample, SoilTexture};
use dialoguer::{Input, Select};
use std::path::Path;

/// Read a JSON object with the sample fields.
pub fn read_json(path: &Path) -> Result<RawSample> {
    let content = std::fs::read_to_string(path)?;
    let raw: RawSample = serde_json::from_str(&content)?;
    tracing::debug!("Read sample from {}", path.display());
    Ok(raw)
}

/// Overlay `primary` on top of `fallback`, field by field.
pub fn merge(primary: RawSample, fallback: RawSample) -> RawSample {
    RawSample {
        color: primary.color.or(fallback.color),
        texture: primary.texture.or(fallback.texture),
        crop: primary.crop.or(fallback.crop),
        moisture: primary.moisture.or(fallback.moisture),
        organic: primary.organic.or(fallback.organic),
        rainfall: primary.rainfall.or(fallback.rainfall),
    }
}

/// Build a validated sample from flags and an optional JSON file.
///
/// Flags win over file values. Missing fields are prompted for when
/// `interactive` is set, otherwise validation reports the first one.
pub fn collect(
    flags: RawSample,
    input_file: Option<&Path>,
    ranges: &InputRanges,
    interactive: bool,
) -> Result<SoilSample> {
    let from_file = match input_file {
        Some(path) => read_json(path)?,
        None => RawSample::default(),
    };
    let mut raw = merge(flags, from_file);

    if interactive && missing_fields(&raw).next().is_some() {
        raw = prompt_missing(raw, ranges)?;
    }

    raw.validate(ranges)
}

fn missing_fields(raw: &RawSample) -> impl Iterator<Item = &'static str> {
    [
        ("color", raw.color.is_none()),
        ("texture", raw.texture.is_none()),
        ("crop", raw.crop.is_none()),
        ("moisture", raw.moisture.is_none()),
        ("organic", raw.organic.is_none()),
        ("rainfall", raw.rainfall.is_none()),
    ]
    .into_iter()
    .filter_map(|(name, missing)| missing.then_some(name))
}

fn prompt_missing(mut raw: RawSample, ranges: &InputRanges) -> Result<RawSample> {
    println!("Soil Information");
    println!("Fill out the details below to generate a soil health assessment.");
    println!();

    if raw.color.is_none() {
        let idx = select("Soil color", &SoilColor::ALL.map(|c| c.as_str()))?;
        raw.color = Some(SoilColor::ALL[idx].as_str().to_string());
    }
    if raw.texture.is_none() {
        let idx = select("Soil texture", &SoilTexture::ALL.map(|t| t.as_str()))?;
        raw.texture = Some(SoilTexture::ALL[idx].as_str().to_string());
    }
    if raw.crop.is_none() {
        let idx = select("Crop type", &Crop::ALL.map(|c| c.as_str()))?;
        raw.crop = Some(Crop::ALL[idx].as_str().to_string());
    }
    if raw.moisture.is_none() {
        raw.moisture = Some(number("Soil moisture (%)", 40.0, ranges.moisture)?);
    }
    if raw.organic.is_none() {
        raw.organic = Some(number("Organic matter level (%)", 3.0, ranges.organic)?);
    }
    if raw.rainfall.is_none() {
        raw.rainfall = Some(number(
            "Rainfall (last 7 days, mm)",
            50.0,
            ranges.rainfall,
        )?);
    }

    println!();
    Ok(raw)
}

fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| Ai4FarmError::Terminal(format!("Input error: {}", e)))
}

fn number(prompt: &str, default: f64, range: Range) -> Result<f64> {
    let default = default.clamp(range.min, range.max);
    Input::new()
        .with_prompt(format!("{} [{}-{}]", prompt, range.min, range.max))
        .default(default)
        .validate_with(move |v: &f64| {
            if v.is_finite() && range.contains(*v) {
                Ok(())
            } else {
                Err(format!("value must be between {} and {}", range.min, range.max))
            }
        })
        .interact_text()
        .map_err(|e| Ai4FarmError::Terminal(format!("Input error: {}", e)))
}
