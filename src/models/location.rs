use crate::error::{Ai4FarmError, Result};
use serde::{Deserialize, Serialize};

/// Field coordinates, echoed into reports only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let location = Self {
            latitude,
            longitude,
        };
        location.validate()?;
        Ok(location)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.latitude.is_finite() && (-90.0..=90.0).contains(&self.latitude)) {
            return Err(Ai4FarmError::OutOfRange {
                field: "latitude",
                value: self.latitude,
                min: -90.0,
                max: 90.0,
            });
        }
        if !(self.longitude.is_finite() && (-180.0..=180.0).contains(&self.longitude)) {
            return Err(Ai4FarmError::OutOfRange {
                field: "longitude",
                value: self.longitude,
                min: -180.0,
                max: 180.0,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
