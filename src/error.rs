use thiserror::Error;

#[derive(Error, Debug)]
pub enum Ai4FarmError {
    #[error("Invalid input for '{field}': {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Value {value} for '{field}' is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Ai4FarmError {
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Ai4FarmError::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending input field, if the error is about one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Ai4FarmError::InvalidInput { field, .. } | Ai4FarmError::OutOfRange { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Ai4FarmError>;
