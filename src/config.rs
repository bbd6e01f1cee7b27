use crate::error::{Ai4FarmError, Result};
use crate::models::{Language, Location, Preset, WeightConfig};
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub preset: Preset,
    /// Full weight table overriding the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<WeightConfig>,
}

impl ScoringConfig {
    pub fn effective_weights(&self) -> WeightConfig {
        match &self.weights {
            Some(weights) => weights.clone(),
            None => self.preset.weights(),
        }
    }

    pub fn describe(&self) -> String {
        match self.weights {
            Some(_) => format!("custom weights (preset '{}' ignored)", self.preset),
            None => format!("preset '{}'", self.preset),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Config {
    /// Load the config file, falling back to defaults when none exists.
    ///
    /// An explicit `--config` path must exist.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(Ai4FarmError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using built-in defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| Ai4FarmError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| Ai4FarmError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.effective_weights().validate()?;
        if let Some(location) = &self.report.location {
            location
                .validate()
                .map_err(|e| Ai4FarmError::Config(format!("report.location: {}", e)))?;
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        let xdg_config = dirs::config_dir()?.join("ai4farm").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Default path for writing new config files (~/.config/ai4farm/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Ai4FarmError::Config("Cannot determine config directory".into()))?
            .join("ai4farm");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(target: Option<&Path>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AI4Farm!");
        println!();

        let presets: Vec<String> = Preset::ALL
            .iter()
            .map(|p| format!("{} - {}", p, p.description()))
            .collect();
        let preset_idx = Select::new()
            .with_prompt("Scoring preset")
            .items(&presets)
            .default(0)
            .interact()
            .map_err(|e| Ai4FarmError::Config(format!("Input error: {}", e)))?;

        let languages = [Language::English, Language::French];
        let language_idx = Select::new()
            .with_prompt("Report language")
            .items(&languages.map(|l| l.as_str()))
            .default(0)
            .interact()
            .map_err(|e| Ai4FarmError::Config(format!("Input error: {}", e)))?;

        let with_location = Confirm::new()
            .with_prompt("Add field coordinates to reports?")
            .default(false)
            .interact()
            .map_err(|e| Ai4FarmError::Config(format!("Input error: {}", e)))?;

        let location = if with_location {
            let latitude: f64 = Input::new()
                .with_prompt("  Latitude")
                .validate_with(|v: &f64| {
                    if (-90.0..=90.0).contains(v) {
                        Ok(())
                    } else {
                        Err("latitude must be between -90 and 90")
                    }
                })
                .interact_text()
                .map_err(|e| Ai4FarmError::Config(format!("Input error: {}", e)))?;

            let longitude: f64 = Input::new()
                .with_prompt("  Longitude")
                .validate_with(|v: &f64| {
                    if (-180.0..=180.0).contains(v) {
                        Ok(())
                    } else {
                        Err("longitude must be between -180 and 180")
                    }
                })
                .interact_text()
                .map_err(|e| Ai4FarmError::Config(format!("Input error: {}", e)))?;

            Some(Location::new(latitude, longitude)?)
        } else {
            None
        };

        println!();

        let config = Config {
            scoring: ScoringConfig {
                preset: Preset::ALL[preset_idx],
                weights: None,
            },
            report: ReportConfig {
                language: languages[language_idx],
                location,
            },
        };

        let config_path = match target {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| Ai4FarmError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AI4Farm Configuration\n# Generated by `ai4farm init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| Ai4FarmError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.scoring.preset, Preset::Classic);
        assert_eq!(config.report.language, Language::English);
    }

    #[test]
    fn example_config_parses() {
        let config = Config::from_yaml(include_str!("../config/config.yaml.example")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn blank_file_gives_defaults() {
        assert_eq!(Config::from_yaml("\n").unwrap(), Config::default());
    }

    #[test]
    fn preset_and_language_from_yaml() {
        let yaml = "scoring:\n  preset: weighted\nreport:\n  language: fr\n  location:\n    latitude: 6.52\n    longitude: 3.38\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.scoring.preset, Preset::Weighted);
        assert_eq!(config.scoring.effective_weights(), WeightConfig::weighted());
        assert_eq!(config.report.language, Language::French);
        assert_eq!(config.report.location.unwrap().latitude, 6.52);
    }

    #[test]
    fn custom_weights_override_preset() {
        let mut weights = WeightConfig::classic();
        weights.base_score = 45.0;
        let config = Config {
            scoring: ScoringConfig {
                preset: Preset::Weighted,
                weights: Some(weights.clone()),
            },
            report: ReportConfig::default(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.scoring.effective_weights(), weights);
        assert!(parsed.scoring.describe().starts_with("custom weights"));
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let mut weights = WeightConfig::classic();
        weights.moisture.low = 90.0;
        let config = Config {
            scoring: ScoringConfig {
                preset: Preset::Classic,
                weights: Some(weights),
            },
            report: ReportConfig::default(),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(matches!(
            Config::from_yaml(&yaml),
            Err(Ai4FarmError::Config(_))
        ));
    }

    #[test]
    fn bad_location_is_a_config_error() {
        let yaml = "report:\n  location:\n    latitude: 120\n    longitude: 0\n";
        let err = Config::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("report.location"));
    }

    #[test]
    fn unknown_preset_fails_to_parse() {
        let err = Config::from_yaml("scoring:\n  preset: legacy\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("AI4FARM_TEST_LANG", "fr");
        let config = Config::from_yaml("report:\n  language: ${AI4FARM_TEST_LANG}\n").unwrap();
        assert_eq!(config.report.language, Language::French);
    }

    #[test]
    fn write_then_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("ai4farm-config-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let config = Config {
            scoring: ScoringConfig {
                preset: Preset::Weighted,
                weights: None,
            },
            report: ReportConfig {
                language: Language::French,
                location: Some(Location::new(-1.29, 36.82).unwrap()),
            },
        };
        config.write_to(&path).unwrap();
        let loaded = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let path = PathBuf::from("/nonexistent/ai4farm/config.yaml");
        assert!(Config::load(Some(path.as_path())).is_err());
    }
}
