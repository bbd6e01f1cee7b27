use crate::models::{Language, Preset, RawSample};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ai4farm",
    version,
    about = "Soil health estimator for small farmers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a soil sample and print the report (default)
    Assess(AssessArgs),
    /// List scoring presets, or print one as YAML
    Presets {
        /// Preset to print
        name: Option<Preset>,
    },
    /// Interactive setup writing the config file
    Init,
    /// Validate the configuration
    Check,
}

#[derive(Args, Default)]
pub struct AssessArgs {
    /// Soil color (Dark, Brown, Reddish, Pale, Yellowish, Gray)
    #[arg(long)]
    pub color: Option<String>,

    /// Soil texture (Sandy, Loamy, Clay, Silty, Gravelly)
    #[arg(long)]
    pub texture: Option<String>,

    /// Crop type (Maize, Cassava, Beans, Rice, Other)
    #[arg(long)]
    pub crop: Option<String>,

    /// Soil moisture in percent
    #[arg(long)]
    pub moisture: Option<f64>,

    /// Organic matter level in percent
    #[arg(long)]
    pub organic: Option<f64>,

    /// Rainfall over the last 7 days in mm
    #[arg(long)]
    pub rainfall: Option<f64>,

    /// JSON file with sample fields; flags override its values
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Scoring preset, overriding the config file
    #[arg(long)]
    pub preset: Option<Preset>,

    /// Report language
    #[arg(long)]
    pub lang: Option<Language>,

    /// Field latitude
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Field longitude
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Show how each factor contributed to the score
    #[arg(long)]
    pub explain: bool,

    /// Write an ASCII summary document to this path
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Show the report in a full-screen terminal view instead of printing it
    #[arg(long, conflicts_with = "format")]
    pub tui: bool,

    /// Never prompt for missing fields
    #[arg(long)]
    pub no_input: bool,
}

impl AssessArgs {
    pub fn raw_sample(&self) -> RawSample {
        RawSample {
            color: self.color.clone(),
            texture: self.texture.clone(),
            crop: self.crop.clone(),
            moisture: self.moisture,
            organic: self.organic,
            rainfall: self.rainfall,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_assess_flags() {
        let cli = Cli::try_parse_from([
            "ai4farm",
            "assess",
            "--color",
            "Dark",
            "--moisture",
            "50",
            "--preset",
            "weighted",
            "--lang",
            "fr",
            "--lat",
            "-1.29",
            "--lon",
            "36.82",
            "-f",
            "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Assess(args)) => {
                assert_eq!(args.color.as_deref(), Some("Dark"));
                assert_eq!(args.moisture, Some(50.0));
                assert_eq!(args.preset, Some(Preset::Weighted));
                assert_eq!(args.lang, Some(Language::French));
                assert_eq!(args.lat, Some(-1.29));
                assert_eq!(args.format, OutputFormat::Json);
                let raw = args.raw_sample();
                assert_eq!(raw.color.as_deref(), Some("Dark"));
                assert!(raw.texture.is_none());
            }
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn tui_conflicts_with_explicit_format() {
        assert!(Cli::try_parse_from(["ai4farm", "assess", "--tui", "-f", "json"]).is_err());

        let cli = Cli::try_parse_from(["ai4farm", "assess", "--tui"]).unwrap();
        match cli.command {
            Some(Commands::Assess(args)) => {
                assert!(args.tui);
                assert_eq!(args.format, OutputFormat::Text);
            }
            _ => panic!("expected assess"),
        }
    }

    #[test]
    fn lat_requires_lon() {
        assert!(Cli::try_parse_from(["ai4farm", "assess", "--lat", "5.0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ai4farm", "check", "-vv", "-c", "x.yaml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.yaml")));
    }

    #[test]
    fn presets_takes_optional_name() {
        let cli = Cli::try_parse_from(["ai4farm", "presets", "classic"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Presets {
                name: Some(Preset::Classic)
            })
        ));
    }
}
