mod cli;
mod collector;
mod config;
mod error;
mod logic;
mod models;
mod report;
mod ui;

use chrono::Utc;
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, OutputFormat};
use config::Config;
use error::{Ai4FarmError, Result};
use logic::{evaluate, SoilScorer};
use models::{Location, Preset};
use report::{export_document, render_json, render_text, Report, ReportOptions};
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        if let Some(field) = e.field() {
            eprintln!("Check the '{}' value and try again.", field);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Assess(args)) => assess(config_path, args),
        None => assess(config_path, AssessArgs::default()),
        Some(Commands::Presets { name }) => presets(name),
        Some(Commands::Init) => {
            Config::setup_interactive(config_path)?;
            Ok(())
        }
        Some(Commands::Check) => check(config_path),
    }
}

fn assess(config_path: Option<&Path>, args: AssessArgs) -> Result<()> {
    let config = Config::load(config_path)?;

    let weights = match args.preset {
        Some(preset) => preset.weights(),
        None => config.scoring.effective_weights(),
    };
    weights.validate()?;
    let ranges = weights.ranges;

    let interactive = !args.no_input && std::io::stdin().is_terminal();
    let sample = collector::collect(
        args.raw_sample(),
        args.input.as_deref(),
        &ranges,
        interactive,
    )?;

    let result = evaluate(&sample, &weights)?;
    tracing::info!(
        score = result.score,
        risk = %result.risk_category,
        "soil assessment complete"
    );

    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(Location::new(lat, lon)?),
        _ => config.report.location,
    };
    let options = ReportOptions {
        language: args.lang.unwrap_or(config.report.language),
        location,
        explain: args.explain,
    };
    let report = Report::new(&sample, &result, options);

    if args.tui {
        let risk = weights.risk;
        ui::show_report(&report, risk.degraded_below, risk.healthy_at_least)?;
    } else {
        match args.format {
            OutputFormat::Text => print!("{}", render_text(&report)),
            OutputFormat::Json => println!("{}", render_json(&report)?),
        }
    }

    if let Some(path) = args.export {
        std::fs::write(&path, export_document(&report, Utc::now()))?;
        tracing::info!("Exported report to {}", path.display());
        eprintln!("Report exported to {}", path.display());
    }

    Ok(())
}

fn presets(name: Option<Preset>) -> Result<()> {
    match name {
        Some(preset) => {
            let yaml = serde_yaml::to_string(&preset.weights()).map_err(|e| {
                Ai4FarmError::Config(format!("Failed to serialize preset: {}", e))
            })?;
            print!("{}", yaml);
        }
        None => {
            for preset in Preset::ALL {
                println!("{:<10} {}", preset.as_str(), preset.description());
            }
        }
    }
    Ok(())
}

fn check(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let scorer = SoilScorer::new(config.scoring.effective_weights())?;

    println!("Configuration OK");
    println!("  Scoring:  {}", config.scoring.describe());
    println!("  Language: {}", config.report.language);
    if let Some(location) = config.report.location {
        println!("  Location: {}", location);
    }
    println!("  Rules:");
    for (id, name) in scorer.list_rules() {
        println!("    {:<15} {}", id, name);
    }

    Ok(())
}
