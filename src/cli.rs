//! CLI Commands - API surface over `logic::*`
//!
//! Every command prints its result as JSON so output can be piped onward.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::constants;
use crate::logic::features::FeatureRecord;
use crate::logic::ingest::{parse_csv, sample_csv, write_results_csv};
use crate::logic::model::{score_batch, summarize, BatchPrediction, BatchSummary, Classifier};

#[derive(Parser)]
#[command(name = "a-world-away", version, about = "Exoplanet classification core service")]
pub struct Cli {
    /// Seed for the scoring noise term (reproducible runs)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify a single observation
    Predict(PredictArgs),
    /// Classify every row of a CSV file
    Batch(BatchArgs),
    /// Write the sample CSV template
    Sample {
        /// Output path
        #[arg(long, default_value = "sample_exoplanet_data.csv")]
        out: PathBuf,
    },
    /// Show model statistics
    Stats,
}

#[derive(Args)]
pub struct PredictArgs {
    /// Days for one orbit
    #[arg(long)]
    pub orbital_period: f64,
    /// Hours
    #[arg(long)]
    pub transit_duration: f64,
    /// Earth radii
    #[arg(long)]
    pub planetary_radius: f64,
    /// Kelvin
    #[arg(long)]
    pub stellar_temp: f64,
    /// Signal-to-noise ratio
    #[arg(long)]
    pub snr: f64,
    /// Fractional brightness dip
    #[arg(long)]
    pub depth: f64,
}

#[derive(Args)]
pub struct BatchArgs {
    /// CSV file of observations
    pub input: PathBuf,
    /// Also export scored results as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Batch command response
#[derive(Serialize)]
struct BatchResponse {
    summary: BatchSummary,
    results: Vec<BatchPrediction>,
}

pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // Explicit seed beats the environment; neither means entropy seeding
    let classifier = match cli.seed.or_else(constants::get_classifier_seed) {
        Some(seed) => {
            log::info!("Classifier seeded with {}", seed);
            Classifier::with_seed(seed)
        }
        None => Classifier::new(),
    };

    match cli.command {
        Command::Predict(args) => {
            let record = FeatureRecord {
                orbital_period: args.orbital_period,
                transit_duration: args.transit_duration,
                planetary_radius: args.planetary_radius,
                stellar_temp: args.stellar_temp,
                snr: args.snr,
                depth: args.depth,
            };
            record.validate()?;

            let result = classifier.predict(&record);
            classifier.increment_predictions();
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Batch(args) => {
            let text = fs::read_to_string(&args.input)?;
            let rows = parse_csv(&text)?;
            log::info!("Ingested {} rows from {}", rows.len(), args.input.display());

            let results = score_batch(&classifier, &rows);
            let summary = summarize(&results);

            if let Some(path) = &args.export {
                write_results_csv(path, &results)?;
            }

            let response = BatchResponse { summary, results };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Sample { out } => {
            fs::write(&out, sample_csv())?;
            log::info!("Sample CSV written to {}", out.display());
        }
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&classifier.stats())?);
        }
    }

    Ok(())
}
