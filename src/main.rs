//! A World Away - Exoplanet Classification Core Service

mod cli;
mod logic;
pub mod constants;

use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", constants::APP_NAME, constants::APP_VERSION);

    let args = cli::Cli::parse();
    if let Err(e) = cli::run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
