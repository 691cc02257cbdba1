mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::sanitize::SanitizeArgs;
use commands::vendors::VendorArgs;
use commands::weather::{WeatherArgs, WeatherRiskArgs};

/// Vendor readiness, weather exposure and peer benchmarking
#[derive(Parser)]
#[command(
    name = "vintel",
    version,
    about = "Vendor readiness, weather exposure and peer benchmarking",
    long_about = "Scores vendor financial snapshots (market cap, P/E, EBITDA) into contract \
                  readiness grades, weather-exposure tiers, sales priorities, financial alerts \
                  and industry peer percentiles, and simulates weather-risk intelligence \
                  with reproducible seeds."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade contract readiness (A+ to C)
    Readiness(VendorArgs),
    /// Classify weather exposure tier
    Exposure(VendorArgs),
    /// Rank sales opportunity priority
    Opportunity(VendorArgs),
    /// Generate financial health alerts
    Alerts(VendorArgs),
    /// Compare vendors with their industry benchmark
    Peers(VendorArgs),
    /// Weather-risk profile per vendor
    WeatherRisk(WeatherRiskArgs),
    /// Simulate weather events for the as-of month
    WeatherEvents(WeatherArgs),
    /// Portfolio weather insights and climate scenarios
    Insights(WeatherArgs),
    /// Full dashboard report for a vendor collection
    Dashboard(WeatherArgs),
    /// Clean raw market-data overview payloads into vendor records
    Sanitize(SanitizeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Readiness(args) => commands::scoring::run_readiness(args),
        Commands::Exposure(args) => commands::scoring::run_exposure(args),
        Commands::Opportunity(args) => commands::scoring::run_opportunity(args),
        Commands::Alerts(args) => commands::alerts::run_alerts(args),
        Commands::Peers(args) => commands::peers::run_peers(args),
        Commands::WeatherRisk(args) => commands::weather::run_weather_risk(args),
        Commands::WeatherEvents(args) => commands::weather::run_weather_events(args),
        Commands::Insights(args) => commands::weather::run_insights(args),
        Commands::Dashboard(args) => commands::analysis::run_dashboard(args),
        Commands::Sanitize(args) => commands::sanitize::run_sanitize(args),
        Commands::Version => {
            println!("vintel {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
