use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use vendor_intel_core::benchmarks::industry::require_industry_benchmark;
use vendor_intel_core::peers::classifier::benchmark_for;
use vendor_intel_core::weather::events::simulate_weather_events;
use vendor_intel_core::weather::insights::{generate_climate_scenarios, generate_insights};
use vendor_intel_core::weather::risk::{calculate_weather_risk, correlation_pct};
use vendor_intel_core::weather::SimulationContext;

use super::envelope;
use super::vendors::{load_vendors, SimulationArgs, VendorArgs};

#[derive(Args)]
pub struct WeatherArgs {
    #[command(flatten)]
    pub vendors: VendorArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,
}

#[derive(Args)]
pub struct WeatherRiskArgs {
    #[command(flatten)]
    pub vendors: VendorArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,

    /// Sector tag override (default: from the classified industry)
    #[arg(long)]
    pub sector: Option<String>,

    /// Industry tag override (default: classified from ticker / name)
    #[arg(long)]
    pub industry: Option<String>,
}

pub fn run_weather_risk(args: WeatherRiskArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args.vendors)?;
    let ctx = args.simulation.context()?;
    let mut rng = ctx.rng();

    // An explicit industry must exist; its sector becomes the default sector.
    let industry_override = match args.industry.as_deref() {
        Some(tag) => Some(require_industry_benchmark(tag)?),
        None => None,
    };

    let mut rows = Vec::with_capacity(vendors.len());
    for v in &vendors {
        let benchmark = industry_override.unwrap_or_else(|| benchmark_for(v));
        let sector = args.sector.as_deref().unwrap_or(benchmark.sector);
        let industry = benchmark.industry;
        let profile = calculate_weather_risk(v, sector, industry, &mut rng);

        let mut row = serde_json::Map::new();
        row.insert("symbol".into(), Value::String(v.symbol.clone()));
        row.insert("sector".into(), Value::String(sector.to_string()));
        row.insert("industry".into(), Value::String(industry.to_string()));
        if let Value::Object(fields) = serde_json::to_value(&profile)? {
            row.extend(fields);
        }
        row.insert("correlation_pct".into(), json!(correlation_pct(&profile)));
        rows.push(Value::Object(row));
    }

    envelope(
        "Weather-risk profile: sector baseline scaled by size and valuation",
        &simulation_assumptions(&ctx),
        vec![],
        start,
        rows,
    )
}

pub fn run_weather_events(args: WeatherArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args.vendors)?;
    let ctx = args.simulation.context()?;
    let mut rng = ctx.rng();

    let mut rows = Vec::new();
    for v in &vendors {
        let benchmark = benchmark_for(v);
        for event in simulate_weather_events(&v.symbol, benchmark.sector, benchmark.industry, ctx.as_of, &mut rng) {
            let mut row = serde_json::Map::new();
            row.insert("symbol".into(), Value::String(v.symbol.clone()));
            if let Value::Object(fields) = serde_json::to_value(&event)? {
                row.extend(fields);
            }
            rows.push(Value::Object(row));
        }
    }

    envelope(
        "Seasonally gated weather-event simulation",
        &simulation_assumptions(&ctx),
        vec![],
        start,
        rows,
    )
}

pub fn run_insights(args: WeatherArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args.vendors)?;
    let ctx = args.simulation.context()?;

    let result = json!({
        "season": ctx.season(),
        "insights": generate_insights(&vendors, ctx.as_of),
        "climate_scenarios": generate_climate_scenarios(&vendors),
    });

    envelope(
        "Affinity-bucket weather insights and climate scenarios",
        &simulation_assumptions(&ctx),
        vec![],
        start,
        result,
    )
}

fn simulation_assumptions(ctx: &SimulationContext) -> Value {
    json!({
        "as_of": ctx.as_of.to_string(),
        "seed": ctx.seed,
        "weather_data": "synthetic; replay with --seed and --as-of"
    })
}
