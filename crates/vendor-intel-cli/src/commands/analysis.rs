use serde_json::Value;

use vendor_intel_core::analysis::dashboard::analyze_vendors;

use super::vendors::load_vendors;
use super::weather::WeatherArgs;

pub fn run_dashboard(args: WeatherArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let vendors = load_vendors(&args.vendors)?;
    let ctx = args.simulation.context()?;
    let result = analyze_vendors(&vendors, &ctx)?;
    Ok(serde_json::to_value(result)?)
}
