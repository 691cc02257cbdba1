use serde_json::{json, Value};
use std::time::Instant;

use vendor_intel_core::benchmarks::DEFAULT_INDUSTRY;
use vendor_intel_core::peers::classifier::classify_industry;
use vendor_intel_core::peers::comparison::compare_to_peers;

use super::vendors::{load_vendors, VendorArgs};
use super::{envelope, per_vendor};

pub fn run_peers(args: VendorArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args)?;

    let warnings: Vec<String> = vendors
        .iter()
        .filter(|v| classify_industry(v) == DEFAULT_INDUSTRY)
        .map(|v| format!("{}: no industry match; benchmarked against {}", v.symbol, DEFAULT_INDUSTRY))
        .collect();

    let rows = per_vendor(&vendors, compare_to_peers)?;
    envelope(
        "Peer percentiles against static industry benchmarks",
        &json!({
            "percentile": "clamp(0, 100, vendor / benchmark * 50); 50 = peer average",
            "ranking": ">=75 top quartile, >=50 above average, >=25 below average"
        }),
        warnings,
        start,
        rows,
    )
}
