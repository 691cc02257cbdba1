use serde_json::{json, Value};
use std::time::Instant;

use vendor_intel_core::scoring::exposure::classify_weather_exposure;
use vendor_intel_core::scoring::opportunity::rank_sales_opportunity;
use vendor_intel_core::scoring::readiness::score_contract_readiness;

use super::vendors::{load_vendors, VendorArgs};
use super::{envelope, per_vendor};

pub fn run_readiness(args: VendorArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args)?;
    let rows = per_vendor(&vendors, score_contract_readiness)?;
    envelope(
        "Contract readiness: size + profitability + efficiency + P/E adjustment",
        &json!({
            "size": "market cap tiers, 5-40 points",
            "profitability": "EBITDA tiers, 0-40 points",
            "efficiency": "EBITDA / market cap tiers, 0-20 points",
            "valuation": "+5 for 0 < P/E < 15, -5 for P/E > 50"
        }),
        vec![],
        start,
        rows,
    )
}

pub fn run_exposure(args: VendorArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args)?;
    let rows = per_vendor(&vendors, classify_weather_exposure)?;
    envelope(
        "Weather exposure: first matching keyword rule + size bonus + P/E bonus",
        &json!({
            "keyword_rules": "priority ordered; at most one contributes base points",
            "size_bonus": "+10 above $50B, +7 above $20B, +5 above $5B",
            "pe_bonus": "+5 above 25x, +3 between 0x and 10x"
        }),
        vec![],
        start,
        rows,
    )
}

pub fn run_opportunity(args: VendorArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args)?;
    let rows = per_vendor(&vendors, rank_sales_opportunity)?;
    envelope(
        "Sales opportunity: weighted exposure, readiness, deal size and urgency",
        &json!({
            "weights": "exposure 50%, readiness 35%, deal size 10%",
            "urgency": "+5 for negative EBITDA without earnings, +3 for P/E above 40",
            "boosts": "x1.15 critical exposure with strong readiness, x1.10 large cap with high exposure"
        }),
        vec![],
        start,
        rows,
    )
}
