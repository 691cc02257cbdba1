use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use vendor_intel_core::vendor::{sanitize_overview, RawOverview};

use super::envelope;
use crate::input;

#[derive(Args)]
pub struct SanitizeArgs {
    /// Path to a raw overview payload (object or array); stdin when omitted
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sanitize(args: SanitizeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let value = input::read_input(args.input.as_deref())?
        .ok_or("--input <overview.json> or stdin required")?;

    let raws: Vec<RawOverview> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        _ => vec![serde_json::from_value(value)?],
    };

    let mut warnings = Vec::new();
    let mut rows = Vec::with_capacity(raws.len());
    for raw in &raws {
        let cleaned = sanitize_overview(raw)?;
        if !cleaned.defaulted_fields.is_empty() {
            warnings.push(format!(
                "{}: defaulted {}",
                cleaned.record.symbol,
                cleaned.defaulted_fields.join(", ")
            ));
        }
        rows.push(cleaned);
    }

    envelope(
        "Overview sanitizing: placeholders to defaults, amounts truncated",
        &json!({
            "placeholders": ["None", "", "N/A", "-"],
            "text_default": "Unknown",
            "number_default": 0
        }),
        warnings,
        start,
        rows,
    )
}
