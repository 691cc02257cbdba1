use serde_json::{json, Value};
use std::time::Instant;

use vendor_intel_core::alerts::financial::{generate_financial_alerts, ALERT_RULES};

use super::envelope;
use super::vendors::{load_vendors, VendorArgs};

/// Flattened alert list across all vendors, highest severity first.
pub fn run_alerts(args: VendorArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let vendors = load_vendors(&args)?;

    let mut rows = Vec::new();
    for v in &vendors {
        for alert in generate_financial_alerts(v) {
            let mut row = serde_json::Map::new();
            row.insert("symbol".into(), Value::String(v.symbol.clone()));
            if let Value::Object(fields) = serde_json::to_value(&alert)? {
                row.extend(fields);
            }
            rows.push(Value::Object(row));
        }
    }
    rows.sort_by(|a, b| severity(b).cmp(&severity(a)));
    tracing::debug!(vendors = vendors.len(), alerts = rows.len(), "alerts generated");

    let rules: Vec<&str> = ALERT_RULES.iter().map(|r| r.slug).collect();
    envelope(
        "Financial health alert rules, ordered by severity",
        &json!({ "rules": rules }),
        vec![],
        start,
        rows,
    )
}

fn severity(row: &Value) -> u64 {
    row.get("severity").and_then(Value::as_u64).unwrap_or(0)
}
