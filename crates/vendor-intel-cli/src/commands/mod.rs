pub mod alerts;
pub mod analysis;
pub mod peers;
pub mod sample;
pub mod sanitize;
pub mod scoring;
pub mod vendors;
pub mod weather;

use serde::Serialize;
use serde_json::Value;
use std::time::Instant;

use vendor_intel_core::{with_metadata, VendorRecord};

/// One output row per vendor: the serialized result with a leading `symbol`.
pub fn per_vendor<T: Serialize>(
    vendors: &[VendorRecord],
    f: impl Fn(&VendorRecord) -> T,
) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let mut rows = Vec::with_capacity(vendors.len());
    for v in vendors {
        let mut row = serde_json::Map::new();
        row.insert("symbol".into(), Value::String(v.symbol.clone()));
        match serde_json::to_value(f(v))? {
            Value::Object(fields) => row.extend(fields.into_iter().filter(|(k, _)| k != "symbol")),
            other => {
                row.insert("value".into(), other);
            }
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// Wrap command output in the standard computation envelope.
pub fn envelope<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    start: Instant,
    result: T,
) -> Result<Value, Box<dyn std::error::Error>> {
    let elapsed = start.elapsed().as_micros() as u64;
    let out = with_metadata(methodology, assumptions, warnings, elapsed, result);
    Ok(serde_json::to_value(out)?)
}
