use serde_json::Value;
use tabled::{Table, builder::Builder};

/// Format output as a table using the tabled crate.
///
/// Per-vendor results render one row per vendor; single objects render as
/// field/value pairs.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            // Check if "result" key holds the primary data
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            // Dashboard report: one row per vendor, then the portfolio summary
            if let Some(Value::Array(rows)) = res_map.get("vendors") {
                print_array_table(&rows.iter().map(vendor_row).collect::<Vec<_>>());
                if let Some(summary) = res_map.get("summary") {
                    println!();
                    print_flat_object(summary);
                }
            } else {
                print_flat_object(result);
            }
        }
        // Per-vendor results
        Value::Array(rows) => print_array_table(rows),
        _ => print_flat_object(&Value::Object(envelope.clone())),
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(h.as_str())
                            .map(|v| format_value(v))
                            .unwrap_or_default()
                    })
                    .collect();
                builder.push_record(row);
            }
        }

        let table = Table::from(builder);
        println!("{}", table);
    } else {
        // Simple array of values
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

/// Headline columns for one dashboard row.
fn vendor_row(row: &Value) -> Value {
    let pick = |path: &[&str]| {
        path.iter()
            .try_fold(row, |v, key| v.get(*key))
            .cloned()
            .unwrap_or(Value::Null)
    };
    serde_json::json!({
        "symbol": pick(&["symbol"]),
        "industry": pick(&["industry"]),
        "grade": pick(&["readiness", "grade"]),
        "exposure": pick(&["exposure", "tier"]),
        "priority": pick(&["opportunity", "priority"]),
        "opportunity_score": pick(&["opportunity", "score"]),
        "peer_ranking": pick(&["peers", "overall_ranking"]),
        "weather_risk": pick(&["weather_risk", "risk_level"]),
        "alerts": row.get("alerts").and_then(Value::as_array).map_or(0, |a| a.len()),
    })
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(|v| format_value(v)).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
