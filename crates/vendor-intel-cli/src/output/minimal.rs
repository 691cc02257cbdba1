use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Try to extract the "result" envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Dashboard report: minimal view of each vendor row
    if let Some(Value::Array(rows)) = result_obj.get("vendors") {
        for row in rows {
            print_row(row);
        }
        return;
    }

    // Per-vendor results: one line each
    if let Value::Array(rows) = result_obj {
        for row in rows {
            print_row(row);
        }
        return;
    }

    if let Value::Object(map) = result_obj {
        if let Some(val) = headline(map) {
            println!("{}", format_minimal(val));
            return;
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

/// Key output fields, most significant first.
const PRIORITY_KEYS: &[&str] = &[
    "priority",
    "grade",
    "tier",
    "overall_ranking",
    "risk_level",
    "severity",
    "kind",
    "record",
    "insights",
];

fn headline(map: &serde_json::Map<String, Value>) -> Option<&Value> {
    PRIORITY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .find(|val| !val.is_null())
}

/// `SYMBOL: headline`, descending into nested dashboard sections.
fn print_row(row: &Value) {
    let Value::Object(map) = row else {
        println!("{}", format_minimal(row));
        return;
    };
    let symbol = map.get("symbol").and_then(Value::as_str).unwrap_or("-");
    let value = headline(map).or_else(|| {
        map.get("opportunity")
            .and_then(Value::as_object)
            .and_then(headline)
    });
    match value {
        Some(v) => println!("{}: {}", symbol, format_minimal(v)),
        None => println!("{}", symbol),
    }
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
