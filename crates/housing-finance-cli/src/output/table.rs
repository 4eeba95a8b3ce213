use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use housing_finance_core::rounding::format_inr;

use super::CURRENCY_KEYS;

/// Format output as tables using the tabled crate.
///
/// EMI results arrive inside the computation envelope; the scalar fields go
/// into a field/value table, the amortization schedule (when present) into
/// its own table, followed by any envelope warnings and the methodology.
/// Eligibility results are flat: score and status tabled, recommendations
/// listed beneath.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result(result);
                print_envelope_trailer(map);
            } else {
                print_result(value);
            }
        }
        Value::Array(arr) => print_rows(arr),
        _ => println!("{}", value),
    }
}

fn print_result(result: &Value) {
    let Value::Object(map) = result else {
        println!("{}", result);
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        // Nested collections get their own rendering after the scalar table.
        if key == "schedule" || key == "recommendations" {
            continue;
        }
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(schedule)) = map.get("schedule") {
        println!("\nAmortization schedule:");
        print_rows(schedule);
    }

    if let Some(Value::Array(recommendations)) = map.get("recommendations") {
        println!("\nRecommendations:");
        for rec in recommendations {
            if let Value::String(s) = rec {
                println!("  - {}", s);
            }
        }
    }
}

fn print_rows(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            println!("{}", item);
        }
        return;
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);
    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| {
                    map.get(h)
                        .map(|v| display_value(h, v))
                        .unwrap_or_default()
                })
                .collect();
            builder.push_record(row);
        }
    }
    println!("{}", Table::from(builder));
}

fn print_envelope_trailer(envelope: &serde_json::Map<String, Value>) {
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

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

/// Render a leaf value; monetary fields get Indian digit grouping.
fn display_value(key: &str, value: &Value) -> String {
    if CURRENCY_KEYS.contains(&key) {
        let raw = match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        };
        if let Some(parsed) = raw.and_then(|s| Decimal::from_str(&s).ok()) {
            return format_inr(parsed);
        }
    }

    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
