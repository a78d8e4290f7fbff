use serde_json::Value;

/// Print just the headline answer from the output.
///
/// The two calculators carry their headline figures in the result's summary;
/// the recommendation carries its portfolio name at the top level of the
/// result.
pub fn print_minimal(value: &Value) {
    // Unwrap the computation envelope
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // Summaries hold the headline numbers when present
    let target = result_obj
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(result_obj);

    // Priority list of key output fields
    let priority_keys = [
        "monthly_payment",
        "final_value",
        "name",
        "total_interest",
        "total_contributed",
        "match_score",
    ];

    if let Value::Object(map) = target {
        // Try priority keys first (skip null values)
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(target));
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
