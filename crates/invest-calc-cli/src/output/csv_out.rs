use serde_json::Value;
use std::io;

/// Write output as CSV to stdout.
///
/// The first row-oriented section found in the result (schedule, projection
/// points, allocation lines) becomes the CSV body; outputs without one fall
/// back to two-column field/value rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(rows) = find_rows(result) {
        write_array_csv(&mut wtr, rows);
    } else {
        match result {
            Value::Object(map) => {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in map {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
            Value::Array(arr) => {
                write_array_csv(&mut wtr, arr);
            }
            _ => {
                let _ = wtr.write_record([&format_csv_value(result)]);
            }
        }
    }

    let _ = wtr.flush();
}

/// Depth-first search for the first array of objects in the result.
fn find_rows(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(arr) if arr.first().is_some_and(Value::is_object) => Some(arr),
        Value::Object(map) => map.values().find_map(find_rows),
        _ => None,
    }
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    if arr.is_empty() {
        return;
    }

    // Extract headers from first object
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
        let _ = wtr.write_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| {
                        map.get(*h)
                            .map(format_csv_value)
                            .unwrap_or_default()
                    })
                    .collect();
                let _ = wtr.write_record(&row);
            }
        }
    } else {
        for item in arr {
            let _ = wtr.write_record([&format_csv_value(item)]);
        }
    }
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
