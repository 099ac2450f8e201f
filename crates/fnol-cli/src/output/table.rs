use fnol_core::result::ProcessingResult;
use fnol_core::routing::RuleEvaluation;
use serde_json::Value;
use std::path::Path;

pub fn print(input_file: &Path, result: &ProcessingResult, trace: Option<&[RuleEvaluation]>) {
    let name = input_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_file.display().to_string());
    println!("=== {} ===\n", name);

    println!("  Status: {}", result.status);

    if let Some(errors) = &result.errors {
        for e in errors {
            println!("  Error:  {}", e);
        }
        println!();
        return;
    }

    if let Some(route) = result.recommended_route {
        println!("  Route:  {} ({})", route, route.label());
    }
    if let Some(reasoning) = &result.reasoning {
        println!("  Reason: {}", reasoning);
    }
    println!();

    match result.missing_fields.as_deref() {
        Some([]) | None => println!("  Missing fields: none"),
        Some(missing) => {
            println!("  Missing fields:");
            for m in missing {
                println!("    - {}", m);
            }
        }
    }

    if let Some(warnings) = &result.warnings {
        println!("  Warnings:");
        for w in warnings {
            println!("    - {}", w);
        }
    }
    println!();

    if let Some(fields) = &result.extracted_fields {
        let mut rows = Vec::new();
        for (key, value) in fields {
            flatten_value(key, value, &mut rows);
        }
        if !rows.is_empty() {
            let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(10);
            println!("  Extracted fields:");
            for (key, value) in &rows {
                println!("    {:<width$}  {}", key, value, width = width);
            }
            println!();
        }
    }

    if let Some(trace) = trace {
        println!("  Rule trace:");
        let width = trace.iter().map(|e| e.rule.len()).max().unwrap_or(10);
        for e in trace {
            let marker = if e.matched { "MATCHED" } else { "no" };
            println!(
                "    {:<width$}  {:<20} {}",
                e.rule,
                e.decision.to_string(),
                marker,
                width = width
            );
        }
        println!();
    }
}

/// Dotted-path rows for nested JSON, e.g. "involvedParties[0].name".
fn flatten_value(path: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                flatten_value(&format!("{}.{}", path, key), child, rows);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_value(&format!("{}[{}]", path, i), child, rows);
            }
        }
        Value::String(s) => rows.push((path.to_string(), s.clone())),
        Value::Null => {}
        other => rows.push((path.to_string(), other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_value_paths() {
        let mut rows = Vec::new();
        flatten_value(
            "involvedParties",
            &json!([{ "name": "Jane Doe", "role": "CLAIMANT" }]),
            &mut rows,
        );
        assert_eq!(
            rows,
            vec![
                ("involvedParties[0].name".to_string(), "Jane Doe".to_string()),
                ("involvedParties[0].role".to_string(), "CLAIMANT".to_string()),
            ]
        );
    }
}
