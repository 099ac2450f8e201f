use fnol_core::error::FnolError;
use fnol_core::routing::engine::format_currency;
use fnol_core::routing::ROUTING_RULES;
use fnol_core::rules::{self, builtin};
use std::collections::HashSet;
use std::path::Path;

pub fn show(rules_file: Option<&Path>) -> Result<(), FnolError> {
    let config = match rules_file {
        Some(path) => rules::load_config(path)?,
        None => builtin::default_config()?,
    };

    println!("{} (version {})\n", config.name, config.version);
    if let Some(ref desc) = config.description {
        println!("{}\n", desc);
    }

    println!("Rules are evaluated in order; the first that applies decides the route.\n");

    let max_name_len = ROUTING_RULES
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(20);

    for (i, rule) in ROUTING_RULES.iter().enumerate() {
        println!(
            "  {}. {:<width$}  -> {:<20} when {}",
            i + 1,
            rule.name,
            rule.decision.to_string(),
            rule.condition,
            width = max_name_len
        );
    }
    println!();

    println!("Thresholds:");
    println!(
        "  Fast-track below:       {}",
        format_currency(config.fast_track_threshold)
    );
    println!(
        "  High-value warning over: {}",
        format_currency(config.high_value_threshold)
    );
    println!();
    println!("Fraud keywords (case-insensitive): {}", config.fraud_keywords.join(", "));
    println!();

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), FnolError> {
    let config = rules::load_config(file)?;

    println!("Routing config '{}' (v{}) is valid.", config.name, config.version);
    println!(
        "  Fast-track threshold: {}",
        format_currency(config.fast_track_threshold)
    );
    println!(
        "  High-value threshold: {}",
        format_currency(config.high_value_threshold)
    );
    println!("  Fraud keywords: {}", config.fraud_keywords.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();
    for keyword in &config.fraud_keywords {
        let lower = keyword.trim().to_lowercase();
        if !seen.insert(lower.clone()) {
            warnings.push(format!("keyword '{}' is listed more than once", keyword));
        }
        if keyword.trim() != keyword {
            warnings.push(format!(
                "keyword '{}' has surrounding whitespace that is matched literally",
                keyword
            ));
        }
    }
    if config.high_value_threshold == config.fast_track_threshold {
        warnings.push("fast-track and high-value thresholds are equal".to_string());
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
