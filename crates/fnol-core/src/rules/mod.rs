pub mod builtin;
pub mod schema;

use crate::error::FnolError;
use rust_decimal::Decimal;
use schema::RoutingConfig;
use std::path::Path;

/// Load a routing configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<RoutingConfig, FnolError> {
    let content = std::fs::read_to_string(path).map_err(|e| FnolError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse a routing configuration from a JSON string.
pub fn parse_config(json: &str, source: &Path) -> Result<RoutingConfig, FnolError> {
    let config: RoutingConfig = serde_json::from_str(json).map_err(|e| FnolError::ConfigLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a routing configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<RoutingConfig, FnolError> {
    let config: RoutingConfig = serde_json::from_str(json).map_err(FnolError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a routing configuration is usable.
pub fn validate_config(config: &RoutingConfig) -> Result<(), FnolError> {
    if config.fraud_keywords.is_empty() {
        return Err(FnolError::ConfigInvalid(
            "fraud_keywords must not be empty".into(),
        ));
    }

    if let Some(i) = config
        .fraud_keywords
        .iter()
        .position(|k| k.trim().is_empty())
    {
        return Err(FnolError::ConfigInvalid(format!(
            "fraud keyword #{} is blank",
            i + 1
        )));
    }

    for (name, value) in [
        ("fast_track_threshold", config.fast_track_threshold),
        ("high_value_threshold", config.high_value_threshold),
    ] {
        if value <= Decimal::ZERO {
            return Err(FnolError::ConfigInvalid(format!(
                "{} must be positive, got {}",
                name, value
            )));
        }
    }

    if config.high_value_threshold < config.fast_track_threshold {
        return Err(FnolError::ConfigInvalid(format!(
            "high_value_threshold ({}) is below fast_track_threshold ({})",
            config.high_value_threshold, config.fast_track_threshold
        )));
    }

    Ok(())
}
