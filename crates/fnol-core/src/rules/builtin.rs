use crate::error::FnolError;
use crate::rules::schema::RoutingConfig;

const DEFAULT_ROUTING_JSON: &str = include_str!("../../../../rules/default-routing.json");

/// Available predefined routing configurations.
pub const PRESETS: &[&str] = &["default"];

/// Load a predefined routing configuration by name.
pub fn load_preset(name: &str) -> Result<RoutingConfig, FnolError> {
    match name {
        "default" => {
            let config: RoutingConfig = serde_json::from_str(DEFAULT_ROUTING_JSON)?;
            Ok(config)
        }
        _ => Err(FnolError::ConfigInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

/// The embedded default configuration.
pub fn default_config() -> Result<RoutingConfig, FnolError> {
    load_preset("default")
}
