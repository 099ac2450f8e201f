use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Thresholds and vocabulary the routing engine evaluates against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Damage strictly below this amount may be fast-tracked.
    pub fast_track_threshold: Decimal,
    /// Damage above this amount raises an approval warning.
    pub high_value_threshold: Decimal,
    /// Case-insensitive substrings flagging a description for investigation.
    /// Order is preserved in the routing explanation.
    pub fraud_keywords: Vec<String>,
}
