use crate::error::FnolError;
use crate::model::FnolDocument;
use crate::routing::RoutingDecision;
use crate::ClaimAssessment;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Overall outcome of processing one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingStatus {
    Success,
    Partial,
    Incomplete,
    Failed,
}

impl ProcessingStatus {
    /// Status from the number of missing mandatory fields.
    pub fn for_missing(count: usize) -> Self {
        match count {
            0 => ProcessingStatus::Success,
            1..=3 => ProcessingStatus::Partial,
            _ => ProcessingStatus::Incomplete,
        }
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingStatus::Success => write!(f, "SUCCESS"),
            ProcessingStatus::Partial => write!(f, "PARTIAL"),
            ProcessingStatus::Incomplete => write!(f, "INCOMPLETE"),
            ProcessingStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Response payload for one document.
///
/// A FAILED result carries only `status` and `errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_route: Option<RoutingDecision>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub status: ProcessingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ProcessingResult {
    pub fn from_assessment(assessment: &ClaimAssessment) -> Self {
        let outcome = &assessment.outcome;
        let warnings = if outcome.warnings.is_empty() {
            None
        } else {
            Some(outcome.warnings.clone())
        };
        ProcessingResult {
            extracted_fields: Some(flatten(&assessment.document)),
            missing_fields: Some(assessment.missing_fields.clone()),
            recommended_route: Some(outcome.decision),
            reasoning: Some(outcome.reasoning.clone()),
            status: ProcessingStatus::for_missing(assessment.missing_fields.len()),
            warnings,
            errors: None,
        }
    }

    /// A fatal processing failure.
    pub fn failed(err: &FnolError) -> Self {
        Self::failed_with(format!("Error processing document: {}", err))
    }

    /// Input refused before processing started (empty or unsupported file).
    pub fn rejected(err: &FnolError) -> Self {
        Self::failed_with(err.to_string())
    }

    fn failed_with(message: String) -> Self {
        ProcessingResult {
            extracted_fields: None,
            missing_fields: None,
            recommended_route: None,
            reasoning: None,
            status: ProcessingStatus::Failed,
            warnings: None,
            errors: Some(vec![message]),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == ProcessingStatus::Failed
    }
}

/// Claim aggregate as an ordered JSON map, skipping absent and empty parts.
pub fn flatten(doc: &FnolDocument) -> Map<String, Value> {
    let mut fields = Map::new();
    let mut put = |key: &str, value: Result<Value, serde_json::Error>| match value {
        Ok(v) => {
            fields.insert(key.to_string(), v);
        }
        Err(e) => tracing::warn!(field = key, error = %e, "could not serialize field"),
    };

    if let Some(policy) = &doc.policy_information {
        put("policyInformation", serde_json::to_value(policy));
    }
    if let Some(incident) = &doc.incident_information {
        put("incidentInformation", serde_json::to_value(incident));
    }
    if !doc.involved_parties.is_empty() {
        put("involvedParties", serde_json::to_value(&doc.involved_parties));
    }
    if let Some(asset) = &doc.asset_details {
        put("assetDetails", serde_json::to_value(asset));
    }
    if let Some(claim_type) = doc.claim_type {
        put("claimType", serde_json::to_value(claim_type));
    }
    if let Some(estimate) = doc.initial_estimate {
        put("initialEstimate", serde_json::to_value(estimate));
    }
    if !doc.attachments.is_empty() {
        put("attachments", serde_json::to_value(&doc.attachments));
    }

    fields
}
