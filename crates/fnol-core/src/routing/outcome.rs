use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a claim goes next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingDecision {
    FastTrack,
    ManualReview,
    Investigation,
    SpecialistQueue,
    StandardProcessing,
}

impl RoutingDecision {
    /// Human-readable description of the queue.
    pub fn label(&self) -> &'static str {
        match self {
            RoutingDecision::FastTrack => "Fast-track processing - low damage amount",
            RoutingDecision::ManualReview => {
                "Manual review required - missing or incomplete information"
            }
            RoutingDecision::Investigation => "Investigation required - fraud indicators detected",
            RoutingDecision::SpecialistQueue => "Specialist queue - injury claim",
            RoutingDecision::StandardProcessing => "Standard processing workflow",
        }
    }
}

impl fmt::Display for RoutingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoutingDecision::FastTrack => "FAST_TRACK",
            RoutingDecision::ManualReview => "MANUAL_REVIEW",
            RoutingDecision::Investigation => "INVESTIGATION",
            RoutingDecision::SpecialistQueue => "SPECIALIST_QUEUE",
            RoutingDecision::StandardProcessing => "STANDARD_PROCESSING",
        };
        f.write_str(name)
    }
}

/// One rule as evaluated for a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEvaluation {
    pub rule: String,
    pub decision: RoutingDecision,
    pub matched: bool,
}

/// Routing result for one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingOutcome {
    pub decision: RoutingDecision,
    /// Clauses of the winning rule joined with ". " and closed with ".".
    pub reasoning: String,
    /// Advisory notes, independent of the decision.
    pub warnings: Vec<String>,
    /// Rules evaluated in priority order, up to and including the winner.
    pub evaluations: Vec<RuleEvaluation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&RoutingDecision::SpecialistQueue).unwrap(),
            "\"SPECIALIST_QUEUE\""
        );
        assert_eq!(RoutingDecision::FastTrack.to_string(), "FAST_TRACK");
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            RoutingDecision::StandardProcessing.label(),
            "Standard processing workflow"
        );
    }
}
