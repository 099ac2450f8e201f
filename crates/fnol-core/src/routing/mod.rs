pub mod engine;
pub mod outcome;

pub use engine::{route, RoutingContext, RoutingRule, ROUTING_RULES};
pub use outcome::{RoutingDecision, RoutingOutcome, RuleEvaluation};
