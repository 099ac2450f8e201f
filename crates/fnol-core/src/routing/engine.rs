use crate::model::{ClaimType, FnolDocument};
use crate::routing::outcome::{RoutingDecision, RoutingOutcome, RuleEvaluation};
use crate::rules::schema::RoutingConfig;
use rust_decimal::Decimal;

/// Everything a routing rule may look at.
pub struct RoutingContext<'a> {
    pub document: &'a FnolDocument,
    pub missing_fields: &'a [String],
    pub config: &'a RoutingConfig,
    /// Fraud keywords found in the description, in vocabulary order.
    pub fraud_keywords: Vec<&'a str>,
}

impl<'a> RoutingContext<'a> {
    pub fn new(
        document: &'a FnolDocument,
        missing_fields: &'a [String],
        config: &'a RoutingConfig,
    ) -> Self {
        let fraud_keywords = document
            .incident_information
            .as_ref()
            .map(|i| i.fraud_keywords(&config.fraud_keywords))
            .unwrap_or_default();
        RoutingContext {
            document,
            missing_fields,
            config,
            fraud_keywords,
        }
    }

    fn damage(&self) -> Option<Decimal> {
        self.document.estimated_damage()
    }
}

/// A prioritized routing rule.
pub struct RoutingRule {
    pub name: &'static str,
    /// Plain-language condition, for display.
    pub condition: &'static str,
    pub decision: RoutingDecision,
    pub applies: fn(&RoutingContext<'_>) -> bool,
    pub reasons: fn(&RoutingContext<'_>) -> Vec<String>,
}

const MISSING_FIELDS_RULE: RoutingRule = RoutingRule {
    name: "missing-mandatory-fields",
    condition: "any mandatory field is missing",
    decision: RoutingDecision::ManualReview,
    applies: |ctx| !ctx.missing_fields.is_empty(),
    reasons: |ctx| {
        vec![
            format!("Missing mandatory fields: {}", ctx.missing_fields.join(", ")),
            "Manual review required to complete claim information".to_string(),
        ]
    },
};

const FRAUD_RULE: RoutingRule = RoutingRule {
    name: "fraud-indicators",
    condition: "the incident description contains a fraud keyword",
    decision: RoutingDecision::Investigation,
    applies: |ctx| !ctx.fraud_keywords.is_empty(),
    reasons: |ctx| {
        let mut reasons = vec!["Fraud indicators detected in incident description".to_string()];
        reasons.extend(
            ctx.fraud_keywords
                .iter()
                .map(|k| format!("- Contains keyword: '{}'", k)),
        );
        reasons.push("Requires investigation before processing".to_string());
        reasons
    },
};

const INJURY_RULE: RoutingRule = RoutingRule {
    name: "injury-claim",
    condition: "the claim type is INJURY",
    decision: RoutingDecision::SpecialistQueue,
    applies: |ctx| ctx.document.claim_type == Some(ClaimType::Injury),
    reasons: |_| {
        vec![
            "Claim type is INJURY - requires specialist handling".to_string(),
            "Routing to medical claims specialist queue".to_string(),
        ]
    },
};

const FAST_TRACK_RULE: RoutingRule = RoutingRule {
    name: "fast-track",
    condition: "estimated damage is below the fast-track threshold",
    decision: RoutingDecision::FastTrack,
    applies: |ctx| {
        ctx.damage()
            .is_some_and(|d| d < ctx.config.fast_track_threshold)
    },
    reasons: |ctx| {
        let damage = ctx.damage().unwrap_or_default();
        vec![
            format!(
                "Estimated damage of {} is below the fast-track threshold of {}",
                format_currency(damage),
                format_currency(ctx.config.fast_track_threshold)
            ),
            "All mandatory fields are present".to_string(),
            "No fraud indicators detected".to_string(),
        ]
    },
};

const STANDARD_RULE: RoutingRule = RoutingRule {
    name: "standard-processing",
    condition: "no earlier rule applies",
    decision: RoutingDecision::StandardProcessing,
    applies: |_| true,
    reasons: |ctx| {
        let mut reasons = vec!["Claim meets all standard processing criteria".to_string()];
        if let Some(damage) = ctx.damage() {
            reasons.push(format!(
                "Estimated damage: {} (above fast-track threshold)",
                format_currency(damage)
            ));
        }
        reasons
    },
};

/// Routing rules in priority order. The first rule that applies wins.
pub const ROUTING_RULES: &[RoutingRule] = &[
    MISSING_FIELDS_RULE,
    FRAUD_RULE,
    INJURY_RULE,
    FAST_TRACK_RULE,
    STANDARD_RULE,
];

/// Pick the route for a claim and explain it.
pub fn route(ctx: &RoutingContext<'_>) -> RoutingOutcome {
    let mut evaluations = Vec::new();
    let mut winner = None;

    for rule in ROUTING_RULES {
        let matched = (rule.applies)(ctx);
        evaluations.push(RuleEvaluation {
            rule: rule.name.to_string(),
            decision: rule.decision,
            matched,
        });
        if matched {
            winner = Some(rule);
            break;
        }
    }

    let fallback = STANDARD_RULE;
    let rule = winner.unwrap_or(&fallback);
    let reasoning = format!("{}.", (rule.reasons)(ctx).join(". "));

    RoutingOutcome {
        decision: rule.decision,
        reasoning,
        warnings: warnings(ctx),
        evaluations,
    }
}

/// Advisory warnings, in a fixed order and regardless of the decision.
pub fn warnings(ctx: &RoutingContext<'_>) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(incident) = &ctx.document.incident_information {
        let time_missing = incident
            .incident_time
            .as_deref()
            .map_or(true, |t| t.trim().is_empty());
        if time_missing {
            warnings.push("Incident time not provided - may affect investigation".to_string());
        }
    }

    if ctx.document.attachments.is_empty() {
        warnings.push("No attachments/supporting documents provided".to_string());
    }

    if ctx
        .damage()
        .is_some_and(|d| d > ctx.config.high_value_threshold)
    {
        warnings.push("High damage amount - may require additional approval".to_string());
    }

    warnings
}

/// US-style currency: "$18,500.00".
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{}", sign, grouped, cents)
}
