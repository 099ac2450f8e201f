use crate::model::FnolDocument;

fn blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Dotted paths of mandatory fields that are absent or blank, in a fixed order.
///
/// An absent sub-record is reported once by its own name instead of
/// field by field.
pub fn missing_fields(doc: &FnolDocument) -> Vec<String> {
    let mut missing = Vec::new();
    let mut require = |present: bool, path: &str| {
        if !present {
            missing.push(path.to_string());
        }
    };

    match &doc.policy_information {
        None => require(false, "policyInformation"),
        Some(p) => {
            require(!blank(p.policy_number.as_deref()), "policyInformation.policyNumber");
            require(
                !blank(p.policyholder_name.as_deref()),
                "policyInformation.policyholderName",
            );
        }
    }

    match &doc.incident_information {
        None => require(false, "incidentInformation"),
        Some(i) => {
            require(i.incident_date.is_some(), "incidentInformation.incidentDate");
            require(!blank(i.location.as_deref()), "incidentInformation.location");
            require(!blank(i.description.as_deref()), "incidentInformation.description");
        }
    }

    require(doc.has_claimant(), "involvedParties.claimant");

    match &doc.asset_details {
        None => require(false, "assetDetails"),
        Some(a) => {
            require(!blank(a.asset_type.as_deref()), "assetDetails.assetType");
            require(!blank(a.asset_id.as_deref()), "assetDetails.assetId");
            require(a.estimated_damage.is_some(), "assetDetails.estimatedDamage");
        }
    }

    require(doc.claim_type.is_some(), "claimType");
    require(doc.initial_estimate.is_some(), "initialEstimate");

    missing
}
