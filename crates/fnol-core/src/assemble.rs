use crate::model::{
    AssetDetails, ClaimType, FnolDocument, IncidentInformation, InvolvedParty,
    PolicyInformation, ROLE_CLAIMANT, ROLE_THIRD_PARTY_DRIVER, ROLE_THIRD_PARTY_OWNER,
};
use crate::parsing::fields::{ClaimField, ClaimFlag, PartySlot};
use crate::parsing::FieldStrategy;

/// Build the claim aggregate from whatever the strategy can find.
///
/// Never fails: missing values stay None and are reported later by the
/// completeness check.
pub fn assemble(strategy: &dyn FieldStrategy) -> FnolDocument {
    let policy = PolicyInformation {
        policy_number: strategy.text(ClaimField::PolicyNumber),
        policyholder_name: strategy.text(ClaimField::PolicyholderName),
        agency_customer_id: strategy.text(ClaimField::AgencyCustomerId),
        effective_date: strategy.date(ClaimField::EffectiveDate),
    };
    tracing::debug!(strategy = strategy.name(), ?policy, "policy section");

    let incident = IncidentInformation {
        incident_date: strategy.date(ClaimField::IncidentDate),
        incident_time: strategy.text(ClaimField::IncidentTime),
        location: strategy.text(ClaimField::Location),
        description: strategy.text(ClaimField::Description),
    };
    tracing::debug!(strategy = strategy.name(), ?incident, "incident section");

    let involved_parties = parties(strategy);
    tracing::debug!(
        strategy = strategy.name(),
        parties = involved_parties.len(),
        "party section"
    );

    let asset = AssetDetails {
        asset_type: strategy.text(ClaimField::AssetType),
        asset_id: strategy.text(ClaimField::AssetId),
        estimated_damage: strategy.amount(ClaimField::EstimatedDamage),
        description: strategy.text(ClaimField::DamageDescription),
    };
    tracing::debug!(strategy = strategy.name(), ?asset, "asset section");

    let claim_type = claim_type(strategy);
    let initial_estimate = asset.estimated_damage;

    FnolDocument {
        policy_information: Some(policy),
        incident_information: Some(incident),
        involved_parties,
        asset_details: Some(asset),
        claim_type: Some(claim_type),
        initial_estimate,
        attachments: strategy.attachments(),
    }
}

/// Claimant always; owner and driver only when named. A driver who is
/// the owner is not listed twice.
fn parties(strategy: &dyn FieldStrategy) -> Vec<InvolvedParty> {
    let mut parties = vec![party(
        strategy,
        PartySlot::Claimant,
        strategy.text(ClaimField::ClaimantName),
        ROLE_CLAIMANT,
    )];

    if let Some(owner) = strategy.text(ClaimField::OwnerName) {
        parties.push(party(
            strategy,
            PartySlot::Owner,
            Some(owner),
            ROLE_THIRD_PARTY_OWNER,
        ));
    }

    if let Some(driver) = strategy.text(ClaimField::DriverName) {
        if !strategy.flag(ClaimFlag::DriverSameAsOwner) {
            parties.push(party(
                strategy,
                PartySlot::Driver,
                Some(driver),
                ROLE_THIRD_PARTY_DRIVER,
            ));
        }
    }

    parties
}

fn party(
    strategy: &dyn FieldStrategy,
    slot: PartySlot,
    name: Option<String>,
    role: &str,
) -> InvolvedParty {
    let contact = strategy.contact(slot);
    InvolvedParty {
        name,
        role: role.to_string(),
        primary_phone: contact.primary_phone,
        primary_phone_type: contact.primary_phone_type,
        secondary_phone: contact.secondary_phone,
        secondary_phone_type: contact.secondary_phone_type,
        primary_email: contact.primary_email,
        secondary_email: contact.secondary_email,
    }
}

fn claim_type(strategy: &dyn FieldStrategy) -> ClaimType {
    if strategy.text(ClaimField::InjuryDetails).is_some() {
        ClaimType::Injury
    } else if strategy.flag(ClaimFlag::PropertyDamage) {
        ClaimType::Property
    } else {
        ClaimType::Vehicle
    }
}
