use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ROLE_CLAIMANT: &str = "CLAIMANT";
pub const ROLE_THIRD_PARTY_OWNER: &str = "THIRD_PARTY_OWNER";
pub const ROLE_THIRD_PARTY_DRIVER: &str = "THIRD_PARTY_DRIVER";
pub const ROLE_WITNESS: &str = "WITNESS";

pub const ASSET_VEHICLE: &str = "VEHICLE";
pub const ASSET_PROPERTY: &str = "PROPERTY";

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhoneType {
    Home,
    Bus,
    Cell,
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneType::Home => write!(f, "HOME"),
            PhoneType::Bus => write!(f, "BUS"),
            PhoneType::Cell => write!(f, "CELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimType {
    Vehicle,
    Property,
    Injury,
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimType::Vehicle => write!(f, "VEHICLE"),
            ClaimType::Property => write!(f, "PROPERTY"),
            ClaimType::Injury => write!(f, "INJURY"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policyholder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agency_customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
}

impl PolicyInformation {
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.policy_number)
            && !is_blank(&self.policyholder_name)
            && self.effective_date.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<NaiveDate>,
    /// Free-form time, e.g. "10:30 AM".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incident_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IncidentInformation {
    pub fn is_complete(&self) -> bool {
        self.incident_date.is_some() && !is_blank(&self.location) && !is_blank(&self.description)
    }

    /// Keywords from `vocabulary` found in the description, in vocabulary order.
    ///
    /// Matching is a case-insensitive substring test.
    pub fn fraud_keywords<'a>(&self, vocabulary: &'a [String]) -> Vec<&'a str> {
        let Some(description) = self.description.as_deref() else {
            return Vec::new();
        };
        let lower = description.to_lowercase();
        vocabulary
            .iter()
            .filter(|k| !k.is_empty() && lower.contains(&k.to_lowercase()))
            .map(|k| k.as_str())
            .collect()
    }

    pub fn has_fraud_indicators(&self, vocabulary: &[String]) -> bool {
        !self.fraud_keywords(vocabulary).is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvolvedParty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Open set; see the `ROLE_*` constants for the roles the assembler emits.
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_phone_type: Option<PhoneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_phone_type: Option<PhoneType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_email: Option<String>,
}

impl InvolvedParty {
    pub fn is_valid(&self) -> bool {
        !is_blank(&self.name)
            && !self.role.trim().is_empty()
            && !is_blank(&self.primary_phone)
            && self.primary_phone_type.is_some()
    }

    pub fn is_claimant(&self) -> bool {
        self.role.eq_ignore_ascii_case(ROLE_CLAIMANT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    /// Plate number or VIN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_damage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AssetDetails {
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.asset_type) && !is_blank(&self.asset_id) && self.estimated_damage.is_some()
    }
}

/// The claim aggregate assembled from one intake document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FnolDocument {
    pub policy_information: Option<PolicyInformation>,
    pub incident_information: Option<IncidentInformation>,
    /// Claimant first, then third-party owner, then third-party driver.
    pub involved_parties: Vec<InvolvedParty>,
    pub asset_details: Option<AssetDetails>,
    pub claim_type: Option<ClaimType>,
    pub initial_estimate: Option<Decimal>,
    pub attachments: Vec<String>,
}

impl FnolDocument {
    pub fn has_claimant(&self) -> bool {
        self.involved_parties.iter().any(InvolvedParty::is_claimant)
    }

    pub fn estimated_damage(&self) -> Option<Decimal> {
        self.asset_details.as_ref().and_then(|a| a.estimated_damage)
    }
}
