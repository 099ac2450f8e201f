//! Declarative field table shared by both extraction strategies.
//!
//! Each claim field names where it lives on the ACORD-style fillable form
//! and which label introduces it in free text. Fields that need composition
//! (location, asset type, time suffixes) are handled by the strategies
//! themselves; the table still gives every field exactly one entry.

/// A scalar attribute of the claim aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    PolicyNumber,
    PolicyholderName,
    AgencyCustomerId,
    EffectiveDate,
    IncidentDate,
    IncidentTime,
    Location,
    Description,
    ClaimantName,
    OwnerName,
    DriverName,
    AssetType,
    AssetId,
    EstimatedDamage,
    DamageDescription,
    InjuryDetails,
}

/// A yes/no signal that steers assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimFlag {
    DriverSameAsOwner,
    PropertyDamage,
}

/// One party section of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartySlot {
    Claimant,
    Owner,
    Driver,
}

/// How far past a section label free-text scanning may look.
#[derive(Debug, Clone, Copy)]
pub struct Window {
    pub chars: usize,
    /// When false, a missing label widens the window to the whole text.
    pub requires_label: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: ClaimField,
    /// Exact form label, if the field is read directly from the form.
    pub form_label: Option<&'static str>,
    /// Case-insensitive regex alternation introducing the value in text.
    pub text_label: Option<&'static str>,
    pub window: Option<Window>,
}

const fn spec(
    field: ClaimField,
    form_label: Option<&'static str>,
    text_label: Option<&'static str>,
    window: Option<Window>,
) -> FieldSpec {
    FieldSpec {
        field,
        form_label,
        text_label,
        window,
    }
}

const fn window(chars: usize, requires_label: bool) -> Option<Window> {
    Some(Window {
        chars,
        requires_label,
    })
}

pub const FIELD_SPECS: &[FieldSpec] = &[
    spec(ClaimField::PolicyNumber, Some("Text7"), None, None),
    spec(
        ClaimField::PolicyholderName,
        Some("NAME OF INSURED First Middle Last"),
        None,
        None,
    ),
    spec(
        ClaimField::AgencyCustomerId,
        Some("AGENCY CUSTOMER ID"),
        Some(r"(?:Agency Customer ID|Customer ID)"),
        None,
    ),
    spec(
        ClaimField::EffectiveDate,
        Some("Text3"),
        Some(r"(?:Effective Dates?)"),
        window(200, false),
    ),
    spec(
        ClaimField::IncidentDate,
        Some("Text3"),
        Some(r"(?:Incident Date|Date of Loss)"),
        window(200, true),
    ),
    spec(
        ClaimField::IncidentTime,
        Some("Text4"),
        Some(r"(?:Incident Time|Time of Loss|Time)"),
        window(100, false),
    ),
    spec(ClaimField::Location, None, None, None),
    spec(
        ClaimField::Description,
        Some("DESCRIPTION OF ACCIDENT ACORD 101 Additional Remarks Schedule may be attached if more space is required"),
        None,
        None,
    ),
    spec(
        ClaimField::ClaimantName,
        Some("NAME OF INSURED First Middle Last"),
        Some(r"(?:Claimant|Insured|Policyholder)(?:[ \t]+Name)?"),
        None,
    ),
    spec(
        ClaimField::OwnerName,
        Some("Text48"),
        Some(r"(?:Third Party(?:[ \t]+Owner)?|Other Vehicle Owner|Owner)(?:[ \t]+Name)?"),
        None,
    ),
    spec(
        ClaimField::DriverName,
        Some("Text81"),
        Some(r"(?:Third Party Driver|Other Driver|Driver)(?:[ \t]+Name)?"),
        None,
    ),
    spec(ClaimField::AssetType, None, None, None),
    spec(
        ClaimField::AssetId,
        Some("PLATE NUMBER"),
        Some(r"(?:Plate Number|License Plate)"),
        None,
    ),
    spec(
        ClaimField::EstimatedDamage,
        Some("Text45"),
        Some(r"(?:Estimated Damage|Damage Estimate)"),
        window(100, false),
    ),
    spec(
        ClaimField::DamageDescription,
        Some("DESCRIBE DAMAGE"),
        Some(r"(?:Describe Damage|Damage Description)"),
        None,
    ),
    spec(ClaimField::InjuryDetails, Some("NAME  ADDRESSRow1"), None, None),
];

/// Table entry for `field`.
pub fn spec_for(field: ClaimField) -> Option<&'static FieldSpec> {
    FIELD_SPECS.iter().find(|s| s.field == field)
}

pub const TIME_AM_BOX: &str = "Check Box5";
pub const TIME_PM_BOX: &str = "Check Box6";
pub const DRIVER_SAME_AS_OWNER_BOX: &str = "Check Box55";
pub const PROPERTY_DAMAGE_BOX: &str = "Check Box46";

pub const STREET_LABEL: &str = "STREET LOCATION OF LOSS";
pub const CITY_STATE_ZIP_LABEL: &str = "CITY STATE ZIP";
pub const COUNTRY_LABEL: &str = "COUNTRY";
pub const DESCRIBE_LOCATION_LABEL: &str =
    "DESCRIBE LOCATION OF LOSS IF NOT AT SPECIFIC STREET ADDRESS";

/// Checkbox labels for one phone number, in resolution priority order.
#[derive(Debug, Clone, Copy)]
pub struct PhoneTypeBoxes {
    pub home: &'static str,
    pub bus: &'static str,
    pub cell: &'static str,
}

/// Form labels for one party's contact details.
#[derive(Debug, Clone, Copy)]
pub struct ContactLabels {
    pub slot: PartySlot,
    pub primary_phone: &'static str,
    pub primary_phone_type: PhoneTypeBoxes,
    pub secondary_phone: &'static str,
    pub secondary_phone_type: PhoneTypeBoxes,
    pub primary_email: &'static str,
    pub secondary_email: &'static str,
    /// Free-text section label scoping this party's phones and emails.
    pub text_section: &'static str,
    pub text_window: usize,
}

pub const CONTACT_LABELS: [ContactLabels; 3] = [
    ContactLabels {
        slot: PartySlot::Claimant,
        primary_phone: "PHONE  CELL HOME BUS PRIMARY",
        primary_phone_type: PhoneTypeBoxes {
            home: "Check Box10",
            bus: "Check Box11",
            cell: "Check Box12",
        },
        secondary_phone: "PHONE  SECONDARY CELL HOME BUS",
        secondary_phone_type: PhoneTypeBoxes {
            home: "Check Box13",
            bus: "Check Box14",
            cell: "Check Box15",
        },
        primary_email: "PRIMARY EMAIL ADDRESS",
        secondary_email: "SECONDARY EMAIL ADDRESS",
        text_section: r"(?:Claimant|Insured)",
        text_window: 300,
    },
    ContactLabels {
        slot: PartySlot::Owner,
        primary_phone: "PHONE  CELL HOME BUS PRIMARY_5",
        primary_phone_type: PhoneTypeBoxes {
            home: "Check Box49",
            bus: "Check Box50",
            cell: "Check Box51",
        },
        secondary_phone: "PHONE  SECONDARY CELL HOME BUS_5",
        secondary_phone_type: PhoneTypeBoxes {
            home: "Check Box52",
            bus: "Check Box53",
            cell: "Check Box54",
        },
        primary_email: "PRIMARY EMAIL ADDRESS_5",
        secondary_email: "SECONDARY EMAIL ADDRESS_5",
        text_section: r"(?:Third Party|Other Vehicle|Owner)",
        text_window: 400,
    },
    ContactLabels {
        slot: PartySlot::Driver,
        primary_phone: "PHONE  CELL HOME BUS PRIMARY_6",
        primary_phone_type: PhoneTypeBoxes {
            home: "Check Box56",
            bus: "Check Box57",
            cell: "Check Box58",
        },
        secondary_phone: "DRIVER SECONDARY PHONE",
        secondary_phone_type: PhoneTypeBoxes {
            home: "Check Box59",
            bus: "Check Box60",
            cell: "Check Box61",
        },
        primary_email: "PRIMARY EMAIL ADDRESS_6",
        secondary_email: "SECONDARY EMAIL ADDRESS_6",
        text_section: r"(?:Driver)",
        text_window: 300,
    },
];

pub fn contact_labels(slot: PartySlot) -> &'static ContactLabels {
    match slot {
        PartySlot::Claimant => &CONTACT_LABELS[0],
        PartySlot::Owner => &CONTACT_LABELS[1],
        PartySlot::Driver => &CONTACT_LABELS[2],
    }
}
