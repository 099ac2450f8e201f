use crate::model::{PhoneType, ASSET_PROPERTY, ASSET_VEHICLE};
use crate::parsing::fields::{contact_labels, spec_for, ClaimField, ClaimFlag, PartySlot, Window};
use crate::parsing::patterns::PatternLibrary;
use crate::parsing::{ContactDetails, FieldStrategy};
use chrono::NaiveDate;
use rust_decimal::Decimal;

const ATTACHMENTS_WINDOW: usize = 200;

/// Scans unstructured text for labeled values.
pub struct FreeTextStrategy<'a> {
    patterns: &'a PatternLibrary,
    text: &'a str,
}

impl<'a> FreeTextStrategy<'a> {
    pub fn new(patterns: &'a PatternLibrary, text: &'a str) -> Self {
        FreeTextStrategy { patterns, text }
    }

    /// Text following the field's section label, bounded by its window.
    fn field_window(&self, field: ClaimField) -> Option<&'a str> {
        let window = spec_for(field)?.window?;
        let start = self.patterns.section_start(field, self.text);
        self.scoped(start, window)
    }

    fn scoped(&self, start: Option<usize>, window: Window) -> Option<&'a str> {
        match start {
            Some(offset) => Some(take_chars(&self.text[offset..], window.chars)),
            None if window.requires_label => None,
            None => Some(self.text),
        }
    }

    fn location(&self) -> Option<String> {
        let parts = self.patterns.location_parts(self.text);
        if parts.is_empty() {
            self.patterns.location_fallback(self.text)
        } else {
            Some(parts.join(", "))
        }
    }

    /// Property damage with no vehicle mentioned anywhere.
    fn is_property_claim(&self) -> bool {
        let lower = self.text.to_lowercase();
        lower.contains("property damage") && !lower.contains("vehicle")
    }

    fn asset_type(&self) -> &'static str {
        if self.is_property_claim() {
            ASSET_PROPERTY
        } else {
            ASSET_VEHICLE
        }
    }

    /// First line mentioning an injury, trimmed.
    fn injury_line(&self) -> Option<String> {
        self.text
            .lines()
            .find(|line| {
                let lower = line.to_lowercase();
                lower.contains("injury") || lower.contains("bodily harm")
            })
            .map(|line| line.trim().to_string())
    }

    fn estimated_damage(&self) -> Option<Decimal> {
        let field = ClaimField::EstimatedDamage;
        self.patterns
            .labeled_amount(field, self.text)
            .or_else(|| {
                self.field_window(field)
                    .and_then(|section| self.patterns.first_amount(section))
            })
    }
}

impl FieldStrategy for FreeTextStrategy<'_> {
    fn name(&self) -> &'static str {
        "free-text"
    }

    fn text(&self, field: ClaimField) -> Option<String> {
        let p = self.patterns;
        match field {
            ClaimField::PolicyNumber => p.policy_number(self.text),
            ClaimField::PolicyholderName => p.policyholder(self.text),
            ClaimField::AgencyCustomerId | ClaimField::DamageDescription => {
                p.labeled_value(field, self.text)
            }
            ClaimField::IncidentTime => self
                .field_window(field)
                .and_then(|section| p.first_time(section)),
            ClaimField::Location => self.location(),
            ClaimField::Description => p.description(self.text),
            ClaimField::ClaimantName | ClaimField::OwnerName | ClaimField::DriverName => {
                p.labeled_name(field, self.text)
            }
            ClaimField::AssetType => Some(self.asset_type().to_string()),
            ClaimField::AssetId => p
                .vin(self.text)
                .or_else(|| p.labeled_value(ClaimField::AssetId, self.text)),
            ClaimField::InjuryDetails => self.injury_line(),
            ClaimField::EffectiveDate | ClaimField::IncidentDate | ClaimField::EstimatedDamage => {
                None
            }
        }
    }

    fn date(&self, field: ClaimField) -> Option<NaiveDate> {
        match field {
            ClaimField::EffectiveDate | ClaimField::IncidentDate => self
                .field_window(field)
                .and_then(|section| self.patterns.dates(section).into_iter().next()),
            _ => None,
        }
    }

    fn amount(&self, field: ClaimField) -> Option<Decimal> {
        match field {
            ClaimField::EstimatedDamage => self.estimated_damage(),
            _ => None,
        }
    }

    fn flag(&self, flag: ClaimFlag) -> bool {
        match flag {
            ClaimFlag::DriverSameAsOwner => {
                match (
                    self.text(ClaimField::DriverName),
                    self.text(ClaimField::OwnerName),
                ) {
                    (Some(driver), Some(owner)) => driver.eq_ignore_ascii_case(&owner),
                    _ => false,
                }
            }
            ClaimFlag::PropertyDamage => self.is_property_claim(),
        }
    }

    fn contact(&self, slot: PartySlot) -> ContactDetails {
        let labels = contact_labels(slot);
        let start = self.patterns.party_section_start(slot, self.text);
        let window = Window {
            chars: labels.text_window,
            requires_label: false,
        };
        let Some(section) = self.scoped(start, window) else {
            return ContactDetails::default();
        };

        let mut phones = self.patterns.phones(section).into_iter();
        let mut emails = self.patterns.emails(section).into_iter();
        let primary_phone = phones.next();
        let secondary_phone = phones.next();
        ContactDetails {
            primary_phone_type: primary_phone.as_ref().map(|_| PhoneType::Cell),
            secondary_phone_type: secondary_phone.as_ref().map(|_| PhoneType::Home),
            primary_phone,
            secondary_phone,
            primary_email: emails.next(),
            secondary_email: emails.next(),
        }
    }

    fn attachments(&self) -> Vec<String> {
        let Some(start) = self.patterns.attachments_start(self.text) else {
            return Vec::new();
        };
        let block = take_chars(&self.text[start..], ATTACHMENTS_WINDOW);

        let mut items = Vec::new();
        for (i, line) in block.lines().enumerate() {
            if line.trim().is_empty() {
                if i == 0 {
                    continue;
                }
                break;
            }
            // a later "Label:" line starts the next section
            if i > 0 && line.contains(':') {
                break;
            }
            items.extend(
                line.split([',', ';'])
                    .map(|item| item.trim().trim_start_matches(['-', '*', '•']).trim())
                    .filter(|item| !is_no_attachment(item))
                    .map(str::to_string),
            );
        }
        items
    }
}

fn is_no_attachment(item: &str) -> bool {
    item.is_empty()
        || ["none", "n/a", "na", "nil"]
            .iter()
            .any(|word| item.trim_end_matches('.').eq_ignore_ascii_case(word))
}

/// Prefix of `s` holding at most `n` characters.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const CLAIM: &str = "\
FIRST NOTICE OF LOSS
Policy Number: POL-2024-881
Policyholder: Jane Doe
Effective Dates: 01/01/2024 to 12/31/2024
Incident Date: 02/14/2024
Incident Time: 3:45 PM
Street: 12 Elm St
City: Springfield
State: IL
Zip: 62704
Description: Rear-ended at a stop light on Elm St.
Bumper and trunk lid damaged.

Claimant Name: Jane Doe
Phone: 555-123-4567 / 555-765-4321
Email: jane.doe@example.com

Third Party Owner: Bob Smith
Phone: 555-222-3333
Third Party Driver: Bob Smith

Vehicle Details
VIN: 1HGCM82633A004352
License Plate: ABC-1234
Estimated Damage: $18,500.00

Attachments: photos.jpg, police_report.pdf
- repair_quote.pdf
";

    fn with<T>(text: &str, f: impl FnOnce(&FreeTextStrategy<'_>) -> T) -> T {
        let patterns = PatternLibrary::new().unwrap();
        let strategy = FreeTextStrategy::new(&patterns, text);
        f(&strategy)
    }

    #[test]
    fn test_policy_fields() {
        with(CLAIM, |s| {
            assert_eq!(s.text(ClaimField::PolicyNumber).as_deref(), Some("POL-2024-881"));
            assert_eq!(s.text(ClaimField::PolicyholderName).as_deref(), Some("Jane Doe"));
            assert_eq!(s.date(ClaimField::EffectiveDate), NaiveDate::from_ymd_opt(2024, 1, 1));
        });
    }

    #[test]
    fn test_incident_fields() {
        with(CLAIM, |s| {
            assert_eq!(s.date(ClaimField::IncidentDate), NaiveDate::from_ymd_opt(2024, 2, 14));
            assert_eq!(s.text(ClaimField::IncidentTime).as_deref(), Some("3:45 PM"));
            assert_eq!(
                s.text(ClaimField::Location).as_deref(),
                Some("12 Elm St, Springfield, IL, 62704")
            );
            assert_eq!(
                s.text(ClaimField::Description).as_deref(),
                Some("Rear-ended at a stop light on Elm St.\nBumper and trunk lid damaged.")
            );
        });
    }

    #[test]
    fn test_incident_date_needs_its_label() {
        with("Date: 02/14/2024\n", |s| {
            assert_eq!(s.date(ClaimField::IncidentDate), None);
        });
    }

    #[test]
    fn test_claimant_contact_defaults_phone_types() {
        with(CLAIM, |s| {
            let contact = s.contact(PartySlot::Claimant);
            assert_eq!(contact.primary_phone.as_deref(), Some("555-123-4567"));
            assert_eq!(contact.primary_phone_type, Some(PhoneType::Cell));
            assert_eq!(contact.secondary_phone.as_deref(), Some("555-765-4321"));
            assert_eq!(contact.secondary_phone_type, Some(PhoneType::Home));
            assert_eq!(contact.primary_email.as_deref(), Some("jane.doe@example.com"));
        });
    }

    #[test]
    fn test_driver_same_as_owner_by_name() {
        with(CLAIM, |s| {
            assert_eq!(s.text(ClaimField::OwnerName).as_deref(), Some("Bob Smith"));
            assert!(s.flag(ClaimFlag::DriverSameAsOwner));
        });
    }

    #[test]
    fn test_asset_prefers_vin() {
        with(CLAIM, |s| {
            assert_eq!(s.text(ClaimField::AssetId).as_deref(), Some("1HGCM82633A004352"));
            assert_eq!(s.text(ClaimField::AssetType).as_deref(), Some("VEHICLE"));
            assert_eq!(s.amount(ClaimField::EstimatedDamage), Some(dec!(18500.00)));
        });
        with("License Plate: XYZ-987\n", |s| {
            assert_eq!(s.text(ClaimField::AssetId).as_deref(), Some("XYZ-987"));
        });
    }

    #[test]
    fn test_damage_from_window_after_label() {
        with("Estimated Damage (repair shop quote)\nTotal $4,200.00\n", |s| {
            assert_eq!(s.amount(ClaimField::EstimatedDamage), Some(dec!(4200.00)));
        });
    }

    #[test]
    fn test_property_claim_detection() {
        with("Property damage to the garage door.\n", |s| {
            assert_eq!(s.text(ClaimField::AssetType).as_deref(), Some("PROPERTY"));
            assert!(s.flag(ClaimFlag::PropertyDamage));
        });
    }

    #[test]
    fn test_injury_line() {
        with("Notes: passenger reported a neck injury at scene\n", |s| {
            assert_eq!(
                s.text(ClaimField::InjuryDetails).as_deref(),
                Some("Notes: passenger reported a neck injury at scene")
            );
        });
        with(CLAIM, |s| assert_eq!(s.text(ClaimField::InjuryDetails), None));
    }

    #[test]
    fn test_attachments_list() {
        with(CLAIM, |s| {
            assert_eq!(
                s.attachments(),
                vec!["photos.jpg", "police_report.pdf", "repair_quote.pdf"]
            );
        });
        with("No supporting material.\n", |s| assert!(s.attachments().is_empty()));
    }

    #[test]
    fn test_attachments_none_or_prose_is_empty() {
        with("Policy Number: P-1\nAttachments: None\n", |s| {
            assert!(s.attachments().is_empty());
        });
        with("Attachments: N/A\n", |s| assert!(s.attachments().is_empty()));
        with("No attachments were provided.\n", |s| {
            assert!(s.attachments().is_empty());
        });
    }

    #[test]
    fn test_vehicle_mention_overrides_property_damage() {
        with(
            "Vehicle slid into a fence. No property damage beyond the fence.\n",
            |s| {
                assert_eq!(s.text(ClaimField::AssetType).as_deref(), Some("VEHICLE"));
                assert!(!s.flag(ClaimFlag::PropertyDamage));
            },
        );
    }

    #[test]
    fn test_take_chars_respects_char_boundaries() {
        assert_eq!(take_chars("€€€", 2), "€€");
        assert_eq!(take_chars("ab", 10), "ab");
    }
}
