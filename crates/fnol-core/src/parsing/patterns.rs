use crate::error::FnolError;
use crate::parsing::fields::{spec_for, ClaimField, ContactLabels, PartySlot, CONTACT_LABELS};
use crate::parsing::values::{parse_amount, parse_date};
use chrono::NaiveDate;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;

const AMOUNT: &str = r"[$€£][ \t]*([\d,]+(?:\.\d{2})?)";

/// Compiled regular expressions for free-text extraction.
///
/// Built once and shared read-only; every finder is total and yields
/// None / an empty Vec when nothing matches.
#[derive(Debug)]
pub struct PatternLibrary {
    policy_number: Regex,
    policyholder: Regex,
    date: Regex,
    time: Regex,
    amount: Regex,
    vin: Regex,
    phone: Regex,
    email: Regex,
    description: Regex,
    name_stop: Regex,
    attachments: Regex,
    location_parts: Vec<Regex>,
    location_fallback: Regex,
    values: HashMap<ClaimField, Regex>,
    names: HashMap<ClaimField, Regex>,
    amounts: HashMap<ClaimField, Regex>,
    sections: HashMap<ClaimField, Regex>,
    party_sections: Vec<(PartySlot, Regex)>,
}

impl PatternLibrary {
    pub fn new() -> Result<Self, FnolError> {
        let mut values = HashMap::new();
        let mut names = HashMap::new();
        let mut amounts = HashMap::new();
        let mut sections = HashMap::new();

        for field in [
            ClaimField::AgencyCustomerId,
            ClaimField::AssetId,
            ClaimField::DamageDescription,
        ] {
            if let Some(label) = spec_for(field).and_then(|s| s.text_label) {
                values.insert(field, labeled_value(label)?);
            }
        }
        for field in [
            ClaimField::ClaimantName,
            ClaimField::OwnerName,
            ClaimField::DriverName,
        ] {
            if let Some(label) = spec_for(field).and_then(|s| s.text_label) {
                names.insert(field, labeled_name(label)?);
            }
        }
        if let Some(label) = spec_for(ClaimField::EstimatedDamage).and_then(|s| s.text_label) {
            amounts.insert(
                ClaimField::EstimatedDamage,
                Regex::new(&format!(r"(?i)\b{}[ \t]*:?[ \t]*{}", label, AMOUNT))?,
            );
        }
        for field in [
            ClaimField::EffectiveDate,
            ClaimField::IncidentDate,
            ClaimField::IncidentTime,
            ClaimField::EstimatedDamage,
        ] {
            if let Some(label) = spec_for(field).and_then(|s| s.text_label) {
                sections.insert(field, Regex::new(&format!(r"(?i)\b{}", label))?);
            }
        }

        let party_sections = CONTACT_LABELS
            .iter()
            .map(|c: &ContactLabels| {
                Regex::new(&format!(r"(?i)\b{}", c.text_section)).map(|re| (c.slot, re))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let location_parts = [
            r"(?:Street(?:[ \t]+Address)?|Address)",
            r"City",
            r"State",
            r"(?:Zip(?:[ \t]+Code)?|Postal Code)",
        ]
        .iter()
        .map(|label| labeled_value(label))
        .collect::<Result<Vec<_>, _>>()?;

        Ok(PatternLibrary {
            policy_number: Regex::new(
                r"(?i)\bpolicy[ \t]*(?:number\b|no\b\.?|#)[ \t]*:?[ \t]*([A-Z0-9-]+)",
            )?,
            policyholder: Regex::new(
                r"(?i)\bpolicyholder(?:[ \t]*name)?[ \t]*:?[ \t]*([A-Za-z][A-Za-z .'\-]*)",
            )?,
            date: Regex::new(r"\b(\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2})\b")?,
            time: Regex::new(r"(?i)\b(\d{1,2}:\d{2}(?:[ \t]*[AP]M\b)?)")?,
            amount: Regex::new(AMOUNT)?,
            vin: Regex::new(
                r"(?i:\bVIN\b|\bVehicle[ \t]*Identification[ \t]*Number\b)[ \t]*:?[ \t]*([A-HJ-NPR-Z0-9]{17})\b",
            )?,
            phone: Regex::new(r"\b(?:\d{3}-\d{3}-\d{4}|\d{3}\.\d{3}\.\d{4}|\d{10})\b")?,
            email: Regex::new(r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b")?,
            description: Regex::new(
                r"(?ims)^[ \t]*(?:(?:incident|accident|loss)[ \t]+)?(?:description|details)(?:[ \t]+of[ \t]+(?:loss|accident|incident))?[ \t]*:?[ \t]*(.+?)(?:\n[ \t]*\n|\n[ \t]*(?:claimant|third party|vehicle details|asset details)|\z)",
            )?,
            name_stop: Regex::new(
                r"(?i)\s+(?:policy|claimant|insured|owner|driver|phone|e-?mail|date|vin)\b",
            )?,
            attachments: Regex::new(r"(?im)^[ \t]*(?:Attachments|Supporting Documents)[ \t]*:")?,
            location_parts,
            location_fallback: labeled_value(r"(?:Location|Scene)")?,
            values,
            names,
            amounts,
            sections,
            party_sections,
        })
    }

    pub fn policy_number(&self, text: &str) -> Option<String> {
        capture(&self.policy_number, text)
    }

    pub fn policyholder(&self, text: &str) -> Option<String> {
        capture(&self.policyholder, text).and_then(|n| self.trim_name(&n))
    }

    /// Every date token in `text` that parses, in order of appearance.
    pub fn dates(&self, text: &str) -> Vec<NaiveDate> {
        self.date
            .captures_iter(text)
            .filter_map(|c| c.get(1).and_then(|m| parse_date(m.as_str())))
            .collect()
    }

    pub fn first_time(&self, text: &str) -> Option<String> {
        capture(&self.time, text)
    }

    pub fn first_amount(&self, text: &str) -> Option<Decimal> {
        self.amount
            .captures_iter(text)
            .find_map(|c| c.get(1).and_then(|m| parse_amount(m.as_str())))
    }

    /// Amount written directly after the field's label.
    pub fn labeled_amount(&self, field: ClaimField, text: &str) -> Option<Decimal> {
        let re = self.amounts.get(&field)?;
        re.captures_iter(text)
            .find_map(|c| c.get(1).and_then(|m| parse_amount(m.as_str())))
    }

    pub fn vin(&self, text: &str) -> Option<String> {
        capture(&self.vin, text)
    }

    pub fn phones(&self, text: &str) -> Vec<String> {
        self.phone
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn emails(&self, text: &str) -> Vec<String> {
        self.email
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    pub fn description(&self, text: &str) -> Option<String> {
        capture(&self.description, text)
    }

    /// "Label: value" on one line, up to a line break or pipe.
    pub fn labeled_value(&self, field: ClaimField, text: &str) -> Option<String> {
        capture(self.values.get(&field)?, text)
    }

    /// Person name after the field's label, cut at the next known label.
    pub fn labeled_name(&self, field: ClaimField, text: &str) -> Option<String> {
        capture(self.names.get(&field)?, text).and_then(|n| self.trim_name(&n))
    }

    /// Street, city, state and zip parts that are present, in that order.
    pub fn location_parts(&self, text: &str) -> Vec<String> {
        self.location_parts
            .iter()
            .filter_map(|re| capture(re, text))
            .collect()
    }

    pub fn location_fallback(&self, text: &str) -> Option<String> {
        capture(&self.location_fallback, text)
    }

    /// Byte offset where the field's section label starts.
    pub fn section_start(&self, field: ClaimField, text: &str) -> Option<usize> {
        self.sections.get(&field)?.find(text).map(|m| m.start())
    }

    pub fn party_section_start(&self, slot: PartySlot, text: &str) -> Option<usize> {
        self.party_sections
            .iter()
            .find(|(s, _)| *s == slot)
            .and_then(|(_, re)| re.find(text))
            .map(|m| m.start())
    }

    /// Byte offset just past an "Attachments:" label at the start of a line.
    pub fn attachments_start(&self, text: &str) -> Option<usize> {
        self.attachments.find(text).map(|m| m.end())
    }

    fn trim_name(&self, raw: &str) -> Option<String> {
        let cut = match self.name_stop.find(raw) {
            Some(m) => &raw[..m.start()],
            None => raw,
        };
        let name = cut.trim().trim_end_matches(['.', '-', '\'']).trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }
}

fn labeled_value(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}[ \t]*[:#][ \t]*([^\r\n|]+)", label))
}

fn labeled_name(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b{}[ \t]*:[ \t]*([A-Za-z][A-Za-z .'\-]*)", label))
}

/// First capture group of the first match, trimmed and non-empty.
fn capture(re: &Regex, text: &str) -> Option<String> {
    re.captures_iter(text).find_map(|c| {
        let value = c.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn lib() -> PatternLibrary {
        PatternLibrary::new().unwrap()
    }

    #[test]
    fn test_policy_number_variants() {
        let p = lib();
        assert_eq!(p.policy_number("Policy Number: POL-100\n").as_deref(), Some("POL-100"));
        assert_eq!(p.policy_number("policy no. ab-77 | x").as_deref(), Some("ab-77"));
        assert_eq!(p.policy_number("Policy #: 12345").as_deref(), Some("12345"));
        assert_eq!(p.policy_number("Policyholder: Jane"), None);
    }

    #[test]
    fn test_policyholder_stops_at_next_label() {
        let p = lib();
        assert_eq!(
            p.policyholder("Policyholder: Jane Doe Policy Number: X").as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            p.policyholder("Policyholder Name: John Q. Public, Springfield").as_deref(),
            Some("John Q. Public")
        );
    }

    #[test]
    fn test_dates_in_text_order() {
        let p = lib();
        let dates = p.dates("from 01/15/2024 to 2024-07-15, not 99/99/2024");
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            ]
        );
    }

    #[test]
    fn test_time_with_meridiem() {
        let p = lib();
        assert_eq!(p.first_time("Time: 3:45 PM").as_deref(), Some("3:45 PM"));
        assert_eq!(p.first_time("at 14:05 sharp").as_deref(), Some("14:05"));
    }

    #[test]
    fn test_labeled_amount_preferred() {
        let p = lib();
        let text = "Deductible: $500\nEstimated Damage: $18,500.00\n";
        assert_eq!(
            p.labeled_amount(ClaimField::EstimatedDamage, text),
            Some(dec!(18500.00))
        );
        assert_eq!(p.first_amount(text), Some(dec!(500)));
    }

    #[test]
    fn test_amount_symbols() {
        let p = lib();
        assert_eq!(p.first_amount("cost £1,250.75 total"), Some(dec!(1250.75)));
        assert_eq!(p.first_amount("cost €90"), Some(dec!(90)));
        assert_eq!(p.first_amount("cost 90 dollars"), None);
    }

    #[test]
    fn test_vin_excludes_i_o_q() {
        let p = lib();
        assert_eq!(
            p.vin("VIN: 1HGCM82633A004352").as_deref(),
            Some("1HGCM82633A004352")
        );
        assert_eq!(
            p.vin("Vehicle Identification Number 1HGCM82633A00435Q"),
            None
        );
    }

    #[test]
    fn test_phones_and_emails() {
        let p = lib();
        let text = "Phone: 555-123-4567, alt 555.987.6543 or 5551112222\nEmail: jane.doe@example.com";
        assert_eq!(
            p.phones(text),
            vec!["555-123-4567", "555.987.6543", "5551112222"]
        );
        assert_eq!(p.emails(text), vec!["jane.doe@example.com"]);
    }

    #[test]
    fn test_phones_reject_mixed_punctuation() {
        let p = lib();
        assert!(p.phones("call 555-1234567 or 555.123-4567").is_empty());
    }

    #[test]
    fn test_attachments_label_starts_a_line() {
        let p = lib();
        assert_eq!(p.attachments_start("Notes: x\n  Attachments: a.pdf"), Some(23));
        assert_eq!(p.attachments_start("No attachments were provided."), None);
        assert_eq!(p.attachments_start("Attachments were not provided"), None);
    }

    #[test]
    fn test_description_until_blank_line() {
        let p = lib();
        let text = "Incident Date: 02/01/2024\nDescription: Rear-ended at a light.\nBumper cracked.\n\nClaimant: Jane Doe\n";
        assert_eq!(
            p.description(text).as_deref(),
            Some("Rear-ended at a light.\nBumper cracked.")
        );
    }

    #[test]
    fn test_description_stops_at_party_section() {
        let p = lib();
        let text = "Description: Hit a parked car\nClaimant: Jane Doe";
        assert_eq!(p.description(text).as_deref(), Some("Hit a parked car"));
    }

    #[test]
    fn test_labeled_names() {
        let p = lib();
        let text = "Claimant Name: Jane Doe\nThird Party Owner: Bob Smith\nThird Party Driver: Carl Jones, 555-000-1111";
        assert_eq!(
            p.labeled_name(ClaimField::ClaimantName, text).as_deref(),
            Some("Jane Doe")
        );
        assert_eq!(
            p.labeled_name(ClaimField::OwnerName, text).as_deref(),
            Some("Bob Smith")
        );
        assert_eq!(
            p.labeled_name(ClaimField::DriverName, text).as_deref(),
            Some("Carl Jones")
        );
    }

    #[test]
    fn test_owner_label_not_taken_from_driver_line() {
        let p = lib();
        let text = "Third Party Driver: Carl Jones";
        assert_eq!(p.labeled_name(ClaimField::OwnerName, text), None);
    }

    #[test]
    fn test_location_parts() {
        let p = lib();
        let text = "Street: 12 Elm St\nCity: Springfield\nState: IL\nZip: 62704\n";
        assert_eq!(
            p.location_parts(text),
            vec!["12 Elm St", "Springfield", "IL", "62704"]
        );
        assert_eq!(
            p.location_fallback("Location: parking lot behind the mall").as_deref(),
            Some("parking lot behind the mall")
        );
    }
}
