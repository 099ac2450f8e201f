use crate::extraction::FormFields;
use crate::model::{PhoneType, ASSET_VEHICLE};
use crate::parsing::fields::{
    contact_labels, spec_for, ClaimField, ClaimFlag, PartySlot, PhoneTypeBoxes,
    CITY_STATE_ZIP_LABEL, COUNTRY_LABEL, DESCRIBE_LOCATION_LABEL, DRIVER_SAME_AS_OWNER_BOX,
    PROPERTY_DAMAGE_BOX, STREET_LABEL, TIME_AM_BOX, TIME_PM_BOX,
};
use crate::parsing::values::{is_checked, non_blank, parse_amount, parse_date};
use crate::parsing::{ContactDetails, FieldStrategy};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Reads claim fields from fillable-form values by exact label.
pub struct StructuredStrategy<'a> {
    form: &'a FormFields,
}

impl<'a> StructuredStrategy<'a> {
    pub fn new(form: &'a FormFields) -> Self {
        StructuredStrategy { form }
    }

    fn raw(&self, field: ClaimField) -> Option<String> {
        let label = spec_for(field)?.form_label?;
        non_blank(self.form.get(label))
    }

    fn checked(&self, label: &str) -> bool {
        is_checked(self.form.get(label))
    }

    /// "10:30" plus AM/PM from the meridiem boxes. AM wins if both are set.
    fn incident_time(&self) -> Option<String> {
        let time = self.raw(ClaimField::IncidentTime)?;
        if self.checked(TIME_AM_BOX) {
            Some(format!("{} AM", time))
        } else if self.checked(TIME_PM_BOX) {
            Some(format!("{} PM", time))
        } else {
            None
        }
    }

    fn location(&self) -> Option<String> {
        let parts: Vec<String> = [STREET_LABEL, CITY_STATE_ZIP_LABEL, COUNTRY_LABEL]
            .iter()
            .filter_map(|label| non_blank(self.form.get(label)))
            .collect();
        if parts.len() == 3 {
            return Some(parts.join(", "));
        }
        non_blank(self.form.get(DESCRIBE_LOCATION_LABEL))
    }

    fn phone_type(&self, boxes: &PhoneTypeBoxes) -> Option<PhoneType> {
        if self.checked(boxes.home) {
            Some(PhoneType::Home)
        } else if self.checked(boxes.bus) {
            Some(PhoneType::Bus)
        } else if self.checked(boxes.cell) {
            Some(PhoneType::Cell)
        } else {
            None
        }
    }
}

impl FieldStrategy for StructuredStrategy<'_> {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn text(&self, field: ClaimField) -> Option<String> {
        match field {
            ClaimField::IncidentTime => self.incident_time(),
            ClaimField::Location => self.location(),
            ClaimField::AssetType => Some(ASSET_VEHICLE.to_string()),
            _ => self.raw(field),
        }
    }

    fn date(&self, field: ClaimField) -> Option<NaiveDate> {
        self.raw(field).and_then(|v| parse_date(&v))
    }

    fn amount(&self, field: ClaimField) -> Option<Decimal> {
        self.raw(field).and_then(|v| parse_amount(&v))
    }

    fn flag(&self, flag: ClaimFlag) -> bool {
        match flag {
            ClaimFlag::DriverSameAsOwner => self.checked(DRIVER_SAME_AS_OWNER_BOX),
            ClaimFlag::PropertyDamage => self.checked(PROPERTY_DAMAGE_BOX),
        }
    }

    fn contact(&self, slot: PartySlot) -> ContactDetails {
        let labels = contact_labels(slot);
        ContactDetails {
            primary_phone: non_blank(self.form.get(labels.primary_phone)),
            primary_phone_type: self.phone_type(&labels.primary_phone_type),
            secondary_phone: non_blank(self.form.get(labels.secondary_phone)),
            secondary_phone_type: self.phone_type(&labels.secondary_phone_type),
            primary_email: non_blank(self.form.get(labels.primary_email)),
            secondary_email: non_blank(self.form.get(labels.secondary_email)),
        }
    }

    fn attachments(&self) -> Vec<String> {
        Vec::new()
    }
}
