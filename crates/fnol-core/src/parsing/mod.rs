//! Field extraction strategies.
//!
//! A [`FieldStrategy`] answers per-field questions against one document
//! source. The structured strategy reads exact form labels; the free-text
//! strategy scans labeled lines with the compiled [`patterns::PatternLibrary`].
//! Both are driven by the same table in [`fields`].

pub mod fields;
pub mod free_text;
pub mod patterns;
pub mod structured;
pub mod values;

use crate::model::PhoneType;
use chrono::NaiveDate;
use fields::{ClaimField, ClaimFlag, PartySlot};
use rust_decimal::Decimal;

/// Contact block for one party.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDetails {
    pub primary_phone: Option<String>,
    pub primary_phone_type: Option<PhoneType>,
    pub secondary_phone: Option<String>,
    pub secondary_phone_type: Option<PhoneType>,
    pub primary_email: Option<String>,
    pub secondary_email: Option<String>,
}

/// Per-field lookups against one document source.
///
/// Every method is total: an absent or unparseable value is None (or
/// false / empty), never an error.
pub trait FieldStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn text(&self, field: ClaimField) -> Option<String>;

    fn date(&self, field: ClaimField) -> Option<NaiveDate>;

    fn amount(&self, field: ClaimField) -> Option<Decimal>;

    fn flag(&self, flag: ClaimFlag) -> bool;

    fn contact(&self, slot: PartySlot) -> ContactDetails;

    fn attachments(&self) -> Vec<String>;
}
