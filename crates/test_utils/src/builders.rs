//! Test Data Builders
//!
//! Provides a builder for claim records so tests only spell out the fields
//! they care about.

use chrono::NaiveDate;
use core_kernel::ClaimAmount;
use domain_claims::{ClaimRecord, MortalityOutcome};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test claim records
pub struct ClaimRecordBuilder {
    hospital_name: String,
    category_name: String,
    claim_amount: Option<ClaimAmount>,
    claim_date: Option<NaiveDate>,
    mortality: Option<MortalityOutcome>,
    extra: Vec<String>,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            hospital_name: "City General".to_string(),
            category_name: "Surgery".to_string(),
            claim_amount: Some(ClaimAmount::new(dec!(1000))),
            claim_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            mortality: Some(MortalityOutcome::No),
            extra: Vec::new(),
        }
    }

    /// Sets the hospital name
    pub fn hospital(mut self, name: impl Into<String>) -> Self {
        self.hospital_name = name.into();
        self
    }

    /// Sets the treatment category
    pub fn category(mut self, name: impl Into<String>) -> Self {
        self.category_name = name.into();
        self
    }

    /// Sets the claim amount
    pub fn amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = Some(ClaimAmount::new(amount));
        self
    }

    /// Clears the claim amount
    pub fn without_amount(mut self) -> Self {
        self.claim_amount = None;
        self
    }

    /// Sets the claim date
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.claim_date = Some(date);
        self
    }

    /// Clears the claim date
    pub fn without_date(mut self) -> Self {
        self.claim_date = None;
        self
    }

    /// Sets the mortality outcome
    pub fn mortality(mut self, outcome: MortalityOutcome) -> Self {
        self.mortality = Some(outcome);
        self
    }

    /// Clears the mortality outcome
    pub fn without_mortality(mut self) -> Self {
        self.mortality = None;
        self
    }

    /// Sets the values of the non-core columns
    pub fn extra(mut self, values: Vec<String>) -> Self {
        self.extra = values;
        self
    }

    /// Builds the record
    pub fn build(self) -> ClaimRecord {
        ClaimRecord::new(
            self.hospital_name,
            self.category_name,
            self.claim_amount,
            self.claim_date,
            self.mortality,
        )
        .with_extra(self.extra)
    }
}
