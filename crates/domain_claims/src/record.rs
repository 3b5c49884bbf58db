//! Claim record

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

use core_kernel::ClaimAmount;
use crate::dataset::ColumnKind;

/// Recorded mortality outcome of a patient
///
/// Values are compared exactly as written: `Yes` or `y` is its own outcome,
/// not an alias of `Y`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MortalityOutcome {
    /// Patient died (`Y`)
    Yes,
    /// Patient survived (`N`)
    No,
    /// Any other non-blank value, kept verbatim
    Other(String),
}

impl MortalityOutcome {
    /// Parses a `Mortality Y / N` cell. Blank cells are missing.
    pub fn parse_cell(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        match raw {
            "Y" => Some(MortalityOutcome::Yes),
            "N" => Some(MortalityOutcome::No),
            _ => Some(MortalityOutcome::Other(raw.to_string())),
        }
    }

    /// Label shown on charts and in the table
    pub fn label(&self) -> &str {
        match self {
            MortalityOutcome::Yes => "Y",
            MortalityOutcome::No => "N",
            MortalityOutcome::Other(value) => value,
        }
    }
}

impl fmt::Display for MortalityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MortalityOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// One row of hospital billing and outcome data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaimRecord {
    /// Hospital name (`HOSP_NAME`)
    pub hospital_name: String,
    /// Treatment category (`CATEGORY_NAME`)
    pub category_name: String,
    /// Claim amount (`CLAIM_AMOUNT`), missing when the cell was blank
    pub claim_amount: Option<ClaimAmount>,
    /// Claim date (`CLAIM_DATE`), missing when the cell was unparsable
    pub claim_date: Option<NaiveDate>,
    /// Mortality outcome (`Mortality Y / N`)
    pub mortality: Option<MortalityOutcome>,
    /// Values of the remaining source columns, in file order
    pub extra: Vec<String>,
}

impl ClaimRecord {
    pub fn new(
        hospital_name: impl Into<String>,
        category_name: impl Into<String>,
        claim_amount: Option<ClaimAmount>,
        claim_date: Option<NaiveDate>,
        mortality: Option<MortalityOutcome>,
    ) -> Self {
        Self {
            hospital_name: hospital_name.into(),
            category_name: category_name.into(),
            claim_amount,
            claim_date,
            mortality,
            extra: Vec::new(),
        }
    }

    /// Attaches the values of the non-core columns
    pub fn with_extra(mut self, extra: Vec<String>) -> Self {
        self.extra = extra;
        self
    }

    /// Text of one table cell. Missing values render as an empty string.
    pub fn cell(&self, kind: ColumnKind) -> String {
        match kind {
            ColumnKind::HospitalName => self.hospital_name.clone(),
            ColumnKind::CategoryName => self.category_name.clone(),
            ColumnKind::ClaimAmount => self
                .claim_amount
                .map(|a| a.to_string())
                .unwrap_or_default(),
            ColumnKind::ClaimDate => self
                .claim_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            ColumnKind::Mortality => self
                .mortality
                .as_ref()
                .map(|m| m.label().to_string())
                .unwrap_or_default(),
            ColumnKind::Extra(index) => self.extra.get(index).cloned().unwrap_or_default(),
        }
    }
}
