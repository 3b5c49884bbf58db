//! The loaded claims table

use std::collections::HashSet;

use crate::record::ClaimRecord;

/// Source header of the hospital column
pub const HOSPITAL_COLUMN: &str = "HOSP_NAME";
/// Source header of the treatment category column
pub const CATEGORY_COLUMN: &str = "CATEGORY_NAME";
/// Source header of the claim amount column
pub const AMOUNT_COLUMN: &str = "CLAIM_AMOUNT";
/// Source header of the claim date column
pub const DATE_COLUMN: &str = "CLAIM_DATE";
/// Source header of the mortality column
pub const MORTALITY_COLUMN: &str = "Mortality Y / N";

/// Which field of a [`ClaimRecord`] a table column shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    HospitalName,
    CategoryName,
    ClaimAmount,
    ClaimDate,
    Mortality,
    /// Index into [`ClaimRecord::extra`]
    Extra(usize),
}

/// A column of the table view, in source file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub name: String,
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// The five core columns in their canonical order
    pub fn core_columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new(HOSPITAL_COLUMN, ColumnKind::HospitalName),
            TableColumn::new(CATEGORY_COLUMN, ColumnKind::CategoryName),
            TableColumn::new(AMOUNT_COLUMN, ColumnKind::ClaimAmount),
            TableColumn::new(DATE_COLUMN, ColumnKind::ClaimDate),
            TableColumn::new(MORTALITY_COLUMN, ColumnKind::Mortality),
        ]
    }
}

/// In-memory table of claim records.
///
/// Built once at startup and shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimDataset {
    source: String,
    columns: Vec<TableColumn>,
    records: Vec<ClaimRecord>,
}

impl ClaimDataset {
    /// Creates a dataset whose table shows `columns` in the given order
    pub fn new(source: impl Into<String>, columns: Vec<TableColumn>, records: Vec<ClaimRecord>) -> Self {
        Self {
            source: source.into(),
            columns,
            records,
        }
    }

    /// Creates a dataset with only the core columns
    pub fn from_records(source: impl Into<String>, records: Vec<ClaimRecord>) -> Self {
        Self::new(source, TableColumn::core_columns(), records)
    }

    /// Where the data came from (usually the CSV path)
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn records(&self) -> &[ClaimRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct hospital names in the order they first appear
    pub fn hospitals(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.hospital_name.as_str()))
    }

    /// Distinct treatment categories in the order they first appear
    pub fn categories(&self) -> Vec<&str> {
        distinct_in_order(self.records.iter().map(|r| r.category_name.as_str()))
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
