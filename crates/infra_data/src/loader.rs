//! CSV claims loader

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::path::Path;
use tracing::{info, warn};

use core_kernel::{parse_day_first, ClaimAmount};
use domain_claims::dataset::{
    AMOUNT_COLUMN, CATEGORY_COLUMN, DATE_COLUMN, HOSPITAL_COLUMN, MORTALITY_COLUMN,
};
use domain_claims::{ClaimDataset, ClaimRecord, ColumnKind, MortalityOutcome, TableColumn};

use crate::error::LoadError;

/// Positions of the core columns within a CSV row
struct ColumnLayout {
    hospital: usize,
    category: usize,
    amount: usize,
    date: usize,
    mortality: usize,
    /// Positions of every other column, in file order
    extra: Vec<usize>,
    /// Table columns in file order
    columns: Vec<TableColumn>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord, path: &str) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    path: path.to_string(),
                    column,
                })
        };

        let hospital = find(HOSPITAL_COLUMN)?;
        let category = find(CATEGORY_COLUMN)?;
        let amount = find(AMOUNT_COLUMN)?;
        let date = find(DATE_COLUMN)?;
        let mortality = find(MORTALITY_COLUMN)?;

        let mut extra = Vec::new();
        let mut columns = Vec::with_capacity(headers.len());
        for (position, name) in headers.iter().enumerate() {
            let kind = match position {
                p if p == hospital => ColumnKind::HospitalName,
                p if p == category => ColumnKind::CategoryName,
                p if p == amount => ColumnKind::ClaimAmount,
                p if p == date => ColumnKind::ClaimDate,
                p if p == mortality => ColumnKind::Mortality,
                p => {
                    extra.push(p);
                    ColumnKind::Extra(extra.len() - 1)
                }
            };
            columns.push(TableColumn::new(name, kind));
        }

        Ok(Self {
            hospital,
            category,
            amount,
            date,
            mortality,
            extra,
            columns,
        })
    }
}

/// Loads the claims CSV at `path`.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be opened, is not valid CSV,
/// lacks one of the required columns, or has a non-numeric claim amount.
/// Unparsable claim dates are not errors; they load as missing.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<ClaimDataset, LoadError> {
    let path = path.as_ref();
    let source_path = path.display().to_string();

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: source_path.clone(),
        source,
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(file);

    let csv_error = |source: csv::Error| LoadError::Csv {
        path: source_path.clone(),
        source,
    };

    let headers = reader.headers().map_err(csv_error)?.clone();
    let layout = ColumnLayout::from_headers(&headers, &source_path)?;

    let mut records = Vec::new();
    let mut missing_dates = 0usize;

    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let cell = |index: usize| row.get(index).unwrap_or("");

        let claim_amount = ClaimAmount::parse_cell(cell(layout.amount)).map_err(|_| {
            LoadError::InvalidAmount {
                path: source_path.clone(),
                line: row.position().map(|p| p.line()).unwrap_or_default(),
                value: cell(layout.amount).to_string(),
            }
        })?;

        let claim_date = parse_day_first(cell(layout.date));
        if claim_date.is_none() {
            missing_dates += 1;
        }

        let extra = layout.extra.iter().map(|&i| cell(i).to_string()).collect();

        records.push(
            ClaimRecord::new(
                cell(layout.hospital),
                cell(layout.category),
                claim_amount,
                claim_date,
                MortalityOutcome::parse_cell(cell(layout.mortality)),
            )
            .with_extra(extra),
        );
    }

    if missing_dates > 0 {
        warn!(
            path = %source_path,
            missing_dates,
            "Some claim dates were blank or unparsable and are treated as missing"
        );
    }

    info!(
        path = %source_path,
        rows = records.len(),
        columns = layout.columns.len(),
        "Loaded claims dataset"
    );

    Ok(ClaimDataset::new(source_path, layout.columns, records))
}
