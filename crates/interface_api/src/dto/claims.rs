//! Claims table DTOs

use serde::Serialize;

use domain_claims::{ClaimDataset, FilteredView};

use crate::dto::filters::AppliedFilter;

/// The filtered rows as a plain table of strings, columns in file order
#[derive(Debug, Serialize)]
pub struct TableResponse {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableResponse {
    pub fn from_view(dataset: &ClaimDataset, view: &FilteredView<'_>) -> Self {
        let columns = dataset.columns();

        Self {
            columns: columns.iter().map(|c| c.name.clone()).collect(),
            rows: view
                .iter()
                .map(|record| columns.iter().map(|c| record.cell(c.kind)).collect())
                .collect(),
        }
    }
}

/// Response for the claims listing endpoint
#[derive(Debug, Serialize)]
pub struct ClaimsResponse {
    pub filter: AppliedFilter,
    pub total: usize,
    pub table: TableResponse,
}
