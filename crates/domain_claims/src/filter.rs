//! Hospital and treatment category filtering
//!
//! A filter holds two independent selections. A record passes when its
//! hospital is selected AND its category is selected; within one selection
//! any listed value matches. An empty selection matches nothing.

use serde::Serialize;
use std::collections::HashSet;

use crate::dataset::ClaimDataset;
use crate::record::ClaimRecord;

/// Number of hospitals pre-selected when no hospital filter is given
pub const DEFAULT_HOSPITAL_COUNT: usize = 5;

/// The values a user can pick from, plus the pre-selected defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Every hospital, in first-seen order
    pub hospitals: Vec<String>,
    /// Every treatment category, in first-seen order
    pub categories: Vec<String>,
    /// The first `default_hospital_count` hospitals
    pub default_hospitals: Vec<String>,
    /// All categories
    pub default_categories: Vec<String>,
}

impl FilterOptions {
    /// Derives the options from the loaded dataset
    pub fn from_dataset(dataset: &ClaimDataset, default_hospital_count: usize) -> Self {
        let hospitals: Vec<String> = dataset.hospitals().into_iter().map(String::from).collect();
        let categories: Vec<String> = dataset.categories().into_iter().map(String::from).collect();

        Self {
            default_hospitals: hospitals.iter().take(default_hospital_count).cloned().collect(),
            default_categories: categories.clone(),
            hospitals,
            categories,
        }
    }

    /// The filter used when the user has not chosen anything
    pub fn default_filter(&self) -> ClaimFilter {
        ClaimFilter::new(self.default_hospitals.clone(), self.default_categories.clone())
    }
}

/// The user's current hospital and category selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimFilter {
    hospitals: Vec<String>,
    categories: Vec<String>,
}

impl ClaimFilter {
    /// Creates a filter. Duplicate values are dropped, order is kept.
    pub fn new(hospitals: Vec<String>, categories: Vec<String>) -> Self {
        Self {
            hospitals: dedup(hospitals),
            categories: dedup(categories),
        }
    }

    /// Builds a filter from optional selections.
    ///
    /// `None` means the dimension was not specified and falls back to the
    /// default; `Some(vec![])` is an explicit empty selection.
    pub fn with_defaults(
        options: &FilterOptions,
        hospitals: Option<Vec<String>>,
        categories: Option<Vec<String>>,
    ) -> Self {
        Self::new(
            hospitals.unwrap_or_else(|| options.default_hospitals.clone()),
            categories.unwrap_or_else(|| options.default_categories.clone()),
        )
    }

    pub fn hospitals(&self) -> &[String] {
        &self.hospitals
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns true if the record passes both selections
    pub fn matches(&self, record: &ClaimRecord) -> bool {
        self.hospitals.iter().any(|h| *h == record.hospital_name)
            && self.categories.iter().any(|c| *c == record.category_name)
    }

    /// Narrows the dataset to the selected rows, keeping source order
    pub fn apply<'a>(&self, dataset: &'a ClaimDataset) -> FilteredView<'a> {
        let hospitals: HashSet<&str> = self.hospitals.iter().map(String::as_str).collect();
        let categories: HashSet<&str> = self.categories.iter().map(String::as_str).collect();

        let rows = dataset
            .records()
            .iter()
            .filter(|r| {
                hospitals.contains(r.hospital_name.as_str())
                    && categories.contains(r.category_name.as_str())
            })
            .collect();

        FilteredView { rows }
    }
}

fn dedup(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

/// Rows of a dataset that passed a filter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    rows: Vec<&'a ClaimRecord>,
}

impl<'a> FilteredView<'a> {
    /// A view over every row of the dataset
    pub fn all(dataset: &'a ClaimDataset) -> Self {
        Self {
            rows: dataset.records().iter().collect(),
        }
    }

    pub fn rows(&self) -> &[&'a ClaimRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ClaimRecord> + '_ {
        self.rows.iter().copied()
    }
}
