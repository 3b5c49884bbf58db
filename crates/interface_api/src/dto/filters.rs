//! Filter DTOs
//!
//! Selections travel as repeated query keys:
//! `?hospital=H1&hospital=H2&category=ICU`. Every value is taken as given,
//! including an empty one, since a blank hospital or category name is a
//! real option. A dimension with no key at all uses its default.
//!
//! `hospital_set` / `category_set` mark a dimension as chosen even when no
//! value follows, so `?hospital_set=1` is an explicit empty selection. The
//! dashboard form always submits both markers so that deselecting everything
//! is distinguishable from a first visit.

use serde::Serialize;

use domain_claims::{ClaimFilter, FilterOptions};

use crate::error::ApiError;

/// Query key for hospital selections
pub const HOSPITAL_PARAM: &str = "hospital";
/// Query key for category selections
pub const CATEGORY_PARAM: &str = "category";
/// Marks the hospital selection as present, possibly empty
pub const HOSPITAL_SET_PARAM: &str = "hospital_set";
/// Marks the category selection as present, possibly empty
pub const CATEGORY_SET_PARAM: &str = "category_set";

/// Parsed filter query
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterQuery {
    pub hospitals: Option<Vec<String>>,
    pub categories: Option<Vec<String>>,
}

impl FilterQuery {
    /// Collects the selections from decoded query pairs
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for any key other than the selection keys and
    /// their `_set` markers.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, ApiError> {
        let mut query = FilterQuery::default();

        for (key, value) in pairs {
            match key.as_str() {
                HOSPITAL_PARAM => query.hospitals.get_or_insert_with(Vec::new).push(value),
                CATEGORY_PARAM => query.categories.get_or_insert_with(Vec::new).push(value),
                HOSPITAL_SET_PARAM => {
                    query.hospitals.get_or_insert_with(Vec::new);
                }
                CATEGORY_SET_PARAM => {
                    query.categories.get_or_insert_with(Vec::new);
                }
                other => {
                    return Err(ApiError::BadRequest(format!(
                        "Unknown filter parameter: {other}"
                    )))
                }
            }
        }

        Ok(query)
    }

    /// Resolves the query against the defaults
    pub fn into_filter(self, options: &FilterOptions) -> ClaimFilter {
        ClaimFilter::with_defaults(options, self.hospitals, self.categories)
    }
}

/// Response for the filter options endpoint
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub hospitals: Vec<String>,
    pub categories: Vec<String>,
    pub default_hospitals: Vec<String>,
    pub default_categories: Vec<String>,
}

impl From<&FilterOptions> for FilterOptionsResponse {
    fn from(options: &FilterOptions) -> Self {
        Self {
            hospitals: options.hospitals.clone(),
            categories: options.categories.clone(),
            default_hospitals: options.default_hospitals.clone(),
            default_categories: options.default_categories.clone(),
        }
    }
}

/// The selection a response was computed for
#[derive(Debug, Serialize)]
pub struct AppliedFilter {
    pub hospitals: Vec<String>,
    pub categories: Vec<String>,
}

impl From<&ClaimFilter> for AppliedFilter {
    fn from(filter: &ClaimFilter) -> Self {
        Self {
            hospitals: filter.hospitals().to_vec(),
            categories: filter.categories().to_vec(),
        }
    }
}
