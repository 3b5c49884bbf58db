//! Dashboard view model
//!
//! `render` is the whole request/response cycle of the dashboard: given the
//! loaded dataset and a filter it produces everything a page needs. It is
//! synchronous and side-effect free, so any front end (HTTP, tests) can call
//! it directly.

use serde::Serialize;
use tracing::debug;

use crate::aggregation::{
    claims_by_category, patient_load_by_hospital, patient_outcomes, CategoryTotal, HospitalLoad,
    Kpis, OutcomeShare,
};
use crate::dataset::ClaimDataset;
use crate::filter::{ClaimFilter, FilteredView};

/// Page title
pub const DASHBOARD_TITLE: &str = "HOSPITAL OPERATIONS & CLAIMS ANALYTICS DASHBOARD";

/// Everything shown on one rendering of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView<'a> {
    pub title: &'static str,
    /// The selection this view was computed for
    pub filter: ClaimFilter,
    pub kpis: Kpis,
    /// Horizontal bar chart data, ascending by total
    pub claims_by_category: Vec<CategoryTotal>,
    /// Vertical bar chart data, descending by patients
    pub patient_load_by_hospital: Vec<HospitalLoad>,
    /// Pie chart data
    pub patient_outcomes: Vec<OutcomeShare>,
    /// The filtered rows themselves
    pub rows: FilteredView<'a>,
}

impl DashboardView<'_> {
    /// True when the selection matched no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Computes the dashboard for one filter selection
pub fn render<'a>(dataset: &'a ClaimDataset, filter: &ClaimFilter) -> DashboardView<'a> {
    let rows = filter.apply(dataset);

    let view = DashboardView {
        title: DASHBOARD_TITLE,
        filter: filter.clone(),
        kpis: Kpis::compute(&rows),
        claims_by_category: claims_by_category(&rows),
        patient_load_by_hospital: patient_load_by_hospital(&rows),
        patient_outcomes: patient_outcomes(&rows),
        rows,
    };

    debug!(
        hospitals = filter.hospitals().len(),
        categories = filter.categories().len(),
        patients = view.kpis.total_patients,
        "Rendered dashboard"
    );

    view
}
