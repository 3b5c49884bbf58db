//! Hospital Claims Analytics Domain
//!
//! This crate holds everything the dashboard computes, independent of how
//! the data is loaded or how the result is displayed.
//!
//! # Request Flow
//!
//! ```text
//! ClaimDataset (loaded once) -> ClaimFilter::apply -> FilteredView -> aggregation -> DashboardView
//! ```
//!
//! The dataset is never mutated; a filtered view only borrows its rows.

pub mod record;
pub mod dataset;
pub mod filter;
pub mod aggregation;
pub mod dashboard;

pub use record::{ClaimRecord, MortalityOutcome};
pub use dataset::{ClaimDataset, ColumnKind, TableColumn};
pub use filter::{ClaimFilter, FilterOptions, FilteredView, DEFAULT_HOSPITAL_COUNT};
pub use aggregation::{CategoryTotal, HospitalLoad, Kpis, OutcomeShare};
pub use dashboard::{render, DashboardView, DASHBOARD_TITLE};
