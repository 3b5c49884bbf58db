//! Data Infrastructure Layer
//!
//! This crate turns the hospital claims CSV into a [`ClaimDataset`] and
//! holds it for the life of the process.
//!
//! # Loading
//!
//! The file is read once. Claim dates are parsed day first and become
//! missing when unparsable. A missing file, malformed CSV, absent required
//! column or non-numeric claim amount is fatal.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_data::DatasetCache;
//!
//! let cache = DatasetCache::new("hospital_data.csv");
//! let dataset = cache.get_or_load()?;
//! ```
//!
//! [`ClaimDataset`]: domain_claims::ClaimDataset

pub mod loader;
pub mod cache;
pub mod error;

pub use loader::load_dataset;
pub use cache::DatasetCache;
pub use error::LoadError;
