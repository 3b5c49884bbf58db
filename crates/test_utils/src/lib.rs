//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims dashboard test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built claim records, datasets, and CSV text
//! - `builders`: Builder for claim records with sensible defaults
//! - `files`: Temporary CSV files for loader and server tests
//! - `assertions`: Custom assertion helpers for aggregates
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod files;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use files::*;
pub use assertions::*;
pub use generators::*;
