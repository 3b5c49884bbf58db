//! Core Kernel - Foundational types for the claims dashboard
//!
//! This crate provides the value types shared by the loader, the domain and
//! the HTTP layer:
//! - Claim amounts with precise decimal arithmetic and dashboard formatting
//! - Day-first date parsing that degrades to a missing value
//! - Common error types

pub mod amount;
pub mod temporal;
pub mod error;

pub use amount::{ClaimAmount, AmountError};
pub use temporal::parse_day_first;
pub use error::CoreError;
