//! Request/response data transfer objects

pub mod claims;
pub mod dashboard;
pub mod filters;
