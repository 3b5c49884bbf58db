//! Server-rendered HTML for the dashboard page

pub mod charts;
pub mod page;

use std::fmt;
use thiserror::Error;

use self::charts::ChartError;

/// Failure while building the dashboard page
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write page: {0}")]
    Format(#[from] fmt::Error),

    #[error("Failed to draw chart: {0}")]
    Chart(#[from] ChartError),
}

/// Escapes text for use in HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
