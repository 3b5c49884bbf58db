//! Custom Test Assertions
//!
//! Provides assertion helpers for aggregates that give more meaningful
//! error messages than standard assertions.

use core_kernel::ClaimAmount;
use domain_claims::{ClaimFilter, FilteredView, OutcomeShare};
use rust_decimal::Decimal;

/// Asserts that an amount equals the expected decimal value
pub fn assert_amount_eq(actual: ClaimAmount, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that outcome percentages add up to 100 within rounding
///
/// # Panics
///
/// Panics if the shares are non-empty and their percentages sum to a value
/// further than 0.01 from 100, or if the one-decimal labels sum to a value
/// further than 0.1 per share from 100.
pub fn assert_percentages_sum_to_100(shares: &[OutcomeShare]) {
    if shares.is_empty() {
        return;
    }

    let exact: f64 = shares.iter().map(|s| s.percentage).sum();
    assert!(
        (exact - 100.0).abs() < 0.01,
        "Percentages sum to {}, expected 100",
        exact
    );

    let labelled: f64 = shares
        .iter()
        .map(|s| {
            s.percentage_label
                .trim_end_matches('%')
                .parse::<f64>()
                .expect("percentage label is numeric")
        })
        .sum();
    let tolerance = 0.05 * shares.len() as f64 + 1e-9;
    assert!(
        (labelled - 100.0).abs() <= tolerance,
        "Percentage labels sum to {}, expected 100 +/- {}",
        labelled,
        tolerance
    );
}

/// Asserts that every row of the view passes the filter
pub fn assert_view_matches_filter(view: &FilteredView<'_>, filter: &ClaimFilter) {
    for record in view.iter() {
        assert!(
            filter.hospitals().contains(&record.hospital_name),
            "Row for hospital {} is not in the selection {:?}",
            record.hospital_name,
            filter.hospitals()
        );
        assert!(
            filter.categories().contains(&record.category_name),
            "Row for category {} is not in the selection {:?}",
            record.category_name,
            filter.categories()
        );
    }
}
