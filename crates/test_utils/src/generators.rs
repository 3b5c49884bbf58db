//! Property-Based Test Generators
//!
//! Provides proptest strategies for random claim data. Names are drawn from
//! small pools so filters and groupings actually overlap.

use core_kernel::ClaimAmount;
use domain_claims::{ClaimDataset, ClaimFilter, ClaimRecord, MortalityOutcome};
use proptest::prelude::*;
use proptest::sample::subsequence;
use rust_decimal::Decimal;

/// Hospital names the generators pick from
pub const HOSPITAL_POOL: [&str; 6] = ["H1", "H2", "H3", "H4", "H5", "H6"];

/// Category names the generators pick from
pub const CATEGORY_POOL: [&str; 4] = ["Surgery", "ICU", "Cardiology", "Oncology"];

/// Strategy for hospital names
pub fn hospital_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(HOSPITAL_POOL.to_vec()).prop_map(String::from)
}

/// Strategy for category names
pub fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(CATEGORY_POOL.to_vec()).prop_map(String::from)
}

/// Strategy for claim amounts in minor units, sometimes missing
pub fn claim_amount_strategy() -> impl Strategy<Value = Option<ClaimAmount>> {
    prop::option::weighted(0.9, (0i64..100_000_000i64).prop_map(|minor| ClaimAmount::new(Decimal::new(minor, 2))))
}

/// Strategy for mortality outcomes, sometimes missing
pub fn mortality_strategy() -> impl Strategy<Value = Option<MortalityOutcome>> {
    prop::option::weighted(
        0.9,
        prop_oneof![
            4 => Just(MortalityOutcome::Yes),
            4 => Just(MortalityOutcome::No),
            1 => Just(MortalityOutcome::Other("Unknown".to_string())),
        ],
    )
}

/// Strategy for a single claim record
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        hospital_strategy(),
        category_strategy(),
        claim_amount_strategy(),
        mortality_strategy(),
    )
        .prop_map(|(hospital, category, amount, mortality)| {
            ClaimRecord::new(hospital, category, amount, None, mortality)
        })
}

/// Strategy for a dataset of up to `max_rows` records
pub fn dataset_strategy(max_rows: usize) -> impl Strategy<Value = ClaimDataset> {
    prop::collection::vec(claim_record_strategy(), 0..=max_rows)
        .prop_map(|records| ClaimDataset::from_records("generated", records))
}

/// Strategy for filters drawn from the pools, including empty selections
/// and a value no record ever has
pub fn filter_strategy() -> impl Strategy<Value = ClaimFilter> {
    let mut hospitals: Vec<String> = HOSPITAL_POOL.iter().map(|s| s.to_string()).collect();
    hospitals.push("Nowhere".to_string());
    let categories: Vec<String> = CATEGORY_POOL.iter().map(|s| s.to_string()).collect();
    let hospital_count = hospitals.len();
    let category_count = categories.len();

    (
        subsequence(hospitals, 0..=hospital_count),
        subsequence(categories, 0..=category_count),
    )
        .prop_map(|(h, c)| ClaimFilter::new(h, c))
}
