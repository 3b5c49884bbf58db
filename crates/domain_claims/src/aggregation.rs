//! KPI and chart aggregations over a filtered view
//!
//! Missing claim amounts are left out of sums and means. Missing mortality
//! outcomes are left out of the outcome breakdown. An empty view yields zero
//! patients, a zero total, no average, and empty breakdowns.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

use core_kernel::ClaimAmount;
use crate::filter::FilteredView;
use crate::record::MortalityOutcome;

/// The three headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kpis {
    /// Number of rows in the view
    pub total_patients: usize,
    /// Sum of the present claim amounts
    pub total_claim_amount: ClaimAmount,
    /// Mean of the present claim amounts, `None` when there are none
    pub average_claim_amount: Option<ClaimAmount>,
}

impl Kpis {
    pub fn compute(view: &FilteredView<'_>) -> Self {
        let amounts: Vec<ClaimAmount> = view.iter().filter_map(|r| r.claim_amount).collect();
        let total_claim_amount: ClaimAmount = amounts.iter().sum();

        Self {
            total_patients: view.len(),
            total_claim_amount,
            average_claim_amount: ClaimAmount::mean(total_claim_amount, amounts.len()),
        }
    }

    /// Total formatted for the KPI tile, e.g. `"3,000"`
    pub fn total_claim_amount_display(&self) -> String {
        self.total_claim_amount.to_grouped_string()
    }

    /// Average formatted for the KPI tile; an undefined average shows as `"0"`
    pub fn average_claim_amount_display(&self) -> String {
        self.average_claim_amount
            .unwrap_or_default()
            .to_grouped_string()
    }
}

/// Summed claim amount of one treatment category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total_claim_amount: ClaimAmount,
}

/// Number of patients seen by one hospital
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalLoad {
    pub hospital: String,
    pub patients: usize,
}

/// Share of patients with one mortality outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeShare {
    pub outcome: MortalityOutcome,
    pub patients: usize,
    /// Percentage of patients with a recorded outcome, 0..=100
    pub percentage: f64,
    /// `percentage` to one decimal place, e.g. `"66.7%"`
    pub percentage_label: String,
}

/// Claim amount per category, smallest total first.
///
/// Ties are broken by category name so the order is stable.
pub fn claims_by_category(view: &FilteredView<'_>) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in view.iter() {
        let slot = *index.entry(record.category_name.as_str()).or_insert_with(|| {
            totals.push(CategoryTotal {
                category: record.category_name.clone(),
                total_claim_amount: ClaimAmount::zero(),
            });
            totals.len() - 1
        });
        if let Some(amount) = record.claim_amount {
            totals[slot].total_claim_amount += amount;
        }
    }

    totals.sort_by(|a, b| {
        a.total_claim_amount
            .cmp(&b.total_claim_amount)
            .then_with(|| a.category.cmp(&b.category))
    });
    totals
}

/// Patients per hospital, busiest first. Ties keep first-seen order.
pub fn patient_load_by_hospital(view: &FilteredView<'_>) -> Vec<HospitalLoad> {
    value_counts(view.iter().map(|r| r.hospital_name.as_str()))
        .into_iter()
        .map(|(hospital, patients)| HospitalLoad {
            hospital: hospital.to_string(),
            patients,
        })
        .collect()
}

/// Patients per recorded mortality outcome, most frequent first
pub fn patient_outcomes(view: &FilteredView<'_>) -> Vec<OutcomeShare> {
    let counts = value_counts(view.iter().filter_map(|r| r.mortality.as_ref()));
    let recorded: usize = counts.iter().map(|(_, n)| n).sum();

    counts
        .into_iter()
        .map(|(outcome, patients)| {
            let percentage = patients as f64 / recorded as f64 * 100.0;
            OutcomeShare {
                outcome: outcome.clone(),
                patients,
                percentage,
                percentage_label: format!("{:.1}%", percentage),
            }
        })
        .collect()
}

/// Counts occurrences, most frequent first; ties keep first-seen order
fn value_counts<K: Eq + Hash + Copy>(values: impl Iterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    let mut index: HashMap<K, usize> = HashMap::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
