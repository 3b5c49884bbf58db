//! Comprehensive tests for domain_claims

use rust_decimal_macros::dec;

use core_kernel::ClaimAmount;
use domain_claims::aggregation::{claims_by_category, patient_load_by_hospital, patient_outcomes};
use domain_claims::dataset::{ColumnKind, TableColumn};
use domain_claims::{
    render, ClaimDataset, ClaimFilter, FilterOptions, FilteredView, Kpis, MortalityOutcome,
    DASHBOARD_TITLE, DEFAULT_HOSPITAL_COUNT,
};
use test_utils::{
    assert_amount_eq, assert_percentages_sum_to_100, assert_view_matches_filter,
    ClaimFixtures, ClaimRecordBuilder,
};

fn filter(hospitals: &[&str], categories: &[&str]) -> ClaimFilter {
    ClaimFilter::new(
        hospitals.iter().map(|s| s.to_string()).collect(),
        categories.iter().map(|s| s.to_string()).collect(),
    )
}

// ============================================================================
// Record Tests
// ============================================================================

mod record_tests {
    use super::*;

    #[test]
    fn test_mortality_parse_yes_and_no() {
        assert_eq!(MortalityOutcome::parse_cell("Y"), Some(MortalityOutcome::Yes));
        assert_eq!(MortalityOutcome::parse_cell("N"), Some(MortalityOutcome::No));
    }

    #[test]
    fn test_mortality_spellings_are_not_merged() {
        for raw in ["yes", "y", "No", " N"] {
            assert_eq!(
                MortalityOutcome::parse_cell(raw),
                Some(MortalityOutcome::Other(raw.to_string()))
            );
        }
    }

    #[test]
    fn test_mortality_cell_shows_source_text() {
        let record = ClaimRecordBuilder::new()
            .mortality(MortalityOutcome::parse_cell("yes").unwrap())
            .build();
        assert_eq!(record.cell(ColumnKind::Mortality), "yes");
    }

    #[test]
    fn test_mortality_blank_is_missing() {
        assert_eq!(MortalityOutcome::parse_cell(""), None);
        assert_eq!(MortalityOutcome::parse_cell("  "), None);
    }

    #[test]
    fn test_mortality_other_values_kept_verbatim() {
        let outcome = MortalityOutcome::parse_cell("Transferred").unwrap();
        assert_eq!(outcome, MortalityOutcome::Other("Transferred".to_string()));
        assert_eq!(outcome.label(), "Transferred");
    }

    #[test]
    fn test_mortality_labels() {
        assert_eq!(MortalityOutcome::Yes.label(), "Y");
        assert_eq!(MortalityOutcome::No.to_string(), "N");
    }

    #[test]
    fn test_mortality_serializes_as_label() {
        let json = serde_json::to_string(&MortalityOutcome::Yes).unwrap();
        assert_eq!(json, "\"Y\"");
    }

    #[test]
    fn test_record_cells() {
        let record = ClaimRecordBuilder::new()
            .hospital("H1")
            .category("ICU")
            .amount(dec!(2000.50))
            .extra(vec!["P7".to_string()])
            .build();

        assert_eq!(record.cell(ColumnKind::HospitalName), "H1");
        assert_eq!(record.cell(ColumnKind::CategoryName), "ICU");
        assert_eq!(record.cell(ColumnKind::ClaimAmount), "2000.50");
        assert_eq!(record.cell(ColumnKind::ClaimDate), "2024-01-05");
        assert_eq!(record.cell(ColumnKind::Mortality), "N");
        assert_eq!(record.cell(ColumnKind::Extra(0)), "P7");
    }

    #[test]
    fn test_record_missing_cells_are_blank() {
        let record = ClaimRecordBuilder::new()
            .without_amount()
            .without_date()
            .without_mortality()
            .build();

        assert_eq!(record.cell(ColumnKind::ClaimAmount), "");
        assert_eq!(record.cell(ColumnKind::ClaimDate), "");
        assert_eq!(record.cell(ColumnKind::Mortality), "");
        assert_eq!(record.cell(ColumnKind::Extra(3)), "");
    }
}

// ============================================================================
// Dataset Tests
// ============================================================================

mod dataset_tests {
    use super::*;

    #[test]
    fn test_distinct_hospitals_in_encounter_order() {
        let dataset = ClaimFixtures::three_rows();
        assert_eq!(dataset.hospitals(), vec!["H1", "H2"]);
        assert_eq!(dataset.categories(), vec!["Surgery", "ICU"]);
    }

    #[test]
    fn test_from_records_uses_core_columns() {
        let dataset = ClaimFixtures::three_rows();
        assert_eq!(dataset.columns(), TableColumn::core_columns().as_slice());
        assert_eq!(dataset.len(), 3);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.source(), "three_rows");
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = ClaimDataset::from_records("empty", vec![]);
        assert!(dataset.is_empty());
        assert!(dataset.hospitals().is_empty());
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

mod filter_tests {
    use super::*;

    #[test]
    fn test_default_options_take_first_five_hospitals() {
        let dataset = ClaimFixtures::seven_hospitals();
        let options = FilterOptions::from_dataset(&dataset, DEFAULT_HOSPITAL_COUNT);

        assert_eq!(options.hospitals.len(), 7);
        assert_eq!(options.default_hospitals, vec!["H1", "H2", "H3", "H4", "H5"]);
        assert_eq!(options.default_categories, options.categories);
        assert_eq!(options.categories, vec!["Surgery", "Cardiology", "Oncology"]);
    }

    #[test]
    fn test_default_options_with_fewer_hospitals_than_count() {
        let dataset = ClaimFixtures::three_rows();
        let options = FilterOptions::from_dataset(&dataset, DEFAULT_HOSPITAL_COUNT);
        assert_eq!(options.default_hospitals, vec!["H1", "H2"]);
    }

    #[test]
    fn test_default_filter_excludes_later_hospitals() {
        let dataset = ClaimFixtures::seven_hospitals();
        let options = FilterOptions::from_dataset(&dataset, DEFAULT_HOSPITAL_COUNT);
        let view = options.default_filter().apply(&dataset);

        assert_eq!(view.len(), 5);
        assert!(view.iter().all(|r| r.hospital_name != "H6" && r.hospital_name != "H7"));
    }

    #[test]
    fn test_filter_is_conjunction_across_dimensions() {
        let dataset = ClaimFixtures::three_rows();
        let f = filter(&["H1"], &["Surgery"]);
        let view = f.apply(&dataset);

        assert_eq!(view.len(), 1);
        assert_eq!(view.rows()[0].category_name, "Surgery");
        assert_eq!(view.rows()[0].hospital_name, "H1");
    }

    #[test]
    fn test_filter_is_union_within_dimension() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["H1", "H2"], &["Surgery"]).apply(&dataset);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn test_empty_hospital_selection_yields_nothing() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&[], &["Surgery", "ICU"]).apply(&dataset);
        assert!(view.is_empty());
    }

    #[test]
    fn test_empty_category_selection_yields_nothing() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["H1", "H2"], &[]).apply(&dataset);
        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_values_match_nothing() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["Nowhere"], &["Surgery"]).apply(&dataset);
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_keeps_source_order() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["H2", "H1"], &["ICU", "Surgery"]).apply(&dataset);
        let amounts: Vec<_> = view.iter().map(|r| r.claim_amount.unwrap().amount()).collect();
        assert_eq!(amounts, vec![dec!(1000), dec!(2000), dec!(500)]);
    }

    #[test]
    fn test_filter_does_not_mutate_dataset() {
        let dataset = ClaimFixtures::three_rows();
        let before = dataset.clone();
        let _ = filter(&["H1"], &["ICU"]).apply(&dataset);
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_new_drops_duplicates() {
        let f = filter(&["H1", "H1", "H2"], &["ICU", "ICU"]);
        assert_eq!(f.hospitals(), ["H1".to_string(), "H2".to_string()]);
        assert_eq!(f.categories(), ["ICU".to_string()]);
    }

    #[test]
    fn test_with_defaults_fills_unspecified_dimensions() {
        let dataset = ClaimFixtures::seven_hospitals();
        let options = FilterOptions::from_dataset(&dataset, 2);

        let f = ClaimFilter::with_defaults(&options, None, Some(vec!["Oncology".to_string()]));
        assert_eq!(f.hospitals(), ["H1".to_string(), "H2".to_string()]);
        assert_eq!(f.categories(), ["Oncology".to_string()]);
    }

    #[test]
    fn test_with_defaults_keeps_explicit_empty_selection() {
        let dataset = ClaimFixtures::three_rows();
        let options = FilterOptions::from_dataset(&dataset, DEFAULT_HOSPITAL_COUNT);

        let f = ClaimFilter::with_defaults(&options, Some(vec![]), None);
        assert!(f.hospitals().is_empty());
        assert!(f.apply(&dataset).is_empty());
    }

    #[test]
    fn test_matches_agrees_with_apply() {
        let dataset = ClaimFixtures::seven_hospitals();
        let f = filter(&["H1", "H7"], &["Oncology", "Surgery"]);
        let view = f.apply(&dataset);

        let expected = dataset.records().iter().filter(|r| f.matches(r)).count();
        assert_eq!(view.len(), expected);
        assert_view_matches_filter(&view, &f);
    }
}

// ============================================================================
// Aggregation Tests
// ============================================================================

mod aggregation_tests {
    use super::*;

    #[test]
    fn test_kpis_for_example_selection() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["H1"], &["Surgery", "ICU"]).apply(&dataset);
        let kpis = Kpis::compute(&view);

        assert_eq!(kpis.total_patients, 2);
        assert_amount_eq(kpis.total_claim_amount, dec!(3000));
        assert_amount_eq(kpis.average_claim_amount.unwrap(), dec!(1500));
        assert_eq!(kpis.total_claim_amount_display(), "3,000");
        assert_eq!(kpis.average_claim_amount_display(), "1,500");
    }

    #[test]
    fn test_kpis_for_empty_view() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&[], &[]).apply(&dataset);
        let kpis = Kpis::compute(&view);

        assert_eq!(kpis.total_patients, 0);
        assert!(kpis.total_claim_amount.is_zero());
        assert_eq!(kpis.average_claim_amount, None);
        assert_eq!(kpis.average_claim_amount_display(), "0");
    }

    #[test]
    fn test_kpis_exclude_missing_amounts() {
        let dataset = ClaimDataset::from_records(
            "missing",
            vec![
                ClaimRecordBuilder::new().amount(dec!(1000)).build(),
                ClaimRecordBuilder::new().without_amount().build(),
                ClaimRecordBuilder::new().amount(dec!(2000)).build(),
            ],
        );
        let kpis = Kpis::compute(&FilteredView::all(&dataset));

        assert_eq!(kpis.total_patients, 3);
        assert_amount_eq(kpis.total_claim_amount, dec!(3000));
        assert_amount_eq(kpis.average_claim_amount.unwrap(), dec!(1500));
    }

    #[test]
    fn test_claims_by_category_sorted_ascending() {
        let dataset = ClaimFixtures::three_rows();
        let totals = claims_by_category(&FilteredView::all(&dataset));

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "Surgery");
        assert_amount_eq(totals[0].total_claim_amount, dec!(1500));
        assert_eq!(totals[1].category, "ICU");
        assert_amount_eq(totals[1].total_claim_amount, dec!(2000));
    }

    #[test]
    fn test_claims_by_category_ties_sorted_by_name() {
        let dataset = ClaimDataset::from_records(
            "ties",
            vec![
                ClaimRecordBuilder::new().category("Renal").amount(dec!(100)).build(),
                ClaimRecordBuilder::new().category("Burns").amount(dec!(100)).build(),
            ],
        );
        let totals = claims_by_category(&FilteredView::all(&dataset));
        assert_eq!(totals[0].category, "Burns");
        assert_eq!(totals[1].category, "Renal");
    }

    #[test]
    fn test_category_with_only_missing_amounts_sums_to_zero() {
        let dataset = ClaimDataset::from_records(
            "missing",
            vec![
                ClaimRecordBuilder::new().category("Renal").without_amount().build(),
                ClaimRecordBuilder::new().category("Burns").amount(dec!(10)).build(),
            ],
        );
        let totals = claims_by_category(&FilteredView::all(&dataset));
        assert_eq!(totals[0].category, "Renal");
        assert_eq!(totals[0].total_claim_amount, ClaimAmount::zero());
    }

    #[test]
    fn test_patient_load_descending_with_encounter_order_ties() {
        let dataset = ClaimFixtures::seven_hospitals();
        let load = patient_load_by_hospital(&FilteredView::all(&dataset));

        assert_eq!(load[0].hospital, "H7");
        assert_eq!(load[0].patients, 3);
        let rest: Vec<&str> = load[1..].iter().map(|l| l.hospital.as_str()).collect();
        assert_eq!(rest, vec!["H1", "H2", "H3", "H4", "H5", "H6"]);
    }

    #[test]
    fn test_patient_outcomes_percentages() {
        let dataset = ClaimFixtures::three_rows();
        let outcomes = patient_outcomes(&FilteredView::all(&dataset));

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].outcome, MortalityOutcome::No);
        assert_eq!(outcomes[0].patients, 2);
        assert_eq!(outcomes[0].percentage_label, "66.7%");
        assert_eq!(outcomes[1].outcome, MortalityOutcome::Yes);
        assert_eq!(outcomes[1].percentage_label, "33.3%");
        assert_percentages_sum_to_100(&outcomes);
    }

    #[test]
    fn test_patient_outcomes_skip_missing() {
        let dataset = ClaimDataset::from_records(
            "missing",
            vec![
                ClaimRecordBuilder::new().mortality(MortalityOutcome::Yes).build(),
                ClaimRecordBuilder::new().without_mortality().build(),
            ],
        );
        let outcomes = patient_outcomes(&FilteredView::all(&dataset));

        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].percentage_label, "100.0%");
    }

    #[test]
    fn test_patient_outcomes_keep_spellings_apart() {
        let dataset = ClaimDataset::from_records(
            "spellings",
            ["Y", "yes", "Y", "N"]
                .iter()
                .map(|raw| {
                    ClaimRecordBuilder::new()
                        .mortality(MortalityOutcome::parse_cell(raw).unwrap())
                        .build()
                })
                .collect(),
        );
        let outcomes = patient_outcomes(&FilteredView::all(&dataset));

        let labels: Vec<&str> = outcomes.iter().map(|o| o.outcome.label()).collect();
        assert_eq!(labels, vec!["Y", "yes", "N"]);
        assert_eq!(outcomes[0].percentage_label, "50.0%");
        assert_eq!(outcomes[1].percentage_label, "25.0%");
    }

    #[test]
    fn test_breakdowns_for_empty_view_are_empty() {
        let dataset = ClaimFixtures::three_rows();
        let view = filter(&["Nowhere"], &["ICU"]).apply(&dataset);

        assert!(claims_by_category(&view).is_empty());
        assert!(patient_load_by_hospital(&view).is_empty());
        assert!(patient_outcomes(&view).is_empty());
    }
}

// ============================================================================
// Dashboard Tests
// ============================================================================

mod dashboard_tests {
    use super::*;

    #[test]
    fn test_render_example_selection() {
        let dataset = ClaimFixtures::three_rows();
        let f = filter(&["H1"], &["Surgery", "ICU"]);
        let view = render(&dataset, &f);

        assert_eq!(view.title, DASHBOARD_TITLE);
        assert_eq!(view.filter, f);
        assert_eq!(view.kpis.total_patients, 2);
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.claims_by_category.len(), 2);
        assert_eq!(view.patient_load_by_hospital.len(), 1);
        assert_eq!(view.patient_outcomes.len(), 2);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_render_empty_selection() {
        let dataset = ClaimFixtures::three_rows();
        let view = render(&dataset, &filter(&[], &["ICU"]));

        assert!(view.is_empty());
        assert_eq!(view.kpis.total_patients, 0);
        assert!(view.claims_by_category.is_empty());
        assert!(view.patient_outcomes.is_empty());
    }

    #[test]
    fn test_render_is_repeatable() {
        let dataset = ClaimFixtures::seven_hospitals();
        let options = FilterOptions::from_dataset(&dataset, DEFAULT_HOSPITAL_COUNT);
        let f = options.default_filter();

        assert_eq!(render(&dataset, &f), render(&dataset, &f));
    }

    #[test]
    fn test_render_serializes_to_json() {
        let dataset = ClaimFixtures::three_rows();
        let view = render(&dataset, &filter(&["H1"], &["ICU"]));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["kpis"]["total_patients"], 1);
        assert_eq!(json["kpis"]["total_claim_amount"], "2000");
        assert_eq!(json["rows"][0]["hospital_name"], "H1");
        assert_eq!(json["patient_outcomes"][0]["outcome"], "N");
    }
}
