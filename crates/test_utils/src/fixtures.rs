//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim data. These fixtures are consistent and
//! predictable so tests can assert exact aggregates.

use chrono::NaiveDate;
use domain_claims::{ClaimDataset, MortalityOutcome};
use rust_decimal_macros::dec;

use crate::builders::ClaimRecordBuilder;

/// Fixture for claim datasets
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// The three-row example:
    /// (H1, Surgery, 1000, Y), (H1, ICU, 2000, N), (H2, Surgery, 500, N)
    pub fn three_rows() -> ClaimDataset {
        ClaimDataset::from_records(
            "three_rows",
            vec![
                ClaimRecordBuilder::new()
                    .hospital("H1")
                    .category("Surgery")
                    .amount(dec!(1000))
                    .date(ymd(2024, 1, 5))
                    .mortality(MortalityOutcome::Yes)
                    .build(),
                ClaimRecordBuilder::new()
                    .hospital("H1")
                    .category("ICU")
                    .amount(dec!(2000))
                    .date(ymd(2024, 1, 6))
                    .mortality(MortalityOutcome::No)
                    .build(),
                ClaimRecordBuilder::new()
                    .hospital("H2")
                    .category("Surgery")
                    .amount(dec!(500))
                    .date(ymd(2024, 1, 7))
                    .mortality(MortalityOutcome::No)
                    .build(),
            ],
        )
    }

    /// Seven hospitals, so the five-hospital default leaves two out.
    ///
    /// Hospitals first appear in the order H1..H7; H7 has the most rows.
    pub fn seven_hospitals() -> ClaimDataset {
        let mut records = Vec::new();
        for (i, hospital) in Self::hospital_names().iter().enumerate() {
            records.push(
                ClaimRecordBuilder::new()
                    .hospital(*hospital)
                    .category(if i % 2 == 0 { "Surgery" } else { "Cardiology" })
                    .amount(dec!(100) * rust_decimal::Decimal::from(i as i64 + 1))
                    .build(),
            );
        }
        records.push(
            ClaimRecordBuilder::new()
                .hospital("H7")
                .category("Oncology")
                .amount(dec!(5000))
                .mortality(MortalityOutcome::Yes)
                .build(),
        );
        records.push(
            ClaimRecordBuilder::new()
                .hospital("H7")
                .category("Oncology")
                .without_amount()
                .without_mortality()
                .build(),
        );
        ClaimDataset::from_records("seven_hospitals", records)
    }

    /// Hospital names used by [`ClaimFixtures::seven_hospitals`]
    pub fn hospital_names() -> [&'static str; 7] {
        ["H1", "H2", "H3", "H4", "H5", "H6", "H7"]
    }
}

/// Fixture for CSV source text
pub struct CsvFixtures;

impl CsvFixtures {
    /// The three-row example as a CSV file, with an extra `PATIENT_ID`
    /// column first and day-first dates
    pub fn three_rows() -> &'static str {
        "PATIENT_ID,HOSP_NAME,CATEGORY_NAME,CLAIM_AMOUNT,CLAIM_DATE,Mortality Y / N\n\
         P1,H1,Surgery,1000,05/01/2024,Y\n\
         P2,H1,ICU,2000,06/01/2024,N\n\
         P3,H2,Surgery,500,07/01/2024,N\n"
    }

    /// Rows with an unparsable date, a blank amount and a blank outcome
    pub fn with_missing_values() -> &'static str {
        "HOSP_NAME,CATEGORY_NAME,CLAIM_AMOUNT,CLAIM_DATE,Mortality Y / N\n\
         H1,Surgery,1000,not a date,Y\n\
         H1,ICU,,06/01/2024,\n\
         H2,Surgery,\"1,500\",31/12/2023,n\n"
    }

    /// A file lacking the `CLAIM_AMOUNT` column
    pub fn missing_amount_column() -> &'static str {
        "HOSP_NAME,CATEGORY_NAME,CLAIM_DATE,Mortality Y / N\n\
         H1,Surgery,05/01/2024,Y\n"
    }

    /// A file whose only row has a non-numeric amount
    pub fn non_numeric_amount() -> &'static str {
        "HOSP_NAME,CATEGORY_NAME,CLAIM_AMOUNT,CLAIM_DATE,Mortality Y / N\n\
         H1,Surgery,lots,05/01/2024,Y\n"
    }

    /// A file whose second data row has the wrong number of fields
    pub fn ragged() -> &'static str {
        "HOSP_NAME,CATEGORY_NAME,CLAIM_AMOUNT,CLAIM_DATE,Mortality Y / N\n\
         H1,Surgery,1000,05/01/2024,Y\n\
         H1,ICU\n"
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
