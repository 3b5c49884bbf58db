//! Dashboard DTOs

use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::{CategoryTotal, ClaimDataset, DashboardView, HospitalLoad, Kpis, OutcomeShare};

use crate::dto::claims::TableResponse;
use crate::dto::filters::AppliedFilter;

#[derive(Debug, Serialize)]
pub struct KpiResponse {
    pub total_patients: usize,
    pub total_claim_amount: Decimal,
    pub average_claim_amount: Option<Decimal>,
    /// Whole units with thousands separators, as shown on the page
    pub total_claim_amount_display: String,
    pub average_claim_amount_display: String,
}

impl From<&Kpis> for KpiResponse {
    fn from(kpis: &Kpis) -> Self {
        Self {
            total_patients: kpis.total_patients,
            total_claim_amount: kpis.total_claim_amount.amount(),
            average_claim_amount: kpis.average_claim_amount.map(|a| a.amount()),
            total_claim_amount_display: kpis.total_claim_amount_display(),
            average_claim_amount_display: kpis.average_claim_amount_display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub title: String,
    pub filter: AppliedFilter,
    pub kpis: KpiResponse,
    pub claims_by_category: Vec<CategoryTotal>,
    pub patient_load_by_hospital: Vec<HospitalLoad>,
    pub patient_outcomes: Vec<OutcomeShare>,
    pub table: TableResponse,
}

impl DashboardResponse {
    pub fn new(dataset: &ClaimDataset, view: &DashboardView<'_>) -> Self {
        Self {
            title: view.title.to_string(),
            filter: AppliedFilter::from(&view.filter),
            kpis: KpiResponse::from(&view.kpis),
            claims_by_category: view.claims_by_category.clone(),
            patient_load_by_hospital: view.patient_load_by_hospital.clone(),
            patient_outcomes: view.patient_outcomes.clone(),
            table: TableResponse::from_view(dataset, &view.rows),
        }
    }
}
