//! State controller for the dashboard: aggregate charts, the recent
//! participations list, and the purchase form.

use equitrack_api::types::{Company, Participation, Shareholder};
use equitrack_api::{Client, ParticipationPayload};
use rust_decimal::Decimal;

use crate::dashboard::{
    available_for, company_allocations, pie_slices, recent_participations,
    shareholder_summaries, top_company_allocations, top_shareholder_summaries,
    CompanyAllocation, ShareholderSummary,
};
use crate::error::{server_message, EquitrackError};
use crate::notify::Notifications;
use crate::validation;

use super::input_message;

/// Purchase form state. Selections stay unset until the user picks them;
/// the percentage stays a raw string until submission.
#[derive(Debug, Clone, Default)]
pub struct PurchaseForm {
    pub shareholder_id: Option<i64>,
    pub company_id: Option<i64>,
    pub percentage: String,
}

#[derive(Default)]
pub struct DashboardView {
    participations: Vec<Participation>,
    shareholders: Vec<Shareholder>,
    companies: Vec<Company>,
    loading: bool,
    error: Option<String>,
    form: Option<PurchaseForm>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn participations(&self) -> &[Participation] {
        &self.participations
    }

    pub fn shareholders(&self) -> &[Shareholder] {
        &self.shareholders
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> Option<&PurchaseForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut PurchaseForm> {
        self.form.as_mut()
    }

    /// Replaces all three snapshots with fresh full fetches, issued
    /// concurrently. One failure fails the whole load.
    pub async fn load(&mut self, client: &Client) {
        self.loading = true;
        self.error = None;
        match tokio::try_join!(
            client.list_participations(),
            client.list_shareholders(),
            client.list_companies(),
        ) {
            Ok((participations, shareholders, companies)) => {
                self.participations = participations;
                self.shareholders = shareholders;
                self.companies = companies;
            }
            Err(err) => {
                tracing::error!("failed to load dashboard data: {}", err);
                self.error = Some("failed to load dashboard data".to_string());
            }
        }
        self.loading = false;
    }

    // Derived data, recomputed from the current snapshots on every call.

    /// Allocation for every company, in collection order.
    pub fn allocations(&self) -> Vec<CompanyAllocation> {
        company_allocations(&self.companies, &self.participations)
    }

    /// The company bar chart (top 3 by sold percentage).
    pub fn company_chart(&self) -> Vec<CompanyAllocation> {
        top_company_allocations(&self.allocations())
    }

    /// The pie chart: the bar chart entries that actually have sold equity.
    pub fn pie_chart(&self) -> Vec<CompanyAllocation> {
        pie_slices(&self.company_chart())
    }

    /// The shareholder bar chart (top 3 by total percentage).
    pub fn shareholder_chart(&self) -> Vec<ShareholderSummary> {
        top_shareholder_summaries(&shareholder_summaries(
            &self.shareholders,
            &self.participations,
        ))
    }

    /// The ten most recent participations, newest first.
    pub fn recent(&self) -> Vec<Participation> {
        recent_participations(&self.participations)
    }

    /// Remaining capacity for one company, for the purchase form's company
    /// picker. Informational only: submission is not blocked on it, the
    /// server stays authoritative on the 100% invariant.
    pub fn available_for(&self, company_id: i64) -> Decimal {
        available_for(&self.participations, company_id)
    }

    /// Opens the purchase form.
    pub fn open_purchase(&mut self) {
        self.form = Some(PurchaseForm::default());
    }

    /// Closes the purchase form and clears the error slot.
    pub fn close_form(&mut self) {
        self.form = None;
        self.error = None;
    }

    /// Submits the purchase form. The only client-side bounds are required
    /// selections and 0 < percentage <= 100; anything else is rejected by
    /// the server and surfaced in the error slot.
    pub async fn purchase(&mut self, client: &Client, toasts: &Notifications) -> bool {
        let Some(form) = self.form.clone() else {
            return false;
        };
        self.error = None;

        let payload = match build_payload(&form) {
            Ok(payload) => payload,
            Err(err) => {
                self.error = Some(input_message(err));
                return false;
            }
        };

        match client.create_participation(&payload).await {
            Ok(_) => {
                self.load(client).await;
                self.form = None;
                toasts.success("Participation created");
                true
            }
            Err(err) => {
                self.error = Some(server_message(&err, "failed to create participation"));
                false
            }
        }
    }
}

fn build_payload(form: &PurchaseForm) -> Result<ParticipationPayload, EquitrackError> {
    let shareholder_id = form
        .shareholder_id
        .ok_or_else(|| EquitrackError::InvalidInput("select a shareholder".to_string()))?;
    let company_id = form
        .company_id
        .ok_or_else(|| EquitrackError::InvalidInput("select a company".to_string()))?;
    let percentage = validation::parse_percentage(&form.percentage)?;
    Ok(ParticipationPayload {
        shareholder_id,
        company_id,
        percentage,
    })
}
