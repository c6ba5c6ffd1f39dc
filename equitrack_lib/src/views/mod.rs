//! Headless per-view state controllers.
//!
//! Each view owns a full-replacement snapshot of its collections, a loading
//! flag, and a single last-write-wins error slot cleared at the start of
//! every attempt. Mutations follow one contract: validate locally, issue one
//! remote call, await a full reload, then close the form and push a success
//! notification. On failure the server's most specific message lands in the
//! error slot and the form stays open for correction.

mod companies;
mod dashboard;
mod shareholders;

pub use companies::{CompaniesView, CompanyForm};
pub use dashboard::{DashboardView, PurchaseForm};
pub use shareholders::{ShareholderForm, ShareholdersView};

use crate::error::EquitrackError;

/// Renders a local validation failure for the error slot, without the
/// "Invalid input:" prefix the error type adds for logs.
fn input_message(err: EquitrackError) -> String {
    match err {
        EquitrackError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}
