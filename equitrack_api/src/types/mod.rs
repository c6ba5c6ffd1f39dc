//! Wire types for the three REST resources.
//!
//! Field names on the wire are Portuguese (fixed by the remote contract);
//! Rust field names are English and mapped with `serde(rename)`.

mod company;
mod participation;
mod shareholder;

pub use company::{Company, CompanyPayload};
pub use participation::{Participation, ParticipationPayload};
pub use shareholder::{Shareholder, ShareholderPayload};
