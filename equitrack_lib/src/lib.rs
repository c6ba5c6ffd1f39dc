//! Domain layer for the equity participation tracker: dashboard aggregation,
//! input validation, display formatting, per-view state controllers, and the
//! notification queue.
//!
//! Wraps the `equitrack_api` crate. All derived data is recomputed from the
//! latest full collection snapshots; nothing is cached across requests.

pub mod dashboard;
pub mod error;
pub mod format;
pub mod notify;
pub mod validation;
pub mod views;

pub use equitrack_api;
pub use equitrack_api::types;
pub use equitrack_api::Client;

pub use error::{server_message, EquitrackError};
pub use notify::{Notifications, Toast, ToastId, ToastKind};
