//! State controller for the shareholders CRUD view.

use equitrack_api::{Client, Shareholder, ShareholderPayload};

use crate::error::{server_message, EquitrackError};
use crate::notify::Notifications;
use crate::validation;

use super::input_message;

/// Modal form state. `editing_id` of `None` means create mode; `Some(id)`
/// means edit mode, pre-filled from the selected shareholder.
#[derive(Debug, Clone, Default)]
pub struct ShareholderForm {
    pub editing_id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub email: String,
}

#[derive(Default)]
pub struct ShareholdersView {
    shareholders: Vec<Shareholder>,
    loading: bool,
    error: Option<String>,
    form: Option<ShareholderForm>,
}

impl ShareholdersView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest fetched snapshot.
    pub fn shareholders(&self) -> &[Shareholder] {
        &self.shareholders
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> Option<&ShareholderForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ShareholderForm> {
        self.form.as_mut()
    }

    /// Replaces the snapshot with a fresh full fetch.
    pub async fn load(&mut self, client: &Client) {
        self.loading = true;
        self.error = None;
        match client.list_shareholders().await {
            Ok(shareholders) => self.shareholders = shareholders,
            Err(err) => {
                tracing::error!("failed to load shareholders: {}", err);
                self.error = Some("failed to load shareholders".to_string());
            }
        }
        self.loading = false;
    }

    /// Opens the form in create mode.
    pub fn open_create(&mut self) {
        self.form = Some(ShareholderForm::default());
    }

    /// Opens the form in edit mode, pre-filled from the snapshot. Returns
    /// `false` when the id is not in the current snapshot.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(existing) = self.shareholders.iter().find(|s| s.id == id) else {
            return false;
        };
        self.form = Some(ShareholderForm {
            editing_id: Some(id),
            name: existing.name.clone(),
            cpf: existing.cpf.clone(),
            email: existing.email.clone(),
        });
        true
    }

    /// Closes the form and clears the error slot.
    pub fn close_form(&mut self) {
        self.form = None;
        self.error = None;
    }

    /// Submits the open form: create when `editing_id` is `None`, update
    /// otherwise. On success the snapshot is fully reloaded before the form
    /// closes; on failure the form stays open with the server's message in
    /// the error slot.
    pub async fn save(&mut self, client: &Client, toasts: &Notifications) -> bool {
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

        let result = match form.editing_id {
            Some(id) => client
                .update_shareholder(id, &payload)
                .await
                .map(|_| "Shareholder updated"),
            None => client
                .create_shareholder(&payload)
                .await
                .map(|_| "Shareholder created"),
        };

        match result {
            Ok(message) => {
                self.load(client).await;
                self.form = None;
                toasts.success(message);
                true
            }
            Err(err) => {
                self.error = Some(server_message(&err, "failed to save shareholder"));
                false
            }
        }
    }

    /// Deletes a shareholder and reloads. Confirmation is the caller's
    /// responsibility; this method assumes it was already given.
    pub async fn delete(&mut self, client: &Client, toasts: &Notifications, id: i64) -> bool {
        self.error = None;
        match client.delete_shareholder(id).await {
            Ok(()) => {
                self.load(client).await;
                toasts.success("Shareholder deleted");
                true
            }
            Err(err) => {
                self.error = Some(server_message(&err, "failed to delete shareholder"));
                false
            }
        }
    }
}

fn build_payload(form: &ShareholderForm) -> Result<ShareholderPayload, EquitrackError> {
    Ok(ShareholderPayload {
        name: validation::validate_name(&form.name)?,
        cpf: validation::validate_cpf(&form.cpf)?,
        email: validation::validate_email(&form.email)?,
    })
}
