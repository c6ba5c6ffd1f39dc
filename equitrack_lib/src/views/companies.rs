//! State controller for the companies CRUD view.

use equitrack_api::{Client, Company, CompanyPayload};

use crate::error::{server_message, EquitrackError};
use crate::notify::Notifications;
use crate::validation;

use super::input_message;

/// Modal form state. The founding date stays a raw string until submission,
/// like the date input it mirrors.
#[derive(Debug, Clone, Default)]
pub struct CompanyForm {
    pub editing_id: Option<i64>,
    pub name: String,
    pub cnpj: String,
    pub address: String,
    pub founded_on: String,
}

#[derive(Default)]
pub struct CompaniesView {
    companies: Vec<Company>,
    loading: bool,
    error: Option<String>,
    form: Option<CompanyForm>,
}

impl CompaniesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest fetched snapshot.
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> Option<&CompanyForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut CompanyForm> {
        self.form.as_mut()
    }

    /// Replaces the snapshot with a fresh full fetch.
    pub async fn load(&mut self, client: &Client) {
        self.loading = true;
        self.error = None;
        match client.list_companies().await {
            Ok(companies) => self.companies = companies,
            Err(err) => {
                tracing::error!("failed to load companies: {}", err);
                self.error = Some("failed to load companies".to_string());
            }
        }
        self.loading = false;
    }

    /// Opens the form in create mode.
    pub fn open_create(&mut self) {
        self.form = Some(CompanyForm::default());
    }

    /// Opens the form in edit mode, pre-filled from the snapshot. Returns
    /// `false` when the id is not in the current snapshot.
    pub fn open_edit(&mut self, id: i64) -> bool {
        let Some(existing) = self.companies.iter().find(|c| c.id == id) else {
            return false;
        };
        self.form = Some(CompanyForm {
            editing_id: Some(id),
            name: existing.name.clone(),
            cnpj: existing.cnpj.clone(),
            address: existing.address.clone(),
            founded_on: existing.founded_on.to_string(),
        });
        true
    }

    /// Closes the form and clears the error slot.
    pub fn close_form(&mut self) {
        self.form = None;
        self.error = None;
    }

    /// Submits the open form: create when `editing_id` is `None`, update
    /// otherwise. Same contract as the shareholders view.
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
                .update_company(id, &payload)
                .await
                .map(|_| "Company updated"),
            None => client
                .create_company(&payload)
                .await
                .map(|_| "Company created"),
        };

        match result {
            Ok(message) => {
                self.load(client).await;
                self.form = None;
                toasts.success(message);
                true
            }
            Err(err) => {
                self.error = Some(server_message(&err, "failed to save company"));
                false
            }
        }
    }

    /// Deletes a company and reloads. Confirmation is the caller's
    /// responsibility.
    pub async fn delete(&mut self, client: &Client, toasts: &Notifications, id: i64) -> bool {
        self.error = None;
        match client.delete_company(id).await {
            Ok(()) => {
                self.load(client).await;
                toasts.success("Company deleted");
                true
            }
            Err(err) => {
                self.error = Some(server_message(&err, "failed to delete company"));
                false
            }
        }
    }
}

fn build_payload(form: &CompanyForm) -> Result<CompanyPayload, EquitrackError> {
    Ok(CompanyPayload {
        name: validation::validate_name(&form.name)?,
        cnpj: validation::validate_cnpj(&form.cnpj)?,
        address: validation::validate_address(&form.address)?,
        founded_on: validation::validate_date(&form.founded_on)?,
    })
}
