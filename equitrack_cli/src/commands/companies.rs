use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use equitrack_lib::views::CompaniesView;
use equitrack_lib::{Client, Notifications};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct CompaniesArgs {
    #[command(subcommand)]
    command: CompaniesCommand,
}

#[derive(Subcommand)]
enum CompaniesCommand {
    /// List all registered companies
    List,
    /// Register a new company
    Create {
        #[arg(long)]
        name: String,
        /// CNPJ, masked or digits only
        #[arg(long)]
        cnpj: String,
        #[arg(long)]
        address: String,
        /// Founding date, YYYY-MM-DD
        #[arg(long)]
        founded_on: String,
    },
    /// Update an existing company
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        cnpj: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        founded_on: Option<String>,
    },
    /// Remove a company
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    args: &CompaniesArgs,
    client: &Client,
    toasts: &Notifications,
    format: &OutputFormat,
) -> Result<()> {
    let mut view = CompaniesView::new();

    match &args.command {
        CompaniesCommand::List => {
            view.load(client).await;
            if let Some(err) = view.error() {
                bail!("{err}");
            }
            output::print_companies(view.companies(), format)?;
        }
        CompaniesCommand::Create {
            name,
            cnpj,
            address,
            founded_on,
        } => {
            view.open_create();
            {
                let form = view.form_mut().context("form not open")?;
                form.name = name.clone();
                form.cnpj = cnpj.clone();
                form.address = address.clone();
                form.founded_on = founded_on.clone();
            }
            if !view.save(client, toasts).await {
                bail!("{}", view.error().unwrap_or("failed to save company"));
            }
        }
        CompaniesCommand::Update {
            id,
            name,
            cnpj,
            address,
            founded_on,
        } => {
            view.load(client).await;
            if let Some(err) = view.error() {
                bail!("{err}");
            }
            if !view.open_edit(*id) {
                bail!("no company with id {id}");
            }
            {
                let form = view.form_mut().context("form not open")?;
                if let Some(name) = name {
                    form.name = name.clone();
                }
                if let Some(cnpj) = cnpj {
                    form.cnpj = cnpj.clone();
                }
                if let Some(address) = address {
                    form.address = address.clone();
                }
                if let Some(founded_on) = founded_on {
                    form.founded_on = founded_on.clone();
                }
            }
            if !view.save(client, toasts).await {
                bail!("{}", view.error().unwrap_or("failed to save company"));
            }
        }
        CompaniesCommand::Delete { id, yes } => {
            if !yes && !super::confirm(&format!("Delete company {id}?"))? {
                println!("Aborted.");
                return Ok(());
            }
            if !view.delete(client, toasts, *id).await {
                bail!("{}", view.error().unwrap_or("failed to delete company"));
            }
        }
    }

    Ok(())
}
