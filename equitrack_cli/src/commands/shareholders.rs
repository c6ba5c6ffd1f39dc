use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use equitrack_lib::views::ShareholdersView;
use equitrack_lib::{Client, Notifications};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ShareholdersArgs {
    #[command(subcommand)]
    command: ShareholdersCommand,
}

#[derive(Subcommand)]
enum ShareholdersCommand {
    /// List all registered shareholders
    List,
    /// Register a new shareholder
    Create {
        #[arg(long)]
        name: String,
        /// CPF, masked or digits only
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        email: String,
    },
    /// Update an existing shareholder
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        cpf: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Remove a shareholder
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    args: &ShareholdersArgs,
    client: &Client,
    toasts: &Notifications,
    format: &OutputFormat,
) -> Result<()> {
    let mut view = ShareholdersView::new();

    match &args.command {
        ShareholdersCommand::List => {
            view.load(client).await;
            if let Some(err) = view.error() {
                bail!("{err}");
            }
            output::print_shareholders(view.shareholders(), format)?;
        }
        ShareholdersCommand::Create { name, cpf, email } => {
            view.open_create();
            {
                let form = view.form_mut().context("form not open")?;
                form.name = name.clone();
                form.cpf = cpf.clone();
                form.email = email.clone();
            }
            if !view.save(client, toasts).await {
                bail!("{}", view.error().unwrap_or("failed to save shareholder"));
            }
        }
        ShareholdersCommand::Update {
            id,
            name,
            cpf,
            email,
        } => {
            view.load(client).await;
            if let Some(err) = view.error() {
                bail!("{err}");
            }
            if !view.open_edit(*id) {
                bail!("no shareholder with id {id}");
            }
            {
                let form = view.form_mut().context("form not open")?;
                if let Some(name) = name {
                    form.name = name.clone();
                }
                if let Some(cpf) = cpf {
                    form.cpf = cpf.clone();
                }
                if let Some(email) = email {
                    form.email = email.clone();
                }
            }
            if !view.save(client, toasts).await {
                bail!("{}", view.error().unwrap_or("failed to save shareholder"));
            }
        }
        ShareholdersCommand::Delete { id, yes } => {
            if !yes && !super::confirm(&format!("Delete shareholder {id}?"))? {
                println!("Aborted.");
                return Ok(());
            }
            if !view.delete(client, toasts, *id).await {
                bail!("{}", view.error().unwrap_or("failed to delete shareholder"));
            }
        }
    }

    Ok(())
}
