use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use equitrack_lib::error::server_message;
use equitrack_lib::types::ParticipationPayload;
use equitrack_lib::validation;
use equitrack_lib::views::DashboardView;
use equitrack_lib::{Client, Notifications};

use crate::output::{self, OutputFormat};

#[derive(Args)]
pub struct ParticipationsArgs {
    #[command(subcommand)]
    command: ParticipationsCommand,
}

#[derive(Subcommand)]
enum ParticipationsCommand {
    /// List all participations
    List,
    /// Register a purchase of equity
    Create {
        #[arg(long)]
        shareholder_id: i64,
        #[arg(long)]
        company_id: i64,
        /// Percentage of the company, e.g. 12.5
        #[arg(long)]
        percentage: String,
    },
    /// Change the percentage of an existing participation
    Update {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        percentage: String,
    },
    /// Remove a participation
    Delete {
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run(
    args: &ParticipationsArgs,
    client: &Client,
    toasts: &Notifications,
    format: &OutputFormat,
) -> Result<()> {
    match &args.command {
        ParticipationsCommand::List => {
            let participations = client
                .list_participations()
                .await
                .map_err(|e| anyhow::anyhow!(server_message(&e, "failed to load participations")))?;
            output::print_participations(&participations, format)?;
        }
        ParticipationsCommand::Create {
            shareholder_id,
            company_id,
            percentage,
        } => {
            let mut view = DashboardView::new();
            view.open_purchase();
            {
                let form = view.form_mut().context("form not open")?;
                form.shareholder_id = Some(*shareholder_id);
                form.company_id = Some(*company_id);
                form.percentage = percentage.clone();
            }
            if !view.purchase(client, toasts).await {
                bail!("{}", view.error().unwrap_or("failed to save participation"));
            }
        }
        ParticipationsCommand::Update { id, percentage } => {
            let percentage = validation::parse_percentage(percentage)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
            let current = client
                .get_participation(*id)
                .await
                .map_err(|e| anyhow::anyhow!(server_message(&e, "failed to load participation")))?;
            let payload = ParticipationPayload {
                shareholder_id: current.shareholder_id,
                company_id: current.company_id,
                percentage,
            };
            client
                .update_participation(*id, &payload)
                .await
                .map_err(|e| anyhow::anyhow!(server_message(&e, "failed to save participation")))?;
            toasts.success("Participation updated");
        }
        ParticipationsCommand::Delete { id, yes } => {
            if !yes && !super::confirm(&format!("Delete participation {id}?"))? {
                println!("Aborted.");
                return Ok(());
            }
            client
                .delete_participation(*id)
                .await
                .map_err(|e| {
                    anyhow::anyhow!(server_message(&e, "failed to delete participation"))
                })?;
            toasts.success("Participation deleted");
        }
    }

    Ok(())
}
