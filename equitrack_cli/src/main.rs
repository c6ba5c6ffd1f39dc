mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use equitrack_lib::{Client, Notifications};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "equitrack")]
#[command(about = "Manage shareholders, companies, and equity participations")]
struct Cli {
    /// Output format: table, json, or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Base URL of the API (overrides EQUITRACK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage shareholders
    Shareholders(commands::shareholders::ShareholdersArgs),
    /// Manage companies
    Companies(commands::companies::CompaniesArgs),
    /// Manage participations
    Participations(commands::participations::ParticipationsArgs),
    /// Show the aggregate dashboard
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("equitrack=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let client = match cli
        .api_url
        .or_else(|| std::env::var("EQUITRACK_API_URL").ok())
    {
        Some(url) => Client::with_base_url(&url),
        None => Client::new(),
    };
    let toasts = Notifications::default();

    match &cli.command {
        Commands::Shareholders(args) => {
            commands::shareholders::run(args, &client, &toasts, &format).await?
        }
        Commands::Companies(args) => {
            commands::companies::run(args, &client, &toasts, &format).await?
        }
        Commands::Participations(args) => {
            commands::participations::run(args, &client, &toasts, &format).await?
        }
        Commands::Dashboard => commands::dashboard::run(&client, &format).await?,
    }

    // Notifications queued by the views are flushed once on exit.
    for toast in toasts.active() {
        eprintln!("{}", output::render_toast(&toast));
    }

    Ok(())
}
