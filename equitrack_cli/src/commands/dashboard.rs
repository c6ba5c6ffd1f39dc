use anyhow::{bail, Result};
use equitrack_lib::views::DashboardView;
use equitrack_lib::Client;
use serde::Serialize;

use crate::output::{self, OutputFormat};

/// JSON shape of the full dashboard: every company allocation plus the
/// top-three charts and the recent activity feed.
#[derive(Serialize)]
struct DashboardReport {
    allocations: Vec<serde_json::Value>,
    company_chart: Vec<serde_json::Value>,
    pie_chart: Vec<serde_json::Value>,
    shareholder_chart: Vec<serde_json::Value>,
    recent: Vec<equitrack_lib::types::Participation>,
}

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let mut view = DashboardView::new();
    view.load(client).await;
    if let Some(err) = view.error() {
        bail!("{err}");
    }

    match format {
        OutputFormat::Table => {
            println!("Top companies by sold equity");
            output::print_allocation_table(&view.company_chart());
            println!();
            println!("Sold equity distribution");
            output::print_allocation_table(&view.pie_chart());
            println!();
            println!("Top shareholders by total percentage");
            output::print_summary_table(&view.shareholder_chart());
            println!();
            println!("Recent participations");
            output::print_recent_table(&view.recent());
        }
        OutputFormat::Json => {
            let report = DashboardReport {
                allocations: rows_json(&output::build_allocation_rows(&view.allocations()))?,
                company_chart: rows_json(&output::build_allocation_rows(&view.company_chart()))?,
                pie_chart: rows_json(&output::build_allocation_rows(&view.pie_chart()))?,
                shareholder_chart: rows_json(&output::build_summary_rows(
                    &view.shareholder_chart(),
                ))?,
                recent: view.recent(),
            };
            output::print_json(&report);
        }
        // CSV carries the full allocation table, one row per company.
        OutputFormat::Csv => {
            output::print_csv(&output::build_allocation_rows(&view.allocations()))?;
        }
    }

    Ok(())
}

fn rows_json<T: Serialize>(rows: &[T]) -> Result<Vec<serde_json::Value>> {
    rows.iter()
        .map(|r| serde_json::to_value(r).map_err(Into::into))
        .collect()
}
