use anyhow::Result;
use serde::Serialize;
use equitrack_lib::dashboard::{CompanyAllocation, ShareholderSummary};
use equitrack_lib::format::{format_cnpj, format_cpf, format_date, format_datetime, format_percent};
use equitrack_lib::types::{Company, Participation, Shareholder};
use equitrack_lib::{Toast, ToastKind};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Tabled, Serialize)]
struct ShareholderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "CPF")]
    #[serde(rename = "CPF")]
    cpf: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Registered")]
    #[serde(rename = "Registered")]
    registered: String,
}

#[derive(Tabled, Serialize)]
struct CompanyRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "CNPJ")]
    #[serde(rename = "CNPJ")]
    cnpj: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
    #[tabled(rename = "Founded")]
    #[serde(rename = "Founded")]
    founded: String,
}

#[derive(Tabled, Serialize)]
struct ParticipationRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Shareholder")]
    #[serde(rename = "Shareholder")]
    shareholder: String,
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Percentage")]
    #[serde(rename = "Percentage")]
    percentage: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
}

#[derive(Tabled, Serialize)]
pub struct AllocationRow {
    #[tabled(rename = "Company")]
    #[serde(rename = "Company")]
    company: String,
    #[tabled(rename = "Sold")]
    #[serde(rename = "Sold")]
    sold: String,
    #[tabled(rename = "Available")]
    #[serde(rename = "Available")]
    available: String,
}

#[derive(Tabled, Serialize)]
pub struct SummaryRow {
    #[tabled(rename = "Shareholder")]
    #[serde(rename = "Shareholder")]
    shareholder: String,
    #[tabled(rename = "Participations")]
    #[serde(rename = "Participations")]
    participations: usize,
    #[tabled(rename = "Total")]
    #[serde(rename = "Total")]
    total: String,
}

// -- Row builders --

fn build_shareholder_rows(shareholders: &[Shareholder]) -> Vec<ShareholderRow> {
    shareholders
        .iter()
        .map(|s| ShareholderRow {
            id: s.id,
            name: s.name.clone(),
            cpf: format_cpf(&s.cpf),
            email: s.email.clone(),
            registered: format_datetime(s.registered_at),
        })
        .collect()
}

fn build_company_rows(companies: &[Company]) -> Vec<CompanyRow> {
    companies
        .iter()
        .map(|c| CompanyRow {
            id: c.id,
            name: c.name.clone(),
            cnpj: format_cnpj(&c.cnpj),
            address: c.address.clone(),
            founded: format_date(c.founded_on),
        })
        .collect()
}

fn build_participation_rows(participations: &[Participation]) -> Vec<ParticipationRow> {
    participations
        .iter()
        .map(|p| ParticipationRow {
            id: p.id,
            shareholder: p.shareholder_name.clone(),
            company: p.company_name.clone(),
            percentage: format_percent(p.percentage),
            date: format_datetime(p.created_at),
        })
        .collect()
}

pub fn build_allocation_rows(allocations: &[CompanyAllocation]) -> Vec<AllocationRow> {
    allocations
        .iter()
        .map(|a| AllocationRow {
            company: a.name.clone(),
            sold: format_percent(a.sold),
            available: format_percent(a.available),
        })
        .collect()
}

pub fn build_summary_rows(summaries: &[ShareholderSummary]) -> Vec<SummaryRow> {
    summaries
        .iter()
        .map(|s| SummaryRow {
            shareholder: s.name.clone(),
            participations: s.count,
            total: format_percent(s.total_percentage),
        })
        .collect()
}

// -- Printing --

pub fn print_shareholders(shareholders: &[Shareholder], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(&build_shareholder_rows(shareholders)),
        OutputFormat::Json => print_json(&shareholders),
        OutputFormat::Csv => print_csv(&build_shareholder_rows(shareholders))?,
    }
    Ok(())
}

pub fn print_companies(companies: &[Company], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(&build_company_rows(companies)),
        OutputFormat::Json => print_json(&companies),
        OutputFormat::Csv => print_csv(&build_company_rows(companies))?,
    }
    Ok(())
}

pub fn print_participations(participations: &[Participation], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(&build_participation_rows(participations)),
        OutputFormat::Json => print_json(&participations),
        OutputFormat::Csv => print_csv(&build_participation_rows(participations))?,
    }
    Ok(())
}

pub fn print_allocation_table(allocations: &[CompanyAllocation]) {
    print_table(&build_allocation_rows(allocations));
}

pub fn print_summary_table(summaries: &[ShareholderSummary]) {
    print_table(&build_summary_rows(summaries));
}

pub fn print_recent_table(participations: &[Participation]) {
    if participations.is_empty() {
        println!("(no participations registered)");
    } else {
        print_table(&build_participation_rows(participations));
    }
}

fn print_table<T: Tabled>(rows: &[T]) {
    println!("{}", Table::new(rows));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn render_toast(toast: &Toast) -> String {
    let kind = match toast.kind {
        ToastKind::Success => "ok",
        ToastKind::Error => "error",
        ToastKind::Info => "info",
    };
    format!("[{}] {}", kind, toast.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};
    use equitrack_lib::Notifications;
    use rust_decimal_macros::dec;

    fn sample_shareholders() -> Vec<Shareholder> {
        vec![Shareholder {
            id: 1,
            name: "Maria Silva".to_string(),
            cpf: "12345678901".to_string(),
            email: "maria.silva@example.com".to_string(),
            registered_at: "2024-01-10T14:30:00Z".parse::<DateTime<Utc>>().unwrap(),
        }]
    }

    fn sample_companies() -> Vec<Company> {
        vec![Company {
            id: 1,
            name: "Acme".to_string(),
            cnpj: "12345678000190".to_string(),
            address: "Av. Paulista, 1000".to_string(),
            founded_on: NaiveDate::from_ymd_opt(2010, 5, 20).unwrap(),
        }]
    }

    fn sample_participations() -> Vec<Participation> {
        vec![Participation {
            id: 10,
            shareholder_id: 1,
            company_id: 1,
            percentage: dec!(30),
            created_at: "2024-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            shareholder_name: "Maria Silva".to_string(),
            company_name: "Acme".to_string(),
        }]
    }

    #[test]
    fn shareholder_row_masks_cpf_and_date() {
        let rows = build_shareholder_rows(&sample_shareholders());
        assert_eq!(rows[0].cpf, "123.456.789-01");
        assert_eq!(rows[0].registered, "10/01/2024");
    }

    #[test]
    fn company_row_masks_cnpj() {
        let rows = build_company_rows(&sample_companies());
        assert_eq!(rows[0].cnpj, "12.345.678/0001-90");
        assert_eq!(rows[0].founded, "20/05/2010");
    }

    #[test]
    fn participation_row_formats_percentage() {
        let rows = build_participation_rows(&sample_participations());
        assert_eq!(rows[0].percentage, "30.00%");
        assert_eq!(rows[0].shareholder, "Maria Silva");
    }

    #[test]
    fn allocation_row_formats_negative_available() {
        let allocations = vec![CompanyAllocation {
            company_id: 1,
            name: "Oversold SA".to_string(),
            sold: dec!(120.5),
            available: dec!(-20.5),
        }];
        let rows = build_allocation_rows(&allocations);
        assert_eq!(rows[0].sold, "120.50%");
        assert_eq!(rows[0].available, "-20.50%");
    }

    #[test]
    fn summary_row_carries_count_and_total() {
        let summaries = vec![ShareholderSummary {
            shareholder_id: 1,
            name: "Maria Silva".to_string(),
            count: 2,
            total_percentage: dec!(42.5),
        }];
        let rows = build_summary_rows(&summaries);
        assert_eq!(rows[0].participations, 2);
        assert_eq!(rows[0].total, "42.50%");
    }

    #[test]
    fn csv_shareholder_headers() {
        let rows = build_shareholder_rows(&sample_shareholders());
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in &rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        let csv = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        assert_eq!(
            csv.lines().next().unwrap(),
            "ID,Name,CPF,Email,Registered"
        );
    }

    #[test]
    fn empty_collections_build_empty_rows() {
        assert!(build_shareholder_rows(&[]).is_empty());
        assert!(build_company_rows(&[]).is_empty());
        assert!(build_participation_rows(&[]).is_empty());
    }

    #[test]
    fn toast_rendering() {
        let toasts = Notifications::default();
        toasts.success("Shareholder created");
        let active = toasts.active();
        assert_eq!(render_toast(&active[0]), "[ok] Shareholder created");
    }
}
