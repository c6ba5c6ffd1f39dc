//! Dashboard aggregation: chart-ready summaries derived from the three raw
//! collections.
//!
//! Every function here is pure and recomputes from scratch; there is no
//! incremental state and no memoization. Percentage sums use exact decimal
//! arithmetic, so fractional increments (0.01 steps) never accumulate
//! floating-point error. Rounding happens at presentation time only.

use equitrack_api::types::{Company, Participation, Shareholder};
use rust_decimal::Decimal;

/// How many entries the bar/pie charts show.
pub const CHART_TOP_N: usize = 3;

/// How many rows the recent-participations list shows.
pub const RECENT_LIMIT: usize = 10;

/// A company's equity allocation: how much is sold and what remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyAllocation {
    pub company_id: i64,
    pub name: String,
    /// Sum of all participation percentages for this company.
    pub sold: Decimal,
    /// `100 - sold`. Deliberately not clamped: if the server allowed
    /// over-allocation this goes negative and display must cope.
    pub available: Decimal,
}

/// One shareholder's aggregate position across all companies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareholderSummary {
    pub shareholder_id: i64,
    pub name: String,
    pub count: usize,
    pub total_percentage: Decimal,
}

/// Computes the allocation for every company, preserving collection order.
///
/// All companies are included, even those with zero participations: the
/// purchase form needs the remaining capacity of each one.
pub fn company_allocations(
    companies: &[Company],
    participations: &[Participation],
) -> Vec<CompanyAllocation> {
    companies
        .iter()
        .map(|company| {
            let sold = sold_for(participations, company.id);
            CompanyAllocation {
                company_id: company.id,
                name: company.name.clone(),
                sold,
                available: Decimal::ONE_HUNDRED - sold,
            }
        })
        .collect()
}

/// Exact decimal sum of the percentages held in one company.
pub fn sold_for(participations: &[Participation], company_id: i64) -> Decimal {
    participations
        .iter()
        .filter(|p| p.company_id == company_id)
        .map(|p| p.percentage)
        .sum()
}

/// Remaining capacity for one company: `100 - sold`, never clamped.
pub fn available_for(participations: &[Participation], company_id: i64) -> Decimal {
    Decimal::ONE_HUNDRED - sold_for(participations, company_id)
}

/// The company bar chart: allocations sorted descending by `sold`, top 3.
/// The sort is stable, so ties keep collection order.
pub fn top_company_allocations(allocations: &[CompanyAllocation]) -> Vec<CompanyAllocation> {
    let mut sorted = allocations.to_vec();
    sorted.sort_by(|a, b| b.sold.cmp(&a.sold));
    sorted.truncate(CHART_TOP_N);
    sorted
}

/// The pie chart: the subset of a chart set with `sold > 0`. A fully unsold
/// company would be a zero-width slice, so it is dropped here while still
/// appearing in the bar comparisons.
pub fn pie_slices(chart: &[CompanyAllocation]) -> Vec<CompanyAllocation> {
    chart
        .iter()
        .filter(|a| a.sold > Decimal::ZERO)
        .cloned()
        .collect()
}

/// Computes the per-shareholder summary, preserving collection order.
pub fn shareholder_summaries(
    shareholders: &[Shareholder],
    participations: &[Participation],
) -> Vec<ShareholderSummary> {
    shareholders
        .iter()
        .map(|shareholder| {
            let held: Vec<&Participation> = participations
                .iter()
                .filter(|p| p.shareholder_id == shareholder.id)
                .collect();
            ShareholderSummary {
                shareholder_id: shareholder.id,
                name: shareholder.name.clone(),
                count: held.len(),
                total_percentage: held.iter().map(|p| p.percentage).sum(),
            }
        })
        .collect()
}

/// The shareholder bar chart: summaries sorted descending by total
/// percentage, top 3, stable on ties.
pub fn top_shareholder_summaries(summaries: &[ShareholderSummary]) -> Vec<ShareholderSummary> {
    let mut sorted = summaries.to_vec();
    sorted.sort_by(|a, b| b.total_percentage.cmp(&a.total_percentage));
    sorted.truncate(CHART_TOP_N);
    sorted
}

/// The ten most recent participations, newest first. The sort is stable, so
/// entries created in the same instant keep collection order.
pub fn recent_participations(participations: &[Participation]) -> Vec<Participation> {
    let mut sorted = participations.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(RECENT_LIMIT);
    sorted
}
