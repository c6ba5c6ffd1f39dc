//! Display formatting for tax ids, dates, and percentages.
//!
//! These are presentation helpers only; values cross the wire unformatted.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Formats an 11-digit CPF as `NNN.NNN.NNN-NN`.
///
/// Total over all inputs: anything that is not exactly 11 ASCII digits is
/// returned unchanged.
pub fn format_cpf(cpf: &str) -> String {
    if cpf.len() == 11 && cpf.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}.{}.{}-{}", &cpf[0..3], &cpf[3..6], &cpf[6..9], &cpf[9..11])
    } else {
        cpf.to_string()
    }
}

/// Formats a 14-digit CNPJ as `NN.NNN.NNN/NNNN-NN`.
///
/// Total over all inputs: anything that is not exactly 14 ASCII digits is
/// returned unchanged.
pub fn format_cnpj(cnpj: &str) -> String {
    if cnpj.len() == 14 && cnpj.bytes().all(|b| b.is_ascii_digit()) {
        format!(
            "{}.{}.{}/{}-{}",
            &cnpj[0..2],
            &cnpj[2..5],
            &cnpj[5..8],
            &cnpj[8..12],
            &cnpj[12..14]
        )
    } else {
        cnpj.to_string()
    }
}

/// Formats a date as `dd/mm/yyyy` (pt-BR convention of the original UI).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats a UTC timestamp as `dd/mm/yyyy`.
pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y").to_string()
}

/// Formats a percentage for display with exactly two decimal places.
/// Rounding happens here and only here; sums are always exact upstream.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}
