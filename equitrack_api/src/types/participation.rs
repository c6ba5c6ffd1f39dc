use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One shareholder's percentage stake in one company.
///
/// List/read responses carry the denormalized shareholder and company names
/// so callers don't have to join against the other collections for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participation {
    pub id: i64,

    #[serde(rename = "acionista")]
    pub shareholder_id: i64,

    #[serde(rename = "empresa")]
    pub company_id: i64,

    /// Equity percentage in the open interval (0, 100]. Deserialized as an
    /// exact decimal; the server sends either a JSON number or a string.
    #[serde(rename = "percentual")]
    pub percentage: Decimal,

    #[serde(rename = "criado_em")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "acionista_nome")]
    pub shareholder_name: String,

    #[serde(rename = "empresa_nome")]
    pub company_name: String,
}

/// Create/update payload for a participation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationPayload {
    #[serde(rename = "acionista")]
    pub shareholder_id: i64,

    #[serde(rename = "empresa")]
    pub company_id: i64,

    #[serde(rename = "percentual")]
    pub percentage: Decimal,
}
