use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shareholder as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shareholder {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    /// Tax id, exactly 11 ASCII digits, unique server-side.
    pub cpf: String,

    pub email: String,

    #[serde(rename = "data_cadastro")]
    pub registered_at: DateTime<Utc>,
}

/// Create/update payload for a shareholder. The server assigns `id` and
/// `data_cadastro`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareholderPayload {
    #[serde(rename = "nome")]
    pub name: String,

    pub cpf: String,

    pub email: String,
}
