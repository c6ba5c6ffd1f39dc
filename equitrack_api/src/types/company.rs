use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,

    #[serde(rename = "nome")]
    pub name: String,

    /// Tax id, exactly 14 ASCII digits, unique server-side.
    pub cnpj: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "data_fundacao")]
    pub founded_on: NaiveDate,
}

/// Create/update payload for a company. The server assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyPayload {
    #[serde(rename = "nome")]
    pub name: String,

    pub cnpj: String,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "data_fundacao")]
    pub founded_on: NaiveDate,
}
