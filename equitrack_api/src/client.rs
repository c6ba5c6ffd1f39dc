//! HTTP client for the equity tracking REST API.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    types::{
        Company, CompanyPayload, Participation, ParticipationPayload, Shareholder,
        ShareholderPayload,
    },
    Error,
};

const SHAREHOLDERS_PATH: &str = "/acionista/acionistas/";
const COMPANIES_PATH: &str = "/empresa/empresas/";
const PARTICIPATIONS_PATH: &str = "/participacao/participacoes/";

/// HTTP client for the equity tracking REST API.
///
/// Every call is exactly one fresh round trip: no retry, no backoff, no
/// caching. Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout.
pub struct Client {
    /// Base URL for the API.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://plancorp-challenge-backend.onrender.com".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Sends one request and returns the raw response body after the status
    /// check. Non-2xx responses become `Error::HttpStatus` carrying the
    /// (truncated) body so callers can extract server validation messages.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<String, Error> {
        let url = self.get_url(path)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        let mut request = client
            .request(method, url)
            .header("content-type", "application/json")
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach API: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn fetch<T>(
        &self,
        method: Method,
        path: &str,
        payload: Option<&impl Serialize>,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.send(method, path, payload).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    async fn remove(&self, path: &str) -> Result<(), Error> {
        // DELETE responds 204 with an empty body; nothing to parse.
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    // -- Shareholders --

    /// Fetches the full shareholder collection.
    pub async fn list_shareholders(&self) -> Result<Vec<Shareholder>, Error> {
        self.fetch(Method::GET, SHAREHOLDERS_PATH, None::<&()>).await
    }

    /// Fetches a single shareholder by id.
    pub async fn get_shareholder(&self, id: i64) -> Result<Shareholder, Error> {
        self.fetch(Method::GET, &item_path(SHAREHOLDERS_PATH, id), None::<&()>)
            .await
    }

    /// Creates a shareholder and returns the server-assigned record.
    pub async fn create_shareholder(
        &self,
        payload: &ShareholderPayload,
    ) -> Result<Shareholder, Error> {
        self.fetch(Method::POST, SHAREHOLDERS_PATH, Some(payload)).await
    }

    /// Updates a shareholder in place.
    pub async fn update_shareholder(
        &self,
        id: i64,
        payload: &ShareholderPayload,
    ) -> Result<Shareholder, Error> {
        self.fetch(Method::PUT, &item_path(SHAREHOLDERS_PATH, id), Some(payload))
            .await
    }

    /// Deletes a shareholder by id.
    pub async fn delete_shareholder(&self, id: i64) -> Result<(), Error> {
        self.remove(&item_path(SHAREHOLDERS_PATH, id)).await
    }

    // -- Companies --

    /// Fetches the full company collection.
    pub async fn list_companies(&self) -> Result<Vec<Company>, Error> {
        self.fetch(Method::GET, COMPANIES_PATH, None::<&()>).await
    }

    /// Fetches a single company by id.
    pub async fn get_company(&self, id: i64) -> Result<Company, Error> {
        self.fetch(Method::GET, &item_path(COMPANIES_PATH, id), None::<&()>)
            .await
    }

    /// Creates a company and returns the server-assigned record.
    pub async fn create_company(&self, payload: &CompanyPayload) -> Result<Company, Error> {
        self.fetch(Method::POST, COMPANIES_PATH, Some(payload)).await
    }

    /// Updates a company in place.
    pub async fn update_company(
        &self,
        id: i64,
        payload: &CompanyPayload,
    ) -> Result<Company, Error> {
        self.fetch(Method::PUT, &item_path(COMPANIES_PATH, id), Some(payload))
            .await
    }

    /// Deletes a company by id.
    pub async fn delete_company(&self, id: i64) -> Result<(), Error> {
        self.remove(&item_path(COMPANIES_PATH, id)).await
    }

    // -- Participations --

    /// Fetches the full participation collection, including the denormalized
    /// shareholder and company names.
    pub async fn list_participations(&self) -> Result<Vec<Participation>, Error> {
        self.fetch(Method::GET, PARTICIPATIONS_PATH, None::<&()>).await
    }

    /// Fetches a single participation by id.
    pub async fn get_participation(&self, id: i64) -> Result<Participation, Error> {
        self.fetch(Method::GET, &item_path(PARTICIPATIONS_PATH, id), None::<&()>)
            .await
    }

    /// Creates a participation and returns the server-assigned record.
    pub async fn create_participation(
        &self,
        payload: &ParticipationPayload,
    ) -> Result<Participation, Error> {
        self.fetch(Method::POST, PARTICIPATIONS_PATH, Some(payload)).await
    }

    /// Updates a participation in place.
    pub async fn update_participation(
        &self,
        id: i64,
        payload: &ParticipationPayload,
    ) -> Result<Participation, Error> {
        self.fetch(Method::PUT, &item_path(PARTICIPATIONS_PATH, id), Some(payload))
            .await
    }

    /// Deletes a participation by id.
    pub async fn delete_participation(&self, id: i64) -> Result<(), Error> {
        self.remove(&item_path(PARTICIPATIONS_PATH, id)).await
    }
}

fn item_path(collection: &str, id: i64) -> String {
    format!("{}{}/", collection, id)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so a multibyte character straddling the
    // limit never panics the slice.
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...[truncated]", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_body_passes_through() {
        assert_eq!(truncate_body("tudo certo"), "tudo certo");
    }

    #[test]
    fn long_ascii_body_is_cut_at_the_limit() {
        let body = "x".repeat(2500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn multibyte_char_straddling_the_limit_does_not_panic() {
        // 1999 ASCII bytes, then a two-byte char spanning bytes 1999..2001.
        let body = format!("{}çããã", "a".repeat(1999));
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(!truncated.contains('ç'));
    }
}
