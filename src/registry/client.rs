//! Registry client - persists and retrieves API definitions
//!
//! All calls carry the session's bearer credential; a missing credential
//! or an invalid definition is surfaced before any request is built.

use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::models::ApiDefinition;
use crate::registry::wire::{self, StoredApi};
use crate::session::Session;

/// Client for the registry's admin surface.
pub struct RegistryClient {
    http: reqwest::Client,
    base: String,
}

impl RegistryClient {
    /// Client against a registry base URL such as `http://localhost:8080`.
    pub fn new(base: impl Into<String>) -> Self {
        Self::with_client(create_client(), base)
    }

    pub fn with_client(http: reqwest::Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        RegistryClient { http, base }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// Persist a new definition. Returns the server-assigned identity
    /// when the registry echoes one back.
    pub async fn create(
        &self,
        session: &Session,
        definition: &ApiDefinition,
    ) -> ClientResult<Option<String>> {
        let token = session.bearer()?;
        validate(definition)?;

        let payload = wire::to_payload(definition);
        tracing::info!(
            name = %definition.name,
            endpoints = definition.endpoints.len(),
            "Creating API definition"
        );

        let response = self
            .http
            .post(self.url("admin/create"))
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        let response = check(response).await?;

        let body: Value = response.json().await.unwrap_or(Value::Null);
        Ok(extract_id(&body))
    }

    /// Full-replace update of an existing definition.
    pub async fn update(
        &self,
        session: &Session,
        id: &str,
        definition: &ApiDefinition,
    ) -> ClientResult<()> {
        let token = session.bearer()?;
        validate(definition)?;

        let payload = wire::to_payload(definition);
        tracing::info!(id, name = %definition.name, "Updating API definition");

        let response = self
            .http
            .put(self.url(&format!("admin/update/{}", id)))
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    /// Every stored record, normalized to the grouped shape.
    pub async fn list(&self, session: &Session) -> ClientResult<Vec<StoredApi>> {
        let token = session.bearer()?;

        let response = self
            .http
            .get(self.url("admin/list"))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check(response).await?;

        let body: Value = response.json().await?;
        Ok(wire::normalize_records(body))
    }

    /// Like `list`, server-filtered by name substring.
    pub async fn search(&self, session: &Session, name: &str) -> ClientResult<Vec<StoredApi>> {
        let token = session.bearer()?;

        let response = self
            .http
            .get(self.url("admin/search"))
            .query(&[("name", name)])
            .bearer_auth(token)
            .send()
            .await?;
        let response = check(response).await?;

        let body: Value = response.json().await?;
        Ok(wire::normalize_records(body))
    }

    /// One stored definition by identity, used to seed the edit form.
    pub async fn get(&self, session: &Session, id: &str) -> ClientResult<StoredApi> {
        let token = session.bearer()?;

        let response = self
            .http
            .get(self.url(&format!("admin/{}", id)))
            .bearer_auth(token)
            .send()
            .await?;
        let response = check(response).await?;

        let body: Value = response.json().await?;
        let stored: StoredApi = serde_json::from_value(body)?;
        Ok(stored)
    }
}

/// Pre-submit validation, run before any network I/O.
pub fn validate(definition: &ApiDefinition) -> ClientResult<()> {
    if definition.name.trim().is_empty() {
        return Err(ClientError::MissingField("name"));
    }
    if definition.base_url.trim().is_empty() {
        return Err(ClientError::MissingField("baseUrl"));
    }
    if definition.endpoints.is_empty() {
        return Err(ClientError::NoEndpoints);
    }
    Ok(())
}

/// Map a non-2xx response to a rejection carrying the server message
/// when one is present.
async fn check(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(rejection(status.as_u16(), &body))
}

fn rejection(status: u16, body: &str) -> ClientError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| String::from("registry request failed"));
    ClientError::Rejected { status, message }
}

fn extract_id(body: &Value) -> Option<String> {
    match body.get("id") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(crate::constants::REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
