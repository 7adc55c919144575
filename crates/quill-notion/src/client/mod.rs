//! Notion REST API client.
//!
//! Provides a sync HTTP client for the public Notion API authenticated with an
//! internal integration token.

mod blocks;
mod pages;

use std::time::Duration;

use quill_config::NotionConfig;
use serde::de::DeserializeOwned;
use ureq::Agent;
use ureq::http::Response;

use crate::error::NotionError;

/// Maximum page size accepted by list endpoints.
const PAGE_SIZE: usize = 100;

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    api_url: String,
    api_key: String,
    api_version: String,
    database_id: String,
    published_property: String,
}

impl NotionClient {
    /// Create client from validated config values.
    #[must_use]
    pub fn from_config(config: &NotionConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            database_id: config.database_id.clone(),
            published_property: config.published_property.clone(),
        }
    }

    /// Value of the `Authorization` header.
    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Send a GET request and decode the JSON response.
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, NotionError> {
        let response = self
            .agent
            .get(url)
            .header("Authorization", &self.bearer())
            .header("Notion-Version", &self.api_version)
            .header("Accept", "application/json")
            .call()?;

        read_json(response)
    }

    /// Send a POST request with a JSON body and decode the JSON response.
    fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        payload: &serde_json::Value,
    ) -> Result<T, NotionError> {
        let payload_bytes = serde_json::to_vec(payload)?;

        let response = self
            .agent
            .post(url)
            .header("Authorization", &self.bearer())
            .header("Notion-Version", &self.api_version)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        read_json(response)
    }
}

/// Decode a response body, turning error statuses into [`NotionError::HttpResponse`].
fn read_json<T: DeserializeOwned>(response: Response<ureq::Body>) -> Result<T, NotionError> {
    let status = response.status().as_u16();
    let mut body_reader = response.into_body();

    if status >= 400 {
        let error_body = body_reader
            .read_to_string()
            .unwrap_or_else(|_| "(unable to read error body)".to_owned());
        return Err(NotionError::HttpResponse {
            status,
            body: error_body,
        });
    }

    Ok(body_reader.read_json()?)
}
