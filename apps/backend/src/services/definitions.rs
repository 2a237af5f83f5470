//! Client for the free dictionary API (dictionaryapi.dev), proxied so the
//! browser never talks to the third party directly.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use smartlex_core::normalize_word;

use crate::error::{ApiError, Result};

const BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct DefinitionService {
    client: Client,
}

impl DefinitionService {
    pub fn new() -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Fetch the raw entry list for `word`.
    ///
    /// The payload is passed through untouched; the API returns a JSON array
    /// of entries and clients dig out what they need.
    pub async fn lookup(&self, word: &str) -> Result<serde_json::Value> {
        let word = normalize_word(word);
        let url = format!("{}/{}", BASE_URL, word);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("dictionary request failed: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!(
                "no external definitions for '{}'",
                word
            )));
        }
        if !response.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "dictionary service returned HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("invalid dictionary response: {}", e)))
    }
}
