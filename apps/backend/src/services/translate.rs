//! Client for the MyMemory translation API.
//!
//! Free tier, no API key. Docs: <https://mymemory.translated.net/doc/spec.php>

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{ApiError, Result};

const BASE_URL: &str = "https://api.mymemory.translated.net/get";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TranslateService {
    client: Client,
}

impl TranslateService {
    pub fn new() -> std::result::Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Translate `text` between the given language codes (e.g. "en", "es").
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let langpair = format!("{}|{}", source, target);
        let response = self
            .client
            .get(BASE_URL)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await
            .map_err(|e| ApiError::Upstream(format!("translation request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::Upstream(format!(
                "translation service returned HTTP {}",
                response.status()
            )));
        }

        let body: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Upstream(format!("invalid translation response: {}", e)))?;

        let translated = body
            .response_data
            .and_then(|data| data.translated_text)
            .ok_or_else(|| {
                ApiError::Upstream("translation response had no translatedText".to_string())
            })?;

        tracing::debug!("translated {} -> {}: {} chars", source, target, text.len());
        Ok(translated)
    }
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: Option<MyMemoryData>,
}

#[derive(Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_reads_nested_translated_text() {
        let body = r#"{"responseData": {"translatedText": "hola"}, "responseStatus": 200}"#;
        let parsed: MyMemoryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.response_data.and_then(|d| d.translated_text),
            Some("hola".to_string())
        );
    }

    #[test]
    fn response_parsing_tolerates_missing_fields() {
        let parsed: MyMemoryResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.response_data.is_none());

        let parsed: MyMemoryResponse =
            serde_json::from_str(r#"{"responseData": {}}"#).unwrap();
        assert!(parsed.response_data.unwrap().translated_text.is_none());
    }
}
