use async_trait::async_trait;
use jisho_config::network::NetworkConfig;
use jisho_core::{FetchError, LookupSource, SourceMetadata};
use jisho_types::LookupRecord;
use serde::Deserialize;

const LOOKUP_URL: &str = "https://jisho.org/search/";

/// Client for the Jisho.org word search API
#[derive(Clone)]
pub struct JishoClient {
    client: reqwest::Client,
    api_url: String,
}

impl JishoClient {
    pub fn new(config: &NetworkConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }
}

#[async_trait]
impl LookupSource for JishoClient {
    async fn search(&self, keyword: &str) -> Result<Vec<LookupRecord>, FetchError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[("keyword", keyword)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        decode_response(&body)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "Jisho".to_string(),
            lookup_url: LOOKUP_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    meta: Option<Meta>,
    /// Kept raw so one mistyped record does not fail the whole batch
    data: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    status: u16,
}

/// Extract the records from a search response body
pub fn decode_response(body: &str) -> Result<Vec<LookupRecord>, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)
        .map_err(|e| FetchError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    // The API mirrors the HTTP status in `meta`
    if let Some(meta) = response.meta {
        if !(200..300).contains(&meta.status) {
            return Err(FetchError::HttpStatus {
                status: meta.status,
            });
        }
    }

    let total = response.data.len();
    let records: Vec<LookupRecord> = response
        .data
        .into_iter()
        .enumerate()
        .filter_map(
            |(position, value)| match serde_json::from_value::<LookupRecord>(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping undecodable record {}: {}", position, e);
                    None
                }
            },
        )
        .collect();

    tracing::debug!("Decoded {} of {} records", records.len(), total);
    Ok(records)
}
