use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::shared::errors::{AppError, AppResult};

const USER_AGENT: &str = "eiga/0.1";

/// Thin transport wrapper shared by the upstream clients. Builds URLs,
/// issues one GET per call, and normalizes failures into
/// [`AppError::Transport`]. Retrying is the caller's decision; this
/// layer never retries, backs off, or throttles.
#[derive(Debug, Clone)]
pub struct CatalogHttpClient {
    client: Client,
}

impl CatalogHttpClient {
    pub fn new(timeout_secs: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(AppError::from)?;

        Ok(Self { client })
    }

    /// Join base + endpoint and append url-encoded query parameters.
    /// `params` comes pre-filtered: absent options never reach this
    /// function (see `DiscoverFilter::to_query` and friends).
    pub fn build_url(base: &str, endpoint: &str, params: &[(String, String)]) -> String {
        let mut url = format!("{}{}", base, endpoint);
        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }
        url
    }

    pub async fn get_json<T>(&self, url: &str) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        self.get_json_with_headers(url, &[]).await
    }

    /// GET with extra headers (the anime catalog requires JSON:API
    /// content negotiation headers on every request).
    pub async fn get_json_with_headers<T>(&self, url: &str, headers: &[(&str, &str)]) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::transport(
                Some(status.as_u16()),
                upstream_message(&body)
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            ));
        }

        serde_json::from_str(&body).map_err(|e| {
            AppError::InvalidResponse(format!(
                "Failed to parse response: {}. Body: {}",
                e,
                truncate(&body, 200)
            ))
        })
    }
}

/// Pull the upstream-provided `status_message` out of an error body when
/// there is one.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("status_message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

fn truncate(text: &str, max: usize) -> String {
    if text.len() > max {
        format!("{}...", &text[..max])
    } else {
        text.to_string()
    }
}
