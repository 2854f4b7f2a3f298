use dioxus::logger::tracing::{error, info, warn};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error as _;
use thiserror::Error;

use crate::shared::types::{
    ForecastResponse, HealthResponse, HistoryResponse, PredictionRequest, PredictionResult,
    Validate, ValidationError,
};

/// Page size used by the history view.
pub const HISTORY_LIMIT: usize = 100;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("sending {method} {url}: {source}")]
    Transport {
        method: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },
    #[error("decoding JSON from {method} {url} failed: {source}\nBody snippet: {snippet}")]
    Decode {
        method: String,
        url: String,
        snippet: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid payload from {method} {url}: {reason}")]
    Invalid {
        method: String,
        url: String,
        reason: ValidationError,
    },
}

/// Thin client for the prediction service. Cheap to clone; handed to the
/// views through context.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.request(Method::GET, "/", None::<&()>).await
    }

    pub async fn forecast(&self) -> Result<ForecastResponse, ApiError> {
        self.request(Method::GET, "/forecast", None::<&()>).await
    }

    pub async fn history(&self, limit: usize) -> Result<HistoryResponse, ApiError> {
        let path = format!("/history?limit={limit}");
        self.request(Method::GET, &path, None::<&()>).await
    }

    pub async fn predict(&self, req: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        self.request(Method::POST, "/predict", Some(req)).await
    }

    async fn request<T, B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Validate,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let method_s = method.as_str().to_string();
        info!("[api] {} {}", method_s, url);

        let mut req = self.http.request(method, &url);
        if let Some(b) = body {
            req = req.json(b);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    error!("[api] error chain: {}", chain.join(" -> "));
                }
                return Err(ApiError::Transport {
                    method: method_s,
                    url,
                    source: e,
                });
            }
        };
        let status = res.status().as_u16();
        let bytes = res.bytes().await.map_err(|e| ApiError::Transport {
            method: method_s.clone(),
            url: url.clone(),
            source: e,
        })?;
        decode(&method_s, &url, status, &bytes)
    }
}

/// Turns a raw response into a checked payload.
pub fn decode<T>(method: &str, url: &str, status: u16, body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if !(200..300).contains(&status) {
        warn!(
            "[api] request failed: status={} body=\n{}",
            status,
            snippet(body)
        );
        return Err(ApiError::Status {
            method: method.to_string(),
            url: url.to_string(),
            status,
        });
    }
    let data: T = serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        method: method.to_string(),
        url: url.to_string(),
        snippet: snippet(body),
        source: e,
    })?;
    data.validate().map_err(|reason| ApiError::Invalid {
        method: method.to_string(),
        url: url.to_string(),
        reason,
    })?;
    Ok(data)
}

fn snippet(body: &[u8]) -> String {
    String::from_utf8_lossy(body).chars().take(300).collect()
}
