// Port for the backend statistics API
use crate::domain::filters::QueryString;
use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("{url} returned a body that is not JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Issue one GET to `path` with `query` appended and return the parsed body
    async fn get_json(&self, path: &str, query: &QueryString) -> Result<serde_json::Value, ApiError>;
}
