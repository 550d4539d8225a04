// HTTP implementation of the statistics API
use crate::application::dashboard_api::{ApiError, DashboardApi};
use crate::domain::filters::QueryString;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDashboardApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, path: &str, query: &QueryString) -> String {
        if query.is_empty() {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}{}?{}", self.base_url, path, query.as_str())
        }
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn get_json(&self, path: &str, query: &QueryString) -> Result<serde_json::Value, ApiError> {
        let url = self.endpoint_url(path, query);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|source| ApiError::Request {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Status { url, status, body });
        }

        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }
}
