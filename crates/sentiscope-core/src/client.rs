use std::time::Duration;

use crate::error::ApiError;
use crate::types::{ArticleAnalysis, SectorInfo, SectorReport};

/// HTTP client for the SentiScope analysis backend.
///
/// One client per process; reqwest pools connections internally. Analysis
/// requests can take a while (the backend runs several transformer models
/// per article), so no per-request timeout is set on the analyze calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// `GET /get_sectors` — the list of known sector names.
    pub async fn get_sectors(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.http.get(self.url("get_sectors")).send().await?;
        Self::decode(resp).await
    }

    /// `POST /get_sector_info` — descriptive metadata for one sector.
    pub async fn sector_info(&self, sector: &str) -> Result<SectorInfo, ApiError> {
        let resp = self
            .http
            .post(self.url("get_sector_info"))
            .form(&[("sector", sector)])
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `POST /analyze_sector` — the multi-article sector report.
    pub async fn analyze_sector(&self, sector: &str) -> Result<SectorReport, ApiError> {
        let form = reqwest::multipart::Form::new().text("sector", sector.to_string());
        let resp = self
            .http
            .post(self.url("analyze_sector"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// `POST /analyze_article` — analysis of manually pasted article text.
    pub async fn analyze_article(&self, article: &str) -> Result<ArticleAnalysis, ApiError> {
        let form = reqwest::multipart::Form::new().text("article", article.to_string());
        let resp = self
            .http
            .post(self.url("analyze_article"))
            .multipart(form)
            .send()
            .await?;
        Self::decode(resp).await
    }

    /// Decode a success payload, or extract the structured `{"error": ...}`
    /// message from a non-2xx response.
    async fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "backend returned error");
            return Err(ApiError::from_error_body(status.as_u16(), &body));
        }
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}
