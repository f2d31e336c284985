//! REST APIクライアント（reqwest）

use crate::config::Config;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_search_common::api::{self, DETAIL_PATH, HEALTH_PATH, SEARCH_PATH};
use shop_search_common::{
    DetailRequest, DetailResult, Error, HealthStatus, SearchBackend, SearchRequest, SearchResult,
};
use std::time::Duration;

pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    timeout_secs: u64,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(&config.resolved_base_url(), config.timeout_seconds)
    }

    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> shop_search_common::Result<HealthStatus> {
        let url = api::join_url(&self.base_url, HEALTH_PATH);
        tracing::info!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> shop_search_common::Result<Res>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let url = api::join_url(&self.base_url, path);
        tracing::info!(%url, "POST");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.read_json(response).await
    }

    async fn read_json<Res: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> shop_search_common::Result<Res> {
        let status = response.status();
        tracing::info!(status = status.as_u16(), "response");

        // 失敗時も本文から detail を取り出す
        let text = response.text().await.map_err(|e| self.transport_error(e))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "request failed");
            return Err(api::api_error(status.as_u16(), &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn transport_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout(self.timeout_secs)
        } else {
            Error::Network(error.to_string())
        }
    }
}

impl SearchBackend for HttpBackend {
    async fn search(&self, request: &SearchRequest) -> shop_search_common::Result<SearchResult> {
        self.post_json(SEARCH_PATH, request).await
    }

    async fn detail(&self, request: &DetailRequest) -> shop_search_common::Result<DetailResult> {
        self.post_json(DETAIL_PATH, request).await
    }
}
