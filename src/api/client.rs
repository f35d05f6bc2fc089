use std::sync::OnceLock;

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::data::Envelope;

/// Global shared client, one per process
static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Initialize the shared client (call once at startup)
pub fn init(base_url: &str) -> Result<()> {
    let client = ApiClient::new(base_url)?;
    SHARED
        .set(client)
        .map_err(|_| anyhow::anyhow!("API client already initialized"))?;
    Ok(())
}

/// Get the shared client
pub fn shared() -> &'static ApiClient {
    SHARED
        .get()
        .expect("API client not initialized, please call api::client::init() first")
}

/// HTTP adapter with the fixed transport policy: JSON bodies, no caching,
/// no referrer, redirects followed. One attempt per call, no retry — failures
/// surface as `ApiError` and the caller decides what to tell the user.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .referer(false)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the response envelope. The caller extracts and
    /// validates the payload field.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// POST `body` as JSON to `path` and decode the response envelope.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        // Decode from text so transport and JSON failures map to distinct
        // error variants.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
