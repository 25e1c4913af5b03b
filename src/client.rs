//! # Pet Store Client Module
//!
//! Thin synchronous HTTP client for the Pet Store API under test.
//!
//! ## Overview
//!
//! [`PetStoreClient`] wraps a blocking `reqwest` client and exposes one
//! method per exercised endpoint. Every call measures wall-clock latency
//! around the round trip and returns an [`ApiCall`] carrying the status code,
//! the latency, and the raw response body. The client makes no assertions of
//! its own: status expectations, latency budgets, and schema conformance are
//! the caller's concern (pair the body with an
//! [`EntityValidator`](crate::validator::EntityValidator)).
//!
//! Bodies are kept as raw text because negative cases deliberately provoke
//! non-JSON responses; [`ApiCall::json`] decodes leniently.

use crate::config::ClientConfig;
use anyhow::Context;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::info;
use url::Url;

/// Outcome of one HTTP call against the service under test.
#[derive(Debug, Clone)]
pub struct ApiCall {
    /// HTTP status code.
    pub status: u16,
    /// Wall-clock time from send to response completion.
    pub latency: Duration,
    /// Raw response body.
    pub body: String,
}

impl ApiCall {
    /// Decode the body as JSON, if it is JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Whether the call completed within the given latency budget.
    pub fn within(&self, budget: Duration) -> bool {
        self.latency <= budget
    }
}

/// Blocking HTTP client for the Pet Store endpoints exercised by the suite.
pub struct PetStoreClient {
    http: reqwest::blocking::Client,
    base_url: Url,
    latency_budget: Duration,
}

impl PetStoreClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails if the base URL does not parse or the HTTP client cannot be
    /// constructed.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .context("failed to build HTTP client")?;
        // Url::join treats a base without a trailing slash as a file path and
        // would drop the last segment.
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base_url = Url::parse(&base)
            .with_context(|| format!("invalid base URL: {}", config.base_url))?;
        Ok(Self {
            http,
            base_url,
            latency_budget: Duration::from_millis(config.latency_budget_ms),
        })
    }

    /// Build a client from environment configuration.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`PetStoreClient::new`].
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// The configured per-call latency budget.
    pub fn latency_budget(&self) -> Duration {
        self.latency_budget
    }

    /// GET `/pet/findByStatus`, optionally with a `status` query parameter.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn find_by_status(&self, status: Option<&str>) -> anyhow::Result<ApiCall> {
        let mut url = self.endpoint("pet/findByStatus")?;
        if let Some(s) = status {
            url.query_pairs_mut().append_pair("status", s);
        }
        self.execute(self.http.get(url), "GET", "/pet/findByStatus")
    }

    /// GET `/pet/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn find_by_id(&self, id: u64) -> anyhow::Result<ApiCall> {
        let path = format!("pet/{id}");
        let url = self.endpoint(&path)?;
        self.execute(self.http.get(url), "GET", &format!("/{path}"))
    }

    /// GET `/pet/` with no id, which the service rejects with 405.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn find_without_id(&self) -> anyhow::Result<ApiCall> {
        let url = self.endpoint("pet/")?;
        self.execute(self.http.get(url), "GET", "/pet/")
    }

    /// POST `/pet` with a JSON body.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn add_pet(&self, pet: &Value) -> anyhow::Result<ApiCall> {
        let url = self.endpoint("pet")?;
        self.execute(self.http.post(url).json(pet), "POST", "/pet")
    }

    /// PUT `/pet` with a JSON body.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn update_pet(&self, pet: &Value) -> anyhow::Result<ApiCall> {
        let url = self.endpoint("pet")?;
        self.execute(self.http.put(url).json(pet), "PUT", "/pet")
    }

    /// POST `/pet` with an arbitrary body and content type.
    ///
    /// Drives the unsupported-media-type cases (the service answers 415 for
    /// anything that is not `application/json`).
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn post_pet_raw(&self, body: &str, content_type: &str) -> anyhow::Result<ApiCall> {
        let url = self.endpoint("pet")?;
        let request = self
            .http
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body.to_string());
        self.execute(request, "POST", "/pet")
    }

    /// POST `/pet/{id}/uploadImage` as multipart form data.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn upload_image(
        &self,
        id: u64,
        metadata: Option<&str>,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> anyhow::Result<ApiCall> {
        let path = format!("pet/{id}/uploadImage");
        let url = self.endpoint(&path)?;
        let part = reqwest::blocking::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let mut form = reqwest::blocking::multipart::Form::new().part("file", part);
        if let Some(meta) = metadata {
            form = form.text("additionalMetadata", meta.to_string());
        }
        self.execute(self.http.post(url).multipart(form), "POST", &format!("/{path}"))
    }

    /// POST `/pet/{id}/uploadImage` with no body at all.
    ///
    /// The service rejects a bodyless upload with 415.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn upload_image_empty(&self, id: u64) -> anyhow::Result<ApiCall> {
        let path = format!("pet/{id}/uploadImage");
        let url = self.endpoint(&path)?;
        self.execute(self.http.post(url), "POST", &format!("/{path}"))
    }

    /// DELETE `/pet/{id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport failures (connect, timeout, body read).
    pub fn delete_pet(&self, id: u64) -> anyhow::Result<ApiCall> {
        let path = format!("pet/{id}");
        let url = self.endpoint(&path)?;
        self.execute(self.http.delete(url), "DELETE", &format!("/{path}"))
    }

    fn endpoint(&self, path: &str) -> anyhow::Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("invalid endpoint path: {path}"))
    }

    /// Send a request, timing the full round trip including body read.
    fn execute(
        &self,
        request: reqwest::blocking::RequestBuilder,
        method: &str,
        path: &str,
    ) -> anyhow::Result<ApiCall> {
        let start = Instant::now();
        let response = request
            .send()
            .with_context(|| format!("{method} {path} failed"))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .with_context(|| format!("{method} {path}: failed to read response body"))?;
        let latency = start.elapsed();
        info!(
            method = method,
            path = path,
            status = status,
            latency_ms = latency.as_millis() as u64,
            body_bytes = body.len(),
            "pet store call completed"
        );
        Ok(ApiCall {
            status,
            latency,
            body,
        })
    }
}
