//! HTTP transport for Planning Center requests.
//!
//! Everything the client sends goes through [`Transport`], so jobs can be driven
//! against a scripted double instead of the live API.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

/// HTTP verbs used against the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Read a resource or collection page
    Get,
    /// Create a resource
    Post,
    /// Update a resource
    Patch,
    /// Remove a resource
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(verb)
    }
}

/// A single API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL, possibly already carrying a query string (pagination cursors do)
    pub url: String,
    /// Extra query parameters appended to `url`
    pub query: Vec<(String, String)>,
    /// JSON body for writes
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET `url`
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// POST `body` to `url`
    pub fn post(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, url).with_body(body)
    }

    /// PATCH `url` with `body`
    pub fn patch(url: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Patch, url).with_body(body)
    }

    /// DELETE `url`
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Replace the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response: status plus undecoded body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body (empty for `204 No Content`)
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is 2xx.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Sends requests to the API.
///
/// Implementations return `Err` only when no response was received at all;
/// non-2xx statuses come back as an [`ApiResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and wait for its response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// Live transport over `reqwest` with HTTP Basic credentials.
#[derive(Clone)]
pub struct HttpTransport {
    app_id: String,
    secret: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport using the credentials in `config`
    pub fn new(config: &Config) -> Self {
        Self {
            app_id: config.pco_app_id.clone(),
            secret: config.pco_secret.clone(),
            client: Client::builder()
                .user_agent(format!("{}/{}", config.app_name(), config.app_version()))
                .build()
                .unwrap_or_default(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Patch => self.client.patch(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        let mut builder = builder
            .basic_auth(&self.app_id, Some(&self.secret))
            .header("Content-Type", "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| Error::Network(format!("{} {} failed: {}", request.method, request.url, e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| Error::Network(format!("Reading response from {} failed: {}", request.url, e)))?;

        Ok(ApiResponse { status, body })
    }
}
