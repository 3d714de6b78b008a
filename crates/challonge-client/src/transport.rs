//! HTTP transport for signed API requests

use async_trait::async_trait;
use challonge_core::{AuthMaterial, Settings};
use reqwest::header::{HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, Result};

/// A request relative to the API root
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `tournaments/42.json`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Authentication material, attached by the client before sending
    pub auth: Option<AuthMaterial>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            auth: None,
        }
    }

    pub fn query(mut self, pairs: Vec<(String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn auth(mut self, auth: AuthMaterial) -> Self {
        self.auth = Some(auth);
        self
    }
}

/// Raw response as returned by the service
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends API requests; the seam between the typed client and the network
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed transport
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Create a transport from client settings
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(settings.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::Http(format!("invalid request path {}: {}", path, e)))?;

        // Query parameters are added separately, never through the path
        if !url.as_str().starts_with(self.base_url.as_str())
            || url.query().is_some()
            || url.fragment().is_some()
        {
            return Err(ClientError::Http(format!(
                "request path {:?} escapes the API base URL",
                path
            )));
        }
        Ok(url)
    }

    /// Build the outbound request, with authentication attached
    fn build(&self, request: &ApiRequest) -> Result<reqwest::Request> {
        let url = self.build_url(&request.path)?;

        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        match &request.auth {
            Some(AuthMaterial::Header { name, value }) => {
                let name = HeaderName::from_bytes(name.as_bytes())
                    .map_err(|_| ClientError::Http(format!("invalid auth header name {}", name)))?;
                let mut value = HeaderValue::from_str(value.expose())
                    .map_err(|_| ClientError::Http("invalid auth header value".to_string()))?;
                value.set_sensitive(true);
                builder = builder.header(name, value);
            }
            Some(AuthMaterial::Query { name, value }) => {
                builder = builder.query(&[(name.as_str(), value.expose())]);
            }
            None => {}
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        Ok(builder.build()?)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let http_request = self.build(&request)?;
        debug!("{} {}", request.method, request.path);

        let response = self.client.execute(http_request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Response status: {}", status);
        Ok(ApiResponse { status, body })
    }
}
