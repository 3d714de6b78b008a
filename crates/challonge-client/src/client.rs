//! Authenticated API client

use challonge_core::{AuthScheme, Credential, Settings};
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::error::{ClientError, Result};
use crate::matches::Matches;
use crate::models::{unwrap_list, unwrap_one, Resource};
use crate::participants::Participants;
use crate::tournaments::Tournaments;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Error body returned with 422 and some 4xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<String>,
}

/// Client for the Challonge API.
///
/// Owns the credential it was built with and signs every request with it.
/// Cloning is cheap and clones share the credential and connection pool.
#[derive(Clone)]
pub struct ChallongeClient {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    credential: Credential,
    scheme: AuthScheme,
}

impl ChallongeClient {
    /// Create a client over HTTP using the given settings
    pub fn new(credential: Credential, settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(settings)?;
        info!(
            "Challonge client for {} ({} auth)",
            transport.base_url(),
            settings.auth_scheme.label()
        );
        Self::with_transport(credential, settings.auth_scheme.clone(), Arc::new(transport))
    }

    /// Create a client over an arbitrary transport
    pub fn with_transport(
        credential: Credential,
        scheme: AuthScheme,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        scheme.validate(&credential)?;

        Ok(Self {
            inner: Arc::new(Inner {
                transport,
                credential,
                scheme,
            }),
        })
    }

    /// Username of the authenticated account
    pub fn username(&self) -> &str {
        self.inner.credential.username()
    }

    pub fn tournaments(&self) -> Tournaments<'_> {
        Tournaments::new(self)
    }

    pub fn participants(&self) -> Participants<'_> {
        Participants::new(self)
    }

    pub fn matches(&self) -> Matches<'_> {
        Matches::new(self)
    }

    /// Send a request and unwrap a single enveloped resource
    pub(crate) async fn fetch_one<T: Resource>(&self, request: ApiRequest) -> Result<T> {
        let value = self.send_json(request).await?;
        unwrap_one(value)
    }

    /// Send a request and unwrap a list of enveloped resources
    pub(crate) async fn fetch_list<T: Resource>(&self, request: ApiRequest) -> Result<Vec<T>> {
        let value = self.send_json(request).await?;
        unwrap_list(value)
    }

    async fn send_json(&self, request: ApiRequest) -> Result<Value> {
        let method = request.method.clone();
        let path = request.path.clone();

        let request = request.auth(self.inner.credential.authorize(&self.inner.scheme));
        debug!("Sending {} {}", method, path);

        let response = self.inner.transport.send(request).await?;
        let response = check_status(&method, &path, response)?;

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}

impl std::fmt::Debug for ChallongeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChallongeClient")
            .field("credential", &self.inner.credential)
            .field("scheme", &self.inner.scheme)
            .finish()
    }
}

/// Map non-success statuses to error kinds
fn check_status(method: &Method, path: &str, response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        return Ok(response);
    }

    let messages = serde_json::from_str::<ErrorBody>(&response.body)
        .map(|body| body.errors)
        .unwrap_or_default();

    error!("{} {} failed with status {}", method, path, response.status);

    let err = match response.status {
        401 => ClientError::AuthenticationRejected,
        403 => ClientError::Forbidden(path.to_string()),
        404 => ClientError::NotFound(path.to_string()),
        422 if messages.is_empty() => {
            let summary = summarize(&response.body);
            ClientError::Validation(vec![if summary.is_empty() {
                "request rejected without details".to_string()
            } else {
                summary
            }])
        }
        422 => ClientError::Validation(messages),
        status => ClientError::Api {
            status,
            message: messages
                .first()
                .cloned()
                .unwrap_or_else(|| summarize(&response.body)),
        },
    };
    Err(err)
}

fn summarize(body: &str) -> String {
    const MAX: usize = 200;
    let body = body.trim();
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
