//! In-memory transport for tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::Result;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Records requests and replays queued responses in order
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<ApiResponse>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn push(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .await
            .push_back(ApiResponse::new(status, body));
    }

    pub async fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().await.clone()
    }

    pub async fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.requests.lock().await.push(request);
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| ApiResponse::new(500, "no response queued")))
    }
}
