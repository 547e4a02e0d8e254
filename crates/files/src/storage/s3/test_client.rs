//! HTTP client that answers S3 calls with a canned response.

use std::sync::{Arc, Mutex};

use aws_smithy_runtime_api::client::http::{
    HttpClient, HttpConnector, HttpConnectorFuture, HttpConnectorSettings, SharedHttpConnector,
};
use aws_smithy_runtime_api::client::orchestrator::{HttpRequest, HttpResponse};
use aws_smithy_runtime_api::client::runtime_components::RuntimeComponents;
use aws_smithy_runtime_api::http::StatusCode;
use aws_smithy_types::body::SdkBody;

/// A request as it left the SDK, after signing.
#[derive(Debug, Clone)]
pub struct SentRequest {
    pub uri: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl SentRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Answers every request with the same response and keeps what was sent.
#[derive(Debug, Clone)]
pub struct CannedClient {
    status: u16,
    content_type: &'static str,
    body: &'static [u8],
    sent: Arc<Mutex<Vec<SentRequest>>>,
}

impl CannedClient {
    pub fn new(status: u16, content_type: &'static str, body: &'static [u8]) -> Self {
        Self {
            status,
            content_type,
            body,
            sent: Arc::default(),
        }
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl HttpConnector for CannedClient {
    fn call(&self, request: HttpRequest) -> HttpConnectorFuture {
        self.sent.lock().unwrap().push(SentRequest {
            uri: request.uri().to_string(),
            headers: request
                .headers()
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            body: request.body().bytes().map(<[u8]>::to_vec).unwrap_or_default(),
        });

        let mut response = HttpResponse::new(
            StatusCode::try_from(self.status).unwrap(),
            SdkBody::from(self.body.to_vec()),
        );
        response.headers_mut().insert("content-type", self.content_type);
        HttpConnectorFuture::ready(Ok(response))
    }
}

impl HttpClient for CannedClient {
    fn http_connector(
        &self,
        _settings: &HttpConnectorSettings,
        _components: &RuntimeComponents,
    ) -> SharedHttpConnector {
        SharedHttpConnector::new(self.clone())
    }
}
