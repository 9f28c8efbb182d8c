//! HTTP Client Wrapper
//!
//! The single entry point for network calls. Attaches JSON headers, holds the
//! busy indicator for the duration of each call and normalizes failures.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::busy::BusyTracker;
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ImageUpload;
use crate::transport::{ApiRequest, ApiResponse, RequestBody, Transport};

/// Multipart field name the upload endpoint expects
pub const IMAGE_FIELD: &str = "image";

pub struct HttpClient<T> {
    transport: T,
    config: ApiConfig,
    busy: BusyTracker,
}

impl<T: Transport> HttpClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config,
            busy: BusyTracker::new(),
        }
    }

    pub fn busy(&self) -> &BusyTracker {
        &self.busy
    }

    /// Send a JSON request and return the decoded JSON body
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let request = ApiRequest::new(method, self.config.url(path))
            .header("Content-Type", "application/json")
            .body(body.map_or(RequestBody::Empty, RequestBody::Json));
        self.exchange(request).await?.json()
    }

    /// `request` with a serializable body and a typed response
    pub async fn request_as<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.request(method, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Multipart upload; no JSON content type so the transport sets the boundary
    pub async fn upload<R: DeserializeOwned>(&self, path: &str, file: ImageUpload) -> ApiResult<R> {
        let request = ApiRequest::new(Method::POST, self.config.url(path)).body(RequestBody::Multipart {
            field: IMAGE_FIELD,
            file,
        });
        let value = self.exchange(request).await?.json()?;
        Ok(serde_json::from_value(value)?)
    }

    async fn exchange(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let _busy = self.busy.acquire();
        log::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await.map_err(|e| {
            log::error!("API Error: {}", e);
            e
        })?;
        if !response.is_success() {
            let err = ApiError::Status(response.status);
            log::error!("API Error: {}", err);
            return Err(err);
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() -> (MemoryBackend, HttpClient<MemoryBackend>) {
        let backend = MemoryBackend::new();
        let client = HttpClient::new(backend.clone(), ApiConfig::new(MemoryBackend::BASE_URL));
        (backend, client)
    }

    #[tokio::test]
    async fn test_json_header_attached() {
        let (backend, client) = setup();
        client.request(Method::GET, "/recipes", None).await.unwrap();

        let sent = backend.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header_value("content-type"), Some("application/json"));
        assert_eq!(sent[0].url, "http://backend.test/recipes");
    }

    #[tokio::test]
    async fn test_status_error_releases_busy_state() {
        let (backend, client) = setup();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        client.busy().observe(move |busy| sink.borrow_mut().push(busy));

        backend.fail_with_status(503);
        let err = client.request(Method::GET, "/recipes", None).await.unwrap_err();

        assert_eq!(err, ApiError::Status(503));
        assert!(!client.busy().is_busy());
        assert_eq!(*events.borrow(), vec![false, true, false]);
    }

    #[tokio::test]
    async fn test_transport_failure_releases_busy_state() {
        let (backend, client) = setup();
        backend.go_offline();
        let err = client.request(Method::GET, "/recipes", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(client.busy().in_flight(), 0);
    }

    #[tokio::test]
    async fn test_upload_has_no_json_header() {
        let (backend, client) = setup();
        let file = ImageUpload {
            file_name: "soup.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        };
        let uploaded: crate::UploadedImage = client.upload("/upload", file).await.unwrap();

        assert!(uploaded.image_url.ends_with("soup.png"));
        let sent = backend.requests();
        assert_eq!(sent[0].header_value("content-type"), None);
        assert!(matches!(sent[0].body, RequestBody::Multipart { field: "image", .. }));
    }
}
