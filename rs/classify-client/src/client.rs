use reqwest::header::ACCEPT;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use crate::constant::{CLASSIFY_BASE_URL, CLASSIFY_ROUTE, CSV_MEDIA_TYPE, MULTIPART_FILE_FIELD};
use crate::ingest::AcceptedFile;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP client error: {0}")]
    ClientError(#[from] reqwest::Error),
    #[error("Classification service answered with status {0}")]
    ErrorStatus(StatusCode),
    #[error("Classification service answered with an empty body")]
    EmptyBody,
}

/// Client for the remote classification endpoint. Clones share one
/// connection pool. Submission is never retried here; a failure is surfaced
/// once and the caller may re-invoke on a fresh user action.
#[derive(Clone)]
pub struct ClassificationClient {
    inner: Arc<Client>,
    endpoint: String,
}

impl ClassificationClient {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_endpoint(format!("{}{}", CLASSIFY_BASE_URL, CLASSIFY_ROUTE))
    }

    pub fn with_endpoint(endpoint: String) -> Result<Self, TransportError> {
        let client = Client::builder().use_rustls_tls().build()?;
        Ok(ClassificationClient {
            inner: Arc::new(client),
            endpoint,
        })
    }

    /// Uploads the accepted file as a single multipart request and returns
    /// the raw response body. The service declares no JSON despite the
    /// Accept header; the body is delimited text and is returned as-is.
    pub async fn submit(&self, file: &AcceptedFile) -> Result<String, TransportError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(CSV_MEDIA_TYPE)?;
        let form = Form::new().part(MULTIPART_FILE_FIELD, part);

        debug!("Submitting '{}' to {}", file.name, self.endpoint);
        let response = self
            .inner
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ErrorStatus(status));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(TransportError::EmptyBody);
        }
        info!("Received {} bytes of classified data", body.len());
        Ok(body)
    }
}
