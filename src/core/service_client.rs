// src/core/service_client.rs
//! HTTP client for the remote CV parsing service

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::{info, trace, warn};

use crate::error::{SubmitError, GENERIC_FAILURE};
use crate::intake::ParseRequest;

pub const PARSE_CV_ENDPOINT: &str = "/api/parse-cv";

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const FALLBACK_MIME: &str = "application/octet-stream";

/// Anything that can turn a validated request into a raw profile response.
#[async_trait]
pub trait ParseService: Send + Sync {
    async fn parse_cv(&self, request: ParseRequest) -> Result<Value, SubmitError>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PARSE_CV_ENDPOINT)
    }
}

#[async_trait]
impl ParseService for ServiceClient {
    /// Single multipart POST with the document under `file` and the key under `api_key`.
    async fn parse_cv(&self, request: ParseRequest) -> Result<Value, SubmitError> {
        let ParseRequest { file, credential } = request;
        let url = self.endpoint();

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name.clone())
            .mime_str(content_type(&file.file_name))
            .map_err(transport_error)?;

        let form = Form::new()
            .part("file", part)
            .text("api_key", credential.expose().to_string());

        info!(url = %url, file = %file.file_name, "Calling CV parsing service");

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!("Response status: {}", status);

        let body = response.bytes().await.map_err(transport_error)?;

        if status.is_success() {
            serde_json::from_slice::<Value>(&body).map_err(|e| {
                warn!("CV service returned a non-JSON body: {}", e);
                SubmitError::TransportError(e.to_string())
            })
        } else {
            let message = failure_detail(&body);
            warn!(status = %status, "CV service error response: {}", message);
            Err(SubmitError::RequestFailed(message))
        }
    }
}

/// Banner text for a failed response: a string `detail` verbatim, otherwise the generic message.
pub fn failure_detail(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// MIME hint for the multipart part. Unknown extensions are still sent.
pub fn content_type(file_name: &str) -> &'static str {
    let lower_name = file_name.to_lowercase();
    if lower_name.ends_with(".pdf") {
        PDF_MIME
    } else if lower_name.ends_with(".docx") {
        DOCX_MIME
    } else {
        FALLBACK_MIME
    }
}

fn transport_error(err: reqwest::Error) -> SubmitError {
    let message = format!("{:#}", anyhow::Error::new(err));
    warn!("CV service transport failure: {}", message);
    SubmitError::TransportError(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_detail_uses_string_detail() {
        assert_eq!(failure_detail(br#"{"detail":"File too large"}"#), "File too large");
    }

    #[test]
    fn test_failure_detail_falls_back() {
        assert_eq!(failure_detail(b""), GENERIC_FAILURE);
        assert_eq!(failure_detail(b"<html>502</html>"), GENERIC_FAILURE);
        assert_eq!(failure_detail(br#"{"error":"nope"}"#), GENERIC_FAILURE);
        assert_eq!(
            failure_detail(br#"{"detail":[{"loc":["body","file"],"msg":"field required"}]}"#),
            GENERIC_FAILURE
        );
    }

    #[test]
    fn test_content_type_hint() {
        assert_eq!(content_type("CV.PDF"), PDF_MIME);
        assert_eq!(content_type("resume.docx"), DOCX_MIME);
        assert_eq!(content_type("resume.txt"), FALLBACK_MIME);
        assert_eq!(content_type("noext"), FALLBACK_MIME);
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = ServiceClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/api/parse-cv");
    }
}
