// src/error.rs
//! Failure taxonomy for a single submission attempt

use thiserror::Error;

/// Generic banner text when the service fails without a usable `detail`.
pub const GENERIC_FAILURE: &str = "Parsing failed";

/// Every way an attempt can end without a profile.
///
/// The `Display` output is the exact text shown in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Credential empty after trimming. Never reaches the network.
    #[error("Please enter your API key before uploading a CV.")]
    MissingCredential,

    /// No document selected. Never reaches the network.
    #[error("Please select a CV file to upload.")]
    MissingFile,

    /// Remote service answered with a non-success status.
    #[error("{0}")]
    RequestFailed(String),

    /// The upload never became a request: form refused by the server or
    /// the file could not be read locally.
    #[error("{0}")]
    UploadRejected(String),

    /// Network failure, timeout or unreadable response body.
    #[error("{0}")]
    TransportError(String),
}

impl SubmitError {
    /// Short machine-readable code used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::MissingFile => "MISSING_FILE",
            Self::RequestFailed(_) => "REQUEST_FAILED",
            Self::UploadRejected(_) => "UPLOAD_REJECTED",
            Self::TransportError(_) => "TRANSPORT_ERROR",
        }
    }
}
