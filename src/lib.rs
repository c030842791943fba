//! Browser front end for a remote CV parsing service.
//!
//! The intake controller validates a `(file, credential)` pair, the pipeline
//! drives one request through `Idle -> Loading -> Idle`, and the renderer turns
//! the loosely-typed response into a structured view and a raw JSON view.

pub mod config;
pub mod core;
pub mod error;
pub mod intake;
pub mod logging;
pub mod pipeline;
pub mod render;
pub mod types;
pub mod web;

pub use config::{AppConfig, ServerArgs};
pub use error::SubmitError;
pub use intake::{Credential, DocumentFile, FileSource, IntakeController, ParseRequest};
pub use pipeline::{PageView, Session};
pub use render::RenderedProfile;
pub use types::CandidateProfile;
pub use web::{build_rocket, start_web_server};
