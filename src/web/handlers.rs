// src/web/handlers.rs
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info};

use crate::core::{FsOps, ServiceClient};
use crate::error::SubmitError;
use crate::intake::{DocumentFile, FileSource};
use crate::pipeline::{Event, PageView, Session};
use crate::web::page::render_page;
use crate::web::types::{upload_name, CvSubmitForm};

pub async fn index_handler() -> RawHtml<String> {
    RawHtml(render_page(&PageView::default()))
}

/// Run one attempt for the posted form and render the resulting page.
pub async fn submit_cv_handler(
    mut upload: Form<CvSubmitForm<'_>>,
    service: &State<ServiceClient>,
) -> RawHtml<String> {
    let mut session = Session::new();
    let source = upload
        .source
        .as_deref()
        .and_then(FileSource::from_form_value)
        .unwrap_or(FileSource::FilePicker);

    if upload.has_file() {
        if let Some(file) = upload.file.as_mut() {
            match read_upload(file).await {
                Ok(document) => {
                    session.intake_mut().acquire_file(source, Some(document));
                }
                Err(e) => {
                    error!("Failed to process uploaded file: {:#}", e);
                    session.dispatch(Event::Rejected(SubmitError::UploadRejected(
                        "Failed to process uploaded file".to_string(),
                    )));
                    return RawHtml(render_page(session.view()));
                }
            }
        }
    }

    session.submit(service.inner(), upload.credential_input()).await;
    RawHtml(render_page(&session.into_view()))
}

pub async fn health_handler() -> Json<&'static str> {
    info!("Health check");
    Json("OK")
}

/// Page shown when rocket refuses the form before it reaches the pipeline.
pub fn rejected_upload_page(message: &str) -> RawHtml<String> {
    let mut session = Session::new();
    session.dispatch(Event::Rejected(SubmitError::UploadRejected(message.to_string())));
    RawHtml(render_page(session.view()))
}

async fn read_upload(file: &mut TempFile<'_>) -> anyhow::Result<DocumentFile> {
    let file_name = upload_name(file);
    let temp_path = FsOps::upload_temp_path();

    if let Err(e) = file.persist_to(&temp_path).await {
        FsOps::remove_quietly(&temp_path).await;
        return Err(anyhow::Error::new(e).context("Failed to persist uploaded file"));
    }

    let bytes = FsOps::take_file(&temp_path).await?;
    Ok(DocumentFile::new(file_name, bytes))
}
