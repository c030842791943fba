// src/intake.rs
//! Intake controller - file acquisition and credential validation
//!
//! Produces a validated [`ParseRequest`] or a pre-flight [`SubmitError`]. Nothing
//! here touches the network or the loading state.

use std::fmt;

use tracing::debug;

use crate::error::SubmitError;

/// The three input surfaces that can hand over a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    PointerClick,
    DragDrop,
    FilePicker,
}

impl FileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointerClick => "pointer-click",
            Self::DragDrop => "drag-drop",
            Self::FilePicker => "file-picker",
        }
    }

    pub fn from_form_value(value: &str) -> Option<Self> {
        match value {
            "pointer-click" => Some(Self::PointerClick),
            "drag-drop" => Some(Self::DragDrop),
            "file-picker" => Some(Self::FilePicker),
            _ => None,
        }
    }
}

/// Presentational drag signals. They only move the drop-zone indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    Over,
    Leave,
}

/// One binary document with the name the user picked it under.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for DocumentFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentFile")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Caller-supplied API key. Trimmed and guaranteed non-empty.
///
/// Deliberately has no `Display`; `Debug` is redacted so it never reaches a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// A validated `(file, credential)` pair, built fresh for every attempt.
#[derive(Debug, Clone)]
pub struct ParseRequest {
    pub file: DocumentFile,
    pub credential: Credential,
}

/// Trim the entered key; an empty result is `MissingCredential`.
pub fn validate_credential(raw: &str) -> Result<Credential, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitError::MissingCredential);
    }
    Ok(Credential(trimmed.to_string()))
}

#[derive(Debug, Default)]
pub struct IntakeController {
    dragover: bool,
    pending: Option<DocumentFile>,
}

impl IntakeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the drop zone currently shows its "ready to drop" state.
    pub fn is_dragover(&self) -> bool {
        self.dragover
    }

    pub fn pending_file(&self) -> Option<&DocumentFile> {
        self.pending.as_ref()
    }

    pub fn drag_signal(&mut self, signal: DragSignal) {
        self.dragover = matches!(signal, DragSignal::Over);
    }

    /// Keep exactly one document from whatever the surface delivered.
    ///
    /// All three surfaces converge here. Extra files are ignored; an empty
    /// delivery leaves any previously pending file untouched.
    pub fn acquire_file<I>(&mut self, source: FileSource, files: I) -> Option<&DocumentFile>
    where
        I: IntoIterator<Item = DocumentFile>,
    {
        if source == FileSource::DragDrop {
            self.dragover = false;
        }

        if let Some(file) = files.into_iter().next() {
            debug!(
                source = source.as_str(),
                file = %file.file_name,
                bytes = file.len(),
                "Document acquired"
            );
            self.pending = Some(file);
        }

        self.pending.as_ref()
    }

    /// Pair the pending document with a validated credential.
    ///
    /// The credential is checked first. On failure the pending file is kept.
    pub fn prepare(&mut self, raw_credential: &str) -> Result<ParseRequest, SubmitError> {
        let credential = validate_credential(raw_credential)?;
        let file = self.pending.take().ok_or(SubmitError::MissingFile)?;
        Ok(ParseRequest { file, credential })
    }

    /// Forget the pending document so the same file can be picked again.
    pub fn reset_file(&mut self) {
        self.pending = None;
    }
}
