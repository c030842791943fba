// src/web/types.rs
use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::ContentType;

/// Stem used when the browser sent no usable file name.
pub const FALLBACK_FILE_STEM: &str = "uploaded_cv";

const DOCX_SUBTYPE: &str = "vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Multipart body posted by the upload page.
#[derive(FromForm)]
pub struct CvSubmitForm<'f> {
    pub file: Option<TempFile<'f>>,
    pub api_key: Option<String>,
    /// Which surface delivered the file: `pointer-click`, `drag-drop` or `file-picker`.
    pub source: Option<String>,
}

impl CvSubmitForm<'_> {
    pub fn credential_input(&self) -> &str {
        self.api_key.as_deref().unwrap_or_default()
    }

    /// Browsers send an empty, unnamed part when nothing was chosen.
    pub fn has_file(&self) -> bool {
        match &self.file {
            Some(file) => file.len() > 0 || sanitized_stem(file).is_some(),
            None => false,
        }
    }
}

/// Name to forward for an uploaded part, extension included.
///
/// Rocket's sanitised name drops the extension, which the parsing service
/// needs to pick a document type. It is restored from the raw name, or from
/// the part's content type.
pub fn upload_name(file: &TempFile<'_>) -> String {
    let raw = file
        .raw_name()
        .map(|n| n.dangerous_unsafe_unsanitized_raw().as_str());
    document_file_name(sanitized_stem(file), raw, file.content_type())
}

fn sanitized_stem<'a>(file: &'a TempFile<'_>) -> Option<&'a str> {
    file.raw_name()
        .and_then(|n| n.as_str())
        .filter(|n| !n.is_empty())
}

pub fn document_file_name(
    stem: Option<&str>,
    raw_name: Option<&str>,
    content_type: Option<&ContentType>,
) -> String {
    let stem = stem.unwrap_or(FALLBACK_FILE_STEM);
    let extension = raw_name
        .and_then(raw_extension)
        .or_else(|| content_type.and_then(extension_for));

    match extension {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem.to_string(),
    }
}

/// Extension of the last path segment, lowercased. Anything but a short
/// alphanumeric run is discarded.
fn raw_extension(raw_name: &str) -> Option<String> {
    let last = raw_name.rsplit(['/', '\\']).next()?;
    let (_, ext) = last.rsplit_once('.')?;
    let valid = !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

fn extension_for(content_type: &ContentType) -> Option<String> {
    if content_type.is_pdf() {
        Some("pdf".to_string())
    } else if content_type.to_string().contains(DOCX_SUBTYPE) {
        Some("docx".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docx() -> ContentType {
        ContentType::new("application", DOCX_SUBTYPE)
    }

    #[test]
    fn test_extension_restored_from_raw_name() {
        assert_eq!(
            document_file_name(Some("resume"), Some("resume.pdf"), Some(&ContentType::PDF)),
            "resume.pdf"
        );
        assert_eq!(
            document_file_name(Some("Resume"), Some("C:\\Users\\ada\\Resume.DOCX"), None),
            "Resume.docx"
        );
    }

    #[test]
    fn test_extension_from_content_type_when_raw_has_none() {
        assert_eq!(
            document_file_name(Some("resume"), Some("resume"), Some(&ContentType::PDF)),
            "resume.pdf"
        );
        assert_eq!(
            document_file_name(Some("resume"), None, Some(&docx())),
            "resume.docx"
        );
    }

    #[test]
    fn test_fallback_name_keeps_extension() {
        assert_eq!(
            document_file_name(None, None, Some(&ContentType::PDF)),
            "uploaded_cv.pdf"
        );
        assert_eq!(
            document_file_name(None, Some("../../.docx"), None),
            "uploaded_cv.docx"
        );
        assert_eq!(document_file_name(None, None, None), FALLBACK_FILE_STEM);
    }

    #[test]
    fn test_unsupported_extension_is_forwarded_as_sent() {
        assert_eq!(
            document_file_name(Some("notes"), Some("notes.txt"), Some(&ContentType::Plain)),
            "notes.txt"
        );
    }

    #[test]
    fn test_suspicious_extension_is_dropped() {
        assert_eq!(
            document_file_name(Some("cv"), Some("cv.p<d>f"), Some(&ContentType::PDF)),
            "cv.pdf"
        );
        assert_eq!(document_file_name(Some("cv"), Some("cv."), None), "cv");
    }
}
