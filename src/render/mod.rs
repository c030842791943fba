// src/render/mod.rs
//! Rendering of a parse response into the structured and raw views

pub mod markup;
pub mod raw;
pub mod structured;

pub use markup::Element;
pub use raw::render_raw;
pub use structured::StructuredView;

use serde_json::Value;

use crate::types::profile::CandidateProfile;

/// Both views of the most recent successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedProfile {
    pub profile: CandidateProfile,
    pub structured: StructuredView,
    pub raw: String,
}

impl RenderedProfile {
    pub fn from_response(response: &Value) -> serde_json::Result<Self> {
        let profile = CandidateProfile::from_value(response);
        let structured = StructuredView::project(&profile);
        let raw = render_raw(response)?;
        Ok(Self {
            profile,
            structured,
            raw,
        })
    }

    pub fn structured_html(&self) -> String {
        markup::render_all(&self.structured.to_elements())
    }
}
