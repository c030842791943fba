// src/pipeline/view.rs
//! View model the pipeline effects are applied to

use crate::pipeline::state::Effect;
use crate::render::RenderedProfile;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageView {
    pub error_banner: Option<String>,
    pub loading: bool,
    /// Last successful render. Kept while hidden, replaced wholesale on the next success.
    pub result: Option<RenderedProfile>,
    pub result_visible: bool,
    pub focus_credential: bool,
    /// Name shown in the drop zone; `None` means the file input is empty.
    pub selected_file: Option<String>,
}

impl PageView {
    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::ShowError(message) => self.error_banner = Some(message),
            Effect::HideError => self.error_banner = None,
            Effect::HideResult => self.result_visible = false,
            Effect::ShowLoading => {
                self.loading = true;
                self.focus_credential = false;
            }
            Effect::HideLoading => self.loading = false,
            Effect::FocusCredential => self.focus_credential = true,
            Effect::SelectFile(name) => self.selected_file = Some(name),
            Effect::ResetFileInput => self.selected_file = None,
            Effect::RenderResult(rendered) => {
                self.result = Some(*rendered);
                self.result_visible = true;
            }
        }
    }

    pub fn apply_all<I>(&mut self, effects: I)
    where
        I: IntoIterator<Item = Effect>,
    {
        for effect in effects {
            self.apply(effect);
        }
    }

    /// The result that should currently be on screen, if any.
    pub fn visible_result(&self) -> Option<&RenderedProfile> {
        self.result.as_ref().filter(|_| self.result_visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rendered(name: &str) -> Box<RenderedProfile> {
        Box::new(RenderedProfile::from_response(&json!({ "name": name })).unwrap())
    }

    #[test]
    fn test_error_over_empty_result_area() {
        let mut view = PageView::default();
        view.apply(Effect::RenderResult(rendered("Ada")));
        assert!(view.visible_result().is_some());

        view.apply_all([
            Effect::HideError,
            Effect::HideResult,
            Effect::ShowLoading,
            Effect::ShowError("boom".to_string()),
            Effect::HideLoading,
        ]);

        assert_eq!(view.error_banner.as_deref(), Some("boom"));
        assert!(view.visible_result().is_none());
        assert!(view.result.is_some());
        assert!(!view.loading);
    }

    #[test]
    fn test_new_success_replaces_previous() {
        let mut view = PageView::default();
        view.apply(Effect::RenderResult(rendered("Ada")));
        view.apply(Effect::RenderResult(rendered("Grace")));

        let shown = view.visible_result().unwrap();
        assert_eq!(shown.structured.header.name, "Grace");
    }

    #[test]
    fn test_reset_clears_selected_file() {
        let mut view = PageView::default();
        view.apply(Effect::SelectFile("cv.pdf".to_string()));
        assert_eq!(view.selected_file.as_deref(), Some("cv.pdf"));
        view.apply(Effect::ResetFileInput);
        assert_eq!(view.selected_file, None);
    }
}
