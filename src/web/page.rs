// src/web/page.rs
//! Full upload/result page rendered from a `PageView`

use crate::pipeline::PageView;
use crate::render::{Element, RenderedProfile};

const DOCTYPE: &str = "<!DOCTYPE html>";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #f5f6f8; color: #1f2933; margin: 0; }
.container { max-width: 860px; margin: 0 auto; padding: 2rem 1rem; }
.field { display: flex; flex-direction: column; gap: .35rem; margin-bottom: 1rem; }
.field input { padding: .6rem; border: 1px solid #cbd2d9; border-radius: 6px; }
.drop-zone { border: 2px dashed #9aa5b1; border-radius: 10px; padding: 2.5rem 1rem; text-align: center; cursor: pointer; background: #fff; }
.drop-zone.dragover, .drop-zone:hover { border-color: #2563eb; background: #eff6ff; }
.selected-file { font-weight: 600; }
.error-banner { background: #fde8e8; color: #9b1c1c; border-radius: 6px; padding: .75rem 1rem; margin: 1rem 0; }
.loading { margin: 1rem 0; font-style: italic; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: .5rem 1rem; cursor: pointer; border-bottom: 2px solid transparent; }
.tabs > input:checked + label { border-bottom-color: #2563eb; font-weight: 600; }
.tab-panel { display: none; background: #fff; border-radius: 10px; padding: 1.5rem; margin-top: .5rem; }
#tab-structured:checked ~ .panel-structured, #tab-raw:checked ~ .panel-raw { display: block; }
.contact-row { display: flex; flex-wrap: wrap; gap: 1rem; color: #52606d; }
.section { margin-top: 1.5rem; }
.card { border: 1px solid #e4e7eb; border-radius: 8px; padding: 1rem; margin-top: .75rem; }
.card-subtitle { color: #3e4c59; }
.card-meta { color: #7b8794; font-size: .9rem; }
.skill-tag { display: inline-block; background: #e0e7ff; color: #3730a3; border-radius: 999px; padding: .2rem .7rem; margin: .2rem; }
pre { white-space: pre-wrap; word-break: break-word; margin: 0; }
"#;

const SCRIPT: &str = r#"
(function () {
  var form = document.getElementById('upload-form');
  var zone = document.getElementById('drop-zone');
  var input = document.getElementById('file-input');
  var source = document.getElementById('file-source');
  var key = document.getElementById('api-key');
  var loading = document.getElementById('loading');
  function send(kind) {
    source.value = kind;
    if (key.value.trim()) { loading.hidden = false; }
    form.submit();
  }
  zone.addEventListener('click', function () { source.value = 'pointer-click'; input.click(); });
  zone.addEventListener('dragover', function (e) { e.preventDefault(); zone.classList.add('dragover'); });
  zone.addEventListener('dragleave', function () { zone.classList.remove('dragover'); });
  zone.addEventListener('drop', function (e) {
    e.preventDefault();
    zone.classList.remove('dragover');
    if (e.dataTransfer.files.length) { input.files = e.dataTransfer.files; send('drag-drop'); }
  });
  input.addEventListener('change', function () {
    if (input.files.length) { send(source.value === 'pointer-click' ? 'pointer-click' : 'file-picker'); }
  });
})();
"#;

pub fn render_page(view: &PageView) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text("CV Parser"))
        .child(Element::new("style").static_html(STYLE));

    let main = Element::new("main")
        .class("container")
        .child(Element::new("h1").text("CV Parser"))
        .child(upload_form(view))
        .child(error_banner(view))
        .child(loading_indicator(view))
        .child(results(view.visible_result()));

    let body = Element::new("body")
        .child(main)
        .child(Element::new("script").static_html(SCRIPT));

    let html = Element::new("html").attr("lang", "en").child(head).child(body);

    let mut out = String::from(DOCTYPE);
    html.write_to(&mut out);
    out
}

fn upload_form(view: &PageView) -> Element {
    let credential = Element::new("div")
        .class("field")
        .child(Element::new("label").attr("for", "api-key").text("API Key"))
        .child(
            Element::new("input")
                .attr("type", "password")
                .id("api-key")
                .attr("name", "api_key")
                .attr("placeholder", "Enter your API key")
                .attr("autocomplete", "off")
                .flag_if("autofocus", view.focus_credential),
        );

    let selected = view
        .selected_file
        .as_deref()
        .unwrap_or("No file selected");

    let drop_zone = Element::new("div")
        .id("drop-zone")
        .class("drop-zone")
        .child(Element::new("p").text("Drag & drop a CV here, or click to browse (PDF or DOCX)"))
        .child(Element::new("p").class("selected-file").text(selected))
        .child(
            Element::new("input")
                .attr("type", "file")
                .id("file-input")
                .attr("name", "file")
                .attr("accept", ".pdf,.docx")
                .flag("hidden"),
        );

    Element::new("form")
        .id("upload-form")
        .attr("method", "post")
        .attr("action", "/")
        .attr("enctype", "multipart/form-data")
        .child(credential)
        .child(
            Element::new("input")
                .attr("type", "hidden")
                .id("file-source")
                .attr("name", "source")
                .attr("value", "file-picker"),
        )
        .child(drop_zone)
        .child(Element::new("noscript").child(Element::new("button").attr("type", "submit").text("Parse CV")))
}

fn error_banner(view: &PageView) -> Element {
    let banner = Element::new("div")
        .id("error-banner")
        .class("error-banner")
        .attr("role", "alert");
    match &view.error_banner {
        Some(message) => banner.text(message.as_str()),
        None => banner.flag("hidden"),
    }
}

fn loading_indicator(view: &PageView) -> Element {
    Element::new("div")
        .id("loading")
        .class("loading")
        .flag_if("hidden", !view.loading)
        .text("Parsing CV, please wait...")
}

fn results(result: Option<&RenderedProfile>) -> Element {
    let section = Element::new("section").id("results");
    let Some(result) = result else {
        return section.flag("hidden");
    };

    let tabs = Element::new("div")
        .class("tabs")
        .child(
            Element::new("input")
                .attr("type", "radio")
                .attr("name", "view-tab")
                .id("tab-structured")
                .flag("checked"),
        )
        .child(Element::new("label").attr("for", "tab-structured").text("Structured"))
        .child(
            Element::new("input")
                .attr("type", "radio")
                .attr("name", "view-tab")
                .id("tab-raw"),
        )
        .child(Element::new("label").attr("for", "tab-raw").text("Raw JSON"))
        .child(
            Element::new("div")
                .class("tab-panel panel-structured")
                .id("structured-view")
                .children(result.structured.to_elements()),
        )
        .child(
            Element::new("div")
                .class("tab-panel panel-raw")
                .id("raw-view")
                .child(Element::new("pre").child(Element::new("code").text(result.raw.as_str()))),
        );

    section.child(tabs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Effect;
    use scraper::{Html, Selector};
    use serde_json::json;

    fn doc(view: &PageView) -> Html {
        Html::parse_document(&render_page(view))
    }

    fn has(doc: &Html, selector: &str) -> bool {
        doc.select(&Selector::parse(selector).unwrap()).next().is_some()
    }

    #[test]
    fn test_idle_page_hides_banner_loading_and_results() {
        let page = doc(&PageView::default());

        assert!(has(&page, "#error-banner[hidden]"));
        assert!(has(&page, "#loading[hidden]"));
        assert!(has(&page, "#results[hidden]"));
        assert!(has(&page, "input#api-key[name=api_key]"));
        assert!(has(&page, "input#file-input[type=file][name=file]"));
        assert!(!has(&page, "#api-key[autofocus]"));
    }

    #[test]
    fn test_missing_credential_focuses_field() {
        let mut view = PageView::default();
        view.apply(Effect::ShowError("Please enter your API key".to_string()));
        view.apply(Effect::FocusCredential);
        let page = doc(&view);

        assert!(has(&page, "#api-key[autofocus]"));
        let banner = page
            .select(&Selector::parse("#error-banner").unwrap())
            .next()
            .unwrap();
        assert!(banner.value().attr("hidden").is_none());
        assert_eq!(banner.text().collect::<String>(), "Please enter your API key");
    }

    #[test]
    fn test_result_page_has_both_views() {
        let response = json!({"name": "Ada <b>L</b>", "skills": ["Rust"]});
        let mut view = PageView::default();
        view.apply(Effect::RenderResult(Box::new(
            RenderedProfile::from_response(&response).unwrap(),
        )));
        let html = render_page(&view);
        let page = Html::parse_document(&html);

        assert!(!has(&page, "#results[hidden]"));
        assert!(has(&page, "#structured-view h2"));
        assert!(!html.contains("<b>L</b>"));

        let raw = page
            .select(&Selector::parse("#raw-view code").unwrap())
            .next()
            .unwrap()
            .text()
            .collect::<String>();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&raw).unwrap(), response);
    }
}
