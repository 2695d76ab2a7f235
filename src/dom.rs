use crate::constants::{RESULT_ID, TARGET_ID};
use plotter_core::StatusSink;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach a click listener to", element_id);
    }
}

/// Target and result lines rendered as plain text content.
pub struct DomStatus {
    target: web::Element,
    result: web::Element,
}

impl DomStatus {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            target: element_by_id(document, TARGET_ID)?,
            result: element_by_id(document, RESULT_ID)?,
        })
    }
}

impl StatusSink for DomStatus {
    fn show_target(&mut self, text: &str) {
        self.target.set_text_content(Some(text));
    }

    fn show_result(&mut self, text: &str) {
        self.result.set_text_content(Some(text));
    }
}
