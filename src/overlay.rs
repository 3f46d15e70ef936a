use crate::constants::{
    COVER_ID, COVER_PROGRESS_ID, COVER_PROGRESS_LABEL_ID, FATAL_FALLBACK_ID, OPEN_BUTTON_ID,
};
use crate::dom;
use web_sys as web;

/// Reflect preload progress on the cover's bar and label.
pub fn set_progress(document: &web::Document, percent: u32) {
    let percent = percent.min(100);
    if let Some(bar) = dom::element::<web::HtmlElement>(document, COVER_PROGRESS_ID) {
        let _ = bar.style().set_property("width", &format!("{}%", percent));
    }
    dom::set_text(document, COVER_PROGRESS_LABEL_ID, &format!("{}%", percent));
}

#[inline]
pub fn enable_open(document: &web::Document) {
    dom::set_disabled(document, OPEN_BUTTON_ID, false);
    if let Some(el) = document.get_element_by_id(COVER_ID) {
        let _ = el.class_list().add_1("ready");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(COVER_ID) {
        let _ = el.class_list().add_1("opened");
        let _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(COVER_ID)
        .and_then(|el| el.get_attribute("style"))
        .map(|s| s.contains("display:none"))
        .unwrap_or(false)
}

/// Replace the page with the fallback view.
pub fn show_fatal(document: &web::Document) {
    dom::hide(document, COVER_ID);
    dom::show(document, FATAL_FALLBACK_ID);
}
