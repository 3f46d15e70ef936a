use crate::dom;
use crate::input::{apply_key_scroll, key_scroll};
use invite_core::ScrollTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys typed into form fields must not scroll the page.
fn is_typing(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}

pub fn handle_scroll_keydown(ev: &web::KeyboardEvent, scroll: &Rc<RefCell<ScrollTracker>>) {
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() || is_typing(ev) {
        return;
    }
    let Some(action) = key_scroll(&ev.key(), ev.shift_key()) else {
        return;
    };
    let mut tracker = scroll.borrow_mut();
    if tracker.is_locked() {
        return;
    }
    apply_key_scroll(&mut tracker, action);
    ev.prevent_default();
}

pub fn wire_scroll_keys(scroll: Rc<RefCell<ScrollTracker>>) {
    dom::on_window("keydown", move |ev: web::KeyboardEvent| {
        handle_scroll_keydown(&ev, &scroll);
    });
}
