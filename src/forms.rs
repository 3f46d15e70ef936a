//! RSVP, comment and contact forms plus the gift section's copy buttons.

use crate::constants::*;
use crate::tracking::Tracker;
use crate::{dom, net, remotelog, store};
use invite_core::i18n::{t, Lang};
use invite_core::{Comment, EventType, Rsvp};
use serde_json::json;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn status(document: &web::Document, id: &str, text: &str, ok: bool) {
    dom::set_text(document, id, text);
    if let Some(el) = document.get_element_by_id(id) {
        let list = el.class_list();
        _ = list.toggle_with_force("ok", ok);
        _ = list.toggle_with_force("error", !ok);
    }
}

async fn lookup_ip() -> Option<String> {
    let reply = net::get(IP_LOOKUP_URL).await.ok()?;
    if !reply.is_ok() {
        return None;
    }
    reply.json().ok()?.get("ip")?.as_str().map(str::to_string)
}

pub fn wire_rsvp(document: &web::Document, lang: Lang, tracker: Tracker) {
    let doc = document.clone();
    dom::add_click_listener(document, RSVP_SUBMIT_ID, move || {
        let rsvp = Rsvp::from_form(
            &dom::field_value(&doc, RSVP_NAME_ID),
            &dom::field_value(&doc, RSVP_GUESTS_ID),
            &dom::field_value(&doc, RSVP_ATTENDANCE_ID),
            &dom::user_agent(),
        );
        let mut rsvp = match rsvp {
            Ok(r) => r,
            Err(e) => {
                let text = format!("{}: {}", t(lang, "invalid_form"), e);
                status(&doc, RSVP_STATUS_ID, &text, false);
                return;
            }
        };
        let Some(store) = store::store() else {
            status(&doc, RSVP_STATUS_ID, t(lang, "send_failed"), false);
            return;
        };
        dom::set_disabled(&doc, RSVP_SUBMIT_ID, true);
        let doc = doc.clone();
        let tracker = tracker.clone();
        spawn_local(async move {
            rsvp.ip = lookup_ip().await;
            match store.add(&rsvp).await {
                Ok(_) => {
                    status(&doc, RSVP_STATUS_ID, t(lang, "rsvp_thanks"), true);
                    tracker.track(EventType::RsvpSubmitted);
                }
                Err(e) => {
                    log::error!("[rsvp] write failed: {:?}", e);
                    remotelog::remote_log(
                        log::Level::Error,
                        "rsvp write failed",
                        Some(json!({ "error": e.to_string() })),
                    );
                    status(&doc, RSVP_STATUS_ID, t(lang, "send_failed"), false);
                }
            }
            dom::set_disabled(&doc, RSVP_SUBMIT_ID, false);
        });
    });
}

fn comment_item(document: &web::Document, comment: &Comment) -> Option<web::Element> {
    let li = document.create_element("li").ok()?;
    li.set_class_name("comment");
    let name = document.create_element("strong").ok()?;
    name.set_text_content(Some(&comment.name));
    _ = li.append_child(&name);
    if let Some(ts) = comment.created_at {
        let time = document.create_element("time").ok()?;
        _ = time.set_attribute("datetime", &ts.to_rfc3339());
        time.set_text_content(Some(&ts.format("%d %b %Y").to_string()));
        _ = li.append_child(&time);
    }
    let body = document.create_element("p").ok()?;
    body.set_text_content(Some(&comment.message));
    _ = li.append_child(&body);
    Some(li)
}

/// Replace the list contents; text only, never markup.
pub fn render_comments(document: &web::Document, comments: &[Comment]) {
    let Some(list) = document.get_element_by_id(COMMENT_LIST_ID) else {
        return;
    };
    while let Some(child) = list.first_child() {
        _ = list.remove_child(&child);
    }
    for c in comments.iter().filter(|c| c.approved) {
        if let Some(item) = comment_item(document, c) {
            _ = list.append_child(&item);
        }
    }
}

pub fn refresh_comments(document: &web::Document) {
    let Some(store) = store::store() else {
        return;
    };
    let doc = document.clone();
    spawn_local(async move {
        match store.recent_comments(COMMENTS_PAGE_SIZE).await {
            Ok(comments) => {
                log::info!("[comments] loaded {}", comments.len());
                render_comments(&doc, &comments);
            }
            Err(e) => log::warn!("[comments] load failed: {:?}", e),
        }
    });
}

pub fn wire_comments(document: &web::Document, lang: Lang, tracker: Tracker) {
    let doc = document.clone();
    dom::add_click_listener(document, COMMENT_SUBMIT_ID, move || {
        let comment = match Comment::from_form(
            &dom::field_value(&doc, COMMENT_NAME_ID),
            &dom::field_value(&doc, COMMENT_MESSAGE_ID),
        ) {
            Ok(c) => c,
            Err(e) => {
                let text = format!("{}: {}", t(lang, "invalid_form"), e);
                status(&doc, COMMENT_STATUS_ID, &text, false);
                return;
            }
        };
        let Some(store) = store::store() else {
            status(&doc, COMMENT_STATUS_ID, t(lang, "send_failed"), false);
            return;
        };
        dom::set_disabled(&doc, COMMENT_SUBMIT_ID, true);
        let doc = doc.clone();
        let tracker = tracker.clone();
        spawn_local(async move {
            match store.add(&comment).await {
                Ok(_) => {
                    status(&doc, COMMENT_STATUS_ID, t(lang, "comment_sent"), true);
                    dom::clear_field(&doc, COMMENT_MESSAGE_ID);
                    tracker.track(EventType::CommentPosted);
                    refresh_comments(&doc);
                }
                Err(e) => {
                    log::error!("[comments] write failed: {:?}", e);
                    status(&doc, COMMENT_STATUS_ID, t(lang, "send_failed"), false);
                }
            }
            dom::set_disabled(&doc, COMMENT_SUBMIT_ID, false);
        });
    });
}

fn restore_label_later(button: web::Element, label: String) {
    let restore = Closure::once_into_js(move || {
        button.set_text_content(Some(&label));
    });
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            COPY_FEEDBACK_MS,
        );
    }
}

/// Buttons with `data-copy` put their value on the clipboard.
pub fn wire_copy_buttons(document: &web::Document, lang: Lang) {
    let Ok(nodes) = document.query_selector_all(COPY_BUTTON_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(button) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let target = button.clone();
        let closure = Closure::wrap(Box::new(move || {
            let Some(value) = target.get_attribute("data-copy") else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(&value);
            let button = target.clone();
            spawn_local(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => {
                        let label = button.text_content().unwrap_or_default();
                        button.set_text_content(Some(t(lang, "copied")));
                        restore_label_later(button, label);
                    }
                    Err(e) => log::warn!("[gift] clipboard rejected: {:?}", e),
                }
            });
        }) as Box<dyn FnMut()>);
        _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Portfolio contact form, relayed by invite-server.
pub fn wire_contact(document: &web::Document, lang: Lang) {
    let doc = document.clone();
    dom::add_click_listener(document, CONTACT_SUBMIT_ID, move || {
        let body = json!({
            "name": dom::field_value(&doc, CONTACT_NAME_ID).trim(),
            "email": dom::field_value(&doc, CONTACT_EMAIL_ID).trim(),
            "message": dom::field_value(&doc, CONTACT_MESSAGE_ID).trim(),
        });
        let blank = |v: &serde_json::Value| v.as_str().map_or(true, str::is_empty);
        if body.as_object().map_or(true, |m| m.values().any(blank)) {
            status(&doc, CONTACT_STATUS_ID, t(lang, "invalid_form"), false);
            return;
        }
        dom::set_disabled(&doc, CONTACT_SUBMIT_ID, true);
        let doc = doc.clone();
        spawn_local(async move {
            match net::post_json(CONTACT_ENDPOINT, &body).await {
                Ok(reply) if reply.is_ok() => {
                    status(&doc, CONTACT_STATUS_ID, t(lang, "contact_sent"), true);
                    dom::clear_field(&doc, CONTACT_MESSAGE_ID);
                }
                Ok(reply) => {
                    log::warn!("[contact] server answered {}: {}", reply.status, reply.body);
                    status(&doc, CONTACT_STATUS_ID, t(lang, "send_failed"), false);
                }
                Err(e) => {
                    log::error!("[contact] request failed: {:?}", e);
                    status(&doc, CONTACT_STATUS_ID, t(lang, "send_failed"), false);
                }
            }
            dom::set_disabled(&doc, CONTACT_SUBMIT_ID, false);
        });
    });
}
