//! Client-side reports to the log endpoints on invite-server, plus the panic
//! hook that swaps in the fallback view.

use crate::constants::{ERROR_LOG_ENDPOINT, FATAL_RELOAD_ID, LOG_ENDPOINT};
use crate::{dom, net, overlay};
use serde_json::{json, Value};
use wasm_bindgen_futures::spawn_local;

fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

fn send(endpoint: &'static str, body: Value) {
    spawn_local(async move {
        match net::post_json(endpoint, &body).await {
            Ok(reply) if reply.is_ok() => {}
            Ok(reply) => log::warn!("[remotelog] {} answered {}", endpoint, reply.status),
            Err(e) => log::warn!("[remotelog] {} unreachable: {:?}", endpoint, e),
        }
    });
}

/// Fire-and-forget log line to `/api/log`.
pub fn remote_log(level: log::Level, message: &str, context: Option<Value>) {
    let mut body = json!({
        "level": level.as_str().to_ascii_lowercase(),
        "message": message,
        "timestamp": now_iso(),
    });
    if let Some(ctx) = context {
        body["context"] = ctx;
    }
    send(LOG_ENDPOINT, body);
}

pub fn report_error(message: &str, error: Value) {
    send(
        ERROR_LOG_ENDPOINT,
        json!({
            "level": "error",
            "message": message,
            "timestamp": now_iso(),
            "error": error,
            "context": { "path": dom::pathname(), "userAgent": dom::user_agent() },
        }),
    );
}

/// Console hook first, then the fallback view and a remote report.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(document) = dom::window_document() {
            overlay::show_fatal(&document);
        }
        report_error("panic", json!({ "message": info.to_string() }));
    }));
    if let Some(document) = dom::window_document() {
        dom::add_click_listener(&document, FATAL_RELOAD_ID, dom::reload);
    }
}
