use crate::{dom, store};
use chrono::{DateTime, Utc};
use invite_core::firestore::Probe;
use invite_core::session::{is_valid_session_id, new_session_id, storage_key};
use invite_core::{EventType, TrackingEvent};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn now_utc() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn local_storage() -> Option<web::Storage> {
    web::window()?.local_storage().ok().flatten()
}

/// Stored session id for this guest, creating one on first visit.
fn session_for(guest_name: &str) -> String {
    let key = storage_key(guest_name);
    let storage = local_storage();
    if let Some(existing) = storage
        .as_ref()
        .and_then(|s| s.get_item(&key).ok().flatten())
        .filter(|id| is_valid_session_id(id))
    {
        return existing;
    }
    let id = new_session_id(&mut rand::thread_rng());
    if let Some(s) = storage {
        if s.set_item(&key, &id).is_err() {
            log::warn!("[track] could not persist session id");
        }
    }
    id
}

#[derive(Clone, Debug)]
pub struct Tracker {
    guest_name: String,
    session_id: String,
}

impl Tracker {
    pub fn new(guest_name: &str) -> Self {
        Self {
            guest_name: guest_name.to_string(),
            session_id: session_for(guest_name),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    fn event(&self, event_type: EventType) -> TrackingEvent {
        let screen_width = web::window()
            .and_then(|w| w.screen().ok())
            .and_then(|s| s.width().ok())
            .unwrap_or(0)
            .max(0) as u32;
        TrackingEvent {
            event_type,
            guest_name: self.guest_name.clone(),
            session_id: self.session_id.clone(),
            page_path: dom::pathname(),
            user_agent: dom::user_agent(),
            screen_width,
            client_ts: now_utc(),
        }
    }

    /// Write the event in the background; failures are only logged.
    pub fn track(&self, event_type: EventType) {
        let event = self.event(event_type);
        spawn_local(async move {
            let Some(store) = store::store() else {
                return;
            };
            if let Err(e) = store.add(&event).await {
                log::warn!("[track] {} dropped: {:?}", event.event_type.as_str(), e);
            }
        });
    }
}

/// Connectivity check for `?probe=1`.
pub fn write_probe() {
    spawn_local(async move {
        let Some(store) = store::store() else {
            return;
        };
        match store.add(&Probe { client_ts: now_utc() }).await {
            Ok(id) => log::info!("[store] probe ok ({})", id),
            Err(e) => log::error!("[store] probe failed: {:?}", e),
        }
    });
}
