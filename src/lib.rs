#![cfg(target_arch = "wasm32")]
use crate::audio::MusicPlayer;
use crate::constants::*;
use crate::tracking::Tracker;
use invite_core::i18n::{t, Lang};
use invite_core::session::guest_name_from_param;
use invite_core::{EventType, Route, ScrollTracker, Section};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod forms;
mod frame;
mod i18n;
mod input;
mod net;
mod overlay;
mod preload;
mod remotelog;
mod scene;
mod store;
mod tracking;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    remotelog::install_panic_hook();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("invite-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
            if let Some(document) = dom::window_document() {
                overlay::show_fatal(&document);
            }
            remotelog::report_error("init failed", serde_json::json!({ "message": e.to_string() }));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let lang = i18n::detect();
    i18n::apply(&document, lang);

    if dom::query_param("probe").as_deref() == Some("1") {
        tracking::write_probe();
    }

    let route = Route::from_path(&dom::pathname());
    log::info!("[route] {:?}", route);
    match route {
        Route::Invitation => init_invitation(&document, lang),
        Route::Portfolio => init_portfolio(&document, lang),
        Route::NotFound => {
            dom::set_text(&document, FATAL_MESSAGE_ID, t(lang, "not_found"));
            overlay::show_fatal(&document);
        }
    }
    Ok(())
}

/// Scroll input plus the frame loop for a section table.
fn start_scrolling(
    document: &web::Document,
    scroll: &Rc<RefCell<ScrollTracker>>,
    sections: &'static [Section],
    with_scene: bool,
    tracker: Option<Tracker>,
) {
    events::wire_wheel(scroll.clone());
    events::wire_touch(scroll.clone());
    events::wire_scroll_keys(scroll.clone());
    events::wire_native_scroll(scroll.clone());

    let scene = if with_scene {
        let s = scene::SceneLayer::find(document);
        if s.is_none() {
            log::warn!("[scene] #{} not found; continuing without", SCENE_LAYER_ID);
        }
        s
    } else {
        None
    };
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        document,
        scroll.clone(),
        sections,
        scene,
        tracker,
    )));
    frame::start_loop(frame_ctx);
}

fn init_invitation(document: &web::Document, lang: Lang) {
    let route = Route::Invitation;
    let guest = guest_name_from_param(dom::query_param("to").as_deref());
    dom::set_text(document, GUEST_NAME_ID, &guest);
    let tracker = Tracker::new(&guest);
    log::info!("[track] session={}", tracker.session_id());
    tracker.track(EventType::PageView);

    let scroll = Rc::new(RefCell::new(ScrollTracker::new()));
    let music: Rc<RefCell<Option<MusicPlayer>>> = Rc::new(RefCell::new(None));

    dom::set_disabled(document, OPEN_BUTTON_ID, true);
    let manifest = preload::manifest_from_page(document);
    let preloader = preload::Preloader::new(document.clone(), manifest.len(), || {
        log::info!("[preload] cover ready");
    });
    preload::start(preloader.clone(), manifest);

    {
        let doc = document.clone();
        let scroll = scroll.clone();
        let music = music.clone();
        let tracker = tracker.clone();
        let preloader = preloader.clone();
        dom::add_click_listener(document, OPEN_BUTTON_ID, move || {
            if overlay::is_hidden(&doc) {
                return;
            }
            if !preloader.progress.borrow().is_complete() {
                // opened early: stop updating a cover that is going away
                preloader.cancel();
            }
            overlay::hide(&doc);
            scroll.borrow_mut().unlock();
            let mut music = music.borrow_mut();
            if music.is_none() {
                *music = MusicPlayer::new(MUSIC_SRC).ok();
            }
            if let Some(player) = music.as_mut() {
                player.start();
            }
            tracker.track(EventType::OpenInvitation);
        });
    }
    {
        let music = music.clone();
        let tracker = tracker.clone();
        dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
            if let Some(player) = music.borrow_mut().as_mut() {
                let playing = player.toggle();
                tracker.track(EventType::MusicToggled);
                remotelog::remote_log(
                    log::Level::Info,
                    "music toggled",
                    Some(serde_json::json!({ "playing": playing })),
                );
            }
        });
    }

    forms::wire_rsvp(document, lang, tracker.clone());
    forms::wire_comments(document, lang, tracker.clone());
    forms::wire_copy_buttons(document, lang);
    forms::refresh_comments(document);

    start_scrolling(
        document,
        &scroll,
        route.sections(),
        route.has_scene(),
        Some(tracker),
    );
}

fn init_portfolio(document: &web::Document, lang: Lang) {
    let route = Route::Portfolio;
    let scroll = Rc::new(RefCell::new(ScrollTracker::new()));
    // no cover on the portfolio
    scroll.borrow_mut().unlock();
    forms::wire_contact(document, lang);
    start_scrolling(document, &scroll, route.sections(), route.has_scene(), None);
}
