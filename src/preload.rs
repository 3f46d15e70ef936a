// Asset preloading for the cover screen. Each asset races its load against a
// timeout so progress always reaches 100%.

use crate::constants::MUSIC_SRC;
use crate::overlay;
use invite_core::{load_order, Asset, AssetKind, Generation, Outcome, PreloadProgress};
use invite_core::ASSET_TIMEOUT_MS;
use js_sys::{Array, Function, Promise};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const LOADED: &str = "loaded";
const FAILED: &str = "failed";
const TIMEOUT: &str = "timeout";

/// Manifest from `[data-preload]` elements plus the music track.
///
/// `data-preload-kind="audio"` marks audio; `data-priority` loads first.
pub fn manifest_from_page(document: &web::Document) -> Vec<Asset> {
    let mut manifest = Vec::new();
    if let Ok(nodes) = document.query_selector_all("[data-preload]") {
        for i in 0..nodes.length() {
            let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let Some(url) = el.get_attribute("data-preload").filter(|u| !u.is_empty()) else {
                continue;
            };
            let asset = match el.get_attribute("data-preload-kind").as_deref() {
                Some("audio") => Asset::audio(url),
                _ => Asset::image(url),
            };
            manifest.push(if el.has_attribute("data-priority") {
                asset.prioritized()
            } else {
                asset
            });
        }
    }
    manifest.push(Asset::audio(MUSIC_SRC));
    manifest
}

fn resolve_with(resolve: Function, tag: &'static str) -> JsValue {
    Closure::once_into_js(move || {
        _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(tag));
    })
}

fn load_image(url: &str) -> Promise {
    let url = url.to_string();
    Promise::new(&mut |resolve, _reject| {
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(_) => {
                _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(FAILED));
                return;
            }
        };
        img.set_onload(Some(resolve_with(resolve.clone(), LOADED).unchecked_ref()));
        img.set_onerror(Some(resolve_with(resolve, FAILED).unchecked_ref()));
        img.set_src(&url);
    })
}

fn load_audio(url: &str) -> Promise {
    let url = url.to_string();
    Promise::new(&mut |resolve, _reject| {
        let audio = match web::HtmlAudioElement::new_with_src(&url) {
            Ok(a) => a,
            Err(_) => {
                _ = resolve.call1(&JsValue::NULL, &JsValue::from_str(FAILED));
                return;
            }
        };
        audio.set_preload("auto");
        _ = audio.add_event_listener_with_callback(
            "canplaythrough",
            resolve_with(resolve.clone(), LOADED).unchecked_ref(),
        );
        _ = audio.add_event_listener_with_callback(
            "error",
            resolve_with(resolve, FAILED).unchecked_ref(),
        );
        audio.load();
    })
}

fn timeout(ms: u32) -> Promise {
    Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_1(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
                &JsValue::from_str(TIMEOUT),
            );
        }
    })
}

/// Load one asset; never rejects.
async fn load(asset: &Asset) -> Outcome {
    let load = match asset.kind {
        AssetKind::Image => load_image(&asset.url),
        AssetKind::Audio => load_audio(&asset.url),
    };
    let race = Promise::race(&Array::of2(&load, &timeout(ASSET_TIMEOUT_MS)));
    let outcome = match JsFuture::from(race).await.ok().and_then(|v| v.as_string()) {
        Some(tag) if tag == LOADED => Outcome::Loaded,
        Some(tag) if tag == TIMEOUT => Outcome::TimedOut,
        _ => Outcome::Failed,
    };
    if outcome != Outcome::Loaded {
        log::warn!("[preload] {} -> {:?}", asset.url, outcome);
    }
    outcome
}

/// Shared state for one preload run.
pub struct Preloader {
    pub progress: RefCell<PreloadProgress>,
    document: web::Document,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Preloader {
    pub fn new(document: web::Document, total: usize, on_complete: impl FnOnce() + 'static) -> Rc<Self> {
        Rc::new(Self {
            progress: RefCell::new(PreloadProgress::new(total)),
            document,
            on_complete: RefCell::new(Some(Box::new(on_complete))),
        })
    }

    fn settle(&self, generation: Generation, index: usize, outcome: Outcome) {
        let (percent, complete) = {
            let mut p = self.progress.borrow_mut();
            if !p.settle(generation, index, outcome) {
                return;
            }
            (p.percent(), p.is_complete())
        };
        overlay::set_progress(&self.document, percent);
        if complete {
            self.finish();
        }
    }

    fn finish(&self) {
        let failures = self.progress.borrow().failures();
        log::info!("[preload] complete, {} failed", failures);
        overlay::enable_open(&self.document);
        if let Some(cb) = self.on_complete.borrow_mut().take() {
            cb();
        }
    }

    /// Stop reacting to callbacks from the current run.
    pub fn cancel(&self) {
        self.progress.borrow_mut().cancel();
    }
}

/// Priority assets in order, then the rest concurrently.
pub fn start(preloader: Rc<Preloader>, manifest: Vec<Asset>) {
    let generation = preloader.progress.borrow_mut().begin();
    overlay::set_progress(&preloader.document, 0);
    if manifest.is_empty() {
        preloader.finish();
        return;
    }
    let manifest = Rc::new(manifest);
    spawn_local(async move {
        let (serial, concurrent) = load_order(&manifest);
        log::info!(
            "[preload] {} priority, {} concurrent",
            serial.len(),
            concurrent.len()
        );
        for idx in serial {
            if !preloader.progress.borrow().is_current(generation) {
                return;
            }
            let outcome = load(&manifest[idx]).await;
            preloader.settle(generation, idx, outcome);
        }
        for idx in concurrent {
            let preloader = preloader.clone();
            let manifest = manifest.clone();
            spawn_local(async move {
                let outcome = load(&manifest[idx]).await;
                preloader.settle(generation, idx, outcome);
            });
        }
    });
}
