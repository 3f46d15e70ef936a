use crate::constants::{REACHED_END_PERCENT, SCROLL_PROGRESS_ID};
use crate::dom;
use crate::input;
use crate::scene::SceneLayer;
use crate::tracking::Tracker;
use fnv::FnvHashMap;
use instant::Instant;
use invite_core::{active_sections, EventType, ScrollTracker, Section, SectionId, SectionStyle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scroll: Rc<RefCell<ScrollTracker>>,
    pub sections: &'static [Section],
    pub elements: FnvHashMap<SectionId, web::HtmlElement>,
    pub applied: FnvHashMap<SectionId, SectionStyle>,
    pub scene: Option<SceneLayer>,
    pub progress_bar: Option<web::HtmlElement>,
    // root element carrying `data-section` for nav highlighting
    pub root: Option<web::Element>,
    pub current_section: Option<SectionId>,
    pub tracker: Option<Tracker>,
    pub reached_end: bool,
    pub last_instant: Instant,
    pub last_percent: Option<f32>,
}

impl FrameContext {
    pub fn new(
        document: &web::Document,
        scroll: Rc<RefCell<ScrollTracker>>,
        sections: &'static [Section],
        scene: Option<SceneLayer>,
        tracker: Option<Tracker>,
    ) -> Self {
        let mut elements = FnvHashMap::default();
        for s in sections {
            match dom::element::<web::HtmlElement>(document, s.id.element_id()) {
                Some(el) => {
                    elements.insert(s.id, el);
                }
                None => log::warn!("[frame] missing #{}", s.id.element_id()),
            }
        }
        log::info!(
            "[frame] sections={}/{} scene={}",
            elements.len(),
            sections.len(),
            scene.is_some()
        );
        Self {
            scroll,
            sections,
            elements,
            applied: FnvHashMap::default(),
            scene,
            progress_bar: dom::element::<web::HtmlElement>(document, SCROLL_PROGRESS_ID),
            root: document.document_element(),
            current_section: None,
            tracker,
            reached_end: false,
            last_instant: Instant::now(),
            last_percent: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = input::clamp_dt((now - self.last_instant).as_secs_f32());
        self.last_instant = now;

        let percent = {
            let mut scroll = self.scroll.borrow_mut();
            scroll.step(dt_sec);
            scroll.percent()
        };

        if let Some(scene) = self.scene.as_mut() {
            scene.update(percent, dom::viewport_size());
        }

        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);

        for section in self.sections {
            let Some(el) = self.elements.get(&section.id) else {
                continue;
            };
            let mounted = section.config.is_mounted(percent);
            let style = if mounted {
                section.config.style(percent)
            } else {
                SectionStyle::HIDDEN
            };
            if self.applied.get(&section.id) == Some(&style) {
                continue;
            }
            apply_style(el, &style, mounted);
            self.applied.insert(section.id, style);
        }

        let current = active_sections(self.sections, percent).last().copied();
        if current != self.current_section {
            self.current_section = current;
            if let (Some(root), Some(id)) = (&self.root, current) {
                _ = root.set_attribute("data-section", id.element_id());
            }
        }

        if let Some(bar) = &self.progress_bar {
            _ = bar
                .style()
                .set_property("transform", &format!("scaleX({:.4})", percent / 100.0));
        }

        if !self.reached_end && percent >= REACHED_END_PERCENT {
            self.reached_end = true;
            if let Some(t) = &self.tracker {
                t.track(EventType::ReachedEnd);
            }
        }
    }
}

fn apply_style(el: &web::HtmlElement, style: &SectionStyle, mounted: bool) {
    let css = el.style();
    if !mounted {
        _ = css.set_property("display", "none");
        return;
    }
    _ = css.remove_property("display");
    _ = css.set_property("opacity", &format!("{:.4}", style.opacity));
    _ = css.set_property("transform", &style.css_transform());
    _ = css.set_property("filter", &style.css_filter());
    _ = css.set_property(
        "pointer-events",
        if style.visibility > 0.5 { "auto" } else { "none" },
    );
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
