use crate::dom;
use crate::input::TouchDrag;
use invite_core::{percent_from_scroll, wheel_delta_px, DeltaMode, ScrollTracker};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Wheel deltas move the virtual scroll target.
pub fn wire_wheel(scroll: Rc<RefCell<ScrollTracker>>) {
    dom::on_window("wheel", move |ev: web::WheelEvent| {
        let (_, viewport_h) = dom::viewport_size();
        let px = wheel_delta_px(
            ev.delta_y(),
            DeltaMode::from_dom(ev.delta_mode()),
            viewport_h as f64,
        );
        scroll.borrow_mut().push_pixels(px);
    });
}

fn first_touch_y(ev: &web::TouchEvent) -> Option<f32> {
    ev.touches().get(0).map(|t| t.client_y() as f32)
}

/// Vertical drags scroll like the wheel.
pub fn wire_touch(scroll: Rc<RefCell<ScrollTracker>>) {
    let drag = Rc::new(RefCell::new(TouchDrag::default()));
    {
        let drag = drag.clone();
        dom::on_window("touchstart", move |ev: web::TouchEvent| {
            if let Some(y) = first_touch_y(&ev) {
                drag.borrow_mut().begin(y);
            }
        });
    }
    {
        let drag = drag.clone();
        dom::on_window("touchmove", move |ev: web::TouchEvent| {
            let Some(y) = first_touch_y(&ev) else {
                return;
            };
            let px = drag.borrow_mut().move_to(y);
            if px != 0.0 {
                scroll.borrow_mut().push_pixels(px);
            }
        });
    }
    for name in ["touchend", "touchcancel"] {
        let drag = drag.clone();
        dom::on_window(name, move |_ev: web::TouchEvent| {
            drag.borrow_mut().end();
        });
    }
}

/// Native document scrolls (anchor links, find-in-page) re-sync the virtual
/// target.
pub fn wire_native_scroll(scroll: Rc<RefCell<ScrollTracker>>) {
    dom::on_window("scroll", move |_ev: web::Event| {
        let Some(el) = dom::window_document().and_then(|d| d.scrolling_element()) else {
            return;
        };
        let percent = percent_from_scroll(
            el.scroll_top() as f64,
            el.scroll_height() as f64,
            el.client_height() as f64,
        );
        scroll.borrow_mut().jump_to(percent);
    });
}
