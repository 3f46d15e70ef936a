use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

/// Typed lookup by id; `None` when missing or of another element type.
pub fn element<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = element::<web::HtmlElement>(document, id) {
        let _ = el.style().remove_property("display");
        let _ = el.class_list().remove_1("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = element::<web::HtmlElement>(document, id) {
        let _ = el.style().set_property("display", "none");
    }
}

/// Raw value of an `<input>`, `<textarea>` or `<select>`.
pub fn field_value(document: &web::Document, id: &str) -> String {
    let el = match document.get_element_by_id(id) {
        Some(el) => el,
        None => return String::new(),
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub fn clear_field(document: &web::Document, id: &str) {
    if let Some(input) = element::<web::HtmlInputElement>(document, id) {
        input.set_value("");
    } else if let Some(area) = element::<web::HtmlTextAreaElement>(document, id) {
        area.set_value("");
    }
}

pub fn set_disabled(document: &web::Document, id: &str, disabled: bool) {
    if let Some(btn) = element::<web::HtmlButtonElement>(document, id) {
        btn.set_disabled(disabled);
    }
}

/// `content` of `<meta name="...">`, if present and non-empty.
pub fn meta_content(document: &web::Document, name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.get_attribute("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Decoded query-string parameter of the current location.
pub fn query_param(name: &str) -> Option<String> {
    let search = web::window()?.location().search().ok()?;
    let params = web::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

pub fn pathname() -> String {
    web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn user_agent() -> String {
    web::window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|j| j.as_f64()).unwrap_or(0.0) as f32
    };
    (px(w.inner_width()), px(w.inner_height()))
}

/// Add a page-lifetime listener to the window.
pub fn on_window<E: JsCast + 'static>(event: &str, handler: impl FnMut(E) + 'static) {
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Reload the page; the only recovery the fallback view offers.
pub fn reload() {
    if let Some(w) = web::window() {
        let _ = w.location().reload();
    }
}
