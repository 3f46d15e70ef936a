use crate::constants::I18N_ATTR;
use invite_core::i18n::{t, Lang};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn detect() -> Lang {
    let param = crate::dom::query_param("lang");
    let navigator = web::window().and_then(|w| w.navigator().language());
    Lang::detect(param.as_deref(), navigator.as_deref())
}

/// Replace the text of every `[data-i18n]` element.
pub fn apply(document: &web::Document, lang: Lang) {
    let selector = format!("[{}]", I18N_ATTR);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return;
    };
    let mut applied = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        if let Some(key) = el.get_attribute(I18N_ATTR) {
            el.set_text_content(Some(t(lang, &key)));
            applied += 1;
        }
    }
    let _ = document
        .document_element()
        .map(|root| root.set_attribute("lang", lang_tag(lang)));
    log::info!("[i18n] lang={} strings={}", lang_tag(lang), applied);
}

fn lang_tag(lang: Lang) -> &'static str {
    match lang {
        Lang::Id => "id",
        Lang::En => "en",
    }
}
