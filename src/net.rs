use anyhow::anyhow;
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Status and body text of a completed request.
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json(&self) -> anyhow::Result<Value> {
        serde_json::from_str(&self.body).map_err(|e| anyhow!("bad json: {}", e))
    }
}

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

async fn send(method: &str, url: &str, body: Option<&Value>) -> anyhow::Result<Reply> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let init = web::RequestInit::new();
    init.set_method(method);
    init.set_mode(web::RequestMode::Cors);
    if let Some(body) = body {
        let headers = web::Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body.to_string()));
    }
    let request = web::Request::new_with_str_and_init(url, &init).map_err(js_err)?;
    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    Ok(Reply {
        status: resp.status(),
        body: text.as_string().unwrap_or_default(),
    })
}

pub async fn post_json(url: &str, body: &Value) -> anyhow::Result<Reply> {
    send("POST", url, Some(body)).await
}

pub async fn get(url: &str) -> anyhow::Result<Reply> {
    send("GET", url, None).await
}
