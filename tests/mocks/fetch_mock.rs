use gloo_utils::format::JsValueSerdeExt;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// This module replaces `window.fetch` for the duration of a test run so
/// the components can be exercised without the hosting platform's
/// `tables/*` endpoints. Every call is recorded; responses are served
/// from a queue, defaulting to an empty list payload.

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock() {
    if (!window.__fetch_mock_installed) {
        window.__fetch_mock_installed = true;
        window.fetch = function(input, init) {
            var url = (typeof input === 'string') ? input : input.url;
            var method = (typeof input === 'string')
                ? ((init && init.method) || 'GET')
                : input.method;
            var entry = { url: url, method: method, body: null };
            window.__fetch_calls.push(entry);
            var bodyReady = (typeof input !== 'string' && method !== 'GET' && method !== 'HEAD')
                ? input.clone().text().then(function(text) { entry.body = text; })
                : Promise.resolve();
            return bodyReady.then(function() {
                var next = window.__fetch_queue.shift();
                if (!next) {
                    return new Response('{"data":[]}', {
                        status: 200,
                        headers: { 'Content-Type': 'application/json' }
                    });
                }
                if (next.fail) {
                    throw new TypeError('NetworkError when attempting to fetch resource.');
                }
                return new Response(next.body, {
                    status: next.status,
                    headers: { 'Content-Type': 'application/json' }
                });
            });
        };
    }
    window.__fetch_calls = [];
    window.__fetch_queue = [];
}

export function queue_fetch_response(status, body) {
    window.__fetch_queue.push({ status: status, body: body });
}

export function queue_fetch_failure() {
    window.__fetch_queue.push({ fail: true });
}

export function fetch_call_count() {
    return window.__fetch_calls.length;
}

export function fetch_call_at(index) {
    return window.__fetch_calls[index] || null;
}
"#)]
extern "C" {
    /// Installs the interceptor (idempotent) and clears the recorded
    /// calls and the response queue.
    pub fn install_fetch_mock();

    /// Queues one response; served in FIFO order.
    pub fn queue_fetch_response(status: u16, body: &str);

    /// Queues one rejected fetch, as a dropped connection would produce.
    pub fn queue_fetch_failure();

    /// Number of fetch calls recorded since the last install.
    pub fn fetch_call_count() -> u32;

    #[wasm_bindgen(js_name = fetch_call_at)]
    fn fetch_call_at_js(index: u32) -> JsValue;
}

#[derive(Deserialize, Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub method: String,
    pub body: Option<String>,
}

pub fn fetch_call_at(index: u32) -> Option<RecordedCall> {
    fetch_call_at_js(index).into_serde().ok()
}
