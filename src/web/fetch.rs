//! Single best-effort GET of the content document.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::content::ContentDocument;
use crate::loader::{parse_document, resolve, LoadError, CONTENT_URL};

/// Fetches and resolves the content document. Never fails: the resolver
/// logs any error and substitutes the embedded fallback.
pub(super) async fn load_document() -> ContentDocument {
    resolve(fetch_content().await)
}

async fn fetch_content() -> Result<ContentDocument, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Transport("no window".to_string()))?;

    let promise: js_sys::Promise = window.fetch_with_str(CONTENT_URL);
    let response_value = JsFuture::from(promise)
        .await
        .map_err(|_| LoadError::Transport("fetch rejected".to_string()))?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| LoadError::Transport("fetch: expected a Response".to_string()))?;

    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|_| LoadError::Transport("response body unavailable".to_string()))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| LoadError::Transport("response body read failed".to_string()))?;
    let raw = text_value
        .as_string()
        .ok_or_else(|| LoadError::Transport("response body is not text".to_string()))?;

    parse_document(&raw)
}
