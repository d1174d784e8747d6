use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::interaction::ClipboardError;

/// Writes `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let navigator = window().navigator();
    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .ok()
        .filter(|c| !c.is_undefined() && !c.is_null())
        .ok_or(ClipboardError::Unsupported)?
        .unchecked_into::<web_sys::Clipboard>();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
}
