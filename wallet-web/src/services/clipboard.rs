//! Clipboard access for the "copy address" action.

use wasm_bindgen_futures::JsFuture;

use crate::error::ClipboardError;

pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map_err(|e| ClipboardError::Js(e.as_string().unwrap_or_else(|| format!("{:?}", e))))?;
    Ok(())
}
