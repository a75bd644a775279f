//! Clipboard copy with transient "copied" feedback.

use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::app::AppContext;
use crate::core::error::{ClipboardError, js_error_message};
use crate::utils::log;

/// Write `text` through the async Clipboard API.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::WriteRejected(js_error_message(&e)))
}

/// Copy `text` and mark `id` as copied on success.
///
/// The marker clears itself after the feedback window. Failures only reach
/// the console; the page state stays as it was.
pub fn copy_with_feedback(ctx: AppContext, id: &'static str, text: String) {
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => ctx.mark_copied(id),
            Err(e) => log::error(&e.to_string()),
        }
    });
}
