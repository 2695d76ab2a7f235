use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot `window.setTimeout`. The closure is handed to JS and freed after it runs.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback = Closure::once_into_js(f);
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        .map_err(|e| anyhow::anyhow!(format!("setTimeout error: {:?}", e)))
}
