//! Browser Glue
//!
//! Thin wrappers over `web_sys` for location, dialogs, timers, files and
//! window-level error events.

use js_sys::{Promise, Uint8Array};
use leptos::prelude::*;
use recipe_api::ImageUpload;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FileReader};

use crate::toast::Toasts;

/// Delay before leaving a page that can't be shown
pub const REDIRECT_DELAY_MS: u32 = 2_000;

pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Query string including the leading `?`
pub fn search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(href) {
            log::error!("Navigation to {} failed: {:?}", href, e);
        }
    }
}

pub fn navigate_after(href: String, delay_ms: u32) {
    gloo_timers::callback::Timeout::new(delay_ms, move || navigate(&href)).forget();
}

/// Native confirm dialog; a missing window counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Read a chosen file into an upload body
pub async fn read_image(file: &File) -> Result<ImageUpload, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(ImageUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

/// `data:` URL of a file, for previews
pub async fn read_data_url(file: &File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let promise = Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call1(&JsValue::NULL, &done.result().unwrap_or(JsValue::NULL));
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("could not read file"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });
    reader.read_as_data_url(file)?;
    JsFuture::from(promise)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("file reader returned no text"))
}

/// Report uncaught errors and rejected promises as toasts
pub fn install_global_error_handlers(toasts: Toasts) {
    window_event_listener_untyped("error", move |ev| {
        log::error!("Uncaught error: {:?}", ev);
        toasts.error("An unexpected error occurred");
    });
    window_event_listener_untyped("unhandledrejection", move |ev| {
        log::error!("Unhandled promise rejection: {:?}", ev);
        toasts.error("Connection or processing error");
    });
}
