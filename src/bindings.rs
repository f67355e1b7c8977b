//! JavaScript exports.
//!
//! Every argument is optional; omitted ones take the defaults from
//! [`crate::config`]. Loaders return Promises.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::Element;

use crate::config::{DEFAULT_IMAGE_MIME, DESIGN_WIDTH, JSONP_GLOBAL, LOG_LEVEL};
use crate::core::{copy_contents, filter_xss, scale_root_font, show_toast, trigger_download};
use crate::loader::{image_to_data_url, jsonp, jsonp_request, load_script};
use crate::models::{InsertionPoint, ToastOptions};
use crate::utils::logger;

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LOG_LEVEL);
}

#[wasm_bindgen(js_name = scaleRootFont)]
pub fn scale_root_font_js(design_width: Option<f64>) -> Result<f64, JsValue> {
    Ok(scale_root_font(design_width.unwrap_or(DESIGN_WIDTH))?)
}

#[wasm_bindgen(js_name = copyContents)]
pub fn copy_contents_js(element: Option<Element>) -> Result<bool, JsValue> {
    Ok(copy_contents(element.as_ref())?)
}

#[wasm_bindgen(js_name = triggerDownload)]
pub fn trigger_download_js(url: Option<String>, filename: Option<String>) -> Result<(), JsValue> {
    Ok(trigger_download(
        url.as_deref().unwrap_or_default(),
        filename.as_deref().unwrap_or_default(),
    )?)
}

#[wasm_bindgen(js_name = escapeHtml)]
pub fn escape_html_js(html: Option<String>) -> Result<String, JsValue> {
    Ok(filter_xss(html.as_deref().unwrap_or_default())?)
}

/// Resolves with a data URL, rejects with an `Error`.
#[wasm_bindgen(js_name = imageToDataUrl)]
pub fn image_to_data_url_js(url: Option<String>, mime: Option<String>) -> Promise {
    let url = url.unwrap_or_default();
    let mime = mime.unwrap_or_else(|| DEFAULT_IMAGE_MIME.to_string());
    future_to_promise(async move {
        let data_url = image_to_data_url(&url, &mime).await?;
        Ok(JsValue::from(data_url))
    })
}

/// Calls `callback` with the payload; never reports failure.
#[wasm_bindgen(js_name = loadJsonp)]
pub fn jsonp_js(
    url: Option<String>,
    global_name: Option<String>,
    callback: Option<Function>,
) -> Result<(), JsValue> {
    let global_name = global_name.unwrap_or_else(|| JSONP_GLOBAL.to_string());
    Ok(jsonp(
        url.as_deref().unwrap_or_default(),
        &global_name,
        move |data: JsValue| {
            if let Some(callback) = &callback {
                let _ = callback.call1(&JsValue::NULL, &data);
            }
        },
    )?)
}

/// Resolves with the payload, rejects on script failure.
#[wasm_bindgen(js_name = requestJsonp)]
pub fn jsonp_request_js(url: String) -> Promise {
    future_to_promise(async move { Ok(jsonp_request(&url).await?) })
}

/// Resolves `true`, rejects if the script fails or is already present, or
/// if `at` names no insertion point.
#[wasm_bindgen(js_name = loadScript)]
pub fn load_script_js(url: Option<String>, at: Option<String>) -> Promise {
    let url = url.unwrap_or_default();
    future_to_promise(async move {
        let at = parse_insertion_point(at)?;
        Ok(JsValue::from_bool(load_script(&url, at).await?))
    })
}

fn parse_insertion_point(at: Option<String>) -> Result<InsertionPoint, JsValue> {
    match at {
        Some(at) => at
            .parse::<InsertionPoint>()
            .map_err(|e| js_sys::Error::new(&e).into()),
        None => Ok(InsertionPoint::default()),
    }
}

/// Returns `false` when a notice with the id is already shown, `undefined`
/// otherwise.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast_js(
    message: Option<String>,
    delay_ms: Option<u32>,
    class_names: Option<String>,
    id: Option<String>,
) -> Result<JsValue, JsValue> {
    let defaults = ToastOptions::default();
    let options = ToastOptions {
        message: message.unwrap_or(defaults.message),
        delay_ms: delay_ms.unwrap_or(defaults.delay_ms),
        class_names: class_names.unwrap_or(defaults.class_names),
        id: id.unwrap_or(defaults.id),
    };
    let shown = show_toast(&options)?;
    Ok(if shown { JsValue::UNDEFINED } else { JsValue::FALSE })
}

/// Options-object form of `showToast`: `{ message, delayMs, classNames, id }`.
#[wasm_bindgen(js_name = showToastWith)]
pub fn show_toast_with_js(options: JsValue) -> Result<bool, JsValue> {
    let options: ToastOptions = if options.is_undefined() || options.is_null() {
        ToastOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)?
    };
    Ok(show_toast(&options)?)
}
