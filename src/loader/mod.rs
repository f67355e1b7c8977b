//! Asynchronous resource loading.
//!
//! Every loader follows the same shape: create an element, attach exactly one
//! success and one failure listener, point the element at the resource, and
//! await a single JS `Promise`. A promise settles at most once, so a load
//! yields exactly one [`LoadError`] or success value even if the browser were
//! to fire both events.
//!
//! - [`image_to_data_url`] - `<img>` + canvas encoding
//! - [`load_script`], [`ensure_script`] - `<script>` injection with a
//!   duplicate guard backed by an in-process registry
//! - [`jsonp`], [`jsonp_request`] - JSONP, global-slot and per-call-token forms
//! - [`with_timeout`], [`cancellable`] - bound or cancel any of the above

mod control;
mod image;
mod jsonp;
mod registry;
mod script;

pub use control::{CancelHandle, cancellable, with_timeout};
pub use image::{image_to_bytes, image_to_data_url};
pub use jsonp::{callback_token, jsonp, jsonp_json, jsonp_request};
pub use registry::{LoadRegistry, LoadState, SharedLoad};
pub use script::{ensure_script, forget_script, load_script, script_present};

use js_sys::{Function, Promise};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::EventTarget;

use crate::core::error::LoadError;
use crate::utils::dom::ListenerGuard;

/// A promise together with its resolve/reject functions.
fn deferred(url: &str) -> Result<(Promise, Function, Function), LoadError> {
    let mut settle = None;
    let promise = Promise::new(&mut |resolve, reject| settle = Some((resolve, reject)));
    let (resolve, reject) = settle.ok_or_else(|| LoadError::Failed {
        url: url.to_string(),
        reason: "promise executor did not run".to_string(),
    })?;
    Ok((promise, resolve, reject))
}

/// A load in flight on one element.
///
/// Dropping it before it settles removes both listeners; the element itself
/// is left alone.
pub(crate) struct PendingLoad {
    url: String,
    promise: Promise,
    _on_load: ListenerGuard,
    _on_error: ListenerGuard,
}

impl PendingLoad {
    /// Listen for `load` and `error` on `target`.
    ///
    /// Call before setting the element's source so a cached resource cannot
    /// finish loading unobserved.
    pub(crate) fn watch(target: &EventTarget, url: &str) -> Result<Self, LoadError> {
        let (promise, resolve, reject) = deferred(url)?;

        let on_load = ListenerGuard::new(target, "load", move |event| {
            let _ = resolve.call1(&JsValue::UNDEFINED, &event);
        })?;
        let on_error = ListenerGuard::new(target, "error", move |event| {
            let _ = reject.call1(&JsValue::UNDEFINED, &event);
        })?;

        Ok(Self {
            url: url.to_string(),
            promise,
            _on_load: on_load,
            _on_error: on_error,
        })
    }

    /// Wait for the first of `load` or `error`.
    pub(crate) async fn settle(self) -> Result<JsValue, LoadError> {
        let result = JsFuture::from(self.promise.clone()).await;
        match &result {
            Ok(_) => log::debug!("loaded {}", self.url),
            Err(_) => log::debug!("failed to load {}", self.url),
        }
        result.map_err(|e| LoadError::failed(&self.url, &e))
    }
}
