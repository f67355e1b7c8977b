//! JSONP loading.
//!
//! [`jsonp`] installs a callback under a caller-chosen global name and
//! returns at once; concurrent calls sharing a name overwrite each other's
//! callback. [`jsonp_request`] generates a fresh global per call, appends it
//! to the URL as the `callback` parameter, and resolves with the payload.

use std::cell::Cell;

use js_sys::{Function, Reflect};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlScriptElement, Window};

use super::deferred;
use crate::config::{JSONP_CALLBACK_PARAM, JSONP_TOKEN_PREFIX};
use crate::core::error::{DomError, LoadError};
use crate::models::InsertionPoint;
use crate::utils::dom::{self, ListenerGuard};
use crate::utils::append_query_param;

thread_local! {
    static NEXT_TOKEN: Cell<u64> = const { Cell::new(0) };
}

/// Global callback name for request number `seq`.
pub fn callback_token(seq: u64) -> String {
    format!("{}{}", JSONP_TOKEN_PREFIX, seq)
}

fn next_token() -> String {
    NEXT_TOKEN.with(|next| {
        let seq = next.get();
        next.set(seq + 1);
        callback_token(seq)
    })
}

/// Load `url` as an async script and route its payload to `callback`
/// through `window[global_name]`.
///
/// The URL must already name `global_name` as its callback. Script errors
/// are not reported, and the global and the tag stay in place afterwards.
pub fn jsonp(
    url: &str,
    global_name: &str,
    callback: impl FnMut(JsValue) + 'static,
) -> Result<(), DomError> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let script: HtmlScriptElement = dom::create(&document, "script")?;
    script.set_src(url);
    script.set_async(true);

    let handler = Closure::<dyn FnMut(JsValue)>::new(callback);
    Reflect::set(&window, &JsValue::from_str(global_name), handler.as_ref())?;
    // Owned by the global from here on; replaced, never freed.
    handler.forget();

    dom::parent(&document, InsertionPoint::Body)?.append_child(&script)?;
    Ok(())
}

/// Load `url` with a per-request callback and resolve with its payload.
///
/// Fails with [`LoadError::Failed`] when the script fails to load or runs
/// without calling the callback. The callback global and the script tag are
/// removed once the request settles or the future is dropped.
pub async fn jsonp_request(url: &str) -> Result<JsValue, LoadError> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let parent = dom::parent(&document, InsertionPoint::Body)?;

    let token = next_token();
    let (promise, resolve, reject) = deferred(url)?;

    let script: HtmlScriptElement = dom::create(&document, "script")?;
    script.set_async(true);

    let handler = Closure::<dyn FnMut(JsValue)>::new(move |data: JsValue| {
        let _ = resolve.call1(&JsValue::UNDEFINED, &data);
    });
    Reflect::set(&window, &JsValue::from_str(&token), handler.as_ref()).map_err(DomError::from)?;
    let _slot = CallbackSlot {
        window,
        token: token.clone(),
        script: script.clone(),
        _handler: handler,
    };

    // The callback runs while the script executes, before `load` fires, so
    // a `load` that reaches the promise means the callback was never called.
    let missing = format!("script loaded without calling {}", token);
    let _on_load = ListenerGuard::new(&script, "load", reject_with(&reject, missing))?;
    let _on_error = ListenerGuard::new(&script, "error", move |event| {
        let _ = reject.call1(&JsValue::UNDEFINED, &event);
    })?;

    script.set_src(&append_query_param(url, JSONP_CALLBACK_PARAM, &token));
    parent.append_child(&script).map_err(DomError::from)?;
    log::debug!("jsonp request {} via {}", url, token);

    JsFuture::from(promise)
        .await
        .map_err(|e| LoadError::failed(url, &e))
}

/// [`jsonp_request`] with the payload deserialized into `T`.
pub async fn jsonp_json<T: DeserializeOwned>(url: &str) -> Result<T, LoadError> {
    let payload = jsonp_request(url).await?;
    serde_wasm_bindgen::from_value(payload).map_err(|e| LoadError::Failed {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn reject_with(reject: &Function, reason: String) -> impl FnMut(web_sys::Event) + 'static {
    let reject = reject.clone();
    move |_| {
        let _ = reject.call1(&JsValue::UNDEFINED, &JsValue::from_str(&reason));
    }
}

/// A per-request callback global and its script tag.
struct CallbackSlot {
    window: Window,
    token: String,
    script: HtmlScriptElement,
    _handler: Closure<dyn FnMut(JsValue)>,
}

impl Drop for CallbackSlot {
    fn drop(&mut self) {
        let _ = Reflect::delete_property(&self.window, &JsValue::from_str(&self.token));
        self.script.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_token() {
        assert_eq!(callback_token(0), "__domkit_jsonp_0");
        assert_eq!(callback_token(42), "__domkit_jsonp_42");
    }

    #[test]
    fn test_tokens_are_unique() {
        let first = next_token();
        let second = next_token();
        assert_ne!(first, second);
        assert!(second.starts_with(JSONP_TOKEN_PREFIX));
    }
}
