//! Error types for the DOM helpers.
//!
//! - [`DomError`] - synchronous helpers that touch the document directly
//! - [`LoadError`] - asynchronous resource loads (image, script, JSONP)

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::models::InsertionPoint;

/// Errors raised by helpers that mutate the document synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("Document not available")]
    NoDocument,
    /// Document has no `<body>` (or `<head>`) to append to
    #[error("Document has no <{0}> element")]
    MissingParent(InsertionPoint),
    /// Element could not be cast to the expected interface
    #[error("Element is not a {0}")]
    WrongElement(&'static str),
    /// A DOM call threw
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Outcome of a failed resource load.
///
/// `Clone` so a coalesced load can hand the same failure to every waiter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The browser reported a failure loading the resource.
    #[error("Failed to load '{url}': {reason}")]
    Failed { url: String, reason: String },
    /// A script with a matching source is already in the document.
    #[error("<{at}> already contains script '{url}'")]
    AlreadyPresent { at: InsertionPoint, url: String },
    /// The load did not settle within the allotted time.
    #[error("Load timed out after {ms}ms")]
    TimedOut { ms: u32 },
    /// The caller cancelled the load.
    #[error("Load cancelled")]
    Cancelled,
    /// The document could not be prepared for the load.
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl LoadError {
    /// Wrap a platform error value for `url`.
    pub fn failed(url: &str, value: &JsValue) -> Self {
        Self::Failed {
            url: url.to_string(),
            reason: describe_js(value),
        }
    }
}

impl From<LoadError> for JsValue {
    fn from(err: LoadError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort human-readable description of a thrown or emitted JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Some(event) = value.dyn_ref::<web_sys::Event>() {
        return format!("{} event", event.type_());
    }
    format!("{:?}", value)
}
