//! Browser DOM convenience helpers for WebAssembly.
//!
//! Each helper wraps one or two browser APIs and shares nothing with the
//! others:
//!
//! | Helper | Effect |
//! |---|---|
//! | [`scale_root_font`] | scale `html { font-size }` to the viewport |
//! | [`copy_contents`] | select an element's children and run `copy` |
//! | [`trigger_download`] | click a detached `<a download>` |
//! | [`filter_xss`] | escape text for markup |
//! | [`image_to_data_url`] | load an image and encode it through a canvas |
//! | [`jsonp`], [`jsonp_request`] | load a JSONP endpoint |
//! | [`load_script`], [`ensure_script`] | inject a `<script>` once |
//! | [`show_toast`] | show a notice that removes itself |
//!
//! The same helpers are exported to JavaScript with defaulted arguments.
//!
//! ```ignore
//! use domkit::{InsertionPoint, ToastOptions, load_script, show_toast, with_timeout};
//!
//! let loaded = with_timeout(load_script("/vendor/chart.js", InsertionPoint::Head), 5_000).await?;
//! show_toast(&ToastOptions::new("Chart ready").delay_ms(2_000))?;
//! ```

mod bindings;
pub mod config;
mod core;
pub mod loader;
pub mod models;
pub mod utils;

pub use crate::core::error::{DomError, LoadError};
pub use crate::core::{
    copy_contents, dismiss_toast, dispatch_click, download_anchor, download_bytes, escape_html,
    filter_xss, root_font_size, sanitize_html, scale_root_font, show_toast, trigger_download,
    unescape_html,
};
pub use loader::{
    CancelHandle, cancellable, ensure_script, forget_script, image_to_bytes, image_to_data_url,
    jsonp, jsonp_json, jsonp_request, load_script, script_present, with_timeout,
};
pub use models::{DataUrl, InsertionPoint, ToastOptions};
