//! Utility modules for DOM access, logging, and URL handling.
//!
//! Provides:
//! - [`dom`] - window/document accessors and [`dom::ListenerGuard`]
//! - [`logger`] - `log` backend for the browser console
//! - [`src_matches`], [`append_query_param`] - URL helpers

pub mod dom;
pub mod logger;
mod url;

pub use url::{append_query_param, src_matches};
