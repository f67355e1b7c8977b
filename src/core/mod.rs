//! The DOM helpers.
//!
//! Each helper is independent and wraps one or two browser APIs:
//! - [`scale_root_font`] - responsive root font size
//! - [`copy_contents`] - copy an element's contents
//! - [`trigger_download`], [`download_bytes`] - synthetic download clicks
//! - [`filter_xss`], [`escape_html`], [`unescape_html`] - text escaping
//! - [`show_toast`] - transient notices

mod clipboard;
mod download;
pub mod error;
mod escape;
mod layout;
mod toast;

pub use clipboard::copy_contents;
pub use download::{dispatch_click, download_anchor, download_bytes, trigger_download};
pub use escape::{escape_html, filter_xss, sanitize_html, unescape_html};
pub use layout::{root_font_size, scale_root_font};
pub use toast::{dismiss_toast, show_toast};
