//! Data types shared by the helpers.
//!
//! - [`InsertionPoint`] - parent element for injected scripts
//! - [`ToastOptions`] - toast notice parameters
//! - [`DataUrl`] - parsed `data:` URL produced by the image encoder

mod data_url;
mod insertion;
mod toast;

pub use data_url::{DataUrl, DataUrlError, has_data_prefix};
pub use insertion::InsertionPoint;
pub use toast::ToastOptions;
