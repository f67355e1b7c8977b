//! Toast notice options.

use serde::Deserialize;

use crate::config::toast;

/// Options for [`crate::show_toast`].
///
/// Deserializes from a partial JS object; missing fields fall back to the
/// defaults in [`crate::config::toast`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToastOptions {
    /// Inner HTML of the notice.
    pub message: String,
    /// Time on screen before removal, in milliseconds.
    pub delay_ms: u32,
    /// Value of the `class` attribute.
    pub class_names: String,
    /// Element id. Only one notice per id is shown at a time.
    pub id: String,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            message: toast::MESSAGE.to_string(),
            delay_ms: toast::DELAY_MS,
            class_names: toast::CLASS_NAMES.to_string(),
            id: toast::ID.to_string(),
        }
    }
}

impl ToastOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn delay_ms(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn class_names(mut self, class_names: impl Into<String>) -> Self {
        self.class_names = class_names.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
