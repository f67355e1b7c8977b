//! Library configuration.
//!
//! Centralizes the default parameter values used by every helper. Option
//! structs in [`crate::models`] take their `Default` values from here.

// =============================================================================
// Responsive Sizing
// =============================================================================

/// Design mockup width in CSS pixels.
pub const DESIGN_WIDTH: f64 = 750.0;

/// Viewport width at which scaling stops and the fixed size applies.
pub const WIDE_VIEWPORT_MIN: i32 = 600;

/// Root font size (px) applied to wide viewports.
pub const WIDE_ROOT_FONT_PX: f64 = 80.0;

/// Root font size (px) at a viewport exactly as wide as the design.
pub const ROOT_FONT_SCALE: f64 = 100.0;

// =============================================================================
// Image Encoding
// =============================================================================

/// Default output type for canvas encoding.
pub const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Scheme prefix of every data URL.
pub const DATA_URL_SCHEME: &str = "data:";

// =============================================================================
// Downloads
// =============================================================================

/// Delay before a Blob object URL handed to a download is revoked.
pub const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1000;

// =============================================================================
// JSONP
// =============================================================================

/// Global name used by [`crate::jsonp`] when none is given.
pub const JSONP_GLOBAL: &str = "jsonp";

/// Query parameter carrying the callback name for tokenized requests.
pub const JSONP_CALLBACK_PARAM: &str = "callback";

/// Prefix of per-request callback tokens.
pub const JSONP_TOKEN_PREFIX: &str = "__domkit_jsonp_";

// =============================================================================
// Toast
// =============================================================================

/// Toast notice defaults.
pub mod toast {
    /// Default message.
    pub const MESSAGE: &str = "Tips";
    /// Default time on screen in milliseconds.
    pub const DELAY_MS: u32 = 1000;
    /// Default class list.
    pub const CLASS_NAMES: &str = "";
    /// Default element id, doubling as the duplicate guard key.
    pub const ID: &str = "toast";
}

// =============================================================================
// Logging
// =============================================================================

/// Maximum level forwarded to the browser console.
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
