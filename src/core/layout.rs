//! Responsive root font sizing.
//!
//! Scales `html { font-size }` with the viewport so `rem` units track a
//! fixed-width design mockup on narrow screens.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::config::{ROOT_FONT_SCALE, WIDE_ROOT_FONT_PX, WIDE_VIEWPORT_MIN};
use crate::core::error::DomError;
use crate::utils::dom;

/// Root font size in px for a viewport `client_width` wide.
///
/// Viewports at least [`WIDE_VIEWPORT_MIN`] wide get the fixed
/// [`WIDE_ROOT_FONT_PX`]; narrower ones scale with `client_width / design_width`.
pub fn root_font_size(client_width: i32, design_width: f64) -> f64 {
    if client_width >= WIDE_VIEWPORT_MIN {
        WIDE_ROOT_FONT_PX
    } else {
        f64::from(client_width) / design_width * ROOT_FONT_SCALE
    }
}

/// Set the root font size from the current viewport width.
///
/// Returns the applied size in px. A design width that yields a non-finite
/// size leaves the style untouched.
pub fn scale_root_font(design_width: f64) -> Result<f64, DomError> {
    let root = dom::document()?
        .document_element()
        .ok_or(DomError::NoDocument)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::WrongElement("html"))?;

    let size = root_font_size(root.client_width(), design_width);
    if !size.is_finite() {
        log::warn!("ignoring root font size {} for design width {}", size, design_width);
        return Ok(size);
    }

    root.style().set_property("font-size", &format!("{}px", size))?;
    Ok(size)
}
