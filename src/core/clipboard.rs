//! Copy an element's contents to the clipboard.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlDocument};

use crate::core::error::DomError;
use crate::utils::dom;

/// Select every child of `element` (default `document.body`) and run the
/// browser's `copy` command.
///
/// Returns what `execCommand("copy")` reports. Browsers outside a user
/// gesture usually report `false`. The temporary range is removed from the
/// selection afterwards; other ranges the user had selected are cleared.
pub fn copy_contents(element: Option<&Element>) -> Result<bool, DomError> {
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    let body;
    let target: &Element = match element {
        Some(element) => element,
        None => {
            body = dom::body()?;
            &body
        }
    };

    let range = document.create_range()?;
    range.set_start(target, 0)?;
    range.set_end(target, target.child_nodes().length())?;

    let selection = window
        .get_selection()?
        .ok_or_else(|| DomError::Js("selection not available".to_string()))?;
    selection.remove_all_ranges()?;
    selection.add_range(&range)?;

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or(DomError::WrongElement("HTMLDocument"))?
        .exec_command("copy")?;
    log::debug!("copy command handled: {}", copied);

    selection.remove_range(&range)?;
    Ok(copied)
}
