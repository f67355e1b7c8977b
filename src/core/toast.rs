//! Transient toast notices.

use gloo_timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::core::error::DomError;
use crate::models::{InsertionPoint, ToastOptions};
use crate::utils::dom;

/// Show a notice for `options.delay_ms`, then remove it.
///
/// Returns `Ok(false)` without touching the document when an element with
/// `options.id` already exists, `Ok(true)` once the notice is attached.
/// The message is set as inner HTML; escape untrusted text first.
pub fn show_toast(options: &ToastOptions) -> Result<bool, DomError> {
    let document = dom::document()?;
    if document.get_element_by_id(&options.id).is_some() {
        log::debug!("toast #{} already shown", options.id);
        return Ok(false);
    }

    let body = dom::parent(&document, InsertionPoint::Body)?;
    let toast: HtmlElement = dom::create(&document, "div")?;
    toast.set_attribute("class", &options.class_names)?;
    toast.set_attribute("id", &options.id)?;
    toast.set_inner_html(&options.message);
    body.append_child(&toast)?;

    Timeout::new(options.delay_ms, move || toast.remove()).forget();
    Ok(true)
}

/// Remove the notice with `id` before its timer fires.
///
/// Returns whether a notice was removed. The pending timer only ever removes
/// the element it created, so a newer notice with the same id is unaffected.
pub fn dismiss_toast(id: &str) -> Result<bool, DomError> {
    match dom::element_by_id(id)? {
        Some(toast) => {
            toast.remove();
            Ok(true)
        }
        None => Ok(false),
    }
}
