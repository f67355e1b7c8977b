//! Download triggering via a synthetic anchor click.

use gloo_timers::callback::Timeout;
use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, MouseEvent, MouseEventInit, Url};

use crate::config::OBJECT_URL_REVOKE_DELAY_MS;
use crate::core::error::DomError;
use crate::utils::dom;

/// Build the detached `<a href download>` used to start a download.
pub fn download_anchor(
    document: &Document,
    url: &str,
    filename: &str,
) -> Result<HtmlAnchorElement, DomError> {
    let anchor: HtmlAnchorElement = dom::create(document, "a")?;
    anchor.set_attribute("href", url)?;
    anchor.set_attribute("download", filename)?;
    Ok(anchor)
}

/// Dispatch one bubbling, cancelable `click` at `anchor`.
///
/// Returns `false` if a listener cancelled the event.
pub fn dispatch_click(anchor: &HtmlAnchorElement) -> Result<bool, DomError> {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init)?;
    Ok(anchor.dispatch_event(&event)?)
}

/// Ask the browser to download `url` as `filename`.
///
/// The anchor is never attached to the document. If the browser blocks the
/// download nothing is reported.
pub fn trigger_download(url: &str, filename: &str) -> Result<(), DomError> {
    let document = dom::document()?;
    let anchor = download_anchor(&document, url, filename)?;
    dispatch_click(&anchor)?;
    Ok(())
}

/// Download in-memory bytes as `filename` through a temporary object URL.
pub fn download_bytes(bytes: &[u8], mime: &str, filename: &str) -> Result<(), DomError> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let result = trigger_download(&url, filename);

    // Revoking synchronously can cancel the download in some browsers.
    Timeout::new(OBJECT_URL_REVOKE_DELAY_MS, move || {
        let _ = Url::revoke_object_url(&url);
    })
    .forget();
    result
}
