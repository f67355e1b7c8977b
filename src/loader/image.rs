//! Image to data URL conversion.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::PendingLoad;
use crate::core::error::{DomError, LoadError};
use crate::models::DataUrl;
use crate::utils::dom;

/// Load the image at `url` and encode it as a data URL of type `mime`.
///
/// The image is requested anonymously (`crossOrigin=""`) so cross-origin
/// images served with CORS headers can be read back; without them the canvas
/// is tainted and encoding fails. The image element is not attached to the
/// document.
pub async fn image_to_data_url(url: &str, mime: &str) -> Result<String, LoadError> {
    let document = dom::document()?;
    let image = HtmlImageElement::new().map_err(DomError::from)?;
    image.set_cross_origin(Some(""));

    let pending = PendingLoad::watch(&image, url)?;
    image.set_src(url);
    pending.settle().await?;

    encode(&document, &image, mime).map_err(|e| LoadError::failed(url, &e))
}

/// Like [`image_to_data_url`], returning the encoded bytes.
pub async fn image_to_bytes(url: &str, mime: &str) -> Result<Vec<u8>, LoadError> {
    let data_url = image_to_data_url(url, mime).await?;
    DataUrl::parse(&data_url)
        .and_then(|parsed| parsed.decode())
        .map_err(|e| LoadError::Failed {
            url: url.to_string(),
            reason: e.to_string(),
        })
}

fn encode(document: &Document, image: &HtmlImageElement, mime: &str) -> Result<String, JsValue> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(JsValue::from)?;
    canvas.set_width(image.natural_width());
    canvas.set_height(image.natural_height());

    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context not available"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;
    context.draw_image_with_html_image_element(image, 0.0, 0.0)?;

    canvas.to_data_url_with_type(mime)
}
