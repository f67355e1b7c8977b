//! Browser tests. Run with `wasm-pack test --headless --firefox` (or chrome).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use domkit::models::has_data_prefix;
use domkit::utils::dom;
use domkit::{
    InsertionPoint, LoadError, ToastOptions, cancellable, copy_contents, dismiss_toast,
    dispatch_click, download_anchor, ensure_script, filter_xss, image_to_bytes,
    image_to_data_url, jsonp, jsonp_request, load_script, root_font_size, scale_root_font,
    show_toast, trigger_download, unescape_html, with_timeout,
};
use gloo_timers::future::TimeoutFuture;
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

// 1x1 transparent PNG
const PIXEL: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

fn count_by_id(id: &str) -> u32 {
    dom::document()
        .unwrap()
        .query_selector_all(&format!("[id='{}']", id))
        .unwrap()
        .length()
}

fn count_scripts(src: &str) -> usize {
    let scripts = dom::document().unwrap().get_elements_by_tag_name("script");
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter(|script| script.get_attribute("src").as_deref() == Some(src))
        .count()
}

// =============================================================================
// Toast
// =============================================================================

#[wasm_bindgen_test]
async fn toast_guard_and_auto_removal() {
    let options = ToastOptions::new("Saved").delay_ms(50).id("toast-guard");

    assert_eq!(show_toast(&options), Ok(true));
    assert_eq!(show_toast(&options), Ok(false));
    assert_eq!(count_by_id("toast-guard"), 1);

    let other = ToastOptions::new("Other").delay_ms(50).id("toast-other");
    assert_eq!(show_toast(&other), Ok(true));
    assert_eq!(count_by_id("toast-other"), 1);

    TimeoutFuture::new(200).await;
    assert_eq!(count_by_id("toast-guard"), 0);
    assert_eq!(count_by_id("toast-other"), 0);
}

#[wasm_bindgen_test]
fn toast_sets_class_and_markup() {
    let options = ToastOptions::new("<b>hi</b>")
        .class_names("notice big")
        .id("toast-markup");
    assert_eq!(show_toast(&options), Ok(true));

    let toast = dom::element_by_id("toast-markup").unwrap().unwrap();
    assert_eq!(toast.class_name(), "notice big");
    assert_eq!(toast.inner_html(), "<b>hi</b>");
    assert_eq!(dismiss_toast("toast-markup"), Ok(true));
    assert_eq!(dismiss_toast("toast-markup"), Ok(false));
}

#[wasm_bindgen_test]
fn toast_default_id_is_guarded() {
    let options = ToastOptions::default();
    assert_eq!(options.id, "toast");

    assert_eq!(show_toast(&options), Ok(true));
    assert_eq!(show_toast(&options), Ok(false));
    assert_eq!(count_by_id("toast"), 1);
    assert_eq!(dismiss_toast("toast"), Ok(true));
}

// =============================================================================
// Script loader
// =============================================================================

#[wasm_bindgen_test]
async fn script_second_call_hits_guard() {
    let url = "data:text/javascript,void%200//guard";
    let first = load_script(url, InsertionPoint::Head);
    let second = load_script(url, InsertionPoint::Head);

    assert!(matches!(
        second.await,
        Err(LoadError::AlreadyPresent { at: InsertionPoint::Head, .. })
    ));
    assert_eq!(first.await, Ok(true));
    assert_eq!(count_scripts(url), 1);

    // still present once loaded
    assert!(matches!(
        load_script(url, InsertionPoint::Body).await,
        Err(LoadError::AlreadyPresent { at: InsertionPoint::Body, .. })
    ));
}

#[wasm_bindgen_test]
async fn script_failure_is_reported_and_tag_removed() {
    let url = "/domkit-missing-script.js";
    let result = load_script(url, InsertionPoint::Body).await;
    assert!(matches!(result, Err(LoadError::Failed { .. })));
    assert_eq!(count_scripts(url), 0);
}

#[wasm_bindgen_test]
async fn script_abandoned_failure_can_retry() {
    let url = "/domkit-abandoned-script.js";
    let result = with_timeout(load_script(url, InsertionPoint::Head), 0).await;
    assert_eq!(result, Err(LoadError::TimedOut { ms: 0 }));

    // nobody awaits the load any more; wait for its error to land
    for _ in 0..50 {
        if count_scripts(url) == 0 {
            break;
        }
        TimeoutFuture::new(50).await;
    }
    assert_eq!(count_scripts(url), 0);

    let retry = load_script(url, InsertionPoint::Head).await;
    assert!(matches!(retry, Err(LoadError::Failed { .. })));
}

#[wasm_bindgen_test]
async fn ensure_script_coalesces() {
    let url = "data:text/javascript,void%200//ensure";
    let first = ensure_script(url, InsertionPoint::Head);
    let second = ensure_script(url, InsertionPoint::Head);

    assert_eq!(second.await, Ok(true));
    assert_eq!(first.await, Ok(true));
    assert_eq!(ensure_script(url, InsertionPoint::Head).await, Ok(true));
    assert_eq!(count_scripts(url), 1);
}

// =============================================================================
// Image loader
// =============================================================================

#[wasm_bindgen_test]
async fn image_encodes_requested_type() {
    let png = image_to_data_url(PIXEL, "image/png").await.unwrap();
    assert!(has_data_prefix(&png, "image/png"));

    let jpeg = image_to_data_url(PIXEL, "image/jpeg").await.unwrap();
    assert!(has_data_prefix(&jpeg, "image/jpeg"));

    let bytes = image_to_bytes(PIXEL, "image/png").await.unwrap();
    assert_eq!(&bytes[..4], b"\x89PNG");
}

#[wasm_bindgen_test]
async fn image_invalid_location_fails() {
    let result = image_to_data_url("data:image/png;base64,AAAA", "image/png").await;
    assert!(matches!(result, Err(LoadError::Failed { .. })));
}

// =============================================================================
// Timeout and cancellation
// =============================================================================

#[wasm_bindgen_test]
async fn timeout_bounds_pending_load() {
    let result = with_timeout(std::future::pending::<Result<(), LoadError>>(), 20).await;
    assert_eq!(result, Err(LoadError::TimedOut { ms: 20 }));

    let loaded = with_timeout(image_to_data_url(PIXEL, "image/png"), 5_000).await;
    assert!(loaded.is_ok());
}

#[wasm_bindgen_test]
async fn cancel_image_load() {
    let (load, handle) = cancellable(image_to_data_url(PIXEL, "image/png"));
    handle.cancel();
    assert_eq!(load.await, Err(LoadError::Cancelled));
}

// =============================================================================
// JSONP
// =============================================================================

#[wasm_bindgen_test]
async fn jsonp_global_slot_receives_payload() {
    let received = Rc::new(Cell::new(0.0));
    let sink = received.clone();
    jsonp(
        "data:text/javascript,window.domkitSlot(42)",
        "domkitSlot",
        move |data: JsValue| sink.set(data.as_f64().unwrap_or_default()),
    )
    .unwrap();

    TimeoutFuture::new(200).await;
    assert_eq!(received.get(), 42.0);
}

#[wasm_bindgen_test]
async fn jsonp_request_resolves_with_payload() {
    // Reads the generated callback name back from its own URL.
    let url = "data:text/javascript,var%20m=document.currentScript.src.match(/callback=([A-Za-z0-9_]+)/);window[m[1]]({ok:true});//";
    let payload = jsonp_request(url).await.unwrap();
    let ok = Reflect::get(&payload, &"ok".into()).unwrap();
    assert_eq!(ok.as_bool(), Some(true));
}

#[wasm_bindgen_test]
async fn jsonp_request_without_callback_fails() {
    let result = jsonp_request("data:text/javascript,void%200;//").await;
    assert!(matches!(result, Err(LoadError::Failed { .. })));

    let window = dom::window().unwrap();
    let keys = js_sys::Object::keys(&window);
    assert!(
        !keys
            .iter()
            .filter_map(|key| key.as_string())
            .any(|key| key.starts_with("__domkit_jsonp_"))
    );
}

// =============================================================================
// Download, layout, escaping, clipboard
// =============================================================================

#[wasm_bindgen_test]
fn download_dispatches_one_click() {
    let document = dom::document().unwrap();
    let anchor = download_anchor(&document, "/report.csv", "report.csv").unwrap();
    assert_eq!(anchor.get_attribute("href").as_deref(), Some("/report.csv"));
    assert_eq!(anchor.get_attribute("download").as_deref(), Some("report.csv"));

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        counter.set(counter.get() + 1);
        event.prevent_default();
    });
    anchor
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .unwrap();

    assert_eq!(dispatch_click(&anchor), Ok(false));
    assert_eq!(clicks.get(), 1);
    assert!(anchor.parent_node().is_none());
}

#[wasm_bindgen_test]
fn trigger_download_clicks_once() {
    let window = dom::window().unwrap();
    let anchor_class = Reflect::get(&window, &"HTMLAnchorElement".into()).unwrap();
    let prototype = Reflect::get(&anchor_class, &"prototype".into()).unwrap();

    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let spy = Closure::<dyn FnMut(Event) -> bool>::new(move |event: Event| {
        assert_eq!(event.type_(), "click");
        counter.set(counter.get() + 1);
        false
    });
    Reflect::set(&prototype, &"dispatchEvent".into(), spy.as_ref()).unwrap();

    let result = trigger_download("/report.csv", "report.csv");
    Reflect::delete_property(prototype.unchecked_ref(), &"dispatchEvent".into()).unwrap();

    assert_eq!(result, Ok(()));
    assert_eq!(clicks.get(), 1);
}

#[wasm_bindgen_test]
fn root_font_tracks_viewport() {
    let root: HtmlElement = dom::document()
        .unwrap()
        .document_element()
        .unwrap()
        .unchecked_into();
    let expected = root_font_size(root.client_width(), 750.0);

    assert_eq!(scale_root_font(750.0), Ok(expected));
    assert_eq!(
        root.style().get_property_value("font-size").unwrap(),
        format!("{}px", expected)
    );
}

#[wasm_bindgen_test]
fn filter_xss_escapes_markup() {
    let text = r#"<img src=x onerror="alert(1)"> & more"#;
    let escaped = filter_xss(text).unwrap();
    assert!(!escaped.contains('<'));
    assert_eq!(unescape_html(&escaped), text);
}

#[wasm_bindgen_test]
fn copy_leaves_no_selection() {
    let document = dom::document().unwrap();
    let block: HtmlElement = document.create_element("div").unwrap().unchecked_into();
    block.set_inner_text("copy me");
    document.body().unwrap().append_child(&block).unwrap();

    assert!(copy_contents(Some(&block)).is_ok());
    let selection = dom::window().unwrap().get_selection().unwrap().unwrap();
    assert_eq!(selection.range_count(), 0);
    block.remove();
}
