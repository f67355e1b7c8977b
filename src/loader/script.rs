//! Script injection with a duplicate guard.
//!
//! Two layers keep a script from loading twice:
//! 1. an in-process [`LoadRegistry`] of every script started through this
//!    module, updated before the call returns;
//! 2. a scan of the document's `<script>` elements, which also catches tags
//!    inserted by markup or other code.

use std::cell::RefCell;
use std::future::Future;

use futures_util::future::FutureExt;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

use super::PendingLoad;
use super::registry::{self, LoadRegistry, SharedLoad};
use crate::core::error::{DomError, LoadError};
use crate::models::InsertionPoint;
use crate::utils::{dom, src_matches};

thread_local! {
    static SCRIPTS: RefCell<LoadRegistry<()>> = RefCell::new(LoadRegistry::new());
}

/// Whether the document already has a `<script>` whose `src` matches `url`.
///
/// Matching is by equality or substring (see [`src_matches`]), so an empty
/// `url` matches any script.
pub fn script_present(document: &Document, url: &str) -> bool {
    let scripts = document.get_elements_by_tag_name("script");
    (0..scripts.length())
        .filter_map(|i| scripts.item(i))
        .filter_map(|element| element.dyn_into::<HtmlScriptElement>().ok())
        .any(|script| src_matches(&script.src(), url))
}

/// Inject `<script src=url>` under `at` and resolve `true` once it loads.
///
/// Fails immediately with [`LoadError::AlreadyPresent`] when the script was
/// already started through this module or a matching tag is in the
/// document. The check and the registration both happen before this
/// function returns, so back-to-back calls for the same `url` always see
/// each other. The tag is left in the document after loading and removed
/// if loading fails, whether or not the returned future is still awaited.
pub fn load_script(
    url: &str,
    at: InsertionPoint,
) -> impl Future<Output = Result<bool, LoadError>> + use<> {
    let started = start_exclusive(url, at);
    async move { started?.await.map(|()| true) }
}

/// Make sure the script at `url` is loaded, injecting it only if needed.
///
/// Joins a load already in flight instead of failing, and resolves `true`
/// straight away for scripts that are loaded or already tagged in the
/// document.
pub fn ensure_script(
    url: &str,
    at: InsertionPoint,
) -> impl Future<Output = Result<bool, LoadError>> + use<> {
    let started = join_or_start(url, at);
    async move { started?.await.map(|()| true) }
}

/// Remove `url` from the registry so it can be loaded again.
///
/// The `<script>` tag is not touched; remove it first or the document scan
/// still reports the script as present.
pub fn forget_script(url: &str) -> bool {
    SCRIPTS.with_borrow_mut(|scripts| scripts.forget(url))
}

fn start_exclusive(url: &str, at: InsertionPoint) -> Result<SharedLoad<()>, LoadError> {
    let document = dom::document()?;
    if SCRIPTS.with_borrow(|scripts| scripts.contains(url)) || script_present(&document, url) {
        log::warn!("<{}> already contains script {}", at, url);
        return Err(LoadError::AlreadyPresent {
            at,
            url: url.to_string(),
        });
    }
    start(&document, url, at)
}

fn join_or_start(url: &str, at: InsertionPoint) -> Result<SharedLoad<()>, LoadError> {
    if let Some(load) = SCRIPTS.with_borrow(|scripts| scripts.join(url)) {
        log::debug!("joining load of {}", url);
        return Ok(load);
    }

    let document = dom::document()?;
    if script_present(&document, url) {
        return Ok(registry::ready(()));
    }
    start(&document, url, at)
}

/// Inject the tag and register the load.
fn start(document: &Document, url: &str, at: InsertionPoint) -> Result<SharedLoad<()>, LoadError> {
    let parent = dom::parent(document, at)?;
    let script: HtmlScriptElement = dom::create(document, "script")?;

    let pending = PendingLoad::watch(&script, url)?;
    script.set_src(url);
    parent.append_child(&script).map_err(DomError::from)?;
    log::debug!("injected script {} into <{}>", url, at);

    let key = url.to_string();
    let load = async move {
        let result = pending.settle().await.map(drop);
        if result.is_err() {
            // a failed tag would otherwise satisfy the document scan
            script.remove();
        }
        SCRIPTS.with_borrow_mut(|scripts| scripts.settle(&key, &result));
        result
    }
    .boxed_local()
    .shared();

    SCRIPTS.with_borrow_mut(|scripts| scripts.insert_pending(url, load.clone()));
    // settles the registry even if every caller gives up
    wasm_bindgen_futures::spawn_local(load.clone().map(drop));
    Ok(load)
}
