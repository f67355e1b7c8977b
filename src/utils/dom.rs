//! DOM and Web API access.
//!
//! Provides consistent access to browser globals with errors instead of
//! panics when the page has no window or document (workers, SSR, tests).

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::core::error::DomError;
use crate::models::InsertionPoint;

/// Get the browser window object.
#[inline]
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Get the window's document.
#[inline]
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Get `document.body`.
pub fn body() -> Result<HtmlElement, DomError> {
    document()?
        .body()
        .ok_or(DomError::MissingParent(InsertionPoint::Body))
}

/// Get the element new children are attached to for `at`.
pub fn parent(document: &Document, at: InsertionPoint) -> Result<HtmlElement, DomError> {
    let parent = match at {
        InsertionPoint::Head => document.head().map(|head| head.unchecked_into::<HtmlElement>()),
        InsertionPoint::Body => document.body(),
    };
    parent.ok_or(DomError::MissingParent(at))
}

/// Create an element and cast it to its concrete interface.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, DomError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement(tag))
}

/// Look up an element by id.
#[inline]
pub fn element_by_id(id: &str) -> Result<Option<Element>, DomError> {
    Ok(document()?.get_element_by_id(id))
}

// =============================================================================
// Event Listeners
// =============================================================================

/// An event listener that stays registered while this guard is alive.
///
/// Dropping the guard unregisters the listener before its closure is freed,
/// so the browser never calls into a dropped closure.
pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl ListenerGuard {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, DomError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
