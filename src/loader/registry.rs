//! In-process registry of loads keyed by location.
//!
//! Entries are written synchronously, before the caller first yields, so on
//! a single-threaded host two requests for the same key can never both see
//! it as absent.

use std::collections::HashMap;

use futures_util::future::{FutureExt, LocalBoxFuture, Shared};

use crate::core::error::LoadError;

/// A load that any number of callers can await.
pub type SharedLoad<T> = Shared<LocalBoxFuture<'static, Result<T, LoadError>>>;

/// State of a registered key.
#[derive(Clone)]
pub enum LoadState<T: Clone> {
    /// Load started and not yet settled.
    Pending(SharedLoad<T>),
    /// Load completed successfully.
    Ready(T),
}

/// Location → load state.
///
/// Failed loads are removed so a later request starts afresh.
pub struct LoadRegistry<T: Clone> {
    entries: HashMap<String, LoadState<T>>,
}

impl<T: Clone + 'static> LoadRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// A future for the registered load, if any.
    ///
    /// Pending loads are shared; ready ones resolve immediately.
    pub fn join(&self, key: &str) -> Option<SharedLoad<T>> {
        match self.entries.get(key)? {
            LoadState::Pending(load) => Some(load.clone()),
            LoadState::Ready(value) => Some(ready(value.clone())),
        }
    }

    /// Register an in-flight load, replacing any previous entry.
    pub fn insert_pending(&mut self, key: impl Into<String>, load: SharedLoad<T>) {
        self.entries.insert(key.into(), LoadState::Pending(load));
    }

    /// Record the outcome of a load.
    pub fn settle(&mut self, key: &str, result: &Result<T, LoadError>) {
        match result {
            Ok(value) => {
                self.entries
                    .insert(key.to_string(), LoadState::Ready(value.clone()));
            }
            Err(_) => {
                self.entries.remove(key);
            }
        }
    }

    /// Drop the entry for `key`. Returns whether one existed.
    pub fn forget(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

impl<T: Clone + 'static> Default for LoadRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An already-settled shared load.
pub(crate) fn ready<T: Clone + 'static>(value: T) -> SharedLoad<T> {
    futures_util::future::ready(Ok(value)).boxed_local().shared()
}
