//! Timeouts and cancellation for loads.
//!
//! Loads themselves never time out. Wrap them here to bound how long a
//! caller waits or to let the caller give up explicitly. Giving up drops the
//! caller's future. Image and JSONP loads unregister their listeners with
//! it; an injected script keeps loading and still records its outcome. The
//! browser request itself is not aborted.

use std::future::Future;
use std::pin::pin;

use futures_util::future::{AbortHandle, Either, abortable, select};
use gloo_timers::future::TimeoutFuture;

use crate::core::error::LoadError;

/// Race `load` against a `ms` millisecond timer.
pub async fn with_timeout<F, T>(load: F, ms: u32) -> Result<T, LoadError>
where
    F: Future<Output = Result<T, LoadError>>,
{
    let load = pin!(load);
    let timer = pin!(TimeoutFuture::new(ms));

    match select(load, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            log::debug!("load timed out after {}ms", ms);
            Err(LoadError::TimedOut { ms })
        }
    }
}

/// Cancels the load returned alongside it by [`cancellable`].
#[derive(Clone, Debug)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    /// Resolve the load with [`LoadError::Cancelled`] at its next poll.
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Make `load` cancellable through the returned [`CancelHandle`].
///
/// Cancelling after the load settled has no effect on its result.
pub fn cancellable<F, T>(load: F) -> (impl Future<Output = Result<T, LoadError>>, CancelHandle)
where
    F: Future<Output = Result<T, LoadError>>,
{
    let (load, handle) = abortable(load);
    let load = async move { load.await.unwrap_or(Err(LoadError::Cancelled)) };
    (load, CancelHandle(handle))
}
