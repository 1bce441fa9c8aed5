//! Background task spawning.
//!
//! Compile-time dispatch, like the transport split elsewhere in the crate:
//! - `native` feature → `tokio::spawn` (requires a running tokio runtime)
//! - `wasm` feature on `wasm32` → `wasm_bindgen_futures::spawn_local`
//!
//! Every task is wrapped in [`Abortable`] so its owner can cancel it through
//! the returned [`TaskHandle`], whatever the executor.

use futures_util::future::{AbortHandle, Abortable};
use std::future::Future;
use std::time::Duration;

/// `Send` on native targets, nothing on WASM where futures are single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// `Sync` on native targets, nothing on WASM.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSync: Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Sync> MaybeSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSync for T {}

/// Cancels a spawned task. Dropping the handle does NOT cancel it.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    abort: AbortHandle,
}

impl TaskHandle {
    pub fn abort(&self) {
        self.abort.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.abort.is_aborted()
    }
}

/// Spawn a background task on the tokio runtime.
#[cfg(all(feature = "native", not(target_arch = "wasm32")))]
pub fn spawn<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    tokio::spawn(Abortable::new(future, registration));
    TaskHandle { abort }
}

/// Spawn a background task on the browser event loop.
#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub fn spawn<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    let (abort, registration) = AbortHandle::new_pair();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = Abortable::new(future, registration).await;
    });
    TaskHandle { abort }
}

/// Executor-independent sleep.
pub async fn sleep(duration: Duration) {
    futures_timer::Delay::new(duration).await;
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_spawned_task_runs() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let _handle = spawn(async move {
            flag.store(true, Ordering::SeqCst);
        });
        sleep(Duration::from_millis(50)).await;
        assert!(ran.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_abort_stops_task_before_it_finishes() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = ran.clone();
        let handle = spawn(async move {
            sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
        });
        handle.abort();
        assert!(handle.is_aborted());
        sleep(Duration::from_millis(200)).await;
        assert!(!ran.load(Ordering::SeqCst));
    }
}
