//! `Poller` — a scoped, fixed-interval refresh task.

use super::state::{Polled, RequestToken};
use crate::error::SdkError;
use crate::runtime::{self, MaybeSend, MaybeSync, TaskHandle};

use async_lock::RwLock;
use futures_timer::Delay;
use futures_util::future::{self, Either};
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Owns one background refresh loop and the state it feeds.
///
/// `start` issues a fetch immediately and then one per interval. Ticks are
/// not held back by slow requests, so requests can overlap; only the response
/// to the most recent request is applied. `stop` (or dropping the poller)
/// cancels the loop together with its in-flight requests.
pub struct Poller<T> {
    name: &'static str,
    interval: Duration,
    state: Arc<RwLock<Polled<T>>>,
    task: Option<TaskHandle>,
}

enum Step<T> {
    Tick,
    Done((RequestToken, Result<T, SdkError>)),
}

impl<T> Poller<T>
where
    T: MaybeSend + MaybeSync + 'static,
{
    pub fn new(name: &'static str, initial: T, interval: Duration) -> Self {
        Self {
            name,
            interval,
            state: Arc::new(RwLock::new(Polled::new(initial))),
            task: None,
        }
    }

    /// Start polling. Returns `false` (and does nothing) if already running,
    /// so a poller never has more than one active timer.
    pub fn start<F, Fut>(&mut self, fetch: F) -> bool
    where
        F: Fn() -> Fut + MaybeSend + 'static,
        Fut: Future<Output = Result<T, SdkError>> + MaybeSend + 'static,
    {
        if self.is_running() {
            return false;
        }

        tracing::debug!(poller = self.name, interval_ms = self.interval.as_millis() as u64, "Starting poller");
        let handle = runtime::spawn(run(self.name, self.interval, self.state.clone(), fetch));
        self.task = Some(handle);
        true
    }

    /// Stop polling. The last value stays available.
    pub fn stop(&mut self) {
        if let Some(handle) = self.task.take() {
            tracing::debug!(poller = self.name, "Stopping poller");
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|h| !h.is_aborted())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Shared handle to the polled state.
    pub fn state(&self) -> Arc<RwLock<Polled<T>>> {
        self.state.clone()
    }
}

impl<T: Clone> Poller<T> {
    /// Copy of the current value.
    pub async fn value(&self) -> T {
        self.state.read().await.value().clone()
    }

    /// Copy of the full state (value plus error/timestamp bookkeeping).
    pub async fn snapshot(&self) -> Polled<T> {
        self.state.read().await.clone()
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.task.take() {
            handle.abort();
        }
    }
}

async fn run<T, F, Fut>(
    name: &'static str,
    interval: Duration,
    state: Arc<RwLock<Polled<T>>>,
    fetch: F,
) where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, SdkError>>,
{
    let mut in_flight = FuturesUnordered::new();
    let mut tick = Delay::new(interval);
    let mut due = true;

    loop {
        if due {
            due = false;
            let token = state.write().await.begin();
            tracing::debug!(poller = name, token = token.value(), "Poll issued");
            let request = fetch();
            in_flight.push(async move { (token, request.await) });
        }

        let step = if in_flight.is_empty() {
            (&mut tick).await;
            Step::Tick
        } else {
            match future::select(&mut tick, in_flight.next()).await {
                Either::Left(((), _)) => Step::Tick,
                Either::Right((Some(done), _)) => Step::Done(done),
                Either::Right((None, _)) => continue,
            }
        };

        match step {
            Step::Tick => {
                tick.reset(interval);
                due = true;
            }
            Step::Done((token, result)) => {
                state.write().await.resolve(token, result);
            }
        }
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use crate::runtime::sleep;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_poller_fetches_immediately_and_repeats() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mut poller = Poller::new("test", 0u32, Duration::from_millis(50));
        poller.start(move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
        });

        sleep(Duration::from_millis(20)).await;
        assert_eq!(poller.value().await, 1);

        sleep(Duration::from_millis(150)).await;
        assert!(calls.load(Ordering::SeqCst) >= 3);
        assert!(poller.value().await >= 3);
    }

    #[tokio::test]
    async fn test_start_twice_is_noop() {
        let calls = Arc::new(AtomicU32::new(0));
        let mut poller = Poller::new("test", 0u32, Duration::from_secs(60));
        for _ in 0..2 {
            let counter = calls.clone();
            poller.start(move || {
                let counter = counter.clone();
                async move { Ok(counter.fetch_add(1, Ordering::SeqCst)) }
            });
        }
        sleep(Duration::from_millis(50)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(poller.is_running());
    }

    #[tokio::test]
    async fn test_stop_cancels_timer() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mut poller = Poller::new("test", 0u32, Duration::from_millis(30));
        poller.start(move || {
            let counter = counter.clone();
            async move { Ok(counter.fetch_add(1, Ordering::SeqCst)) }
        });
        sleep(Duration::from_millis(10)).await;
        poller.stop();
        assert!(!poller.is_running());
        let after_stop = calls.load(Ordering::SeqCst);
        sleep(Duration::from_millis(120)).await;
        assert_eq!(calls.load(Ordering::SeqCst), after_stop);
    }

    #[tokio::test]
    async fn test_failure_keeps_last_value() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mut poller = Poller::new("test", String::new(), Duration::from_millis(40));
        poller.start(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Ok("first".to_string())
                } else {
                    Err(SdkError::Other("backend down".into()))
                }
            }
        });

        sleep(Duration::from_millis(150)).await;
        let snap = poller.snapshot().await;
        assert_eq!(snap.value(), "first");
        assert_eq!(snap.last_error(), Some("backend down"));
    }

    #[tokio::test]
    async fn test_slow_response_superseded_by_newer_tick() {
        // First request takes longer than the interval; the second one is
        // issued meanwhile and resolves first. The slow one must be dropped.
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let mut poller = Poller::new("test", 0u32, Duration::from_millis(40));
        poller.start(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n == 1 {
                    sleep(Duration::from_millis(200)).await;
                }
                Ok(n)
            }
        });

        sleep(Duration::from_millis(60)).await;
        poller.stop();
        let snap = poller.snapshot().await;
        assert_eq!(*snap.value(), 2);
        assert_eq!(snap.applied_token(), snap.latest_token());
    }
}
