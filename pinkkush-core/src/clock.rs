//! Time sources for the page loop.
//!
//! Production code sleeps on the tokio timer wheel through [`SystemClock`];
//! tests drive a [`VirtualClock`] whose sleeps resolve only when the test
//! advances time, which makes every timer-dependent property deterministic.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, Waker};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Source of monotonic and wall-clock time plus timer sleeps.
pub trait Clock: Send + Sync + 'static {
    /// Get the current instant.
    fn now(&self) -> Instant;

    /// Get the current UTC datetime.
    fn utc_now(&self) -> DateTime<Utc>;

    /// Sleep for a duration (virtual clocks resolve this on `advance`).
    fn sleep(
        &self,
        duration: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

/// Production clock that uses real system time.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn utc_now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn sleep(
        &self,
        duration: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(tokio::time::sleep(duration))
    }
}

/// Virtual clock for deterministic testing.
///
/// Sleeps register themselves as pending timers and resolve when
/// [`VirtualClock::advance`] moves time past their deadline. A sleep that is
/// dropped before its deadline (a cancelled timer) deregisters itself, so
/// [`VirtualClock::pending_sleeps`] counts exactly the timers that are still
/// armed.
#[derive(Debug, Clone)]
pub struct VirtualClock {
    inner: Arc<Mutex<VirtualState>>,
}

#[derive(Debug)]
struct VirtualState {
    now: Instant,
    utc: DateTime<Utc>,
    next_id: u64,
    sleepers: Vec<Sleeper>,
}

#[derive(Debug)]
struct Sleeper {
    id: u64,
    deadline: Instant,
    waker: Option<Waker>,
}

impl VirtualClock {
    /// Create a virtual clock anchored at the real current time.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(VirtualState {
                now: Instant::now(),
                utc: Utc::now(),
                next_id: 0,
                sleepers: Vec::new(),
            })),
        }
    }

    /// Advance time by a duration and wake every sleep whose deadline has
    /// passed.
    pub fn advance(&self, duration: Duration) {
        let mut state = self.inner.lock();
        state.now += duration;
        state.utc = state.utc
            + chrono::Duration::from_std(duration)
                .unwrap_or_else(|_| chrono::Duration::zero());

        let now = state.now;
        state.sleepers.retain_mut(|sleeper| {
            if sleeper.deadline <= now {
                if let Some(waker) = sleeper.waker.take() {
                    waker.wake();
                }
                false
            } else {
                true
            }
        });
    }

    /// Advance time to the next pending deadline, returning how far the
    /// clock moved.
    pub fn advance_to_next_sleep(&self) -> Option<Duration> {
        let step = {
            let state = self.inner.lock();
            let next = state
                .sleepers
                .iter()
                .map(|sleeper| sleeper.deadline)
                .min()?;
            next.checked_duration_since(state.now)?
        };
        self.advance(step);
        Some(step)
    }

    /// Number of sleeps currently waiting on this clock.
    pub fn pending_sleeps(&self) -> usize {
        self.inner.lock().sleepers.len()
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for VirtualClock {
    fn now(&self) -> Instant {
        self.inner.lock().now
    }

    fn utc_now(&self) -> DateTime<Utc> {
        self.inner.lock().utc
    }

    fn sleep(
        &self,
        duration: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        Box::pin(VirtualSleep::new(self, duration))
    }
}

/// Future that completes when virtual time advances past its deadline.
struct VirtualSleep {
    inner: Arc<Mutex<VirtualState>>,
    deadline: Instant,
    id: u64,
    registered: bool,
}

impl VirtualSleep {
    fn new(clock: &VirtualClock, duration: Duration) -> Self {
        let (deadline, id) = {
            let mut state = clock.inner.lock();
            let id = state.next_id;
            state.next_id += 1;
            (state.now + duration, id)
        };
        Self {
            inner: Arc::clone(&clock.inner),
            deadline,
            id,
            registered: false,
        }
    }
}

impl Future for VirtualSleep {
    type Output = ();

    fn poll(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Self::Output> {
        let mut state = self.inner.lock();

        if state.now >= self.deadline {
            if self.registered {
                let id = self.id;
                state.sleepers.retain(|sleeper| sleeper.id != id);
            }
            drop(state);
            self.registered = false;
            return Poll::Ready(());
        }

        if self.registered {
            if let Some(sleeper) = state
                .sleepers
                .iter_mut()
                .find(|sleeper| sleeper.id == self.id)
            {
                sleeper.waker = Some(cx.waker().clone());
            }
        } else {
            let sleeper = Sleeper {
                id: self.id,
                deadline: self.deadline,
                waker: Some(cx.waker().clone()),
            };
            state.sleepers.push(sleeper);
            drop(state);
            self.registered = true;
        }

        Poll::Pending
    }
}

impl Drop for VirtualSleep {
    fn drop(&mut self) {
        if self.registered {
            let mut state = self.inner.lock();
            state.sleepers.retain(|sleeper| sleeper.id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn advance_moves_both_timelines() {
        let clock = VirtualClock::new();
        let start = clock.now();
        let utc_start = clock.utc_now();

        clock.advance(Duration::from_secs(10));

        assert_eq!(clock.now() - start, Duration::from_secs(10));
        assert_eq!(
            clock.utc_now() - utc_start,
            chrono::Duration::seconds(10)
        );
    }

    #[tokio::test]
    async fn sleep_resolves_only_after_advance() {
        let clock = VirtualClock::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let task_clock = clock.clone();
        let task_fired = Arc::clone(&fired);
        let task = tokio::spawn(async move {
            task_clock.sleep(Duration::from_secs(5)).await;
            task_fired.fetch_add(1, Ordering::SeqCst);
        });

        tokio::task::yield_now().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(clock.pending_sleeps(), 1);

        clock.advance(Duration::from_secs(5));
        task.await.unwrap();

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(clock.pending_sleeps(), 0);
    }

    #[tokio::test]
    async fn dropped_sleep_deregisters() {
        let clock = VirtualClock::new();

        let task_clock = clock.clone();
        let task = tokio::spawn(async move {
            task_clock.sleep(Duration::from_secs(30)).await;
        });

        tokio::task::yield_now().await;
        assert_eq!(clock.pending_sleeps(), 1);

        task.abort();
        let _ = task.await;

        assert_eq!(clock.pending_sleeps(), 0);
    }

    #[tokio::test]
    async fn advance_to_next_sleep_steps_exactly() {
        let clock = VirtualClock::new();

        let task_clock = clock.clone();
        tokio::spawn(async move {
            task_clock.sleep(Duration::from_secs(7)).await;
        });

        tokio::task::yield_now().await;
        assert_eq!(
            clock.advance_to_next_sleep(),
            Some(Duration::from_secs(7))
        );
        assert_eq!(clock.advance_to_next_sleep(), None);
    }
}
