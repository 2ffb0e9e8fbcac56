//! Armed-timer bookkeeping.
//!
//! Timers are never created imperatively. The page declares [`TimerSpec`]s
//! (see [`crate::subscriptions`]) and [`TimerSet::sync`] reconciles the
//! armed set: new keys are armed, undeclared keys are cancelled. Every
//! armed timer is a spawned task owned by a [`TimerHandle`] that aborts the
//! task on drop, so dropping the set (page teardown) cancels everything.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::clock::Clock;
use crate::messages::PageMessage;

/// Identity of a declared timer; equal keys mean the same timer.
///
/// Reveal timers carry their generation, so a re-trigger yields a new key
/// and the reconciler cancels the superseded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    SectionAutoAdvance,
    CureProgress,
    ServiceRotate,
    LegendSearch(u64),
    InsightGeneration(u64),
}

/// Whether a timer fires once or until undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Once,
    Repeating,
}

/// A timer the page wants armed while the spec stays declared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerSpec {
    pub key: TimerKey,
    pub kind: TimerKind,
    pub period: Duration,
    /// Message enqueued on every fire.
    pub message: PageMessage,
}

impl TimerSpec {
    pub fn once(key: TimerKey, period: Duration, message: PageMessage) -> Self {
        Self {
            key,
            kind: TimerKind::Once,
            period,
            message,
        }
    }

    pub fn repeating(
        key: TimerKey,
        period: Duration,
        message: PageMessage,
    ) -> Self {
        Self {
            key,
            kind: TimerKind::Repeating,
            period,
            message,
        }
    }
}

/// The armed timers, reconciled against declared specs after every update.
pub struct TimerSet {
    clock: Arc<dyn Clock>,
    tx: UnboundedSender<PageMessage>,
    armed: HashMap<TimerKey, TimerHandle>,
}

impl TimerSet {
    /// Must be created (and synced) inside a tokio runtime: arming spawns
    /// timer tasks.
    pub fn new(clock: Arc<dyn Clock>, tx: UnboundedSender<PageMessage>) -> Self {
        Self {
            clock,
            tx,
            armed: HashMap::new(),
        }
    }

    /// Reconcile armed timers against the declared specs.
    pub fn sync(&mut self, specs: &[TimerSpec]) {
        self.armed.retain(|key, _| {
            let declared = specs.iter().any(|spec| spec.key == *key);
            if !declared {
                log::trace!("[Timers] cancel {key:?}");
            }
            declared
        });

        for spec in specs {
            if !self.armed.contains_key(&spec.key) {
                log::trace!("[Timers] arm {:?} every {:?}", spec.key, spec.period);
                let handle = self.arm(*spec);
                self.armed.insert(spec.key, handle);
            }
        }
    }

    /// Number of currently armed timers.
    pub fn armed_len(&self) -> usize {
        self.armed.len()
    }

    fn arm(&self, spec: TimerSpec) -> TimerHandle {
        let clock = Arc::clone(&self.clock);
        let tx = self.tx.clone();

        let task = tokio::spawn(async move {
            loop {
                clock.sleep(spec.period).await;
                if tx.send(spec.message).is_err() {
                    break;
                }
                if spec.kind == TimerKind::Once {
                    break;
                }
            }
        });

        TimerHandle { task }
    }
}

impl fmt::Debug for TimerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerSet")
            .field("armed", &self.armed.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Owner of one spawned timer task; aborts the task when dropped.
#[derive(Debug)]
struct TimerHandle {
    task: tokio::task::JoinHandle<()>,
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualClock;
    use crate::domains::cure;
    use tokio::sync::mpsc;

    fn tick_spec(period_ms: u64) -> TimerSpec {
        TimerSpec::repeating(
            TimerKey::CureProgress,
            Duration::from_millis(period_ms),
            cure::Message::ProgressTick.into(),
        )
    }

    /// Let spawned timer tasks catch up with clock movement.
    async fn settle() {
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn repeating_timer_fires_once_per_period() {
        let clock = VirtualClock::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = TimerSet::new(Arc::new(clock.clone()), tx);

        timers.sync(&[tick_spec(100)]);
        settle().await;

        for _ in 0..3 {
            clock.advance(Duration::from_millis(100));
            settle().await;
        }

        let mut fired = 0;
        while rx.try_recv().is_ok() {
            fired += 1;
        }
        assert_eq!(fired, 3);
    }

    #[tokio::test]
    async fn undeclared_timer_is_cancelled() {
        let clock = VirtualClock::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = TimerSet::new(Arc::new(clock.clone()), tx);

        timers.sync(&[tick_spec(100)]);
        settle().await;
        assert_eq!(timers.armed_len(), 1);

        timers.sync(&[]);
        settle().await;
        assert_eq!(timers.armed_len(), 0);
        assert_eq!(clock.pending_sleeps(), 0);

        clock.advance(Duration::from_millis(500));
        settle().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn once_timer_fires_a_single_time() {
        let clock = VirtualClock::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timers = TimerSet::new(Arc::new(clock.clone()), tx);

        timers.sync(&[TimerSpec::once(
            TimerKey::LegendSearch(1),
            Duration::from_millis(3000),
            crate::domains::strain::Message::SearchComplete { generation: 1 }
                .into(),
        )]);
        settle().await;

        clock.advance(Duration::from_millis(3000));
        settle().await;
        clock.advance(Duration::from_millis(3000));
        settle().await;

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
