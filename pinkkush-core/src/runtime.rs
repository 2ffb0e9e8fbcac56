//! The page loop.
//!
//! Single-threaded and cooperative: user actions, pointer events, and timer
//! fires all arrive as [`PageMessage`]s on one queue and are applied in
//! arrival order. Between messages nothing else touches state, so every
//! transition is atomic with respect to the loop. After each transition the
//! armed timers are reconciled against what the new state declares.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::clock::Clock;
use crate::hosts::ScrollSink;
use crate::messages::{Command, PageMessage};
use crate::page::{PageState, Timings};
use crate::sched::TimerSet;
use crate::subscriptions::subscriptions;

/// Cloneable sender hosts use to inject events into the loop.
#[derive(Debug, Clone)]
pub struct PageHandle {
    tx: UnboundedSender<PageMessage>,
}

impl PageHandle {
    /// Enqueue a message; silently dropped after the page is torn down.
    pub fn send(&self, message: impl Into<PageMessage>) {
        let _ = self.tx.send(message.into());
    }
}

/// Owns the page state, its message queue, and every armed timer.
///
/// Dropping the runtime aborts all timer tasks; nothing can fire into a
/// torn-down page.
pub struct PageRuntime {
    state: PageState,
    timers: TimerSet,
    scroll: Box<dyn ScrollSink>,
    tx: UnboundedSender<PageMessage>,
    rx: UnboundedReceiver<PageMessage>,
}

impl PageRuntime {
    /// Build the page and arm its always-on timers.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(
        timings: Timings,
        clock: Arc<dyn Clock>,
        scroll: Box<dyn ScrollSink>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let state = PageState::new(timings);
        let mut timers = TimerSet::new(clock, tx.clone());
        timers.sync(&subscriptions(&state));

        Self {
            state,
            timers,
            scroll,
            tx,
            rx,
        }
    }

    pub fn handle(&self) -> PageHandle {
        PageHandle {
            tx: self.tx.clone(),
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Number of currently armed timers.
    pub fn armed_timers(&self) -> usize {
        self.timers.armed_len()
    }

    /// Apply one message synchronously: reduce, run commands, reconcile
    /// timers.
    pub fn dispatch(&mut self, message: PageMessage) {
        log::trace!("[Page] {}", message.name());
        let update = crate::update::update(&mut self.state, message);

        for command in update.commands {
            match command {
                Command::ScrollTo(section) => self.scroll.scroll_to(section),
            }
        }

        self.timers.sync(&subscriptions(&self.state));
    }

    /// Apply everything already queued without waiting for more.
    pub fn drain(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message);
        }
    }

    /// Process messages until the future is dropped.
    ///
    /// The loop has no natural end while the page is mounted; embedders
    /// select against their own shutdown signal.
    pub async fn run(&mut self) {
        while let Some(message) = self.rx.recv().await {
            self.dispatch(message);
        }
    }
}

impl fmt::Debug for PageRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageRuntime")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .finish()
    }
}
