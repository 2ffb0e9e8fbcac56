//! End-to-end page-loop flows on a virtual clock.
//!
//! These tests drive the real runtime (queue, reducers, timer
//! reconciliation) and advance time explicitly, so every timer-dependent
//! contract is checked deterministically.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use pinkkush_core::clock::VirtualClock;
use pinkkush_core::domains::{navigation, sommelier, strain};
use pinkkush_core::hosts::{NullScrollSink, ScrollSink};
use pinkkush_core::page::Timings;
use pinkkush_core::primitives::RevealPhase;
use pinkkush_core::runtime::PageRuntime;
use pinkkush_model::{SOMMELIER_INSIGHTS, STRAIN_LEGEND, SectionId};

/// Scroll sink that records every request for later assertions.
#[derive(Debug, Clone, Default)]
struct RecordingScrollSink {
    scrolled: Arc<Mutex<Vec<SectionId>>>,
}

impl ScrollSink for RecordingScrollSink {
    fn scroll_to(&mut self, section: SectionId) {
        self.scrolled.lock().push(section);
    }
}

/// Let spawned timer tasks catch up with clock movement.
async fn settle() {
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }
}

fn virtual_runtime(
    clock: &VirtualClock,
    scroll: Box<dyn ScrollSink>,
) -> PageRuntime {
    PageRuntime::new(Timings::default(), Arc::new(clock.clone()), scroll)
}

#[tokio::test]
async fn auto_advance_cycles_sections_and_scrolls() {
    let clock = VirtualClock::new();
    let sink = RecordingScrollSink::default();
    let scrolled = Arc::clone(&sink.scrolled);
    let mut runtime = virtual_runtime(&clock, Box::new(sink));
    let handle = runtime.handle();
    settle().await;

    handle.send(navigation::Message::ToggleAutoPlay);
    runtime.drain();
    settle().await;

    for _ in 0..6 {
        clock.advance(Duration::from_secs(8));
        settle().await;
        runtime.drain();
        settle().await;
    }

    // Six ticks from hero: growth, cure, pinkkush, legacy, hero, growth.
    assert_eq!(
        runtime.state().navigation.current_section(),
        SectionId::Growth
    );

    let scrolled = scrolled.lock();
    assert_eq!(scrolled.len(), 6);
    assert_eq!(scrolled.last(), Some(&SectionId::Growth));
}

#[tokio::test]
async fn toggle_on_then_off_before_any_tick_is_a_no_op() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    let handle = runtime.handle();
    settle().await;

    // Baseline: cure progress + service rotator.
    assert_eq!(clock.pending_sleeps(), 2);

    handle.send(navigation::Message::ToggleAutoPlay);
    runtime.drain();
    settle().await;
    assert_eq!(clock.pending_sleeps(), 3);

    handle.send(navigation::Message::ToggleAutoPlay);
    runtime.drain();
    settle().await;
    assert_eq!(clock.pending_sleeps(), 2);

    clock.advance(Duration::from_secs(8));
    settle().await;
    runtime.drain();

    assert_eq!(runtime.state().navigation.current_index(), 0);
}

#[tokio::test]
async fn cure_progress_matches_tick_count() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    settle().await;

    for _ in 0..7 {
        clock.advance(Duration::from_millis(100));
        settle().await;
    }
    runtime.drain();

    assert_eq!(runtime.state().cure.progress_percent(), 7);
}

#[tokio::test]
async fn legend_reveal_end_to_end() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    let handle = runtime.handle();
    settle().await;

    handle.send(strain::Message::Uncover);
    runtime.drain();
    settle().await;
    assert!(runtime.state().strain.searching());

    clock.advance(Duration::from_secs(3));
    settle().await;
    runtime.drain();

    let strain_state = &runtime.state().strain;
    assert_eq!(strain_state.phase(), RevealPhase::Revealed);
    assert_eq!(strain_state.revealed_legend(), Some(&STRAIN_LEGEND));
}

#[tokio::test]
async fn reset_before_the_timer_fires_never_reveals() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    let handle = runtime.handle();
    settle().await;
    let baseline = clock.pending_sleeps();

    handle.send(strain::Message::Uncover);
    runtime.drain();
    settle().await;
    assert_eq!(clock.pending_sleeps(), baseline + 1);

    handle.send(strain::Message::AskAgain);
    runtime.drain();
    settle().await;
    assert_eq!(clock.pending_sleeps(), baseline);

    clock.advance(Duration::from_secs(10));
    settle().await;
    runtime.drain();

    assert_eq!(runtime.state().strain.phase(), RevealPhase::Idle);
    assert_eq!(runtime.state().strain.revealed_legend(), None);
}

#[tokio::test]
async fn retrigger_supersedes_a_pending_insight() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    let handle = runtime.handle();
    settle().await;

    handle.send(sommelier::Message::RequestInsight(0));
    runtime.drain();
    settle().await;

    clock.advance(Duration::from_secs(2));
    settle().await;
    runtime.drain();

    handle.send(sommelier::Message::RequestInsight(1));
    runtime.drain();
    settle().await;

    // The first request's timer would have fired here; it was cancelled.
    clock.advance(Duration::from_secs(2));
    settle().await;
    runtime.drain();
    assert!(runtime.state().sommelier.generating());

    clock.advance(Duration::from_millis(1500));
    settle().await;
    runtime.drain();

    assert_eq!(
        runtime.state().sommelier.revealed_insight(),
        Some(&SOMMELIER_INSIGHTS[1])
    );
}

#[tokio::test]
async fn teardown_cancels_every_timer() {
    let clock = VirtualClock::new();
    let mut runtime = virtual_runtime(&clock, Box::new(NullScrollSink));
    let handle = runtime.handle();
    settle().await;

    handle.send(navigation::Message::ToggleAutoPlay);
    handle.send(strain::Message::Uncover);
    runtime.drain();
    settle().await;
    assert_eq!(clock.pending_sleeps(), 4);

    drop(runtime);
    settle().await;
    assert_eq!(clock.pending_sleeps(), 0);

    clock.advance(Duration::from_secs(60));
    settle().await;
    assert_eq!(clock.pending_sleeps(), 0);
}
