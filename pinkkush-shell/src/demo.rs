//! Scripted walkthrough of the page.
//!
//! Mounts the runtime on the system clock, replays a visitor's session
//! (browse stages, pick a metric, uncover the legend, ask the sommelier),
//! and dumps a snapshot when the demo window closes.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use pinkkush_core::clock::{Clock, SystemClock};
use pinkkush_core::domains::{
    cure, growth, hero, navigation, sommelier, strain,
};
use pinkkush_core::runtime::{PageHandle, PageRuntime};

use crate::config::PageConfig;
use crate::hosts::LogScrollSink;

/// Run the scripted session for the configured demo window.
pub async fn run(config: PageConfig) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut runtime = PageRuntime::new(
        config.timings.to_timings(),
        Arc::clone(&clock),
        Box::new(LogScrollSink),
    );

    let handle = runtime.handle();
    if config.auto_play {
        handle.send(navigation::Message::ToggleAutoPlay);
    }

    let script_clock = Arc::clone(&clock);
    let script = tokio::spawn(async move {
        visitor_session(handle, script_clock).await;
    });

    let window = Duration::from_millis(config.demo_duration_ms);
    log::info!("[Demo] page mounted for {window:?}");
    tokio::select! {
        _ = clock.sleep(window) => {}
        _ = runtime.run() => {}
    }
    script.abort();

    let snapshot = serde_json::to_string_pretty(&runtime.state().snapshot())?;
    println!("{snapshot}");

    // Dropping the runtime aborts every armed timer.
    log::info!("[Demo] page unmounted");
    Ok(())
}

/// The canned visitor: pokes every interactive surface once.
async fn visitor_session(handle: PageHandle, clock: Arc<dyn Clock>) {
    let beat = Duration::from_millis(600);

    clock.sleep(beat).await;
    handle.send(hero::Message::PointerMoved {
        x: 640.0,
        y: 360.0,
        viewport_width: 1280.0,
        viewport_height: 720.0,
    });

    clock.sleep(beat).await;
    handle.send(navigation::Message::GoTo(1));
    handle.send(growth::Message::NextStage);
    handle.send(growth::Message::NextStage);

    clock.sleep(beat).await;
    handle.send(navigation::Message::GoTo(2));
    handle.send(cure::Message::SelectMetric(1));

    clock.sleep(beat).await;
    handle.send(navigation::Message::GoTo(3));
    handle.send(strain::Message::Uncover);

    clock.sleep(beat).await;
    handle.send(navigation::Message::GoTo(4));
    handle.send(sommelier::Message::RequestInsight(2));
}
