use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// Interval between spinner/redraw ticks.
const TICK_MS: u64 = 100;

/// What: Spawn the tick worker that drives spinner animation.
///
/// Inputs:
/// - `tick_tx`: Channel sender for ticks.
///
/// Details:
/// - Stops once the event loop drops the receiver.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `event_thread_cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is noticed promptly
/// - Exits when the flag is set or the receiver is gone
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    event_thread_cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !event_thread_cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_thread_cancelled.load(Ordering::Relaxed)
                            || event_tx.send(ev).is_err()
                        {
                            break;
                        }
                    }
                    Err(e) => tracing::debug!(error = %e, "terminal read failed"),
                },
                Ok(false) => {}
                Err(e) => tracing::debug!(error = %e, "terminal poll failed"),
            }
        }
        tracing::debug!("event thread exiting");
    });
}
