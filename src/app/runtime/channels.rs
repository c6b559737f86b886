use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::SearchClient;
use crate::state::{QueryInput, SearchOutcome};

use super::workers::search::spawn_search_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Senders and receivers used between the event loop, the terminal input
///   thread, the tick worker and the search worker.
pub struct Channels {
    /// Terminal input from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving end of terminal input.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the reader thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Search requests consumed by the search worker.
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    /// Search outcomes tagged with the id of their request.
    pub outcome_rx: mpsc::UnboundedReceiver<SearchOutcome>,
    /// Animation/redraw ticks.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiving end of ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
}

impl Channels {
    /// What: Create all channels and start the search worker.
    ///
    /// Inputs:
    /// - `client`: HTTP client bound to the configured endpoint.
    ///
    /// Output:
    /// - `Channels` ready for the event loop.
    ///
    /// Details:
    /// - Must be called from within the Tokio runtime (spawns the search worker).
    pub fn new(client: SearchClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<SearchOutcome>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();

        spawn_search_worker(client, query_rx, outcome_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            query_tx,
            outcome_rx,
            tick_tx,
            tick_rx,
        }
    }
}
