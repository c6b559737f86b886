use ratatui::{Terminal, backend::CrosstermBackend};

use crate::logic::commit_search;
use crate::sources::SearchClient;
use crate::state::AppState;

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod channels;
mod cleanup;
mod event_loop;
mod handlers;
mod init;
mod workers;

use background::{spawn_event_thread, spawn_tick_worker};
use channels::Channels;
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
pub use handlers::handle_search_outcome;
use init::{apply_settings_to_app_state, resolve_api_url};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Startup choices taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Term to commit as soon as the UI is up (`--search`).
    pub initial_search: Option<String>,
    /// Endpoint override (`--api-url`); wins over `settings.conf`.
    pub api_url: Option<String>,
}

/// What: Run the gitseek TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Command-line choices (initial search, endpoint override).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or
///   client construction errors.
///
/// Details:
/// - Settings are read once from `settings.conf`; the theme is read lazily on first draw.
/// - `GITSEEK_TEST_HEADLESS=1` skips the terminal and the input thread; the loop then
///   exits as soon as the initial search (if any) has resolved.
/// - Nothing is persisted on exit.
///
/// # Errors
/// - Fails when the terminal cannot be set up or the configured endpoint is invalid.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("GITSEEK_TEST_HEADLESS").ok().as_deref() == Some("1");

    let prefs = crate::theme::settings();
    let api_url = resolve_api_url(options.api_url.as_deref(), &prefs);
    let client = SearchClient::new(&api_url, &prefs.user_agent)?;
    tracing::info!(api_url = %client.api_url(), headless, "starting runtime");

    let mut app = AppState::default();
    apply_settings_to_app_state(&mut app, &prefs);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut channels = Channels::new(client);
    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );
    spawn_tick_worker(channels.tick_tx.clone());

    if let Some(term) = options.initial_search.as_deref() {
        app.input = term.to_string();
        app.search_caret = app.input.chars().count();
        commit_search(&mut app, term, &channels.query_tx);
    }

    run_event_loop(&mut terminal, &mut app, &mut channels, headless).await;

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
