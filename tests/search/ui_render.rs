//! Rendering after real input events, using ratatui's `TestBackend`.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::mpsc;

use gitseek::events::handle_event;
use gitseek::state::AppState;
use gitseek::ui::ui;

/// Flatten the backend buffer into newline-separated rows.
fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buf = terminal.backend().buffer();
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
/// What: Typed text shows in the search box and Enter switches the label to "Searching...".
fn ui_render_typing_and_commit() {
    let mut app = AppState::default();
    let (tx, _rx) = mpsc::unbounded_channel();
    for ch in "serde".chars() {
        handle_event(
            CEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::empty())),
            &mut app,
            &tx,
        );
    }
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
    terminal.draw(|f| ui(f, &mut app)).expect("draw");
    let before = screen(&terminal);
    assert!(before.contains("> serde"));
    assert!(!before.contains("Searching..."));

    handle_event(
        CEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())),
        &mut app,
        &tx,
    );
    terminal.draw(|f| ui(f, &mut app)).expect("draw");
    let after = screen(&terminal);
    assert!(after.contains("Searching..."));
    assert!(after.contains("Loading repositories..."));
    assert!(app.search_rect.is_some());
}
