use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Put the terminal into the mode the TUI needs.
///
/// Output:
/// - `Ok(())` once raw mode, the alternate screen and mouse capture are active.
///
/// # Errors
/// - Propagates any `crossterm` I/O failure.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    install_restore_hook();
    Ok(())
}

/// What: Undo [`setup_terminal`].
///
/// # Errors
/// - Propagates any `crossterm` I/O failure.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed, so a crash
/// does not leave the shell in raw mode on the alternate screen.
fn install_restore_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        previous(info);
    }));
}
