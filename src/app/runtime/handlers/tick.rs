use crate::state::AppState;

/// Advance the loading spinner; idle ticks only trigger a redraw.
pub fn handle_tick(app: &mut AppState) {
    if app.loading {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}
