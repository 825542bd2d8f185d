//! Keyboard handling for pacing the animation and leaving the session.
//!
//! This module wraps the Crossterm event queue exposed through Ratatui. During the solve the
//! inter-step pause doubles as the cancellation point: the delay is spent polling for key events
//! so that a quit key aborts the search instead of being swallowed.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::navigator::SearchInterrupted;

/// Blocks for the inter-step delay while watching for a quit key.
///
/// The full `delay` elapses unless a quit key arrives first. Unrelated events (other keys, resize,
/// mouse) are drained and the remaining delay keeps running. Event queue failures are treated as
/// an interruption as well, since the session has lost its input channel.
///
/// # Errors
///
/// - [`SearchInterrupted`] when `q` or `Esc` was pressed or the event queue failed
pub(crate) fn pause_between_steps(delay: Duration) -> Result<(), SearchInterrupted> {
    let deadline = Instant::now() + delay;

    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(());
        }
        let remaining = deadline.duration_since(now);

        match event::poll(remaining) {
            Ok(false) => return Ok(()),
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) if is_quit_key(key.code) => return Err(SearchInterrupted),
                Ok(_) => {}
                Err(_err) => return Err(SearchInterrupted),
            },
            Err(_err) => return Err(SearchInterrupted),
        }
    }
}

/// Blocks until any key is pressed.
///
/// Used on the final outcome screen so the result stays visible until the user acknowledges it.
///
/// # Errors
///
/// - [`std::io::Error`] from the underlying event queue
pub(crate) fn wait_for_any_key() -> Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

/// Returns whether the key code requests leaving the solve.
const fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
}
