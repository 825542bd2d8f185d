//! Terminal session driving the animated solve.
//!
//! This module owns the interactive front end: it renders the initial grid, hands the grid to the
//! navigator with a sink that redraws and paces after every step, and keeps the outcome on screen
//! until the user presses a key. The grid is exclusively owned here for the whole session; the
//! rendering side only ever reads it between notifications.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;

use crate::{
    events,
    grid::MazeGrid,
    navigator::{Navigator, SearchInterrupted, SearchOutcome, StepSink},
    ui,
};

/// Status line shown while the navigator is running.
const SOLVING_STATUS: &str = "auto-navigating / (q) abort";

/// Terminal session state for one animated solve.
///
/// This structure holds the grid being solved and the pacing delay. It is created from loader
/// output and a delay taken from the command line, and consumed by [`run`](Self::run).
pub struct App {
    /// The maze being solved. The navigator mutates it through the session.
    grid: MazeGrid,
    /// Fixed delay between navigator steps, pacing the animation for a human observer.
    delay: Duration,
}

impl App {
    /// Creates a session over a freshly loaded grid with the given inter-step delay.
    pub const fn new(grid: MazeGrid, delay: Duration) -> Self {
        Self { grid, delay }
    }

    /// Runs the animated solve to completion and reports the outcome.
    ///
    /// The initial grid is drawn before the first step so the observer sees the untouched maze.
    /// After the search finishes, the final grid stays on screen with the outcome in the status
    /// line until any key is pressed.
    ///
    /// # Errors
    ///
    /// - [`SearchInterrupted`] when the user aborted the solve
    /// - [`std::io::Error`] from terminal drawing or the event queue
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<SearchOutcome> {
        let _ = terminal.try_draw(|frame| {
            ui::draw_solve(&self.grid, SOLVING_STATUS, frame)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;

        let outcome = {
            let mut sink = TerminalSink {
                terminal,
                delay: self.delay,
            };
            Navigator::new(&mut self.grid, &mut sink).run()?
        };

        let status = format!("{} / press any key", outcome.message());
        let _ = terminal.try_draw(|frame| {
            ui::draw_solve(&self.grid, &status, frame)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
        })?;
        events::wait_for_any_key()?;

        Ok(outcome)
    }
}

/// Step sink redrawing the terminal and pacing the animation.
///
/// Each notification draws the current grid state and then blocks for the inter-step delay while
/// watching for a quit key. A failed draw aborts the search the same way an interrupted pause
/// does, since the session has lost its display.
struct TerminalSink<'term> {
    /// Terminal to redraw after every step.
    terminal: &'term mut DefaultTerminal,
    /// Fixed inter-step delay.
    delay: Duration,
}

impl StepSink for TerminalSink<'_> {
    fn on_step(&mut self, grid: &MazeGrid) -> Result<(), SearchInterrupted> {
        let drawn = self.terminal.try_draw(|frame| {
            ui::draw_solve(grid, SOLVING_STATUS, frame)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
        });
        match drawn {
            Ok(_frame) => events::pause_between_steps(self.delay),
            Err(_err) => Err(SearchInterrupted),
        }
    }
}
