//! Depth-first backtracking navigator.
//!
//! This module contains the autonomous search that drives a [`MazeGrid`] through an exhaustive
//! depth-first traversal. After every forward step and every backtrack step the navigator notifies
//! a [`StepSink`], which renders the grid and blocks for the inter-step pacing delay; an
//! interrupted pause cancels the whole search.

use thiserror::Error;

use crate::{cell::CellKind, grid::MazeGrid};

/// Raised when the pacing pause between steps is interrupted.
///
/// The search unwinds immediately when this is returned from a sink; partial grid state from a
/// half-finished backtrack is left as-is since no further operations occur.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("maze search was interrupted")]
pub struct SearchInterrupted;

/// Terminal result of a completed search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The cursor reached the end point.
    ExitFound,
    /// Every cell reachable from the start was explored without reaching the end point.
    ExitNotFound,
}

impl SearchOutcome {
    /// Returns the literal outcome message reported to the user.
    pub const fn message(self) -> &'static str {
        match self {
            Self::ExitFound => "Exit was found!",
            Self::ExitNotFound => "Exit was not found.",
        }
    }
}

/// Collaborator notified after every state-changing grid operation.
///
/// The navigator invokes [`on_step`](Self::on_step) exactly once per forward or backtrack step,
/// in the exact order the steps were applied, and blocks until it returns. Implementations render
/// the grid and pause for the animation delay; returning an error aborts the search.
pub trait StepSink {
    /// Handles one grid mutation: re-render, then pause for the inter-step delay.
    ///
    /// # Errors
    ///
    /// - [`SearchInterrupted`] when the pause was interrupted and the search must stop
    fn on_step(&mut self, grid: &MazeGrid) -> Result<(), SearchInterrupted>;
}

/// A step sink that renders nothing and never pauses.
///
/// This sink backs headless solving and the navigator tests, where the search should run at full
/// speed with no display attached.
pub struct QuietSink;

impl StepSink for QuietSink {
    fn on_step(&mut self, _grid: &MazeGrid) -> Result<(), SearchInterrupted> {
        Ok(())
    }
}

/// Candidate movement directions in their fixed expansion order.
///
/// The order up, down, right, left is a tie-break rule; changing it changes every recorded trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    /// One cell towards smaller y.
    Up,
    /// One cell towards larger y.
    Down,
    /// One cell towards larger x.
    Right,
    /// One cell towards smaller x.
    Left,
}

impl Direction {
    /// All directions in expansion order.
    pub(crate) const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Returns the coordinates one step in this direction, or `None` on coordinate underflow.
    ///
    /// Overflow past the far grid edge is not checked here; callers compare the result against the
    /// grid dimensions.
    pub(crate) const fn step_from(self, x: usize, y: usize) -> Option<(usize, usize)> {
        match self {
            Self::Up => match y.checked_sub(1) {
                Some(new_y) => Some((x, new_y)),
                None => None,
            },
            Self::Down => Some((x, y + 1)),
            Self::Right => Some((x + 1, y)),
            Self::Left => match x.checked_sub(1) {
                Some(new_x) => Some((new_x, y)),
                None => None,
            },
        }
    }

    /// Returns the opposite direction, used to locate the fork behind a jump target.
    pub(crate) const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

/// Autonomous depth-first navigator over a maze grid.
///
/// This structure owns the transient search session state: a mutable borrow of the grid it drives,
/// the sink it notifies, and the ordered stack of visited coordinates used for jump detection and
/// backtrack replay. The state has no existence after the search completes.
pub struct Navigator<'session, S: StepSink> {
    /// The grid being navigated. The navigator is its sole mutator for the whole session.
    grid: &'session mut MazeGrid,
    /// The display collaborator notified after every step.
    sink: &'session mut S,
    /// Ordered stack of coordinates of the path taken, used to detect forks and backtrack.
    path_taken: Vec<(usize, usize)>,
}

impl<'session, S: StepSink> Navigator<'session, S> {
    /// Creates a navigator for one search session over the given grid.
    ///
    /// The navigator trusts the grid invariants established by a successful load and performs no
    /// validation of its own.
    pub fn new(grid: &'session mut MazeGrid, sink: &'session mut S) -> Self {
        Self {
            grid,
            sink,
            path_taken: Vec::new(),
        }
    }

    /// Runs the search to completion and reports the terminal outcome.
    ///
    /// # Errors
    ///
    /// - [`SearchInterrupted`] when the sink's pacing pause was interrupted
    pub fn run(mut self) -> Result<SearchOutcome, SearchInterrupted> {
        self.navigate()?;

        if self.grid.is_solved() {
            Ok(SearchOutcome::ExitFound)
        } else {
            Ok(SearchOutcome::ExitNotFound)
        }
    }

    /// Recursively explores every path reachable from the current cursor position.
    ///
    /// The frame's own coordinates are captured on entry and stay fixed across the recursive
    /// calls; after a branch unwinds, the remaining directions are tried from this same cell.
    fn navigate(&mut self) -> Result<(), SearchInterrupted> {
        let (x, y) = self.grid.cursor();

        for direction in Direction::ALL {
            if self.grid.is_solved() {
                return Ok(());
            }

            let Some((new_x, new_y)) = direction.step_from(x, y) else {
                continue;
            };
            if new_x >= self.grid.width() || new_y >= self.grid.height() {
                continue;
            }

            match self.grid.element_at(new_x, new_y) {
                Some(CellKind::Wall | CellKind::TraversedPath) | None => continue,
                Some(_) => {}
            }

            // Returning from an exhausted branch lands the next candidate far from the previous
            // recorded position; replay the backtrack before committing to the step.
            self.check_jump(new_x, new_y, direction)?;

            self.path_taken.push((new_x, new_y));
            self.grid.move_cursor_to(new_x, new_y);
            self.sink.on_step(self.grid)?;

            self.navigate()?;
        }

        Ok(())
    }

    /// Detects whether the next step jumps away from the recorded path and backtracks if so.
    ///
    /// The step is a normal forward step when the new coordinate is one of the four neighbors of
    /// the stack top (the previous position); anything else means the recursion has returned to an
    /// ancestor fork and the cursor must visibly backtrack there first.
    fn check_jump(
        &mut self,
        new_x: usize,
        new_y: usize,
        direction: Direction,
    ) -> Result<(), SearchInterrupted> {
        let Some(&(last_x, last_y)) = self.path_taken.last() else {
            return Ok(());
        };

        let adjacent = Direction::ALL
            .into_iter()
            .any(|neighbor| neighbor.step_from(last_x, last_y) == Some((new_x, new_y)));

        if adjacent {
            Ok(())
        } else {
            self.backtrack(new_x, new_y, direction)
        }
    }

    /// Replays the cursor backwards along the recorded path until it reaches the fork.
    ///
    /// The fork sits one step beyond the jump target, opposite to the direction currently being
    /// attempted. The stack top is popped first because the pre-jump position is stale; the replay
    /// then walks the stack from newest to oldest, stopping at the fork coordinate. When the fork
    /// is the unrecorded start cell the stack simply drains, so the replay can never underflow.
    fn backtrack(
        &mut self,
        x: usize,
        y: usize,
        direction: Direction,
    ) -> Result<(), SearchInterrupted> {
        let fork = direction.inverse().step_from(x, y);

        let _ = self.path_taken.pop();
        while let Some(&(back_x, back_y)) = self.path_taken.last() {
            self.grid.move_cursor_back(back_x, back_y);
            self.sink.on_step(self.grid)?;

            if Some((back_x, back_y)) == fork {
                break;
            }
            let _ = self.path_taken.pop();
        }

        Ok(())
    }
}
