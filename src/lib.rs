//! Library crate for mazewalker, a terminal maze solver.
//!
//! The core of the crate is the maze data model ([`grid::MazeGrid`] over [`cell::CellKind`]), the
//! text-format loader ([`loader`]), and the autonomous depth-first backtracking navigator
//! ([`navigator`]). The remaining modules form the terminal front end: an animated Ratatui session
//! ([`App`]) that re-renders the grid after every navigator step and paces the animation through
//! cancellable delays.

pub mod app;
pub mod cell;
pub mod cli;
mod events;
pub mod grid;
pub mod loader;
pub mod navigator;
mod ui;

pub use app::App;
