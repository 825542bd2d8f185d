//! Command line configuration for the solver binary.
//!
//! This module defines the explicit configuration the front end runs with. Everything that shapes
//! a session (which maze to load, how fast to animate, whether to attach a terminal interface at
//! all) arrives here as a parsed argument rather than through any global mutable state.

use std::path::PathBuf;

use clap::Parser;

/// Default inter-step delay in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 200;

/// Solves a maze with an animated depth-first backtracking search.
///
/// The maze file starts with a header line holding the odd height and width, followed by the maze
/// body drawn with `#` (wall), space or `.` (path), `S` (start), and `E` (end).
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Path to the maze description file; omit it to run on a trivial placeholder maze.
    pub maze_file: Option<PathBuf>,

    /// Delay in milliseconds between navigator steps.
    #[arg(long = "delay-ms", default_value_t = DEFAULT_STEP_DELAY_MS)]
    pub delay_ms: u64,

    /// Solve without the terminal interface and only print the outcome.
    #[arg(long)]
    pub headless: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["mazewalker"]).expect("failed to parse empty arguments");

        assert_eq!(cli.maze_file, None);
        assert_eq!(cli.delay_ms, DEFAULT_STEP_DELAY_MS);
        assert!(!cli.headless);
    }

    #[test]
    fn test_maze_file_and_flags() {
        let cli = Cli::try_parse_from([
            "mazewalker",
            "mazes/sample.maze",
            "--delay-ms",
            "50",
            "--headless",
        ])
        .expect("failed to parse full arguments");

        assert_eq!(cli.maze_file, Some(PathBuf::from("mazes/sample.maze")));
        assert_eq!(cli.delay_ms, 50);
        assert!(cli.headless);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        let result = Cli::try_parse_from(["mazewalker", "--gui"]);

        assert!(result.is_err());
    }
}
