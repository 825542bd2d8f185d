//! Maze text-format parsing and validation.
//!
//! This module converts a textual maze description into a validated [`MazeGrid`]. The format is a
//! header line holding the odd `height` and `width`, followed by exactly `height` lines of exactly
//! `width` characters drawn from `#`, space, `.`, `S`, and `E`. All violations are detected
//! eagerly in a single pass and abort the load; no partially constructed grid is ever exposed.

use std::{fs, path::Path};

use thiserror::Error;

use crate::{cell::CellKind, grid::MazeGrid};

/// Errors raised while reading and validating a maze description.
///
/// Every variant is fatal for the current load attempt; there is no retry logic and the only
/// recourse is to restart with a different, valid input.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The maze source could not be opened or read.
    #[error("maze source `{path}` could not be read")]
    SourceNotFound {
        /// Path of the source that failed to open.
        path: String,
        /// Underlying io failure.
        #[source]
        source: std::io::Error,
    },
    /// The header tokens or the start/end multiplicity violated the format.
    #[error("malformed maze description: {0}")]
    MalformedFormat(String),
    /// The body line count or a line length disagreed with the declared dimensions.
    #[error("maze size mismatch: {0}")]
    SizeMismatch(String),
    /// A body character fell outside the valid set.
    #[error("invalid character `{found}` on line {line}")]
    InvalidCharacter {
        /// The offending character.
        found: char,
        /// One-based line number in the source where the character occurred.
        line: usize,
    },
}

/// Loads a maze description from an optional file path.
///
/// When `path` is `None` the loader still succeeds and returns the trivial 1x1 placeholder grid;
/// this escape hatch exists for running the program without an input file. Otherwise the file is
/// read in full and handed to [`parse`].
///
/// # Errors
///
/// - [`LoadError::SourceNotFound`] when the file cannot be read
/// - any parse error produced by [`parse`]
pub fn load(path: Option<&Path>) -> Result<MazeGrid, LoadError> {
    let Some(path) = path else {
        return Ok(MazeGrid::placeholder());
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) => {
            return Err(LoadError::SourceNotFound {
                path: path.display().to_string(),
                source,
            })
        }
    };

    parse(&contents)
}

/// Parses and validates a full maze description into a grid.
///
/// The returned grid satisfies all model invariants: positive odd dimensions, exactly one cursor
/// cell at the recorded start, exactly one end point cell at the recorded end, and every other
/// cell either a wall or a path.
///
/// # Errors
///
/// - [`LoadError::MalformedFormat`] for header or start/end multiplicity violations
/// - [`LoadError::SizeMismatch`] for line count or line length violations
/// - [`LoadError::InvalidCharacter`] for characters outside the valid set
pub fn parse(input: &str) -> Result<MazeGrid, LoadError> {
    let mut lines = input.lines();
    let header = lines
        .next()
        .ok_or_else(|| LoadError::MalformedFormat("missing header line".to_owned()))?;
    let (height, width) = parse_header(header)?;

    let mut cells = Vec::with_capacity(height);
    let mut start = None;
    let mut end = None;

    for (row_index, line) in lines.enumerate() {
        if row_index >= height {
            return Err(LoadError::SizeMismatch(format!(
                "body holds more than the declared {height} lines"
            )));
        }

        let mut row = Vec::with_capacity(width);
        for (col_index, symbol) in line.chars().enumerate() {
            row.push(body_cell(symbol, col_index, row_index, &mut start, &mut end)?);
        }

        if row.len() != width {
            return Err(LoadError::SizeMismatch(format!(
                "line {} holds {} characters instead of the declared {width}",
                row_index + 2,
                row.len()
            )));
        }

        cells.push(row);
    }

    if cells.len() != height {
        return Err(LoadError::SizeMismatch(format!(
            "body holds {} lines instead of the declared {height}",
            cells.len()
        )));
    }

    let start = start
        .ok_or_else(|| LoadError::MalformedFormat("no start cell `S` in maze body".to_owned()))?;
    let end = end
        .ok_or_else(|| LoadError::MalformedFormat("no end cell `E` in maze body".to_owned()))?;

    Ok(MazeGrid::new(cells, start, end))
}

/// Parses the header line into `(height, width)`.
///
/// The header must hold exactly two whitespace-separated tokens, both parseable as positive odd
/// integers. Height comes first.
fn parse_header(line: &str) -> Result<(usize, usize), LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let &[height, width] = tokens.as_slice() else {
        return Err(LoadError::MalformedFormat(format!(
            "header must hold exactly two dimensions, found {} tokens",
            tokens.len()
        )));
    };

    Ok((parse_dimension(height)?, parse_dimension(width)?))
}

/// Parses a single header token into an odd positive dimension.
fn parse_dimension(token: &str) -> Result<usize, LoadError> {
    let value: usize = token.parse().map_err(|_err| {
        LoadError::MalformedFormat(format!("dimension `{token}` is not a positive integer"))
    })?;

    // Zero is even, so the oddness check also rejects empty dimensions.
    if value % 2 == 0 {
        return Err(LoadError::MalformedFormat(format!(
            "dimension `{value}` must be odd"
        )));
    }

    Ok(value)
}

/// Maps a single body character onto its cell kind, recording start and end coordinates.
fn body_cell(
    symbol: char,
    col_index: usize,
    row_index: usize,
    start: &mut Option<(usize, usize)>,
    end: &mut Option<(usize, usize)>,
) -> Result<CellKind, LoadError> {
    match symbol {
        '#' => Ok(CellKind::Wall),
        ' ' | '.' => Ok(CellKind::Path),
        'S' => {
            if start.is_some() {
                return Err(LoadError::MalformedFormat(
                    "more than one start cell `S` in maze body".to_owned(),
                ));
            }
            *start = Some((col_index, row_index));
            Ok(CellKind::Cursor)
        }
        'E' => {
            if end.is_some() {
                return Err(LoadError::MalformedFormat(
                    "more than one end cell `E` in maze body".to_owned(),
                ));
            }
            *end = Some((col_index, row_index));
            Ok(CellKind::EndPoint)
        }
        other => Err(LoadError::InvalidCharacter {
            found: other,
            line: row_index + 2,
        }),
    }
}
