//! Maze grid model and movement operations.
//!
//! This module contains the [`MazeGrid`] structure, which owns the two-dimensional arrangement of
//! [`CellKind`] values together with the cursor, start, and end coordinates. All mutation goes
//! through the bounds-checked movement operations defined here; the rendering side only ever reads
//! cell state and coordinates through the accessor methods.

use crate::cell::CellKind;

/// Rectangular maze owning its cells and the cursor position.
///
/// This structure is created once from validated loader output and afterwards mutated exclusively
/// through its own movement operations. A valid grid holds exactly one [`CellKind::Cursor`] cell
/// at the cursor coordinates, and held exactly one [`CellKind::EndPoint`] cell at load time; the
/// end cell may later be overwritten by the cursor, at which point the maze counts as solved.
#[derive(Debug)]
pub struct MazeGrid {
    /// Number of columns in the grid.
    ///
    /// This field holds the horizontal extent of the maze. A validly loaded maze always has an odd,
    /// positive width.
    width: usize,
    /// Number of rows in the grid.
    ///
    /// This field holds the vertical extent of the maze. A validly loaded maze always has an odd,
    /// positive height.
    height: usize,
    /// The cells of the maze indexed `[y][x]`.
    ///
    /// This field holds the actual grid contents. Every row has exactly `width` entries and there
    /// are exactly `height` rows.
    cells: Vec<Vec<CellKind>>,
    /// Current coordinates of the traveling agent as `(x, y)`.
    ///
    /// This field always points at the single cell holding [`CellKind::Cursor`].
    cursor: (usize, usize),
    /// Coordinates of the start cell, fixed at load time.
    start: (usize, usize),
    /// Coordinates of the end cell, fixed at load time.
    end: (usize, usize),
}

impl MazeGrid {
    /// Builds a grid from parsed cells and the recorded start and end coordinates.
    ///
    /// The loader is the only caller and guarantees the invariants: rectangular cell rows, a
    /// single cursor cell at `start`, and a single end point cell at `end`.
    pub(crate) fn new(cells: Vec<Vec<CellKind>>, start: (usize, usize), end: (usize, usize)) -> Self {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        Self {
            width,
            height,
            cells,
            cursor: start,
            start,
            end,
        }
    }

    /// Builds the trivial 1x1 grid used when no maze source is supplied.
    ///
    /// The single cell is a plain path and the cursor, start, and end all sit at the origin, so
    /// the maze reports itself solved immediately. This is a documented escape hatch for running
    /// without an input file, not a general null-tolerance policy.
    pub(crate) fn placeholder() -> Self {
        Self {
            width: 1,
            height: 1,
            cells: vec![vec![CellKind::Path]],
            cursor: (0, 0),
            start: (0, 0),
            end: (0, 0),
        }
    }

    /// Returns the cell kind at the given coordinates, or `None` when out of bounds.
    ///
    /// All internal callers stay within bounds; the checked lookup exists so that defensive tests
    /// and external readers get an observable error instead of a panic.
    pub fn element_at(&self, x: usize, y: usize) -> Option<CellKind> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Moves the cursor to the given coordinates if the destination is a legal forward move.
    ///
    /// Coordinates outside the half-open ranges `0..width` and `0..height` are silently ignored.
    /// A move is legal when the destination holds a path cell in any of its forms or the end
    /// point; walls and the cursor cell itself leave the grid unchanged. On a legal move the
    /// vacated cell becomes [`CellKind::TraversedPath`] and the destination becomes
    /// [`CellKind::Cursor`]. Traversed and backtracked cells count as paths here because the
    /// search may legitimately re-enter a cell it previously backtracked out of.
    pub fn move_cursor_to(&mut self, x: usize, y: usize) {
        if x >= self.width || y >= self.height {
            return;
        }

        match self.element_at(x, y) {
            Some(
                CellKind::Path
                | CellKind::TraversedPath
                | CellKind::BackTrackedPath
                | CellKind::EndPoint,
            ) => {
                let (cursor_x, cursor_y) = self.cursor;
                self.put(cursor_x, cursor_y, CellKind::TraversedPath);
                self.cursor = (x, y);
                self.put(x, y, CellKind::Cursor);
            }
            _ => {}
        }
    }

    /// Moves the cursor back to the given coordinates during a backtrack replay.
    ///
    /// The vacated cell becomes [`CellKind::BackTrackedPath`] and the destination becomes
    /// [`CellKind::Cursor`]. No legality check is performed: backtracking only ever revisits
    /// coordinates already known to be on the traveled path, and the distinct cell marking lets a
    /// display tell "went here and left" apart from "returned through here".
    pub fn move_cursor_back(&mut self, x: usize, y: usize) {
        let (cursor_x, cursor_y) = self.cursor;
        self.put(cursor_x, cursor_y, CellKind::BackTrackedPath);
        self.cursor = (x, y);
        self.put(x, y, CellKind::Cursor);
    }

    /// Returns whether the cursor has reached the end point.
    pub fn is_solved(&self) -> bool {
        self.cursor == self.end
    }

    /// Returns the number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the current cursor coordinates as `(x, y)`.
    pub const fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Returns the x coordinate of the cursor.
    pub const fn cursor_x(&self) -> usize {
        self.cursor.0
    }

    /// Returns the y coordinate of the cursor.
    pub const fn cursor_y(&self) -> usize {
        self.cursor.1
    }

    /// Returns the start coordinates as `(x, y)`.
    pub const fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Returns the x coordinate of the start cell.
    pub const fn start_x(&self) -> usize {
        self.start.0
    }

    /// Returns the y coordinate of the start cell.
    pub const fn start_y(&self) -> usize {
        self.start.1
    }

    /// Overwrites the cell at the given coordinates, ignoring out-of-bounds writes.
    fn put(&mut self, x: usize, y: usize, kind: CellKind) {
        if let Some(cell) = self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;

    /// Parses a small corridor maze used across the movement tests.
    fn corridor() -> MazeGrid {
        loader::parse("3 3\n###\nS.E\n###").expect("failed to parse corridor maze")
    }

    #[test]
    fn test_element_at_in_bounds() {
        let grid = corridor();

        assert_eq!(grid.element_at(0, 0), Some(CellKind::Wall));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::Cursor));
        assert_eq!(grid.element_at(1, 1), Some(CellKind::Path));
        assert_eq!(grid.element_at(2, 1), Some(CellKind::EndPoint));
    }

    #[test]
    fn test_element_at_out_of_bounds() {
        let grid = corridor();

        assert_eq!(grid.element_at(3, 1), None);
        assert_eq!(grid.element_at(1, 3), None);
        assert_eq!(grid.element_at(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_move_cursor_to_legal_step() {
        let mut grid = corridor();

        grid.move_cursor_to(1, 1);

        assert_eq!(grid.cursor(), (1, 1));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::TraversedPath));
        assert_eq!(grid.element_at(1, 1), Some(CellKind::Cursor));
    }

    #[test]
    fn test_move_cursor_to_wall_is_no_op() {
        let mut grid = corridor();

        grid.move_cursor_to(0, 0);

        assert_eq!(grid.cursor(), (0, 1));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::Cursor));
        assert_eq!(grid.element_at(0, 0), Some(CellKind::Wall));
    }

    #[test]
    fn test_move_cursor_to_out_of_bounds_is_no_op() {
        let mut grid = corridor();

        grid.move_cursor_to(3, 1);
        grid.move_cursor_to(1, 3);
        grid.move_cursor_to(usize::MAX, 1);

        assert_eq!(grid.cursor(), (0, 1));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::Cursor));
    }

    #[test]
    fn test_move_cursor_to_own_cell_is_no_op() {
        let mut grid = corridor();

        grid.move_cursor_to(0, 1);

        assert_eq!(grid.cursor(), (0, 1));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::Cursor));
    }

    #[test]
    fn test_move_cursor_to_end_point_solves() {
        let mut grid = corridor();

        grid.move_cursor_to(1, 1);
        assert!(!grid.is_solved());

        grid.move_cursor_to(2, 1);
        assert!(grid.is_solved());
        assert_eq!(grid.element_at(2, 1), Some(CellKind::Cursor));
        assert_eq!(grid.element_at(1, 1), Some(CellKind::TraversedPath));
    }

    #[test]
    fn test_move_cursor_back_marks_backtracked() {
        let mut grid = corridor();

        grid.move_cursor_to(1, 1);
        grid.move_cursor_back(0, 1);

        assert_eq!(grid.cursor(), (0, 1));
        assert_eq!(grid.element_at(1, 1), Some(CellKind::BackTrackedPath));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::Cursor));
    }

    #[test]
    fn test_move_cursor_to_reenters_backtracked_cell() {
        let mut grid = corridor();

        grid.move_cursor_to(1, 1);
        grid.move_cursor_back(0, 1);
        grid.move_cursor_to(1, 1);

        assert_eq!(grid.cursor(), (1, 1));
        assert_eq!(grid.element_at(1, 1), Some(CellKind::Cursor));
        assert_eq!(grid.element_at(0, 1), Some(CellKind::TraversedPath));
    }

    #[test]
    fn test_accessors() {
        let grid = corridor();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.cursor_x(), 0);
        assert_eq!(grid.cursor_y(), 1);
        assert_eq!(grid.start(), (0, 1));
        assert_eq!(grid.start_x(), 0);
        assert_eq!(grid.start_y(), 1);
    }

    #[test]
    fn test_placeholder_grid_is_solved() {
        let grid = MazeGrid::placeholder();

        assert_eq!(grid.width(), 1);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.element_at(0, 0), Some(CellKind::Path));
        assert!(grid.is_solved());
    }
}
