//! Cell variants making up a maze grid.
//!
//! This module contains the closed set of cell kinds a grid position can hold. The variants are
//! pure tags; presentation attributes for each kind are owned entirely by the rendering side of
//! the application and never leak into the core model.

/// Kind of occupant at a single maze grid position.
///
/// This enumeration describes what a grid cell currently holds. Cells start out as walls, plain
/// paths, the cursor, or the end point when a maze is loaded, and the movement operations on the
/// grid rewrite path cells into their traversed or backtracked forms as the navigator passes
/// through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// An obstacle the cursor can never occupy.
    Wall,
    /// A traversable path cell the cursor has not visited yet.
    Path,
    /// A path cell the cursor moved through and left behind on a forward step.
    TraversedPath,
    /// A path cell the cursor returned through during a backtrack replay.
    BackTrackedPath,
    /// The single cell currently occupied by the traveling agent.
    Cursor,
    /// The cell the navigator is searching for. There is exactly one until the cursor reaches it.
    EndPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_kind_equality() {
        assert_eq!(CellKind::Wall, CellKind::Wall);
        assert_ne!(CellKind::Path, CellKind::TraversedPath);
        assert_ne!(CellKind::TraversedPath, CellKind::BackTrackedPath);
        assert_ne!(CellKind::Cursor, CellKind::EndPoint);
    }

    #[test]
    fn test_cell_kind_copy() {
        let kind = CellKind::EndPoint;
        let copied = kind;

        assert_eq!(kind, copied);
    }

    #[test]
    fn test_cell_kind_debug() {
        assert_eq!(format!("{:?}", CellKind::BackTrackedPath), "BackTrackedPath");
        assert_eq!(format!("{:?}", CellKind::Cursor), "Cursor");
    }
}
