//! Terminal rendering of the maze grid.
//!
//! This module draws the maze through a Ratatui canvas, reading cell state and coordinates from
//! the grid's narrow read interface. The mapping from cell variant to presentation color lives
//! here, on the display side; the core model carries no presentation data.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{cell::CellKind, grid::MazeGrid};

/// Returns the display color for a cell variant.
///
/// Plain path cells map to the background color; everything else follows the classic element
/// palette: gray walls, cyan traversed trail, blue backtracked trail, green cursor, red end point.
const fn cell_color(kind: CellKind) -> Color {
    match kind {
        CellKind::Wall => Color::Gray,
        CellKind::Path => Color::Black,
        CellKind::TraversedPath => Color::Cyan,
        CellKind::BackTrackedPath => Color::Blue,
        CellKind::Cursor => Color::Green,
        CellKind::EndPoint => Color::Red,
    }
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the maze grid with a status line underneath.
///
/// The grid is centered in the frame and painted onto a canvas, one point per non-path cell,
/// grouped by cell kind so each group gets its display color. The status line is rendered as the
/// title of a top-bordered block at the bottom of the frame.
///
/// # Errors
///
/// This function may return errors from layout retrieval or coordinate conversion failures.
pub(crate) fn draw_solve(grid: &MazeGrid, status: &str, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze_rows = grid.height();
    let maze_columns = grid.width();

    let overall_layout =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).split(frame.area());
    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    // Center the maze in the content area
    let vertical_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_rows)?),
        Constraint::Min(1),
    ])
    .split(maze_content_area);
    let maze_area = vertical_layout
        .get(1)
        .copied()
        .ok_or_eyre("failed to get maze area from vertical layout")?;
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(u16::try_from(maze_columns)?),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Bucket the grid by cell kind; plain paths stay background and are never drawn.
    let mut wall_coords = Vec::new();
    let mut traversed_coords = Vec::new();
    let mut backtracked_coords = Vec::new();
    let mut end_coords = Vec::new();
    let mut cursor_coords = Vec::new();
    for row in 0..maze_rows {
        for col in 0..maze_columns {
            match grid.element_at(col, row) {
                Some(CellKind::Wall) => wall_coords.push((col, row)),
                Some(CellKind::TraversedPath) => traversed_coords.push((col, row)),
                Some(CellKind::BackTrackedPath) => backtracked_coords.push((col, row)),
                Some(CellKind::EndPoint) => end_coords.push((col, row)),
                Some(CellKind::Cursor) => cursor_coords.push((col, row)),
                Some(CellKind::Path) | None => {}
            }
        }
    }

    // Pre-compute screen coordinates to handle errors before the paint closure
    let wall_screen = maze_to_screen(&wall_coords, maze_columns, maze_rows)?;
    let traversed_screen = maze_to_screen(&traversed_coords, maze_columns, maze_rows)?;
    let backtracked_screen = maze_to_screen(&backtracked_coords, maze_columns, maze_rows)?;
    let end_screen = maze_to_screen(&end_coords, maze_columns, maze_rows)?;
    let cursor_screen = maze_to_screen(&cursor_coords, maze_columns, maze_rows)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen,
                color: cell_color(CellKind::Wall),
            });
            ctx.draw(&Points {
                coords: &traversed_screen,
                color: cell_color(CellKind::TraversedPath),
            });
            ctx.draw(&Points {
                coords: &backtracked_screen,
                color: cell_color(CellKind::BackTrackedPath),
            });
            ctx.draw(&Points {
                coords: &end_screen,
                color: cell_color(CellKind::EndPoint),
            });
            ctx.draw(&Points {
                coords: &cursor_screen,
                color: cell_color(CellKind::Cursor),
            });
        });

    frame.render_widget(maze, space);

    // Render the status as a block at the bottom with a top border
    let tooltip_block = Block::bordered()
        .title(status.to_owned())
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    frame.render_widget(tooltip_block, tooltip_area);

    Ok(())
}

/// Transforms maze coordinates to screen coordinates for canvas rendering.
///
/// This function converts maze coordinates (col, row) to screen coordinates (x, y) using the
/// transformation formulas: coordinate[i] = (n - 1) / 2 - i for rows (ascending order) and
/// coordinate[i] = i - (n - 1) / 2 for columns (descending order).
///
/// # Errors
///
/// This function may return errors from coordinate conversion operations.
pub(crate) fn maze_to_screen(
    coords: &[(usize, usize)],
    columns: usize,
    rows: usize,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(rows)?);
    let cols_n = f64::from(u16::try_from(columns)?);

    coords
        .iter()
        .map(|&(col, row)| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader;
    use ratatui::{backend::TestBackend, Terminal};

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    #[test]
    fn test_cell_color_palette() {
        assert_eq!(cell_color(CellKind::Wall), Color::Gray);
        assert_eq!(cell_color(CellKind::Path), Color::Black);
        assert_eq!(cell_color(CellKind::TraversedPath), Color::Cyan);
        assert_eq!(cell_color(CellKind::BackTrackedPath), Color::Blue);
        assert_eq!(cell_color(CellKind::Cursor), Color::Green);
        assert_eq!(cell_color(CellKind::EndPoint), Color::Red);
    }

    #[test]
    fn test_maze_to_screen_center_cell() {
        let screen = maze_to_screen(&[(1, 1)], 3, 3).expect("failed to transform coordinates");

        assert_eq!(screen, vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_maze_to_screen_corners() {
        let screen =
            maze_to_screen(&[(0, 0), (2, 2)], 3, 3).expect("failed to transform coordinates");

        assert_eq!(screen, vec![(-1.0, 1.0), (1.0, -1.0)]);
    }

    #[test]
    fn test_maze_to_screen_empty_input() {
        let screen = maze_to_screen(&[], 5, 5).expect("failed to transform empty coordinates");

        assert!(screen.is_empty());
    }

    #[test]
    fn test_draw_solve_renders_without_error() {
        let grid = loader::parse("3 3\n###\nS.E\n###").expect("failed to parse test maze");
        let mut terminal = create_test_terminal();

        let result = terminal.try_draw(|frame| {
            draw_solve(&grid, "searching", frame)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_draw_solve_renders_placeholder_grid() {
        let grid = loader::load(None).expect("failed to load placeholder grid");
        let mut terminal = create_test_terminal();

        let result = terminal.try_draw(|frame| {
            draw_solve(&grid, "Exit was found!", frame)
                .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err))
        });

        assert!(result.is_ok());
    }
}
