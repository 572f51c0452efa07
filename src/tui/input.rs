//! Cursor movement and mouse hit-testing.

use crossterm::event::KeyCode;
use ratatui::layout::{Position, Rect};
use tictactoe_board::Coord;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row(), cursor.col());
    let moved = match key {
        KeyCode::Up => Coord::new(row.wrapping_sub(1), col),
        KeyCode::Down => Coord::new(row + 1, col),
        KeyCode::Left => Coord::new(row, col.wrapping_sub(1)),
        KeyCode::Right => Coord::new(row, col + 1),
        _ => None,
    };
    moved.unwrap_or(cursor)
}

/// Finds the cell whose area contains the terminal position `(column, row)`.
pub fn cell_at(cells: &[[Rect; 3]; 3], column: u16, row: u16) -> Option<Coord> {
    let point = Position::new(column, row);
    Coord::ALL
        .into_iter()
        .find(|at| cells[at.row()][at.col()].contains(point))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_within_board() {
        assert_eq!(move_cursor(at(1, 1), KeyCode::Up), at(0, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Down), at(2, 1));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Left), at(1, 0));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Right), at(1, 2));
    }

    #[test]
    fn test_edges_do_not_wrap() {
        assert_eq!(move_cursor(at(0, 0), KeyCode::Up), at(0, 0));
        assert_eq!(move_cursor(at(0, 0), KeyCode::Left), at(0, 0));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Down), at(2, 2));
        assert_eq!(move_cursor(at(2, 2), KeyCode::Right), at(2, 2));
        assert_eq!(move_cursor(at(1, 1), KeyCode::Char('x')), at(1, 1));
    }

    #[test]
    fn test_hit_testing() {
        let cells: [[Rect; 3]; 3] = std::array::from_fn(|r| {
            std::array::from_fn(|c| Rect::new(c as u16 * 10, r as u16 * 5, 8, 4))
        });
        assert_eq!(cell_at(&cells, 0, 0), Some(at(0, 0)));
        assert_eq!(cell_at(&cells, 27, 13), Some(at(2, 2)));
        assert_eq!(cell_at(&cells, 8, 0), None);
        assert_eq!(cell_at(&cells, 15, 6), Some(at(1, 1)));
    }
}
