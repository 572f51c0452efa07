//! Board coordinates.

use derive_more::Display;

/// A position on the board, addressed by `(row, col)` with both in `0..3`.
///
/// Coordinates can only be built through [`Coord::new`] or
/// [`Coord::from_index`], so every `Coord` names a real cell.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord { row: 0, col: 0 },
        Coord { row: 0, col: 1 },
        Coord { row: 0, col: 2 },
        Coord { row: 1, col: 0 },
        Coord { row: 1, col: 1 },
        Coord { row: 1, col: 2 },
        Coord { row: 2, col: 0 },
        Coord { row: 2, col: 1 },
        Coord { row: 2, col: 2 },
    ];

    /// Creates a coordinate, or `None` if either index is off the board.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Some(Self {
                row: index / 3,
                col: index % 3,
            })
        } else {
            None
        }
    }

    /// Row index (0-2).
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub const fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub const fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Keypad number (1-9) shown next to empty cells.
    pub const fn keypad(self) -> usize {
        self.index() + 1
    }

    /// Parses a keypad digit `'1'..='9'`.
    pub fn from_keypad(c: char) -> Option<Self> {
        let digit = c.to_digit(10)? as usize;
        digit.checked_sub(1).and_then(Self::from_index)
    }

    /// Lies on the main diagonal (top-left to bottom-right).
    pub const fn on_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Lies on the anti-diagonal (top-right to bottom-left).
    pub const fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(Coord::new(2, 2).is_some());
        assert_eq!(Coord::new(3, 0), None);
        assert_eq!(Coord::new(0, 3), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Some(*coord));
        }
        assert_eq!(Coord::from_index(9), None);
    }

    #[test]
    fn test_keypad() {
        assert_eq!(Coord::from_keypad('1'), Coord::new(0, 0));
        assert_eq!(Coord::from_keypad('5'), Coord::new(1, 1));
        assert_eq!(Coord::from_keypad('9'), Coord::new(2, 2));
        assert_eq!(Coord::from_keypad('0'), None);
        assert_eq!(Coord::from_keypad('x'), None);
    }

    #[test]
    fn test_diagonals() {
        let center = Coord::new(1, 1).unwrap();
        assert!(center.on_diagonal() && center.on_anti_diagonal());
        let edge = Coord::new(0, 1).unwrap();
        assert!(!edge.on_diagonal() && !edge.on_anti_diagonal());
        assert!(Coord::new(2, 0).unwrap().on_anti_diagonal());
    }
}
