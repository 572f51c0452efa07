//! The eight winning lines.

use crate::{Cell, Coord, Grid, Player};
use strum::{EnumIter, IntoEnumIterator};

/// One of the 8 winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// The row line containing `at`.
    pub fn row_of(at: Coord) -> Self {
        match at.row() {
            0 => Line::TopRow,
            1 => Line::MiddleRow,
            _ => Line::BottomRow,
        }
    }

    /// The column line containing `at`.
    pub fn column_of(at: Coord) -> Self {
        match at.col() {
            0 => Line::LeftColumn,
            1 => Line::CenterColumn,
            _ => Line::RightColumn,
        }
    }

    /// The three coordinates of this line.
    pub fn cells(self) -> [Coord; 3] {
        let (start, step) = match self {
            Line::TopRow => (0, 1),
            Line::MiddleRow => (3, 1),
            Line::BottomRow => (6, 1),
            Line::LeftColumn => (0, 3),
            Line::CenterColumn => (1, 3),
            Line::RightColumn => (2, 3),
            Line::Diagonal => (0, 4),
            Line::AntiDiagonal => (2, 2),
        };
        [0, 1, 2].map(|i| Coord::ALL[start + i * step])
    }

    /// Returns true if `at` is one of this line's cells.
    pub fn contains(self, at: Coord) -> bool {
        self.cells().contains(&at)
    }

    /// Lines passing through `at`: its row and column, plus whichever
    /// diagonals it lies on (two to four lines in total).
    pub fn through(at: Coord) -> impl Iterator<Item = Line> {
        [
            Some(Line::row_of(at)),
            Some(Line::column_of(at)),
            at.on_diagonal().then_some(Line::Diagonal),
            at.on_anti_diagonal().then_some(Line::AntiDiagonal),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the cell shared by all three positions, if it is a mark.
    pub fn owner(self, grid: &Grid) -> Option<Player> {
        let [a, b, c] = self.cells().map(|at| grid[at.row()][at.col()]);
        if a != Cell::Empty && a == b && b == c {
            a.player()
        } else {
            None
        }
    }

    /// Iterates all 8 lines.
    pub fn all() -> impl Iterator<Item = Line> {
        Line::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_distinct_lines() {
        assert_eq!(Line::all().count(), 8);
        for line in Line::all() {
            let [a, b, c] = line.cells();
            assert!(a != b && b != c && a != c, "{line:?} repeats a cell");
        }
    }

    #[test]
    fn test_anti_diagonal_cells() {
        let cells = Line::AntiDiagonal.cells();
        assert_eq!(
            cells,
            [Coord::new(0, 2), Coord::new(1, 1), Coord::new(2, 0)].map(Option::unwrap)
        );
    }

    #[test]
    fn test_through_matches_contains() {
        for at in Coord::ALL {
            let through: Vec<Line> = Line::through(at).collect();
            let containing: Vec<Line> = Line::all().filter(|l| l.contains(at)).collect();
            assert_eq!(through, containing, "lines through {at}");
        }
    }

    #[test]
    fn test_line_counts_by_position() {
        assert_eq!(Line::through(Coord::new(1, 1).unwrap()).count(), 4);
        assert_eq!(Line::through(Coord::new(0, 0).unwrap()).count(), 3);
        assert_eq!(Line::through(Coord::new(1, 2).unwrap()).count(), 2);
    }
}
