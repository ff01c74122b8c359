use derive_more::{Constructor, Display};
use std::ops::Sub;

/// A position on the board grid, counted from the top-left corner.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "({}, {})", row, col)]
pub struct Coordinate {
    pub row: i16,
    pub col: i16,
}

/// The displacement between two [`Coordinate`]s.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "({:+}, {:+})", rows, cols)]
pub struct Delta {
    pub rows: i16,
    pub cols: i16,
}

impl Delta {
    /// Whether the displacement is along a diagonal.
    #[inline(always)]
    pub fn is_diagonal(&self) -> bool {
        self.rows.abs() == self.cols.abs()
    }

    /// Whether the displacement stays on a single row or column.
    #[inline(always)]
    pub fn is_straight(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// The number of orthogonal steps covered.
    #[inline(always)]
    pub fn manhattan(&self) -> i16 {
        self.rows.abs() + self.cols.abs()
    }

    /// The number of king steps covered.
    #[inline(always)]
    pub fn chebyshev(&self) -> i16 {
        self.rows.abs().max(self.cols.abs())
    }
}

impl Sub for Coordinate {
    type Output = Delta;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Delta::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn subtracting_coordinates_returns_displacement(
        #[strategy(-64i16..64)] r: i16,
        #[strategy(-64i16..64)] c: i16,
        #[strategy(-64i16..64)] dr: i16,
        #[strategy(-64i16..64)] dc: i16,
    ) {
        let a = Coordinate::new(r, c);
        let b = Coordinate::new(r + dr, c + dc);
        assert_eq!(b - a, Delta::new(dr, dc));
    }

    #[proptest]
    fn zero_displacement_is_both_straight_and_diagonal(c: Coordinate) {
        let d = c - c;
        assert!(d.is_straight());
        assert!(d.is_diagonal());
        assert_eq!(d.manhattan(), 0);
    }

    #[test]
    fn chebyshev_distance_counts_king_steps() {
        assert_eq!(Delta::new(1, -1).chebyshev(), 1);
        assert_eq!(Delta::new(-2, 1).chebyshev(), 2);
        assert_eq!(Delta::new(0, 3).chebyshev(), 3);
    }
}
