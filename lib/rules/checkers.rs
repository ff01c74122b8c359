use crate::board::{Color, Kind, Piece, View};
use crate::rules::{Roster, Rules, Step};

/// A simplified game of checkers.
///
/// Pieces move any distance along diagonals, men only forward and any other piece in either
/// direction.
/// There are no jumps, a piece captures by landing on an opposing piece.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Checkers;

impl Checkers {
    /// The row increment men of a [`Color`] advance by.
    ///
    /// Red men advance towards the top row.
    #[inline(always)]
    pub fn forward(c: Color) -> i16 {
        match c {
            Color::Red => -1,
            _ => 1,
        }
    }
}

impl Rules for Checkers {
    fn name(&self) -> &'static str {
        "Checkers"
    }

    fn roster(&self) -> Roster {
        Roster::default()
            .with("C5B7BD01", Kind::Man, Color::Red)
            .with("F3C7B501", Kind::Man, Color::Red)
            .with("9B850802", Kind::Man, Color::Red)
            .with("7A74B701", Kind::Man, Color::Red)
            .with("AB980802", Kind::Man, Color::Black)
            .with("5BCA0E02", Kind::Man, Color::Black)
            .with("1BFD0802", Kind::Man, Color::Black)
            .with("CE890E02", Kind::Man, Color::Black)
    }

    fn is_legal(&self, piece: &Piece, from: &str, to: &str, board: &View) -> bool {
        let d = match Step::resolve(piece, from, to, board) {
            None => return false,
            Some(s) => s.delta,
        };

        if d.rows == 0 || !d.is_diagonal() {
            return false;
        }

        match piece.kind {
            Kind::Man => d.rows * Self::forward(piece.color) > 0,
            _ => true,
        }
    }
}
