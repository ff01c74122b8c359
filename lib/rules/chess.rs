use crate::board::{Color, Delta, Kind, Piece, View};
use crate::rules::{Roster, Rules, Step};

/// A simplified game of chess for small boards.
///
/// There is no notion of check, castling, en passant or promotion, rooks don't look for blockers
/// and travel at most two squares, and knights move a single square diagonally.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Chess;

impl Chess {
    /// The row increment pawns of a [`Color`] advance by.
    ///
    /// White pawns advance towards the top row.
    #[inline(always)]
    pub fn forward(c: Color) -> i16 {
        match c {
            Color::White => -1,
            _ => 1,
        }
    }

    fn is_legal_pawn_step(piece: &Piece, step: &Step) -> bool {
        let Delta { rows, cols } = step.delta;
        if rows != Self::forward(piece.color) {
            return false;
        }

        match cols.abs() {
            0 => !step.is_capture(),
            1 => step.is_capture(),
            _ => false,
        }
    }
}

impl Rules for Chess {
    fn name(&self) -> &'static str {
        "Chess"
    }

    fn roster(&self) -> Roster {
        Roster::default()
            .with("C5B7BD01", Kind::Rook, Color::White)
            .with("F3C7B501", Kind::King, Color::White)
            .with("9B850802", Kind::Knight, Color::White)
            .with("7A74B701", Kind::Pawn, Color::White)
            .with("AB980802", Kind::Rook, Color::Black)
            .with("5BCA0E02", Kind::King, Color::Black)
            .with("1BFD0802", Kind::Knight, Color::Black)
            .with("CE890E02", Kind::Pawn, Color::Black)
    }

    fn is_legal(&self, piece: &Piece, from: &str, to: &str, board: &View) -> bool {
        let step = match Step::resolve(piece, from, to, board) {
            None => return false,
            Some(s) => s,
        };

        let d = step.delta;
        match piece.kind {
            Kind::Pawn => Self::is_legal_pawn_step(piece, &step),
            Kind::Rook => d.is_straight() && d.manhattan() <= 2,
            Kind::Knight => d.rows.abs() == 1 && d.cols.abs() == 1,
            Kind::King => d.chebyshev() <= 1,
            Kind::Man | Kind::Unknown => false,
        }
    }
}
