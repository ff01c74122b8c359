use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The type of a [`Piece`][`crate::board::Piece`], as defined by the game being played.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Kind {
    #[display(fmt = "pawn")]
    Pawn,
    #[display(fmt = "rook")]
    Rook,
    #[display(fmt = "knight")]
    Knight,
    #[display(fmt = "king")]
    King,
    /// A regular, non-promoted checkers piece.
    #[display(fmt = "piece")]
    #[serde(rename = "piece")]
    Man,
    /// The kind of a piece that was never provisioned.
    #[default]
    #[display(fmt = "unknown")]
    Unknown,
}

impl Kind {
    /// A single letter that identifies this kind on a text board.
    #[inline(always)]
    pub fn symbol(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Rook => 'r',
            Kind::Knight => 'n',
            Kind::King => 'k',
            Kind::Man => 'm',
            Kind::Unknown => '?',
        }
    }
}
