use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The side a [`Piece`][`crate::board::Piece`] plays for.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display(fmt = "White")]
    White,
    #[display(fmt = "Black")]
    Black,
    #[display(fmt = "Red")]
    Red,
    /// The side of a piece that was never provisioned.
    #[default]
    #[display(fmt = "unknown")]
    Unknown,
}

impl Color {
    /// Whether pieces of this color play against pieces of another color.
    ///
    /// Pieces of unknown color are only friendly to each other.
    #[inline(always)]
    pub fn opposes(self, other: Color) -> bool {
        self != other
    }
}
