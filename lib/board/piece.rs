use crate::board::{Color, Kind, Label};
use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// The identifier the sensor board assigns to a physical piece, e.g. the UID of its RFID tag.
#[derive(
    Debug,
    Display,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Deref,
    From,
    Serialize,
    Deserialize,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[serde(transparent)]
pub struct PieceId(#[cfg_attr(test, strategy("[0-9A-F]{8}"))] String);

impl PieceId {
    /// Constructs [`PieceId`] from anything that converts into a [`String`].
    #[inline(always)]
    pub fn new(s: impl Into<String>) -> Self {
        PieceId(s.into())
    }

    /// The identifier as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PieceId {
    #[inline(always)]
    fn from(s: &str) -> Self {
        PieceId::new(s)
    }
}

impl Borrow<str> for PieceId {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A physical piece known to the session.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{} {}", color, kind)]
pub struct Piece {
    pub id: PieceId,
    pub kind: Kind,
    pub color: Color,
    /// Where the piece stands, or `None` while it is lifted off the board.
    pub position: Option<Label>,
}

impl Piece {
    /// Constructs a lifted [`Piece`].
    pub fn new(id: impl Into<PieceId>, kind: Kind, color: Color) -> Self {
        Piece {
            id: id.into(),
            kind,
            color,
            position: None,
        }
    }

    /// Constructs a lifted [`Piece`] of unknown [`Kind`] and [`Color`].
    pub fn unknown(id: impl Into<PieceId>) -> Self {
        Self::new(id, Kind::Unknown, Color::Unknown)
    }

    /// Returns this piece standing on the given square.
    pub fn at(self, position: impl Into<Label>) -> Self {
        Piece {
            position: Some(position.into()),
            ..self
        }
    }

    /// Whether the piece is currently lifted off the board.
    #[inline(always)]
    pub fn is_lifted(&self) -> bool {
        self.position.is_none()
    }

    /// A single character that identifies this piece on a text board.
    ///
    /// White and red pieces are printed in uppercase.
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White | Color::Red => self.kind.symbol().to_ascii_uppercase(),
            _ => self.kind.symbol(),
        }
    }
}
