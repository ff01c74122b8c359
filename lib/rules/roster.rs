use crate::board::{Color, Kind, Piece, PieceId};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{fmt, str::FromStr};

/// What a piece in a [`Roster`] is.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Identity {
    pub kind: Kind,
    pub color: Color,
}

/// The pieces a game starts with, keyed by the ids baked into the physical pieces.
///
/// In RON, kinds are spelled `Pawn`, `Rook`, `Knight`, `King`, `piece` and `Unknown`, and colors
/// `White`, `Black`, `Red` and `Unknown`.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(BTreeMap<PieceId, Identity>);

impl Roster {
    /// Returns this roster with one more piece.
    pub fn with(mut self, id: impl Into<PieceId>, kind: Kind, color: Color) -> Self {
        self.0.insert(id.into(), Identity { kind, color });
        self
    }

    /// The number of pieces.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the roster has no pieces.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The [`Identity`] of a piece, if it is part of the roster.
    #[inline(always)]
    pub fn get(&self, id: &str) -> Option<&Identity> {
        self.0.get(id)
    }

    /// Every piece in the roster, lifted off the board and ordered by id.
    pub fn pieces(&self) -> impl ExactSizeIterator<Item = Piece> + '_ {
        self.0
            .iter()
            .map(|(id, i)| Piece::new(id.clone(), i.kind, i.color))
    }
}

/// The reason why parsing [`Roster`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse roster")]
pub struct ParseRosterError(ron::de::SpannedError);

impl FromStr for Roster {
    type Err = ParseRosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// Prints the roster in [RON].
///
/// [RON]: https://github.com/ron-rs/ron
impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = ron::ser::PrettyConfig::default();
        let s = ron::ser::to_string_pretty(self, config).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
