use crate::board::Topology;
use derive_more::{Display, Error};
use std::{num::NonZeroU8, str::FromStr};

/// The supported board sizes.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Preset {
    /// A 4x4 board of large squares.
    #[default]
    #[display(fmt = "4x4")]
    Compact,
    /// A regular 8x8 board.
    #[display(fmt = "8x8")]
    Full,
}

impl Preset {
    /// The number of rows and columns.
    #[inline(always)]
    pub fn dimensions(self) -> (NonZeroU8, NonZeroU8) {
        let n = match self {
            Preset::Compact => NonZeroU8::MIN.saturating_add(3),
            Preset::Full => NonZeroU8::MIN.saturating_add(7),
        };

        (n, n)
    }

    /// The preferred size of a square in pixels.
    #[inline(always)]
    pub fn square_size(self) -> u16 {
        match self {
            Preset::Compact => 150,
            Preset::Full => 80,
        }
    }

    /// Constructs the [`Topology`] of this board.
    pub fn topology(self) -> Topology {
        let (rows, cols) = self.dimensions();
        Topology::new(rows, cols, self.square_size())
    }
}

/// The reason why parsing [`Preset`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unsupported board size, expected either `4x4` or `8x8`")]
pub struct ParsePresetError;

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4x4" => Ok(Preset::Compact),
            "8x8" => Ok(Preset::Full),
            _ => Err(ParsePresetError),
        }
    }
}
