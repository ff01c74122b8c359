use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, convert::Infallible, str::FromStr};

/// A human-readable name for a square on the board, e.g. `a1`.
///
/// Labels are not validated on their own, since they usually come straight from the sensor board.
/// Whether a label names an actual square is up to the [`Topology`][`crate::board::Topology`].
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
pub struct Label(#[cfg_attr(test, strategy("[a-h][1-8]"))] String);

impl Label {
    /// Constructs [`Label`] from anything that converts into a [`String`].
    #[inline(always)]
    pub fn new(s: impl Into<String>) -> Self {
        Label(s.into())
    }

    /// The label as a string slice.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Label {
    #[inline(always)]
    fn from(s: &str) -> Self {
        Label::new(s)
    }
}

impl Borrow<str> for Label {
    #[inline(always)]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Label {
    #[inline(always)]
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Label {
    #[inline(always)]
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl FromStr for Label {
    type Err = Infallible;

    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Label::new(s))
    }
}
