use crate::board::{Label, PieceId, Topology};
use std::collections::HashMap;

/// Which piece occupies each square of the board.
///
/// This is a plain lookup table, it knows nothing about legality and keeping it consistent with
/// the [`Registry`][`crate::board::Registry`] is up to its owner.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BoardState {
    slots: HashMap<Label, Option<PieceId>>,
}

impl BoardState {
    /// Constructs an empty [`BoardState`] with one slot per square of the [`Topology`].
    pub fn new(topology: &Topology) -> Self {
        BoardState {
            slots: topology.labels().map(|l| (l.clone(), None)).collect(),
        }
    }

    /// The id of the piece on a square, if any.
    #[inline(always)]
    pub fn occupant_at(&self, position: &str) -> Option<&PieceId> {
        self.slots.get(position).and_then(Option::as_ref)
    }

    /// Puts a piece on a square, returning the id of the piece it displaced, if any.
    ///
    /// Squares unknown to the board are left alone.
    pub fn place(&mut self, position: &str, id: PieceId) -> Option<PieceId> {
        debug_assert!(self.slots.contains_key(position), "no square `{position}`");
        self.slots.get_mut(position).and_then(|s| s.replace(id))
    }

    /// Empties a square, returning the id of the piece it held, if any.
    pub fn clear(&mut self, position: &str) -> Option<PieceId> {
        self.slots.get_mut(position).and_then(Option::take)
    }

    /// An iterator over all occupied squares, in no particular order.
    pub fn occupied(&self) -> impl Iterator<Item = (&Label, &PieceId)> + '_ {
        self.slots
            .iter()
            .filter_map(|(l, s)| s.as_ref().map(|id| (l, id)))
    }
}
