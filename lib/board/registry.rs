use crate::board::{Piece, PieceId};
use std::collections::{btree_map::Entry, BTreeMap};

/// The set of pieces known to a session, keyed by [`PieceId`].
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Registry {
    pieces: BTreeMap<PieceId, Piece>,
}

impl Registry {
    /// Constructs an empty [`Registry`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of pieces.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether no piece is known.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Whether a piece is known.
    #[inline(always)]
    pub fn contains(&self, id: &str) -> bool {
        self.pieces.contains_key(id)
    }

    /// The piece with the given id, if any.
    #[inline(always)]
    pub fn get(&self, id: &str) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// The piece with the given id, if any.
    #[inline(always)]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Piece> {
        self.pieces.get_mut(id)
    }

    /// Returns the piece identified by `defaults.id`, inserting `defaults` if it isn't known yet.
    pub fn upsert(&mut self, defaults: Piece) -> &mut Piece {
        match self.pieces.entry(defaults.id.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert(defaults),
        }
    }

    /// Inserts a piece, returning the one it replaced, if any.
    pub fn insert(&mut self, piece: Piece) -> Option<Piece> {
        self.pieces.insert(piece.id.clone(), piece)
    }

    /// Removes a piece, returning it if it was known.
    pub fn remove(&mut self, id: &str) -> Option<Piece> {
        self.pieces.remove(id)
    }

    /// An iterator over all pieces, ordered by id.
    #[inline(always)]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Piece> + '_ {
        self.pieces.values()
    }
}

impl FromIterator<Piece> for Registry {
    fn from_iter<I: IntoIterator<Item = Piece>>(pieces: I) -> Self {
        Registry {
            pieces: pieces.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}
