use crate::board::{Delta, Label, Piece, View};

mod checkers;
mod chess;
mod roster;
mod variant;

pub use checkers::*;
pub use chess::*;
pub use roster::*;
pub use variant::*;

/// Trait for the rules of a game played on the board.
///
/// Implementations are pure functions of the arguments they are given, so the answer to every
/// query is derived afresh from the current occupancy of the board.
pub trait Rules {
    /// The name of the game.
    fn name(&self) -> &'static str;

    /// The pieces this game starts with, keyed by their hardware ids.
    fn roster(&self) -> Roster;

    /// Whether moving `piece` from one square to another is allowed.
    ///
    /// Must return `false` rather than fail if `piece` doesn't stand on `from`, if either square
    /// is not on the board, or if `to` holds a friendly piece.
    fn is_legal(&self, piece: &Piece, from: &str, to: &str, board: &View) -> bool;

    /// Every square `piece` may legally move to, row by row from the top-left corner.
    ///
    /// This is exactly the set of squares for which [`Rules::is_legal`] holds.
    fn destinations(&self, piece: &Piece, board: &View) -> Vec<Label> {
        match &piece.position {
            None => Vec::new(),
            Some(from) => board
                .topology()
                .labels()
                .filter(|to| self.is_legal(piece, from, to, board))
                .cloned()
                .collect(),
        }
    }
}

/// A prospective move of a piece, as seen from the square it leaves.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Step<'a> {
    /// The displacement from origin to destination.
    pub delta: Delta,
    /// The piece currently standing on the destination, if any.
    pub target: Option<&'a Piece>,
}

impl<'a> Step<'a> {
    /// Resolves a move against the board, if it is structurally sound.
    ///
    /// That is the case if `piece` stands on `from`, both squares are on the board, and `to`
    /// is either empty or held by an opposing piece.
    pub fn resolve(piece: &Piece, from: &str, to: &str, board: &View<'a>) -> Option<Self> {
        if piece.position.as_ref().map(Label::as_str) != Some(from) {
            return None;
        }

        let topology = board.topology();
        let origin = topology.coordinate_of(from)?;
        let destination = topology.coordinate_of(to)?;
        let target = board.occupant_at(to);

        match target {
            Some(t) if !t.color.opposes(piece.color) => None,
            _ => Some(Step {
                delta: destination - origin,
                target,
            }),
        }
    }

    /// Whether the destination holds a piece.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardState, Color, Kind, Preset, Registry};

    #[test]
    fn step_requires_piece_to_stand_on_origin() {
        let t = Preset::Compact.topology();
        let p = Piece::new("K", Kind::King, Color::White).at("b2");
        let r = Registry::from_iter([p.clone()]);
        let mut s = BoardState::new(&t);
        s.place("b2", p.id.clone());
        let v = View::new(&t, &s, &r);

        assert!(Step::resolve(&p, "b2", "b3", &v).is_some());
        assert!(Step::resolve(&p, "a1", "b3", &v).is_none());
        assert!(Step::resolve(&Piece { position: None, ..p }, "b2", "b3", &v).is_none());
    }

    #[test]
    fn step_rejects_squares_off_the_board() {
        let t = Preset::Compact.topology();
        let p = Piece::new("K", Kind::King, Color::White).at("d4");
        let r = Registry::from_iter([p.clone()]);
        let mut s = BoardState::new(&t);
        s.place("d4", p.id.clone());
        let v = View::new(&t, &s, &r);

        assert!(Step::resolve(&p, "d4", "e5", &v).is_none());
        assert!(Step::resolve(&p, "d4", "z9", &v).is_none());
    }

    #[test]
    fn step_rejects_friendly_targets_and_accepts_opposing_ones() {
        let t = Preset::Compact.topology();
        let k = Piece::new("K", Kind::King, Color::White).at("b2");
        let f = Piece::new("F", Kind::Pawn, Color::White).at("b3");
        let e = Piece::new("E", Kind::Pawn, Color::Black).at("c3");
        let r = Registry::from_iter([k.clone(), f.clone(), e.clone()]);
        let mut s = BoardState::new(&t);
        s.place("b2", k.id.clone());
        s.place("b3", f.id.clone());
        s.place("c3", e.id.clone());
        let v = View::new(&t, &s, &r);

        assert!(Step::resolve(&k, "b2", "b3", &v).is_none());
        assert!(Step::resolve(&k, "b2", "b2", &v).is_none());

        let step = Step::resolve(&k, "b2", "c3", &v);
        assert_eq!(step.map(|s| s.delta), Some(Delta::new(-1, 1)));
        assert_eq!(step.map(|s| s.is_capture()), Some(true));
    }
}
