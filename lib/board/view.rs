use crate::board::{BoardState, Coordinate, Label, Piece, Registry, Topology};
use std::fmt::{self, Display, Formatter, Write};

/// A read-only view of the board.
#[derive(Debug, Copy, Clone)]
pub struct View<'a> {
    topology: &'a Topology,
    state: &'a BoardState,
    registry: &'a Registry,
}

impl<'a> View<'a> {
    /// Constructs a [`View`] over consistent board state and registry.
    pub fn new(topology: &'a Topology, state: &'a BoardState, registry: &'a Registry) -> Self {
        View {
            topology,
            state,
            registry,
        }
    }

    /// The board geometry.
    #[inline(always)]
    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// The piece standing on a square, if any.
    #[inline(always)]
    pub fn occupant_at(&self, position: &str) -> Option<&'a Piece> {
        self.state
            .occupant_at(position)
            .and_then(|id| self.registry.get(id))
    }

    /// Every square with its occupant, row by row from the top-left corner.
    pub fn squares(&self) -> impl Iterator<Item = (&'a Label, Option<&'a Piece>)> + '_ {
        self.topology.labels().map(|l| (l, self.occupant_at(l)))
    }
}

/// Draws the board as a grid of piece symbols, with empty squares as dots.
impl Display for View<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.topology.rows() as i16 {
            if row > 0 {
                f.write_char('\n')?;
            }

            for col in 0..self.topology.cols() as i16 {
                let symbol = self
                    .topology
                    .label_of(Coordinate::new(row, col))
                    .and_then(|l| self.occupant_at(l))
                    .map_or('.', Piece::symbol);

                f.write_char(symbol)?;
            }
        }

        Ok(())
    }
}
