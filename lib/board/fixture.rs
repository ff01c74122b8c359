use crate::board::{BoardState, Piece, Preset, Registry, Topology, View};

/// A board populated with pieces standing where they claim to be.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub topology: Topology,
    pub state: BoardState,
    pub registry: Registry,
}

impl Fixture {
    pub fn new(preset: Preset, pieces: impl IntoIterator<Item = Piece>) -> Self {
        let topology = preset.topology();
        let mut state = BoardState::new(&topology);
        let mut registry = Registry::new();

        for p in pieces {
            if let Some(l) = &p.position {
                if let Some(displaced) = state.place(l, p.id.clone()) {
                    registry.remove(&displaced);
                }
            }

            registry.insert(p);
        }

        Fixture {
            topology,
            state,
            registry,
        }
    }

    pub fn view(&self) -> View<'_> {
        View::new(&self.topology, &self.state, &self.registry)
    }
}
