use crate::board::{BoardState, Label, Piece, PieceId, Preset, Registry, Topology, View};
use crate::rules::{Roster, RuleSet, Rules};
use crate::session::{Event, Highlight, ParseEventError, Response};
use tracing::{debug, instrument, warn};

/// The state machine that keeps track of a game played on the sensor board.
///
/// The engine owns every piece and the board they stand on, and is the only one to ever mutate
/// them, one [`Event`] at a time. Handling an event never fails, rejected events are reported
/// through the [`Response`] instead, and leave the board untouched.
#[derive(Debug, Clone)]
pub struct Engine<R: Rules = RuleSet> {
    topology: Topology,
    registry: Registry,
    state: BoardState,
    rules: R,
}

impl<R: Rules> Engine<R> {
    /// Constructs an [`Engine`] that knows about the pieces in the game's own roster.
    pub fn new(topology: Topology, rules: R) -> Self {
        let roster = rules.roster();
        Self::with_roster(topology, rules, roster)
    }

    /// Constructs an [`Engine`] that knows about the pieces in a custom [`Roster`].
    pub fn with_roster(topology: Topology, rules: R, roster: Roster) -> Self {
        Engine {
            state: BoardState::new(&topology),
            registry: roster.pieces().collect(),
            topology,
            rules,
        }
    }

    /// The rules of the game being played.
    #[inline(always)]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The board geometry.
    #[inline(always)]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Every known piece.
    #[inline(always)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Which piece stands on each square.
    #[inline(always)]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// A read-only view of the board.
    #[inline(always)]
    pub fn view(&self) -> View<'_> {
        View::new(&self.topology, &self.state, &self.registry)
    }

    /// The piece with the given id, if any.
    #[inline(always)]
    pub fn piece(&self, id: &str) -> Option<&Piece> {
        self.registry.get(id)
    }

    /// The piece standing on a square, if any.
    #[inline(always)]
    pub fn occupant_at(&self, position: &str) -> Option<&Piece> {
        self.view().occupant_at(position)
    }

    /// Every square with its occupant, row by row from the top-left corner.
    pub fn snapshot(&self) -> Vec<(&Label, Option<&Piece>)> {
        self.view().squares().collect()
    }

    /// Whether the board and the registry agree on where every piece stands.
    ///
    /// That is the case if every occupied square holds a known piece that believes to stand
    /// there, and every piece that believes to stand somewhere occupies that square.
    pub fn is_consistent(&self) -> bool {
        let squares = self.state.occupied().all(|(l, id)| {
            self.registry
                .get(id)
                .is_some_and(|p| p.position.as_ref() == Some(l))
        });

        let pieces = self.registry.iter().all(|p| match &p.position {
            None => true,
            Some(l) => self.state.occupant_at(l) == Some(&p.id),
        });

        squares && pieces
    }

    /// Handles an event received as a line of text.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match line.parse::<Event>() {
            Ok(event) => self.handle(&event),
            Err(e) => {
                warn!(line, "{}", e);
                match e {
                    ParseEventError::UnknownKind => Response::reject("Unknown event type"),
                    ParseEventError::Malformed => Response::reject("Malformed event"),
                }
            }
        }
    }

    /// Handles an [`Event`], updating the board if the game allows it.
    #[instrument(level = "debug", skip(self, event), fields(%event), ret(Display))]
    pub fn handle(&mut self, event: &Event) -> Response {
        let response = match event {
            Event::Placed { id, at } => self.place(id, at),
            Event::Lifted { id, at } => self.lift(id, at),
            Event::Moved { id, from, to } => self.advance(id, from, to),
        };

        debug_assert!(self.is_consistent(), "inconsistent board after {event}");
        response
    }

    fn place(&mut self, id: &PieceId, at: &Label) -> Response {
        if !self.topology.has(at) {
            return Response::reject(format!("Unknown position {at}"));
        }

        let piece = self.registry.upsert(Piece::unknown(id.clone()));
        let previous = piece.position.replace(at.clone());
        let piece = piece.clone();

        if let Some(l) = previous.filter(|l| l != at) {
            self.state.clear(&l);
        }

        if let Some(displaced) = self.state.place(at, id.clone()).filter(|d| d != id) {
            if let Some(d) = self.registry.get_mut(&displaced) {
                warn!(piece = %d.id, %at, "displaced piece was never lifted");
                d.position = None;
            }
        }

        let destinations = self.rules.destinations(&piece, &self.view());
        debug!(?destinations);

        Response::accept(
            format!("{piece} placed on {at}"),
            Highlight::Select {
                position: at.clone(),
                destinations,
            },
        )
    }

    fn lift(&mut self, id: &PieceId, at: &Label) -> Response {
        let piece = match self.registry.get_mut(id) {
            None => return Response::reject("unknown piece lifted"),
            Some(p) => p,
        };

        match piece.position.take() {
            None => Response::reject(format!("{piece} already lifted")),
            Some(l) => {
                self.state.clear(&l);
                Response::accept(format!("{piece} lifted from {at}"), Highlight::Clear)
            }
        }
    }

    fn advance(&mut self, id: &PieceId, from: &Label, to: &Label) -> Response {
        let piece = match self.registry.get(id) {
            None => return Response::reject("unknown piece moved"),
            Some(p) => p,
        };

        if !self.rules.is_legal(piece, from, to, &self.view()) {
            return Response::reject(format!("Invalid move: {from} to {to}"))
                .highlighting(Highlight::Invalid(vec![to.clone()]));
        }

        let mut piece = match self.registry.remove(id) {
            None => return Response::reject("unknown piece moved"),
            Some(p) => p,
        };

        self.state.clear(from);
        let capture = self
            .state
            .place(to, id.clone())
            .and_then(|c| self.registry.remove(&c));

        piece.position = Some(to.clone());

        let message = match capture {
            None => format!("{piece} moved to {to}"),
            Some(c) => format!("{piece} moved to {to} (captured {c})"),
        };

        self.registry.insert(piece);
        Response::accept(message, Highlight::Clear)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Preset::default().topology(), RuleSet::default())
    }
}
