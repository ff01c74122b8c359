/// Board geometry and the pieces placed on it.
pub mod board;
/// Game-specific move legality.
pub mod rules;
/// The event-driven state machine that drives a game session.
pub mod session;
