use crate::board::Preset;
use crate::rules::{Roster, RuleSet, Rules, Variant};
use crate::session::Engine;

/// Everything that is decided once, when a session starts.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Config {
    /// The board size.
    pub preset: Preset,
    /// The game being played.
    pub variant: Variant,
    /// Overrides the game's own roster.
    pub roster: Option<Roster>,
}

impl Config {
    /// Constructs the [`Engine`] for this session.
    pub fn build(self) -> Engine<RuleSet> {
        let rules = self.variant.rules();
        let roster = self.roster.unwrap_or_else(|| rules.roster());
        Engine::with_roster(self.preset.topology(), rules, roster)
    }
}
