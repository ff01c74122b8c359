use crate::board::{Piece, View};
use crate::rules::{Checkers, Chess, Roster, Rules};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// The supported games.
#[derive(Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Variant {
    #[default]
    #[display(fmt = "chess")]
    Chess,
    #[display(fmt = "checkers")]
    Checkers,
}

impl Variant {
    /// The [`Rules`] of this game.
    pub fn rules(self) -> RuleSet {
        match self {
            Variant::Chess => Chess.into(),
            Variant::Checkers => Checkers.into(),
        }
    }
}

/// The reason why parsing [`Variant`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "unsupported game, expected either `chess` or `checkers`")]
pub struct ParseVariantError;

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chess" => Ok(Variant::Chess),
            "checkers" => Ok(Variant::Checkers),
            _ => Err(ParseVariantError),
        }
    }
}

/// The [`Rules`] of any one of the supported games.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, From)]
pub enum RuleSet {
    Chess(Chess),
    Checkers(Checkers),
}

impl Default for RuleSet {
    fn default() -> Self {
        Variant::default().rules()
    }
}

impl Rules for RuleSet {
    fn name(&self) -> &'static str {
        match self {
            RuleSet::Chess(r) => r.name(),
            RuleSet::Checkers(r) => r.name(),
        }
    }

    fn roster(&self) -> Roster {
        match self {
            RuleSet::Chess(r) => r.roster(),
            RuleSet::Checkers(r) => r.roster(),
        }
    }

    fn is_legal(&self, piece: &Piece, from: &str, to: &str, board: &View) -> bool {
        match self {
            RuleSet::Chess(r) => r.is_legal(piece, from, to, board),
            RuleSet::Checkers(r) => r.is_legal(piece, from, to, board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_variant_is_an_identity(v: Variant) {
        assert_eq!(v.to_string().parse(), Ok(v));
    }

    #[proptest]
    fn parsing_variant_is_case_insensitive(v: Variant) {
        assert_eq!(v.to_string().to_uppercase().parse(), Ok(v));
    }

    #[proptest]
    fn parsing_variant_fails_for_unsupported_games(
        #[filter(!["chess", "checkers"].contains(&#s.to_ascii_lowercase().as_str()))] s: String,
    ) {
        assert_eq!(s.parse::<Variant>(), Err(ParseVariantError));
    }

    #[test]
    fn variant_selects_rules_of_the_same_name() {
        assert_eq!(Variant::Chess.rules().name(), "Chess");
        assert_eq!(Variant::Checkers.rules().name(), "Checkers");
    }

    #[proptest]
    fn rule_set_delegates_roster(v: Variant) {
        let expected = match v {
            Variant::Chess => Chess.roster(),
            Variant::Checkers => Checkers.roster(),
        };

        assert_eq!(v.rules().roster(), expected);
    }
}
