use crate::board::{Label, PieceId};
use derive_more::{Display, Error};
use std::str::FromStr;

/// Something the sensor board observed.
///
/// Events travel as lines of colon-separated fields:
///
/// * `PLACE:<piece>:<position>`
/// * `LIFT:<piece>:<position>`
/// * `MOVE:<piece>:<from>:<to>`
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Event {
    /// A piece was put down on a square.
    #[display(fmt = "PLACE:{}:{}", id, at)]
    Placed { id: PieceId, at: Label },

    /// A piece was picked up from a square.
    #[display(fmt = "LIFT:{}:{}", id, at)]
    Lifted { id: PieceId, at: Label },

    /// A piece was moved from one square to another.
    #[display(fmt = "MOVE:{}:{}:{}", id, from, to)]
    Moved { id: PieceId, from: Label, to: Label },
}

impl Event {
    /// The piece this event concerns.
    #[inline(always)]
    pub fn piece(&self) -> &PieceId {
        match self {
            Event::Placed { id, .. } | Event::Lifted { id, .. } | Event::Moved { id, .. } => id,
        }
    }
}

/// The reason why parsing [`Event`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum ParseEventError {
    #[display(fmt = "unknown event type")]
    UnknownKind,
    #[display(fmt = "malformed event")]
    Malformed,
}

impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(':').collect();

        if fields[1..].iter().any(|f| f.is_empty()) {
            return match fields[0] {
                "PLACE" | "LIFT" | "MOVE" => Err(ParseEventError::Malformed),
                _ => Err(ParseEventError::UnknownKind),
            };
        }

        match fields.as_slice() {
            ["PLACE", id, at] => Ok(Event::Placed {
                id: (*id).into(),
                at: (*at).into(),
            }),

            ["LIFT", id, at] => Ok(Event::Lifted {
                id: (*id).into(),
                at: (*at).into(),
            }),

            ["MOVE", id, from, to] => Ok(Event::Moved {
                id: (*id).into(),
                from: (*from).into(),
                to: (*to).into(),
            }),

            ["PLACE" | "LIFT" | "MOVE", ..] => Err(ParseEventError::Malformed),
            _ => Err(ParseEventError::UnknownKind),
        }
    }
}
