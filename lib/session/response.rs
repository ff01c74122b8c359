use crate::board::Label;
use derive_more::Display;

/// How the renderer should mark squares on the board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Highlight {
    /// Marks a square as selected and the squares its piece may move to.
    Select {
        position: Label,
        destinations: Vec<Label>,
    },
    /// Marks squares a piece may not move to.
    Invalid(Vec<Label>),
    /// Clears all marks.
    Clear,
}

/// A command sent back to the sensor board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Command {
    /// Signals that the last event was rejected.
    #[display(fmt = "INVALID_MOVE")]
    InvalidMove,
}

/// The outcome of handling an [`Event`][`crate::session::Event`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}", message)]
pub struct Response {
    valid: bool,
    message: String,
    highlight: Option<Highlight>,
}

impl Response {
    /// An accepted event.
    pub fn accept(message: impl Into<String>, highlight: Highlight) -> Self {
        Response {
            valid: true,
            message: message.into(),
            highlight: Some(highlight),
        }
    }

    /// A rejected event that leaves highlights as they are.
    pub fn reject(message: impl Into<String>) -> Self {
        Response {
            valid: false,
            message: message.into(),
            highlight: None,
        }
    }

    /// Returns this response with a different [`Highlight`].
    pub fn highlighting(self, highlight: Highlight) -> Self {
        Response {
            highlight: Some(highlight),
            ..self
        }
    }

    /// Whether the event was accepted.
    #[inline(always)]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// A human-readable account of what happened.
    #[inline(always)]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How the board should be highlighted, if at all.
    #[inline(always)]
    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    /// The [`Command`] the sensor board should receive, if any.
    #[inline(always)]
    pub fn command(&self) -> Option<Command> {
        if self.valid {
            None
        } else {
            Some(Command::InvalidMove)
        }
    }
}
