use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::field::YardLine;

/// Operator's yard-line selections for the play being marked.
///
/// An end line can only exist together with a start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    AwaitingStart,
    AwaitingEnd { start: YardLine },
    ReadyToResolve { start: YardLine, end: YardLine },
}

impl Selection {
    /// Record a tapped yard line.
    ///
    /// A complete pair has to be resolved or reset before another tap.
    pub fn select(self, label: YardLine) -> Result<Self, SessionError> {
        match self {
            Selection::AwaitingStart => Ok(Selection::AwaitingEnd { start: label }),
            Selection::AwaitingEnd { start } => Ok(Selection::ReadyToResolve { start, end: label }),
            Selection::ReadyToResolve { start, end } => Err(SessionError::PlayPending {
                start: start.to_string(),
                end: end.to_string(),
            }),
        }
    }
}
