//! Result of asking a machine to move.

use crate::core::State;
use crate::error::{MachineError, Result};

/// Outcome of [`Machine::transition_to`](crate::Machine::transition_to).
///
/// A rejected move is an ordinary outcome, not an error: the caller is
/// expected to branch on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a rejected transition leaves the machine where it was"]
pub enum TransitionOutcome {
    /// The machine moved; `previous` is the state it left.
    Transitioned { previous: State },

    /// The table does not permit `current -> target`. Nothing changed.
    Rejected { current: State, target: State },
}

impl TransitionOutcome {
    /// The state the machine left, if it moved.
    pub fn previous(&self) -> Option<&State> {
        match self {
            Self::Transitioned { previous } => Some(previous),
            Self::Rejected { .. } => None,
        }
    }

    pub fn into_previous(self) -> Option<State> {
        match self {
            Self::Transitioned { previous } => Some(previous),
            Self::Rejected { .. } => None,
        }
    }

    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// Convert a rejection into [`MachineError::InvalidTransition`].
    pub fn into_result(self) -> Result<State> {
        match self {
            Self::Transitioned { previous } => Ok(previous),
            Self::Rejected { current, target } => Err(MachineError::InvalidTransition {
                from: current,
                to: target,
            }),
        }
    }
}
