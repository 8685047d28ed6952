//! Error types for machine construction, registration and strict transitions.

use crate::core::{Selector, State};
use thiserror::Error;

/// Result type alias for machine operations.
pub type Result<T, E = MachineError> = std::result::Result<T, E>;

/// Errors that can occur when building, configuring or driving a machine.
///
/// A transition that the table does not permit is *not* an error for
/// [`Machine::transition_to`](crate::Machine::transition_to); it is reported
/// as [`TransitionOutcome::Rejected`](crate::TransitionOutcome::Rejected).
/// Only the strict variants turn it into [`MachineError::InvalidTransition`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// An absent or empty value was supplied where a state is required.
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    /// The requested target is not a permitted destination of the current state.
    #[error("Invalid transition from '{from}' to '{to}'")]
    InvalidTransition { from: State, to: State },

    /// A callback option used a key other than `from` or `to`.
    #[error("Unknown selector key '{key}', expected 'from' or 'to'")]
    UnknownSelectorKey { key: String },

    /// A callback registration was attempted without a callback body.
    #[error("Missing callback for selector {selector}. Call .call(closure) before registering")]
    MissingCallback { selector: Selector },
}

impl MachineError {
    pub(crate) fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }
}
