//! Core value types of the state machine.
//!
//! This module contains the pieces the engine is assembled from:
//! - Canonical states and their normalization
//! - The declared transition table
//! - Callback selectors and the callbacks themselves
//!
//! None of these types perform dispatch on their own; see
//! [`Machine`](crate::Machine) for that.

mod callback;
mod selector;
mod state;
mod table;

pub use callback::{Callback, Extras, Opaque, TransitionEvent};
pub use selector::{Endpoint, Selector};
pub use state::{IntoState, Label, State};
pub use table::TransitionTable;
