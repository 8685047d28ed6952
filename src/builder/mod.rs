//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for machines and callback
//! registrations, and the [`state_enum!`](crate::state_enum) macro for
//! symbolic state types.

pub mod callback;
pub mod machine;
pub mod macros;

pub use callback::CallbackBuilder;
pub use machine::MachineBuilder;
