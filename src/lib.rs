//! Statewise: a minimal embeddable finite-state machine
//!
//! Statewise tracks a single current state, enforces a declared transition
//! table, and runs registered callbacks whenever a transition succeeds. It is
//! meant to live inside a host object and drive its lifecycle.
//!
//! # Core Concepts
//!
//! - **State**: a canonical, non-empty identifier produced by [`IntoState`]
//! - **Transition table**: for each source state, the set of states it may move to
//! - **Callbacks**: closures registered under a `(from, to)` [`Selector`],
//!   where either side may be the wildcard
//!
//! Transitions are keyed by target state only; there are no events.
//!
//! # Example
//!
//! ```rust
//! use statewise::{CallbackBuilder, Extras, Machine, TransitionOutcome};
//! use std::sync::{Arc, Mutex};
//!
//! let fired = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&fired);
//!
//! let mut machine = Machine::configured("A", |machine| {
//!     machine.transition("A", ["B", "C"])?;
//!     machine.transition("B", ["A"])?;
//!     machine.on_transition(CallbackBuilder::new().from("A").call(move |event| {
//!         let note = event.extras.get::<&str>(0).copied().unwrap_or_default();
//!         sink.lock().unwrap().push(format!("{} -> {} ({note})", event.from, event.to));
//!     }))?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let outcome = machine
//!     .transition_to_with("B", Extras::new().arg("approved"))
//!     .unwrap();
//! assert_eq!(outcome.previous().map(|s| s.as_str()), Some("A"));
//!
//! // Not declared: rejected without side effects.
//! assert!(matches!(
//!     machine.transition_to("C").unwrap(),
//!     TransitionOutcome::Rejected { .. }
//! ));
//! assert_eq!(machine.state(), "B");
//! assert_eq!(fired.lock().unwrap().as_slice(), ["A -> B (approved)".to_string()]);
//! ```
//!
//! # Concurrency
//!
//! Every operation is synchronous and runs callbacks inline on the caller's
//! thread. [`Machine`] is `Send` but not internally synchronized; wrap it in
//! a mutex or own it from a single task when several threads need it.

pub mod builder;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use builder::{CallbackBuilder, MachineBuilder};
pub use core::{
    Callback, Endpoint, Extras, IntoState, Label, Opaque, Selector, State, TransitionEvent,
    TransitionTable,
};
pub use engine::{Machine, TransitionOutcome};
pub use error::{MachineError, Result};
