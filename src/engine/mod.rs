//! The state machine engine.
//!
//! [`Machine`] owns the current state, the transition table and the callback
//! registry. It validates moves against the table and dispatches callbacks
//! in a fixed bucket order:
//!
//! 1. `(*, *)`
//! 2. `(previous, *)`
//! 3. `(*, target)`
//! 4. `(previous, target)`
//!
//! Within a bucket, callbacks run in registration order.

mod machine;
mod outcome;

pub use machine::Machine;
pub use outcome::TransitionOutcome;
