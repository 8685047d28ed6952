//! Transition callbacks and the values relayed to them.
//!
//! Callbacks run inline, in registration order, after the machine has
//! already moved to the new state. They receive a [`TransitionEvent`]
//! describing the move and the caller's [`Extras`].

use super::state::State;
use std::any::Any;
use std::fmt;

/// An opaque value relayed to callbacks without inspection.
pub type Opaque = Box<dyn Any + Send + Sync>;

/// Extra arguments and an optional continuation supplied to
/// [`Machine::transition_to_with`](crate::Machine::transition_to_with).
///
/// The machine never looks inside; every matching callback sees the same
/// values in the same order.
///
/// # Example
///
/// ```rust
/// use statewise::Extras;
///
/// let extras = Extras::new().arg("reviewer: ada").arg(3_u32);
///
/// assert_eq!(extras.len(), 2);
/// assert_eq!(extras.get::<&str>(0), Some(&"reviewer: ada"));
/// assert_eq!(extras.get::<u32>(1), Some(&3));
/// assert_eq!(extras.get::<u32>(0), None);
/// ```
#[derive(Default)]
pub struct Extras {
    args: Vec<Opaque>,
    continuation: Option<Opaque>,
}

impl Extras {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn arg<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.args.push(Box::new(value));
        self
    }

    /// Set the trailing continuation, replacing any previous one.
    pub fn continuation<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.continuation = Some(Box::new(value));
        self
    }

    /// All positional arguments in the order they were added.
    pub fn args(&self) -> &[Opaque] {
        &self.args
    }

    /// The positional argument at `index`, if present and of type `T`.
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.args.get(index)?.downcast_ref::<T>()
    }

    /// The continuation, if present and of type `T`.
    pub fn continuation_ref<T: Any>(&self) -> Option<&T> {
        self.continuation.as_ref()?.downcast_ref::<T>()
    }

    pub fn has_continuation(&self) -> bool {
        self.continuation.is_some()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl fmt::Debug for Extras {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extras")
            .field("args", &self.args.len())
            .field("continuation", &self.continuation.is_some())
            .finish()
    }
}

/// What a callback sees when it fires.
#[derive(Debug, Clone, Copy)]
pub struct TransitionEvent<'a> {
    /// The state the machine left.
    pub from: &'a State,
    /// The state the machine is now in.
    pub to: &'a State,
    /// Values relayed from the caller.
    pub extras: &'a Extras,
}

/// A registered transition callback.
pub struct Callback {
    body: Box<dyn FnMut(&TransitionEvent<'_>) + Send>,
}

impl Callback {
    pub fn new<F>(body: F) -> Self
    where
        F: FnMut(&TransitionEvent<'_>) + Send + 'static,
    {
        Self {
            body: Box::new(body),
        }
    }

    pub fn invoke(&mut self, event: &TransitionEvent<'_>) {
        (self.body)(event)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
