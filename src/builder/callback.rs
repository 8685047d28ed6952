//! Builder for transition callbacks.

use crate::core::{Callback, Endpoint, IntoState, Selector, TransitionEvent};
use crate::error::{MachineError, Result};

/// Builder for a callback registration with a fluent API.
///
/// `from` and `to` default to the wildcard. Invalid states and unknown
/// option keys are remembered and reported by [`CallbackBuilder::build`],
/// so a failed registration never stores anything.
///
/// # Example
///
/// ```rust
/// use statewise::{CallbackBuilder, Endpoint, MachineError};
///
/// let (selector, _callback) = CallbackBuilder::new()
///     .from("draft")
///     .call(|_event| {})
///     .build()
///     .unwrap();
/// assert_eq!(selector.to, Endpoint::Any);
///
/// let result = CallbackBuilder::new().option("via", "draft").call(|_event| {}).build();
/// assert!(matches!(result, Err(MachineError::UnknownSelectorKey { .. })));
/// ```
#[derive(Debug, Default)]
pub struct CallbackBuilder {
    selector: Selector,
    callback: Option<Callback>,
    error: Option<MachineError>,
}

impl CallbackBuilder {
    /// Create a builder matching every transition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only fire when leaving `state`.
    pub fn from(mut self, state: impl IntoState) -> Self {
        match Endpoint::state(state) {
            Ok(endpoint) => self.selector.from = endpoint,
            Err(error) => self.fail(error),
        }
        self
    }

    /// Only fire when entering `state`.
    pub fn to(mut self, state: impl IntoState) -> Self {
        match Endpoint::state(state) {
            Ok(endpoint) => self.selector.to = endpoint,
            Err(error) => self.fail(error),
        }
        self
    }

    /// Set a selector option by key. Recognized keys are `from` and `to`.
    pub fn option(mut self, key: &str, state: impl IntoState) -> Self {
        if let Err(error) = self.selector.set_option(key, state) {
            self.fail(error);
        }
        self
    }

    /// Set the callback body (required).
    pub fn call<F>(mut self, body: F) -> Self
    where
        F: FnMut(&TransitionEvent<'_>) + Send + 'static,
    {
        self.callback = Some(Callback::new(body));
        self
    }

    /// Validate and return the selector with its callback.
    pub fn build(self) -> Result<(Selector, Callback)> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let callback = self.callback.ok_or_else(|| MachineError::MissingCallback {
            selector: self.selector.clone(),
        })?;
        Ok((self.selector, callback))
    }

    // The first problem wins; later ones are usually consequences of it.
    fn fail(&mut self, error: MachineError) {
        self.error.get_or_insert(error);
    }
}
