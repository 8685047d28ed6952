//! Builder for constructing machines.

use crate::builder::callback::CallbackBuilder;
use crate::core::{IntoState, State};
use crate::engine::Machine;
use crate::error::{MachineError, Result};

/// Builder for constructing machines with a fluent API.
///
/// Equivalent to [`Machine::configured`], for callers that prefer to
/// assemble the declarations up front.
#[derive(Debug, Default)]
pub struct MachineBuilder {
    initial: Option<State>,
    transitions: Vec<(State, Vec<State>)>,
    callbacks: Vec<CallbackBuilder>,
    error: Option<MachineError>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl IntoState) -> Self {
        match state.into_state() {
            Ok(state) => self.initial = Some(state),
            Err(error) => self.fail(error),
        }
        self
    }

    /// Declare the destinations of `from`. Later declarations for the same
    /// source replace earlier ones.
    pub fn transition<I>(mut self, from: impl IntoState, to: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoState,
    {
        let declared = from.into_state().and_then(|from| {
            let to = to
                .into_iter()
                .map(IntoState::into_state)
                .collect::<Result<Vec<_>>>()?;
            Ok((from, to))
        });
        match declared {
            Ok(declaration) => self.transitions.push(declaration),
            Err(error) => self.fail(error),
        }
        self
    }

    /// Add a callback registration.
    pub fn on_transition(mut self, callback: CallbackBuilder) -> Self {
        self.callbacks.push(callback);
        self
    }

    /// Build the machine.
    /// Returns the first error recorded by the builder, if any.
    pub fn build(self) -> Result<Machine> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let initial = self.initial.ok_or_else(|| {
            MachineError::invalid_state("initial state not specified. Call .initial(state) before .build()")
        })?;

        let mut machine = Machine::new(initial)?;
        for (from, to) in self.transitions {
            machine.transition(from, to)?;
        }
        for callback in self.callbacks {
            machine.on_transition(callback)?;
        }

        Ok(machine)
    }

    fn fail(&mut self, error: MachineError) {
        self.error.get_or_insert(error);
    }
}
