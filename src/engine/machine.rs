//! The state machine engine.

use crate::builder::CallbackBuilder;
use crate::core::{
    Callback, Extras, IntoState, Selector, State, TransitionEvent, TransitionTable,
};
use crate::engine::outcome::TransitionOutcome;
use crate::error::Result;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// A finite-state machine keyed by target state.
///
/// The machine holds one current state, a [`TransitionTable`] and a registry
/// of callbacks grouped by [`Selector`]. All operations run synchronously on
/// the caller's thread, callbacks included. The machine is `Send` but has no
/// internal locking; hosts that share it across threads wrap it in their own
/// mutex or drive it from a single task.
///
/// # Example
///
/// ```rust
/// use statewise::{CallbackBuilder, Machine};
/// use std::sync::{Arc, Mutex};
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
///
/// let mut machine = Machine::configured("draft", |machine| {
///     machine.transition("draft", ["review"])?;
///     machine.transition("review", ["draft", "published"])?;
///     machine.on_transition(CallbackBuilder::new().to("published").call(move |event| {
///         sink.lock().unwrap().push(format!("{} -> {}", event.from, event.to));
///     }))?;
///     Ok(())
/// })
/// .unwrap();
///
/// assert!(machine.transition_to("published").unwrap().is_rejected());
/// machine.transition_to_strict("review").unwrap();
/// machine.transition_to_strict("published").unwrap();
///
/// assert_eq!(machine.state(), "published");
/// assert_eq!(log.lock().unwrap().as_slice(), ["review -> published".to_string()]);
/// ```
#[derive(Debug)]
pub struct Machine {
    state: State,
    table: TransitionTable,
    callbacks: HashMap<Selector, Vec<Callback>>,
}

impl Machine {
    /// Create a machine in `initial` with no transitions and no callbacks.
    ///
    /// Fails with [`MachineError::InvalidState`](crate::MachineError::InvalidState)
    /// when `initial` is absent or empty.
    pub fn new(initial: impl IntoState) -> Result<Self> {
        let state = initial.into_state()?;
        trace!(state = %state, "machine created");
        Ok(Self {
            state,
            table: TransitionTable::new(),
            callbacks: HashMap::new(),
        })
    }

    /// Create a machine and hand it to `configure` before returning it.
    ///
    /// Any error returned by `configure` is propagated and the machine is
    /// dropped.
    pub fn configured<F>(initial: impl IntoState, configure: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut machine = Self::new(initial)?;
        configure(&mut machine)?;
        Ok(machine)
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Declare the states reachable from `from`, replacing any earlier
    /// declaration for it.
    ///
    /// Every value is normalized first; if any of them is invalid the table
    /// is left untouched.
    pub fn transition<I>(&mut self, from: impl IntoState, to: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: IntoState,
    {
        let from = from.into_state()?;
        let destinations = to
            .into_iter()
            .map(IntoState::into_state)
            .collect::<Result<BTreeSet<_>>>()?;

        trace!(from = %from, destinations = destinations.len(), "declared transitions");
        self.table.declare(from, destinations);
        Ok(self)
    }

    /// Replace every declaration with the contents of `table`.
    pub fn load_transitions(&mut self, table: TransitionTable) -> &mut Self {
        trace!(sources = table.len(), "loaded transition table");
        self.table = table;
        self
    }

    /// A copy of the transition table.
    pub fn transitions(&self) -> TransitionTable {
        self.table.clone()
    }

    /// Register a callback.
    ///
    /// The builder is validated in full before anything is stored, so an
    /// unknown option key or a missing callback registers nothing.
    pub fn on_transition(&mut self, builder: CallbackBuilder) -> Result<&mut Self> {
        let (selector, callback) = builder.build()?;
        trace!(selector = %selector, "registered callback");
        self.callbacks.entry(selector).or_default().push(callback);
        Ok(self)
    }

    /// Number of callbacks registered under exactly `selector`.
    pub fn callback_count(&self, selector: &Selector) -> usize {
        self.callbacks.get(selector).map_or(0, Vec::len)
    }

    /// Move to `target` if the table permits it.
    ///
    /// See [`Machine::transition_to_with`].
    pub fn transition_to(&mut self, target: impl IntoState) -> Result<TransitionOutcome> {
        self.transition_to_with(target, Extras::new())
    }

    /// Move to `target` if the table permits it, relaying `extras` to every
    /// callback that fires.
    ///
    /// When the move is not permitted the machine is unchanged, no callback
    /// runs, and [`TransitionOutcome::Rejected`] is returned. Otherwise the
    /// state is updated first and callbacks then run bucket by bucket:
    /// `(*, *)`, `(previous, *)`, `(*, target)`, `(previous, target)`, each in
    /// registration order.
    ///
    /// Fails only when `target` itself is absent or empty.
    pub fn transition_to_with(
        &mut self,
        target: impl IntoState,
        extras: Extras,
    ) -> Result<TransitionOutcome> {
        let target = target.into_state()?;

        if !self.table.permits(self.state.as_str(), target.as_str()) {
            debug!(from = %self.state, to = %target, "transition rejected");
            return Ok(TransitionOutcome::Rejected {
                current: self.state.clone(),
                target,
            });
        }

        let previous = std::mem::replace(&mut self.state, target);
        let event = TransitionEvent {
            from: &previous,
            to: &self.state,
            extras: &extras,
        };

        let mut invoked = 0;
        for selector in Selector::dispatch_order(event.from, event.to) {
            if let Some(bucket) = self.callbacks.get_mut(&selector) {
                for callback in bucket.iter_mut() {
                    callback.invoke(&event);
                    invoked += 1;
                }
            }
        }

        trace!(from = %previous, to = %self.state, callbacks = invoked, "transitioned");
        Ok(TransitionOutcome::Transitioned { previous })
    }

    /// Like [`Machine::transition_to`], but a rejected move is an error.
    ///
    /// Returns the previous state on success, and
    /// [`MachineError::InvalidTransition`](crate::MachineError::InvalidTransition)
    /// naming the current state and the rejected target otherwise.
    pub fn transition_to_strict(&mut self, target: impl IntoState) -> Result<State> {
        self.transition_to_with(target, Extras::new())?.into_result()
    }

    /// Strict counterpart of [`Machine::transition_to_with`].
    pub fn transition_to_strict_with(
        &mut self,
        target: impl IntoState,
        extras: Extras,
    ) -> Result<State> {
        self.transition_to_with(target, extras)?.into_result()
    }

    /// Whether the current state may move to `target`.
    ///
    /// Never changes state or runs callbacks. An absent or empty target is
    /// never permitted.
    pub fn can_transition_to(&self, target: impl IntoState) -> bool {
        target
            .into_state()
            .is_ok_and(|target| self.table.permits(self.state.as_str(), target.as_str()))
    }

    /// States reachable from the current state.
    pub fn allowed_transitions(&self) -> BTreeSet<State> {
        self.table.destinations(self.state.as_str())
    }

    /// Whether the current state has no way out.
    pub fn is_terminal(&self) -> bool {
        self.table
            .get(self.state.as_str())
            .map_or(true, BTreeSet::is_empty)
    }
}
