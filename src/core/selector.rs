//! Callback selectors: which `(from, to)` pairs a callback listens to.

use super::state::{IntoState, State};
use crate::error::{MachineError, Result};
use std::fmt;

/// One side of a selector: a concrete state or the wildcard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Endpoint {
    /// Matches every state.
    #[default]
    Any,
    /// Matches exactly this state.
    State(State),
}

impl Endpoint {
    /// Normalize a state-like value into a concrete endpoint.
    pub fn state(value: impl IntoState) -> Result<Self> {
        Ok(Self::State(value.into_state()?))
    }

    pub fn matches(&self, state: &State) -> bool {
        match self {
            Self::Any => true,
            Self::State(expected) => expected == state,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::State(state) => fmt::Display::fmt(state, f),
        }
    }
}

/// The `(from, to)` pair a callback is registered under.
///
/// Wildcard and concrete selectors are distinct buckets: a callback
/// registered for `(A, *)` is never stored alongside one for `(A, B)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl Selector {
    pub fn new(from: Endpoint, to: Endpoint) -> Self {
        Self { from, to }
    }

    /// The `(*, *)` selector.
    pub fn any() -> Self {
        Self::default()
    }

    /// Apply a keyed option such as `("from", "A")`.
    ///
    /// Only `from` and `to` are recognized.
    pub fn set_option(&mut self, key: &str, value: impl IntoState) -> Result<()> {
        match key {
            "from" => self.from = Endpoint::state(value)?,
            "to" => self.to = Endpoint::state(value)?,
            other => {
                return Err(MachineError::UnknownSelectorKey {
                    key: other.to_string(),
                })
            }
        }
        Ok(())
    }

    /// The four buckets consulted for a move from `from` to `to`, in
    /// dispatch order.
    pub fn dispatch_order(from: &State, to: &State) -> [Selector; 4] {
        [
            Self::new(Endpoint::Any, Endpoint::Any),
            Self::new(Endpoint::State(from.clone()), Endpoint::Any),
            Self::new(Endpoint::Any, Endpoint::State(to.clone())),
            Self::new(Endpoint::State(from.clone()), Endpoint::State(to.clone())),
        ]
    }

    pub fn matches(&self, from: &State, to: &State) -> bool {
        self.from.matches(from) && self.to.matches(to)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> State {
        State::new(name).unwrap()
    }

    #[test]
    fn default_selector_is_wildcard() {
        let selector = Selector::any();

        assert_eq!(selector.from, Endpoint::Any);
        assert_eq!(selector.to, Endpoint::Any);
        assert!(selector.matches(&s("X"), &s("Y")));
    }

    #[test]
    fn set_option_accepts_known_keys() {
        let mut selector = Selector::any();
        selector.set_option("from", "A").unwrap();
        selector.set_option("to", "B").unwrap();

        assert_eq!(selector, Selector::new(Endpoint::State(s("A")), Endpoint::State(s("B"))));
    }

    #[test]
    fn set_option_rejects_unknown_key() {
        let mut selector = Selector::any();
        let result = selector.set_option("via", "A");

        assert_eq!(
            result,
            Err(MachineError::UnknownSelectorKey {
                key: "via".to_string()
            })
        );
        assert_eq!(selector, Selector::any());
    }

    #[test]
    fn set_option_rejects_absent_state() {
        let mut selector = Selector::any();

        assert!(matches!(
            selector.set_option("to", None::<&str>),
            Err(MachineError::InvalidState { .. })
        ));
    }

    #[test]
    fn dispatch_order_is_wildcard_first() {
        let order = Selector::dispatch_order(&s("A"), &s("B"));

        assert_eq!(order[0].to_string(), "(*, *)");
        assert_eq!(order[1].to_string(), "(A, *)");
        assert_eq!(order[2].to_string(), "(*, B)");
        assert_eq!(order[3].to_string(), "(A, B)");
        assert!(order.iter().all(|selector| selector.matches(&s("A"), &s("B"))));
    }

    #[test]
    fn concrete_endpoint_only_matches_itself() {
        let endpoint = Endpoint::State(s("A"));

        assert!(endpoint.matches(&s("A")));
        assert!(!endpoint.matches(&s("B")));
    }
}
