//! Canonical state identifiers and the normalization of state-like values.
//!
//! Every state that enters a machine passes through [`IntoState`], which
//! accepts a closed set of representations (text, existing states, optional
//! values and enums declared with [`state_enum!`](crate::state_enum)) and
//! produces a [`State`] or an [`MachineError::InvalidState`].

use crate::error::{MachineError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Canonical, non-empty state identifier.
///
/// States compare by their name. The empty string is the textual form of the
/// absent value and can never be a `State`.
///
/// # Example
///
/// ```rust
/// use statewise::State;
///
/// let draft = State::new("draft").unwrap();
/// assert_eq!(draft.as_str(), "draft");
/// assert!(State::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct State(String);

impl State {
    /// Create a state from its name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MachineError::invalid_state("state name must not be empty"));
        }
        Ok(Self(name))
    }

    /// The state's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for State {
    type Error = MachineError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.0
    }
}

impl PartialEq<str> for State {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for State {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Symbolic state tags.
///
/// Implemented by enums declared with [`state_enum!`](crate::state_enum);
/// the name is what the machine stores.
pub trait Label {
    /// The tag's name, used as the canonical state.
    fn name(&self) -> &str;
}

/// Conversion of state-like values into a canonical [`State`].
///
/// Implementations exist for `&str`, `String`, `&String`, `Cow<str>`,
/// `State`, `&State`, `Option<T>` and enums declared with
/// [`state_enum!`](crate::state_enum). `None` and empty names fail with
/// [`MachineError::InvalidState`].
pub trait IntoState {
    /// Normalize `self` into a state.
    fn into_state(self) -> Result<State>;
}

impl IntoState for State {
    fn into_state(self) -> Result<State> {
        Ok(self)
    }
}

impl IntoState for &State {
    fn into_state(self) -> Result<State> {
        Ok(self.clone())
    }
}

impl IntoState for &str {
    fn into_state(self) -> Result<State> {
        State::new(self)
    }
}

impl IntoState for String {
    fn into_state(self) -> Result<State> {
        State::new(self)
    }
}

impl IntoState for &String {
    fn into_state(self) -> Result<State> {
        State::new(self.as_str())
    }
}

impl IntoState for Cow<'_, str> {
    fn into_state(self) -> Result<State> {
        State::new(self.into_owned())
    }
}

impl<T: IntoState> IntoState for Option<T> {
    fn into_state(self) -> Result<State> {
        match self {
            Some(value) => value.into_state(),
            None => Err(MachineError::invalid_state("state must not be absent")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_normalizes_to_state() {
        assert_eq!("A".into_state().unwrap(), "A");
        assert_eq!(String::from("A").into_state().unwrap(), "A");
        assert_eq!((&String::from("A")).into_state().unwrap(), "A");
        assert_eq!(Cow::Borrowed("A").into_state().unwrap(), "A");
    }

    #[test]
    fn absent_value_is_rejected() {
        let result = None::<&str>.into_state();

        assert!(matches!(result, Err(MachineError::InvalidState { .. })));
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            "".into_state(),
            Err(MachineError::InvalidState { .. })
        ));
        assert!(State::new(String::new()).is_err());
    }

    #[test]
    fn present_option_unwraps() {
        assert_eq!(Some("B").into_state().unwrap(), "B");
    }

    #[test]
    fn state_normalizes_to_itself() {
        let state = State::new("idle").unwrap();

        assert_eq!((&state).into_state().unwrap(), state);
        assert_eq!(state.clone().into_state().unwrap(), state);
    }

    #[test]
    fn display_and_debug_show_name() {
        let state = State::new("running").unwrap();

        assert_eq!(state.to_string(), "running");
        assert_eq!(format!("{state:?}"), "\"running\"");
    }

    #[test]
    fn state_serializes_as_plain_string() {
        let state = State::new("A").unwrap();
        let json = serde_json::to_string(&state).unwrap();

        assert_eq!(json, "\"A\"");
        let deserialized: State = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }

    #[test]
    fn empty_state_fails_to_deserialize() {
        let result: std::result::Result<State, _> = serde_json::from_str("\"\"");

        assert!(result.is_err());
    }

    #[test]
    fn states_order_by_name() {
        let a = State::new("A").unwrap();
        let b = State::new("B").unwrap();

        assert!(a < b);
    }
}
