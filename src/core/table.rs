//! The declared transition table.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from a source state to the set of states it may move to.
///
/// Sources that were never declared behave as if they had an empty set:
/// they have no outbound transitions. Lookups never insert entries.
///
/// # Example
///
/// ```rust
/// use statewise::{State, TransitionTable};
///
/// let mut table = TransitionTable::new();
/// table.declare(
///     State::new("draft").unwrap(),
///     [State::new("review").unwrap()],
/// );
///
/// assert!(table.permits("draft", "review"));
/// assert!(!table.permits("review", "draft"));
/// assert!(!table.contains_source("review"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransitionTable {
    entries: BTreeMap<State, BTreeSet<State>>,
}

impl TransitionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the destinations of `from`, replacing any prior declaration.
    pub fn declare(&mut self, from: State, to: impl IntoIterator<Item = State>) {
        self.entries.insert(from, to.into_iter().collect());
    }

    /// Destinations declared for `from`, if it was declared at all.
    pub fn get(&self, from: &str) -> Option<&BTreeSet<State>> {
        self.entries.get(from)
    }

    /// Destinations of `from`, empty when undeclared.
    pub fn destinations(&self, from: &str) -> BTreeSet<State> {
        self.get(from).cloned().unwrap_or_default()
    }

    /// Whether a move from `from` to `to` is declared.
    pub fn permits(&self, from: &str, to: &str) -> bool {
        self.get(from).is_some_and(|set| set.contains(to))
    }

    /// Whether `from` has an entry, even an empty one.
    pub fn contains_source(&self, from: &str) -> bool {
        self.entries.contains_key(from)
    }

    /// Iterate over declared sources and their destinations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&State, &BTreeSet<State>)> {
        self.entries.iter()
    }

    /// Number of declared sources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a TransitionTable {
    type Item = (&'a State, &'a BTreeSet<State>);
    type IntoIter = std::collections::btree_map::Iter<'a, State, BTreeSet<State>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> State {
        State::new(name).unwrap()
    }

    #[test]
    fn declare_replaces_prior_set() {
        let mut table = TransitionTable::new();
        table.declare(s("A"), [s("B"), s("C")]);
        table.declare(s("A"), [s("D")]);

        let expected: BTreeSet<State> = [s("D")].into_iter().collect();
        assert_eq!(table.get("A"), Some(&expected));
        assert!(!table.permits("A", "B"));
    }

    #[test]
    fn declare_deduplicates() {
        let mut table = TransitionTable::new();
        table.declare(s("A"), [s("B"), s("B"), s("C")]);

        assert_eq!(table.destinations("A").len(), 2);
    }

    #[test]
    fn lookup_of_undeclared_source_does_not_insert() {
        let table = TransitionTable::new();

        assert!(table.destinations("ghost").is_empty());
        assert!(!table.permits("ghost", "A"));
        assert!(!table.contains_source("ghost"));
        assert!(table.is_empty());
    }

    #[test]
    fn empty_declaration_is_kept() {
        let mut table = TransitionTable::new();
        table.declare(s("D"), Vec::new());

        assert!(table.contains_source("D"));
        assert!(table.destinations("D").is_empty());
    }

    #[test]
    fn table_serializes_as_map() {
        let mut table = TransitionTable::new();
        table.declare(s("A"), [s("C"), s("B")]);
        table.declare(s("D"), Vec::new());

        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"A":["B","C"],"D":[]}"#);

        let deserialized: TransitionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, table);
    }

    #[test]
    fn empty_state_in_json_is_rejected() {
        let result: std::result::Result<TransitionTable, _> =
            serde_json::from_str(r#"{"A":[""]}"#);

        assert!(result.is_err());
    }
}
