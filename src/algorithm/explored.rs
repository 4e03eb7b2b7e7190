use crate::common::State;

use std::collections::HashSet;
use std::rc::Rc;

/// Closed list: every state that has been expanded. Only grows.
#[derive(Debug, Default)]
pub struct ExploredSet {
    states: HashSet<Rc<State>>,
}

impl ExploredSet {
    /// Returns false if an equal configuration was already recorded.
    pub fn insert(&mut self, state: Rc<State>) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &State) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> impl Iterator<Item = &State> {
        self.states.iter().map(|s| s.as_ref())
    }
}
