//! A solution is the path a search engine found from the initial state to a
//! goal state. This module provides the [`Solution`] struct, which represents
//! such a path.

/// The terminal node of a successful search, unrolled into the full path.
/// `states` always has exactly one more element than `actions`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S, A> {
    states: Vec<S>,
    actions: Vec<A>,
    cost: f64,
}

impl<S, A> Solution<S, A> {
    pub(crate) fn new(states: Vec<S>, actions: Vec<A>, cost: f64) -> Self {
        debug_assert_eq!(states.len(), actions.len() + 1);
        Self {
            states,
            actions,
            cost,
        }
    }

    /// The goal state the path ends in.
    pub fn state(&self) -> &S {
        self.states
            .last()
            .expect("A solution always contains the initial state")
    }

    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn actions(&self) -> &[A] {
        &self.actions
    }

    pub fn depth(&self) -> usize {
        self.actions.len()
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }
}
