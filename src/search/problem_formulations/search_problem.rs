use std::fmt::Debug;
use std::hash::Hash;

/// A state-space search problem. Search engines only ever interact with a
/// problem through this trait, so any implementation can be searched, wrapped
/// in an [`InstrumentedProblem`], or benchmarked interchangeably.
///
/// [`SearchProblem::is_goal`] and [`SearchProblem::successors`] take `&mut self`
/// so that wrappers may record statistics while forwarding the call. Plain
/// problem formulations are expected to behave as pure functions of their
/// arguments.
///
/// [`InstrumentedProblem`]: crate::search::problem_formulations::InstrumentedProblem
pub trait SearchProblem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&mut self, state: &Self::State) -> bool;

    /// All `(action, resulting state)` pairs reachable from `state` in one
    /// step, in a fixed order.
    fn successors(&mut self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// The cost of a path that reaches `result` from `state` via `action`,
    /// given that reaching `state` cost `accumulated_cost`.
    fn step_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        result: &Self::State,
        accumulated_cost: f64,
    ) -> f64;

    /// Estimate of the remaining cost from `state` to a goal. Cost-optimal
    /// engines only return optimal solutions if this never overestimates.
    fn heuristic(&self, state: &Self::State) -> f64;
}
