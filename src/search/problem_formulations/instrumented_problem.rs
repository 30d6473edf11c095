use crate::search::SearchProblem;

/// Snapshot of the counters of an [`InstrumentedProblem`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemCounters {
    /// Number of goal tests, including failed ones
    pub goal_tests: usize,
    /// Number of successor generation calls
    pub successor_calls: usize,
    /// Total number of states returned by successor generation
    pub states_generated: usize,
}

/// Wraps a [`SearchProblem`] and counts how often a search engine calls into
/// it. Every call is forwarded unchanged, so an engine sees exactly the same
/// return values as it would from the wrapped problem.
///
/// The counters start at zero, are only changed by the forwarding calls, and
/// are meant to be read once the search has returned.
#[derive(Debug, Clone)]
pub struct InstrumentedProblem<P> {
    problem: P,
    counters: ProblemCounters,
}

impl<P: SearchProblem> InstrumentedProblem<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            counters: ProblemCounters::default(),
        }
    }

    pub fn goal_tests(&self) -> usize {
        self.counters.goal_tests
    }

    pub fn successor_calls(&self) -> usize {
        self.counters.successor_calls
    }

    pub fn states_generated(&self) -> usize {
        self.counters.states_generated
    }

    pub fn counters(&self) -> ProblemCounters {
        self.counters
    }

    pub fn inner(&self) -> &P {
        &self.problem
    }

    pub fn into_inner(self) -> P {
        self.problem
    }
}

impl<P: SearchProblem> SearchProblem for InstrumentedProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.problem.initial_state()
    }

    fn is_goal(&mut self, state: &P::State) -> bool {
        self.counters.goal_tests += 1;
        self.problem.is_goal(state)
    }

    fn successors(&mut self, state: &P::State) -> Vec<(P::Action, P::State)> {
        let successors = self.problem.successors(state);
        self.counters.successor_calls += 1;
        self.counters.states_generated += successors.len();
        successors
    }

    fn step_cost(
        &self,
        state: &P::State,
        action: &P::Action,
        result: &P::State,
        accumulated_cost: f64,
    ) -> f64 {
        self.problem
            .step_cost(state, action, result, accumulated_cost)
    }

    fn heuristic(&self, state: &P::State) -> f64 {
        self.problem.heuristic(state)
    }
}
