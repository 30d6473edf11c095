use crate::search::SearchProblem;

/// A call made by a search engine into a [`CallLog`], with the value it
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Call<S, A> {
    IsGoal(S, bool),
    Successors(S, Vec<(A, S)>),
}

/// Forwards to the wrapped problem and records every goal test and successor
/// call, so tests can compare call sequences between runs.
#[derive(Debug, Clone)]
pub struct CallLog<P: SearchProblem> {
    problem: P,
    calls: Vec<Call<P::State, P::Action>>,
}

impl<P: SearchProblem> CallLog<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            calls: vec![],
        }
    }

    pub fn calls(&self) -> &[Call<P::State, P::Action>] {
        &self.calls
    }
}

impl<P: SearchProblem> SearchProblem for CallLog<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.problem.initial_state()
    }

    fn is_goal(&mut self, state: &P::State) -> bool {
        let is_goal = self.problem.is_goal(state);
        self.calls.push(Call::IsGoal(state.clone(), is_goal));
        is_goal
    }

    fn successors(&mut self, state: &P::State) -> Vec<(P::Action, P::State)> {
        let successors = self.problem.successors(state);
        self.calls
            .push(Call::Successors(state.clone(), successors.clone()));
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
