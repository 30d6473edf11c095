use crate::search::{
    problem_formulations::ProblemCounters,
    search_engines::{SearchEngineName, SearchResult},
};
use std::{fmt::Debug, time::Duration};

/// Number of characters of the goal state shown in a summary cell.
const STATE_SUMMARY_WIDTH: usize = 8;

/// What a single engine did on a single problem. Created once a search has
/// returned and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord<S, A> {
    engine: SearchEngineName,
    problem_label: String,
    result: SearchResult<S, A>,
    counters: ProblemCounters,
    elapsed: Duration,
}

impl<S: Debug, A> BenchmarkRecord<S, A> {
    pub fn new(
        engine: SearchEngineName,
        problem_label: impl Into<String>,
        result: SearchResult<S, A>,
        counters: ProblemCounters,
        elapsed: Duration,
    ) -> Self {
        Self {
            engine,
            problem_label: problem_label.into(),
            result,
            counters,
            elapsed,
        }
    }

    pub fn engine(&self) -> SearchEngineName {
        self.engine
    }

    pub fn problem_label(&self) -> &str {
        &self.problem_label
    }

    pub fn result(&self) -> &SearchResult<S, A> {
        &self.result
    }

    pub fn counters(&self) -> ProblemCounters {
        self.counters
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// `b*` such that `b* ^ depth` equals the number of generated states. Only
    /// defined for solutions of non-zero depth.
    pub fn effective_branching_factor(&self) -> Option<f64> {
        let depth = self.result.solution()?.depth();
        if depth == 0 {
            return None;
        }
        Some((self.counters.states_generated as f64).powf(1. / depth as f64))
    }

    /// The goal state reached, or a marker for the kind of failure.
    pub fn outcome(&self) -> String {
        match &self.result {
            SearchResult::Success(solution) => format!("{:?}", solution.state())
                .replace('"', "")
                .chars()
                .take(STATE_SUMMARY_WIDTH)
                .collect(),
            SearchResult::Unsolvable => "none".to_string(),
            SearchResult::Cutoff => "cutoff".to_string(),
        }
    }

    /// `<successor calls/goal tests/states generated/outcome>`
    pub fn summary(&self) -> String {
        format!(
            "<{:>4}/{:>4}/{:>4}/{}>",
            self.counters.successor_calls,
            self.counters.goal_tests,
            self.counters.states_generated,
            self.outcome()
        )
    }
}
