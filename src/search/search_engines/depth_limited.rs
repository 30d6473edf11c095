//! Depth-limited and iterative deepening search. Both are recursive tree
//! searches and keep no closed list, which makes them safe on cyclic state
//! spaces as long as a limit is in place.

use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    NodeId, SearchProblem, SearchSpace,
};
use tracing::debug;

pub const DEFAULT_DEPTH_LIMIT: usize = 50;

#[derive(Debug)]
pub struct DepthLimitedSearch {
    limit: usize,
}

impl DepthLimitedSearch {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    fn recursive_search<P: SearchProblem>(
        &self,
        problem: &mut P,
        search_space: &mut SearchSpace<P::State, P::Action>,
        node_id: NodeId,
    ) -> SearchResult<P::State, P::Action> {
        let node = search_space.get_node(node_id);
        let depth = node.get_depth();
        let state = node.get_state().clone();

        if problem.is_goal(&state) {
            return SearchResult::Success(search_space.extract_solution(node_id));
        }
        if depth == self.limit {
            return SearchResult::Cutoff;
        }

        let mut cutoff_occurred = false;
        for child_id in search_space.expand(problem, node_id) {
            match self.recursive_search(problem, search_space, child_id) {
                SearchResult::Cutoff => cutoff_occurred = true,
                SearchResult::Unsolvable => {}
                success => return success,
            }
        }

        if cutoff_occurred {
            SearchResult::Cutoff
        } else {
            SearchResult::Unsolvable
        }
    }
}

impl Default for DepthLimitedSearch {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl SearchEngine for DepthLimitedSearch {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        let mut search_space = SearchSpace::new(problem.initial_state());
        let root_id = search_space.root_id();
        self.recursive_search(problem, &mut search_space, root_id)
    }
}

/// Runs depth-limited searches with limits 0, 1, 2, ... until one of them
/// finishes without being cut off. Loops forever if the state space has
/// unbounded depth and no goal.
#[derive(Debug, Default)]
pub struct IterativeDeepeningSearch {}

impl IterativeDeepeningSearch {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for IterativeDeepeningSearch {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        let mut limit = 0;
        loop {
            debug!(depth_limit = limit, "starting depth-limited iteration");
            match DepthLimitedSearch::new(limit).search(problem) {
                SearchResult::Cutoff => limit += 1,
                result => return result,
            }
        }
    }
}
