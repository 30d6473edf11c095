//! Depth first search

use crate::search::{
    search_engines::{
        frontier_search, Evaluation, LifoFrontier, SearchEngine, SearchMode, SearchResult,
    },
    SearchProblem,
};

/// Depth first search over an explicit stack. The tree variant never
/// terminates on state spaces with cycles unless it stumbles on a goal first.
#[derive(Debug)]
pub struct DepthFirstSearch {
    mode: SearchMode,
}

impl DepthFirstSearch {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }
}

impl SearchEngine for DepthFirstSearch {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        frontier_search(
            problem,
            LifoFrontier::default(),
            self.mode,
            Evaluation::Constant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{australia_map, romania_map},
        search::problem_formulations::GraphProblem,
    };
    use std::rc::Rc;

    #[test]
    fn last_successor_is_explored_first() {
        // A's neighbours are Z, S, T in that order, so T is tried first.
        let mut problem = GraphProblem::new(Rc::new(romania_map()), "A", "L").unwrap();
        let result = DepthFirstSearch::new(SearchMode::Graph).search(&mut problem);
        assert_eq!(result.solution().unwrap().states(), &["A", "T", "L"]);
    }

    #[test]
    fn graph_search_reports_unreachable_goal() {
        let mut problem = GraphProblem::new(Rc::new(australia_map()), "WA", "T").unwrap();
        let result = DepthFirstSearch::new(SearchMode::Graph).search(&mut problem);
        assert_eq!(result, SearchResult::Unsolvable);
    }
}
