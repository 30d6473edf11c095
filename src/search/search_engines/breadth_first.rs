//! Breadth first search

use crate::search::{
    search_engines::{
        frontier_search, Evaluation, FifoFrontier, SearchEngine, SearchMode, SearchResult,
    },
    SearchProblem,
};

#[derive(Debug)]
pub struct BreadthFirstSearch {
    mode: SearchMode,
}

impl BreadthFirstSearch {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode }
    }
}

impl SearchEngine for BreadthFirstSearch {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        frontier_search(
            problem,
            FifoFrontier::default(),
            self.mode,
            Evaluation::Constant,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::romania_map,
        search::problem_formulations::{GraphProblem, InstrumentedProblem},
    };
    use std::rc::Rc;

    #[test]
    fn finds_shallowest_route() {
        for mode in [SearchMode::Tree, SearchMode::Graph] {
            let mut problem = GraphProblem::new(Rc::new(romania_map()), "A", "B").unwrap();
            let result = BreadthFirstSearch::new(mode).search(&mut problem);
            let solution = result.solution().unwrap();
            assert_eq!(solution.states(), &["A", "S", "F", "B"]);
            assert_eq!(solution.actions(), &["S", "F", "B"]);
            assert_eq!(solution.cost(), 450.);
        }
    }

    #[test]
    fn initial_goal_is_found_without_expansion() {
        let problem = GraphProblem::new(Rc::new(romania_map()), "A", "A").unwrap();
        let mut problem = InstrumentedProblem::new(problem);
        let result = BreadthFirstSearch::new(SearchMode::Graph).search(&mut problem);
        assert_eq!(result.solution().unwrap().depth(), 0);
        assert_eq!(problem.goal_tests(), 1);
        assert_eq!(problem.successor_calls(), 0);
    }

    #[test]
    fn graph_search_expands_each_state_once() {
        let problem = GraphProblem::new(Rc::new(romania_map()), "O", "N").unwrap();
        let mut tree = InstrumentedProblem::new(problem.clone());
        let mut graph = InstrumentedProblem::new(problem);
        BreadthFirstSearch::new(SearchMode::Tree).search(&mut tree);
        BreadthFirstSearch::new(SearchMode::Graph).search(&mut graph);
        assert!(graph.successor_calls() <= 20);
        assert!(graph.successor_calls() < tree.successor_calls());
    }
}
