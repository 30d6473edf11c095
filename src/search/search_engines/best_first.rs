//! This module implements best-first graph search. Uniform-cost search,
//! greedy best-first search and A* are all instances that only differ in how
//! they evaluate a node.

use crate::search::{
    search_engines::{
        frontier_search, Evaluation, PriorityFrontier, SearchEngine, SearchMode, SearchResult,
    },
    SearchProblem,
};

/// Best-first graph search that always expands the node with the lowest
/// evaluation, breaking ties in generation order.
#[derive(Debug)]
pub struct BestFirstSearch {
    evaluation: Evaluation,
}

impl BestFirstSearch {
    pub fn new(evaluation: Evaluation) -> Self {
        Self { evaluation }
    }

    pub fn uniform_cost() -> Self {
        Self::new(Evaluation::PathCost)
    }

    pub fn greedy() -> Self {
        Self::new(Evaluation::Heuristic)
    }

    pub fn astar() -> Self {
        Self::new(Evaluation::PathCostPlusHeuristic)
    }
}

impl SearchEngine for BestFirstSearch {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        frontier_search(
            problem,
            PriorityFrontier::default(),
            SearchMode::Graph,
            self.evaluation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::{australia_map, romania_map},
        search::problem_formulations::{GraphProblem, InstrumentedProblem},
    };
    use std::rc::Rc;

    fn arad_to_bucharest() -> GraphProblem<&'static str> {
        GraphProblem::new(Rc::new(romania_map()), "A", "B").unwrap()
    }

    #[test]
    fn uniform_cost_is_optimal() {
        let result = BestFirstSearch::uniform_cost().search(&mut arad_to_bucharest());
        let solution = result.solution().unwrap();
        assert_eq!(solution.states(), &["A", "S", "R", "P", "B"]);
        assert_eq!(solution.cost(), 418.);
    }

    #[test]
    fn greedy_follows_the_heuristic() {
        let result = BestFirstSearch::greedy().search(&mut arad_to_bucharest());
        let solution = result.solution().unwrap();
        assert_eq!(solution.states(), &["A", "S", "F", "B"]);
        assert_eq!(solution.cost(), 450.);
    }

    #[test]
    fn astar_expands_no_more_than_uniform_cost() {
        let mut ucs = InstrumentedProblem::new(arad_to_bucharest());
        let mut astar = InstrumentedProblem::new(arad_to_bucharest());
        let ucs_result = BestFirstSearch::uniform_cost().search(&mut ucs);
        let astar_result = BestFirstSearch::astar().search(&mut astar);
        assert_eq!(
            ucs_result.solution().unwrap().cost(),
            astar_result.solution().unwrap().cost()
        );
        assert!(astar.successor_calls() <= ucs.successor_calls());
    }

    #[test]
    fn unreachable_goal_is_unsolvable() {
        let mut problem = GraphProblem::new(Rc::new(australia_map()), "WA", "T").unwrap();
        let result = BestFirstSearch::astar().search(&mut problem);
        assert_eq!(result, SearchResult::Unsolvable);
    }
}
