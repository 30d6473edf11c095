use crate::{
    error::GraphError,
    graphs::{GraphMap, GraphNode, Location},
    search::SearchProblem,
};
use petgraph::{EdgeType, Undirected};
use std::rc::Rc;

/// Route finding on a [`GraphMap`]: get from `start` to `goal` as cheaply as
/// possible. Moving to a neighbouring node is both the action and the
/// resulting state.
///
/// The map is shared behind an [`Rc`] and never mutated, so many problems can
/// be posed on the same map.
#[derive(Debug, Clone)]
pub struct GraphProblem<N: GraphNode, Ty: EdgeType = Undirected> {
    map: Rc<GraphMap<N, Ty>>,
    start: N,
    goal: N,
    goal_location: Location,
}

impl<N: GraphNode, Ty: EdgeType> GraphProblem<N, Ty> {
    /// Fails if either endpoint is not registered in `map`.
    pub fn new(map: Rc<GraphMap<N, Ty>>, start: N, goal: N) -> Result<Self, GraphError> {
        map.location(start)?;
        let goal_location = map.location(goal)?;
        Ok(Self {
            map,
            start,
            goal,
            goal_location,
        })
    }

    pub fn map(&self) -> &GraphMap<N, Ty> {
        &self.map
    }

    pub fn start(&self) -> N {
        self.start
    }

    pub fn goal(&self) -> N {
        self.goal
    }
}

impl<N: GraphNode, Ty: EdgeType> SearchProblem for GraphProblem<N, Ty> {
    type State = N;
    type Action = N;

    fn initial_state(&self) -> N {
        self.start
    }

    fn is_goal(&mut self, state: &N) -> bool {
        *state == self.goal
    }

    fn successors(&mut self, state: &N) -> Vec<(N, N)> {
        // States only ever come from this problem, which starts on a
        // registered node and only moves along edges.
        self.map
            .neighbors(*state)
            .expect("Search state is not a node of the graph")
            .into_iter()
            .map(|(neighbor, _)| (neighbor, neighbor))
            .collect()
    }

    fn step_cost(&self, state: &N, _action: &N, result: &N, accumulated_cost: f64) -> f64 {
        accumulated_cost + self.map.cost_between(*state, *result)
    }

    fn heuristic(&self, state: &N) -> f64 {
        self.map
            .location(*state)
            .expect("Search state is not a node of the graph")
            .distance(&self.goal_location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::romania_map,
        search::search_engines::{SearchEngineName, SearchResult},
    };
    use assert_approx_eq::assert_approx_eq;

    fn romania_problem(start: &'static str, goal: &'static str) -> GraphProblem<&'static str> {
        GraphProblem::new(Rc::new(romania_map()), start, goal).unwrap()
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let map = Rc::new(romania_map());
        assert!(GraphProblem::new(map.clone(), "Q", "B").is_err());
        assert!(GraphProblem::new(map, "A", "Q").is_err());
    }

    #[test]
    fn successors_move_to_neighbours() {
        let mut problem = romania_problem("A", "B");
        let successors = problem.successors(&"A");
        assert_eq!(successors, vec![("Z", "Z"), ("S", "S"), ("T", "T")]);
        assert!(problem.is_goal(&"B"));
        assert!(!problem.is_goal(&"A"));
    }

    #[test]
    fn step_cost_accumulates_edge_cost() {
        let problem = romania_problem("A", "B");
        assert_eq!(problem.step_cost(&"A", &"S", &"S", 10.), 150.);
        assert_eq!(problem.step_cost(&"A", &"B", &"B", 10.), f64::INFINITY);
    }

    #[test]
    fn heuristic_is_straight_line_distance() {
        let problem = romania_problem("A", "B");
        assert_approx_eq!(problem.heuristic(&"B"), 0.);
        // A = (91, 492), B = (400, 327)
        assert_approx_eq!(problem.heuristic(&"A"), (309f64 * 309. + 165. * 165.).sqrt());
    }

    #[test]
    fn heuristic_never_exceeds_true_cost_on_romania() {
        let map = Rc::new(romania_map());
        for start in map.nodes() {
            let mut problem = GraphProblem::new(map.clone(), start, "B").unwrap();
            let heuristic = problem.heuristic(&start);
            if let SearchResult::Success(solution) = SearchEngineName::UniformCost.search(&mut problem)
            {
                assert!(heuristic <= solution.cost() + 1e-9);
            }
        }
    }

    #[test]
    fn astar_finds_the_classic_route() {
        let mut problem = romania_problem("A", "B");
        let result = SearchEngineName::AStar.search(&mut problem);
        let solution = result.solution().unwrap();
        assert_eq!(solution.states(), &["A", "S", "R", "P", "B"]);
        assert_eq!(solution.cost(), 418.);
        assert_eq!(solution.depth(), 4);
    }
}
