//! Frontiers decide which generated node a search expands next. All searches
//! that goal-test nodes as they leave the frontier share [`frontier_search`]
//! and only differ in the frontier they plug in.

use crate::search::{
    search_engines::{SearchMode, SearchResult},
    NodeId, SearchNode, SearchProblem, SearchSpace,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::{
    cmp::Reverse,
    collections::{HashSet, VecDeque},
};

pub trait Frontier {
    /// Add a node. `priority` is only consulted by priority frontiers, where
    /// lower values are expanded first.
    fn push(&mut self, node_id: NodeId, priority: f64);

    fn pop(&mut self) -> Option<NodeId>;
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier(VecDeque<NodeId>);

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: f64) {
        self.0.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
}

/// Last in, first out. Successors pushed in generation order come back out in
/// reverse, so the last generated successor is expanded first.
#[derive(Debug, Default)]
pub struct LifoFrontier(Vec<NodeId>);

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: f64) {
        self.0.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
}

/// Lowest priority first. Node ids grow monotonically, so using them as the
/// secondary key breaks ties in insertion order.
#[derive(Debug, Default)]
pub struct PriorityFrontier(PriorityQueue<NodeId, Reverse<(OrderedFloat<f64>, NodeId)>>);

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: f64) {
        self.0.push(node_id, Reverse((OrderedFloat(priority), node_id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop().map(|(node_id, _)| node_id)
    }
}

/// How a node's frontier priority is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Every node gets the same priority
    Constant,
    /// f = g
    PathCost,
    /// f = h
    Heuristic,
    /// f = g + h
    PathCostPlusHeuristic,
}

impl Evaluation {
    pub fn evaluate<P: SearchProblem>(
        &self,
        problem: &P,
        node: &SearchNode<P::State, P::Action>,
    ) -> f64 {
        match self {
            Evaluation::Constant => 0.,
            Evaluation::PathCost => node.get_g(),
            Evaluation::Heuristic => problem.heuristic(node.get_state()),
            Evaluation::PathCostPlusHeuristic => {
                node.get_g() + problem.heuristic(node.get_state())
            }
        }
    }
}

/// Generic search loop: pop a node, goal-test it, and otherwise expand it
/// into the frontier. In [`SearchMode::Graph`] a state is expanded at most
/// once; states are added to the closed list when popped, not when generated.
pub fn frontier_search<P, F>(
    problem: &mut P,
    mut frontier: F,
    mode: SearchMode,
    evaluation: Evaluation,
) -> SearchResult<P::State, P::Action>
where
    P: SearchProblem,
    F: Frontier,
{
    let mut search_space = SearchSpace::new(problem.initial_state());
    let mut closed = HashSet::new();

    let root_id = search_space.root_id();
    frontier.push(
        root_id,
        evaluation.evaluate(problem, search_space.get_node(root_id)),
    );

    while let Some(node_id) = frontier.pop() {
        let state = search_space.get_node(node_id).get_state().clone();
        if problem.is_goal(&state) {
            return SearchResult::Success(search_space.extract_solution(node_id));
        }
        if mode == SearchMode::Graph && !closed.insert(state) {
            continue;
        }
        for child_id in search_space.expand(problem, node_id) {
            let priority = evaluation.evaluate(problem, search_space.get_node(child_id));
            frontier.push(child_id, priority);
        }
    }

    SearchResult::Unsolvable
}
