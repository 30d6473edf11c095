use crate::search::{NodeId, SearchNode, SearchProblem, Solution};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during a single search. Nodes
/// refer to their parents by [`NodeId`], so a solution path can be recovered
/// from any node without reference counting.
///
/// Unlike a closed list, the search space never merges duplicate states: tree
/// searches legitimately revisit a state along different paths.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S: Clone, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(initial_state));
        Self { nodes }
    }

    #[inline(always)]
    pub fn root_id(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Generate the children of `node_id`, in the order the problem lists its
    /// successors, and return their ids.
    pub fn expand<P>(&mut self, problem: &mut P, node_id: NodeId) -> Vec<NodeId>
    where
        P: SearchProblem<State = S, Action = A>,
    {
        let (state, g, depth) = {
            let node = self.get_node(node_id);
            (node.get_state().clone(), node.get_g(), node.get_depth())
        };

        problem
            .successors(&state)
            .into_iter()
            .map(|(action, successor)| {
                let child_g = problem.step_cost(&state, &action, &successor, g);
                self.push(SearchNode::new_with_parent(
                    node_id,
                    action,
                    successor,
                    child_g,
                    depth + 1,
                ))
            })
            .collect()
    }

    /// Walk parent links back to the root and build the [`Solution`] ending at
    /// `goal_id`.
    pub fn extract_solution(&self, goal_id: NodeId) -> Solution<S, A> {
        let goal_node = self.get_node(goal_id);
        let mut states = vec![];
        let mut actions = vec![];
        let mut current_node = goal_node;
        loop {
            states.push(current_node.get_state().clone());
            if let Some(action) = current_node.get_action() {
                actions.push(action.clone());
            }
            match current_node.get_parent_id() {
                Some(parent_id) => current_node = self.get_node(parent_id),
                None => break,
            }
        }
        states.reverse();
        actions.reverse();
        Solution::new(states, actions, goal_node.get_g())
    }

    fn push(&mut self, node: SearchNode<S, A>) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        node_id
    }
}
