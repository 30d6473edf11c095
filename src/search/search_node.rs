/// Index of a node inside a [`SearchSpace`].
///
/// [`SearchSpace`]: crate::search::SearchSpace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub fn id(&self) -> usize {
        self.0
    }
}

/// A [`SearchNode`] is a node in the search tree. It contains the state it
/// represents together with information specific to the search, such as the
/// accumulated path cost and the parent node.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// State represented by the node
    state: S,
    /// Parent node, `None` for the root
    parent_id: Option<NodeId>,
    /// Action that led from the parent to this node
    action: Option<A>,
    /// G-value of the node, i.e. the cost of the path to reach this node
    g: f64,
    /// Number of actions on the path from the root
    depth: usize,
}

impl<S, A> SearchNode<S, A> {
    /// Create the root node of a search. For non-root nodes see
    /// [`SearchNode::new_with_parent`].
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            parent_id: None,
            action: None,
            g: 0.,
            depth: 0,
        }
    }

    pub fn new_with_parent(parent_id: NodeId, action: A, state: S, g: f64, depth: usize) -> Self {
        Self {
            state,
            parent_id: Some(parent_id),
            action: Some(action),
            g,
            depth,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_g(&self) -> f64 {
        self.g
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }
}
