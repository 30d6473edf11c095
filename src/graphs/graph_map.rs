//! Weighted graphs whose nodes carry a position in the plane. The positions
//! are only used to compute straight-line distance heuristics; connectivity is
//! given entirely by the edges.

use crate::error::GraphError;
use petgraph::{
    graphmap::{self, NodeTrait},
    EdgeType, Undirected,
};
use std::{collections::HashMap, fmt::Debug};

/// Returned by [`GraphMap::cost_between`] when there is no direct edge.
pub const NO_EDGE_COST: f64 = f64::INFINITY;

/// Node labels usable in a [`GraphMap`]. Blanket-implemented for anything
/// petgraph accepts as a graph map node, such as `&'static str` or `usize`.
pub trait GraphNode: NodeTrait + Debug {}

impl<N: NodeTrait + Debug> GraphNode for N {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A weighted graph together with a location for every node.
///
/// Every node must be registered through [`GraphMap::add_node`] before an edge
/// can reference it, so every endpoint of every edge has a location. For the
/// default [`Undirected`] edge type, an edge `a - b` is visible from both
/// endpoints with the same cost.
#[derive(Debug, Clone)]
pub struct GraphMap<N: GraphNode, Ty: EdgeType = Undirected> {
    graph: graphmap::GraphMap<N, f64, Ty>,
    locations: HashMap<N, Location>,
}

impl<N: GraphNode, Ty: EdgeType> GraphMap<N, Ty> {
    pub fn new() -> Self {
        Self {
            graph: graphmap::GraphMap::new(),
            locations: HashMap::new(),
        }
    }

    /// Build a graph from node locations and an edge list, failing if an
    /// edge references a node without a location.
    pub fn from_edges<L>(
        locations: impl IntoIterator<Item = (N, L)>,
        edges: impl IntoIterator<Item = (N, N, f64)>,
    ) -> Result<Self, GraphError>
    where
        L: Into<Location>,
    {
        let mut graph = Self::new();
        for (node, location) in locations {
            graph.add_node(node, location.into());
        }
        for (a, b, cost) in edges {
            graph.add_edge(a, b, cost)?;
        }
        Ok(graph)
    }

    /// Register `node` at `location`, moving it if it is already present.
    pub fn add_node(&mut self, node: N, location: Location) {
        self.graph.add_node(node);
        self.locations.insert(node, location);
    }

    /// Add an edge from `a` to `b`, and from `b` to `a` for undirected graphs.
    /// Re-adding an existing edge overwrites its cost. Costs must be finite
    /// and non-negative.
    pub fn add_edge(&mut self, a: N, b: N, cost: f64) -> Result<(), GraphError> {
        if !cost.is_finite() || cost < 0. {
            return Err(GraphError::InvalidCost(format!(
                "{:?} - {:?} costs {}",
                a, b, cost
            )));
        }
        self.check_registered(a)?;
        self.check_registered(b)?;
        self.graph.add_edge(a, b, cost);
        Ok(())
    }

    /// Outgoing `(neighbour, cost)` pairs of `node` in insertion order.
    pub fn neighbors(&self, node: N) -> Result<Vec<(N, f64)>, GraphError> {
        self.check_registered(node)?;
        Ok(self
            .graph
            .edges(node)
            .map(|(_, neighbor, &cost)| (neighbor, cost))
            .collect())
    }

    pub fn location(&self, node: N) -> Result<Location, GraphError> {
        self.locations
            .get(&node)
            .copied()
            .ok_or_else(|| GraphError::NodeNotFound(format!("{:?}", node)))
    }

    /// The cost of the direct edge from `a` to `b`, or [`NO_EDGE_COST`] if
    /// there is none. This is not a shortest path query.
    pub fn cost_between(&self, a: N, b: N) -> f64 {
        self.graph
            .edge_weight(a, b)
            .copied()
            .unwrap_or(NO_EDGE_COST)
    }

    pub fn contains_node(&self, node: N) -> bool {
        self.graph.contains_node(node)
    }

    pub fn degree(&self, node: N) -> Result<usize, GraphError> {
        self.check_registered(node)?;
        Ok(self.graph.edges(node).count())
    }

    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.graph.nodes()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of connected components, ignoring edge direction.
    pub fn component_count(&self) -> usize {
        petgraph::algo::connected_components(&self.graph)
    }

    fn check_registered(&self, node: N) -> Result<(), GraphError> {
        if self.graph.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(format!("{:?}", node)))
        }
    }
}

impl<N: GraphNode, Ty: EdgeType> Default for GraphMap<N, Ty> {
    fn default() -> Self {
        Self::new()
    }
}
