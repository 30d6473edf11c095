//! Random geometric graphs. Nodes are scattered uniformly over a canvas and
//! each node is joined to its nearest not-yet-adjacent nodes until it has at
//! least `min_links` neighbours. Any components left apart are then joined by
//! their closest pair of nodes. Edge costs are the straight-line distance
//! stretched by a random curvature factor, which keeps the straight-line
//! distance heuristic admissible.

use crate::{
    error::GraphError,
    graphs::{GraphMap, Location},
};
use itertools::Itertools;
use petgraph::unionfind::UnionFind;
use rand::Rng;
use serde::Deserialize;
use std::{collections::HashSet, ops::RangeInclusive};
use tracing::debug;

/// Range of the factor applied to the straight-line distance of each edge.
pub const CURVATURE: RangeInclusive<f64> = 1.1..=1.5;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomGraphConfig {
    /// Number of nodes, labelled `0..nodes`
    pub nodes: usize,
    /// Minimum number of neighbours per node, capped at `nodes - 1`
    pub min_links: usize,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

fn default_width() -> f64 {
    400.
}

fn default_height() -> f64 {
    300.
}

impl RandomGraphConfig {
    pub fn new(nodes: usize, min_links: usize, width: f64, height: f64) -> Self {
        Self {
            nodes,
            min_links,
            width,
            height,
        }
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        if self.nodes == 0 {
            return Err(GraphError::InvalidConfig(
                "a random graph needs at least one node".to_string(),
            ));
        }
        for (name, extent) in [("width", self.width), ("height", self.height)] {
            if !extent.is_finite() || extent <= 0. {
                return Err(GraphError::InvalidConfig(format!(
                    "canvas {} must be positive and finite, got {}",
                    name, extent
                )));
            }
        }
        Ok(())
    }
}

impl Default for RandomGraphConfig {
    fn default() -> Self {
        Self::new(10, 2, default_width(), default_height())
    }
}

/// Generate a random graph according to `config`, drawing every coordinate
/// and curvature factor from `rng`. The result is a pure function of the
/// config and the state of `rng`.
///
/// Nodes are processed in ascending order. Edges added for earlier nodes count
/// towards the degree of later ones, so early nodes can end up with more than
/// `min_links` neighbours. The returned graph is always connected.
pub fn random_graph<R: Rng>(
    config: &RandomGraphConfig,
    rng: &mut R,
) -> Result<GraphMap<usize>, GraphError> {
    config.validate()?;

    let locations: Vec<Location> = (0..config.nodes)
        .map(|_| {
            Location::new(
                rng.random_range(0.0..=config.width),
                rng.random_range(0.0..=config.height),
            )
        })
        .collect();

    let mut graph = GraphMap::new();
    for (node, location) in locations.iter().enumerate() {
        graph.add_node(node, *location);
    }

    for node in 0..config.nodes {
        let neighbours: HashSet<usize> = graph
            .neighbors(node)?
            .into_iter()
            .map(|(neighbour, _)| neighbour)
            .collect();
        let missing = config.min_links.saturating_sub(neighbours.len());
        if missing == 0 {
            continue;
        }

        let here = locations[node];
        let nearest = (0..config.nodes)
            .filter(|other| *other != node && !neighbours.contains(other))
            .map(|other| (other, locations[other].distance(&here)))
            .sorted_by(|(a, a_distance), (b, b_distance)| {
                a_distance.total_cmp(b_distance).then(a.cmp(b))
            })
            .take(missing);

        for (other, distance) in nearest {
            let curvature = rng.random_range(CURVATURE);
            graph.add_edge(node, other, distance * curvature)?;
        }
    }

    join_components(&mut graph, &locations, rng)?;

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        min_links = config.min_links,
        "generated random graph"
    );
    Ok(graph)
}

/// Add the shortest edge between two different components until only one
/// component is left. Ties are broken by the node pair in ascending order.
fn join_components<R: Rng>(
    graph: &mut GraphMap<usize>,
    locations: &[Location],
    rng: &mut R,
) -> Result<(), GraphError> {
    let mut components = UnionFind::new(locations.len());
    let mut count = locations.len();
    for node in 0..locations.len() {
        for (neighbour, _) in graph.neighbors(node)? {
            if components.union(node, neighbour) {
                count -= 1;
            }
        }
    }

    while count > 1 {
        let closest = (0..locations.len())
            .tuple_combinations()
            .filter(|&(a, b)| !components.equiv(a, b))
            .map(|(a, b)| (a, b, locations[a].distance(&locations[b])))
            .min_by(|(a, b, distance), (c, d, other)| {
                distance.total_cmp(other).then((a, b).cmp(&(c, d)))
            });
        let Some((a, b, distance)) = closest else {
            break;
        };

        let curvature = rng.random_range(CURVATURE);
        graph.add_edge(a, b, distance * curvature)?;
        components.union(a, b);
        count -= 1;
        debug!(a, b, remaining = count, "joined random graph components");
    }
    Ok(())
}
