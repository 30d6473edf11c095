mod graph_map;
mod maps;
mod random_graph;

pub use graph_map::{GraphMap, GraphNode, Location, NO_EDGE_COST};
pub use maps::{australia_map, romania_map};
pub use random_graph::{random_graph, RandomGraphConfig, CURVATURE};
