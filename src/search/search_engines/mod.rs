mod best_first;
mod breadth_first;
mod depth_first;
mod depth_limited;
mod frontier;
mod search_engine;

pub use best_first::BestFirstSearch;
pub use breadth_first::BreadthFirstSearch;
pub use depth_first::DepthFirstSearch;
pub use depth_limited::{DepthLimitedSearch, IterativeDeepeningSearch, DEFAULT_DEPTH_LIMIT};
pub use frontier::{
    frontier_search, Evaluation, FifoFrontier, Frontier, LifoFrontier, PriorityFrontier,
};
pub use search_engine::{SearchEngine, SearchEngineName, SearchMode, SearchResult};
