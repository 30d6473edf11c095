pub mod problem_formulations;
mod search_node;
pub mod search_engines;
mod search_space;
mod solution;
mod verbosity;

pub use problem_formulations::SearchProblem;
pub use search_node::{NodeId, SearchNode};
pub use search_space::SearchSpace;
pub use solution::Solution;
pub use verbosity::Verbosity;
