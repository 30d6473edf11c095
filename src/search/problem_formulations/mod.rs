mod graph_problem;
mod instrumented_problem;
mod nqueens_problem;
mod search_problem;

pub use graph_problem::GraphProblem;
pub use instrumented_problem::{InstrumentedProblem, ProblemCounters};
pub use nqueens_problem::{Board, NQueensProblem, Placement};
pub use search_problem::SearchProblem;
