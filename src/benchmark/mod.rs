mod comparison;
mod harness;
mod record;

pub use comparison::Comparison;
pub use harness::{compare_searchers, run_many, run_one, BenchmarkMatrix};
pub use record::BenchmarkRecord;
