//! Runs search engines against instrumented problems and collects what they
//! did. Every (engine, problem) pair gets its own fresh wrapper, so no run can
//! see the counters of another.

use crate::{
    benchmark::{BenchmarkRecord, Comparison},
    search::{
        problem_formulations::InstrumentedProblem, search_engines::SearchEngineName,
        SearchProblem,
    },
};
use std::{
    fmt::Debug,
    time::{Duration, Instant},
};
use tracing::info;

/// Run `engine` on a freshly instrumented `problem`.
///
/// Searches return fully built results, so by the time the counters are read
/// the run is complete.
pub fn run_one<P: SearchProblem>(
    engine: SearchEngineName,
    problem_label: &str,
    problem: P,
) -> BenchmarkRecord<P::State, P::Action> {
    let mut instrumented = InstrumentedProblem::new(problem);

    let start_time = Instant::now();
    let result = engine.search(&mut instrumented);
    let elapsed = start_time.elapsed();

    let counters = instrumented.counters();
    info!(
        engine = engine.label(),
        problem = problem_label,
        solved = result.is_success(),
        goal_tests = counters.goal_tests,
        successor_calls = counters.successor_calls,
        states_generated = counters.states_generated,
        elapsed = elapsed.as_secs_f64()
    );
    BenchmarkRecord::new(engine, problem_label, result, counters, elapsed)
}

/// Run every engine on a clone of every problem.
pub fn run_many<P: SearchProblem + Clone>(
    problems: &[(String, P)],
    engines: &[SearchEngineName],
) -> BenchmarkMatrix<P::State, P::Action> {
    let records: Vec<Vec<_>> = engines
        .iter()
        .map(|&engine| {
            problems
                .iter()
                .map(|(label, problem)| run_one(engine, label, problem.clone()))
                .collect()
        })
        .collect();
    BenchmarkMatrix {
        engines: engines.to_vec(),
        problem_labels: problems.iter().map(|(label, _)| label.clone()).collect(),
        records,
    }
}

/// Run every engine on every problem and tabulate the summaries.
pub fn compare_searchers<P: SearchProblem + Clone>(
    problems: &[(String, P)],
    engines: &[SearchEngineName],
) -> Comparison {
    run_many(problems, engines).comparison()
}

/// Records of a benchmark run, one row per engine and one column per problem.
#[derive(Debug, Clone)]
pub struct BenchmarkMatrix<S, A> {
    engines: Vec<SearchEngineName>,
    problem_labels: Vec<String>,
    records: Vec<Vec<BenchmarkRecord<S, A>>>,
}

impl<S: Debug, A> BenchmarkMatrix<S, A> {
    pub fn engines(&self) -> &[SearchEngineName] {
        &self.engines
    }

    pub fn problem_labels(&self) -> &[String] {
        &self.problem_labels
    }

    pub fn get(&self, engine_index: usize, problem_index: usize) -> Option<&BenchmarkRecord<S, A>> {
        self.records.get(engine_index)?.get(problem_index)
    }

    pub fn rows(&self) -> &[Vec<BenchmarkRecord<S, A>>] {
        &self.records
    }

    pub fn records(&self) -> impl Iterator<Item = &BenchmarkRecord<S, A>> {
        self.records.iter().flatten()
    }

    /// Engines as rows, problems as columns, summaries as cells.
    pub fn comparison(&self) -> Comparison {
        let mut headers = vec!["Searcher".to_string()];
        headers.extend(self.problem_labels.iter().cloned());
        let mut comparison = Comparison::new(headers);
        for (engine, row) in self.engines.iter().zip(&self.records) {
            let mut cells = vec![engine.label().to_string()];
            cells.extend(row.iter().map(BenchmarkRecord::summary));
            comparison.push_row(cells);
        }
        comparison
    }

    /// One row per run, additionally showing solution depth and cost, the
    /// effective branching factor and the wall-clock time.
    pub fn detailed_comparison(&self) -> Comparison {
        let headers = [
            "Searcher",
            "Problem",
            "Successors",
            "Goal tests",
            "States",
            "Found",
            "Depth",
            "Cost",
            "b*",
            "Time",
        ];
        let mut comparison = Comparison::new(headers.iter().map(|h| h.to_string()).collect());
        for record in self.records() {
            let counters = record.counters();
            let solution = record.result().solution();
            comparison.push_row(vec![
                record.engine().label().to_string(),
                record.problem_label().to_string(),
                counters.successor_calls.to_string(),
                counters.goal_tests.to_string(),
                counters.states_generated.to_string(),
                record.outcome(),
                solution.map_or("-".to_string(), |s| s.depth().to_string()),
                solution.map_or("-".to_string(), |s| format!("{:.1}", s.cost())),
                record
                    .effective_branching_factor()
                    .map_or("-".to_string(), |b| format!("{:.2}", b)),
                humantime::format_duration(truncate_to_micros(record.elapsed())).to_string(),
            ]);
        }
        comparison
    }
}

fn truncate_to_micros(duration: Duration) -> Duration {
    Duration::from_micros(duration.as_micros() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graphs::romania_map,
        search::{
            problem_formulations::{GraphProblem, NQueensProblem, ProblemCounters},
            search_engines::SearchResult,
        },
    };
    use std::rc::Rc;

    fn romania_problems() -> Vec<(String, GraphProblem<&'static str>)> {
        let map = Rc::new(romania_map());
        [("A", "B"), ("O", "N")]
            .into_iter()
            .map(|(start, goal)| {
                (
                    format!("Romania({}, {})", start, goal),
                    GraphProblem::new(map.clone(), start, goal).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn run_one_snapshots_counters() {
        let record = run_one(
            SearchEngineName::BreadthFirstTree,
            "2-queens",
            NQueensProblem::new(2),
        );
        assert_eq!(record.result(), &SearchResult::Unsolvable);
        assert_eq!(
            record.counters(),
            ProblemCounters {
                goal_tests: 7,
                successor_calls: 7,
                states_generated: 6,
            }
        );
        assert_eq!(record.problem_label(), "2-queens");
    }

    #[test]
    fn cells_do_not_depend_on_run_order() {
        let problems = romania_problems();
        let engines = [SearchEngineName::BreadthFirstGraph, SearchEngineName::AStar];
        let forward = run_many(&problems, &engines);

        let reversed_problems: Vec<_> = problems.iter().rev().cloned().collect();
        let reversed_engines: Vec<_> = engines.iter().rev().copied().collect();
        let backward = run_many(&reversed_problems, &reversed_engines);

        assert_eq!(forward.rows().len(), 2);
        for engine_index in 0..2 {
            assert_eq!(forward.rows()[engine_index].len(), 2);
            for problem_index in 0..2 {
                let a = forward.get(engine_index, problem_index).unwrap();
                let b = backward.get(1 - engine_index, 1 - problem_index).unwrap();
                assert_eq!(a.engine(), b.engine());
                assert_eq!(a.problem_label(), b.problem_label());
                assert_eq!(a.counters(), b.counters());
                assert_eq!(a.result(), b.result());
            }
        }
    }

    #[test]
    fn comparison_has_engine_rows_and_problem_columns() {
        let comparison = compare_searchers(
            &romania_problems(),
            &[SearchEngineName::UniformCost, SearchEngineName::GreedyBestFirst],
        );
        assert_eq!(
            comparison.headers(),
            &["Searcher", "Romania(A, B)", "Romania(O, N)"]
        );
        assert_eq!(
            comparison.row_labels(),
            vec!["uniform_cost_search", "greedy_best_first_search"]
        );
        assert!(comparison.rows()[0][1].ends_with("/B>"));
        assert!(comparison.rows()[1][2].ends_with("/N>"));
    }

    #[test]
    fn detailed_comparison_reports_solutions() {
        let matrix = run_many(&romania_problems()[..1], &[SearchEngineName::AStar]);
        let detailed = matrix.detailed_comparison();
        assert_eq!(detailed.rows().len(), 1);
        let row = &detailed.rows()[0];
        assert_eq!(row[0], "astar_search");
        assert_eq!(row[5], "B");
        assert_eq!(row[6], "4");
        assert_eq!(row[7], "418.0");
        assert_ne!(row[8], "-");
    }

    #[test]
    fn detailed_comparison_marks_failures() {
        let problems = vec![("3-queens".to_string(), NQueensProblem::new(3))];
        let matrix = run_many(&problems, &[SearchEngineName::BreadthFirstGraph]);
        let detailed = matrix.detailed_comparison();
        let row = &detailed.rows()[0];
        assert_eq!(row[5], "none");
        assert_eq!(&row[6..9], &["-", "-", "-"]);
    }

    #[test]
    fn comparisons_of_different_families_can_be_joined() {
        let engines = [SearchEngineName::BreadthFirstGraph, SearchEngineName::IterativeDeepening];
        let graphs = compare_searchers(&romania_problems(), &engines);
        let queens = compare_searchers(&[("4-queens".to_string(), NQueensProblem::new(4))], &engines);
        let joined = graphs.join(queens).unwrap();
        assert_eq!(joined.headers().len(), 4);
        assert_eq!(joined.headers()[3], "4-queens");
    }
}
