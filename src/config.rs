//! Benchmark suites. A suite names the engines to compare and the problem
//! instances to compare them on, and can be read from a TOML file:
//!
//! ```toml
//! engines = ["bfgs", "ids", "astar"]
//! romania = [["A", "B"], ["O", "N"]]
//! australia = [["Q", "WA"]]
//! nqueens = [4, 6]
//!
//! [random_graph]
//! nodes = 20
//! min_links = 3
//! seed = 42
//! routes = [[0, 19]]
//! ```

use crate::{
    benchmark::{run_many, BenchmarkMatrix, Comparison},
    error::{GraphError, SuiteError},
    graphs::{australia_map, random_graph, romania_map, GraphMap, RandomGraphConfig},
    search::{
        problem_formulations::{GraphProblem, NQueensProblem},
        search_engines::SearchEngineName,
        SearchProblem,
    },
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use std::{path::Path, rc::Rc};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    #[serde(default = "default_engines")]
    pub engines: Vec<SearchEngineName>,
    /// `[start, goal]` city pairs on the Romania map
    #[serde(default)]
    pub romania: Vec<[String; 2]>,
    /// `[start, goal]` region pairs on the Australia map
    #[serde(default)]
    pub australia: Vec<[String; 2]>,
    /// Board sizes
    #[serde(default)]
    pub nqueens: Vec<usize>,
    #[serde(default)]
    pub random_graph: Option<RandomGraphSuite>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RandomGraphSuite {
    pub nodes: usize,
    pub min_links: usize,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    pub seed: u64,
    /// `[start, goal]` node pairs. Defaults to the first and last node.
    #[serde(default)]
    pub routes: Vec<[usize; 2]>,
}

fn default_engines() -> Vec<SearchEngineName> {
    SearchEngineName::DEFAULTS.to_vec()
}

fn default_width() -> f64 {
    RandomGraphConfig::default().width
}

fn default_height() -> f64 {
    RandomGraphConfig::default().height
}

impl RandomGraphSuite {
    pub fn graph_config(&self) -> RandomGraphConfig {
        RandomGraphConfig::new(self.nodes, self.min_links, self.width, self.height)
    }

    /// Generate the graph from `seed`, so the same suite always benchmarks
    /// the same graph.
    pub fn generate(&self) -> Result<GraphMap<usize>, GraphError> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        random_graph(&self.graph_config(), &mut rng)
    }

    fn routes(&self) -> Vec<[usize; 2]> {
        if self.routes.is_empty() {
            vec![[0, self.nodes.saturating_sub(1)]]
        } else {
            self.routes.clone()
        }
    }
}

impl Default for SuiteConfig {
    /// The classic comparison: two routes on the Romania map and one on the
    /// Australia map.
    fn default() -> Self {
        Self {
            engines: default_engines(),
            romania: vec![
                ["A".to_string(), "B".to_string()],
                ["O".to_string(), "N".to_string()],
            ],
            australia: vec![["Q".to_string(), "WA".to_string()]],
            nqueens: vec![],
            random_graph: None,
        }
    }
}

impl SuiteConfig {
    pub fn from_path(path: &Path) -> Result<Self, SuiteError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SuiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&contents)
    }

    pub fn from_text(text: &str) -> Result<Self, SuiteError> {
        Ok(toml::from_str(text)?)
    }

    /// An empty suite with the given engines, to be filled in by the caller.
    pub fn with_engines(engines: Vec<SearchEngineName>) -> Self {
        Self {
            engines,
            romania: vec![],
            australia: vec![],
            nqueens: vec![],
            random_graph: None,
        }
    }

    /// Run every engine on every problem of the suite. Problem families are
    /// benchmarked separately and their tables combined: side by side for the
    /// summary table, one below the other for the detailed table.
    pub fn run(&self, detailed: bool) -> Result<Comparison, SuiteError> {
        info!(engines = self.engines.len(), "running benchmark suite");
        let mut tables = vec![];

        if !self.romania.is_empty() {
            let romania = Rc::new(romania_map());
            let problems = self.named_routes("Romania", &romania, &self.romania)?;
            tables.push(self.tabulate(&problems, detailed));
        }

        if !self.australia.is_empty() {
            let australia = Rc::new(australia_map());
            let problems = self.named_routes("Australia", &australia, &self.australia)?;
            tables.push(self.tabulate(&problems, detailed));
        }

        if !self.nqueens.is_empty() {
            let problems: Vec<(String, NQueensProblem)> = self
                .nqueens
                .iter()
                .map(|&size| (format!("{}-queens", size), NQueensProblem::new(size)))
                .collect();
            tables.push(self.tabulate(&problems, detailed));
        }

        if let Some(suite) = &self.random_graph {
            let graph = Rc::new(suite.generate()?);
            let problems = suite
                .routes()
                .into_iter()
                .map(|[start, goal]| {
                    Ok((
                        format!("Random({}, {})", start, goal),
                        GraphProblem::new(graph.clone(), start, goal)?,
                    ))
                })
                .collect::<Result<Vec<_>, GraphError>>()?;
            tables.push(self.tabulate(&problems, detailed));
        }

        let mut tables = tables.into_iter();
        let Some(first) = tables.next() else {
            return Ok(self.empty_table(detailed));
        };
        let combined = tables.try_fold(first, |combined, table| {
            if detailed {
                combined.append(table)
            } else {
                combined.join(table)
            }
        })?;
        Ok(combined)
    }

    fn named_routes(
        &self,
        map_name: &str,
        map: &Rc<GraphMap<&'static str>>,
        routes: &[[String; 2]],
    ) -> Result<Vec<(String, GraphProblem<&'static str>)>, GraphError> {
        routes
            .iter()
            .map(|[start, goal]| {
                let start = static_label(map, start)?;
                let goal = static_label(map, goal)?;
                Ok((
                    format!("{}({}, {})", map_name, start, goal),
                    GraphProblem::new(map.clone(), start, goal)?,
                ))
            })
            .collect()
    }

    fn tabulate<P>(&self, problems: &[(String, P)], detailed: bool) -> Comparison
    where
        P: SearchProblem + Clone,
    {
        let matrix: BenchmarkMatrix<P::State, P::Action> = run_many(problems, &self.engines);
        if detailed {
            matrix.detailed_comparison()
        } else {
            matrix.comparison()
        }
    }

    fn empty_table(&self, detailed: bool) -> Comparison {
        let empty: BenchmarkMatrix<usize, usize> =
            run_many::<GraphProblem<usize>>(&[], &self.engines);
        if detailed {
            empty.detailed_comparison()
        } else {
            empty.comparison()
        }
    }
}

/// Resolve a label read from a file to the label stored in a built-in map.
fn static_label(map: &GraphMap<&'static str>, label: &str) -> Result<&'static str, GraphError> {
    map.nodes()
        .find(|node| *node == label)
        .ok_or_else(|| GraphError::NodeNotFound(label.to_string()))
}
