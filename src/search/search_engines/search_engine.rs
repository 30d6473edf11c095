use crate::search::{
    search_engines::{
        BestFirstSearch, BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch,
        IterativeDeepeningSearch,
    },
    SearchProblem, Solution,
};
use serde::Deserialize;
use std::fmt::Debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<S, A> {
    /// The search was successful
    Success(Solution<S, A>),
    /// The search exhausted the reachable space without finding a goal
    Unsolvable,
    /// A depth-limited search hit its limit before finding a goal, so deeper
    /// solutions may still exist
    Cutoff,
}

impl<S, A> SearchResult<S, A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match self {
            SearchResult::Success(solution) => Some(solution),
            _ => None,
        }
    }
}

pub trait SearchEngine: Debug {
    fn search<P: SearchProblem>(&mut self, problem: &mut P) -> SearchResult<P::State, P::Action>;
}

/// Whether a search keeps a closed list of expanded states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// States may be expanded again if reached along another path
    Tree,
    /// Each state is expanded at most once
    Graph,
}

#[derive(clap::ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(name = "bfts", help = "Breadth-first tree search.")]
    #[serde(rename = "bfts")]
    BreadthFirstTree,
    #[clap(name = "bfgs", help = "Breadth-first graph search.")]
    #[serde(rename = "bfgs")]
    BreadthFirstGraph,
    #[clap(
        name = "dfts",
        help = "Depth-first tree search. Does not terminate on cyclic state spaces."
    )]
    #[serde(rename = "dfts")]
    DepthFirstTree,
    #[clap(name = "dfgs", help = "Depth-first graph search.")]
    #[serde(rename = "dfgs")]
    DepthFirstGraph,
    #[clap(name = "dls", help = "Depth-limited search with the default limit.")]
    #[serde(rename = "dls")]
    DepthLimited,
    #[clap(name = "ids", help = "Iterative deepening search.")]
    #[serde(rename = "ids")]
    IterativeDeepening,
    #[clap(name = "ucs", help = "Uniform-cost search.")]
    #[serde(rename = "ucs")]
    UniformCost,
    #[clap(name = "greedy", help = "Greedy best-first search on the heuristic.")]
    #[serde(rename = "greedy")]
    GreedyBestFirst,
    #[clap(name = "astar", help = "A* search.")]
    #[serde(rename = "astar")]
    AStar,
}

impl SearchEngineName {
    /// The engines compared by default. Depth-first tree search is left out
    /// since it does not terminate on cyclic state spaces.
    pub const DEFAULTS: [SearchEngineName; 8] = [
        SearchEngineName::BreadthFirstTree,
        SearchEngineName::BreadthFirstGraph,
        SearchEngineName::DepthFirstGraph,
        SearchEngineName::DepthLimited,
        SearchEngineName::IterativeDeepening,
        SearchEngineName::UniformCost,
        SearchEngineName::GreedyBestFirst,
        SearchEngineName::AStar,
    ];

    /// Run a freshly constructed engine of this kind on `problem`.
    pub fn search<P: SearchProblem>(&self, problem: &mut P) -> SearchResult<P::State, P::Action> {
        match self {
            SearchEngineName::BreadthFirstTree => {
                BreadthFirstSearch::new(SearchMode::Tree).search(problem)
            }
            SearchEngineName::BreadthFirstGraph => {
                BreadthFirstSearch::new(SearchMode::Graph).search(problem)
            }
            SearchEngineName::DepthFirstTree => {
                DepthFirstSearch::new(SearchMode::Tree).search(problem)
            }
            SearchEngineName::DepthFirstGraph => {
                DepthFirstSearch::new(SearchMode::Graph).search(problem)
            }
            SearchEngineName::DepthLimited => DepthLimitedSearch::default().search(problem),
            SearchEngineName::IterativeDeepening => IterativeDeepeningSearch::new().search(problem),
            SearchEngineName::UniformCost => BestFirstSearch::uniform_cost().search(problem),
            SearchEngineName::GreedyBestFirst => BestFirstSearch::greedy().search(problem),
            SearchEngineName::AStar => BestFirstSearch::astar().search(problem),
        }
    }

    /// Short label used as the row header of benchmark tables.
    pub fn label(&self) -> &'static str {
        match self {
            SearchEngineName::BreadthFirstTree => "breadth_first_tree_search",
            SearchEngineName::BreadthFirstGraph => "breadth_first_graph_search",
            SearchEngineName::DepthFirstTree => "depth_first_tree_search",
            SearchEngineName::DepthFirstGraph => "depth_first_graph_search",
            SearchEngineName::DepthLimited => "depth_limited_search",
            SearchEngineName::IterativeDeepening => "iterative_deepening_search",
            SearchEngineName::UniformCost => "uniform_cost_search",
            SearchEngineName::GreedyBestFirst => "greedy_best_first_search",
            SearchEngineName::AStar => "astar_search",
        }
    }
}
