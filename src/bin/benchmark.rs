use clap::{Parser, Subcommand};
use searchbench::{
    config::{RandomGraphSuite, SuiteConfig},
    error::SuiteError,
    search::{search_engines::SearchEngineName, Verbosity},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Compare search engines by how often they call into the problems they
/// solve.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(
        value_enum,
        help = "The search engines to compare, defaults to every engine except \
        depth-first tree search",
        short = 'e',
        long = "engine",
        id = "ENGINE"
    )]
    engines: Vec<SearchEngineName>,
    #[arg(
        help = "Print one row per run with depth, cost, effective branching \
        factor and time",
        short = 'd',
        long = "detailed"
    )]
    detailed: bool,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route finding on the Romania and Australia maps.
    Maps,
    /// Place N queens on an N by N board, one column at a time.
    Nqueens {
        #[arg(
            help = "Board sizes to benchmark",
            short = 's',
            long = "size",
            id = "SIZE",
            default_values_t = [4, 6]
        )]
        sizes: Vec<usize>,
    },
    /// Route finding on a randomly generated geometric graph.
    Random {
        #[arg(help = "Number of nodes", short = 'n', long = "nodes", default_value_t = 20)]
        nodes: usize,
        #[arg(
            help = "Minimum number of neighbours per node",
            short = 'l',
            long = "min-links",
            default_value_t = 3
        )]
        min_links: usize,
        #[arg(help = "Canvas width", long = "width", default_value_t = 400.)]
        width: f64,
        #[arg(help = "Canvas height", long = "height", default_value_t = 300.)]
        height: f64,
        #[arg(help = "Seed of the random number generator", long = "seed", default_value_t = 0)]
        seed: u64,
    },
    /// Run a suite described in a TOML file.
    Suite {
        #[arg(help = "The suite file")]
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let suite = match suite(&cli) {
        Ok(suite) => suite,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match suite.run(cli.detailed) {
        Ok(table) => {
            info!("benchmark finished");
            println!("{}", table);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn suite(cli: &Cli) -> Result<SuiteConfig, SuiteError> {
    let mut suite = match &cli.command {
        Commands::Maps => SuiteConfig::default(),
        Commands::Nqueens { sizes } => {
            let mut suite = SuiteConfig::with_engines(SearchEngineName::DEFAULTS.to_vec());
            suite.nqueens = sizes.clone();
            suite
        }
        Commands::Random {
            nodes,
            min_links,
            width,
            height,
            seed,
        } => {
            let mut suite = SuiteConfig::with_engines(SearchEngineName::DEFAULTS.to_vec());
            suite.random_graph = Some(RandomGraphSuite {
                nodes: *nodes,
                min_links: *min_links,
                width: *width,
                height: *height,
                seed: *seed,
                routes: vec![],
            });
            suite
        }
        Commands::Suite { path } => SuiteConfig::from_path(path)?,
    };
    if !cli.engines.is_empty() {
        suite.engines = cli.engines.clone();
    }
    Ok(suite)
}
