use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use eight_puzzle::engine::{Configuration, Puzzle};
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solver::{solve_with_config, SolverConfig};
use eight_puzzle::utils::configuration_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HeuristicArg {
    Manhattan,
    ManhattanWithBlank,
    MisplacedTiles,
}

impl From<HeuristicArg> for Heuristic {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Manhattan => Heuristic::Manhattan,
            HeuristicArg::ManhattanWithBlank => Heuristic::ManhattanWithBlank,
            HeuristicArg::MisplacedTiles => Heuristic::MisplacedTiles,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file (3 lines of 3 characters, `.` for the blank)
    board_file: Option<PathBuf>,

    /// Seed for a random solvable start, used when no board file is given
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Heuristic used to order the frontier
    #[clap(long, value_enum, default_value = "manhattan")]
    heuristic: HeuristicArg,

    /// Give up after expanding this many states
    #[clap(long)]
    max_expansions: Option<usize>,

    /// Log search progress
    #[clap(short, long)]
    verbose: bool,
}

fn read_board_file(path: &PathBuf) -> Result<Configuration> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    configuration_from_str_array(&lines)
        .with_context(|| format!("Invalid board format in {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut puzzle = Puzzle::new();
    match &args.board_file {
        Some(path) => {
            puzzle.set_configuration(read_board_file(path)?);
            println!("Loaded board from {}\n", path.display());
        }
        None => {
            puzzle.shuffle(args.seed);
            println!("Shuffled board (seed {})\n", args.seed);
        }
    }
    let start = *puzzle.configuration();

    let config = SolverConfig {
        heuristic: args.heuristic.into(),
        max_expansions: args.max_expansions,
        ..SolverConfig::default()
    };
    if !config.heuristic.is_admissible() {
        log::warn!(
            "{} may overestimate; the path found is not guaranteed to be minimal",
            config.heuristic
        );
    }

    println!("Initial board state:\n{}\n", start);
    println!("Searching with {} heuristic...\n", config.heuristic);

    let solution = solve_with_config(&start, &config).context("Solver failed")?;

    println!("Solution found in {} moves:", solution.move_count());
    println!(
        "  Blank path: {}",
        solution
            .path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    println!();

    for (i, (target, direction)) in solution
        .path
        .iter()
        .skip(1)
        .zip(solution.directions())
        .enumerate()
    {
        if !puzzle.slide(*target) {
            anyhow::bail!("Solver returned an illegal slide to {}", target);
        }
        println!("Move {}: {}\n{}\n", i + 1, direction, puzzle.configuration());
    }

    println!(
        "Expanded {} states, generated {}, largest frontier {}.",
        solution.stats.expanded, solution.stats.generated, solution.stats.max_frontier
    );
    Ok(())
}
