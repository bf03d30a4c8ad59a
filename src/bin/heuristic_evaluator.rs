use eight_puzzle::engine::Configuration;
use eight_puzzle::heuristics::Heuristic;
use eight_puzzle::solver::{solve_with_config, SolverConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashMap;

const NUM_RANDOM_BOARDS_FOR_EVALUATION: usize = 20;
const START_SEED: u64 = 0;

#[derive(Default)]
struct Tally {
    moves: Vec<usize>,
    expanded: Vec<usize>,
    longer_than_baseline: usize,
}

fn average(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut tallies: HashMap<Heuristic, Tally> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards...",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );

    for board_idx in 0..NUM_RANDOM_BOARDS_FOR_EVALUATION {
        let current_seed = START_SEED + board_idx as u64;
        let mut rng = SmallRng::seed_from_u64(current_seed);
        let start = Configuration::random_solvable(&mut rng);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        // Moves found by the admissible default; every other heuristic is compared to it.
        let mut baseline: Option<usize> = None;

        for heuristic in Heuristic::ALL {
            let config = SolverConfig {
                heuristic,
                ..SolverConfig::default()
            };
            let solution = match solve_with_config(&start, &config) {
                Ok(solution) => solution,
                Err(e) => {
                    eprintln!(
                        "Warning: {} failed on board {} (Seed: {}): {}",
                        heuristic, board_idx, current_seed, e
                    );
                    continue;
                }
            };

            let moves = solution.move_count();
            let tally = tallies.entry(heuristic).or_default();
            let known_optimal = baseline;
            match known_optimal {
                None if heuristic == Heuristic::default() => baseline = Some(moves),
                Some(optimal) if moves > optimal => tally.longer_than_baseline += 1,
                _ => {}
            }
            println!(
                "  Heuristic: {:<20} Moves: {:<4} Expanded: {}",
                heuristic.to_string(),
                moves,
                solution.stats.expanded
            );
            tally.moves.push(moves);
            tally.expanded.push(solution.stats.expanded);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!(
        "Number of boards evaluated: {}",
        NUM_RANDOM_BOARDS_FOR_EVALUATION
    );
    println!("\n--- Averages ---");

    for heuristic in Heuristic::ALL {
        let Some(tally) = tallies.get(&heuristic) else {
            println!("Heuristic {}: No results recorded.", heuristic);
            continue;
        };
        println!(
            "Heuristic {:<20}: Average Moves = {:.2}, Average Expanded = {:.1}, Longer than optimal = {}",
            heuristic.to_string(),
            average(&tally.moves),
            average(&tally.expanded),
            tally.longer_than_baseline
        );
    }
}
