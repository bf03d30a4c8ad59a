use crate::engine::{Configuration, Coord, Direction};
use crate::error::SolveError;
use crate::heuristics::Heuristic;
use crate::utils::path_to_directions;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::sync::atomic::{self, AtomicBool};

/// Solver settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Distance estimate used to order the frontier.
    pub heuristic: Heuristic,

    /// Stop with `SolveError::ExpansionLimit` once this many states have been expanded.
    pub max_expansions: Option<usize>,

    /// Report an unsolvable start as `SolveError::NoSolutionFound` without searching.
    /// When `false` the whole reachable state space is explored before giving up.
    pub reject_unsolvable: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::default(),
            max_expansions: None,
            reject_unsolvable: true,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier and expanded.
    pub expanded: usize,
    /// Successors produced by the move generator.
    pub generated: usize,
    /// Frontier entries discarded because a cheaper path to their state was found later.
    pub skipped: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Represents a solution found by the solver.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Blank coordinates from start to goal. The first entry is the blank's starting
    /// coordinate, each later entry is where the blank is after one more slide.
    pub path: Vec<Coord>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of slides in the solution.
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The direction the blank travels at each slide.
    pub fn directions(&self) -> Vec<Direction> {
        path_to_directions(&self.path)
    }
}

/// Lifecycle of a `Search`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Solved(Vec<Coord>),
    Exhausted,
}

/// Outcome of a single `Search::step`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// A state with the given `f` and `g` was expanded.
    Expanded { f: u32, g: u32 },
    /// A stale frontier entry was discarded.
    Skipped,
    Solved(Vec<Coord>),
    Exhausted,
}

struct FrontierEntry {
    f: u32,
    g: u32,
    seq: u64,
    configuration: Configuration,
    history: Vec<Coord>,
}

// BinaryHeap is a max-heap, so the comparison is reversed: the greatest entry is the one
// with the lowest f, then the lowest g, then the earliest insertion.
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// An A* search over 8-puzzle configurations, advanced one frontier pop at a time.
///
/// The frontier is ordered by ascending `f = g + h`; ties go to the lower `g`, then to
/// the entry inserted first, so results are reproducible. The cost table maps each
/// configuration's key to the cheapest `g` found so far and only ever grows.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::GOAL;
/// use eight_puzzle::heuristics::Heuristic;
/// use eight_puzzle::solver::{Search, SearchStep};
///
/// let mut search = Search::new(GOAL, Heuristic::Manhattan);
/// assert_eq!(search.step(), SearchStep::Solved(vec![GOAL.blank_position()]));
/// ```
pub struct Search {
    heuristic: Heuristic,
    frontier: BinaryHeap<FrontierEntry>,
    cost_table: HashMap<u64, u32>,
    next_seq: u64,
    stats: SearchStats,
    state: SearchState,
}

impl Search {
    /// Seeds the frontier with `start` and the cost table with `start -> 0`.
    pub fn new(start: Configuration, heuristic: Heuristic) -> Self {
        let mut search = Search {
            heuristic,
            frontier: BinaryHeap::new(),
            cost_table: HashMap::new(),
            next_seq: 0,
            stats: SearchStats::default(),
            state: SearchState::Running,
        };
        search.cost_table.insert(start.key(), 0);
        search.push(0, start, vec![start.blank_position()]);
        search
    }

    fn push(&mut self, g: u32, configuration: Configuration, history: Vec<Coord>) {
        let f = g + self.heuristic.estimate(&configuration);
        self.frontier.push(FrontierEntry {
            f,
            g,
            seq: self.next_seq,
            configuration,
            history,
        });
        self.next_seq += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct configurations discovered so far.
    pub fn visited(&self) -> usize {
        self.cost_table.len()
    }

    /// Pops the lowest-`f` entry and either finishes the search or expands it.
    ///
    /// Once the search is solved or exhausted, further calls repeat the final outcome.
    pub fn step(&mut self) -> SearchStep {
        match &self.state {
            SearchState::Solved(path) => return SearchStep::Solved(path.clone()),
            SearchState::Exhausted => return SearchStep::Exhausted,
            SearchState::Running => {}
        }

        let Some(entry) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return SearchStep::Exhausted;
        };

        let best = self.cost_table.get(&entry.configuration.key()).copied();
        if best.is_some_and(|best| entry.g > best) {
            self.stats.skipped += 1;
            return SearchStep::Skipped;
        }

        if entry.configuration.is_goal() {
            self.state = SearchState::Solved(entry.history.clone());
            return SearchStep::Solved(entry.history);
        }

        self.stats.expanded += 1;
        log::trace!(
            "expanding f={} g={} blank={} frontier={}",
            entry.f,
            entry.g,
            entry.configuration.blank_position(),
            self.frontier.len()
        );

        let g = entry.g + 1;
        for successor in entry.configuration.successors() {
            self.stats.generated += 1;
            let key = successor.key();
            let improves = match self.cost_table.get(&key) {
                Some(&known) => g < known,
                None => true,
            };
            if improves {
                self.cost_table.insert(key, g);
                let mut history = entry.history.clone();
                history.push(successor.blank_position());
                self.push(g, successor, history);
            }
        }

        SearchStep::Expanded {
            f: entry.f,
            g: entry.g,
        }
    }

    /// Steps until the search terminates.
    ///
    /// `cancel` is checked once per frontier pop. `max_expansions` bounds the number of
    /// expanded states.
    pub fn run(
        &mut self,
        cancel: Option<&AtomicBool>,
        max_expansions: Option<usize>,
    ) -> Result<Vec<Coord>, SolveError> {
        loop {
            if cancel.is_some_and(|flag| flag.load(atomic::Ordering::Relaxed)) {
                return Err(SolveError::Cancelled {
                    expanded: self.stats.expanded,
                });
            }
            match self.step() {
                SearchStep::Solved(path) => return Ok(path),
                SearchStep::Exhausted => return Err(SolveError::NoSolutionFound),
                SearchStep::Expanded { .. } => {
                    if let Some(limit) = max_expansions {
                        if self.stats.expanded >= limit {
                            return Err(SolveError::ExpansionLimit { limit });
                        }
                    }
                }
                SearchStep::Skipped => {}
            }
        }
    }
}

/// Finds a minimum-move solution from `start` with the default `SolverConfig`.
///
/// # Examples
/// ```
/// use eight_puzzle::solver::solve;
/// use eight_puzzle::utils::configuration_from_str_array;
///
/// let start = configuration_from_str_array(&["123", "456", "7.8"]).unwrap();
/// let solution = solve(&start).unwrap();
/// assert_eq!(solution.move_count(), 1);
/// assert_eq!(solution.path.len(), 2);
/// ```
pub fn solve(start: &Configuration) -> Result<Solution, SolveError> {
    solve_with_config(start, &SolverConfig::default())
}

pub fn solve_with_config(
    start: &Configuration,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    drive(start, config, None)
}

/// Like `solve_with_config`, but gives up with `SolveError::Cancelled` as soon as
/// `cancel` is observed set. The flag is checked once per frontier pop.
pub fn solve_with_cancel(
    start: &Configuration,
    config: &SolverConfig,
    cancel: &AtomicBool,
) -> Result<Solution, SolveError> {
    drive(start, config, Some(cancel))
}

fn drive(
    start: &Configuration,
    config: &SolverConfig,
    cancel: Option<&AtomicBool>,
) -> Result<Solution, SolveError> {
    if config.reject_unsolvable && !start.is_solvable() {
        log::warn!("start configuration is unsolvable:\n{}", start);
        return Err(SolveError::NoSolutionFound);
    }

    log::debug!(
        "starting A* with {} heuristic, h(start)={}",
        config.heuristic,
        config.heuristic.estimate(start)
    );
    let mut search = Search::new(*start, config.heuristic);
    let result = search.run(cancel, config.max_expansions);
    let stats = *search.stats();
    log::debug!(
        "search finished: expanded={} generated={} skipped={} max_frontier={} visited={}",
        stats.expanded,
        stats.generated,
        stats.skipped,
        stats.max_frontier,
        search.visited()
    );

    result.map(|path| Solution { path, stats })
}
