use crate::engine::{goal_position_of, Configuration, BLANK, TILE_COUNT};
use std::fmt;

/// Distance estimates from a configuration to the goal.
///
/// All variants return 0 iff the configuration is the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heuristic {
    /// Manhattan distance summed over the 8 numbered tiles. Admissible and consistent, so
    /// A* returns a minimum-move path.
    #[default]
    Manhattan,
    /// Manhattan distance summed over all 9 identities, the blank included.
    ///
    /// One slide can lower this sum by 2 while the path cost grows by 1, so the estimate
    /// may exceed the true remaining distance and the search may return a longer path.
    ManhattanWithBlank,
    /// Number of numbered tiles away from their goal cell. Admissible but weaker than
    /// `Manhattan`.
    MisplacedTiles,
}

impl Heuristic {
    /// Every variant, in the order the evaluator reports them.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Manhattan,
        Heuristic::ManhattanWithBlank,
        Heuristic::MisplacedTiles,
    ];

    /// Estimates the number of moves from `configuration` to the goal.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::GOAL;
    /// use eight_puzzle::heuristics::Heuristic;
    /// assert_eq!(Heuristic::Manhattan.estimate(&GOAL), 0);
    /// ```
    pub fn estimate(self, configuration: &Configuration) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_distance(configuration),
            Heuristic::ManhattanWithBlank => manhattan_distance_with_blank(configuration),
            Heuristic::MisplacedTiles => misplaced_tiles(configuration),
        }
    }

    /// Whether the estimate never overestimates, i.e. whether A* results are optimal.
    pub fn is_admissible(self) -> bool {
        !matches!(self, Heuristic::ManhattanWithBlank)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Heuristic::Manhattan => "Manhattan",
            Heuristic::ManhattanWithBlank => "ManhattanWithBlank",
            Heuristic::MisplacedTiles => "MisplacedTiles",
        };
        write!(f, "{}", s)
    }
}

fn tile_distance(configuration: &Configuration, tile: usize) -> u32 {
    configuration
        .position_of(tile)
        .manhattan(goal_position_of(tile))
}

/// Sum of `|Δrow| + |Δcol|` over the 8 numbered tiles.
pub fn manhattan_distance(configuration: &Configuration) -> u32 {
    (0..TILE_COUNT)
        .filter(|&tile| tile != BLANK)
        .map(|tile| tile_distance(configuration, tile))
        .sum()
}

/// Sum of `|Δrow| + |Δcol|` over all 9 identities, including the blank's own distance.
pub fn manhattan_distance_with_blank(configuration: &Configuration) -> u32 {
    (0..TILE_COUNT)
        .map(|tile| tile_distance(configuration, tile))
        .sum()
}

/// Count of numbered tiles that are not on their goal coordinate.
pub fn misplaced_tiles(configuration: &Configuration) -> u32 {
    (0..TILE_COUNT)
        .filter(|&tile| tile != BLANK)
        .filter(|&tile| configuration.position_of(tile) != goal_position_of(tile))
        .count() as u32
}
