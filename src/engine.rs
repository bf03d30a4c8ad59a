//! Board model for the 3x3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Coord`: a (row, column) grid coordinate, possibly off the grid.
//! - `Direction`: the four ways the blank can travel.
//! - `Configuration`: an immutable assignment of every tile identity to a grid cell,
//!   together with the move generator (`Configuration::successors`).
//! - `Puzzle`: a mutable puzzle session with history (for undo), shuffling and
//!   replay of solver paths.
//!
//! Tile identities run from `0` to `8`. Identity `i` belongs at `(i / 3, i % 3)` in the
//! solved layout and identity `8` (`BLANK`) is the empty cell, so the printed face value
//! of a tile is its identity plus one.
use crate::error::BoardError;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width and height of the grid.
pub const GRID_SIZE: usize = 3;

/// Number of tile identities, the blank included.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// The tile identity that designates the empty cell.
pub const BLANK: usize = TILE_COUNT - 1;

/// The solved layout: `1 2 3 / 4 5 6 / 7 8 _`.
pub const GOAL: Configuration = Configuration::goal();

/// A (row, column) position. Components are signed so that neighbours of edge cells
/// can be represented before they are bounds-checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }

    /// Returns `true` iff both components lie in `0..=2`.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Coord;
    /// assert!(Coord::new(2, 0).in_bounds());
    /// assert!(!Coord::new(-1, 1).in_bounds());
    /// assert!(!Coord::new(1, 3).in_bounds());
    /// ```
    pub fn in_bounds(self) -> bool {
        let range = 0..GRID_SIZE as i8;
        range.contains(&self.row) && range.contains(&self.col)
    }

    /// The four orthogonal neighbours in the order up, down, left, right.
    ///
    /// The result is not filtered; use `in_bounds` to discard off-grid neighbours.
    pub fn adjacent(self) -> [Coord; 4] {
        Direction::ALL.map(|direction| direction.apply(self))
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan(self, other: Coord) -> u32 {
        u32::from(self.row.abs_diff(other.row)) + u32::from(self.col.abs_diff(other.col))
    }

    // Only meaningful for in-bounds coordinates.
    fn cell_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    const fn from_cell_index(index: usize) -> Self {
        Coord::new((index / GRID_SIZE) as i8, (index % GRID_SIZE) as i8)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The direction the blank travels during one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order the move generator tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn offset(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Moves `coord` one cell in this direction, without bounds checking.
    pub fn apply(self, coord: Coord) -> Coord {
        let (dr, dc) = self.offset();
        Coord::new(coord.row + dr, coord.col + dc)
    }

    /// Recovers the direction of a single step from `from` to `to`.
    ///
    /// Returns `None` when the two coordinates are not orthogonally adjacent.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|direction| direction.apply(from) == to)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Goal coordinate of a tile identity.
///
/// # Panics
/// Panics if `tile` is not in `0..TILE_COUNT`.
pub fn goal_position_of(tile: usize) -> Coord {
    GOAL.position_of(tile)
}

/// A full assignment of the 9 tile identities to grid cells.
///
/// `positions[i]` is the coordinate of tile `i`. The positions always form a bijection
/// onto the 9 cells of the grid; every constructor checks or preserves this.
/// Configurations are small `Copy` values: successors are independent copies and the
/// input is never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Configuration {
    positions: [Coord; TILE_COUNT],
}

impl Configuration {
    /// The solved configuration, identical to `GOAL`.
    pub const fn goal() -> Self {
        let mut positions = [Coord::new(0, 0); TILE_COUNT];
        let mut i = 0;
        while i < TILE_COUNT {
            positions[i] = Coord::from_cell_index(i);
            i += 1;
        }
        Configuration { positions }
    }

    /// Creates a configuration from the coordinate of each tile identity.
    ///
    /// # Returns
    /// * `Err(BoardError::OutOfBounds)` if a coordinate lies outside the grid.
    /// * `Err(BoardError::DuplicateCoordinate)` if two identities share a cell.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::{Configuration, Coord, GOAL};
    /// let mut positions = *GOAL.positions();
    /// positions.swap(7, 8); // blank and tile "8" trade places
    /// let config = Configuration::from_positions(positions).unwrap();
    /// assert_eq!(config.blank_position(), Coord::new(2, 1));
    ///
    /// positions[0] = positions[1];
    /// assert!(Configuration::from_positions(positions).is_err());
    /// ```
    pub fn from_positions(positions: [Coord; TILE_COUNT]) -> Result<Self, BoardError> {
        let mut occupied = [false; TILE_COUNT];
        for coord in positions {
            if !coord.in_bounds() {
                return Err(BoardError::OutOfBounds {
                    row: coord.row,
                    col: coord.col,
                });
            }
            let cell = coord.cell_index();
            if occupied[cell] {
                return Err(BoardError::DuplicateCoordinate {
                    row: coord.row,
                    col: coord.col,
                });
            }
            occupied[cell] = true;
        }
        Ok(Configuration { positions })
    }

    /// Creates a configuration from a row-major layout: `cells[k]` is the identity of the
    /// tile sitting in cell `k`.
    ///
    /// # Returns
    /// * `Err(BoardError::InvalidTileIdentity)` if an entry is not in `0..TILE_COUNT`.
    /// * `Err(BoardError::DuplicateTile)` if an identity appears twice.
    pub fn from_cells(cells: [usize; TILE_COUNT]) -> Result<Self, BoardError> {
        let mut placed = [false; TILE_COUNT];
        for &tile in &cells {
            if tile >= TILE_COUNT {
                return Err(BoardError::InvalidTileIdentity(tile));
            }
            if placed[tile] {
                return Err(BoardError::DuplicateTile(tile));
            }
            placed[tile] = true;
        }
        Ok(Self::from_permutation(&cells))
    }

    // `cells` must already be a permutation of 0..TILE_COUNT.
    pub(crate) fn from_permutation(cells: &[usize; TILE_COUNT]) -> Self {
        let mut positions = [Coord::new(0, 0); TILE_COUNT];
        for (cell, &tile) in cells.iter().enumerate() {
            positions[tile] = Coord::from_cell_index(cell);
        }
        Configuration { positions }
    }

    /// Draws a uniformly random solvable configuration.
    ///
    /// Layouts are shuffled until one with even inversion parity comes up, which takes two
    /// attempts on average.
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cells: [usize; TILE_COUNT] = std::array::from_fn(|i| i);
        loop {
            cells.shuffle(rng);
            let candidate = Self::from_permutation(&cells);
            if candidate.is_solvable() {
                return candidate;
            }
        }
    }

    /// Performs a random walk of `steps` legal slides starting from `self`.
    ///
    /// The walk never immediately undoes its previous slide, although it may revisit
    /// earlier configurations, so the result is at most `steps` moves away from `self`.
    pub fn scramble<R: Rng + ?Sized>(&self, rng: &mut R, steps: usize) -> Self {
        let mut current = *self;
        let mut previous_blank: Option<Coord> = None;
        for _ in 0..steps {
            let candidates: Vec<Configuration> = current
                .successors()
                .filter(|next| Some(next.blank_position()) != previous_blank)
                .collect();
            match candidates.choose(rng) {
                Some(next) => {
                    previous_blank = Some(current.blank_position());
                    current = *next;
                }
                None => break,
            }
        }
        current
    }

    /// The coordinate of every tile identity, indexed by identity.
    pub fn positions(&self) -> &[Coord; TILE_COUNT] {
        &self.positions
    }

    /// Returns the coordinate of tile `tile`.
    ///
    /// An out-of-range identity is a programming error, not a runtime condition.
    ///
    /// # Panics
    /// Panics if `tile` is not in `0..TILE_COUNT`. Use `try_position_of` for identities
    /// taken from untrusted input.
    pub fn position_of(&self, tile: usize) -> Coord {
        self.positions[tile]
    }

    /// Checked variant of `position_of`.
    pub fn try_position_of(&self, tile: usize) -> Result<Coord, BoardError> {
        self.positions
            .get(tile)
            .copied()
            .ok_or(BoardError::InvalidTileIdentity(tile))
    }

    pub fn blank_position(&self) -> Coord {
        self.positions[BLANK]
    }

    /// Returns the identity occupying `coord`, or `None` for off-grid coordinates.
    pub fn tile_at(&self, coord: Coord) -> Option<usize> {
        self.positions.iter().position(|&p| p == coord)
    }

    /// Row-major layout of tile identities; the inverse view of `positions`.
    pub fn cells(&self) -> [usize; TILE_COUNT] {
        let mut cells = [0; TILE_COUNT];
        for (tile, coord) in self.positions.iter().enumerate() {
            cells[coord.cell_index()] = tile;
        }
        cells
    }

    /// Returns `true` iff every tile sits on its goal coordinate.
    pub fn is_goal(&self) -> bool {
        *self == GOAL
    }

    /// Canonical compact key: the cell index of tile `i` occupies bits `4i..4i+4`.
    ///
    /// Two configurations have the same key iff they are equal.
    pub fn key(&self) -> u64 {
        self.positions
            .iter()
            .enumerate()
            .fold(0u64, |key, (tile, coord)| {
                key | (coord.cell_index() as u64) << (4 * tile)
            })
    }

    /// Slides the blank onto `target`, returning the resulting configuration.
    ///
    /// Returns `None` if `target` is off the grid or not orthogonally adjacent to the blank.
    pub fn slide_blank_to(&self, target: Coord) -> Option<Configuration> {
        let blank = self.blank_position();
        if !target.in_bounds() || blank.manhattan(target) != 1 {
            return None;
        }
        let tile = self.tile_at(target)?;
        let mut next = *self;
        next.positions[BLANK] = target;
        next.positions[tile] = blank;
        Some(next)
    }

    /// Returns the configurations reachable by one legal slide.
    ///
    /// Successors are produced lazily in the order the blank moves up, down, left, right;
    /// off-grid directions are skipped, so corners yield 2, edges 3 and the centre 4.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::GOAL;
    /// // The goal's blank sits in the bottom-right corner.
    /// assert_eq!(GOAL.successors().count(), 2);
    /// ```
    pub fn successors(&self) -> Successors {
        Successors {
            origin: *self,
            neighbours: self.blank_position().adjacent(),
            next: 0,
        }
    }

    /// Returns `true` if the goal can be reached from this configuration.
    ///
    /// On a grid of odd width a slide never changes the parity of the number of
    /// inversions among the 8 numbered tiles (read row-major), and the goal has none.
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }

    fn inversions(&self) -> usize {
        let tiles: Vec<usize> = self
            .cells()
            .into_iter()
            .filter(|&tile| tile != BLANK)
            .collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        GOAL
    }
}

impl fmt::Display for Configuration {
    /// Prints face values (`identity + 1`) with `.` for the blank, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();
        for (row, chunk) in cells.chunks(GRID_SIZE).enumerate() {
            for &tile in chunk {
                if tile == BLANK {
                    write!(f, " .")?;
                } else {
                    write!(f, "{:2}", tile + 1)?;
                }
            }
            if row < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Lazy iterator over the successors of a configuration. See `Configuration::successors`.
#[derive(Debug, Clone)]
pub struct Successors {
    origin: Configuration,
    neighbours: [Coord; 4],
    next: usize,
}

impl Iterator for Successors {
    type Item = Configuration;

    fn next(&mut self) -> Option<Configuration> {
        while let Some(&target) = self.neighbours.get(self.next) {
            self.next += 1;
            if let Some(successor) = self.origin.slide_blank_to(target) {
                return Some(successor);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.neighbours.len() - self.next))
    }
}

/// A puzzle session: the board a player or a solver playback works on.
///
/// Keeps the configurations it has passed through so moves can be undone.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::{Coord, Puzzle};
/// let mut puzzle = Puzzle::new();
/// assert!(puzzle.is_solved());
///
/// assert!(puzzle.slide(Coord::new(1, 2))); // blank moves up
/// assert!(!puzzle.is_solved());
/// assert_eq!(puzzle.steps(), 1);
///
/// assert!(puzzle.undo_last_move());
/// assert!(puzzle.is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct Puzzle {
    configuration: Configuration,
    history: Vec<Configuration>,
}

impl Puzzle {
    /// Creates a solved puzzle.
    pub fn new() -> Self {
        Self::new_with_configuration(GOAL)
    }

    pub fn new_with_configuration(configuration: Configuration) -> Self {
        Puzzle {
            configuration,
            history: Vec::new(),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Overwrites the board. The undo history is cleared.
    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
        self.history.clear();
    }

    pub fn goal(&self) -> &'static Configuration {
        &GOAL
    }

    pub fn blank_position(&self) -> Coord {
        self.configuration.blank_position()
    }

    pub fn is_solved(&self) -> bool {
        self.configuration.is_goal()
    }

    /// Number of slides made since the board was last set.
    pub fn steps(&self) -> usize {
        self.history.len()
    }

    /// Slides the blank onto `target`.
    ///
    /// # Returns
    /// * `true` if the slide was legal and has been applied.
    /// * `false` if `target` is off the grid or not adjacent to the blank; the board is
    ///   left untouched.
    pub fn slide(&mut self, target: Coord) -> bool {
        match self.configuration.slide_blank_to(target) {
            Some(next) => {
                self.history.push(self.configuration);
                self.configuration = next;
                true
            }
            None => false,
        }
    }

    /// Reverts the most recent slide. Returns `false` when there is nothing to undo.
    pub fn undo_last_move(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.configuration = previous;
                true
            }
            None => false,
        }
    }

    /// Replaces the board with a random solvable start drawn from `seed`.
    ///
    /// The same seed always produces the same board.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.set_configuration(Configuration::random_solvable(&mut rng));
    }

    /// Plays back a blank path as returned by the solver.
    ///
    /// `path[0]` must be the blank's current coordinate; each following entry is where the
    /// blank goes next. An empty path is a no-op.
    ///
    /// On error the slides applied before the offending step are kept.
    pub fn replay(&mut self, path: &[Coord]) -> Result<(), BoardError> {
        let Some((first, rest)) = path.split_first() else {
            return Ok(());
        };
        if *first != self.blank_position() {
            return Err(BoardError::PathStartMismatch {
                row: first.row,
                col: first.col,
            });
        }
        for &target in rest {
            if !self.slide(target) {
                return Err(BoardError::IllegalMove {
                    row: target.row,
                    col: target.col,
                });
            }
        }
        Ok(())
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::configuration_from_str_array;
    use std::collections::HashSet;

    #[test]
    fn test_goal_layout() {
        for tile in 0..TILE_COUNT {
            let expected = Coord::new((tile / 3) as i8, (tile % 3) as i8);
            assert_eq!(GOAL.position_of(tile), expected);
            assert_eq!(goal_position_of(tile), expected);
        }
        assert_eq!(GOAL.blank_position(), Coord::new(2, 2));
        assert!(GOAL.is_goal());
        assert_eq!(Configuration::default(), GOAL);
    }

    #[test]
    fn test_adjacent_is_unfiltered_and_ordered() {
        let corner = Coord::new(0, 0);
        assert_eq!(
            corner.adjacent(),
            [
                Coord::new(-1, 0),
                Coord::new(1, 0),
                Coord::new(0, -1),
                Coord::new(0, 1),
            ]
        );
        let in_bounds = corner.adjacent().iter().filter(|c| c.in_bounds()).count();
        assert_eq!(in_bounds, 2);
    }

    #[test]
    fn test_in_bounds() {
        for row in -1..=3 {
            for col in -1..=3 {
                let expected = (0..=2).contains(&row) && (0..=2).contains(&col);
                assert_eq!(Coord::new(row, col).in_bounds(), expected, "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_direction_between() {
        let centre = Coord::new(1, 1);
        for direction in Direction::ALL {
            let next = direction.apply(centre);
            assert_eq!(Direction::between(centre, next), Some(direction));
            assert_eq!(Direction::between(next, centre), Some(direction.opposite()));
        }
        assert_eq!(Direction::between(centre, Coord::new(2, 2)), None);
        assert_eq!(Direction::between(centre, centre), None);
    }

    #[test]
    fn test_from_positions_rejects_out_of_bounds() {
        let mut positions = *GOAL.positions();
        positions[3] = Coord::new(3, 0);
        assert_eq!(
            Configuration::from_positions(positions),
            Err(BoardError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_from_positions_rejects_duplicates() {
        let mut positions = *GOAL.positions();
        positions[4] = positions[5];
        assert_eq!(
            Configuration::from_positions(positions),
            Err(BoardError::DuplicateCoordinate { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_from_cells_round_trips_with_cells() {
        let cells = [1, 7, 2, 0, 5, 3, 6, 8, 4];
        let config = Configuration::from_cells(cells).unwrap();
        assert_eq!(config.cells(), cells);
        assert_eq!(config.blank_position(), Coord::new(2, 1));
        assert_eq!(config.tile_at(Coord::new(0, 1)), Some(7));
    }

    #[test]
    fn test_from_cells_errors() {
        assert_eq!(
            Configuration::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(BoardError::InvalidTileIdentity(9))
        );
        assert_eq!(
            Configuration::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 7]),
            Err(BoardError::DuplicateTile(7))
        );
    }

    #[test]
    fn test_try_position_of() {
        assert_eq!(GOAL.try_position_of(4), Ok(Coord::new(1, 1)));
        assert_eq!(
            GOAL.try_position_of(TILE_COUNT),
            Err(BoardError::InvalidTileIdentity(TILE_COUNT))
        );
    }

    #[test]
    #[should_panic]
    fn test_position_of_invalid_identity_panics() {
        GOAL.position_of(TILE_COUNT);
    }

    #[test]
    fn test_tile_at_off_grid() {
        assert_eq!(GOAL.tile_at(Coord::new(-1, 0)), None);
        assert_eq!(GOAL.tile_at(Coord::new(2, 2)), Some(BLANK));
    }

    #[test]
    fn test_key_is_unique_per_configuration() {
        let mut keys = HashSet::new();
        let mut frontier = vec![GOAL];
        let mut seen = HashSet::new();
        seen.insert(GOAL);
        // Walk a few thousand reachable states and check keys never collide.
        while let Some(config) = frontier.pop() {
            assert!(keys.insert(config.key()));
            if seen.len() > 3000 {
                continue;
            }
            for next in config.successors() {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        assert_eq!(keys.len(), seen.len());
    }

    #[test]
    fn test_successor_counts_by_blank_location() {
        // Corner, edge and centre blank.
        let corner = GOAL;
        let edge = configuration_from_str_array(&["123", "456", "7.8"]).unwrap();
        let centre = configuration_from_str_array(&["123", "4.6", "785"]).unwrap();

        assert_eq!(corner.successors().count(), 2);
        assert_eq!(edge.successors().count(), 3);
        assert_eq!(centre.successors().count(), 4);
    }

    #[test]
    fn test_successor_count_matches_in_bounds_neighbours() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let config = Configuration::random_solvable(&mut rng);
            let expected = config
                .blank_position()
                .adjacent()
                .iter()
                .filter(|c| c.in_bounds())
                .count();
            let count = config.successors().count();
            assert_eq!(count, expected);
            assert!(count <= 4);
        }
    }

    #[test]
    fn test_successors_order_and_independence() {
        let centre = configuration_from_str_array(&["123", "4.6", "785"]).unwrap();
        let before = centre;
        let blanks: Vec<Coord> = centre.successors().map(|s| s.blank_position()).collect();
        assert_eq!(
            blanks,
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
            ]
        );
        assert_eq!(centre, before);

        let up = centre.successors().next().unwrap();
        // Tile "2" (identity 1) moved down into the old blank cell.
        assert_eq!(up.position_of(1), Coord::new(1, 1));
        assert_eq!(up.blank_position(), Coord::new(0, 1));
    }

    #[test]
    fn test_successors_exhausted_iterator_stays_empty() {
        let mut successors = GOAL.successors();
        assert!(successors.next().is_some());
        assert!(successors.next().is_some());
        assert!(successors.next().is_none());
        assert!(successors.next().is_none());
    }

    #[test]
    fn test_slide_blank_to_rejects_illegal_targets() {
        assert!(GOAL.slide_blank_to(Coord::new(2, 3)).is_none());
        assert!(GOAL.slide_blank_to(Coord::new(0, 0)).is_none());
        assert!(GOAL.slide_blank_to(Coord::new(1, 1)).is_none()); // diagonal
        assert!(GOAL.slide_blank_to(Coord::new(2, 2)).is_none()); // itself
        assert!(GOAL.slide_blank_to(Coord::new(2, 1)).is_some());
    }

    #[test]
    fn test_solvability_parity() {
        assert!(GOAL.is_solvable());
        let swapped = configuration_from_str_array(&["213", "456", "78."]).unwrap();
        assert!(!swapped.is_solvable());
        for next in GOAL.successors() {
            assert!(next.is_solvable());
        }
    }

    #[test]
    fn test_random_solvable_is_deterministic_per_seed() {
        let a = Configuration::random_solvable(&mut SmallRng::seed_from_u64(42));
        let b = Configuration::random_solvable(&mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.is_solvable());
    }

    #[test]
    fn test_scramble_stays_within_step_budget() {
        let mut rng = SmallRng::seed_from_u64(3);
        let scrambled = GOAL.scramble(&mut rng, 1);
        assert_ne!(scrambled, GOAL);
        assert_eq!(GOAL.scramble(&mut rng, 0), GOAL);
        let far = GOAL.scramble(&mut rng, 20);
        assert!(far.is_solvable());
    }

    #[test]
    fn test_display_board_formatting() {
        let config = configuration_from_str_array(&["123", "4.6", "785"]).unwrap();
        assert_eq!(config.to_string(), " 1 2 3\n 4 . 6\n 7 8 5");
    }

    #[test]
    fn test_puzzle_slide_and_undo() {
        let mut puzzle = Puzzle::new();
        assert!(!puzzle.slide(Coord::new(0, 0)));
        assert!(puzzle.slide(Coord::new(2, 1)));
        assert!(puzzle.slide(Coord::new(1, 1)));
        assert_eq!(puzzle.steps(), 2);
        assert_eq!(puzzle.blank_position(), Coord::new(1, 1));

        assert!(puzzle.undo_last_move());
        assert_eq!(puzzle.blank_position(), Coord::new(2, 1));
        assert!(puzzle.undo_last_move());
        assert!(puzzle.is_solved());
        assert!(!puzzle.undo_last_move());
    }

    #[test]
    fn test_puzzle_set_configuration_clears_history() {
        let mut puzzle = Puzzle::new();
        puzzle.slide(Coord::new(1, 2));
        let config = *puzzle.configuration();
        puzzle.set_configuration(config);
        assert_eq!(puzzle.steps(), 0);
        assert!(!puzzle.undo_last_move());
        assert_eq!(puzzle.goal(), &GOAL);
    }

    #[test]
    fn test_puzzle_shuffle_is_seeded() {
        let mut a = Puzzle::new();
        let mut b = Puzzle::new();
        a.shuffle(11);
        b.shuffle(11);
        assert_eq!(a.configuration(), b.configuration());
        assert!(a.configuration().is_solvable());
    }

    #[test]
    fn test_puzzle_replay() {
        let start = configuration_from_str_array(&["123", "456", ".78"]).unwrap();
        let mut puzzle = Puzzle::new_with_configuration(start);
        let path = [Coord::new(2, 0), Coord::new(2, 1), Coord::new(2, 2)];
        puzzle.replay(&path).unwrap();
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.steps(), 2);
    }

    #[test]
    fn test_puzzle_replay_errors() {
        let mut puzzle = Puzzle::new();
        assert_eq!(
            puzzle.replay(&[Coord::new(0, 0)]),
            Err(BoardError::PathStartMismatch { row: 0, col: 0 })
        );
        assert_eq!(
            puzzle.replay(&[Coord::new(2, 2), Coord::new(2, 1), Coord::new(0, 1)]),
            Err(BoardError::IllegalMove { row: 0, col: 1 })
        );
        // The legal first step was kept.
        assert_eq!(puzzle.blank_position(), Coord::new(2, 1));
        assert_eq!(puzzle.replay(&[]), Ok(()));
    }
}
