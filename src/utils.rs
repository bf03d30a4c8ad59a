use crate::engine::{Configuration, Coord, Direction, BLANK, GRID_SIZE, TILE_COUNT};
use crate::error::ParseError;

// Maps a board character to a tile identity. `1`..`8` are face values; `.`, `0` and `_`
// all denote the blank.
fn tile_from_char(ch: char) -> Option<usize> {
    match ch {
        '.' | '0' | '_' => Some(BLANK),
        '1'..='8' => ch.to_digit(10).map(|face| face as usize - 1),
        _ => None,
    }
}

// `symbols` holds exactly TILE_COUNT entries in row-major order.
fn collect_cells(symbols: &[(char, usize, usize)]) -> Result<Configuration, ParseError> {
    let mut cells = [BLANK; TILE_COUNT];
    let mut seen = [false; TILE_COUNT];
    for (index, &(ch, row, col)) in symbols.iter().enumerate() {
        let tile =
            tile_from_char(ch).ok_or(ParseError::UnrecognizedCharacter { ch, row, col })?;
        if seen[tile] {
            return Err(ParseError::DuplicateTile(ch));
        }
        seen[tile] = true;
        cells[index] = tile;
    }
    Ok(Configuration::from_permutation(&cells))
}

/// Parses a configuration from exactly 3 rows of 3 characters each.
///
/// Valid characters are the face values `1`..`8` and `.`, `0` or `_` for the blank.
/// Each face value must appear once.
///
/// # Returns
/// * `Ok(Configuration)` if parsing is successful.
/// * `Err(ParseError)` if:
///     - The number of rows is not 3.
///     - Any row does not have exactly 3 characters.
///     - An unrecognized character is encountered.
///     - A tile appears more than once.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::configuration_from_str_array;
/// use eight_puzzle::engine::{Coord, GOAL};
///
/// let goal = configuration_from_str_array(&["123", "456", "78."]).unwrap();
/// assert_eq!(goal, GOAL);
///
/// let config = configuration_from_str_array(&["1.3", "426", "758"]).unwrap();
/// assert_eq!(config.blank_position(), Coord::new(0, 1));
///
/// assert!(configuration_from_str_array(&["12X", "456", "78."]).is_err());
/// assert!(configuration_from_str_array(&["123", "456"]).is_err());
/// ```
pub fn configuration_from_str_array(rows: &[&str]) -> Result<Configuration, ParseError> {
    if rows.len() != GRID_SIZE {
        return Err(ParseError::RowCount {
            expected: GRID_SIZE,
            found: rows.len(),
        });
    }

    let mut symbols = Vec::with_capacity(TILE_COUNT);
    for (r, row_str) in rows.iter().enumerate() {
        let found = row_str.chars().count();
        if found != GRID_SIZE {
            return Err(ParseError::RowLength {
                row: r,
                expected: GRID_SIZE,
                found,
            });
        }
        symbols.extend(row_str.chars().enumerate().map(|(c, ch)| (ch, r, c)));
    }
    collect_cells(&symbols)
}

/// Parses a configuration written on one line, e.g. `"123456780"` or `"123/456/78."`.
///
/// Whitespace and `/` separators are ignored; the remaining 9 characters are read
/// row-major with the same alphabet as `configuration_from_str_array`.
pub fn configuration_from_str(s: &str) -> Result<Configuration, ParseError> {
    let symbols: Vec<char> = s
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '/')
        .collect();
    if symbols.len() != TILE_COUNT {
        return Err(ParseError::RowLength {
            row: 0,
            expected: TILE_COUNT,
            found: symbols.len(),
        });
    }
    let symbols: Vec<(char, usize, usize)> = symbols
        .into_iter()
        .enumerate()
        .map(|(i, ch)| (ch, i / GRID_SIZE, i % GRID_SIZE))
        .collect();
    collect_cells(&symbols)
}

/// Converts a blank path into the direction of each step.
///
/// Pairs of consecutive coordinates that are not adjacent are skipped; solver paths never
/// contain them.
pub fn path_to_directions(path: &[Coord]) -> Vec<Direction> {
    path.windows(2)
        .filter_map(|step| Direction::between(step[0], step[1]))
        .collect()
}
