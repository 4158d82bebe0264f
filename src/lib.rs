//! Find your hat in a field full of holes
//!
//! The field is a grid of [`Tile`]s with a single hat, a single start tile and
//! a number of holes. The player walks from the start tile, leaving a trail of
//! path tiles, until they either find the hat or fall into a hole.
//!
//! # Examples
//! ## Walking across a small field
//! ```
//! use find_your_hat::{classify_move, Direction, Field, MoveOutcome, Point, Tile};
//!
//! let mut field = Field::parse("*░O\n░░^").unwrap();
//! let start = field.start_position().unwrap();
//! assert_eq!(start, Point { row: 0, col: 0 });
//!
//! let outcome = classify_move(&field, start, Direction::Down);
//! assert_eq!(outcome, MoveOutcome::Walked(Point { row: 1, col: 0 }));
//!
//! field.mark_path(Point { row: 1, col: 0 });
//! assert_eq!(field.count(Tile::Path), 2);
//! ```
//!
//! ## Generating a field
//! ```
//! use find_your_hat::field_generator::FieldGenerator;
//! use find_your_hat::{FieldConfig, Tile};
//!
//! let config = FieldConfig::default();
//! let field = FieldGenerator::new(Some(42)).generate(&config).unwrap();
//! assert_eq!(field.count(Tile::Hat), 1);
//! assert_eq!(field.count(Tile::Hole), 2);
//! ```

pub mod error;
pub mod field_generator;
pub mod input;
pub mod render;
pub mod session;

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail};
use itertools::Itertools;

pub use error::ConfigError;

/// Kind of a single square in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// The goal
    Hat,
    /// Stepping here ends the game
    Hole,
    /// Start tile, or a tile the player has already walked across
    Path,
    /// Unvisited safe tile
    Open,
}

impl Tile {
    const S_HAT: char = '^';
    const S_HOLE: char = 'O';
    const S_PATH: char = '*';
    const S_OPEN: char = '░';

    /// Character used for the tile in the text form of a field
    pub fn symbol(self) -> char {
        match self {
            Tile::Hat => Self::S_HAT,
            Tile::Hole => Self::S_HOLE,
            Tile::Path => Self::S_PATH,
            Tile::Open => Self::S_OPEN,
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            Self::S_HAT => Some(Tile::Hat),
            Self::S_HOLE => Some(Tile::Hole),
            Self::S_PATH => Some(Tile::Path),
            Self::S_OPEN => Some(Tile::Open),
            _ => None,
        }
    }
}

/// Location in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.row, self.col)
    }
}

/// Direction of a single player step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Unit step as (delta row, delta column)
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    /// Parse normalized player input: `w`, `a`, `s`, `d` or the direction name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "w" | "up" => Ok(Direction::Up),
            "a" | "left" => Ok(Direction::Left),
            "s" | "down" => Ok(Direction::Down),
            "d" | "right" => Ok(Direction::Right),
            other => Err(anyhow!("Unknown direction `{}`", other)),
        }
    }
}

/// Parameters for field generation
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub width: usize,
    pub height: usize,
    /// Fraction of the non-special cells that become holes, in `[0, 1)`
    pub holes_percentage: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 3,
            holes_percentage: 0.2,
        }
    }
}

impl FieldConfig {
    /// Largest number of cells in a generated field
    pub const MAX_CELLS: usize = 1 << 24;

    /// Number of cells, `width * height`
    ///
    /// Returns error if the product overflows or exceeds [`Self::MAX_CELLS`].
    pub fn cell_count(&self) -> Result<usize, ConfigError> {
        self.width
            .checked_mul(self.height)
            .filter(|&cells| cells <= Self::MAX_CELLS)
            .ok_or(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Check that a field can be generated from this configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 || self.cell_count()? < 2 {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        // Also rejects NaN
        if !(0.0..1.0).contains(&self.holes_percentage) {
            return Err(ConfigError::HolesOutOfRange(self.holes_percentage));
        }
        self.open_count().map(|_| ())
    }

    /// Number of holes: `floor((cells - 2) * holes_percentage)`
    pub fn hole_count(&self) -> Result<usize, ConfigError> {
        let cells = self.cell_count()?;
        Ok((cells.saturating_sub(2) as f64 * self.holes_percentage).floor() as usize)
    }

    /// Number of open tiles left after the hat, the start tile and the holes
    pub fn open_count(&self) -> Result<usize, ConfigError> {
        let cells = self.cell_count()?;
        let holes = self.hole_count()?;
        cells
            .checked_sub(holes.saturating_add(2))
            .ok_or(ConfigError::TooManyHoles { holes, cells })
    }
}

/// Rectangular grid of tiles, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    tiles: Vec<Vec<Tile>>,
}

impl Field {
    /// Build a field from complete rows.
    ///
    /// Callers guarantee at least one row, and that all rows are non-empty and
    /// of equal length.
    pub(crate) fn from_rows(tiles: Vec<Vec<Tile>>) -> Self {
        debug_assert!(!tiles.is_empty() && tiles.iter().map(Vec::len).all_equal());
        Self { tiles }
    }

    /// Parse a field from its text form, one row per line.
    ///
    /// Returns error if the input is empty, rows differ in length, or a row
    /// contains unknown characters.
    ///
    /// # Examples
    /// ```
    /// use find_your_hat::{Field, Point, Tile};
    ///
    /// let field = Field::parse("░*O\n^░░").unwrap();
    /// assert_eq!(field.width(), 3);
    /// assert_eq!(field.get(Point { row: 1, col: 0 }), Some(Tile::Hat));
    /// ```
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let tiles = text
            .lines()
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| {
                        Tile::from_symbol(c).ok_or_else(|| {
                            anyhow!("Unexpected character `{}` at row={}, col={}", c, row, col)
                        })
                    })
                    .collect::<anyhow::Result<Vec<_>>>()
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        if tiles.is_empty() || tiles[0].is_empty() {
            bail!("Field is empty");
        }
        if let Some((row, line)) = tiles
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != tiles[0].len())
        {
            bail!(
                "Row {} has {} tiles, expected {}",
                row,
                line.len(),
                tiles[0].len()
            );
        }
        Ok(Self { tiles })
    }

    pub fn width(&self) -> usize {
        self.tiles[0].len()
    }

    pub fn height(&self) -> usize {
        self.tiles.len()
    }

    pub fn get(&self, point: Point) -> Option<Tile> {
        self.tiles.get(point.row)?.get(point.col).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.iter().map(Vec::as_slice)
    }

    /// Number of tiles of the given kind
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().flatten().filter(|&&t| t == tile).count()
    }

    /// First path tile in row-major order
    pub fn start_position(&self) -> Option<Point> {
        self.tiles.iter().enumerate().find_map(|(row, line)| {
            line.iter()
                .position(|&t| t == Tile::Path)
                .map(|col| Point { row, col })
        })
    }

    /// Turn the tile at `point` into a path tile. Points outside the field are
    /// ignored.
    pub fn mark_path(&mut self, point: Point) {
        if let Some(tile) = self
            .tiles
            .get_mut(point.row)
            .and_then(|line| line.get_mut(point.col))
        {
            *tile = Tile::Path;
        }
    }

    /// Check that the field can be played from the start: exactly one hat and
    /// exactly one start tile.
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.count(Tile::Hat) {
            1 => (),
            0 => bail!("Field has no hat"),
            n => bail!("Field has {} hats, expected 1", n),
        }
        match self.count(Tile::Path) {
            1 => (),
            0 => bail!("Field has no start tile"),
            n => bail!("Field has {} path tiles, expected 1", n),
        }
        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .tiles
            .iter()
            .map(|line| line.iter().map(|t| t.symbol()).join(""))
            .join("\n");
        f.write_str(&text)
    }
}

/// Result of trying to step from one tile to a neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target is outside the field
    OutOfBounds,
    /// Target is a hole
    Fell(Point),
    /// Target is the hat
    FoundHat(Point),
    /// Target is safe to walk onto
    Walked(Point),
}

/// Classify the step from `from` towards `direction`.
///
/// Depends only on its arguments; neither the field nor the position is
/// modified.
pub fn classify_move(field: &Field, from: Point, direction: Direction) -> MoveOutcome {
    let (d_row, d_col) = direction.offset();
    let target = match (
        from.row.checked_add_signed(d_row),
        from.col.checked_add_signed(d_col),
    ) {
        (Some(row), Some(col)) => Point { row, col },
        _ => return MoveOutcome::OutOfBounds,
    };

    match field.get(target) {
        None => MoveOutcome::OutOfBounds,
        Some(Tile::Hole) => MoveOutcome::Fell(target),
        Some(Tile::Hat) => MoveOutcome::FoundHat(target),
        Some(Tile::Path | Tile::Open) => MoveOutcome::Walked(target),
    }
}

#[cfg(test)]
mod tests {
    use crate::{classify_move, ConfigError, Direction, Field, FieldConfig, MoveOutcome, Point, Tile};

    fn sample_field() -> Field {
        Field::parse(
            "
░░░O░
░O*░^
░░░░░"
                .trim(),
        )
        .unwrap()
    }

    #[test]
    fn parse_field_input() {
        let field = sample_field();

        assert_eq!(field.width(), 5);
        assert_eq!(field.height(), 3);
        assert_eq!(field.count(Tile::Hat), 1);
        assert_eq!(field.count(Tile::Hole), 2);
        assert_eq!(field.count(Tile::Path), 1);
        assert_eq!(field.count(Tile::Open), 11);
        assert_eq!(field.get(Point { row: 1, col: 4 }), Some(Tile::Hat));
        assert_eq!(field.get(Point { row: 3, col: 0 }), None);
    }

    #[test]
    fn display_is_parseable() {
        let field = sample_field();
        assert_eq!(Field::parse(&field.to_string()).unwrap(), field);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(Field::parse("").is_err());
        assert!(Field::parse("*░\n░").is_err());
        let err = Field::parse("*░\n░x").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character `x` at row=1, col=1");
    }

    #[test]
    fn start_position_is_first_path_in_row_major_order() {
        let field = Field::parse("░░░\n░░*\n*░^").unwrap();
        assert_eq!(field.start_position(), Some(Point { row: 1, col: 2 }));

        let field = Field::parse("░O\n░^").unwrap();
        assert_eq!(field.start_position(), None);
    }

    #[test]
    fn step_up_onto_open_tile() {
        let mut field = sample_field();
        let from = Point { row: 1, col: 2 };
        let target = Point { row: 0, col: 2 };
        assert_eq!(field.get(target), Some(Tile::Open));

        assert_eq!(
            classify_move(&field, from, Direction::Up),
            MoveOutcome::Walked(target)
        );
        field.mark_path(target);
        assert_eq!(field.get(target), Some(Tile::Path));
    }

    #[test]
    fn step_outside_of_field() {
        let field = sample_field();
        let corner = Point { row: 0, col: 0 };
        assert_eq!(
            classify_move(&field, corner, Direction::Up),
            MoveOutcome::OutOfBounds
        );
        assert_eq!(
            classify_move(&field, corner, Direction::Left),
            MoveOutcome::OutOfBounds
        );
        let corner = Point { row: 2, col: 4 };
        assert_eq!(
            classify_move(&field, corner, Direction::Down),
            MoveOutcome::OutOfBounds
        );
        assert_eq!(
            classify_move(&field, corner, Direction::Right),
            MoveOutcome::OutOfBounds
        );
    }

    #[test]
    fn step_into_hole_and_hat() {
        let field = sample_field();
        let from = Point { row: 1, col: 2 };
        assert_eq!(
            classify_move(&field, from, Direction::Left),
            MoveOutcome::Fell(Point { row: 1, col: 1 })
        );
        let from = Point { row: 0, col: 4 };
        assert_eq!(
            classify_move(&field, from, Direction::Down),
            MoveOutcome::FoundHat(Point { row: 1, col: 4 })
        );
    }

    #[test]
    fn classification_does_not_depend_on_history() {
        let field = sample_field();
        let from = Point { row: 2, col: 2 };
        let first = classify_move(&field, from, Direction::Up);
        let second = classify_move(&field, from, Direction::Up);
        assert_eq!(first, second);
        assert_eq!(first, MoveOutcome::Walked(Point { row: 1, col: 2 }));
    }

    #[test]
    fn mark_path_is_idempotent() {
        let mut field = sample_field();
        let start = field.start_position().unwrap();
        let before = field.clone();
        field.mark_path(start);
        assert_eq!(field, before);

        field.mark_path(Point { row: 9, col: 9 });
        assert_eq!(field, before);
    }

    #[test]
    fn parse_directions() {
        assert_eq!("w".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("a".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("s".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("right".parse::<Direction>().unwrap(), Direction::Right);
        assert!("".parse::<Direction>().is_err());
        assert!("x".parse::<Direction>().is_err());
    }

    #[test]
    fn default_config_counts() {
        let config = FieldConfig::default();
        assert_eq!(config.cell_count().unwrap(), 15);
        assert_eq!(config.hole_count().unwrap(), 2);
        assert_eq!(config.open_count().unwrap(), 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_configs() {
        let config = FieldConfig {
            width: 1,
            height: 1,
            holes_percentage: 0.0,
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::TooSmall {
                width: 1,
                height: 1
            })
        );

        for holes_percentage in [1.0, 1.5, -0.1, f64::NAN] {
            let config = FieldConfig {
                holes_percentage,
                ..FieldConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::HolesOutOfRange(_))
            ));
        }
    }

    #[test]
    fn oversized_config_is_rejected() {
        let config = FieldConfig {
            width: usize::MAX / 2 + 2,
            height: 2,
            holes_percentage: 0.0,
        };
        assert!(matches!(
            config.cell_count(),
            Err(ConfigError::TooLarge { .. })
        ));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge { .. })
        ));
        assert!(config.open_count().is_err());
    }

    #[test]
    fn playable_fields() {
        assert!(Field::parse("*░^").unwrap().validate().is_ok());

        let err = Field::parse("*░░").unwrap().validate().unwrap_err();
        assert_eq!(err.to_string(), "Field has no hat");
        let err = Field::parse("*^^").unwrap().validate().unwrap_err();
        assert_eq!(err.to_string(), "Field has 2 hats, expected 1");
        let err = Field::parse("░░^").unwrap().validate().unwrap_err();
        assert_eq!(err.to_string(), "Field has no start tile");
        let err = Field::parse("**^").unwrap().validate().unwrap_err();
        assert_eq!(err.to_string(), "Field has 2 path tiles, expected 1");
    }
}
