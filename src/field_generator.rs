//! Field generation

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::debug;

use crate::{ConfigError, Field, FieldConfig, Tile};

/// Random field generator.
pub struct FieldGenerator {
    random: StdRng,
}

impl FieldGenerator {
    /// Create a generator. With a seed, the sequence of generated fields is
    /// reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    /// Generate a new field
    ///
    /// A bag holds exactly one hat, one start tile, the configured number of
    /// holes and open tiles for the rest. Cells are filled in row-major order,
    /// each with a token drawn at random from the bag without replacement, so
    /// the tile counts of the result are always exact.
    pub fn generate(&mut self, config: &FieldConfig) -> Result<Field, ConfigError> {
        config.validate()?;
        let mut bag = Self::fill_bag(config)?;

        let tiles: Vec<Vec<Tile>> = (0..config.height)
            .map(|_| {
                (0..config.width)
                    .map(|_| {
                        let index = self.random.gen_range(0..bag.len());
                        bag.swap_remove(index)
                    })
                    .collect()
            })
            .collect();

        debug!(
            width = config.width,
            height = config.height,
            holes = config.hole_count()?,
            "generated field"
        );
        Ok(Field::from_rows(tiles))
    }

    /// Tokens for every cell of the field, in no particular order
    fn fill_bag(config: &FieldConfig) -> Result<Vec<Tile>, ConfigError> {
        let mut bag = Vec::with_capacity(config.cell_count()?);
        bag.push(Tile::Hat);
        bag.push(Tile::Path);
        bag.extend(std::iter::repeat(Tile::Hole).take(config.hole_count()?));
        bag.extend(std::iter::repeat(Tile::Open).take(config.open_count()?));
        Ok(bag)
    }
}
