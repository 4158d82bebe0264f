//! Configuration errors

use thiserror::Error;

/// Field configuration that cannot produce a valid field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The field needs room for at least the hat and the start tile
    #[error("Field of {width}x{height} is too small, at least 2 cells are required")]
    TooSmall { width: usize, height: usize },
    #[error("Field of {width}x{height} is too large")]
    TooLarge { width: usize, height: usize },
    #[error("Hole percentage {0} is outside of [0, 1)")]
    HolesOutOfRange(f64),
    #[error("{holes} holes do not fit into a field of {cells} cells")]
    TooManyHoles { holes: usize, cells: usize },
}
