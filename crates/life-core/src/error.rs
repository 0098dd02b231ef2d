//! Error types for the engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Universe construction with a zero dimension. Fatal to construction;
    /// no partial universe is produced.
    #[error("invalid dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    /// A direct cell mutation addressed a coordinate outside the grid.
    /// Recoverable; the universe is left unchanged.
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// A deserialized snapshot whose cell buffer does not match its declared
    /// dimensions. No universe is produced.
    #[error("snapshot buffer holds {actual} cells, expected {expected}")]
    InvalidSnapshot { expected: usize, actual: usize },
}
