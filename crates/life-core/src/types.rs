//! Core type definitions for the engine.

use serde::{Deserialize, Serialize};

/// State of a single grid cell.
///
/// `Alive = 1` so that summing a neighborhood of cells yields the live
/// neighbor count directly. `#[repr(u8)]` keeps the byte-per-cell buffer
/// layout exactly one byte per entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Flip between `Alive` and `Dead`.
    pub fn toggle(&mut self) {
        *self = match *self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        };
    }

    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_cell_is_one_byte() {
        assert_eq!(size_of::<Cell>(), 1);
    }

    #[test]
    fn test_cell_counts_as_integer() {
        assert_eq!(Cell::Dead as u8, 0);
        assert_eq!(Cell::Alive as u8, 1);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut cell = Cell::Dead;
        cell.toggle();
        assert_eq!(cell, Cell::Alive);
        cell.toggle();
        assert_eq!(cell, Cell::Dead);
    }
}
