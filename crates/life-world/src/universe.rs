//! The universe: grid state and the generational step rule.

use crate::patterns::{self, Pattern};
use life_core::{Cell, Error, InitPattern, Result, UniverseConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// A fixed-size toroidal Game of Life grid.
///
/// Cells are stored row-major, one [`Cell`] per index; the index of
/// `(row, col)` is `row * width + col`. Neighbor lookups wrap around the
/// edges (top joins bottom, left joins right). Dimensions are fixed at
/// construction and never change.
///
/// All operations are synchronous and run to completion; a universe is meant
/// to be driven from a single thread and carries no internal locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "UniverseSnapshot")]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    // Double buffer for tick(). Not serialized; reallocated on deserialize.
    #[serde(skip)]
    scratch: Vec<Cell>,
    generation: u64,
}

/// Wire form of a serialized universe. Validated before it becomes a
/// [`Universe`], so a snapshot can never smuggle in a buffer whose length
/// disagrees with its dimensions.
#[derive(Deserialize)]
struct UniverseSnapshot {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    #[serde(default)]
    generation: u64,
}

impl TryFrom<UniverseSnapshot> for Universe {
    type Error = Error;

    fn try_from(snapshot: UniverseSnapshot) -> Result<Self> {
        let mut universe = Self::new(snapshot.width, snapshot.height)?;
        if snapshot.cells.len() != universe.cells.len() {
            return Err(Error::InvalidSnapshot {
                expected: universe.cells.len(),
                actual: snapshot.cells.len(),
            });
        }
        universe.cells = snapshot.cells;
        universe.generation = snapshot.generation;
        Ok(universe)
    }
}

impl Universe {
    /// Create a universe with every cell dead.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        debug!(width, height, "creating universe");

        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; size],
            scratch: vec![Cell::Dead; size],
            generation: 0,
        })
    }

    /// Create a universe from configuration, filling the initial pattern.
    ///
    /// `InitPattern::Random` uses a seeded ChaCha8 stream, so the same
    /// configuration always produces the same buffer.
    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        let mut universe = Self::new(config.width, config.height)?;

        match config.init {
            InitPattern::Empty => {}
            InitPattern::Random { seed, density } => {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for cell in &mut universe.cells {
                    *cell = if rng.gen::<f64>() < density {
                        Cell::Alive
                    } else {
                        Cell::Dead
                    };
                }
            }
        }

        Ok(universe)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of completed ticks since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the live cell buffer, row-major.
    ///
    /// This borrows the universe's own buffer rather than copying it, so a
    /// renderer that re-reads the slice after a `tick` sees the new
    /// generation without asking again.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Advance the simulation by one generation.
    ///
    /// Applies the B3/S23 rule to every cell over its 8 toroidal neighbors.
    /// The next generation is computed entirely into the scratch buffer from
    /// the current one, then committed with a swap, so no cell ever sees an
    /// already-updated neighbor within the same tick.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.get_index(row, col);
                let cell = self.cells[idx];

                self.scratch[idx] = match (cell, self.live_neighbor_count(row, col)) {
                    (Cell::Alive, x) if x <= 1 => Cell::Dead,
                    (Cell::Alive, 2 | 3) => Cell::Alive,
                    (Cell::Alive, x) if x >= 4 => Cell::Dead,
                    (Cell::Dead, 3) => Cell::Alive,
                    (cell, _) => cell,
                };
            }
        }

        std::mem::swap(&mut self.cells, &mut self.scratch);
        self.generation += 1;
        trace!(
            generation = self.generation,
            population = self.population(),
            "tick"
        );
    }

    /// Flip the state of the cell at `(row, col)`.
    ///
    /// This is a direct user-intent operation, so out-of-range coordinates
    /// are an error rather than being wrapped.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<()> {
        self.check_bounds(row, col)?;
        let idx = self.get_index(row, col);
        self.cells[idx].toggle();
        Ok(())
    }

    /// Set the cell at `(row, col)` to the given state.
    pub fn set_cell(&mut self, row: u32, col: u32, cell: Cell) -> Result<()> {
        self.check_bounds(row, col)?;
        let idx = self.get_index(row, col);
        self.cells[idx] = cell;
        Ok(())
    }

    /// Set several cells at once, wrapping coordinates around the torus.
    pub fn set_cells(&mut self, coords: &[(u32, u32)], cell: Cell) {
        for &(row, col) in coords {
            let (row, col) = self.wrap(i64::from(row), i64::from(col));
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Stamp a pattern's cells Alive relative to an anchor, wrapping at the
    /// edges.
    ///
    /// Additive only: cells outside the pattern keep whatever state they
    /// had, and cells inside it are overwritten to Alive. Never errors.
    pub fn stamp(&mut self, pattern: &Pattern, row: u32, col: u32) {
        for &(delta_row, delta_col) in pattern.offsets {
            let (row, col) = self.wrap(i64::from(row) + delta_row, i64::from(col) + delta_col);
            let idx = self.get_index(row, col);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Stamp the 5-cell glider anchored at `(row, col)`.
    pub fn stamp_glider(&mut self, row: u32, col: u32) {
        self.stamp(&patterns::GLIDER, row, col);
    }

    // Index math in usize so large grids cannot wrap in u32.
    fn get_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn check_bounds(&self, row: u32, col: u32) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Toroidal wrap of a possibly negative coordinate pair.
    fn wrap(&self, row: i64, col: i64) -> (u32, u32) {
        let row = row.rem_euclid(i64::from(self.height)) as u32;
        let col = col.rem_euclid(i64::from(self.width)) as u32;
        (row, col)
    }

    /// Count the live cells among the 8 toroidal neighbors of `(row, col)`.
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        // Wrapped edge rows/columns computed once, no modulo per neighbor.
        let above = if row == 0 { self.height - 1 } else { row - 1 };
        let below = if row == self.height - 1 { 0 } else { row + 1 };
        let left = if col == 0 { self.width - 1 } else { col - 1 };
        let right = if col == self.width - 1 { 0 } else { col + 1 };

        let mut count = 0;
        count += self.cells[self.get_index(above, left)] as u8;
        count += self.cells[self.get_index(above, col)] as u8;
        count += self.cells[self.get_index(above, right)] as u8;
        count += self.cells[self.get_index(row, left)] as u8;
        count += self.cells[self.get_index(row, right)] as u8;
        count += self.cells[self.get_index(below, left)] as u8;
        count += self.cells[self.get_index(below, col)] as u8;
        count += self.cells[self.get_index(below, right)] as u8;
        count
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
