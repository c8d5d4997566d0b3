use super::Cell;
use rand::Rng;
use thiserror::Error;

/// Rows passed to [`Grid::from_rows`] did not form a square.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    Ragged {
        row: usize,
        actual: usize,
        expected: usize,
    },
}

/// Square board of cells with fixed dimensions.
/// Evolution writes into a fresh buffer, so every cell reads the same generation.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Fill a grid where each cell is alive with probability `alive_probability`,
    /// drawn independently per cell.
    pub fn random<R: Rng>(size: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| {
                if rng.random_bool(alive_probability) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();
        Self { size, cells }
    }

    /// Build a grid from 0/1 rows. Rows must be non-empty and square.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::Ragged {
                    row,
                    actual: values.len(),
                    expected: size,
                });
            }
            cells.extend(values.iter().copied().map(Cell::from_bit));
        }
        Ok(Self { size, cells })
    }

    /// Export as 0/1 rows
    pub fn rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().map(|cell| cell.as_bit()).collect())
            .collect()
    }

    /// Side length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.size && col < self.size).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position; out of bounds is ignored
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.size && col < self.size {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Count live neighbors among the 8 adjacent cells.
    /// Cells past the edge count as dead (no wraparound).
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Pure evolution - returns the next generation as a new grid
    pub fn evolve(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.get_index(row, col)];
                current.evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions as (row, col, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }
}
