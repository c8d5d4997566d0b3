/// A single cell of the board: either Dead or Alive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Numeric form used when exporting rows (alive = 1, dead = 0)
    pub const fn as_bit(self) -> u8 {
        match self {
            Cell::Alive => 1,
            Cell::Dead => 0,
        }
    }

    /// Any non-zero value counts as alive
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 { Cell::Dead } else { Cell::Alive }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert_eq!(Cell::Alive.evolve(0), Cell::Dead);
        assert_eq!(Cell::Alive.evolve(1), Cell::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::Alive.evolve(2), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert_eq!(Cell::Alive.evolve(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn test_three_neighbors_always_alive() {
        assert_eq!(Cell::Dead.evolve(3), Cell::Alive);
        assert_eq!(Cell::Alive.evolve(3), Cell::Alive);
    }

    #[test]
    fn test_dead_stays_dead_without_three() {
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::Dead.evolve(n), Cell::Dead, "{n} neighbors");
        }
    }

    #[test]
    fn test_bits() {
        assert_eq!(Cell::Alive.as_bit(), 1);
        assert_eq!(Cell::Dead.as_bit(), 0);
        assert_eq!(Cell::from_bit(7), Cell::Alive);
        assert_eq!(Cell::from_bit(0), Cell::Dead);
    }
}
