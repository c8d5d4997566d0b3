use std::io::Write;

use tracing::warn;

use super::GridSurface;
use crate::application::{RunState, Status};
use crate::domain::Grid;

/// Writes boards as `#`/`.` rows followed by a status line.
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_board(&mut self, grid: &Grid, status: &Status) -> std::io::Result<()> {
        for row in grid.rows() {
            let line: String = row.iter().map(|&bit| if bit == 1 { '#' } else { '.' }).collect();
            writeln!(self.out, "{line}")?;
        }
        let state = match status.run_state {
            RunState::Running => "running",
            RunState::Stopped => "stopped",
        };
        writeln!(
            self.out,
            "generation {} | population {} | undo {} | {}",
            status.generation, status.population, status.undoable, state
        )?;
        self.out.flush()
    }
}

impl<W: Write> GridSurface for TextSurface<W> {
    fn present(&mut self, grid: &Grid, status: &Status) {
        if let Err(err) = self.write_board(grid, status) {
            warn!(error = %err, "failed to write board");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::LifeEngine;

    #[test]
    fn test_writes_rows_and_status() {
        let grid = Grid::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let engine = LifeEngine::from_grid(grid);
        let mut surface = TextSurface::new(Vec::new());
        surface.present(engine.grid(), &engine.status());
        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(text, ".#\n#.\ngeneration 0 | population 2 | undo 0 | stopped\n");
    }
}
