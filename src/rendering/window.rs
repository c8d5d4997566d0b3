use std::rc::Rc;

use macroquad::prelude::*;

use super::GridSurface;
use crate::application::{RunState, Status};
use crate::domain::Grid;
use crate::ui::{self, Button, Layout, MARGIN};

/// Draws the board and the control panel into the macroquad window.
/// The buttons are the same set the input layer hit-tests.
pub struct WindowSurface {
    layout: Layout,
    buttons: Rc<[Button]>,
}

impl WindowSurface {
    pub fn new(layout: Layout, buttons: Rc<[Button]>) -> Self {
        Self { layout, buttons }
    }

    fn draw_board(&self, grid: &Grid) {
        let cell_size = self.layout.cell_size;
        let alive_color = Color::from_rgba(0, 255, 150, 255);
        let dead_color = Color::from_rgba(15, 15, 15, 255);
        let line_color = Color::from_rgba(40, 40, 40, 255);
        let draw_lines = cell_size >= 4.0;

        for (row, col, cell) in grid.iter_cells() {
            let x = MARGIN + col as f32 * cell_size;
            let y = MARGIN + row as f32 * cell_size;
            let color = if cell.is_alive() { alive_color } else { dead_color };
            draw_rectangle(x, y, cell_size, cell_size, color);
            if draw_lines {
                draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, line_color);
            }
        }
    }

    fn draw_panel(&self, status: &Status) {
        let px = self.layout.panel_x();
        let mouse_pos = mouse_position();

        self.buttons.iter().for_each(|btn| btn.draw(mouse_pos));

        let value_color = Color::from_rgba(180, 180, 180, 255);
        let (state_text, state_color) = match status.run_state {
            RunState::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
            RunState::Stopped => ("Paused", Color::from_rgba(255, 165, 0, 255)),
        };

        let generation = status.generation.to_string();
        let population = status.population.to_string();
        let undoable = status.undoable.to_string();

        let top = ui::labels_y();
        let labels: [(&str, f32, f32, Color); 8] = [
            ("Generation:", 0.0, 16.0, WHITE),
            (generation.as_str(), 20.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
            ("Population:", 50.0, 16.0, WHITE),
            (population.as_str(), 70.0, 14.0, value_color),
            ("Undo depth:", 95.0, 16.0, WHITE),
            (undoable.as_str(), 115.0, 14.0, value_color),
            ("Status:", 140.0, 16.0, WHITE),
            (state_text, 160.0, 16.0, state_color),
        ];
        labels.iter().for_each(|(text, dy, size, color)| {
            draw_text(text, px, top + dy, *size, *color);
        });
    }
}

impl GridSurface for WindowSurface {
    fn present(&mut self, grid: &Grid, status: &Status) {
        clear_background(BLACK);
        self.draw_board(grid);
        self.draw_panel(status);
    }
}
