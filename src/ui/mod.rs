mod button;

pub use button::Button;

use crate::application::{Command, LifeConfig};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 10.0;
pub const MARGIN: f32 = 20.0;

/// Fixed screen geometry: the board on the left, the control panel on the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub grid_size: usize,
    pub cell_size: f32,
}

impl Layout {
    pub fn new(grid_size: usize, cell_size: f32) -> Self {
        Self { grid_size, cell_size }
    }

    pub fn from_config(config: &LifeConfig) -> Self {
        Self::new(config.grid_size, config.cell_size)
    }

    /// Width and height of the board in pixels
    pub fn grid_extent(&self) -> f32 {
        self.grid_size as f32 * self.cell_size
    }

    /// X position where the panel starts
    pub fn panel_x(&self) -> f32 {
        MARGIN * 2.0 + self.grid_extent()
    }

    /// Window size that fits the board, the panel, and the button stack
    pub fn window_size(&self) -> (f32, f32) {
        let buttons = Command::ALL.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
        let panel_height = MARGIN * 2.0 + buttons + 160.0;
        (
            self.panel_x() + PANEL_WIDTH + MARGIN,
            (self.grid_extent() + MARGIN * 2.0).max(panel_height),
        )
    }
}

/// One button per command, stacked down the panel
pub fn create_buttons(layout: &Layout) -> Vec<Button> {
    let px = layout.panel_x();
    Command::ALL
        .iter()
        .enumerate()
        .map(|(idx, &command)| {
            let y = MARGIN + idx as f32 * (BUTTON_HEIGHT + BUTTON_GAP);
            Button::new(px, y, PANEL_WIDTH, BUTTON_HEIGHT, command)
        })
        .collect()
}

/// Y position just below the button stack, where the status labels go
pub fn labels_y() -> f32 {
    MARGIN + Command::ALL.len() as f32 * (BUTTON_HEIGHT + BUTTON_GAP) + MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_command_order() {
        let layout = Layout::new(20, 20.0);
        let buttons = create_buttons(&layout);
        let commands: Vec<_> = buttons.iter().map(|b| b.command()).collect();
        assert_eq!(commands, Command::ALL.to_vec());
    }

    #[test]
    fn test_panel_sits_right_of_board() {
        let layout = Layout::new(20, 20.0);
        assert_eq!(layout.grid_extent(), 400.0);
        assert_eq!(layout.panel_x(), 440.0);
        let (w, h) = layout.window_size();
        assert_eq!(w, 640.0);
        assert_eq!(h, 450.0);
    }
}
