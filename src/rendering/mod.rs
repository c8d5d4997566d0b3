mod text;
mod window;

pub use text::TextSurface;
pub use window::WindowSurface;

use tracing::debug;

use crate::application::Status;
use crate::domain::Grid;

/// Anything that can display a board and its status line.
pub trait GridSurface {
    fn present(&mut self, grid: &Grid, status: &Status);
}

/// Owns the optional surface. Without one, presenting is skipped.
#[derive(Default)]
pub struct Presenter {
    surface: Option<Box<dyn GridSurface>>,
    announced_missing: bool,
}

impl Presenter {
    pub fn new(surface: impl GridSurface + 'static) -> Self {
        Self {
            surface: Some(Box::new(surface)),
            announced_missing: false,
        }
    }

    /// Presenter with no surface attached
    pub fn detached() -> Self {
        Self::default()
    }

    /// Draw if a surface is attached; returns whether anything was drawn.
    pub fn present(&mut self, grid: &Grid, status: &Status) -> bool {
        match self.surface.as_mut() {
            Some(surface) => {
                surface.present(grid, status);
                true
            }
            None => {
                if !self.announced_missing {
                    debug!("no rendering surface attached, skipping presentation");
                    self.announced_missing = true;
                }
                false
            }
        }
    }
}
