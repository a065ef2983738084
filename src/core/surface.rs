/// Where the game draws, as far as the simulation needs to know.
use ratatui::layout::Rect;
use ratatui::text::Line;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Viewport and element measurements, independent of the presentation layer.
pub trait Surface {
    fn viewport(&self) -> Extent;

    /// Size of the element that would display `text`.
    fn measure(&self, text: &str) -> Extent;
}

/// A terminal region measured in cells; every word is one row tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalSurface {
    area: Rect,
}

impl TerminalSurface {
    pub fn new(area: Rect) -> Self {
        Self { area }
    }

    pub fn area(&self) -> Rect {
        self.area
    }
}

impl Surface for TerminalSurface {
    fn viewport(&self) -> Extent {
        Extent::new(self.area.width as f32, self.area.height as f32)
    }

    fn measure(&self, text: &str) -> Extent {
        Extent::new(Line::from(text).width() as f32, 1.0)
    }
}
