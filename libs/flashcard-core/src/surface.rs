//! The presentation surface the review session draws on.
//!
//! The core only knows this trait. The terminal binary provides the
//! crossterm implementation; tests provide a scripted one.

use crate::error::PresentationError;

/// Handle to a region created by a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(pub usize);

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Size {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

/// A rectangle of cells, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Input the session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The terminal changed size.
    Resize,
    /// A character key.
    Key(char),
    /// Interrupt the current wait (Ctrl-C in raw mode).
    Cancel,
    /// Anything else; ignored.
    Other,
}

/// Capabilities the session needs from a terminal.
pub trait Surface {
    /// Create a fixed-size region at the given position.
    fn create_region(&mut self, rect: Rect) -> Result<RegionId, PresentationError>;

    /// Move a region's top-left corner, keeping its size.
    fn move_region(&mut self, region: RegionId, x: u16, y: u16) -> Result<(), PresentationError>;

    /// Write one line of text at `row`/`col` inside a region. Text past the
    /// region's right edge is dropped.
    fn write(
        &mut self,
        region: RegionId,
        row: u16,
        col: u16,
        text: &str,
    ) -> Result<(), PresentationError>;

    /// Blank every cell of a region.
    fn clear(&mut self, region: RegionId) -> Result<(), PresentationError>;

    /// Push pending output for a region to the display.
    fn flush(&mut self, region: RegionId) -> Result<(), PresentationError>;

    /// Current terminal dimensions.
    fn size(&self) -> Result<Size, PresentationError>;

    /// Block until the next input event.
    fn next_event(&mut self) -> Result<InputEvent, PresentationError>;
}
