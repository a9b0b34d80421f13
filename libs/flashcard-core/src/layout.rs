//! Region geometry for the review screen.

use crate::surface::{Rect, Size};

pub const INFO_WIDTH: u16 = 20;
pub const INFO_HEIGHT: u16 = 4;
pub const CARD_WIDTH: u16 = 20;
pub const CARD_HEIGHT: u16 = 4;

/// Positions of the info, front and back regions.
///
/// Info sits in the top-left corner. Front and back are centred
/// horizontally, front ending just above the middle row and back starting
/// just below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub info: Rect,
    pub front: Rect,
    pub back: Rect,
}

impl Layout {
    pub fn for_size(size: Size) -> Self {
        let mid_row = size.rows / 2;
        let card_x = (size.cols / 2).saturating_sub(CARD_WIDTH / 2);

        Self {
            info: Rect::new(0, 0, INFO_WIDTH, INFO_HEIGHT),
            front: Rect::new(
                card_x,
                mid_row.saturating_sub(1 + CARD_HEIGHT),
                CARD_WIDTH,
                CARD_HEIGHT,
            ),
            back: Rect::new(card_x, mid_row + 1, CARD_WIDTH, CARD_HEIGHT),
        }
    }
}
