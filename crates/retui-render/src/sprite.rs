#![forbid(unsafe_code)]

//! Pre-rasterized glyph grids.
//!
//! An asset loader rasterizes images (or any other source) down to a
//! grid of `{glyph, color}` cells at whatever cell dimensions the caller
//! requested; the render core treats the result as opaque data and only
//! copies it. Transparent pixels arrive as `'\0'` cells and are skipped
//! when blitting.

use crate::cell::Cell;
use retui_core::geometry::Vec2;

/// An opaque, pre-rasterized 2D grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Sprite {
    /// Build a sprite from row-major cells.
    ///
    /// The cell count must equal `width * height`; a mismatched supplier
    /// is a programming error on the loader side.
    #[must_use]
    pub fn from_cells(width: i32, height: i32, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), (width.max(0) * height.max(0)) as usize);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Sprite width in cells.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Sprite height in cells.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// The cell at `pos`, if in bounds.
    #[inline]
    pub fn get(&self, pos: Vec2) -> Option<&Cell> {
        if pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height {
            self.cells.get(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }
}
