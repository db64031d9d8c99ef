#![forbid(unsafe_code)]

//! Buffer grid storage.
//!
//! The [`Buffer`] is a 2D grid of [`Cell`]s sized to the display. Cells
//! are stored in row-major order (`index = y * width + x`). The grid is
//! reallocated wholesale on resize, never incrementally grown, so a
//! resize also clears all previous frame content.
//!
//! Out-of-range writes and writes of the `'\0'` no-paint marker are
//! silently dropped; drawing never fails.

use crate::cell::Cell;
use crate::sprite::Sprite;
use retui_core::geometry::{Box2, Vec2};
use retui_style::Color;
use unicode_width::UnicodeWidthChar;

/// A 2D grid of display cells, one bulk write per frame.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer with the given dimensions. A zero extent on
    /// either axis yields an empty buffer that drops every write.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width as usize * height as usize],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full-buffer bounds as a corner-inclusive box.
    ///
    /// Invalid (empty) for a zero-sized buffer.
    #[inline]
    pub const fn bounds(&self) -> Box2 {
        Box2::from_tl_size(
            Vec2::ZERO,
            Vec2::new(self.width as i32, self.height as i32),
        )
    }

    /// Replace the grid with a freshly allocated one of the new size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::BLANK; width as usize * height as usize];
    }

    /// Reset every cell to blank without changing the size.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    /// Raw cells in row-major order, for the display's bulk write.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    fn index(&self, pos: Vec2) -> Option<usize> {
        if pos.x >= 0 && pos.x < self.width as i32 && pos.y >= 0 && pos.y < self.height as i32 {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// The cell at `pos`, if in bounds.
    #[inline]
    pub fn get(&self, pos: Vec2) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Write one cell. Out-of-range positions and no-paint cells are
    /// dropped silently.
    #[inline]
    pub fn set(&mut self, pos: Vec2, cell: Cell) {
        if cell.is_blank() {
            return;
        }
        if let Some(i) = self.index(pos) {
            self.cells[i] = cell;
        }
    }

    /// Write one glyph with explicit colors.
    #[inline]
    pub fn draw_glyph(&mut self, glyph: char, pos: Vec2, fg: Color, bg: Color) {
        self.set(pos, Cell::new(glyph, fg, bg));
    }

    /// Fill the inclusive rectangle `from..=to` with one glyph.
    ///
    /// Mirrors the run primitive border and background painting are built
    /// on: out-of-range portions of the run fall away cell by cell.
    pub fn fill(&mut self, glyph: char, from: Vec2, to: Vec2, fg: Color, bg: Color) {
        for y in from.y..=to.y {
            for x in from.x..=to.x {
                self.draw_glyph(glyph, Vec2::new(x, y), fg, bg);
            }
        }
    }

    /// Draw a single left-to-right text run starting at `pos`.
    ///
    /// Zero-width characters are skipped. A double-width glyph occupies
    /// two cells; the covered cell is blanked to a space so stale content
    /// cannot bleed through under it.
    pub fn draw_text(&mut self, text: &str, pos: Vec2, fg: Color, bg: Color) {
        let mut x = pos.x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            self.draw_glyph(ch, Vec2::new(x, pos.y), fg, bg);
            for cover in 1..w {
                self.draw_glyph(' ', Vec2::new(x + cover, pos.y), fg, bg);
            }
            x += w;
        }
    }

    /// Copy a sprite's cells to `pos`, skipping its transparent cells.
    pub fn blit(&mut self, sprite: &Sprite, pos: Vec2) {
        for y in 0..sprite.height() {
            for x in 0..sprite.width() {
                if let Some(cell) = sprite.get(Vec2::new(x, y))
                    && !cell.is_blank()
                {
                    self.set(pos + Vec2::new(x, y), *cell);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_blank() {
        let buf = Buffer::new(4, 3);
        assert_eq!(buf.cells().len(), 12);
        assert!(buf.cells().iter().all(Cell::is_blank));
        assert_eq!(buf.bounds(), Box2::from_tl_size(Vec2::ZERO, Vec2::new(4, 3)));
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_glyph('A', Vec2::new(1, 2), Color::White, Color::Blue);
        let cell = buf.get(Vec2::new(1, 2)).unwrap();
        assert_eq!(cell.glyph, 'A');
        assert_eq!(cell.bg, Color::Blue);
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_glyph('A', Vec2::new(-1, 0), Color::White, Color::Black);
        buf.draw_glyph('A', Vec2::new(4, 0), Color::White, Color::Black);
        buf.draw_glyph('A', Vec2::new(0, 3), Color::White, Color::Black);
        assert!(buf.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn nul_glyph_is_transparent() {
        let mut buf = Buffer::new(2, 1);
        buf.draw_glyph('A', Vec2::ZERO, Color::White, Color::Black);
        buf.draw_glyph('\0', Vec2::ZERO, Color::White, Color::Red);
        assert_eq!(buf.get(Vec2::ZERO).unwrap().glyph, 'A');
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut buf = Buffer::new(4, 3);
        buf.draw_glyph('A', Vec2::ZERO, Color::White, Color::Black);
        buf.resize(6, 5);
        assert_eq!(buf.width(), 6);
        assert_eq!(buf.height(), 5);
        assert_eq!(buf.cells().len(), 30);
        assert!(buf.cells().iter().all(Cell::is_blank));
    }

    #[test]
    fn fill_covers_inclusive_rectangle() {
        let mut buf = Buffer::new(5, 5);
        buf.fill('#', Vec2::new(1, 1), Vec2::new(3, 2), Color::White, Color::Black);
        assert_eq!(buf.get(Vec2::new(1, 1)).unwrap().glyph, '#');
        assert_eq!(buf.get(Vec2::new(3, 2)).unwrap().glyph, '#');
        assert!(buf.get(Vec2::new(4, 2)).unwrap().is_blank());
        assert!(buf.get(Vec2::new(1, 3)).unwrap().is_blank());
    }

    #[test]
    fn fill_clips_at_buffer_edge() {
        let mut buf = Buffer::new(3, 3);
        buf.fill('#', Vec2::new(2, 2), Vec2::new(5, 5), Color::White, Color::Black);
        assert_eq!(buf.get(Vec2::new(2, 2)).unwrap().glyph, '#');
        assert_eq!(
            buf.cells().iter().filter(|c| !c.is_blank()).count(),
            1
        );
    }

    #[test]
    fn draw_text_places_consecutive_glyphs() {
        let mut buf = Buffer::new(10, 1);
        buf.draw_text("hi!", Vec2::ZERO, Color::White, Color::Black);
        assert_eq!(buf.get(Vec2::new(0, 0)).unwrap().glyph, 'h');
        assert_eq!(buf.get(Vec2::new(1, 0)).unwrap().glyph, 'i');
        assert_eq!(buf.get(Vec2::new(2, 0)).unwrap().glyph, '!');
    }

    #[test]
    fn draw_text_advances_past_wide_glyphs() {
        let mut buf = Buffer::new(10, 1);
        buf.draw_text("宽x", Vec2::ZERO, Color::White, Color::Black);
        assert_eq!(buf.get(Vec2::new(0, 0)).unwrap().glyph, '宽');
        assert_eq!(buf.get(Vec2::new(1, 0)).unwrap().glyph, ' ');
        assert_eq!(buf.get(Vec2::new(2, 0)).unwrap().glyph, 'x');
    }

    #[test]
    fn blit_skips_transparent_cells() {
        let mut buf = Buffer::new(4, 2);
        buf.draw_glyph('.', Vec2::new(1, 0), Color::White, Color::Black);
        let sprite = Sprite::from_cells(
            2,
            1,
            vec![Cell::new('█', Color::Red, Color::Black), Cell::BLANK],
        );
        buf.blit(&sprite, Vec2::new(0, 0));
        assert_eq!(buf.get(Vec2::new(0, 0)).unwrap().glyph, '█');
        // Transparent sprite cell left the underlying glyph alone.
        assert_eq!(buf.get(Vec2::new(1, 0)).unwrap().glyph, '.');
    }
}
