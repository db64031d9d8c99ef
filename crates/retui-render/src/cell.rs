#![forbid(unsafe_code)]

//! The cell type.
//!
//! One cell holds exactly one glyph plus a foreground/background color
//! pair, which packs into the one attribute byte the display device
//! consumes. The NUL glyph (`'\0'`) is the universal "no paint" marker:
//! writes of it are dropped, and sprite cells carrying it are treated as
//! transparent.

use retui_style::Color;

/// A single character cell: glyph plus color attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph occupying this cell. `'\0'` means "nothing here".
    pub glyph: char,
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl Cell {
    /// The blank cell: no glyph, black on black.
    pub const BLANK: Self = Self {
        glyph: '\0',
        fg: Color::Black,
        bg: Color::Black,
    };

    /// Create a cell.
    #[must_use]
    pub const fn new(glyph: char, fg: Color, bg: Color) -> Self {
        Self { glyph, fg, bg }
    }

    /// Create a cell with default colors.
    #[must_use]
    pub const fn from_char(glyph: char) -> Self {
        Self {
            glyph,
            fg: Color::White,
            bg: Color::Black,
        }
    }

    /// Whether this cell carries the no-paint marker.
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.glyph == '\0'
    }

    /// The packed attribute byte (`fg + bg * 16`) for the display device.
    #[must_use]
    pub const fn attr(&self) -> u8 {
        Color::pack_attr(self.fg, self.bg)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}
