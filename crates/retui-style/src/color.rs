#![forbid(unsafe_code)]

//! The 16-color console palette.
//!
//! The display device consumes one attribute byte per cell: the low
//! nibble is the foreground index, the high nibble the background
//! (`attr = fg + bg * 16`). This matches what legacy console buffers
//! expect and is lossless for the palette below.

/// One of the 16 standard console colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    /// Black (index 0).
    #[default]
    Black = 0,
    /// Blue (index 1).
    Blue = 1,
    /// Green (index 2).
    Green = 2,
    /// Cyan (index 3).
    Cyan = 3,
    /// Red (index 4).
    Red = 4,
    /// Magenta (index 5).
    Magenta = 5,
    /// Yellow (index 6).
    Yellow = 6,
    /// White (index 7).
    White = 7,
    /// Bright black (index 8).
    BrightBlack = 8,
    /// Bright blue (index 9).
    BrightBlue = 9,
    /// Bright green (index 10).
    BrightGreen = 10,
    /// Bright cyan (index 11).
    BrightCyan = 11,
    /// Bright red (index 12).
    BrightRed = 12,
    /// Bright magenta (index 13).
    BrightMagenta = 13,
    /// Bright yellow (index 14).
    BrightYellow = 14,
    /// Bright white (index 15).
    BrightWhite = 15,
}

impl Color {
    /// Return the raw palette index (0–15).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Reconstruct from a palette index; out-of-range values wrap.
    #[must_use]
    pub const fn from_index(idx: u8) -> Self {
        match idx & 0x0F {
            0 => Self::Black,
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Yellow,
            7 => Self::White,
            8 => Self::BrightBlack,
            9 => Self::BrightBlue,
            10 => Self::BrightGreen,
            11 => Self::BrightCyan,
            12 => Self::BrightRed,
            13 => Self::BrightMagenta,
            14 => Self::BrightYellow,
            _ => Self::BrightWhite,
        }
    }

    /// Pack a foreground/background pair into one attribute byte.
    #[must_use]
    pub const fn pack_attr(fg: Color, bg: Color) -> u8 {
        fg.index() | (bg.index() << 4)
    }

    /// Unpack an attribute byte into (foreground, background).
    #[must_use]
    pub const fn unpack_attr(attr: u8) -> (Color, Color) {
        (Self::from_index(attr & 0x0F), Self::from_index(attr >> 4))
    }

    /// Map to the crossterm color for terminal output.
    #[must_use]
    pub const fn to_crossterm(self) -> crossterm::style::Color {
        use crossterm::style::Color as Ct;
        match self {
            Self::Black => Ct::Black,
            Self::Blue => Ct::DarkBlue,
            Self::Green => Ct::DarkGreen,
            Self::Cyan => Ct::DarkCyan,
            Self::Red => Ct::DarkRed,
            Self::Magenta => Ct::DarkMagenta,
            Self::Yellow => Ct::DarkYellow,
            Self::White => Ct::Grey,
            Self::BrightBlack => Ct::DarkGrey,
            Self::BrightBlue => Ct::Blue,
            Self::BrightGreen => Ct::Green,
            Self::BrightCyan => Ct::Cyan,
            Self::BrightRed => Ct::Red,
            Self::BrightMagenta => Ct::Magenta,
            Self::BrightYellow => Ct::Yellow,
            Self::BrightWhite => Ct::White,
        }
    }
}
