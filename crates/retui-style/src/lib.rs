#![forbid(unsafe_code)]

//! Styling for cell-grid rendering: the 16-color console palette and a
//! small optional-field [`Style`] overlay.

pub mod color;

pub use color::Color;

/// An optional foreground/background pair applied over existing cells.
///
/// Unset fields leave the target cell's value untouched, so styles
/// compose by layering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
}

impl Style {
    /// An empty style that changes nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self { fg: None, bg: None }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Whether this style sets nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }
}
