#![forbid(unsafe_code)]

//! A single-run text widget.

use crate::draw_text_clipped;
use crate::tree::{Ui, WidgetId};
use crate::Widget;
use retui_core::geometry::Box2;
use retui_render::Buffer;
use retui_style::Color;
use unicode_width::UnicodeWidthStr;

/// Horizontal placement of the text inside the content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// A label draws one line of text, clipped to its content box.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    fg: Color,
    bg: Color,
    align: TextAlign,
}

impl Label {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: Color::Black,
            bg: Color::White,
            align: TextAlign::Left,
        }
    }

    #[must_use]
    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    #[must_use]
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Replace the text. Takes effect on the next draw.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw(&mut self, _ui: &mut Ui, _id: WidgetId, buf: &mut Buffer, content: Box2) {
        let width = content.width();
        let text_width = UnicodeWidthStr::width(self.text.as_str()) as i32;
        let x = match self.align {
            TextAlign::Left => content.tl.x,
            TextAlign::Center => content.tl.x + (width - text_width).max(0) / 2,
        };
        draw_text_clipped(
            buf,
            x,
            content.tl.y,
            &self.text,
            self.fg,
            self.bg,
            content.br.x + 1,
        );
    }
}
