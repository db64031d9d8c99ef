#![forbid(unsafe_code)]

//! A filled container widget.

use crate::border::{Border, BorderStyle};
use crate::tree::{Ui, WidgetId};
use crate::Widget;
use retui_core::geometry::Box2;
use retui_render::Buffer;
use retui_style::Color;

/// A panel fills its content area with a background glyph and can carry
/// a border. Children go into whatever layout manager the panel's node
/// is given; the panel itself draws only its backdrop.
#[derive(Debug, Clone)]
pub struct Panel {
    fill: char,
    fg: Color,
    bg: Color,
    border: Option<BorderStyle>,
}

impl Default for Panel {
    fn default() -> Self {
        Self {
            fill: ' ',
            fg: Color::Black,
            bg: Color::White,
            border: None,
        }
    }
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backdrop fill glyph (a space shows only the background).
    #[must_use]
    pub fn fill(mut self, glyph: char) -> Self {
        self.fill = glyph;
        self
    }

    #[must_use]
    pub fn colors(mut self, fg: Color, bg: Color) -> Self {
        self.fg = fg;
        self.bg = bg;
        self
    }

    /// Stitch a border of the given style around the panel.
    #[must_use]
    pub fn bordered(mut self, style: BorderStyle) -> Self {
        self.border = Some(style);
        self
    }
}

impl Widget for Panel {
    fn draw(&mut self, _ui: &mut Ui, _id: WidgetId, buf: &mut Buffer, content: Box2) {
        buf.fill(self.fill, content.tl, content.br, self.fg, self.bg);
    }

    fn border(&self) -> Option<Border> {
        self.border.map(|style| Border::new(style, self.fg, self.bg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::LayoutKind;
    use retui_core::geometry::Vec2;
    use retui_layout::{HAlign, Pivot, Slot, VAlign};

    #[test]
    fn panel_fills_and_borders_its_box() {
        let mut ui = Ui::new(8, 5);
        let root = ui.add_layout(LayoutKind::alignment());
        ui.add_widget(
            root,
            Slot::new()
                .pivot(Pivot::TopLeft)
                .h_align(HAlign::Left)
                .v_align(VAlign::Top),
            Box::new(Panel::new().bordered(BorderStyle::Double)),
        );
        ui.layout_root(root);

        let mut buf = Buffer::new(8, 5);
        let __clip = buf.bounds();
        ui.draw_layout(root, &mut buf, __clip);

        let g = BorderStyle::Double.glyphs();
        assert_eq!(buf.get(Vec2::ZERO).unwrap().glyph, g.tl);
        assert_eq!(buf.get(Vec2::new(7, 0)).unwrap().glyph, g.tr);
        assert_eq!(buf.get(Vec2::new(7, 4)).unwrap().glyph, g.br);
        assert_eq!(buf.get(Vec2::new(0, 4)).unwrap().glyph, g.bl);
        // Interior is backdrop, not border.
        assert_eq!(buf.get(Vec2::new(3, 2)).unwrap().glyph, ' ');
        assert_eq!(buf.get(Vec2::new(3, 2)).unwrap().bg, Color::White);
    }
}
