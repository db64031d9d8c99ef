#![forbid(unsafe_code)]

//! Border glyph sets and partial-border stitching.
//!
//! A widget's border is painted over its *clipped* box, after its
//! content and children. [`paint_border`] compares the widget's full
//! (unclipped) corners against the corners that actually survived
//! clipping and handles nine connectivity cases: all four corners
//! present, exactly three (four rotations), and exactly two adjacent
//! (four rotations). Edge runs are drawn between two surviving corners,
//! or from a surviving corner to the clip boundary — which is what lets
//! a panel whose top edge has scrolled off-screen still show a clean,
//! correctly joined bottom and side border.

use retui_core::geometry::{Box2, Vec2};
use retui_render::Buffer;
use retui_style::Color;

/// Selectable border glyph families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Double,
    HeavySingle,
    LightSingle,
    DashedSingle,
    Rounded,
}

/// The six glyphs a border is stitched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub tl: char,
    pub tr: char,
    pub br: char,
    pub bl: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderStyle {
    /// The glyph set for this style.
    #[must_use]
    pub const fn glyphs(self) -> BorderSet {
        match self {
            Self::Double => BorderSet {
                tl: '\u{2554}',
                tr: '\u{2557}',
                br: '\u{255D}',
                bl: '\u{255A}',
                horizontal: '\u{2550}',
                vertical: '\u{2551}',
            },
            Self::HeavySingle => BorderSet {
                tl: '\u{250F}',
                tr: '\u{2513}',
                br: '\u{251B}',
                bl: '\u{2517}',
                horizontal: '\u{2501}',
                vertical: '\u{2503}',
            },
            Self::LightSingle => BorderSet {
                tl: '\u{250C}',
                tr: '\u{2510}',
                br: '\u{2518}',
                bl: '\u{2514}',
                horizontal: '\u{2500}',
                vertical: '\u{2502}',
            },
            Self::DashedSingle => BorderSet {
                tl: '\u{250C}',
                tr: '\u{2510}',
                br: '\u{2518}',
                bl: '\u{2514}',
                horizontal: '\u{2504}',
                vertical: '\u{2506}',
            },
            Self::Rounded => BorderSet {
                tl: '\u{256D}',
                tr: '\u{256E}',
                br: '\u{256F}',
                bl: '\u{2570}',
                horizontal: '\u{2500}',
                vertical: '\u{2502}',
            },
        }
    }
}

/// A border specification: glyph family plus colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub style: BorderStyle,
    pub fg: Color,
    pub bg: Color,
}

impl Border {
    #[must_use]
    pub const fn new(style: BorderStyle, fg: Color, bg: Color) -> Self {
        Self { style, fg, bg }
    }
}

const RIGHT: Vec2 = Vec2::new(1, 0);
const DOWN: Vec2 = Vec2::new(0, 1);

/// Stitch a border over `visible`, the widget's box after clipping.
///
/// `full` is the widget's unclipped box; a corner "survives" when its
/// clipped position equals its unclipped one. Combinations with fewer
/// than two adjacent surviving corners draw nothing.
pub fn paint_border(buf: &mut Buffer, full: Box2, visible: Box2, border: Border) {
    if !visible.is_valid() {
        return;
    }

    let g = border.style.glyphs();
    let (fg, bg) = (border.fg, border.bg);

    let tl = full.tl == visible.tl;
    let tr = full.tr == visible.tr;
    let br = full.br == visible.br;
    let bl = full.bl == visible.bl;

    let corner = |buf: &mut Buffer, glyph: char, pos: Vec2| {
        buf.draw_glyph(glyph, pos, fg, bg);
    };
    let run = |buf: &mut Buffer, glyph: char, from: Vec2, to: Vec2| {
        buf.fill(glyph, from, to, fg, bg);
    };

    match (tl, tr, br, bl) {
        // All four corners visible: the whole frame.
        (true, true, true, true) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.tr, full.tr);
            corner(buf, g.br, full.br);
            corner(buf, g.bl, full.bl);
            run(buf, g.horizontal, full.tl + RIGHT, full.tr - RIGHT);
            run(buf, g.vertical, full.tl + DOWN, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, full.br - RIGHT);
            run(buf, g.vertical, full.tr + DOWN, full.br - DOWN);
        }
        // Top pair: bottom edge clipped away; sides run to the clip.
        (true, true, false, false) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.tr, full.tr);
            run(buf, g.horizontal, full.tl + RIGHT, full.tr - RIGHT);
            run(buf, g.vertical, full.tl + DOWN, visible.bl);
            run(buf, g.vertical, full.tr + DOWN, visible.br);
        }
        // Right pair: left edge clipped away.
        (false, true, true, false) => {
            corner(buf, g.tr, full.tr);
            corner(buf, g.br, full.br);
            run(buf, g.horizontal, visible.tl, full.tr - RIGHT);
            run(buf, g.horizontal, visible.bl, full.br - RIGHT);
            run(buf, g.vertical, full.tr + DOWN, full.br - DOWN);
        }
        // Bottom pair: top edge clipped away.
        (false, false, true, true) => {
            corner(buf, g.br, full.br);
            corner(buf, g.bl, full.bl);
            run(buf, g.vertical, visible.tl, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, full.br - RIGHT);
            run(buf, g.vertical, visible.tr, full.br - DOWN);
        }
        // Left pair: right edge clipped away.
        (true, false, false, true) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.bl, full.bl);
            run(buf, g.horizontal, full.tl + RIGHT, visible.tr);
            run(buf, g.vertical, full.tl + DOWN, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, visible.br);
        }
        // Three corners: only the bottom-left is clipped away.
        (true, true, true, false) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.tr, full.tr);
            corner(buf, g.br, full.br);
            run(buf, g.horizontal, full.tl + RIGHT, full.tr - RIGHT);
            run(buf, g.vertical, full.tl + DOWN, visible.bl);
            run(buf, g.horizontal, visible.bl, full.br - RIGHT);
            run(buf, g.vertical, full.tr + DOWN, full.br - DOWN);
        }
        // Only the top-left is clipped away.
        (false, true, true, true) => {
            corner(buf, g.tr, full.tr);
            corner(buf, g.br, full.br);
            corner(buf, g.bl, full.bl);
            run(buf, g.horizontal, visible.tl, full.tr - RIGHT);
            run(buf, g.vertical, visible.tl, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, full.br - RIGHT);
            run(buf, g.vertical, full.tr + DOWN, full.br - DOWN);
        }
        // Only the top-right is clipped away.
        (true, false, true, true) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.br, full.br);
            corner(buf, g.bl, full.bl);
            run(buf, g.horizontal, full.tl + RIGHT, visible.tr);
            run(buf, g.vertical, full.tl + DOWN, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, full.br - RIGHT);
            run(buf, g.vertical, visible.tr, full.br - DOWN);
        }
        // Only the bottom-right is clipped away.
        (true, true, false, true) => {
            corner(buf, g.tl, full.tl);
            corner(buf, g.tr, full.tr);
            corner(buf, g.bl, full.bl);
            run(buf, g.horizontal, full.tl + RIGHT, full.tr - RIGHT);
            run(buf, g.vertical, full.tl + DOWN, full.bl - DOWN);
            run(buf, g.horizontal, full.bl + RIGHT, visible.br);
            run(buf, g.vertical, full.tr + DOWN, visible.br);
        }
        // Fewer than two adjacent corners: nothing to stitch.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use retui_core::geometry::resolve_draw_area;

    const STYLES: [BorderStyle; 5] = [
        BorderStyle::Double,
        BorderStyle::HeavySingle,
        BorderStyle::LightSingle,
        BorderStyle::DashedSingle,
        BorderStyle::Rounded,
    ];

    fn border(style: BorderStyle) -> Border {
        Border::new(style, Color::White, Color::Black)
    }

    fn glyph(buf: &Buffer, x: i32, y: i32) -> char {
        buf.get(Vec2::new(x, y)).unwrap().glyph
    }

    #[test]
    fn full_frame_draws_all_corners_and_edges() {
        for style in STYLES {
            let g = style.glyphs();
            let mut buf = Buffer::new(10, 10);
            let full = Box2::from_tl_size(Vec2::new(1, 1), Vec2::new(6, 4));
            paint_border(&mut buf, full, full, border(style));

            assert_eq!(glyph(&buf, 1, 1), g.tl);
            assert_eq!(glyph(&buf, 6, 1), g.tr);
            assert_eq!(glyph(&buf, 6, 4), g.br);
            assert_eq!(glyph(&buf, 1, 4), g.bl);
            assert_eq!(glyph(&buf, 3, 1), g.horizontal);
            assert_eq!(glyph(&buf, 3, 4), g.horizontal);
            assert_eq!(glyph(&buf, 1, 2), g.vertical);
            assert_eq!(glyph(&buf, 6, 3), g.vertical);
            // Interior untouched.
            assert_eq!(glyph(&buf, 3, 2), '\0');
        }
    }

    #[test]
    fn top_clipped_keeps_only_bottom_corners() {
        // Widget slid above the clip region: its top edge is gone, the
        // bottom corners plus bottom run must come out clean for every
        // glyph family.
        for style in STYLES {
            let g = style.glyphs();
            let mut buf = Buffer::new(12, 8);
            let clip = Box2::from_tl_size(Vec2::ZERO, Vec2::new(12, 8));
            let full = Box2::from_tl_size(Vec2::new(2, -3), Vec2::new(6, 8));
            let visible = resolve_draw_area(full, clip);
            paint_border(&mut buf, full, visible, border(style));

            assert_eq!(glyph(&buf, 2, 4), g.bl);
            assert_eq!(glyph(&buf, 7, 4), g.br);
            assert_eq!(glyph(&buf, 4, 4), g.horizontal);
            // No top corner glyphs anywhere.
            for y in 0..8 {
                for x in 0..12 {
                    let c = glyph(&buf, x, y);
                    assert_ne!(c, g.tl);
                    assert_ne!(c, g.tr);
                }
            }
            // Side runs reach the clip boundary.
            assert_eq!(glyph(&buf, 2, 0), g.vertical);
            assert_eq!(glyph(&buf, 7, 0), g.vertical);
        }
    }

    #[test]
    fn bottom_clipped_keeps_only_top_corners() {
        let g = BorderStyle::Double.glyphs();
        let mut buf = Buffer::new(12, 6);
        let clip = Box2::from_tl_size(Vec2::ZERO, Vec2::new(12, 6));
        let full = Box2::from_tl_size(Vec2::new(2, 2), Vec2::new(6, 10));
        let visible = resolve_draw_area(full, clip);
        paint_border(&mut buf, full, visible, border(BorderStyle::Double));

        assert_eq!(glyph(&buf, 2, 2), g.tl);
        assert_eq!(glyph(&buf, 7, 2), g.tr);
        assert_eq!(glyph(&buf, 4, 2), g.horizontal);
        // Side runs go down to the clip's last row.
        assert_eq!(glyph(&buf, 2, 5), g.vertical);
        assert_eq!(glyph(&buf, 7, 5), g.vertical);
    }

    #[test]
    fn left_clipped_keeps_only_right_corners() {
        let g = BorderStyle::LightSingle.glyphs();
        let mut buf = Buffer::new(10, 8);
        let clip = Box2::from_tl_size(Vec2::ZERO, Vec2::new(10, 8));
        let full = Box2::from_tl_size(Vec2::new(-4, 1), Vec2::new(10, 5));
        let visible = resolve_draw_area(full, clip);
        paint_border(&mut buf, full, visible, border(BorderStyle::LightSingle));

        assert_eq!(glyph(&buf, 5, 1), g.tr);
        assert_eq!(glyph(&buf, 5, 5), g.br);
        assert_eq!(glyph(&buf, 5, 3), g.vertical);
        // Horizontal runs reach the clip's left column.
        assert_eq!(glyph(&buf, 0, 1), g.horizontal);
        assert_eq!(glyph(&buf, 0, 5), g.horizontal);
    }

    #[test]
    fn right_clipped_keeps_only_left_corners() {
        let g = BorderStyle::Rounded.glyphs();
        let mut buf = Buffer::new(10, 8);
        let clip = Box2::from_tl_size(Vec2::ZERO, Vec2::new(10, 8));
        let full = Box2::from_tl_size(Vec2::new(4, 1), Vec2::new(10, 5));
        let visible = resolve_draw_area(full, clip);
        paint_border(&mut buf, full, visible, border(BorderStyle::Rounded));

        assert_eq!(glyph(&buf, 4, 1), g.tl);
        assert_eq!(glyph(&buf, 4, 5), g.bl);
        assert_eq!(glyph(&buf, 4, 3), g.vertical);
        assert_eq!(glyph(&buf, 9, 1), g.horizontal);
        assert_eq!(glyph(&buf, 9, 5), g.horizontal);
    }

    #[test]
    fn three_corner_case_runs_to_clip_boundary() {
        // Bottom-left corner pushed off the left edge; the other three
        // survive.
        let g = BorderStyle::Double.glyphs();
        let mut buf = Buffer::new(12, 8);
        let full = Box2::from_tl_size(Vec2::new(1, 1), Vec2::new(8, 5));
        let mut visible = full;
        visible.bl = Vec2::new(3, 5);
        paint_border(&mut buf, full, visible, border(BorderStyle::Double));

        assert_eq!(glyph(&buf, 1, 1), g.tl);
        assert_eq!(glyph(&buf, 8, 1), g.tr);
        assert_eq!(glyph(&buf, 8, 5), g.br);
        // Bottom run starts at the surviving portion.
        assert_eq!(glyph(&buf, 3, 5), g.horizontal);
    }

    #[test]
    fn invisible_box_draws_nothing() {
        let mut buf = Buffer::new(8, 8);
        let full = Box2::from_tl_size(Vec2::new(1, 1), Vec2::new(4, 4));
        paint_border(&mut buf, full, Box2::EMPTY, border(BorderStyle::Double));
        assert!(buf.cells().iter().all(|c| c.is_blank()));
    }
}
