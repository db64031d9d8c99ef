#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates are in character cells, 0-indexed, origin at the
//! top-left of the display. Rectangles are corner-inclusive: a box whose
//! top-left and bottom-right corners coincide covers exactly one cell.

use std::ops::{Add, Div, Mul, Sub};

/// An integer 2D point or extent in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Create a vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Scale by a fractional per-axis percentage, truncating toward zero.
    #[inline]
    pub fn scale(self, fx: f32, fy: f32) -> Self {
        Self {
            x: (self.x as f32 * fx) as i32,
            y: (self.y as f32 * fy) as i32,
        }
    }

    /// Clamp each component into `[min, max]` of the corresponding
    /// component of the bounds.
    #[inline]
    pub fn clamp(self, min: Vec2, max: Vec2) -> Self {
        Self {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Div<i32> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn div(self, rhs: i32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle stored as its four corners.
///
/// A valid box is always axis-aligned and non-rotated; the four corners
/// are kept separately because clipping against an ancestor region
/// (see [`resolve_draw_area`]) moves each corner independently.
///
/// An *invalid* box (`br < tl` on either axis) is the "nothing to draw"
/// sentinel and is consumed silently by the render path rather than
/// treated as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Box2 {
    pub tl: Vec2,
    pub tr: Vec2,
    pub br: Vec2,
    pub bl: Vec2,
}

impl Box2 {
    /// The canonical empty (invalid) box.
    pub const EMPTY: Self = Self {
        tl: Vec2::new(0, 0),
        tr: Vec2::new(-1, 0),
        br: Vec2::new(-1, -1),
        bl: Vec2::new(0, -1),
    };

    /// Build a box from its top-left corner and a width/height extent.
    ///
    /// A zero or negative extent on either axis yields an invalid box.
    pub const fn from_tl_size(tl: Vec2, size: Vec2) -> Self {
        Self {
            tl,
            tr: Vec2::new(tl.x + size.x - 1, tl.y),
            br: Vec2::new(tl.x + size.x - 1, tl.y + size.y - 1),
            bl: Vec2::new(tl.x, tl.y + size.y - 1),
        }
    }

    /// Width in cells (corner-inclusive). Meaningless for invalid boxes.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.br.x - self.tl.x + 1
    }

    /// Height in cells (corner-inclusive). Meaningless for invalid boxes.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.br.y - self.tl.y + 1
    }

    /// A box is valid iff its bottom-right corner is at or past its
    /// top-left corner on both axes.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.br.x >= self.tl.x && self.br.y >= self.tl.y
    }

    /// Whether `pos` lies inside this box. Always false for invalid boxes.
    #[inline]
    pub const fn contains(&self, pos: Vec2) -> bool {
        self.is_valid()
            && pos.x >= self.tl.x
            && pos.x <= self.br.x
            && pos.y >= self.tl.y
            && pos.y <= self.br.y
    }

    /// Whether all four corners of `other` lie inside this box.
    pub const fn contains_box(&self, other: &Box2) -> bool {
        self.contains(other.tl)
            && self.contains(other.tr)
            && self.contains(other.br)
            && self.contains(other.bl)
    }
}

/// Clip a widget's box against the drawing area handed down by its parent.
///
/// This is an approximate rectangle intersection: each of the widget's
/// four corners is tested for containment in `parent`; a corner that
/// falls outside keeps one of its own axes and substitutes the parent's
/// matching edge coordinate on the other, whichever mixed point the
/// parent contains. It relies on both boxes being axis-aligned and
/// properly nested, and under unusual nested-margin combinations the
/// result can degenerate; callers accept that in exchange for the cheap
/// per-corner test. If no corner of `widget` is contained at all, the
/// result is [`Box2::EMPTY`].
pub fn resolve_draw_area(widget: Box2, parent: Box2) -> Box2 {
    if !parent.contains(widget.tl)
        && !parent.contains(widget.tr)
        && !parent.contains(widget.br)
        && !parent.contains(widget.bl)
    {
        return Box2::EMPTY;
    }

    let mut res = parent;

    res.tl = clip_corner(widget.tl, parent.tl, &parent);
    res.tr = clip_corner(widget.tr, parent.tr, &parent);
    res.br = clip_corner(widget.br, parent.br, &parent);
    res.bl = clip_corner(widget.bl, parent.bl, &parent);

    res
}

/// Resolve one corner: keep it if contained, otherwise substitute the
/// parent's edge coordinate on whichever axis still admits containment.
/// A corner that fails all three tests stays at the parent's own corner.
fn clip_corner(corner: Vec2, parent_corner: Vec2, parent: &Box2) -> Vec2 {
    if parent.contains(corner) {
        corner
    } else if parent.contains(Vec2::new(corner.x, parent_corner.y)) {
        Vec2::new(corner.x, parent_corner.y)
    } else if parent.contains(Vec2::new(parent_corner.x, corner.y)) {
        Vec2::new(parent_corner.x, corner.y)
    } else {
        parent_corner
    }
}

#[cfg(test)]
mod tests {
    use super::{Box2, Vec2, resolve_draw_area};

    #[test]
    fn vec2_componentwise_ops() {
        let a = Vec2::new(3, 4);
        let b = Vec2::new(1, 2);
        assert_eq!(a + b, Vec2::new(4, 6));
        assert_eq!(a - b, Vec2::new(2, 2));
        assert_eq!(a * b, Vec2::new(3, 8));
        assert_eq!(a / b, Vec2::new(3, 2));
        assert_eq!(a * 2, Vec2::new(6, 8));
        assert_eq!(a / 2, Vec2::new(1, 2));
    }

    #[test]
    fn vec2_scale_truncates() {
        assert_eq!(Vec2::new(18, 18).scale(0.3, 0.7), Vec2::new(5, 12));
        assert_eq!(Vec2::new(10, 10).scale(0.5, 0.5), Vec2::new(5, 5));
        assert_eq!(Vec2::new(7, 7).scale(0.5, 0.5), Vec2::new(3, 3));
    }

    #[test]
    fn box_from_tl_size_corners() {
        let b = Box2::from_tl_size(Vec2::new(2, 3), Vec2::new(4, 5));
        assert_eq!(b.tl, Vec2::new(2, 3));
        assert_eq!(b.tr, Vec2::new(5, 3));
        assert_eq!(b.br, Vec2::new(5, 7));
        assert_eq!(b.bl, Vec2::new(2, 7));
        assert_eq!(b.width(), 4);
        assert_eq!(b.height(), 5);
    }

    #[test]
    fn single_cell_box_is_valid() {
        let b = Box2::from_tl_size(Vec2::new(1, 1), Vec2::new(1, 1));
        assert!(b.is_valid());
        assert!(b.contains(Vec2::new(1, 1)));
        assert!(!b.contains(Vec2::new(2, 1)));
    }

    #[test]
    fn empty_box_is_invalid_and_contains_nothing() {
        assert!(!Box2::EMPTY.is_valid());
        assert!(!Box2::EMPTY.contains(Vec2::ZERO));
        assert!(!Box2::from_tl_size(Vec2::ZERO, Vec2::ZERO).is_valid());
    }

    #[test]
    fn contains_is_corner_inclusive() {
        let b = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        assert!(b.contains(Vec2::new(0, 0)));
        assert!(b.contains(Vec2::new(9, 9)));
        assert!(!b.contains(Vec2::new(10, 0)));
        assert!(!b.contains(Vec2::new(0, 10)));
    }

    #[test]
    fn clip_fully_contained_returns_widget_box() {
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(20, 20));
        let widget = Box2::from_tl_size(Vec2::new(3, 4), Vec2::new(5, 6));
        assert_eq!(resolve_draw_area(widget, parent), widget);
    }

    #[test]
    fn clip_disjoint_returns_empty() {
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(20, 20), Vec2::new(5, 5));
        assert_eq!(resolve_draw_area(widget, parent), Box2::EMPTY);
    }

    #[test]
    fn clip_top_edge_scrolled_off() {
        // Widget hangs off the top of the parent; the surviving bottom
        // corners keep their position, the top corners land on the
        // parent's top edge.
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(2, -3), Vec2::new(5, 6));
        let clipped = resolve_draw_area(widget, parent);
        assert!(clipped.is_valid());
        assert_eq!(clipped.tl, Vec2::new(2, 0));
        assert_eq!(clipped.tr, Vec2::new(6, 0));
        assert_eq!(clipped.br, widget.br);
        assert_eq!(clipped.bl, widget.bl);
    }

    #[test]
    fn clip_bottom_edge_overflows() {
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(2, 6), Vec2::new(5, 8));
        let clipped = resolve_draw_area(widget, parent);
        assert_eq!(clipped.tl, widget.tl);
        assert_eq!(clipped.tr, widget.tr);
        assert_eq!(clipped.br, Vec2::new(6, 9));
        assert_eq!(clipped.bl, Vec2::new(2, 9));
    }

    #[test]
    fn clip_left_edge_overflows() {
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(-4, 2), Vec2::new(8, 4));
        let clipped = resolve_draw_area(widget, parent);
        assert_eq!(clipped.tl, Vec2::new(0, 2));
        assert_eq!(clipped.bl, Vec2::new(0, 5));
        assert_eq!(clipped.tr, widget.tr);
        assert_eq!(clipped.br, widget.br);
    }

    #[test]
    fn clip_right_edge_overflows() {
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(6, 2), Vec2::new(8, 4));
        let clipped = resolve_draw_area(widget, parent);
        assert_eq!(clipped.tl, widget.tl);
        assert_eq!(clipped.bl, widget.bl);
        assert_eq!(clipped.tr, Vec2::new(9, 2));
        assert_eq!(clipped.br, Vec2::new(9, 5));
    }

    mod clip_properties {
        use super::*;
        use proptest::prelude::*;

        fn boxes() -> impl Strategy<Value = (Box2, Box2)> {
            (
                (-30i32..30, -30i32..30, 1i32..40, 1i32..40),
                (0i32..20, 0i32..20, 1i32..40, 1i32..40),
            )
                .prop_map(|((wx, wy, ww, wh), (px, py, pw, ph))| {
                    (
                        Box2::from_tl_size(Vec2::new(wx, wy), Vec2::new(ww, wh)),
                        Box2::from_tl_size(Vec2::new(px, py), Vec2::new(pw, ph)),
                    )
                })
        }

        proptest! {
            #[test]
            fn empty_iff_no_corner_contained((widget, parent) in boxes()) {
                let any_corner = parent.contains(widget.tl)
                    || parent.contains(widget.tr)
                    || parent.contains(widget.br)
                    || parent.contains(widget.bl);
                let clipped = resolve_draw_area(widget, parent);
                prop_assert_eq!(clipped == Box2::EMPTY, !any_corner);
            }

            #[test]
            fn contained_widget_is_unchanged(
                (px, py, pw, ph) in (0i32..20, 0i32..20, 4i32..40, 4i32..40),
                (fx, fy, fw, fh) in (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0),
            ) {
                let parent = Box2::from_tl_size(Vec2::new(px, py), Vec2::new(pw, ph));
                let ww = 1 + (fw * (pw - 1) as f64) as i32;
                let wh = 1 + (fh * (ph - 1) as f64) as i32;
                let wx = px + (fx * (pw - ww) as f64) as i32;
                let wy = py + (fy * (ph - wh) as f64) as i32;
                let widget = Box2::from_tl_size(Vec2::new(wx, wy), Vec2::new(ww, wh));
                prop_assert!(parent.contains_box(&widget));
                prop_assert_eq!(resolve_draw_area(widget, parent), widget);
            }

            #[test]
            fn result_never_exceeds_either_box((widget, parent) in boxes()) {
                let clipped = resolve_draw_area(widget, parent);
                prop_assume!(clipped.is_valid());
                prop_assert!(clipped.tl.x >= parent.tl.x.min(widget.tl.x));
                prop_assert!(clipped.tl.y >= parent.tl.y.min(widget.tl.y));
                prop_assert!(clipped.br.x <= parent.br.x.max(widget.br.x));
                prop_assert!(clipped.br.y <= parent.br.y.max(widget.br.y));
            }
        }
    }

    #[test]
    fn clip_corner_overlap_keeps_one_corner() {
        // Only the widget's top-left corner is inside the parent.
        let parent = Box2::from_tl_size(Vec2::new(0, 0), Vec2::new(10, 10));
        let widget = Box2::from_tl_size(Vec2::new(7, 7), Vec2::new(6, 6));
        let clipped = resolve_draw_area(widget, parent);
        assert!(clipped.is_valid());
        assert_eq!(clipped.tl, Vec2::new(7, 7));
        assert_eq!(clipped.br, Vec2::new(9, 9));
    }
}
