#![forbid(unsafe_code)]

//! The per-child layout constraint record.
//!
//! A [`Slot`] carries everything a layout strategy needs to place one
//! child: alignment, size mode, explicit size, expand fraction, offset,
//! margin, pivot, and z-order — plus the resolved position/size the
//! owning strategy writes during a layout pass. Reading the outputs
//! before any pass has run yields the defaults; there is no cross-frame
//! partial state.

use retui_core::geometry::Vec2;

/// Horizontal placement of a child inside its parent bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    Right,
    #[default]
    Center,
    /// Place at parent top-left plus the slot's offset.
    Absolute,
}

/// Vertical placement of a child inside its parent bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    Bottom,
    #[default]
    Center,
    /// Place at parent top-left plus the slot's offset.
    Absolute,
}

/// How a slot's extent is derived from its parent's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Use the explicit size, clamped into the parent extent.
    Absolute,
    /// Scale the parent extent by the expand fraction.
    Relative,
    /// Take the whole parent extent.
    #[default]
    Fill,
}

/// Anchor point within a child's own box; the resolved position is
/// shifted so this point lands on the alignment target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pivot {
    TopLeft,
    Top,
    TopRight,
    Left,
    #[default]
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

/// The axis a flow layout stacks children along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowAxis {
    Horizontal,
    #[default]
    Vertical,
}

/// How a flow layout sizes children along its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowSizing {
    /// Every element gets the layout's fixed element size.
    Absolute,
    /// Proportional split of the extent by each slot's expand fraction,
    /// priority-sorted descending.
    #[default]
    Fit,
}

/// Per-child layout constraints plus manager-written outputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub h_align: HAlign,
    pub v_align: VAlign,
    pub size_mode: SizeMode,
    /// Explicit size, used by `SizeMode::Absolute` and canvas placement.
    pub size: Vec2,
    /// Expand fraction per axis, 0.0..=1.0.
    pub expand: (f32, f32),
    /// Relative offset for `Absolute` alignment and canvas placement.
    pub offset: Vec2,
    /// Symmetric inset applied between this slot's box and its content.
    pub margin: Vec2,
    pub pivot: Pivot,
    /// Paint-order tie-break among overlapping siblings.
    pub z_order: i32,
    /// Output: absolute top-left, written by the owning strategy.
    pub resolved_pos: Vec2,
    /// Output: extent in cells, written by the owning strategy.
    pub resolved_size: Vec2,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            h_align: HAlign::default(),
            v_align: VAlign::default(),
            size_mode: SizeMode::default(),
            size: Vec2::new(10, 10),
            expand: (1.0, 1.0),
            offset: Vec2::ZERO,
            margin: Vec2::ZERO,
            pivot: Pivot::default(),
            z_order: 0,
            resolved_pos: Vec2::ZERO,
            resolved_size: Vec2::ZERO,
        }
    }
}

impl Slot {
    /// A slot with all defaults (centered, filling, pivot center).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn h_align(mut self, align: HAlign) -> Self {
        self.h_align = align;
        self
    }

    #[must_use]
    pub fn v_align(mut self, align: VAlign) -> Self {
        self.v_align = align;
        self
    }

    #[must_use]
    pub fn size_mode(mut self, mode: SizeMode) -> Self {
        self.size_mode = mode;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn expand(mut self, x: f32, y: f32) -> Self {
        self.expand = (x, y);
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: Vec2) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn pivot(mut self, pivot: Pivot) -> Self {
        self.pivot = pivot;
        self
    }

    #[must_use]
    pub fn z_order(mut self, z: i32) -> Self {
        self.z_order = z;
        self
    }

    /// The pivot's offset from the slot's own top-left corner, in terms
    /// of the resolved size. Right/bottom edges anchor on the last cell.
    #[must_use]
    pub fn pivot_offset(&self) -> Vec2 {
        let size = self.resolved_size;
        let center = size / 2;
        match self.pivot {
            Pivot::TopLeft => Vec2::ZERO,
            Pivot::Top => Vec2::new(center.x, 0),
            Pivot::TopRight => Vec2::new(size.x - 1, 0),
            Pivot::Left => Vec2::new(0, center.y),
            Pivot::Center => center,
            Pivot::Right => Vec2::new(size.x - 1, center.y),
            Pivot::BottomLeft => Vec2::new(0, size.y - 1),
            Pivot::Bottom => Vec2::new(center.x, size.y - 1),
            Pivot::BottomRight => Vec2::new(size.x - 1, size.y - 1),
        }
    }

    /// The bounds handed to this slot's child layout manager: the
    /// resolved box inset by the margin on every side.
    #[must_use]
    pub fn inner_bounds(&self) -> Bounds {
        Bounds::new(
            self.resolved_pos + self.margin,
            self.resolved_pos + self.resolved_size - self.margin - Vec2::splat(1),
        )
    }
}

/// A parent bound for a layout pass: top-left cell and last (inclusive)
/// cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub tl: Vec2,
    pub last: Vec2,
}

impl Bounds {
    /// Create bounds from the first and last covered cell.
    #[must_use]
    pub const fn new(tl: Vec2, last: Vec2) -> Self {
        Self { tl, last }
    }

    /// Bounds covering a display of `width × height` cells.
    #[must_use]
    pub const fn of_display(width: u16, height: u16) -> Self {
        Self {
            tl: Vec2::ZERO,
            last: Vec2::new(width as i32 - 1, height as i32 - 1),
        }
    }

    /// Extent in cells (corner-inclusive).
    #[must_use]
    pub fn extent(&self) -> Vec2 {
        self.last - self.tl + Vec2::splat(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let slot = Slot::new();
        assert_eq!(slot.h_align, HAlign::Center);
        assert_eq!(slot.v_align, VAlign::Center);
        assert_eq!(slot.size_mode, SizeMode::Fill);
        assert_eq!(slot.size, Vec2::new(10, 10));
        assert_eq!(slot.expand, (1.0, 1.0));
        assert_eq!(slot.pivot, Pivot::Center);
        assert_eq!(slot.resolved_pos, Vec2::ZERO);
        assert_eq!(slot.resolved_size, Vec2::ZERO);
    }

    #[test]
    fn pivot_offsets_anchor_on_cells() {
        let mut slot = Slot::new();
        slot.resolved_size = Vec2::new(10, 6);
        slot.pivot = Pivot::TopLeft;
        assert_eq!(slot.pivot_offset(), Vec2::ZERO);
        slot.pivot = Pivot::Center;
        assert_eq!(slot.pivot_offset(), Vec2::new(5, 3));
        slot.pivot = Pivot::BottomRight;
        assert_eq!(slot.pivot_offset(), Vec2::new(9, 5));
        slot.pivot = Pivot::Right;
        assert_eq!(slot.pivot_offset(), Vec2::new(9, 3));
    }

    #[test]
    fn inner_bounds_inset_by_margin() {
        let mut slot = Slot::new().margin(Vec2::new(1, 2));
        slot.resolved_pos = Vec2::new(5, 5);
        slot.resolved_size = Vec2::new(10, 10);
        let inner = slot.inner_bounds();
        assert_eq!(inner.tl, Vec2::new(6, 7));
        assert_eq!(inner.last, Vec2::new(13, 11));
    }

    #[test]
    fn display_bounds_are_corner_inclusive() {
        let bounds = Bounds::of_display(80, 24);
        assert_eq!(bounds.tl, Vec2::ZERO);
        assert_eq!(bounds.last, Vec2::new(79, 23));
        assert_eq!(bounds.extent(), Vec2::new(80, 24));
    }
}
