#![forbid(unsafe_code)]

//! Nine-way alignment resolution.
//!
//! The alignment strategy places its single slot inside the parent
//! bound; the overlay strategy runs the same resolution for every slot
//! against the same full parent bound (full-bleed layer stacking), so
//! both share this solver.

use crate::slot::{Bounds, HAlign, SizeMode, Slot, VAlign};
use retui_core::geometry::Vec2;

/// Resolve one slot's position and size against a parent bound.
pub fn resolve_aligned(slot: &mut Slot, bounds: Bounds) {
    let extent = bounds.extent();
    let center = extent / 2;

    slot.resolved_size = match slot.size_mode {
        SizeMode::Absolute => Vec2::new(
            slot.size.x.clamp(0, extent.x),
            slot.size.y.clamp(0, extent.y),
        ),
        SizeMode::Relative => extent.scale(slot.expand.0, slot.expand.1),
        SizeMode::Fill => extent,
    };

    let pivot = slot.pivot_offset();

    let x = match slot.h_align {
        HAlign::Absolute => bounds.tl.x + slot.offset.x,
        HAlign::Center => bounds.tl.x + center.x,
        HAlign::Left => bounds.tl.x,
        HAlign::Right => bounds.last.x - slot.resolved_size.x + 1,
    };

    let y = match slot.v_align {
        VAlign::Absolute => bounds.tl.y + slot.offset.y,
        VAlign::Center => bounds.tl.y + center.y,
        VAlign::Top => bounds.tl.y,
        VAlign::Bottom => bounds.last.y - slot.resolved_size.y + 1,
    };

    slot.resolved_pos = Vec2::new(x, y) - pivot;
}
