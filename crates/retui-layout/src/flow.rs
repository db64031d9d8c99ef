#![forbid(unsafe_code)]

//! Linear stacking along one axis.
//!
//! Children stack in slot order along the flow axis. Along-axis sizing
//! is either a fixed element size or a proportional `Fit` split of the
//! parent extent by each slot's expand fraction (priority-sorted
//! descending); the **last slot absorbs the rounding remainder**, so
//! along-axis extents always sum to the parent extent exactly — no gaps,
//! no overlaps. Cross-axis sizing and alignment mirror the alignment
//! strategy. A slot whose along-axis size resolves to zero or less is
//! skipped during placement and does not advance the running offset.

use crate::slot::{Bounds, FlowAxis, FlowSizing, HAlign, SizeMode, Slot, VAlign};
use retui_core::geometry::Vec2;

#[inline]
fn along(v: Vec2, axis: FlowAxis) -> i32 {
    match axis {
        FlowAxis::Horizontal => v.x,
        FlowAxis::Vertical => v.y,
    }
}

#[inline]
fn expand_along(slot: &Slot, axis: FlowAxis) -> f32 {
    match axis {
        FlowAxis::Horizontal => slot.expand.0,
        FlowAxis::Vertical => slot.expand.1,
    }
}

#[inline]
fn set_size_along(slot: &mut Slot, axis: FlowAxis, val: i32) {
    match axis {
        FlowAxis::Horizontal => slot.resolved_size.x = val,
        FlowAxis::Vertical => slot.resolved_size.y = val,
    }
}

#[inline]
fn compose(axis: FlowAxis, along: i32, cross: i32) -> Vec2 {
    match axis {
        FlowAxis::Horizontal => Vec2::new(along, cross),
        FlowAxis::Vertical => Vec2::new(cross, along),
    }
}

/// Resolve a flow layout's slots against a parent bound.
pub fn resolve_flow(
    slots: &mut [Slot],
    axis: FlowAxis,
    sizing: FlowSizing,
    element_size: i32,
    bounds: Bounds,
) {
    if slots.is_empty() {
        return;
    }

    let extent = bounds.extent();
    let center = extent / 2;
    let extent_along = along(extent, axis);

    // Along-axis sizing, highest expand fraction first.
    let mut order: Vec<usize> = (0..slots.len()).collect();
    order.sort_by(|&a, &b| {
        expand_along(&slots[b], axis).total_cmp(&expand_along(&slots[a], axis))
    });
    for &i in &order {
        let size = match sizing {
            FlowSizing::Absolute => element_size,
            FlowSizing::Fit => (extent_along as f32 * expand_along(&slots[i], axis)) as i32,
        };
        set_size_along(&mut slots[i], axis, size);
    }

    // The last slot absorbs the rounding remainder so the along-axis
    // sizes sum to the parent extent exactly.
    let occupied: i32 = slots.iter().map(|s| along(s.resolved_size, axis)).sum();
    let last = slots.len() - 1;
    let adjusted = along(slots[last].resolved_size, axis) + (extent_along - occupied);
    set_size_along(&mut slots[last], axis, adjusted);

    // Placement in slot order.
    let mut run = 0;
    for slot in slots.iter_mut() {
        let along_size = along(slot.resolved_size, axis);
        if along_size <= 0 {
            continue;
        }

        let (cross_extent, cross_expand, cross_explicit) = match axis {
            FlowAxis::Horizontal => (extent.y, slot.expand.1, slot.size.y),
            FlowAxis::Vertical => (extent.x, slot.expand.0, slot.size.x),
        };
        let cross_size = match slot.size_mode {
            SizeMode::Absolute => cross_explicit.clamp(0, cross_extent),
            SizeMode::Relative => (cross_extent as f32 * cross_expand) as i32,
            SizeMode::Fill => cross_extent,
        };
        slot.resolved_size = compose(axis, along_size, cross_size);

        let pivot = slot.pivot_offset();
        let along_pos = along(bounds.tl, axis) + along(pivot, axis) + run;
        let cross_pos = match axis {
            FlowAxis::Vertical => match slot.h_align {
                HAlign::Absolute => bounds.tl.x + slot.offset.x,
                HAlign::Center => bounds.tl.x + center.x,
                HAlign::Left => bounds.tl.x,
                HAlign::Right => bounds.last.x - cross_size + 1,
            },
            FlowAxis::Horizontal => match slot.v_align {
                VAlign::Absolute => bounds.tl.y + slot.offset.y,
                VAlign::Center => bounds.tl.y + center.y,
                VAlign::Top => bounds.tl.y,
                VAlign::Bottom => bounds.last.y - cross_size + 1,
            },
        };

        slot.resolved_pos = compose(axis, along_pos, cross_pos) - pivot;
        run += along_size;
    }
}
