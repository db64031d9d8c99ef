#![forbid(unsafe_code)]

//! Free placement.
//!
//! Canvas slots resolve independently: the explicit size is taken as-is
//! (no clamping against the parent) and the position is the parent
//! top-left plus the slot's offset, shifted by the pivot. Siblings never
//! interact; overlap is resolved at paint time by z-order.

use crate::slot::{Bounds, Slot};

/// Resolve one canvas slot.
pub fn resolve_canvas(slot: &mut Slot, bounds: Bounds) {
    slot.resolved_size = slot.size;
    let pivot = slot.pivot_offset();
    slot.resolved_pos = bounds.tl + slot.offset - pivot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Pivot;
    use retui_core::geometry::Vec2;

    #[test]
    fn canvas_uses_explicit_size_unclamped() {
        let mut slot = Slot::new()
            .size(Vec2::new(100, 50))
            .pivot(Pivot::TopLeft)
            .offset(Vec2::new(2, 3));
        resolve_canvas(&mut slot, Bounds::new(Vec2::new(10, 10), Vec2::new(19, 19)));
        assert_eq!(slot.resolved_size, Vec2::new(100, 50));
        assert_eq!(slot.resolved_pos, Vec2::new(12, 13));
    }

    #[test]
    fn canvas_pivot_shifts_position() {
        let mut slot = Slot::new()
            .size(Vec2::new(10, 10))
            .pivot(Pivot::Center)
            .offset(Vec2::new(20, 20));
        resolve_canvas(&mut slot, Bounds::new(Vec2::ZERO, Vec2::new(39, 39)));
        assert_eq!(slot.resolved_pos, Vec2::new(15, 15));
    }
}
