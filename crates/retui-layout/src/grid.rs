#![forbid(unsafe_code)]

//! Uniform grid tiling.
//!
//! A grid divides the parent extent by its fixed column/row counts
//! (integer truncation) and places cell (x, y) at `(x·cw, y·ch)` from
//! the parent top-left. Cells never overlap and never span; leftover
//! cells from the truncation stay unused at the right/bottom edge.

use crate::slot::{Bounds, Slot};
use retui_core::geometry::Vec2;

/// The uniform cell extent for a grid of `cols × rows` in `bounds`.
#[must_use]
pub fn grid_cell_extent(bounds: Bounds, cols: i32, rows: i32) -> Vec2 {
    bounds.extent() / Vec2::new(cols, rows)
}

/// Resolve the slot at grid position (x, y).
pub fn resolve_grid_cell(slot: &mut Slot, x: i32, y: i32, cols: i32, rows: i32, bounds: Bounds) {
    let cell = grid_cell_extent(bounds, cols, rows);
    slot.resolved_size = cell;
    slot.resolved_pos = bounds.tl + Vec2::new(x * cell.x, y * cell.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cells_are_uniform_and_truncated() {
        let bounds = Bounds::new(Vec2::ZERO, Vec2::new(9, 9));
        assert_eq!(grid_cell_extent(bounds, 3, 3), Vec2::new(3, 3));

        let mut slot = Slot::new();
        resolve_grid_cell(&mut slot, 2, 1, 3, 3, bounds);
        assert_eq!(slot.resolved_pos, Vec2::new(6, 3));
        assert_eq!(slot.resolved_size, Vec2::new(3, 3));
    }

    #[test]
    fn grid_respects_parent_origin() {
        let bounds = Bounds::new(Vec2::new(5, 7), Vec2::new(14, 16));
        let mut slot = Slot::new();
        resolve_grid_cell(&mut slot, 0, 0, 2, 2, bounds);
        assert_eq!(slot.resolved_pos, Vec2::new(5, 7));
        assert_eq!(slot.resolved_size, Vec2::new(5, 5));
    }

    proptest! {
        /// Every populated cell gets exactly `extent div (cols, rows)`
        /// and no two cells overlap.
        #[test]
        fn tiling_is_uniform_and_disjoint(
            cols in 1i32..8,
            rows in 1i32..8,
            width in 1i32..120,
            height in 1i32..60,
        ) {
            let bounds = Bounds::new(Vec2::ZERO, Vec2::new(width - 1, height - 1));
            let cell = grid_cell_extent(bounds, cols, rows);
            prop_assert_eq!(cell, Vec2::new(width / cols, height / rows));

            let mut boxes = Vec::new();
            for y in 0..rows {
                for x in 0..cols {
                    let mut slot = Slot::new();
                    resolve_grid_cell(&mut slot, x, y, cols, rows, bounds);
                    prop_assert_eq!(slot.resolved_size, cell);
                    boxes.push((slot.resolved_pos, slot.resolved_size));
                }
            }

            // Pairwise disjoint (skip degenerate zero-extent cells).
            for (i, &(pa, sa)) in boxes.iter().enumerate() {
                for &(pb, sb) in boxes.iter().skip(i + 1) {
                    if sa.x == 0 || sa.y == 0 || sb.x == 0 || sb.y == 0 {
                        continue;
                    }
                    let overlap_x = pa.x < pb.x + sb.x && pb.x < pa.x + sa.x;
                    let overlap_y = pa.y < pb.y + sb.y && pb.y < pa.y + sa.y;
                    prop_assert!(!(overlap_x && overlap_y));
                }
            }
        }
    }
}
