#![forbid(unsafe_code)]

//! Retained widget tree for retui.
//!
//! A [`Widget`] is a capability object: the tree calls its lifecycle
//! hooks (construct, optional tick, draw, destroy) and its input hooks
//! (registered action names, focus). Widgets never walk the tree
//! themselves — recursion, clipping, border stitching, and popup
//! compositing are the tree's job (see [`tree::Ui`]).

pub mod border;
pub mod label;
pub mod panel;
pub mod tree;

pub use border::{Border, BorderSet, BorderStyle, paint_border};
pub use label::{Label, TextAlign};
pub use panel::Panel;
pub use tree::{LayoutId, LayoutKind, SlotId, Ui, WidgetId};

use retui_core::event::KeyEvent;
use retui_core::geometry::Box2;
use retui_render::Buffer;
use retui_style::Color;
use tree::Ui as UiTree;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A renderable, constructible node behavior.
///
/// All hooks default to no-ops so simple widgets implement only what
/// they need. Hooks that receive the tree may mutate it — including the
/// widget's own slot, which during a draw is shielded from triggering a
/// relayout by the tree's pending-draw guard.
pub trait Widget {
    /// Called once, when the widget is first attached to a slot.
    fn on_construct(&mut self, ui: &mut UiTree, id: WidgetId) {
        let _ = (ui, id);
    }

    /// Whether the widget wants per-frame ticks. Sampled at construction.
    fn should_tick(&self) -> bool {
        false
    }

    /// Per-frame tick with the previous frame's duration in seconds.
    fn on_tick(&mut self, ui: &mut UiTree, id: WidgetId, dt: f32) {
        let _ = (ui, id, dt);
    }

    /// Paint own background/content into the clipped content box.
    ///
    /// Children and the border are drawn by the tree afterwards; the
    /// border is painted last and is never occluded by content.
    fn draw(&mut self, ui: &mut UiTree, id: WidgetId, buf: &mut Buffer, content: Box2) {
        let _ = (ui, id, buf, content);
    }

    /// The border to stitch over this widget's clipped box, if any.
    fn border(&self) -> Option<Border> {
        None
    }

    /// Called once when the widget is destroyed, before its children.
    fn on_destroy(&mut self) {}

    /// Semantic action names this widget answers to while focused.
    fn actions(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// A resolved action arrived for this widget.
    fn on_action(&mut self, ui: &mut UiTree, id: WidgetId, action: &str, key: KeyEvent) {
        let _ = (ui, id, action, key);
    }

    /// Focus was given to this widget.
    fn on_focus(&mut self) {}

    /// Focus moved away from this widget.
    fn on_defocus(&mut self) {}

    /// The widget was activated (e.g. a confirmed selection).
    fn on_activate(&mut self, ui: &mut UiTree, id: WidgetId) {
        let _ = (ui, id);
    }
}

/// Draw a text run at `(x, y)`, stopping before `max_x` (exclusive).
///
/// Walks grapheme clusters so a multi-codepoint cluster is never split,
/// and returns the x position after the last drawn cluster.
pub(crate) fn draw_text_clipped(
    buf: &mut Buffer,
    mut x: i32,
    y: i32,
    text: &str,
    fg: Color,
    bg: Color,
    max_x: i32,
) -> i32 {
    use retui_core::geometry::Vec2;

    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme) as i32;
        if w == 0 {
            continue;
        }
        if x + w > max_x {
            break;
        }
        if let Some(c) = grapheme.chars().next() {
            buf.draw_glyph(c, Vec2::new(x, y), fg, bg);
            for cover in 1..w {
                buf.draw_glyph(' ', Vec2::new(x + cover, y), fg, bg);
            }
        }
        x += w;
    }
    x
}
