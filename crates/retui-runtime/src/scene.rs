#![forbid(unsafe_code)]

//! Scene binding.
//!
//! A [`Scene`] binds one root layout manager to the full display bounds
//! and drives its relayout and draw. It owns nothing else: widgets and
//! slots live in the [`Ui`] tree, and the engine decides when a scene's
//! layout is recomputed (display resize) or painted (every frame).

use retui_render::Buffer;
use retui_widgets::{LayoutId, Ui};
use tracing::debug;

/// One screenful of UI: a root layout manager.
#[derive(Debug, Default)]
pub struct Scene {
    root: Option<LayoutId>,
}

impl Scene {
    /// An empty scene with no root bound yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Bind the root layout manager.
    pub fn set_root(&mut self, root: LayoutId) {
        debug!(?root, "scene root bound");
        self.root = Some(root);
    }

    /// The bound root, if any.
    #[must_use]
    pub const fn root(&self) -> Option<LayoutId> {
        self.root
    }

    /// Recompute the whole layout tree against the display bounds.
    pub fn layout_changed(&self, ui: &mut Ui) {
        if let Some(root) = self.root {
            ui.layout_root(root);
        }
    }

    /// Draw the scene into the frame buffer, clipped to its bounds.
    pub fn render(&self, ui: &mut Ui, buf: &mut Buffer) {
        if let Some(root) = self.root {
            let clip = buf.bounds();
            ui.draw_layout(root, buf, clip);
        }
    }

    /// Tear the scene down, destroying every widget under the root.
    pub fn clear(&mut self, ui: &mut Ui) {
        if let Some(root) = self.root.take() {
            debug!(?root, "scene cleared");
            ui.destroy_layout(root);
        }
    }
}
