#![forbid(unsafe_code)]

//! Resolved-action dispatch.
//!
//! An input source hands the controller an already-resolved semantic
//! action name plus the raw key event; the controller fans it out to
//! every registered widget **in registration order**. Focusing a widget
//! registers its own declared actions and drops the previously focused
//! widget's; explicit registrations are unaffected by focus changes.

use retui_core::event::KeyEvent;
use retui_widgets::{Ui, WidgetId};
use tracing::trace;

/// Ordered action-to-widget registrations plus focus bookkeeping.
#[derive(Debug, Default)]
pub struct Controller {
    registrations: Vec<(String, WidgetId, bool)>,
    focused: Option<WidgetId>,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget for an action. Registrations are invoked in
    /// the order they were made; the same action may fan out to several
    /// widgets.
    pub fn register(&mut self, action: impl Into<String>, widget: WidgetId) {
        self.registrations.push((action.into(), widget, false));
    }

    /// Remove every registration of a widget (e.g. when destroying it).
    pub fn unregister(&mut self, widget: WidgetId) {
        self.registrations.retain(|(_, w, _)| *w != widget);
        if self.focused == Some(widget) {
            self.focused = None;
        }
    }

    /// The currently focused widget, if any.
    #[must_use]
    pub const fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Move focus to `widget`: the previous holder is defocused and its
    /// focus-scoped registrations dropped, then the new widget's
    /// declared actions are registered.
    pub fn focus(&mut self, ui: &mut Ui, widget: WidgetId) {
        if self.focused == Some(widget) {
            return;
        }
        self.defocus(ui);

        self.focused = Some(widget);
        for action in ui.actions_of(widget) {
            self.registrations.push((action.to_string(), widget, true));
        }
        ui.notify_focus(widget, true);
    }

    /// Drop focus entirely.
    pub fn defocus(&mut self, ui: &mut Ui) {
        if let Some(prev) = self.focused.take() {
            self.registrations
                .retain(|(_, w, from_focus)| !(*w == prev && *from_focus));
            ui.notify_focus(prev, false);
        }
    }

    /// Activate the focused widget.
    pub fn activate_focused(&mut self, ui: &mut Ui) {
        if let Some(focused) = self.focused {
            ui.notify_activate(focused);
        }
    }

    /// Deliver a resolved action to every registered widget, in
    /// registration order.
    pub fn dispatch(&mut self, ui: &mut Ui, action: &str, key: KeyEvent) {
        trace!(action, "dispatch");
        let targets: Vec<WidgetId> = self
            .registrations
            .iter()
            .filter(|(a, _, _)| a == action)
            .map(|(_, w, _)| *w)
            .collect();
        for widget in targets {
            ui.dispatch_action(widget, action, key);
        }
    }
}
