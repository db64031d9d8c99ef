#![forbid(unsafe_code)]

//! The retained widget/layout/slot tree.
//!
//! [`Ui`] is the single explicit context object of a running interface:
//! it owns every widget, layout manager, and slot in id-indexed arenas,
//! plus the tick schedule and the current display size. There are no
//! global singletons; whoever drives the frame loop owns the `Ui` and
//! passes it by reference.
//!
//! Ownership is single-owner throughout: a slot references exactly one
//! widget, a layout manager owns its slots and has at most one owning
//! parent widget (`parent == None` marks the scene root, whose bounds
//! are the full display).
//!
//! # Relayout policy
//!
//! Every slot setter synchronously relayouts the owning manager's
//! subtree, unless the slot's widget is currently mid-draw
//! (`pending_draw`) — that guard is what keeps a slot mutation performed
//! as a side effect of drawing from cascading into a relayout storm.
//! A display resize relayouts the whole tree from the root instead.

use crate::border::paint_border;
use crate::Widget;
use retui_core::event::KeyEvent;
use retui_core::geometry::{Box2, Vec2, resolve_draw_area};
use retui_layout::{
    Bounds, FlowAxis, FlowSizing, Slot, resolve_aligned, resolve_canvas, resolve_flow,
    resolve_grid_cell,
};
use retui_render::Buffer;
use smallvec::SmallVec;

/// Handle to a widget node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(usize);

/// Handle to a layout manager node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutId(usize);

/// Handle to a slot record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(usize);

/// One of the five layout strategies, with its slot storage.
#[derive(Debug)]
pub enum LayoutKind {
    /// Exactly one slot, nine-way aligned.
    Alignment { child: Option<SlotId> },
    /// Free placement; painted in ascending z-order.
    Canvas { children: Vec<SlotId> },
    /// Linear stacking along one axis.
    Flow {
        children: Vec<SlotId>,
        axis: FlowAxis,
        sizing: FlowSizing,
        element_size: i32,
    },
    /// Fixed matrix of optional cells.
    Grid {
        cells: Vec<Option<SlotId>>,
        cols: i32,
        rows: i32,
    },
    /// Full-bleed layer stack; each slot aligns against the same bound.
    Overlay { children: Vec<SlotId> },
}

impl LayoutKind {
    /// An alignment layout with no child yet.
    #[must_use]
    pub const fn alignment() -> Self {
        Self::Alignment { child: None }
    }

    /// An empty canvas layout.
    #[must_use]
    pub const fn canvas() -> Self {
        Self::Canvas {
            children: Vec::new(),
        }
    }

    /// An empty flow layout.
    #[must_use]
    pub const fn flow(axis: FlowAxis, sizing: FlowSizing, element_size: i32) -> Self {
        Self::Flow {
            children: Vec::new(),
            axis,
            sizing,
            element_size,
        }
    }

    /// An empty `cols × rows` grid.
    #[must_use]
    pub fn grid(cols: i32, rows: i32) -> Self {
        assert!(cols > 0 && rows > 0, "grid dimensions must be positive");
        Self::Grid {
            cells: vec![None; (cols * rows) as usize],
            cols,
            rows,
        }
    }

    /// An empty overlay layout.
    #[must_use]
    pub const fn overlay() -> Self {
        Self::Overlay {
            children: Vec::new(),
        }
    }

    /// All slots currently owned by this layout, in storage order.
    fn slot_ids(&self) -> SmallVec<[SlotId; 8]> {
        match self {
            Self::Alignment { child } => child.iter().copied().collect(),
            Self::Canvas { children } | Self::Flow { children, .. } | Self::Overlay { children } => {
                children.iter().copied().collect()
            }
            Self::Grid { cells, .. } => cells.iter().flatten().copied().collect(),
        }
    }
}

/// One-way widget lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Unconstructed,
    Constructed,
    Destroyed,
}

struct WidgetEntry {
    behavior: Option<Box<dyn Widget>>,
    slot: Option<SlotId>,
    layout: Option<LayoutId>,
    popup: Option<LayoutId>,
    state: Lifecycle,
    pending_draw: bool,
    visible: bool,
}

struct LayoutEntry {
    parent: Option<WidgetId>,
    kind: LayoutKind,
}

struct SlotEntry {
    manager: LayoutId,
    widget: WidgetId,
    data: Slot,
}

/// The application-context object: arena-owned widget tree plus the
/// tick schedule and display extent.
pub struct Ui {
    widgets: Vec<WidgetEntry>,
    layouts: Vec<LayoutEntry>,
    slots: Vec<SlotEntry>,
    tickables: Vec<WidgetId>,
    display: (u16, u16),
    relayouts: u32,
    stop_requested: bool,
}

impl Ui {
    /// Create an empty tree for a display of the given extent.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            widgets: Vec::new(),
            layouts: Vec::new(),
            slots: Vec::new(),
            tickables: Vec::new(),
            display: (width, height),
            relayouts: 0,
            stop_requested: false,
        }
    }

    /// Ask the frame loop to stop after the current frame. Cooperative
    /// only: nothing is interrupted mid-frame.
    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    /// Whether a stop has been requested.
    #[must_use]
    pub const fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    /// The display extent the root layout resolves against.
    #[must_use]
    pub const fn display_size(&self) -> (u16, u16) {
        self.display
    }

    /// Record a new display extent. The caller decides when to rerun the
    /// root layout (normally once, at the top of the next frame).
    pub fn set_display_size(&mut self, width: u16, height: u16) {
        self.display = (width, height);
    }

    /// Number of relayout passes run so far (full or subtree).
    #[must_use]
    pub const fn relayout_count(&self) -> u32 {
        self.relayouts
    }

    // --- Tree building -----------------------------------------------------

    /// Add a root-level layout manager (bounds = full display).
    pub fn add_layout(&mut self, kind: LayoutKind) -> LayoutId {
        let id = LayoutId(self.layouts.len());
        self.layouts.push(LayoutEntry { parent: None, kind });
        id
    }

    /// Give `widget` a layout manager for its children.
    ///
    /// If the widget is already constructed the new manager is laid out
    /// immediately against the widget's current bounds.
    pub fn set_layout(&mut self, widget: WidgetId, kind: LayoutKind) -> LayoutId {
        let id = LayoutId(self.layouts.len());
        self.layouts.push(LayoutEntry {
            parent: Some(widget),
            kind,
        });
        self.widgets[widget.0].layout = Some(id);

        if self.widgets[widget.0].state == Lifecycle::Constructed {
            self.relayout(id);
        }
        id
    }

    /// Attach a widget behavior into a new slot of `layout`.
    ///
    /// The widget is constructed on attachment — exactly once — and the
    /// slot change relayouts the manager eagerly. For a grid layout this
    /// places into cell (0, 0); use [`Ui::add_widget_at`] for other cells.
    pub fn add_widget(
        &mut self,
        layout: LayoutId,
        slot: Slot,
        behavior: Box<dyn Widget>,
    ) -> WidgetId {
        let (widget, slot_id) = self.new_slot(layout, slot, behavior);

        match &mut self.layouts[layout.0].kind {
            LayoutKind::Alignment { child } => *child = Some(slot_id),
            LayoutKind::Canvas { children }
            | LayoutKind::Flow { children, .. }
            | LayoutKind::Overlay { children } => children.push(slot_id),
            LayoutKind::Grid { cells, .. } => cells[0] = Some(slot_id),
        }

        self.construct_widget(widget);
        self.slot_changed(slot_id);
        widget
    }

    /// Attach a widget behavior into grid cell (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `layout` is not a grid or (x, y) is out of range — tree
    /// well-formedness is enforced by construction order, not recovered
    /// from at runtime.
    pub fn add_widget_at(
        &mut self,
        layout: LayoutId,
        x: i32,
        y: i32,
        slot: Slot,
        behavior: Box<dyn Widget>,
    ) -> WidgetId {
        let (widget, slot_id) = self.new_slot(layout, slot, behavior);

        match &mut self.layouts[layout.0].kind {
            LayoutKind::Grid { cells, cols, rows } => {
                assert!(
                    x >= 0 && x < *cols && y >= 0 && y < *rows,
                    "grid cell ({x}, {y}) out of range"
                );
                cells[(y * *cols + x) as usize] = Some(slot_id);
            }
            _ => panic!("add_widget_at requires a grid layout"),
        }

        self.construct_widget(widget);
        self.slot_changed(slot_id);
        widget
    }

    fn new_slot(
        &mut self,
        layout: LayoutId,
        data: Slot,
        behavior: Box<dyn Widget>,
    ) -> (WidgetId, SlotId) {
        let widget = WidgetId(self.widgets.len());
        self.widgets.push(WidgetEntry {
            behavior: Some(behavior),
            slot: None,
            layout: None,
            popup: None,
            state: Lifecycle::Unconstructed,
            pending_draw: false,
            visible: true,
        });

        let slot_id = SlotId(self.slots.len());
        self.slots.push(SlotEntry {
            manager: layout,
            widget,
            data,
        });
        self.widgets[widget.0].slot = Some(slot_id);
        (widget, slot_id)
    }

    // --- Lifecycle ---------------------------------------------------------

    fn construct_widget(&mut self, id: WidgetId) {
        if self.widgets[id.0].state != Lifecycle::Unconstructed {
            return;
        }

        let mut behavior = self.widgets[id.0].behavior.take();
        if let Some(b) = behavior.as_mut() {
            if b.should_tick() {
                self.register_tick(id);
            }
            b.on_construct(self, id);
        }
        if self.widgets[id.0].state != Lifecycle::Destroyed {
            self.widgets[id.0].behavior = behavior;
        }

        if let Some(layout) = self.widgets[id.0].layout {
            self.construct_children(layout);
        }

        if self.widgets[id.0].state == Lifecycle::Unconstructed {
            self.widgets[id.0].state = Lifecycle::Constructed;
        }
    }

    fn construct_children(&mut self, layout: LayoutId) {
        for slot_id in self.layouts[layout.0].kind.slot_ids() {
            let widget = self.slots[slot_id.0].widget;
            self.construct_widget(widget);
        }
    }

    /// Destroy a layout manager: every owned widget is destroyed
    /// (cascading), then the slot set is cleared.
    pub fn destroy_layout(&mut self, layout: LayoutId) {
        for slot_id in self.layouts[layout.0].kind.slot_ids() {
            let widget = self.slots[slot_id.0].widget;
            self.destroy_widget(widget);
        }
        match &mut self.layouts[layout.0].kind {
            LayoutKind::Alignment { child } => *child = None,
            LayoutKind::Canvas { children }
            | LayoutKind::Flow { children, .. }
            | LayoutKind::Overlay { children } => children.clear(),
            LayoutKind::Grid { cells, .. } => cells.fill(None),
        }
    }

    /// Destroy one widget: deregister ticking, run the behavior's
    /// destroy hook, cascade into its layout manager and popup.
    ///
    /// Must not be invoked twice for the same widget.
    pub fn destroy_widget(&mut self, id: WidgetId) {
        self.deregister_tick(id);

        if let Some(mut behavior) = self.widgets[id.0].behavior.take() {
            behavior.on_destroy();
        }
        if let Some(layout) = self.widgets[id.0].layout.take() {
            self.destroy_layout(layout);
        }
        if let Some(popup) = self.widgets[id.0].popup.take() {
            self.destroy_layout(popup);
        }
        self.widgets[id.0].state = Lifecycle::Destroyed;
    }

    // --- Tick schedule -----------------------------------------------------

    fn register_tick(&mut self, id: WidgetId) {
        if !self.tickables.contains(&id) {
            self.tickables.push(id);
        }
    }

    fn deregister_tick(&mut self, id: WidgetId) {
        self.tickables.retain(|t| *t != id);
    }

    /// Number of widgets registered for per-frame ticking.
    #[must_use]
    pub fn tickable_count(&self) -> usize {
        self.tickables.len()
    }

    /// Tick every registered widget with the frame delta.
    pub fn tick_all(&mut self, dt: f32) {
        let ids = self.tickables.clone();
        for id in ids {
            let mut behavior = self.widgets[id.0].behavior.take();
            if let Some(b) = behavior.as_mut() {
                b.on_tick(self, id, dt);
            }
            if self.widgets[id.0].state != Lifecycle::Destroyed {
                self.widgets[id.0].behavior = behavior;
            }
        }
    }

    // --- Slot access & eager relayout --------------------------------------

    /// The slot a widget is attached to.
    #[must_use]
    pub fn slot_of(&self, widget: WidgetId) -> Option<SlotId> {
        self.widgets[widget.0].slot
    }

    /// Read a slot's full record (constraints plus resolved outputs).
    #[must_use]
    pub fn slot(&self, id: SlotId) -> &Slot {
        &self.slots[id.0].data
    }

    /// Mutate a slot through `f`, then apply the eager relayout policy.
    pub fn update_slot(&mut self, id: SlotId, f: impl FnOnce(&mut Slot)) {
        f(&mut self.slots[id.0].data);
        self.slot_changed(id);
    }

    /// Move a slot's relative offset (absolute-aligned and canvas slots).
    pub fn set_slot_offset(&mut self, id: SlotId, offset: Vec2) {
        self.update_slot(id, |s| s.offset = offset);
    }

    /// Change a slot's explicit size.
    pub fn set_slot_size(&mut self, id: SlotId, size: Vec2) {
        self.update_slot(id, |s| s.size = size);
    }

    /// Change a slot's z-order.
    pub fn set_slot_z_order(&mut self, id: SlotId, z: i32) {
        self.update_slot(id, |s| s.z_order = z);
    }

    fn slot_changed(&mut self, id: SlotId) {
        let widget = self.slots[id.0].widget;
        let entry = &self.widgets[widget.0];
        if entry.state == Lifecycle::Constructed && !entry.pending_draw {
            let manager = self.slots[id.0].manager;
            self.relayout(manager);
        }
    }

    // --- Layout ------------------------------------------------------------

    /// Relayout a manager's subtree against its current parent bounds.
    pub fn relayout(&mut self, layout: LayoutId) {
        let bounds = self.manager_bounds(layout);
        self.relayouts += 1;
        self.layout_in(layout, bounds);
    }

    /// Relayout a root manager against the full display.
    pub fn layout_root(&mut self, root: LayoutId) {
        self.relayouts += 1;
        let (w, h) = self.display;
        self.layout_in(root, Bounds::of_display(w, h));
    }

    fn manager_bounds(&self, layout: LayoutId) -> Bounds {
        match self.layouts[layout.0].parent {
            None => {
                let (w, h) = self.display;
                Bounds::of_display(w, h)
            }
            Some(widget) => {
                let slot_id = self.widgets[widget.0]
                    .slot
                    .expect("layout parent must be attached to a slot");
                self.slots[slot_id.0].data.inner_bounds()
            }
        }
    }

    fn layout_in(&mut self, layout: LayoutId, bounds: Bounds) {
        // Copy the strategy's slot ids out first; the solvers run on
        // copies of the slot records and the results are written back.
        enum Plan {
            Aligned(SmallVec<[SlotId; 8]>),
            Canvas(SmallVec<[SlotId; 8]>),
            Flow {
                ids: Vec<SlotId>,
                axis: FlowAxis,
                sizing: FlowSizing,
                element_size: i32,
            },
            Grid {
                cells: Vec<Option<SlotId>>,
                cols: i32,
                rows: i32,
            },
        }

        let plan = match &self.layouts[layout.0].kind {
            LayoutKind::Alignment { child } => Plan::Aligned(child.iter().copied().collect()),
            LayoutKind::Overlay { children } => {
                Plan::Aligned(children.iter().copied().collect())
            }
            LayoutKind::Canvas { children } => Plan::Canvas(children.iter().copied().collect()),
            LayoutKind::Flow {
                children,
                axis,
                sizing,
                element_size,
            } => Plan::Flow {
                ids: children.clone(),
                axis: *axis,
                sizing: *sizing,
                element_size: *element_size,
            },
            LayoutKind::Grid { cells, cols, rows } => Plan::Grid {
                cells: cells.clone(),
                cols: *cols,
                rows: *rows,
            },
        };

        match plan {
            Plan::Aligned(ids) => {
                for slot_id in ids {
                    let mut data = self.slots[slot_id.0].data;
                    resolve_aligned(&mut data, bounds);
                    self.slots[slot_id.0].data = data;
                    self.recurse_into(slot_id);
                }
            }
            Plan::Canvas(ids) => {
                for slot_id in ids {
                    let mut data = self.slots[slot_id.0].data;
                    resolve_canvas(&mut data, bounds);
                    self.slots[slot_id.0].data = data;
                    self.recurse_into(slot_id);
                }
            }
            Plan::Flow {
                ids,
                axis,
                sizing,
                element_size,
            } => {
                let mut datas: Vec<Slot> = ids.iter().map(|s| self.slots[s.0].data).collect();
                resolve_flow(&mut datas, axis, sizing, element_size, bounds);
                for (id, data) in ids.iter().zip(&datas) {
                    self.slots[id.0].data = *data;
                }
                // Slots skipped by the flow pass keep their stale
                // resolution and are not recursed into.
                for (id, data) in ids.iter().zip(&datas) {
                    let along = match axis {
                        FlowAxis::Horizontal => data.resolved_size.x,
                        FlowAxis::Vertical => data.resolved_size.y,
                    };
                    if along > 0 {
                        self.recurse_into(*id);
                    }
                }
            }
            Plan::Grid { cells, cols, rows } => {
                for y in 0..rows {
                    for x in 0..cols {
                        if let Some(slot_id) = cells[(y * cols + x) as usize] {
                            let mut data = self.slots[slot_id.0].data;
                            resolve_grid_cell(&mut data, x, y, cols, rows, bounds);
                            self.slots[slot_id.0].data = data;
                            self.recurse_into(slot_id);
                        }
                    }
                }
            }
        }
    }

    fn recurse_into(&mut self, slot_id: SlotId) {
        let widget = self.slots[slot_id.0].widget;
        if let Some(child_layout) = self.widgets[widget.0].layout {
            let inner = self.slots[slot_id.0].data.inner_bounds();
            self.layout_in(child_layout, inner);
        }
    }

    // --- Drawing -----------------------------------------------------------

    /// Paint a layout's children into `buf`, clipped to `clip`, in
    /// manager paint order (canvas sorts by z-order, the rest draw in
    /// slot order). Children entirely outside `clip` are culled by the
    /// coarse corner test.
    pub fn draw_layout(&mut self, layout: LayoutId, buf: &mut Buffer, clip: Box2) {
        let mut order: SmallVec<[SlotId; 8]> = self.layouts[layout.0].kind.slot_ids();
        if matches!(self.layouts[layout.0].kind, LayoutKind::Canvas { .. }) {
            order.sort_by_key(|s| self.slots[s.0].data.z_order);
        }

        for slot_id in order {
            let data = self.slots[slot_id.0].data;
            if !allowed_to_draw(&data, clip) {
                continue;
            }
            let widget = self.slots[slot_id.0].widget;
            self.exec_draw(widget, buf, clip);
        }
    }

    /// Draw one widget: pre-draw, content, children, border, popup,
    /// post-draw. No-op while the widget is hidden.
    pub fn exec_draw(&mut self, id: WidgetId, buf: &mut Buffer, area: Box2) {
        let entry = &self.widgets[id.0];
        if !entry.visible || entry.state != Lifecycle::Constructed {
            return;
        }
        let Some(slot_id) = entry.slot else { return };

        self.widgets[id.0].pending_draw = true;

        let data = self.slots[slot_id.0].data;
        let full = Box2::from_tl_size(data.resolved_pos, data.resolved_size);
        let content = Box2::from_tl_size(
            data.resolved_pos + data.margin,
            data.resolved_size - data.margin * 2,
        );
        let content_clip = resolve_draw_area(content, area);
        let border_clip = resolve_draw_area(full, area);

        if border_clip.is_valid() {
            if content_clip.is_valid() {
                let mut behavior = self.widgets[id.0].behavior.take();
                if let Some(b) = behavior.as_mut() {
                    b.draw(self, id, buf, content_clip);
                }
                self.widgets[id.0].behavior = behavior;

                if let Some(child_layout) = self.widgets[id.0].layout {
                    self.draw_layout(child_layout, buf, content_clip);
                }
            }

            // Border last: never occluded by children.
            let border = self.widgets[id.0]
                .behavior
                .as_ref()
                .and_then(|b| b.border());
            if let Some(border) = border {
                paint_border(buf, full, border_clip, border);
            }
        }

        if let Some(popup) = self.widgets[id.0].popup {
            // The popup lays out against the widget's unclipped bounds,
            // every draw. Reread the slot: drawing may have moved it.
            let data = self.slots[slot_id.0].data;
            let bounds = Bounds::new(
                data.resolved_pos,
                data.resolved_pos + data.resolved_size - Vec2::splat(1),
            );
            self.layout_in(popup, bounds);
            self.draw_layout(popup, buf, content_clip);
        }

        self.widgets[id.0].pending_draw = false;
    }

    // --- Visibility & popup ------------------------------------------------

    /// Hide or show a widget. Hidden widgets skip drawing entirely.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        self.widgets[id.0].visible = visible;
    }

    /// Attach a modal popup to `widget`, drawn last over its bounds.
    ///
    /// The popup lives in its own single-slot alignment layout, outside
    /// the widget's slot tree. Returns the existing popup's widget
    /// unchanged if one is already attached.
    pub fn show_popup(
        &mut self,
        widget: WidgetId,
        slot: Slot,
        behavior: Box<dyn Widget>,
    ) -> WidgetId {
        if let Some(popup) = self.widgets[widget.0].popup {
            let existing = self.layouts[popup.0].kind.slot_ids();
            if let Some(slot_id) = existing.first() {
                return self.slots[slot_id.0].widget;
            }
        }

        let popup_layout = LayoutId(self.layouts.len());
        self.layouts.push(LayoutEntry {
            parent: Some(widget),
            kind: LayoutKind::alignment(),
        });
        self.widgets[widget.0].popup = Some(popup_layout);
        self.add_widget(popup_layout, slot, behavior)
    }

    /// Destroy the popup attached to `widget`, if any.
    pub fn hide_popup(&mut self, widget: WidgetId) {
        if let Some(popup) = self.widgets[widget.0].popup.take() {
            self.destroy_layout(popup);
        }
    }

    // --- Input hooks -------------------------------------------------------

    /// Action names the widget's behavior answers to.
    #[must_use]
    pub fn actions_of(&self, id: WidgetId) -> Vec<&'static str> {
        self.widgets[id.0]
            .behavior
            .as_ref()
            .map(|b| b.actions())
            .unwrap_or_default()
    }

    /// Deliver a resolved action plus its raw key to a widget.
    pub fn dispatch_action(&mut self, id: WidgetId, action: &str, key: KeyEvent) {
        let mut behavior = self.widgets[id.0].behavior.take();
        if let Some(b) = behavior.as_mut() {
            b.on_action(self, id, action, key);
        }
        if self.widgets[id.0].state != Lifecycle::Destroyed {
            self.widgets[id.0].behavior = behavior;
        }
    }

    /// Notify a widget that it gained or lost focus.
    pub fn notify_focus(&mut self, id: WidgetId, focused: bool) {
        if let Some(b) = self.widgets[id.0].behavior.as_mut() {
            if focused {
                b.on_focus();
            } else {
                b.on_defocus();
            }
        }
    }

    /// Notify a widget that it was activated.
    pub fn notify_activate(&mut self, id: WidgetId) {
        let mut behavior = self.widgets[id.0].behavior.take();
        if let Some(b) = behavior.as_mut() {
            b.on_activate(self, id);
        }
        if self.widgets[id.0].state != Lifecycle::Destroyed {
            self.widgets[id.0].behavior = behavior;
        }
    }
}

/// Coarse cull: a slot draws only with a positive extent and at least
/// one corner of its box inside the clip area.
fn allowed_to_draw(slot: &Slot, clip: Box2) -> bool {
    if slot.resolved_size.x <= 0 || slot.resolved_size.y <= 0 {
        return false;
    }
    let b = Box2::from_tl_size(slot.resolved_pos, slot.resolved_size);
    clip.contains(b.tl) || clip.contains(b.tr) || clip.contains(b.br) || clip.contains(b.bl)
}
