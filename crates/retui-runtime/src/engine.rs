#![forbid(unsafe_code)]

//! The frame loop.
//!
//! Single-threaded, cooperative, frame-stepped: one loop owns input
//! polling, layout, and draw, and every operation within a frame runs to
//! completion. The engine owns the application context ([`Ui`]), the
//! frame [`Buffer`], the active [`Scene`], and the [`Display`] device.
//!
//! A full relayout runs when the display's reported size changes. A
//! display error mid-frame is never propagated: it flips the
//! force-resize flag, and the next frame reallocates the buffer,
//! relayouts, and redraws from scratch.

use crate::controller::Controller;
use crate::scene::Scene;
use retui_core::event::{Event, KeyEvent};
use retui_core::geometry::Vec2;
use retui_render::{Buffer, Display, DisplayError};
use retui_widgets::Ui;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Engine driving one display, one scene, one widget tree.
pub struct Engine<D: Display> {
    display: D,
    ui: Ui,
    scene: Scene,
    controller: Controller,
    buffer: Buffer,
    force_resize: bool,
}

impl<D: Display> Engine<D> {
    /// Create an engine sized to the display's current extent.
    pub fn new(display: D) -> Result<Self, DisplayError> {
        let (width, height) = display.size()?;
        Ok(Self {
            display,
            ui: Ui::new(width, height),
            scene: Scene::new(),
            controller: Controller::new(),
            buffer: Buffer::new(width, height),
            force_resize: false,
        })
    }

    /// The widget tree.
    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    /// The widget tree, mutably (scene building, slot mutation).
    pub fn ui_mut(&mut self) -> &mut Ui {
        &mut self.ui
    }

    /// The action controller.
    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    /// The display device (tests use this to simulate resizes).
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// The active scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Swap the active scene. The previous scene's widgets are
    /// destroyed; the new one is laid out against the current display
    /// and drawn on the next frame.
    pub fn set_scene(&mut self, scene: Scene) {
        info!("scene swap");
        self.scene.clear(&mut self.ui);
        self.scene = scene;
        self.scene.layout_changed(&mut self.ui);
        self.force_resize = true;
    }

    /// Deliver a resolved action with its raw key to the controller.
    pub fn on_input(&mut self, action: &str, key: KeyEvent) {
        self.controller.dispatch(&mut self.ui, action, key);
    }

    /// Run one frame: detect resize, relayout if needed, draw the scene,
    /// present, tick.
    ///
    /// Display failures are converted into "force full resize and redraw
    /// next frame" rather than returned.
    pub fn frame(&mut self, dt: f32) {
        match self.display.size() {
            Ok((width, height)) => {
                let resized =
                    width != self.buffer.width() || height != self.buffer.height();
                if self.force_resize || resized {
                    debug!(width, height, forced = self.force_resize, "full relayout");
                    self.force_resize = false;
                    self.ui.set_display_size(width, height);
                    self.buffer.resize(width, height);
                    self.scene.layout_changed(&mut self.ui);
                }
            }
            Err(_) => {
                self.force_resize = true;
                return;
            }
        }

        self.buffer.clear();
        self.scene.render(&mut self.ui, &mut self.buffer);

        if self.display.present(Vec2::ZERO, &self.buffer).is_err() {
            self.force_resize = true;
        }

        self.ui.tick_all(dt);
    }

    /// Drive frames until a stop is requested through the tree.
    ///
    /// `resolve` is the external keyboard-to-action mapping: it turns a
    /// raw key into a semantic action name, or `None` for unbound keys.
    /// The loop polls the terminal, feeds resolved actions through the
    /// controller, then steps one frame and sleeps briefly.
    pub fn run<F>(&mut self, mut resolve: F)
    where
        F: FnMut(KeyEvent) -> Option<String>,
    {
        let mut last = Instant::now();
        while !self.ui.stop_requested() {
            while crossterm::event::poll(Duration::ZERO).unwrap_or(false) {
                let Ok(raw) = crossterm::event::read() else {
                    break;
                };
                match Event::from_crossterm(raw) {
                    Some(Event::Key(key)) => {
                        if let Some(action) = resolve(key) {
                            self.controller.dispatch(&mut self.ui, &action, key);
                        }
                    }
                    Some(Event::Resize { .. }) => self.force_resize = true,
                    _ => {}
                }
            }

            let dt = last.elapsed().as_secs_f32();
            last = Instant::now();
            self.frame(dt);

            std::thread::sleep(Duration::from_millis(1));
        }
    }
}
