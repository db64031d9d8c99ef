#![forbid(unsafe_code)]

//! retui public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use retui_core::event::{Event, KeyCode, KeyEvent, Modifiers};
pub use retui_core::geometry::{Box2, Vec2, resolve_draw_area};

// --- Render re-exports -----------------------------------------------------

pub use retui_render::{Buffer, Cell, Display, DisplayError, MemoryDisplay, Sprite, TermDisplay};

// --- Style re-exports ------------------------------------------------------

pub use retui_style::{Color, Style};

// --- Layout re-exports -----------------------------------------------------

pub use retui_layout::{
    Bounds, FlowAxis, FlowSizing, HAlign, Pivot, SizeMode, Slot, VAlign,
};

// --- Widget re-exports -----------------------------------------------------

pub use retui_widgets::{
    Border, BorderSet, BorderStyle, Label, LayoutId, LayoutKind, Panel, SlotId, Ui, Widget,
    WidgetId,
};

// --- Runtime re-exports ----------------------------------------------------

pub use retui_runtime::{Controller, Engine, Scene};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for retui apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure during terminal operations.
    Io(std::io::Error),
    /// Display device error.
    Display(DisplayError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Display(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<DisplayError> for Error {
    fn from(err: DisplayError) -> Self {
        Self::Display(err)
    }
}

/// Standard result type for retui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Border, BorderStyle, Bounds, Box2, Buffer, Color, Controller, Display, Engine, Error,
        Event, FlowAxis, FlowSizing, HAlign, KeyCode, KeyEvent, Label, LayoutKind, Panel, Pivot,
        Result, Scene, SizeMode, Slot, Style, Ui, VAlign, Vec2, Widget, WidgetId,
    };

    pub use crate::{core, layout, render, runtime, style, widgets};
}

pub use retui_core as core;
pub use retui_layout as layout;
pub use retui_render as render;
pub use retui_runtime as runtime;
pub use retui_style as style;
pub use retui_widgets as widgets;
