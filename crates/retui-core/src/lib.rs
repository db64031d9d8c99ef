#![forbid(unsafe_code)]

//! Core primitives for retui: cell-grid geometry and canonical input
//! events. Everything here is dependency-light and usable from any layer.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, Modifiers};
pub use geometry::{Box2, Vec2, resolve_draw_area};
