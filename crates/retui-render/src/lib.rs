#![forbid(unsafe_code)]

//! Frame buffer and display plumbing for retui.
//!
//! One [`Buffer`] holds the frame being composed; one [`Display`]
//! receives it in a single bulk write per frame. There is exactly one
//! writer (the draw phase of the frame loop), so no synchronization is
//! involved anywhere in this crate.

pub mod buffer;
pub mod cell;
pub mod display;
pub mod sprite;

pub use buffer::Buffer;
pub use cell::Cell;
pub use display::{Display, DisplayError, MemoryDisplay, TermDisplay};
pub use sprite::Sprite;
