#![forbid(unsafe_code)]

//! Runtime for retui: scene binding, the frame loop, and resolved-action
//! dispatch. Everything here is single-threaded and cooperative; a stop
//! request flips a flag that the loop checks between frames.

pub mod controller;
pub mod engine;
pub mod scene;

pub use controller::Controller;
pub use engine::Engine;
pub use scene::Scene;
