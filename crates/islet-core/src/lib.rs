//! Host-side logic for the island shader sketch: control state mutated by
//! key presses, and the per-frame uniform assembly read by the renderer.
//! No GPU or I/O here; everything is testable natively.

pub mod constants;
pub mod controls;
pub mod error;
pub mod frame;
pub mod palette;
