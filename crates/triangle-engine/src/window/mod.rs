//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer and runs
//! the triangle renderer once.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
