//! Drawing the triangle.
//!
//! [`TriangleRenderer`] runs the one-shot setup against any [`RenderBackend`].
//! [`WgpuBackend`] is the real one, bound to a window's [`Gpu`](crate::device::Gpu).

mod backend;
mod pass;
mod renderer;
mod wgpu_backend;

#[cfg(test)]
mod recording;

pub use backend::{BufferKind, ProgramLayout, RenderBackend};
pub use pass::{ClearValues, FramePass};
pub use renderer::{TriangleConfig, TriangleRenderer};
pub use wgpu_backend::{WgpuBackend, WgpuProgram};
