//! Pixel-space sizes and rectangles.
//!
//! Everything here is in physical pixels with a top-left origin, matching what
//! the surface and `wgpu::RenderPass::set_viewport` expect.

mod size;
mod viewport;

pub use size::SurfaceSize;
pub use viewport::ViewportRect;
