use crate::coords::ViewportRect;
use crate::geometry::AttributeBinding;
use crate::paint::Color;

use super::RenderBackend;

/// Values written to the color and depth targets before drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClearValues {
    pub color: Color,
    pub depth: f32,
}

/// Everything one draw needs, in submission order: clear, viewport, program,
/// vertex buffer + attribute layout, index buffer, indexed draw.
///
/// Bindings last until the pass ends; nothing stays bound afterwards.
pub struct FramePass<'a, B: RenderBackend + ?Sized> {
    pub clear: ClearValues,
    pub viewport: ViewportRect,
    pub program: &'a B::Program,
    pub vertex_buffer: &'a B::Buffer,
    pub attribute: AttributeBinding,
    pub index_buffer: &'a B::Buffer,
    pub index_format: wgpu::IndexFormat,
    pub topology: wgpu::PrimitiveTopology,
    pub index_count: u32,
}
