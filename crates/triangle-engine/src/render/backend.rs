use crate::coords::SurfaceSize;
use crate::error::RenderError;
use crate::geometry::AttributeBinding;
use crate::shader::LinkedProgram;

use super::FramePass;

/// Target of a buffer upload.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// Fixed-function state a program is built with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ProgramLayout {
    pub attribute: AttributeBinding,
    pub topology: wgpu::PrimitiveTopology,
}

/// The drawable surface and the GPU context behind it.
///
/// Buffers are uploaded once and never written again. Programs and buffers
/// live as long as the caller keeps the returned handles.
pub trait RenderBackend {
    type Program;
    type Buffer;

    /// Size of the surface in physical pixels.
    fn drawable_size(&self) -> SurfaceSize;

    /// Turns a linked program into something the backend can draw with.
    fn create_program(
        &mut self,
        program: &LinkedProgram,
        layout: &ProgramLayout,
    ) -> Result<Self::Program, RenderError>;

    /// Uploads immutable buffer contents.
    fn upload_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Self::Buffer;

    /// Clears the target and issues the pass's single indexed draw.
    fn draw(&mut self, pass: &FramePass<'_, Self>) -> Result<(), RenderError>;
}
