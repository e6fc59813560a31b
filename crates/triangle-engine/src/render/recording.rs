//! In-memory backend that records what the renderer asks for.

use crate::coords::{SurfaceSize, ViewportRect};
use crate::error::RenderError;
use crate::geometry::AttributeBinding;
use crate::shader::LinkedProgram;

use super::{BufferKind, ClearValues, FramePass, ProgramLayout, RenderBackend};

#[derive(Debug, Clone)]
pub(crate) struct RecordedProgram {
    pub vertex_entry: String,
    pub fragment_entry: String,
    pub layout: ProgramLayout,
}

/// Snapshot of a `FramePass`; handles are indices into the recorded lists.
#[derive(Debug, Clone)]
pub(crate) struct RecordedDraw {
    pub clear: ClearValues,
    pub viewport: ViewportRect,
    pub program: usize,
    pub vertex_buffer: usize,
    pub attribute: AttributeBinding,
    pub index_buffer: usize,
    pub index_format: wgpu::IndexFormat,
    pub topology: wgpu::PrimitiveTopology,
    pub index_count: u32,
}

#[derive(Debug)]
pub(crate) struct RecordingBackend {
    size: SurfaceSize,
    fail_frames: bool,
    pub programs: Vec<RecordedProgram>,
    pub uploads: Vec<(BufferKind, Vec<u8>)>,
    pub draws: Vec<RecordedDraw>,
}

impl RecordingBackend {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            fail_frames: false,
            programs: Vec::new(),
            uploads: Vec::new(),
            draws: Vec::new(),
        }
    }

    /// Makes every `draw` fail as if the surface had run out of memory.
    pub fn failing_frames(mut self, fail: bool) -> Self {
        self.fail_frames = fail;
        self
    }

    /// True when no program, buffer or draw was requested.
    pub fn is_untouched(&self) -> bool {
        self.programs.is_empty() && self.uploads.is_empty() && self.draws.is_empty()
    }
}

impl RenderBackend for RecordingBackend {
    type Program = usize;
    type Buffer = usize;

    fn drawable_size(&self) -> SurfaceSize {
        self.size
    }

    fn create_program(
        &mut self,
        program: &LinkedProgram,
        layout: &ProgramLayout,
    ) -> Result<Self::Program, RenderError> {
        self.programs.push(RecordedProgram {
            vertex_entry: program.vertex().entry_point().to_owned(),
            fragment_entry: program.fragment().entry_point().to_owned(),
            layout: *layout,
        });
        Ok(self.programs.len() - 1)
    }

    fn upload_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Self::Buffer {
        self.uploads.push((kind, contents.to_vec()));
        self.uploads.len() - 1
    }

    fn draw(&mut self, pass: &FramePass<'_, Self>) -> Result<(), RenderError> {
        if self.fail_frames {
            return Err(RenderError::FrameUnavailable {
                reason: "out of memory".to_owned(),
                fatal: true,
            });
        }

        self.draws.push(RecordedDraw {
            clear: pass.clear,
            viewport: pass.viewport,
            program: *pass.program,
            vertex_buffer: *pass.vertex_buffer,
            attribute: pass.attribute,
            index_buffer: *pass.index_buffer,
            index_format: pass.index_format,
            topology: pass.topology,
            index_count: pass.index_count,
        });
        Ok(())
    }
}
