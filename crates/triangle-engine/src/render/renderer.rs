use std::borrow::Cow;

use crate::coords::ViewportRect;
use crate::error::RenderError;
use crate::geometry::{check_indices, AttributeBinding, Position, TRIANGLE_INDICES, TRIANGLE_VERTICES};
use crate::paint::Color;
use crate::shader::sources::{POSITION_ATTRIBUTE, TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};
use crate::shader::{compile_shader, link_program, ShaderStage};

use super::{BufferKind, ClearValues, FramePass, ProgramLayout, RenderBackend};

/// What the renderer draws.
///
/// The default is the fixed triangle: red fragment shader over a green clear.
#[derive(Debug, Clone)]
pub struct TriangleConfig {
    pub clear_color: Color,
    pub clear_depth: f32,
    pub vertices: Cow<'static, [Position]>,
    pub indices: Cow<'static, [u16]>,
    pub vertex_source: Cow<'static, str>,
    pub fragment_source: Cow<'static, str>,
    /// Vertex shader input that receives positions.
    pub position_attribute: Cow<'static, str>,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            clear_color: Color::GREEN,
            clear_depth: 1.0,
            vertices: Cow::Borrowed(&TRIANGLE_VERTICES),
            indices: Cow::Borrowed(&TRIANGLE_INDICES),
            vertex_source: Cow::Borrowed(TRIANGLE_VERTEX_WGSL),
            fragment_source: Cow::Borrowed(TRIANGLE_FRAGMENT_WGSL),
            position_attribute: Cow::Borrowed(POSITION_ATTRIBUTE),
        }
    }
}

/// One-shot triangle renderer.
///
/// Holds no GPU state: every call builds its own program and buffers on the
/// backend it is given, draws once and lets them go.
#[derive(Debug, Clone, Default)]
pub struct TriangleRenderer {
    config: TriangleConfig,
}

impl TriangleRenderer {
    pub fn new(config: TriangleConfig) -> Self {
        Self { config }
    }

    /// Builds the pipeline on `backend` and draws the triangle once.
    ///
    /// Stops at the first failure; nothing after a failed compile or link runs.
    pub fn initialize_and_render<B: RenderBackend>(&self, backend: &mut B) -> Result<(), RenderError> {
        let cfg = &self.config;

        let size = backend.drawable_size();
        if size.is_empty() {
            return Err(RenderError::EmptySurface {
                width: size.width,
                height: size.height,
            });
        }

        check_indices(&cfg.indices, cfg.vertices.len()).map_err(|index| {
            RenderError::IndexOutOfRange {
                index,
                vertex_count: cfg.vertices.len(),
            }
        })?;

        let clear = ClearValues {
            color: cfg.clear_color,
            depth: cfg.clear_depth,
        };

        let vertex = compile_shader(ShaderStage::Vertex, &cfg.vertex_source)?;
        let fragment = compile_shader(ShaderStage::Fragment, &cfg.fragment_source)?;
        let program = link_program(vertex, fragment)?;

        let location = program
            .attribute_location(&cfg.position_attribute)
            .ok_or_else(|| RenderError::MissingAttribute {
                name: cfg.position_attribute.to_string(),
            })?;

        // Only the position buffer is bound; any other vertex input would be unfed.
        if let Some((name, location)) = program
            .vertex_inputs()
            .into_iter()
            .find(|&(_, loc)| loc != location)
        {
            return Err(RenderError::UnboundAttribute { name, location });
        }

        let layout = ProgramLayout {
            attribute: AttributeBinding::float3(location),
            topology: wgpu::PrimitiveTopology::TriangleList,
        };
        let gpu_program = backend.create_program(&program, &layout)?;

        let vertex_buffer =
            backend.upload_buffer(BufferKind::Vertex, bytemuck::cast_slice(cfg.vertices.as_ref()));
        let index_buffer =
            backend.upload_buffer(BufferKind::Index, bytemuck::cast_slice(cfg.indices.as_ref()));

        let viewport = ViewportRect::covering(size);

        backend.draw(&FramePass {
            clear,
            viewport,
            program: &gpu_program,
            vertex_buffer: &vertex_buffer,
            attribute: layout.attribute,
            index_buffer: &index_buffer,
            index_format: wgpu::IndexFormat::Uint16,
            topology: layout.topology,
            index_count: cfg.indices.len() as u32,
        })?;

        log::info!(
            "drew {} indices into {}x{} surface",
            cfg.indices.len(),
            size.width,
            size.height
        );
        Ok(())
    }
}
