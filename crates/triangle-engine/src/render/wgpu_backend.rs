use wgpu::util::DeviceExt;

use crate::coords::SurfaceSize;
use crate::device::Gpu;
use crate::error::RenderError;
use crate::shader::LinkedProgram;

use super::{BufferKind, FramePass, ProgramLayout, RenderBackend};

/// Render pipeline built from a [`LinkedProgram`].
pub struct WgpuProgram {
    pipeline: wgpu::RenderPipeline,
    layout: ProgramLayout,
}

/// [`RenderBackend`] drawing into a window surface through wgpu.
pub struct WgpuBackend<'a, 'w> {
    gpu: &'a Gpu<'w>,
}

impl<'a, 'w> WgpuBackend<'a, 'w> {
    pub fn new(gpu: &'a Gpu<'w>) -> Self {
        Self { gpu }
    }
}

impl RenderBackend for WgpuBackend<'_, '_> {
    type Program = WgpuProgram;
    type Buffer = wgpu::Buffer;

    fn drawable_size(&self) -> SurfaceSize {
        self.gpu.size().into()
    }

    fn create_program(
        &mut self,
        program: &LinkedProgram,
        layout: &ProgramLayout,
    ) -> Result<Self::Program, RenderError> {
        let device = self.gpu.device();

        let vertex_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triangle vertex shader"),
            source: wgpu::ShaderSource::Wgsl(program.vertex().source().into()),
        });
        let fragment_module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("triangle fragment shader"),
            source: wgpu::ShaderSource::Wgsl(program.fragment().source().into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("triangle pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let attributes = [layout.attribute.vertex_attribute()];

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("triangle pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &vertex_module,
                entry_point: Some(program.vertex().entry_point()),
                compilation_options: Default::default(),
                buffers: &[layout.attribute.buffer_layout(&attributes)],
            },

            fragment: Some(wgpu::FragmentState {
                module: &fragment_module,
                entry_point: Some(program.fragment().entry_point()),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: self.gpu.surface_format(),
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: layout.topology,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            // The draw pass has no depth attachment; depth is only cleared.
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        Ok(WgpuProgram {
            pipeline,
            layout: *layout,
        })
    }

    fn upload_buffer(&mut self, kind: BufferKind, contents: &[u8]) -> Self::Buffer {
        let (label, usage) = match kind {
            BufferKind::Vertex => ("triangle vertex buffer", wgpu::BufferUsages::VERTEX),
            BufferKind::Index => ("triangle index buffer", wgpu::BufferUsages::INDEX),
        };

        // No COPY_DST: contents are fixed after creation.
        self.gpu
            .device()
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents,
                usage,
            })
    }

    fn draw(&mut self, pass: &FramePass<'_, Self>) -> Result<(), RenderError> {
        debug_assert_eq!(pass.topology, pass.program.layout.topology);
        debug_assert_eq!(pass.attribute, pass.program.layout.attribute);

        let mut frame = self.gpu.begin_frame().map_err(|err| {
            let action = self.gpu.handle_surface_error(&err);
            RenderError::FrameUnavailable {
                reason: err.to_string(),
                fatal: action.is_fatal(),
            }
        })?;

        // Clear pass: color + depth.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("triangle clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear.color.into()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &frame.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(pass.clear.depth),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        // Draw pass. Dropping it releases every binding.
        {
            let mut rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("triangle draw"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            let vp = pass.viewport;
            rpass.set_viewport(
                vp.x as f32,
                vp.y as f32,
                vp.width as f32,
                vp.height as f32,
                0.0,
                1.0,
            );
            rpass.set_pipeline(&pass.program.pipeline);
            rpass.set_vertex_buffer(0, pass.vertex_buffer.slice(..));
            rpass.set_index_buffer(pass.index_buffer.slice(..), pass.index_format);
            rpass.draw_indexed(0..pass.index_count, 0, 0..1);
        }

        self.gpu.submit(frame);
        Ok(())
    }
}
