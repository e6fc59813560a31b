/// Wiring between a vertex buffer and one shader input.
///
/// `stride == 0` means tightly packed: consecutive elements follow each other
/// with no gap, so the effective stride is the element size.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeBinding {
    /// Shader input location (`@location(n)`).
    pub location: u32,
    pub components: u32,
    pub format: wgpu::VertexFormat,
    pub normalized: bool,
    pub stride: u64,
    pub offset: u64,
}

impl AttributeBinding {
    /// Three tightly packed, non-normalized `f32` components at `location`.
    pub const fn float3(location: u32) -> Self {
        Self {
            location,
            components: 3,
            format: wgpu::VertexFormat::Float32x3,
            normalized: false,
            stride: 0,
            offset: 0,
        }
    }

    /// Byte distance between consecutive vertices.
    pub fn effective_stride(&self) -> u64 {
        if self.stride == 0 {
            self.format.size()
        } else {
            self.stride
        }
    }

    /// Single-attribute wgpu layout. The attribute slice is borrowed from the caller.
    pub fn buffer_layout<'a>(
        &self,
        attributes: &'a [wgpu::VertexAttribute],
    ) -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: self.effective_stride(),
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes,
        }
    }

    pub fn vertex_attribute(&self) -> wgpu::VertexAttribute {
        wgpu::VertexAttribute {
            format: self.format,
            offset: self.offset,
            shader_location: self.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float3_is_tightly_packed() {
        let b = AttributeBinding::float3(0);
        assert_eq!(b.components, 3);
        assert_eq!(b.stride, 0);
        assert_eq!(b.offset, 0);
        assert!(!b.normalized);
        assert_eq!(b.effective_stride(), 12);
    }

    #[test]
    fn explicit_stride_is_kept() {
        let b = AttributeBinding {
            stride: 32,
            ..AttributeBinding::float3(2)
        };
        assert_eq!(b.effective_stride(), 32);
        assert_eq!(b.vertex_attribute().shader_location, 2);
    }
}
