//! Embedded WGSL for the triangle pipeline.

pub const TRIANGLE_VERTEX_WGSL: &str = include_str!("shaders/triangle.vert.wgsl");
pub const TRIANGLE_FRAGMENT_WGSL: &str = include_str!("shaders/triangle.frag.wgsl");

/// Name of the vertex input carrying positions.
pub const POSITION_ATTRIBUTE: &str = "position";
