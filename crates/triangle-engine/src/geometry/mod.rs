//! CPU-side geometry for the triangle and the attribute layout that feeds it
//! to the vertex shader.

mod attribute;
mod mesh;

pub use attribute::AttributeBinding;
pub use mesh::{check_indices, Position, TRIANGLE_INDICES, TRIANGLE_VERTICES};
