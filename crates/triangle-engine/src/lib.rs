//! Triangle engine crate.
//!
//! Draws one flat-colored triangle into a window with wgpu: get a surface,
//! compile two shaders, upload one triangle's vertices and indices, issue one
//! indexed draw.

pub mod coords;
pub mod device;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;
pub mod window;

mod error;

#[cfg(test)]
mod test_log;

pub use error::{RenderError, ShaderBuildError};
