//! Shader compilation and program linking.
//!
//! WGSL is parsed and validated with naga before anything reaches the device,
//! so a broken shader surfaces as a [`ShaderBuildError`](crate::ShaderBuildError)
//! carrying the compiler diagnostic instead of a device-level panic.
//!
//! Linking checks the interface between the two stages (fragment inputs must be
//! written by the vertex stage) and exposes vertex input reflection, which the
//! renderer uses to find where positions go.

mod compile;
mod link;
pub mod sources;
mod stage;

pub use compile::{compile_shader, CompiledShader};
pub use link::{link_program, LinkedProgram};
pub use stage::ShaderStage;
