use thiserror::Error;

use crate::shader::ShaderStage;

/// Shader compile or program link failure.
///
/// `diagnostic` is the human-readable compiler/linker output.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShaderBuildError {
    #[error("{stage} shader failed to compile:\n{diagnostic}")]
    Compile {
        stage: ShaderStage,
        diagnostic: String,
    },

    #[error("program failed to link:\n{diagnostic}")]
    Link { diagnostic: String },
}

impl ShaderBuildError {
    pub fn diagnostic(&self) -> &str {
        match self {
            Self::Compile { diagnostic, .. } | Self::Link { diagnostic } => diagnostic,
        }
    }
}

/// Everything that stops the triangle from reaching the screen.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The surface cannot produce a rendering context.
    #[error("rendering context unavailable: {reason}")]
    ContextUnavailable { reason: String },

    #[error(transparent)]
    ShaderBuild(#[from] ShaderBuildError),

    #[error("linked program has no vertex input named `{name}`")]
    MissingAttribute { name: String },

    /// The vertex stage reads an input no vertex buffer supplies.
    #[error("vertex input `{name}` at location {location} has no vertex buffer bound")]
    UnboundAttribute { name: String, location: u32 },

    #[error("surface has zero size ({width}x{height})")]
    EmptySurface { width: u32, height: u32 },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u16, vertex_count: usize },

    #[error("failed to acquire a frame: {reason}")]
    FrameUnavailable { reason: String, fatal: bool },
}
