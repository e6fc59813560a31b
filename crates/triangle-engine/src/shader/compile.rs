use naga::valid::{Capabilities, ValidationFlags, Validator};

use crate::error::ShaderBuildError;

use super::ShaderStage;

/// A validated shader for one pipeline stage.
///
/// Keeps the WGSL text (handed to the device when the pipeline is built) and
/// the parsed module (used for interface checks and reflection).
#[derive(Debug, Clone)]
pub struct CompiledShader {
    stage: ShaderStage,
    source: String,
    module: naga::Module,
    entry_index: usize,
}

impl CompiledShader {
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the entry point used for this stage.
    pub fn entry_point(&self) -> &str {
        &self.entry().name
    }

    pub(crate) fn module(&self) -> &naga::Module {
        &self.module
    }

    pub(crate) fn entry(&self) -> &naga::EntryPoint {
        &self.module.entry_points[self.entry_index]
    }
}

/// Compiles WGSL `source` for `stage`.
///
/// On failure the compiler diagnostic is logged and returned; no shader object
/// survives.
pub fn compile_shader(stage: ShaderStage, source: &str) -> Result<CompiledShader, ShaderBuildError> {
    let fail = |diagnostic: String| {
        log::error!("{stage} shader compilation failed:\n{diagnostic}");
        ShaderBuildError::Compile { stage, diagnostic }
    };

    let module = naga::front::wgsl::parse_str(source).map_err(|e| fail(e.emit_to_string(source)))?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| fail(e.emit_to_string(source)))?;

    let mut candidates = module
        .entry_points
        .iter()
        .enumerate()
        .filter(|(_, ep)| ep.stage == stage.to_naga());

    let Some((entry_index, entry)) = candidates.next() else {
        return Err(fail(format!("source declares no @{stage} entry point")));
    };

    if candidates.next().is_some() {
        log::debug!("several @{stage} entry points declared; using `{}`", entry.name);
    }

    log::debug!("compiled {stage} shader (entry point `{}`)", entry.name);

    Ok(CompiledShader {
        stage,
        source: source.to_owned(),
        entry_index,
        module,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::sources::{TRIANGLE_FRAGMENT_WGSL, TRIANGLE_VERTEX_WGSL};
    use crate::test_log;

    #[test]
    fn default_vertex_shader_compiles() {
        let vs = compile_shader(ShaderStage::Vertex, TRIANGLE_VERTEX_WGSL).unwrap();
        assert_eq!(vs.stage(), ShaderStage::Vertex);
        assert_eq!(vs.entry_point(), "vs_main");
        assert_eq!(vs.source(), TRIANGLE_VERTEX_WGSL);
    }

    #[test]
    fn default_fragment_shader_compiles() {
        let fs = compile_shader(ShaderStage::Fragment, TRIANGLE_FRAGMENT_WGSL).unwrap();
        assert_eq!(fs.stage(), ShaderStage::Fragment);
        assert_eq!(fs.entry_point(), "fs_main");
    }

    #[test]
    fn syntax_error_in_vertex_shader_reports_diagnostic() {
        let broken = "@vertex fn vs_main( -> @builtin(position) vec4<f32> { }";
        let err = compile_shader(ShaderStage::Vertex, broken).unwrap_err();

        match &err {
            ShaderBuildError::Compile { stage, diagnostic } => {
                assert_eq!(*stage, ShaderStage::Vertex);
                assert!(!diagnostic.trim().is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn type_error_in_fragment_shader_reports_diagnostic() {
        let broken = r#"
            @fragment
            fn fs_main() -> @location(0) vec4<f32> {
                return vec3<f32>(1.0, 0.0, 0.0);
            }
        "#;
        let err = compile_shader(ShaderStage::Fragment, broken).unwrap_err();

        assert!(matches!(
            err,
            ShaderBuildError::Compile { stage: ShaderStage::Fragment, .. }
        ));
        assert!(!err.diagnostic().trim().is_empty());
    }

    #[test]
    fn source_without_requested_stage_is_rejected() {
        let err = compile_shader(ShaderStage::Vertex, TRIANGLE_FRAGMENT_WGSL).unwrap_err();
        assert!(err.diagnostic().contains("no @vertex entry point"));
    }

    #[test]
    fn compile_failures_are_logged_as_errors() {
        for (stage, broken) in [
            (ShaderStage::Vertex, "@vertex fn vs_main( -> @builtin(position) vec4<f32> { }"),
            (ShaderStage::Fragment, "@fragment fn fs_main() -> @location(0) vec4<f32> {"),
        ] {
            let (result, records) = test_log::capture(|| compile_shader(stage, broken));
            let err = result.unwrap_err();

            let errors = test_log::errors(&records);
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with(&format!("{stage} shader compilation failed:")));
            assert!(errors[0].contains(err.diagnostic()));
            assert!(!err.diagnostic().trim().is_empty());
        }
    }

    #[test]
    fn successful_compile_logs_no_error() {
        let (result, records) =
            test_log::capture(|| compile_shader(ShaderStage::Vertex, TRIANGLE_VERTEX_WGSL));
        assert!(result.is_ok());
        assert!(test_log::errors(&records).is_empty());
    }
}
