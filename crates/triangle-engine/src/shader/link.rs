use naga::{Binding, Handle, Module, Type, TypeInner};

use crate::error::ShaderBuildError;

use super::{CompiledShader, ShaderStage};

/// A vertex + fragment pair whose stage interface has been checked.
#[derive(Debug, Clone)]
pub struct LinkedProgram {
    vertex: CompiledShader,
    fragment: CompiledShader,
}

impl LinkedProgram {
    pub fn vertex(&self) -> &CompiledShader {
        &self.vertex
    }

    pub fn fragment(&self) -> &CompiledShader {
        &self.fragment
    }

    /// Location of the vertex input called `name`, if the vertex stage declares one.
    pub fn attribute_location(&self, name: &str) -> Option<u32> {
        argument_slots(&self.vertex)
            .into_iter()
            .find(|slot| slot.name.as_deref() == Some(name))
            .map(|slot| slot.location)
    }

    /// Every `@location` input of the vertex entry point as `(name, location)`.
    ///
    /// Unnamed inputs are reported as `<unnamed>`.
    pub fn vertex_inputs(&self) -> Vec<(String, u32)> {
        argument_slots(&self.vertex)
            .into_iter()
            .map(|slot| {
                let name = slot.name.unwrap_or_else(|| "<unnamed>".to_owned());
                (name, slot.location)
            })
            .collect()
    }
}

/// Links `vertex` and `fragment` into one program.
///
/// Fails when a shader is attached to the wrong stage, when the fragment stage
/// reads a location the vertex stage does not write (or writes with another
/// type), or when the fragment stage has no color output. The linker
/// diagnostic is logged and returned.
pub fn link_program(
    vertex: CompiledShader,
    fragment: CompiledShader,
) -> Result<LinkedProgram, ShaderBuildError> {
    let mut problems = Vec::new();

    for (shader, expected) in [(&vertex, ShaderStage::Vertex), (&fragment, ShaderStage::Fragment)] {
        if shader.stage() != expected {
            problems.push(format!(
                "{} shader attached to the {expected} stage",
                shader.stage()
            ));
        }
    }

    if problems.is_empty() {
        problems.extend(interface_problems(&vertex, &fragment));
    }

    if !problems.is_empty() {
        let diagnostic = problems.join("\n");
        log::error!("program link failed:\n{diagnostic}");
        return Err(ShaderBuildError::Link { diagnostic });
    }

    log::debug!(
        "linked program `{}` + `{}`",
        vertex.entry_point(),
        fragment.entry_point()
    );

    Ok(LinkedProgram { vertex, fragment })
}

fn interface_problems(vertex: &CompiledShader, fragment: &CompiledShader) -> Vec<String> {
    let written = result_slots(vertex);
    let mut problems = Vec::new();

    for input in argument_slots(fragment) {
        let label = input.name.as_deref().unwrap_or("<unnamed>");
        match written.iter().find(|out| out.location == input.location) {
            None => problems.push(format!(
                "fragment input `{label}` at location {} is not written by the vertex stage",
                input.location
            )),
            Some(out) if out.ty != input.ty => problems.push(format!(
                "location {}: vertex stage writes {:?}, fragment input `{label}` reads {:?}",
                input.location, out.ty, input.ty
            )),
            Some(_) => {}
        }
    }

    if result_slots(fragment).is_empty() {
        problems.push("fragment stage writes no color output".to_owned());
    }

    problems
}

/// One `@location` slot on a stage boundary.
#[derive(Debug, Clone, PartialEq)]
struct Slot {
    location: u32,
    name: Option<String>,
    ty: TypeInner,
}

fn argument_slots(shader: &CompiledShader) -> Vec<Slot> {
    let module = shader.module();
    let mut slots = Vec::new();
    for arg in &shader.entry().function.arguments {
        collect_slots(module, arg.ty, arg.binding.as_ref(), arg.name.as_deref(), &mut slots);
    }
    slots
}

fn result_slots(shader: &CompiledShader) -> Vec<Slot> {
    let module = shader.module();
    let mut slots = Vec::new();
    if let Some(result) = &shader.entry().function.result {
        collect_slots(module, result.ty, result.binding.as_ref(), None, &mut slots);
    }
    slots
}

// Struct-typed arguments and results carry their bindings on the members.
fn collect_slots(
    module: &Module,
    ty: Handle<Type>,
    binding: Option<&Binding>,
    name: Option<&str>,
    out: &mut Vec<Slot>,
) {
    match binding {
        Some(Binding::Location { location, .. }) => out.push(Slot {
            location: *location,
            name: name.map(str::to_owned),
            ty: module.types[ty].inner.clone(),
        }),
        Some(Binding::BuiltIn(_)) => {}
        None => {
            if let TypeInner::Struct { members, .. } = &module.types[ty].inner {
                for member in members {
                    collect_slots(
                        module,
                        member.ty,
                        member.binding.as_ref(),
                        member.name.as_deref(),
                        out,
                    );
                }
            }
        }
    }
}
