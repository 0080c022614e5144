//! Shader stage compilation and program linking.
//!
//! These are the revision-independent building blocks both profiles use.
//! Every failure path deletes whatever driver objects it created before
//! returning, so a failed compile or link never leaks a stage or program.

use super::driver::GlDriver;
use super::profile::ShaderProfile;
use crate::error::RenderError;
use std::fmt;

/// The two programmable stages the renderer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageKind {
    Vertex,
    Fragment,
}

impl StageKind {
    /// The GL shader-type enum for this stage.
    pub fn gl_enum(self) -> u32 {
        match self {
            StageKind::Vertex => glow::VERTEX_SHADER,
            StageKind::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Lowercase stage name, as reported in compile errors.
    pub fn name(self) -> &'static str {
        match self {
            StageKind::Vertex => "vertex",
            StageKind::Fragment => "fragment",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders `source` with right-aligned line numbers, followed by a blank
/// line and the driver's `log`.
///
/// Driver logs cite line numbers, so the numbered listing lets a reader
/// match each message to its line. Either part may be empty; an empty part
/// is left out along with the separator.
pub fn annotate_source(source: &str, log: &str) -> String {
    let line_count = source.lines().count();
    let width = line_count.max(1).to_string().len();

    let mut out = String::new();
    for (i, line) in source.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{:>width$}: {line}", i + 1));
    }

    if !log.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(log);
    }
    out
}

/// Creates, sources and compiles one stage.
///
/// # Errors
///
/// Returns `RenderError::ShaderCompile` if `source` is blank, if the driver
/// cannot create a stage object, or if compilation fails. In the last case
/// the stage is deleted and the log carries the annotated source.
pub fn compile_stage<D: GlDriver>(
    gl: &D,
    kind: StageKind,
    source: &str,
) -> Result<D::Shader, RenderError> {
    let compile_error = |log: String| RenderError::ShaderCompile {
        stage: kind.name().to_string(),
        log,
    };

    if source.trim().is_empty() {
        return Err(compile_error("shader source is empty".to_string()));
    }

    let shader = gl.create_shader(kind.gl_enum()).map_err(compile_error)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.get_shader_compile_status(shader) {
        log::debug!("compiled {kind} stage {shader:?}");
        return Ok(shader);
    }

    let info_log = gl.get_shader_info_log(shader);
    gl.delete_shader(shader);
    log::error!("{kind} stage failed to compile: {info_log}");
    Err(compile_error(annotate_source(source, &info_log)))
}

/// A linked program together with the two stages attached to it.
///
/// The stages stay attached for the program's whole life and are released
/// with it by [`destroy`](Self::destroy).
#[derive(Debug)]
pub struct LinkedProgram<D: GlDriver> {
    program: D::Program,
    vertex: D::Shader,
    fragment: D::Shader,
}

impl<D: GlDriver> LinkedProgram<D> {
    /// The linked program handle. Ownership stays with `self`.
    pub fn program(&self) -> D::Program {
        self.program
    }

    /// Deletes the program and both of its stages.
    pub fn destroy(self, gl: &D) {
        release(gl, Some(self.program), self.vertex, self.fragment);
    }
}

fn release<D: GlDriver>(
    gl: &D,
    program: Option<D::Program>,
    vertex: D::Shader,
    fragment: D::Shader,
) {
    if let Some(program) = program {
        gl.delete_program(program);
    }
    gl.delete_shader(vertex);
    gl.delete_shader(fragment);
}

/// Compiles both stages through `profile`, attaches them to a new program
/// and links it.
///
/// `profile.check_error` runs once the program object exists, so an error
/// left pending by earlier calls fails here, and again after each attach.
/// No partial program
/// survives a failure: any stage or program created up to that point is
/// deleted before the error is returned.
///
/// # Errors
///
/// * `ShaderCompile` if either stage fails.
/// * `GraphicsApi` if a GL error is pending after program creation or is
///   raised by attaching a stage.
/// * `ProgramLink` if the program cannot be created or fails to link.
pub fn build_program<D, P>(
    gl: &D,
    profile: &P,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<LinkedProgram<D>, RenderError>
where
    D: GlDriver,
    P: ShaderProfile<D> + ?Sized,
{
    let vertex = profile.load_shader(gl, StageKind::Vertex, vertex_src)?;
    let fragment = match profile.load_shader(gl, StageKind::Fragment, fragment_src) {
        Ok(fragment) => fragment,
        Err(e) => {
            gl.delete_shader(vertex);
            return Err(e);
        }
    };

    let program = match gl.create_program() {
        Ok(program) => program,
        Err(e) => {
            release(gl, None, vertex, fragment);
            return Err(RenderError::ProgramLink(e));
        }
    };
    if let Err(e) = profile.check_error(gl, "create_program") {
        release(gl, Some(program), vertex, fragment);
        return Err(e);
    }

    for stage in [vertex, fragment] {
        gl.attach_shader(program, stage);
        if let Err(e) = profile.check_error(gl, "attach_shader") {
            release(gl, Some(program), vertex, fragment);
            return Err(e);
        }
    }

    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        let info_log = gl.get_program_info_log(program);
        release(gl, Some(program), vertex, fragment);
        log::error!("could not link program: {info_log}");
        return Err(RenderError::ProgramLink(info_log));
    }

    let revision = profile.revision();
    log::info!("linked program {program:?} ({revision} profile)");
    Ok(LinkedProgram {
        program,
        vertex,
        fragment,
    })
}
