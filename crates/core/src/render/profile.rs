//! API-revision profiles.
//!
//! A profile is the single place where OpenGL ES 2 and ES 3 differ. The
//! renderer picks one with [`select_profile`] at construction and then talks
//! to it through `dyn ShaderProfile`, so no caller ever branches on the
//! revision.
//!
//! | | [`LegacyProfile`] | [`CurrentProfile`] |
//! |---|---|---|
//! | API | OpenGL ES 2.0 | OpenGL ES 3.0 |
//! | shaders | GLSL ES 1.00 | GLSL ES 3.00 |
//! | vertex array object | no | yes |
//! | texture level range | untouched | pinned to level 0 |

use super::context::DriverInfo;
use super::driver::GlDriver;
use super::passthrough::{ShaderSources, CURRENT_SOURCES, LEGACY_SOURCES};
use super::shader::{build_program, compile_stage, LinkedProgram, StageKind};
use super::texture::TextureParams;
use crate::config::{ApiRevision, RendererConfig};
use crate::error::RenderError;

/// Revision-specific shader and state operations.
///
/// Object safe: the renderer holds a `Box<dyn ShaderProfile<D>>`.
pub trait ShaderProfile<D: GlDriver> {
    /// The revision this profile implements.
    fn revision(&self) -> ApiRevision;

    /// The built-in pass-through shaders in this profile's dialect.
    fn sources(&self) -> ShaderSources;

    /// Whether vertex attribute state must live in a vertex array object.
    fn uses_vertex_array(&self) -> bool;

    /// Compiles one stage.
    ///
    /// # Errors
    ///
    /// `ShaderCompile` on a blank source or a failed compile; nothing is
    /// left allocated.
    fn load_shader(&self, gl: &D, kind: StageKind, source: &str) -> Result<D::Shader, RenderError>;

    /// Compiles both stages and links them into a program.
    ///
    /// # Errors
    ///
    /// `ShaderCompile`, `GraphicsApi` (attach) or `ProgramLink`; nothing is
    /// left allocated.
    fn create_program(
        &self,
        gl: &D,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<LinkedProgram<D>, RenderError>;

    /// Reads the driver's pending error.
    ///
    /// # Errors
    ///
    /// `GraphicsApi { op, code }` for anything other than `NO_ERROR`.
    fn check_error(&self, gl: &D, op: &str) -> Result<(), RenderError>;

    /// Applies sampling parameters to the texture bound to `TEXTURE_2D`.
    fn init_texture_params(&self, gl: &D);
}

/// Returns the profile named by `config.revision`.
pub fn select_profile<D: GlDriver>(config: &RendererConfig) -> Box<dyn ShaderProfile<D>> {
    match config.revision {
        ApiRevision::Legacy => Box::new(LegacyProfile::new(config.log_driver_info)),
        ApiRevision::Current => Box::new(CurrentProfile::new(config.log_driver_info)),
    }
}

fn check_gl_error<D: GlDriver>(gl: &D, op: &str) -> Result<(), RenderError> {
    let code = gl.get_error();
    log::trace!("get_error after {op}: 0x{code:04X}");
    if code == glow::NO_ERROR {
        Ok(())
    } else {
        log::error!("{op}: GL error 0x{code:04X}");
        Err(RenderError::GraphicsApi {
            op: op.to_string(),
            code,
        })
    }
}

/// OpenGL ES 2.0 / GLSL ES 1.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyProfile {
    log_driver_info: bool,
}

impl LegacyProfile {
    pub fn new(log_driver_info: bool) -> Self {
        Self { log_driver_info }
    }
}

impl<D: GlDriver> ShaderProfile<D> for LegacyProfile {
    fn revision(&self) -> ApiRevision {
        ApiRevision::Legacy
    }

    fn sources(&self) -> ShaderSources {
        LEGACY_SOURCES
    }

    fn uses_vertex_array(&self) -> bool {
        false
    }

    fn load_shader(&self, gl: &D, kind: StageKind, source: &str) -> Result<D::Shader, RenderError> {
        compile_stage(gl, kind, source)
    }

    fn create_program(
        &self,
        gl: &D,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<LinkedProgram<D>, RenderError> {
        if self.log_driver_info {
            DriverInfo::query(gl).log(ApiRevision::Legacy);
        }
        build_program(gl, self, vertex_src, fragment_src)
    }

    fn check_error(&self, gl: &D, op: &str) -> Result<(), RenderError> {
        check_gl_error(gl, op)
    }

    fn init_texture_params(&self, gl: &D) {
        TextureParams::linear_clamped().apply(gl);
    }
}

/// OpenGL ES 3.0 / GLSL ES 3.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentProfile {
    log_driver_info: bool,
}

impl CurrentProfile {
    pub fn new(log_driver_info: bool) -> Self {
        Self { log_driver_info }
    }
}

impl<D: GlDriver> ShaderProfile<D> for CurrentProfile {
    fn revision(&self) -> ApiRevision {
        ApiRevision::Current
    }

    fn sources(&self) -> ShaderSources {
        CURRENT_SOURCES
    }

    fn uses_vertex_array(&self) -> bool {
        true
    }

    fn load_shader(&self, gl: &D, kind: StageKind, source: &str) -> Result<D::Shader, RenderError> {
        compile_stage(gl, kind, source)
    }

    fn create_program(
        &self,
        gl: &D,
        vertex_src: &str,
        fragment_src: &str,
    ) -> Result<LinkedProgram<D>, RenderError> {
        if self.log_driver_info {
            DriverInfo::query(gl).log(ApiRevision::Current);
        }
        build_program(gl, self, vertex_src, fragment_src)
    }

    fn check_error(&self, gl: &D, op: &str) -> Result<(), RenderError> {
        check_gl_error(gl, op)
    }

    fn init_texture_params(&self, gl: &D) {
        TextureParams::linear_clamped().single_level().apply(gl);
    }
}
