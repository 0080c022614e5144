//! Error types for shader construction and surface rendering.

use crate::render::renderer::Phase;
use thiserror::Error;

/// Errors produced while building the program or drawing a frame.
///
/// Every variant is fatal for the operation that raised it. Nothing in the
/// crate retries, and the active profile never falls back to the other one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A shader stage could not be created or failed to compile.
    #[error("shader compile error ({stage}):\n{log}")]
    ShaderCompile {
        /// The stage that failed (`"vertex"` or `"fragment"`).
        stage: String,
        /// Annotated source followed by the driver's info log.
        log: String,
    },

    /// The program object could not be created or failed to link.
    #[error("program link error:\n{0}")]
    ProgramLink(String),

    /// `get_error` reported a pending error after `op`.
    #[error("{op}: GL error 0x{code:04X} ({})", code_name(.code))]
    GraphicsApi {
        /// Tag of the call that was checked.
        op: String,
        /// Raw GL error code.
        code: u32,
    },

    /// `render` was called while the renderer was not in the ready phase.
    #[error("renderer is not initialized (phase: {phase})")]
    NotInitialized { phase: Phase },

    /// `initialize` failed; wraps the underlying cause.
    #[error("renderer initialization failed: {0}")]
    Initialization(#[source] Box<RenderError>),

    /// The driver refused to allocate a buffer or vertex array.
    #[error("failed to create {resource}: {message}")]
    ResourceCreation { resource: String, message: String },

    /// An attribute or uniform was not found in the linked program.
    #[error("program has no active binding named '{0}'")]
    UnresolvedBinding(String),

    /// A lifecycle call arrived in a phase that does not accept it.
    #[error("cannot {operation} while renderer is {phase}")]
    InvalidPhase { operation: String, phase: Phase },

    /// A viewport dimension does not fit the signed extent GL takes.
    #[error("viewport {width}x{height} exceeds the GL extent range")]
    ViewportTooLarge { width: u32, height: u32 },

    /// Texture and viewport sizes are not both known yet, or one is empty.
    #[error("output geometry is unresolved: texture and viewport sizes must be set and non-empty")]
    GeometryUnresolved,
}

impl RenderError {
    /// Wraps `self` as an initialization failure.
    pub(crate) fn during_init(self) -> Self {
        RenderError::Initialization(Box::new(self))
    }
}

fn code_name(code: &u32) -> &'static str {
    gl_error_name(*code)
}

/// Returns the symbolic name of a GL error code.
pub fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        _ => "unknown",
    }
}
