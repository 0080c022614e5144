//! OpenGL ES rendering: the driver boundary, the two API-revision
//! profiles, and the surface renderer built on them.
//!
//! # Module overview
//!
//! - [`driver`] -- The `GlDriver` trait the rest of the crate calls into.
//! - [`gl`] -- `GlDriver` for `glow::Context`.
//! - [`profile`] -- `LegacyProfile` (ES 2) and `CurrentProfile` (ES 3).
//! - [`shader`] -- Stage compilation, program linking, log annotation.
//! - [`passthrough`] -- Built-in shader sources in both GLSL dialects.
//! - [`texture`] -- Sampling parameters for the host's texture.
//! - [`context`] -- Driver identification strings for diagnostics.
//! - [`renderer`] -- `SurfaceRenderer`, the lifecycle and per-frame draw.

pub mod context;
pub mod driver;
pub mod gl;
pub mod passthrough;
pub mod profile;
pub mod renderer;
pub mod shader;
pub mod texture;

#[cfg(test)]
pub(crate) mod testing;

pub use context::DriverInfo;
pub use driver::GlDriver;
pub use passthrough::{ShaderSources, CURRENT_SOURCES, LEGACY_SOURCES};
pub use profile::{select_profile, CurrentProfile, LegacyProfile, ShaderProfile};
pub use renderer::{Phase, SurfaceRenderer};
pub use shader::{annotate_source, build_program, compile_stage, LinkedProgram, StageKind};
pub use texture::TextureParams;
