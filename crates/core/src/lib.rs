#![deny(unsafe_code)]
//! Aspect-preserving texture presenter for OpenGL ES surfaces.
//!
//! Draws one host-owned 2D texture into the default framebuffer, shrinking
//! one axis of the output quad so the texture keeps its aspect ratio
//! (letterbox / pillarbox). Runs on OpenGL ES 2.0 or 3.0; the revision is
//! fixed per renderer through [`RendererConfig`].
//!
//! ```no_run
//! # fn frame(gl: &glow::Context, texture: glow::Texture) -> Result<(), letterbox_core::RenderError> {
//! use letterbox_core::{ApiRevision, RendererConfig, SurfaceRenderer};
//!
//! let mut renderer = SurfaceRenderer::new(&RendererConfig::with_revision(ApiRevision::Current));
//! renderer.initialize(gl)?;
//! renderer.set_texture_size(1280, 720);
//! renderer.set_viewport_size(1080, 1920);
//! renderer.render(gl, texture)?;
//! renderer.dispose(gl);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod render;

pub use config::{ApiRevision, RendererConfig};
pub use error::RenderError;
pub use geometry::{GeometryState, Size};
pub use render::{GlDriver, Phase, SurfaceRenderer};
