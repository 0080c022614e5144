//! Renderer configuration.
//!
//! The API revision is chosen here, once, and handed to
//! [`SurfaceRenderer::new`](crate::render::SurfaceRenderer::new). There is no
//! global switch; a different revision means a different renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Graphics-API revision the renderer targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiRevision {
    /// OpenGL ES 2.0 with GLSL ES 1.00 shaders.
    Legacy,
    /// OpenGL ES 3.0 with GLSL ES 3.00 shaders.
    #[default]
    Current,
}

impl ApiRevision {
    /// Returns the lowercase name used in configuration files and logs.
    pub fn name(self) -> &'static str {
        match self {
            ApiRevision::Legacy => "legacy",
            ApiRevision::Current => "current",
        }
    }
}

impl fmt::Display for ApiRevision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Construction-time settings for a [`SurfaceRenderer`](crate::render::SurfaceRenderer).
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Which profile compiles and links the program.
    pub revision: ApiRevision,
    /// Log the driver's version, vendor and extension strings when the
    /// program is created.
    pub log_driver_info: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            revision: ApiRevision::Current,
            log_driver_info: true,
        }
    }
}

impl RendererConfig {
    /// Creates a config for `revision` with all other settings at their defaults.
    pub fn with_revision(revision: ApiRevision) -> Self {
        Self {
            revision,
            ..Self::default()
        }
    }

    /// Parses a config from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if `json` is malformed or a field has
    /// the wrong type (for example an unknown revision name).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
