//! Driver identification strings for diagnostics.
//!
//! `DriverInfo` captures what the context reports about itself: API
//! version, shading-language version, vendor, renderer and extensions. It
//! is logged when a program is created so bug reports carry the driver
//! that produced them. Querying is best effort and never fails.

use super::driver::GlDriver;
use crate::config::ApiRevision;

/// Identification strings reported by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    /// `GL_VERSION`, e.g. `"OpenGL ES 3.2 Mesa 24.0"`.
    pub version: String,
    /// `GL_SHADING_LANGUAGE_VERSION`.
    pub shading_language_version: String,
    /// `GL_VENDOR`.
    pub vendor: String,
    /// `GL_RENDERER`.
    pub renderer: String,
    /// Supported extension names, sorted.
    pub extensions: Vec<String>,
}

impl DriverInfo {
    /// Queries the identification strings from `gl`.
    ///
    /// Only string getters are called. The GL error flag is neither read
    /// nor cleared, so logging never changes what a later check reports.
    pub fn query<D: GlDriver>(gl: &D) -> Self {
        Self {
            version: gl.get_parameter_string(glow::VERSION),
            shading_language_version: gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            vendor: gl.get_parameter_string(glow::VENDOR),
            renderer: gl.get_parameter_string(glow::RENDERER),
            extensions: gl.supported_extensions(),
        }
    }

    /// Logs the strings at `info` level, tagged with the active profile.
    pub fn log(&self, revision: ApiRevision) {
        log::info!(
            "{revision} profile on {} (shading language {}), vendor {}, renderer {}",
            or_unknown(&self.version),
            or_unknown(&self.shading_language_version),
            or_unknown(&self.vendor),
            or_unknown(&self.renderer),
        );
        log::info!(
            "{} extensions: {}",
            self.extensions.len(),
            self.extensions.join(" ")
        );
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "<unknown>"
    } else {
        value
    }
}
