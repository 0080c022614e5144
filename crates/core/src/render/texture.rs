//! Sampling parameters for the host's texture.
//!
//! The renderer never creates textures. The host binds its texture to
//! `TEXTURE_2D` and asks the active profile to apply these parameters once
//! after upload, so the texture samples with linear filtering and clamps
//! at its edges (required for non-power-of-two sizes on ES 2).

use super::driver::GlDriver;

/// Filter, wrap and mip-level settings for a `TEXTURE_2D` target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// GL minification filter (e.g. `glow::LINEAR`).
    pub min_filter: u32,
    /// GL magnification filter.
    pub mag_filter: u32,
    /// Horizontal wrap mode (e.g. `glow::CLAMP_TO_EDGE`).
    pub wrap_s: u32,
    /// Vertical wrap mode.
    pub wrap_t: u32,
    /// When set, pins `TEXTURE_BASE_LEVEL` to 0 and `TEXTURE_MAX_LEVEL` to
    /// this value. Those parameters only exist from ES 3 on.
    pub max_level: Option<i32>,
}

impl TextureParams {
    /// Linear filtering with edge clamping on both axes.
    pub fn linear_clamped() -> Self {
        Self {
            min_filter: glow::LINEAR,
            mag_filter: glow::LINEAR,
            wrap_s: glow::CLAMP_TO_EDGE,
            wrap_t: glow::CLAMP_TO_EDGE,
            max_level: None,
        }
    }

    /// Restricts sampling to mip level 0.
    pub fn single_level(self) -> Self {
        Self {
            max_level: Some(0),
            ..self
        }
    }

    /// Applies the parameters to the texture currently bound to `TEXTURE_2D`.
    pub fn apply<D: GlDriver>(&self, gl: &D) {
        let target = glow::TEXTURE_2D;
        gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, self.mag_filter as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, self.min_filter as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_S, self.wrap_s as i32);
        gl.tex_parameter_i32(target, glow::TEXTURE_WRAP_T, self.wrap_t as i32);

        if let Some(max_level) = self.max_level {
            gl.tex_parameter_i32(target, glow::TEXTURE_BASE_LEVEL, 0);
            gl.tex_parameter_i32(target, glow::TEXTURE_MAX_LEVEL, max_level);
        }
    }
}
