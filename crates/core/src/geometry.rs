//! Aspect-preserving output geometry.
//!
//! The texture is drawn as a four-vertex triangle strip in clip space. Its
//! texture coordinates never change; its positions are shrunk along one
//! axis so the texture keeps its aspect ratio inside the viewport
//! (letterbox when the texture is relatively wider, pillarbox when it is
//! relatively taller).
//!
//! Everything here is pure: the quad is a function of the two sizes alone
//! and is recomputed from scratch on every change.

use glam::Vec2;

/// Texture coordinates for the strip, one `(u, v)` per corner in the order
/// bottom-left, bottom-right, top-left, top-right.
///
/// `v` runs top-down because host textures are uploaded with their first
/// row at the top of the image.
pub const TEXTURE_COORDS: [f32; 8] = [0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0];

/// Positions covering the whole viewport, used until a quad can be computed.
pub const FULL_VIEWPORT_QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// A size of `width` by `height` pixels. Zero is allowed.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width divided by height.
    pub fn aspect(self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Half-extents of the output quad in clip space.
///
/// One component is always exactly `1.0`; the other is at most `1.0`.
/// Neither size may be empty.
pub fn fit_extent(texture: Size, viewport: Size) -> Vec2 {
    let relative = viewport.aspect() / texture.aspect();
    if relative > 1.0 {
        Vec2::new(1.0 / relative, 1.0)
    } else {
        Vec2::new(1.0, relative)
    }
}

/// Clip-space corners of the aspect-corrected quad, flattened as
/// `[x0, y0, x1, y0, x0, y1, x1, y1]` to match [`TEXTURE_COORDS`].
pub fn output_quad(texture: Size, viewport: Size) -> [f32; 8] {
    let max = fit_extent(texture, viewport);
    let min = -max;
    [min.x, min.y, max.x, min.y, min.x, max.y, max.x, max.y]
}

/// Texture and viewport sizes plus the position stream derived from them.
///
/// The two sizes arrive independently and in any order. Once both are
/// known and non-empty, [`output_quad`](Self::output_quad) is available
/// and [`positions`](Self::positions) holds it; before that, positions keep
/// the full-viewport placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryState {
    texture: Option<Size>,
    viewport: Option<Size>,
    positions: [f32; 8],
    resolved: bool,
}

impl Default for GeometryState {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometryState {
    /// No sizes known; positions hold the full-viewport placeholder.
    pub fn new() -> Self {
        Self {
            texture: None,
            viewport: None,
            positions: FULL_VIEWPORT_QUAD,
            resolved: false,
        }
    }

    /// Records the texture size and recomputes the positions.
    pub fn set_texture_size(&mut self, size: Size) {
        self.texture = Some(size);
        self.recompute();
    }

    /// Records the viewport size and recomputes the positions.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = Some(size);
        self.recompute();
    }

    /// The last texture size recorded, if any.
    pub fn texture_size(&self) -> Option<Size> {
        self.texture
    }

    /// The last viewport size recorded, if any.
    pub fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    /// The current position stream: the computed quad, or the placeholder.
    pub fn positions(&self) -> &[f32; 8] {
        &self.positions
    }

    /// The aspect-corrected quad, or `None` while it cannot be computed.
    pub fn output_quad(&self) -> Option<&[f32; 8]> {
        self.resolved.then_some(&self.positions)
    }

    fn recompute(&mut self) {
        match (self.texture, self.viewport) {
            (Some(texture), Some(viewport)) if !texture.is_empty() && !viewport.is_empty() => {
                self.positions = output_quad(texture, viewport);
                self.resolved = true;
                log::debug!(
                    "output quad for texture {}x{} in viewport {}x{}: {:?}",
                    texture.width,
                    texture.height,
                    viewport.width,
                    viewport.height,
                    self.positions
                );
            }
            _ => {
                self.positions = FULL_VIEWPORT_QUAD;
                self.resolved = false;
            }
        }
    }
}
