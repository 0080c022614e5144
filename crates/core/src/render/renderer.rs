//! The surface renderer: one texture, one program, one draw per frame.
//!
//! Lifecycle is `Uninitialized → Ready → Disposed`. GPU resources exist
//! only inside the `Ready` state, so they cannot be reached before
//! [`initialize`](SurfaceRenderer::initialize) or after
//! [`dispose`](SurfaceRenderer::dispose).
//!
//! All methods must be called on the thread that owns the GL context.

use super::driver::GlDriver;
use super::passthrough::{POSITION_ATTRIBUTE, SAMPLER_UNIFORM, TEXCOORD_ATTRIBUTE};
use super::profile::{select_profile, ShaderProfile};
use super::shader::LinkedProgram;
use crate::config::{ApiRevision, RendererConfig};
use crate::error::RenderError;
use crate::geometry::{GeometryState, Size, TEXTURE_COORDS};
use std::fmt;

/// Where a [`SurfaceRenderer`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Uninitialized,
    Ready,
    Disposed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Ready => "ready",
            Phase::Disposed => "disposed",
        })
    }
}

/// The linked program with its resolved bindings. Locations never change
/// after resolution.
struct RenderProgram<D: GlDriver> {
    linked: LinkedProgram<D>,
    position: u32,
    texcoord: u32,
    sampler: D::UniformLocation,
}

impl<D: GlDriver> RenderProgram<D> {
    /// Looks up the pass-through bindings, destroying `linked` if any is
    /// missing.
    fn resolve(gl: &D, linked: LinkedProgram<D>) -> Result<Self, RenderError> {
        let program = linked.program();
        let position = gl.get_attrib_location(program, POSITION_ATTRIBUTE);
        let texcoord = gl.get_attrib_location(program, TEXCOORD_ATTRIBUTE);
        let sampler = gl.get_uniform_location(program, SAMPLER_UNIFORM);

        match (position, texcoord, sampler) {
            (Some(position), Some(texcoord), Some(sampler)) => Ok(Self {
                linked,
                position,
                texcoord,
                sampler,
            }),
            (position, texcoord, _) => {
                let missing = if position.is_none() {
                    POSITION_ATTRIBUTE
                } else if texcoord.is_none() {
                    TEXCOORD_ATTRIBUTE
                } else {
                    SAMPLER_UNIFORM
                };
                linked.destroy(gl);
                Err(RenderError::UnresolvedBinding(missing.to_string()))
            }
        }
    }
}

/// Everything the renderer owns on the GPU while ready.
struct GpuResources<D: GlDriver> {
    program: RenderProgram<D>,
    texcoord_buffer: D::Buffer,
    position_buffer: D::Buffer,
    vertex_array: Option<D::VertexArray>,
}

impl<D: GlDriver> GpuResources<D> {
    /// Builds the program and vertex buffers. On failure every object
    /// created so far is released before the error is returned.
    fn create(
        gl: &D,
        profile: &dyn ShaderProfile<D>,
        positions: &[f32; 8],
    ) -> Result<Self, RenderError> {
        let sources = profile.sources();
        let linked = profile.create_program(gl, sources.vertex, sources.fragment)?;
        let program = RenderProgram::resolve(gl, linked)?;

        let texcoord_buffer = match new_buffer(gl, "texture coordinate buffer") {
            Ok(buffer) => buffer,
            Err(e) => {
                program.linked.destroy(gl);
                return Err(e);
            }
        };
        let position_buffer = match new_buffer(gl, "position buffer") {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.delete_buffer(texcoord_buffer);
                program.linked.destroy(gl);
                return Err(e);
            }
        };

        let mut resources = Self {
            program,
            texcoord_buffer,
            position_buffer,
            vertex_array: None,
        };

        if profile.uses_vertex_array() {
            match gl.create_vertex_array() {
                Ok(vertex_array) => resources.vertex_array = Some(vertex_array),
                Err(message) => {
                    resources.destroy(gl);
                    return Err(RenderError::ResourceCreation {
                        resource: "vertex array".to_string(),
                        message,
                    });
                }
            }
        }

        upload(
            gl,
            resources.texcoord_buffer,
            &TEXTURE_COORDS,
            glow::STATIC_DRAW,
        );
        upload(gl, resources.position_buffer, positions, glow::DYNAMIC_DRAW);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        if let Err(e) = profile.check_error(gl, "buffer_data") {
            resources.destroy(gl);
            return Err(e);
        }

        Ok(resources)
    }

    fn destroy(self, gl: &D) {
        if let Some(vertex_array) = self.vertex_array {
            gl.delete_vertex_array(vertex_array);
        }
        gl.delete_buffer(self.texcoord_buffer);
        gl.delete_buffer(self.position_buffer);
        self.program.linked.destroy(gl);
    }
}

fn new_buffer<D: GlDriver>(gl: &D, resource: &str) -> Result<D::Buffer, RenderError> {
    gl.create_buffer()
        .map_err(|message| RenderError::ResourceCreation {
            resource: resource.to_string(),
            message,
        })
}

fn upload<D: GlDriver>(gl: &D, buffer: D::Buffer, data: &[f32; 8], usage: u32) {
    let bytes: &[u8] = bytemuck::cast_slice(data.as_slice());
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
    gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, usage);
}

/// Uploads one two-component float stream and points `index` at it.
fn bind_stream<D: GlDriver>(gl: &D, buffer: D::Buffer, index: u32, data: &[f32; 8]) {
    upload(gl, buffer, data, glow::DYNAMIC_DRAW);
    gl.vertex_attrib_pointer_f32(index, 2, glow::FLOAT, false, 0, 0);
    gl.enable_vertex_attrib_array(index);
}

/// Converts the viewport to the signed extent `glViewport` takes.
fn gl_extent(viewport: Size) -> Result<(i32, i32), RenderError> {
    match (i32::try_from(viewport.width), i32::try_from(viewport.height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(RenderError::ViewportTooLarge {
            width: viewport.width,
            height: viewport.height,
        }),
    }
}

enum State<D: GlDriver> {
    Uninitialized,
    Ready(GpuResources<D>),
    Disposed,
}

/// Draws a host-owned texture into the default framebuffer, letterboxed to
/// keep its aspect ratio.
///
/// Expected call order: [`new`](Self::new), [`initialize`](Self::initialize),
/// any number of size updates and [`render`](Self::render) calls, then
/// [`dispose`](Self::dispose) exactly once.
pub struct SurfaceRenderer<D: GlDriver> {
    profile: Box<dyn ShaderProfile<D>>,
    state: State<D>,
    geometry: GeometryState,
}

impl<D: GlDriver> SurfaceRenderer<D> {
    /// Creates an uninitialized renderer for the profile `config` names.
    /// No driver calls are made until [`initialize`](Self::initialize).
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            profile: select_profile(config),
            state: State::Uninitialized,
            geometry: GeometryState::new(),
        }
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Uninitialized => Phase::Uninitialized,
            State::Ready(_) => Phase::Ready,
            State::Disposed => Phase::Disposed,
        }
    }

    /// The API revision fixed at construction.
    pub fn revision(&self) -> ApiRevision {
        self.profile.revision()
    }

    /// The recorded sizes and the position stream derived from them.
    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    /// The aspect-corrected quad, once both sizes are known.
    pub fn output_quad(&self) -> Option<&[f32; 8]> {
        self.geometry.output_quad()
    }

    /// Builds the program and allocates the vertex buffers.
    ///
    /// # Errors
    ///
    /// `InvalidPhase` unless the renderer is uninitialized. Otherwise any
    /// failure is wrapped in `Initialization`; in that case nothing stays
    /// allocated and the renderer remains uninitialized.
    pub fn initialize(&mut self, gl: &D) -> Result<(), RenderError> {
        let phase = self.phase();
        if phase != Phase::Uninitialized {
            return Err(RenderError::InvalidPhase {
                operation: "initialize".to_string(),
                phase,
            });
        }

        let resources = GpuResources::create(gl, self.profile.as_ref(), self.geometry.positions())
            .map_err(RenderError::during_init)?;
        self.state = State::Ready(resources);
        log::info!("surface renderer ready ({} profile)", self.revision());
        Ok(())
    }

    /// Records the texture size and recomputes the output quad.
    pub fn set_texture_size(&mut self, width: u32, height: u32) {
        self.geometry.set_texture_size(Size::new(width, height));
    }

    /// Records the viewport size and recomputes the output quad.
    pub fn set_viewport_size(&mut self, width: u32, height: u32) {
        self.geometry.set_viewport_size(Size::new(width, height));
    }

    /// Applies the profile's sampling parameters to the texture the host
    /// has bound to `TEXTURE_2D`.
    pub fn init_texture_params(&self, gl: &D) {
        self.profile.init_texture_params(gl);
    }

    /// Draws `texture` for one frame.
    ///
    /// The texture is borrowed for the call only; the renderer never
    /// creates, uploads to or deletes it.
    ///
    /// # Errors
    ///
    /// * `NotInitialized` outside the ready phase, before any driver call.
    /// * `GeometryUnresolved` until texture and viewport sizes are both
    ///   set and non-empty, before any driver call.
    /// * `ViewportTooLarge` if a viewport dimension exceeds `i32::MAX`,
    ///   before any driver call.
    /// * `GraphicsApi` if a checked step raises a GL error. The frame is
    ///   dropped at that step and driver state is left as is.
    pub fn render(&self, gl: &D, texture: D::Texture) -> Result<(), RenderError> {
        let State::Ready(resources) = &self.state else {
            return Err(RenderError::NotInitialized {
                phase: self.phase(),
            });
        };
        let (Some(positions), Some(viewport)) =
            (self.geometry.output_quad(), self.geometry.viewport_size())
        else {
            return Err(RenderError::GeometryUnresolved);
        };
        let (width, height) = gl_extent(viewport)?;
        let profile = self.profile.as_ref();
        let program = &resources.program;

        gl.bind_default_framebuffer(glow::FRAMEBUFFER);

        gl.use_program(Some(program.linked.program()));
        profile.check_error(gl, "use_program")?;

        gl.viewport(0, 0, width, height);
        profile.check_error(gl, "viewport")?;

        gl.disable(glow::BLEND);

        if let Some(vertex_array) = resources.vertex_array {
            gl.bind_vertex_array(Some(vertex_array));
        }
        bind_stream(
            gl,
            resources.texcoord_buffer,
            program.texcoord,
            &TEXTURE_COORDS,
        );
        bind_stream(gl, resources.position_buffer, program.position, positions);
        profile.check_error(gl, "vertex attribute setup")?;

        gl.active_texture(glow::TEXTURE0);
        profile.check_error(gl, "active_texture")?;
        gl.bind_texture(glow::TEXTURE_2D, Some(texture));
        profile.check_error(gl, "bind_texture")?;
        gl.uniform_1_i32(Some(&program.sampler), 0);

        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(glow::COLOR_BUFFER_BIT);
        gl.draw_arrays(glow::TRIANGLE_STRIP, 0, 4);
        profile.check_error(gl, "draw_arrays")
    }

    /// Releases the program, its stages and the vertex buffers.
    ///
    /// Disposing an uninitialized renderer makes no driver calls. A second
    /// dispose is ignored with a warning.
    pub fn dispose(&mut self, gl: &D) {
        match std::mem::replace(&mut self.state, State::Disposed) {
            State::Ready(resources) => {
                resources.destroy(gl);
                log::info!("surface renderer disposed");
            }
            State::Uninitialized => log::debug!("surface renderer disposed before initialization"),
            State::Disposed => log::warn!("dispose called on an already disposed surface renderer"),
        }
    }
}
