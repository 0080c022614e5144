//! The graphics-driver boundary.
//!
//! `GlDriver` is the narrow slice of OpenGL ES the renderer calls into. Its
//! methods mirror `glow::HasContext` one-to-one so the production impl in
//! [`gl`](super::gl) is a thin forwarder, and a recording double can stand
//! in for a live context in tests.
//!
//! Both API revisions go through the same trait: ES 2 and ES 3 expose these
//! entry points with identical semantics. What differs between them lives
//! in [`profile`](super::profile).
//!
//! Like glow, every method takes `&self` and is synchronous: each call
//! returns before the next is issued. Implementations are only valid on
//! the thread that owns the GL context.

use std::fmt::Debug;

pub trait GlDriver {
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Texture: Copy + Debug;
    type UniformLocation: Clone + Debug;

    // Stages
    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    // Programs
    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn delete_program(&self, program: Self::Program);
    fn use_program(&self, program: Option<Self::Program>);
    fn get_attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;

    // Vertex data
    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);

    // Textures
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32);

    // Output and draw
    fn bind_default_framebuffer(&self, target: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn disable(&self, capability: u32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);

    // Queries
    fn get_error(&self) -> u32;
    fn get_parameter_string(&self, parameter: u32) -> String;
    fn supported_extensions(&self) -> Vec<String>;
}
