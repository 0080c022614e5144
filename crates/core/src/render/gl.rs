//! [`GlDriver`] for a live `glow::Context`.
//!
//! Each method forwards to the `HasContext` call of the same name. glow
//! marks raw GL entry points `unsafe`; the handles passed through here all
//! come from earlier calls on the same context, which is the contract glow
//! asks callers to uphold.

use super::driver::GlDriver;
use glow::HasContext;

#[allow(unsafe_code)]
impl GlDriver for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Texture = glow::Texture;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String> {
        // SAFETY: shader_type is VERTEX_SHADER or FRAGMENT_SHADER.
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        // SAFETY: shader was created by this context.
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        // SAFETY: shader was created by this context.
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool {
        // SAFETY: shader was created by this context.
        unsafe { HasContext::get_shader_compile_status(self, shader) }
    }

    fn get_shader_info_log(&self, shader: Self::Shader) -> String {
        // SAFETY: shader was created by this context.
        unsafe { HasContext::get_shader_info_log(self, shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        // SAFETY: shader was created by this context and is not used afterward.
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        // SAFETY: no arguments.
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        // SAFETY: both handles were created by this context.
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        // SAFETY: program was created by this context.
        unsafe { HasContext::link_program(self, program) }
    }

    fn get_program_link_status(&self, program: Self::Program) -> bool {
        // SAFETY: program was created by this context.
        unsafe { HasContext::get_program_link_status(self, program) }
    }

    fn get_program_info_log(&self, program: Self::Program) -> String {
        // SAFETY: program was created by this context.
        unsafe { HasContext::get_program_info_log(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        // SAFETY: program was created by this context and is not used afterward.
        unsafe { HasContext::delete_program(self, program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        // SAFETY: program is None or a linked program of this context.
        unsafe { HasContext::use_program(self, program) }
    }

    fn get_attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        // SAFETY: program is linked.
        unsafe { HasContext::get_attrib_location(self, program, name) }
    }

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        // SAFETY: program is linked.
        unsafe { HasContext::get_uniform_location(self, program, name) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        // SAFETY: no arguments.
        unsafe { HasContext::create_buffer(self) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        // SAFETY: buffer was created by this context and is not used afterward.
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        // SAFETY: buffer is None or was created by this context.
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        // SAFETY: data is a live slice; GL copies it before returning.
        unsafe { HasContext::buffer_data_u8_slice(self, target, data, usage) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        // SAFETY: no arguments. Only called on ES 3 contexts.
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        // SAFETY: vertex_array was created by this context.
        unsafe { HasContext::delete_vertex_array(self, vertex_array) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        // SAFETY: vertex_array is None or was created by this context.
        unsafe { HasContext::bind_vertex_array(self, vertex_array) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        // SAFETY: an ARRAY_BUFFER is bound, so offset is a byte offset into it.
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                size,
                data_type,
                normalized,
                stride,
                offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        // SAFETY: index came from get_attrib_location.
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn active_texture(&self, unit: u32) {
        // SAFETY: unit is a TEXTUREn constant.
        unsafe { HasContext::active_texture(self, unit) }
    }

    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>) {
        // SAFETY: texture is owned by the host and alive for this call.
        unsafe { HasContext::bind_texture(self, target, texture) }
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        // SAFETY: plain state setter.
        unsafe { HasContext::tex_parameter_i32(self, target, parameter, value) }
    }

    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32) {
        // SAFETY: location belongs to the program in use.
        unsafe { HasContext::uniform_1_i32(self, location, x) }
    }

    fn bind_default_framebuffer(&self, target: u32) {
        // SAFETY: binding None selects the window-system framebuffer.
        unsafe { HasContext::bind_framebuffer(self, target, None) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        // SAFETY: plain state setter.
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn disable(&self, capability: u32) {
        // SAFETY: plain state setter.
        unsafe { HasContext::disable(self, capability) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        // SAFETY: plain state setter.
        unsafe { HasContext::clear_color(self, red, green, blue, alpha) }
    }

    fn clear(&self, mask: u32) {
        // SAFETY: mask is a combination of *_BUFFER_BIT constants.
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        // SAFETY: enabled attribute arrays hold at least first + count vertices.
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }

    fn get_error(&self) -> u32 {
        // SAFETY: no arguments.
        unsafe { HasContext::get_error(self) }
    }

    fn get_parameter_string(&self, parameter: u32) -> String {
        // SAFETY: parameter is one of the glGetString names.
        unsafe { HasContext::get_parameter_string(self, parameter) }
    }

    fn supported_extensions(&self) -> Vec<String> {
        let mut extensions: Vec<String> = HasContext::supported_extensions(self)
            .iter()
            .cloned()
            .collect();
        extensions.sort();
        extensions
    }
}
