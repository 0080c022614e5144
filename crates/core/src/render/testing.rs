//! Recording [`GlDriver`] double for tests that cannot open a GL context.
//!
//! Handles are plain `u32`s handed out from a counter starting at 1, so 0
//! never names a live object. The double tracks which shaders, programs,
//! buffers and vertex arrays are alive, records every call by name, and
//! can be scripted to fail compilation, linking, allocation, binding
//! lookup, or to raise a GL error after a given call.

use super::driver::GlDriver;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Default)]
struct State {
    next_id: u32,
    shaders: BTreeMap<u32, u32>,
    programs: BTreeMap<u32, Vec<u32>>,
    buffers: BTreeSet<u32>,
    vertex_arrays: BTreeSet<u32>,
    bound_array_buffer: Option<u32>,
    uploads: Vec<(u32, Vec<f32>)>,
    tex_parameters: Vec<(u32, u32, i32)>,
    viewport: Option<(i32, i32, i32, i32)>,
    bound_texture: Option<u32>,
    sampler_unit: Option<i32>,
    calls: Vec<&'static str>,
    pending_error: u32,

    fail_compile: Option<u32>,
    fail_link: bool,
    refuse_shaders: bool,
    refuse_buffers: bool,
    refuse_vertex_arrays: bool,
    missing_bindings: BTreeSet<String>,
    errors_after: HashMap<&'static str, u32>,
}

impl State {
    fn alloc(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    fn record(&mut self, call: &'static str) {
        self.calls.push(call);
        if let Some(code) = self.errors_after.get(call) {
            self.pending_error = *code;
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingDriver {
    state: RefCell<State>,
}

impl RecordingDriver {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Every stage of `shader_type` fails to compile.
    pub(crate) fn failing_compile(self, shader_type: u32) -> Self {
        self.state.borrow_mut().fail_compile = Some(shader_type);
        self
    }

    pub(crate) fn failing_link(self) -> Self {
        self.state.borrow_mut().fail_link = true;
        self
    }

    /// `create_shader` returns an error, as a driver returning handle 0 would.
    pub(crate) fn refusing_shaders(self) -> Self {
        self.state.borrow_mut().refuse_shaders = true;
        self
    }

    pub(crate) fn refusing_buffers(self) -> Self {
        self.state.borrow_mut().refuse_buffers = true;
        self
    }

    pub(crate) fn refusing_vertex_arrays(self) -> Self {
        self.state.borrow_mut().refuse_vertex_arrays = true;
        self
    }

    /// Attribute and uniform lookups for `name` come back empty.
    pub(crate) fn without_binding(self, name: &str) -> Self {
        self.state
            .borrow_mut()
            .missing_bindings
            .insert(name.to_string());
        self
    }

    /// The next `get_error` after any `call` reports `code`.
    pub(crate) fn error_after(self, call: &'static str, code: u32) -> Self {
        self.state.borrow_mut().errors_after.insert(call, code);
        self
    }

    /// Starts with `code` already pending, as if the host left it behind.
    pub(crate) fn with_pending_error(self, code: u32) -> Self {
        self.state.borrow_mut().pending_error = code;
        self
    }

    pub(crate) fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.len()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.state.borrow().programs.len()
    }

    pub(crate) fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.len()
    }

    pub(crate) fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().vertex_arrays.len()
    }

    /// Total live objects of every kind.
    pub(crate) fn live_objects(&self) -> usize {
        self.live_shaders() + self.live_programs() + self.live_buffers() + self.live_vertex_arrays()
    }

    pub(crate) fn attached(&self, program: u32) -> Vec<u32> {
        self.state
            .borrow()
            .programs
            .get(&program)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn count(&self, call: &str) -> usize {
        self.state
            .borrow()
            .calls
            .iter()
            .filter(|c| **c == call)
            .count()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Float data uploaded to `buffer`, most recent last.
    pub(crate) fn uploads_to(&self, buffer: u32) -> Vec<Vec<f32>> {
        self.state
            .borrow()
            .uploads
            .iter()
            .filter(|(b, _)| *b == buffer)
            .map(|(_, data)| data.clone())
            .collect()
    }

    pub(crate) fn tex_parameters(&self) -> Vec<(u32, u32, i32)> {
        self.state.borrow().tex_parameters.clone()
    }

    pub(crate) fn viewport_state(&self) -> Option<(i32, i32, i32, i32)> {
        self.state.borrow().viewport
    }

    pub(crate) fn bound_texture(&self) -> Option<u32> {
        self.state.borrow().bound_texture
    }

    pub(crate) fn sampler_unit(&self) -> Option<i32> {
        self.state.borrow().sampler_unit
    }
}

impl GlDriver for RecordingDriver {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Texture = u32;
    type UniformLocation = u32;

    fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        s.record("create_shader");
        if s.refuse_shaders {
            return Err("out of shader objects".to_string());
        }
        let id = s.alloc();
        s.shaders.insert(id, shader_type);
        Ok(id)
    }

    fn shader_source(&self, _shader: u32, _source: &str) {
        self.state.borrow_mut().record("shader_source");
    }

    fn compile_shader(&self, _shader: u32) {
        self.state.borrow_mut().record("compile_shader");
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        let mut s = self.state.borrow_mut();
        s.record("get_shader_compile_status");
        let kind = s.shaders.get(&shader).copied();
        kind.is_some() && kind != s.fail_compile
    }

    fn get_shader_info_log(&self, _shader: u32) -> String {
        self.state.borrow_mut().record("get_shader_info_log");
        "0:1: syntax error".to_string()
    }

    fn delete_shader(&self, shader: u32) {
        let mut s = self.state.borrow_mut();
        s.record("delete_shader");
        s.shaders.remove(&shader);
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        s.record("create_program");
        let id = s.alloc();
        s.programs.insert(id, Vec::new());
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut s = self.state.borrow_mut();
        s.record("attach_shader");
        if let Some(attached) = s.programs.get_mut(&program) {
            attached.push(shader);
        }
    }

    fn link_program(&self, _program: u32) {
        self.state.borrow_mut().record("link_program");
    }

    fn get_program_link_status(&self, program: u32) -> bool {
        let mut s = self.state.borrow_mut();
        s.record("get_program_link_status");
        s.programs.contains_key(&program) && !s.fail_link
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        self.state.borrow_mut().record("get_program_info_log");
        "varying v_texcoord not written".to_string()
    }

    fn delete_program(&self, program: u32) {
        let mut s = self.state.borrow_mut();
        s.record("delete_program");
        s.programs.remove(&program);
    }

    fn use_program(&self, _program: Option<u32>) {
        self.state.borrow_mut().record("use_program");
    }

    fn get_attrib_location(&self, _program: u32, name: &str) -> Option<u32> {
        let mut s = self.state.borrow_mut();
        s.record("get_attrib_location");
        if s.missing_bindings.contains(name) {
            return None;
        }
        match name {
            "a_position" => Some(0),
            "a_texcoord" => Some(1),
            _ => None,
        }
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<u32> {
        let mut s = self.state.borrow_mut();
        s.record("get_uniform_location");
        if s.missing_bindings.contains(name) {
            return None;
        }
        (name == "tex_sampler").then_some(0)
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        s.record("create_buffer");
        if s.refuse_buffers {
            return Err("out of memory".to_string());
        }
        let id = s.alloc();
        s.buffers.insert(id);
        Ok(id)
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut s = self.state.borrow_mut();
        s.record("delete_buffer");
        s.buffers.remove(&buffer);
    }

    fn bind_buffer(&self, _target: u32, buffer: Option<u32>) {
        let mut s = self.state.borrow_mut();
        s.record("bind_buffer");
        s.bound_array_buffer = buffer;
    }

    fn buffer_data_u8_slice(&self, _target: u32, data: &[u8], _usage: u32) {
        let mut s = self.state.borrow_mut();
        s.record("buffer_data_u8_slice");
        let floats = data
            .chunks_exact(4)
            .map(|b| f32::from_ne_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        if let Some(buffer) = s.bound_array_buffer {
            s.uploads.push((buffer, floats));
        }
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut s = self.state.borrow_mut();
        s.record("create_vertex_array");
        if s.refuse_vertex_arrays {
            return Err("vertex arrays unavailable".to_string());
        }
        let id = s.alloc();
        s.vertex_arrays.insert(id);
        Ok(id)
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        let mut s = self.state.borrow_mut();
        s.record("delete_vertex_array");
        s.vertex_arrays.remove(&vertex_array);
    }

    fn bind_vertex_array(&self, _vertex_array: Option<u32>) {
        self.state.borrow_mut().record("bind_vertex_array");
    }

    fn vertex_attrib_pointer_f32(
        &self,
        _index: u32,
        _size: i32,
        _data_type: u32,
        _normalized: bool,
        _stride: i32,
        _offset: i32,
    ) {
        self.state.borrow_mut().record("vertex_attrib_pointer_f32");
    }

    fn enable_vertex_attrib_array(&self, _index: u32) {
        self.state.borrow_mut().record("enable_vertex_attrib_array");
    }

    fn active_texture(&self, _unit: u32) {
        self.state.borrow_mut().record("active_texture");
    }

    fn bind_texture(&self, _target: u32, texture: Option<u32>) {
        let mut s = self.state.borrow_mut();
        s.record("bind_texture");
        s.bound_texture = texture;
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        let mut s = self.state.borrow_mut();
        s.record("tex_parameter_i32");
        s.tex_parameters.push((target, parameter, value));
    }

    fn uniform_1_i32(&self, _location: Option<&u32>, x: i32) {
        let mut s = self.state.borrow_mut();
        s.record("uniform_1_i32");
        s.sampler_unit = Some(x);
    }

    fn bind_default_framebuffer(&self, _target: u32) {
        self.state.borrow_mut().record("bind_default_framebuffer");
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        let mut s = self.state.borrow_mut();
        s.record("viewport");
        s.viewport = Some((x, y, width, height));
    }

    fn disable(&self, _capability: u32) {
        self.state.borrow_mut().record("disable");
    }

    fn clear_color(&self, _red: f32, _green: f32, _blue: f32, _alpha: f32) {
        self.state.borrow_mut().record("clear_color");
    }

    fn clear(&self, _mask: u32) {
        self.state.borrow_mut().record("clear");
    }

    fn draw_arrays(&self, _mode: u32, _first: i32, _count: i32) {
        self.state.borrow_mut().record("draw_arrays");
    }

    fn get_error(&self) -> u32 {
        let mut s = self.state.borrow_mut();
        s.calls.push("get_error");
        std::mem::take(&mut s.pending_error)
    }

    fn get_parameter_string(&self, parameter: u32) -> String {
        self.state.borrow_mut().record("get_parameter_string");
        match parameter {
            glow::VERSION => "OpenGL ES 3.0 (recording)".to_string(),
            glow::SHADING_LANGUAGE_VERSION => "OpenGL ES GLSL ES 3.00".to_string(),
            glow::VENDOR => "letterbox".to_string(),
            glow::RENDERER => "RecordingDriver".to_string(),
            _ => String::new(),
        }
    }

    fn supported_extensions(&self) -> Vec<String> {
        self.state.borrow_mut().record("supported_extensions");
        vec!["GL_OES_texture_npot".to_string()]
    }
}
