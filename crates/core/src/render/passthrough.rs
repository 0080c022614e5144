//! Built-in pass-through shaders, one pair per GLSL dialect.
//!
//! The vertex stage forwards clip-space positions and texture coordinates
//! untouched; the fragment stage samples a single 2D texture. Both pairs
//! use the same attribute and uniform names so the renderer resolves them
//! identically on either profile.

/// Vertex attribute carrying clip-space corner positions.
pub const POSITION_ATTRIBUTE: &str = "a_position";

/// Vertex attribute carrying texture coordinates.
pub const TEXCOORD_ATTRIBUTE: &str = "a_texcoord";

/// Sampler uniform bound to texture unit 0.
pub const SAMPLER_UNIFORM: &str = "tex_sampler";

/// A vertex and fragment source pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

/// GLSL ES 1.00 sources for OpenGL ES 2.0.
pub const LEGACY_SOURCES: ShaderSources = ShaderSources {
    vertex: r#"attribute vec4 a_position;
attribute vec2 a_texcoord;
varying vec2 v_texcoord;
void main() {
    gl_Position = a_position;
    v_texcoord = a_texcoord;
}
"#,
    fragment: r#"precision mediump float;
uniform sampler2D tex_sampler;
varying vec2 v_texcoord;
void main() {
    gl_FragColor = texture2D(tex_sampler, v_texcoord);
}
"#,
};

/// GLSL ES 3.00 sources for OpenGL ES 3.0.
pub const CURRENT_SOURCES: ShaderSources = ShaderSources {
    vertex: r#"#version 300 es
in vec4 a_position;
in vec2 a_texcoord;
out vec2 v_texcoord;
void main() {
    gl_Position = a_position;
    v_texcoord = a_texcoord;
}
"#,
    fragment: r#"#version 300 es
precision mediump float;
uniform sampler2D tex_sampler;
in vec2 v_texcoord;
out vec4 frag_color;
void main() {
    frag_color = texture(tex_sampler, v_texcoord);
}
"#,
};
