//! Shader Source
//!
//! WGSL source for the three pipelines: the fogged scene, the textured
//! backdrop, and the screen-space UI. All of it is inline so the binary
//! has no shader files to locate at runtime.

/// Scene shader: Lambert-lit geometry fading into linear fog.
pub const SCENE_SHADER: &str = r#"
struct SceneUniforms {
    view_proj: mat4x4<f32>,
    camera_pos: vec3<f32>,
    time: f32,
    sun_dir: vec3<f32>,
    ambient: f32,
    fog_color: vec3<f32>,
    fog_start: f32,
    fog_end: f32,
    _pad0: f32,
    _pad1: f32,
    _pad2: f32,
}

@group(0) @binding(0) var<uniform> uniforms: SceneUniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec4<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(in.position, 1.0);
    out.world_pos = in.position;
    out.normal = in.normal;
    out.color = in.color;
    return out;
}

// Diffuse color of the single directional light.
const SUN_DIFFUSE: vec3<f32> = vec3<f32>(0.5, 0.2, 0.2);

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let normal = normalize(in.normal);
    let sun_dir = normalize(uniforms.sun_dir);

    // Lambert term from the one light, on top of a flat ambient floor.
    let n_dot_l = max(dot(normal, sun_dir), 0.0);
    let lit = in.color.rgb * (vec3<f32>(uniforms.ambient) + SUN_DIFFUSE * n_dot_l);

    // Linear fog over eye distance: fully clear at fog_start, fully
    // swallowed at fog_end.
    let dist = length(in.world_pos - uniforms.camera_pos);
    let visibility = clamp(
        (uniforms.fog_end - dist) / (uniforms.fog_end - uniforms.fog_start),
        0.0,
        1.0,
    );
    let color = mix(uniforms.fog_color, lit, visibility);

    return vec4<f32>(color, in.color.a);
}
"#;

/// Backdrop shader: textured quad tinted by the level mood, no fog.
pub const BACKGROUND_SHADER: &str = r#"
struct BackgroundUniforms {
    view_proj: mat4x4<f32>,
    tint: vec4<f32>,
}

@group(0) @binding(0) var<uniform> uniforms: BackgroundUniforms;
@group(0) @binding(1) var backdrop_tex: texture_2d<f32>;
@group(0) @binding(2) var backdrop_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) uv: vec2<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(backdrop_tex, backdrop_sampler, in.uv);
    return vec4<f32>(texel.rgb * uniforms.tint.rgb, 1.0);
}
"#;

/// UI shader: vertices arrive in NDC, colors pass straight through.
///
/// Shares the 40-byte scene vertex layout; the normal attribute at
/// location 1 is present in the buffer but unused here.
pub const UI_SHADER: &str = r#"
struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(2) color: vec4<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(in.position, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;
