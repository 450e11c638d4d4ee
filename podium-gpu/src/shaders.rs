//! Shader source for the showcase scene

/// Lit mesh shader: fixed ambient term plus one Lambert directional term
pub const SCENE_SHADER: &str = r#"
struct CameraUniform {
    view_proj: mat4x4<f32>,
    view_pos: vec3<f32>,
    _pad: f32,
}

struct ModelUniform {
    model: mat4x4<f32>,
}

struct LightUniform {
    ambient_color: vec3<f32>,
    ambient_intensity: f32,
    light_position: vec3<f32>,
    light_intensity: f32,
    light_color: vec3<f32>,
    _pad: f32,
}

@group(0) @binding(0) var<uniform> camera: CameraUniform;
@group(0) @binding(1) var<uniform> model: ModelUniform;
@group(0) @binding(2) var<uniform> light: LightUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec3<f32>,
}

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec3<f32>,
}

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let world = model.model * vec4<f32>(in.position, 1.0);
    out.clip_position = camera.view_proj * world;
    out.world_position = world.xyz;
    out.world_normal = normalize((model.model * vec4<f32>(in.normal, 0.0)).xyz);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let ambient = light.ambient_color * light.ambient_intensity;
    let light_dir = normalize(light.light_position - in.world_position);
    let lambert = max(dot(normalize(in.world_normal), light_dir), 0.0);
    let diffuse = light.light_color * light.light_intensity * lambert;
    return vec4<f32>(in.color * (ambient + diffuse), 1.0);
}
"#;
