//! # Podium GPU
//!
//! wgpu-backed rendering for the podium showcase scene: a single lit model
//! over a fixed ambient/directional light rig. Geometry is uploaded once at
//! model install; everything animated goes through uniforms.

pub mod device;
pub mod renderer;
pub mod shaders;

pub use device::GpuContext;
pub use renderer::{CameraUniform, LightUniform, ModelUniform, SceneRenderer, SceneVertex};
