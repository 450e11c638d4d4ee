//! Core data structures for podium
//!
//! This crate provides the scene-side types shared by the asset, GPU, and
//! controller crates: the scene graph, the loaded model group, the camera,
//! and viewport state.

pub mod camera;
pub mod error;
pub mod mesh;
pub mod model;
pub mod scene;
pub mod viewport;

pub use camera::*;
pub use error::*;
pub use mesh::*;
pub use model::*;
pub use scene::*;
pub use viewport::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Vector3};

/// Common result type for podium operations
pub type Result<T> = std::result::Result<T, Error>;
