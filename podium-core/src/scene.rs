//! Scene graph: lights plus at most one model group

use crate::ModelGroup;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Scene background color (linear RGB)
pub const BACKGROUND_COLOR: [f32; 3] = [0.8, 0.8, 0.8];

/// Ambient light with a fixed intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 0.5,
        }
    }
}

/// Directional light with a fixed position and intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Point3<f32>,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            position: Point3::new(5.0, 5.0, 5.0),
        }
    }
}

/// The mutable scene graph rendered every frame
///
/// Holds the two fixed lights and zero-or-one model group. At most one model
/// group is ever present: installing a new one replaces the old one.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    model: Option<ModelGroup>,
}

impl SceneGraph {
    /// Create a scene with lights only
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded model, replacing any previous one
    ///
    /// Returns the replaced model so the caller can release its resources.
    pub fn install_model(&mut self, model: ModelGroup) -> Option<ModelGroup> {
        self.model.replace(model)
    }

    /// Remove the model from the scene
    pub fn remove_model(&mut self) -> Option<ModelGroup> {
        self.model.take()
    }

    pub fn model(&self) -> Option<&ModelGroup> {
        self.model.as_ref()
    }

    pub fn model_mut(&mut self) -> Option<&mut ModelGroup> {
        self.model.as_mut()
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TriangleMesh, Viewport};
    use nalgebra::Point3;

    fn model(tag: f32) -> ModelGroup {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3::new(tag, 0.0, 0.0),
                Point3::new(0.0, tag, 0.0),
                Point3::new(0.0, 0.0, tag),
            ],
            vec![[0, 1, 2]],
        );
        ModelGroup::from_mesh(mesh, Viewport::default())
    }

    #[test]
    fn test_at_most_one_model() {
        let mut scene = SceneGraph::new();
        assert!(!scene.has_model());

        assert!(scene.install_model(model(1.0)).is_none());
        assert!(scene.has_model());

        // Installing again evicts the first model instead of stacking
        let evicted = scene.install_model(model(2.0)).unwrap();
        assert_eq!(evicted.mesh.vertices[0], Point3::new(1.0, 0.0, 0.0));
        assert_eq!(
            scene.model().unwrap().mesh.vertices[0],
            Point3::new(2.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_remove_model() {
        let mut scene = SceneGraph::new();
        scene.install_model(model(1.0));
        assert!(scene.remove_model().is_some());
        assert!(!scene.has_model());
        assert!(scene.remove_model().is_none());
    }
}
