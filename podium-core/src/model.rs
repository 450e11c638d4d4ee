//! The loaded model group

use crate::{TriangleMesh, Viewport};
use nalgebra::{Matrix4, Vector3};

/// Scale a freshly installed model starts at before popping in
pub const POP_START_SCALE: f32 = 0.01;

/// The one model group owned by the scene graph
///
/// Wraps the loaded mesh together with its placement: a recentering offset
/// moving the bounding-box center to the origin, a uniform scale animated by
/// the visibility animator, and a rotation accumulated from pointer drags.
#[derive(Debug, Clone)]
pub struct ModelGroup {
    pub mesh: TriangleMesh,
    /// Translation applied before rotation/scale, recentering to origin
    pub offset: Vector3<f32>,
    /// Uniform scale, animated from `POP_START_SCALE` toward `target_scale`
    pub scale: f32,
    /// Scale chosen by viewport width at load-completion time
    pub target_scale: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    /// Bounding-sphere diameter, used to frame the camera
    pub diameter: f32,
}

impl ModelGroup {
    /// Build a model group from a decoded mesh
    ///
    /// Recenters the mesh's bounding-box center to the origin and picks the
    /// responsive target scale from the viewport at this moment. The model
    /// starts at the near-zero pop-in scale.
    pub fn from_mesh(mesh: TriangleMesh, viewport: Viewport) -> Self {
        let (offset, diameter) = match mesh.bounding_box() {
            Some(aabb) => (-aabb.center().coords, aabb.diameter()),
            None => (Vector3::zeros(), 0.0),
        };
        Self {
            mesh,
            offset,
            scale: POP_START_SCALE,
            target_scale: viewport.responsive_scale(),
            rotation_x: 0.0,
            rotation_y: 0.0,
            diameter,
        }
    }

    /// Model matrix: rotation * scale * recentering translation
    pub fn model_matrix(&self) -> Matrix4<f32> {
        let rotation = Matrix4::from_euler_angles(self.rotation_x, self.rotation_y, 0.0);
        let scale = Matrix4::new_scaling(self.scale);
        let recenter = Matrix4::new_translation(&self.offset);
        rotation * scale * recenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriangleMesh;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn off_center_mesh() -> TriangleMesh {
        TriangleMesh::from_vertices_and_faces(
            vec![
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(3.0, 1.0, 1.0),
                Point3::new(3.0, 3.0, 1.0),
            ],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_from_mesh_recenters_and_measures() {
        let model = ModelGroup::from_mesh(off_center_mesh(), Viewport::new(1440, 900));
        assert_relative_eq!(model.offset, -Vector3::new(2.0, 2.0, 1.0));
        assert_relative_eq!(model.diameter, (4.0f32 + 4.0).sqrt());
        assert_relative_eq!(model.scale, POP_START_SCALE);
        assert_relative_eq!(model.target_scale, 1.4);
    }

    #[test]
    fn test_model_matrix_recenters_before_scaling() {
        let mut model = ModelGroup::from_mesh(off_center_mesh(), Viewport::new(640, 480));
        model.scale = 2.0;
        // Bounding-box center must land at the origin regardless of scale
        let center = Point3::new(2.0, 2.0, 1.0);
        let mapped = model.model_matrix().transform_point(&center);
        assert_relative_eq!(mapped, Point3::origin(), epsilon = 1e-6);
    }
}
