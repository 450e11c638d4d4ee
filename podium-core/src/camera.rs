//! Perspective camera for the showcase scene

use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

/// Camera distance as a multiple of the model's bounding-sphere diameter
pub const FRAMING_FACTOR: f32 = 2.0;
/// Camera distance used before any model bounds are known
pub const DEFAULT_DISTANCE: f32 = 5.0;

/// A perspective camera looking at the scene origin
///
/// Field of view and clip planes are fixed; the aspect ratio follows the
/// viewport and the distance is derived from the loaded model's bounds.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(
        position: Point3<f32>,
        target: Point3<f32>,
        up: Vector3<f32>,
        fov: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f32> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Update the aspect ratio after a viewport resize
    ///
    /// Pure recomputation: calling this twice with the same value is
    /// equivalent to calling it once.
    pub fn set_aspect(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Place the camera to frame a model of the given bounding diameter
    ///
    /// Position moves to (0, 0, diameter * FRAMING_FACTOR), looking at the
    /// origin.
    pub fn frame(&mut self, diameter: f32) {
        self.position = Point3::new(0.0, 0.0, diameter * FRAMING_FACTOR);
        self.target = Point3::origin();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3::new(0.0, 0.0, DEFAULT_DISTANCE),
            Point3::origin(),
            Vector3::new(0.0, 1.0, 0.0),
            75.0f32.to_radians(),
            16.0 / 9.0,
            0.1,
            1000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_set_aspect_is_idempotent() {
        let mut camera = Camera::default();
        camera.set_aspect(2.0);
        let once = camera.projection_matrix();
        camera.set_aspect(2.0);
        let twice = camera.projection_matrix();
        assert_eq!(once, twice);
        assert_relative_eq!(camera.aspect_ratio, 2.0);
    }

    #[test]
    fn test_frame_sets_distance_from_diameter() {
        let mut camera = Camera::default();
        camera.frame(3.0);
        assert_relative_eq!(camera.position.z, 3.0 * FRAMING_FACTOR);
        assert_relative_eq!(camera.position.x, 0.0);
        assert_relative_eq!(camera.position.y, 0.0);
        assert_eq!(camera.target, Point3::origin());
        // Framing factor stays inside the range the scene was tuned for
        assert!((1.7..=2.3).contains(&FRAMING_FACTOR));
    }

    #[test]
    fn test_default_distance_before_load() {
        let camera = Camera::default();
        assert_relative_eq!(camera.position.z, DEFAULT_DISTANCE);
    }
}
