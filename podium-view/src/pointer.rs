//! Pointer-driven model rotation

use podium_core::ModelGroup;

/// Radians of rotation per pixel of pointer travel
pub const ROTATE_GAIN: f32 = 0.01;

/// Drag state machine: Idle or Dragging
///
/// Pointer-down is scoped to the render surface; move and up are global so
/// a drag that leaves the surface keeps tracking until release. Transitions
/// happen whether or not a model is loaded; only the rotation application
/// needs one.
#[derive(Debug, Default)]
pub struct PointerTracker {
    drag: Option<(f64, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed over the render surface
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.drag = Some((x, y));
    }

    /// Pointer moved anywhere; applies the rotation delta while dragging
    pub fn pointer_move(&mut self, x: f64, y: f64, model: Option<&mut ModelGroup>) {
        if let Some((last_x, last_y)) = self.drag {
            let dx = (x - last_x) as f32;
            let dy = (y - last_y) as f32;
            if let Some(model) = model {
                model.rotation_y += dx * ROTATE_GAIN;
                model.rotation_x += dy * ROTATE_GAIN;
            }
            self.drag = Some((x, y));
        }
    }

    /// Pointer released anywhere, over the surface or not
    pub fn pointer_up(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use podium_core::{TriangleMesh, Viewport};

    fn model() -> ModelGroup {
        let mesh = TriangleMesh::from_vertices_and_faces(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        ModelGroup::from_mesh(mesh, Viewport::default())
    }

    #[test]
    fn test_drag_rotation_accumulates_linearly() {
        let mut tracker = PointerTracker::new();
        let mut model = model();

        tracker.pointer_down(0.0, 0.0);
        tracker.pointer_move(10.0, 4.0, Some(&mut model));
        tracker.pointer_move(30.0, 10.0, Some(&mut model));
        tracker.pointer_up();

        // Sum of deltas times the gain, independent of the path split
        assert_relative_eq!(model.rotation_y, 30.0 * ROTATE_GAIN);
        assert_relative_eq!(model.rotation_x, 10.0 * ROTATE_GAIN);
    }

    #[test]
    fn test_move_without_down_is_ignored() {
        let mut tracker = PointerTracker::new();
        let mut model = model();
        tracker.pointer_move(100.0, 100.0, Some(&mut model));
        assert_relative_eq!(model.rotation_x, 0.0);
        assert_relative_eq!(model.rotation_y, 0.0);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_transitions_without_model_mutate_nothing() {
        let mut tracker = PointerTracker::new();
        tracker.pointer_down(5.0, 5.0);
        tracker.pointer_move(25.0, 25.0, None);
        assert!(tracker.is_dragging());
        tracker.pointer_up();
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_release_stops_accumulation() {
        let mut tracker = PointerTracker::new();
        let mut model = model();
        tracker.pointer_down(0.0, 0.0);
        tracker.pointer_move(10.0, 0.0, Some(&mut model));
        tracker.pointer_up();
        tracker.pointer_move(50.0, 50.0, Some(&mut model));
        assert_relative_eq!(model.rotation_y, 10.0 * ROTATE_GAIN);
        assert_relative_eq!(model.rotation_x, 0.0);
    }
}
