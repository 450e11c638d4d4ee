//! Mesh data structures and bounds

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and faces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3<f32>>,
    pub faces: Vec<[usize; 3]>,
    pub normals: Option<Vec<Vector3<f32>>>,
    pub colors: Option<Vec<[u8; 3]>>,
}

/// Axis-aligned bounding box of a mesh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    /// Center of the box
    pub fn center(&self) -> Point3<f32> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Diameter of the bounding sphere enclosing the box
    pub fn diameter(&self) -> f32 {
        (self.max - self.min).norm()
    }
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: None,
            colors: None,
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3<f32>>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            normals: None,
            colors: None,
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Set vertex normals
    pub fn set_normals(&mut self, normals: Vec<Vector3<f32>>) {
        if normals.len() == self.vertices.len() {
            self.normals = Some(normals);
        }
    }

    /// Axis-aligned bounding box over all vertices
    ///
    /// Returns `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<Aabb> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        Some(Aabb { min, max })
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
