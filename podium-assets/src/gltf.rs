//! glTF / GLB format support

use crate::{LoadError, ModelReader};
use nalgebra::{Matrix4, Point3, Vector3};
use podium_core::TriangleMesh;
use std::path::Path;

pub struct GltfReader;

impl ModelReader for GltfReader {
    /// Read a glTF or GLB asset into a single flattened mesh
    ///
    /// Traverses the default scene (falling back to the first scene) and
    /// bakes every node's world transform into the collected vertices, so
    /// the result behaves as one rigid model group.
    fn read_model<P: AsRef<Path>>(path: P) -> Result<TriangleMesh, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LoadError::NotFound {
                path: path.display().to_string(),
            });
        }

        let (document, buffers, _images) = gltf::import(path)?;
        let scene = document
            .default_scene()
            .or_else(|| document.scenes().next())
            .ok_or(LoadError::EmptyAsset)?;

        let mut mesh = TriangleMesh::new();
        let mut normals: Vec<Vector3<f32>> = Vec::new();
        for node in scene.nodes() {
            collect_node(&node, &Matrix4::identity(), &buffers, &mut mesh, &mut normals)?;
        }

        if mesh.is_empty() {
            return Err(LoadError::EmptyAsset);
        }
        if normals.len() == mesh.vertices.len() {
            mesh.set_normals(normals);
        }
        log::debug!(
            "decoded {}: {} vertices, {} faces",
            path.display(),
            mesh.vertex_count(),
            mesh.face_count()
        );
        Ok(mesh)
    }
}

fn collect_node(
    node: &gltf::Node,
    parent: &Matrix4<f32>,
    buffers: &[gltf::buffer::Data],
    mesh: &mut TriangleMesh,
    normals: &mut Vec<Vector3<f32>>,
) -> Result<(), LoadError> {
    let world = parent * Matrix4::from(node.transform().matrix());

    if let Some(gltf_mesh) = node.mesh() {
        for primitive in gltf_mesh.primitives() {
            collect_primitive(&primitive, &world, buffers, mesh, normals)?;
        }
    }
    for child in node.children() {
        collect_node(&child, &world, buffers, mesh, normals)?;
    }
    Ok(())
}

fn collect_primitive(
    primitive: &gltf::Primitive,
    world: &Matrix4<f32>,
    buffers: &[gltf::buffer::Data],
    mesh: &mut TriangleMesh,
    normals: &mut Vec<Vector3<f32>>,
) -> Result<(), LoadError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));

    let positions = reader.read_positions().ok_or(LoadError::Decode {
        message: "primitive has no POSITION attribute".to_string(),
    })?;

    let base = mesh.vertices.len();
    for p in positions {
        let p = world.transform_point(&Point3::new(p[0], p[1], p[2]));
        mesh.vertices.push(p);
    }

    if let Some(ns) = reader.read_normals() {
        // Rotation-only transform for normals; assets are expected to carry
        // at most uniform scale, so the inverse transpose is skipped.
        for n in ns {
            let n = world.transform_vector(&Vector3::new(n[0], n[1], n[2]));
            normals.push(n.try_normalize(1e-12).unwrap_or_else(Vector3::z));
        }
    }

    match reader.read_indices() {
        Some(indices) => {
            let indices: Vec<u32> = indices.into_u32().collect();
            for tri in indices.chunks_exact(3) {
                mesh.faces.push([
                    base + tri[0] as usize,
                    base + tri[1] as usize,
                    base + tri[2] as usize,
                ]);
            }
        }
        None => {
            // Non-indexed geometry: consecutive vertex triples
            let count = mesh.vertices.len() - base;
            for tri in (0..count.saturating_sub(2)).step_by(3) {
                mesh.faces.push([base + tri, base + tri + 1, base + tri + 2]);
            }
        }
    }
    Ok(())
}
