//! Asset loading for podium
//!
//! This crate reads a pre-authored 3D asset (glTF or GLB) into the core
//! mesh type. Loading is a single attempt: failures surface as `LoadError`
//! and the caller decides how to degrade (the scene controller keeps
//! rendering lights only).

pub mod error;
pub mod gltf;

pub use error::*;
pub use self::gltf::GltfReader;

use podium_core::TriangleMesh;
use std::path::Path;

/// Trait for reading model assets from files
pub trait ModelReader {
    fn read_model<P: AsRef<Path>>(path: P) -> Result<TriangleMesh, LoadError>;
}

/// Auto-detect format and read a model asset
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<TriangleMesh, LoadError> {
    let path = path.as_ref();
    match path.extension().and_then(|s| s.to_str()) {
        Some("glb") | Some("gltf") => GltfReader::read_model(path),
        other => Err(LoadError::UnsupportedFormat {
            format: format!("{:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = load_model("model.fbx").unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let err = load_model("/nonexistent/model.glb").unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_load_error_converts_to_core_error() {
        let err: podium_core::Error = LoadError::EmptyAsset.into();
        assert!(matches!(err, podium_core::Error::Load(_)));
        assert!(err.to_string().contains("no renderable geometry"));
    }
}
