//! Error types for asset loading

use thiserror::Error;

/// Errors that can occur while fetching and decoding a model asset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Asset not found: {path}")]
    NotFound { path: String },

    #[error("Decode error: {message}")]
    Decode { message: String },

    #[error("Unsupported asset format: {format}")]
    UnsupportedFormat { format: String },

    #[error("Asset contains no renderable geometry")]
    EmptyAsset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LoadError> for podium_core::Error {
    fn from(e: LoadError) -> Self {
        podium_core::Error::Load(e.to_string())
    }
}

impl From<gltf::Error> for LoadError {
    fn from(e: gltf::Error) -> Self {
        match e {
            gltf::Error::Io(io) => LoadError::Io(io),
            other => LoadError::Decode {
                message: other.to_string(),
            },
        }
    }
}
