//! Error types for cubemarch.

use glam::UVec3;
use thiserror::Error;

/// The main error type for cubemarch operations.
#[derive(Error, Debug)]
pub enum CubeMarchError {
    /// A sample buffer does not match the declared grid dimensions.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Grid dimensions whose node count overflows `usize` or cannot be allocated.
    #[error("grid dimensions {dims} are too large")]
    GridTooLarge { dims: UVec3 },

    /// A mesh needs more vertices than a `u32` index buffer can address.
    #[error("mesh needs {count} vertices, more than u32 indices can address")]
    TooManyVertices { count: usize },

    /// A checked grid lookup fell outside the grid.
    #[error("grid index ({x}, {y}, {z}) out of bounds for dimensions {dims}")]
    IndexOutOfBounds { x: u32, y: u32, z: u32, dims: UVec3 },

    /// The triangulation table violates one of its structural invariants.
    #[error("malformed triangulation table at case {code}: {reason}")]
    MalformedTable { code: u8, reason: String },

    /// The extraction pass was aborted through a cancel token.
    #[error("extraction cancelled")]
    Cancelled,

    /// Options that cannot drive an extraction pass.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for cubemarch operations.
pub type Result<T> = std::result::Result<T, CubeMarchError>;
