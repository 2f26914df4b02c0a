//! Error types for light setup, upload and persistence.

use thiserror::Error;

/// Error type for lighting operations.
#[derive(Error, Debug)]
pub enum LightError {
    /// A uniform upload was requested with an empty name prefix.
    #[error("Uniform prefix must not be empty")]
    EmptyUniformPrefix,

    /// The uniform sink refused a value.
    #[error("Failed to set uniform '{name}': {message}")]
    Sink {
        /// Full uniform name, e.g. `light.position`.
        name: String,
        /// Sink-provided reason.
        message: String,
    },

    /// The light collection is full.
    #[error("Spot light capacity of {capacity} exceeded")]
    CapacityExceeded {
        /// Maximum number of lights the collection holds.
        capacity: usize,
    },

    /// A light index does not exist.
    #[error("Spot light index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Current number of lights.
        len: usize,
    },

    /// IO error while reading or writing a rig file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// bincode failed to encode or decode the light list.
    #[error("Encoding error: {0}")]
    Encode(#[from] bincode::Error),

    /// The rig file is not valid lz4 data.
    #[error("Decompression error: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),
}

/// Result type alias for lighting operations.
pub type LightResult<T> = Result<T, LightError>;
