//! Error types for the book UV mapper.

use thiserror::Error;

/// Result type alias using MapperError.
pub type Result<T> = std::result::Result<T, MapperError>;

/// Main error type for remapping operations.
#[derive(Error, Debug)]
pub enum MapperError {
    /// The mesh is missing a required vertex attribute.
    #[error("missing vertex attribute: {0}")]
    MissingAttribute(&'static str),

    /// A triangle references a vertex index outside the position buffer.
    #[error("triangle {triangle} references invalid vertex index {index}")]
    InvalidVertexIndex {
        /// The triangle number (index triple).
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
    },

    /// A named node could not be located in the scene graph.
    #[error("scene node not found: {0}")]
    UnresolvableNode(String),

    /// Front and back cover images have different dimensions.
    #[error("cover size mismatch: front is {front_width}x{front_height}, back is {back_width}x{back_height}")]
    CoverSizeMismatch {
        /// Front cover width in pixels.
        front_width: u32,
        /// Front cover height in pixels.
        front_height: u32,
        /// Back cover width in pixels.
        back_width: u32,
        /// Back cover height in pixels.
        back_height: u32,
    },

    /// Failed to build the combined cover atlas.
    #[error("Atlas building error: {0}")]
    AtlasBuild(String),

    /// Failed to read or process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
