//! # Book UV Mapper
//!
//! A Rust library for re-UV-mapping 3D book meshes onto a combined
//! front/back cover atlas.
//!
//! ## Overview
//!
//! Externally authored book models usually arrive with no usable UV layout.
//! This library classifies each vertex as cover or edge from its position
//! and recomputed normal, splits the topology along the cover/edge seam so
//! no triangle straddles the boundary, and projects cover vertices into a
//! two-panel atlas: front cover on the left half, back cover on the right.
//! Edge/spine vertices get an off-texture sentinel and render from flat
//! material parameters, which is what keeps the spine free of stretched
//! image data.
//!
//! ## Quick Start
//!
//! ```
//! use book_uv_mapper::{Mesh, UvMapper};
//!
//! // A mesh resolved from any loader: positions + triangle indices.
//! let mesh = Mesh::from_buffers(
//!     vec![
//!         [0.0, 0.0, 1.0],
//!         [1.0, 0.0, 1.0],
//!         [1.0, 1.0, 1.0],
//!         [0.0, 1.0, 1.0],
//!     ],
//!     vec![0, 1, 2, 0, 2, 3],
//! );
//!
//! let mapper = UvMapper::new();
//! let output = mapper.remap(&mesh).unwrap();
//! assert_eq!(output.mesh.uvs.len(), output.mesh.vertex_count());
//! ```
//!
//! ## Atlas Binding
//!
//! The companion [`atlas`] module composites the two cover images into one
//! `2W x H` canvas, and [`material`] carries the binding handle the external
//! renderer consumes. Bind the atlas with edge-clamped wrapping; the
//! projector relies on clamping to keep the `u = 0.5` seam and the edge
//! sentinel from sampling cover texels.

pub mod atlas;
pub mod error;
pub mod geometry;
pub mod material;
pub mod remap;
pub mod scene;
pub mod texture;
pub mod types;

// Re-export main types for convenience
pub use atlas::{AtlasRegion, CoverAtlas};
pub use error::{MapperError, Result};
pub use geometry::Mesh;
pub use material::{MaterialBinding, MaterialProps, WrapMode};
pub use remap::{CoverThresholds, MapperConfig, RemapOutput, UvMapper, EDGE_UV};
pub use scene::{BookObject, SceneNode};
pub use texture::{load_texture_from_bytes, PreloadCache, TextureData};
pub use types::{BoundingBox, CoverSide, RegionTag};

#[cfg(feature = "wasm")]
pub mod wasm;
