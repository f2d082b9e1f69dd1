//! Indexed triangle mesh buffers.
//!
//! [`Mesh`] is the renderer-agnostic mesh type passed through the remap
//! pipeline. Vertex data is stored in structure-of-arrays layout with
//! zero-copy byte accessors for GPU upload.

use crate::error::{MapperError, Result};
use crate::types::BoundingBox;
use glam::Vec3;
use std::mem;

/// An indexed triangle mesh.
///
/// The normal and UV buffers are either empty or position-length; the
/// pipeline populates both on its output mesh.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (unit length). Recomputed from topology, never trusted
    /// from the source asset.
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates into the cover atlas.
    pub uvs: Vec<[f32; 2]>,
    /// Triangle indices (three per triangle).
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh from raw position and index buffers.
    pub fn from_buffers(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals: Vec::new(),
            uvs: Vec::new(),
            indices,
        }
    }

    /// Returns `true` if this mesh contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounding box of the position buffer, `None` when empty.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.positions.iter().copied())
    }

    /// Check that every triangle index is inside the position buffer.
    pub fn validate(&self) -> Result<()> {
        let count = self.positions.len() as u32;
        for (triangle, tri) in self.indices.chunks_exact(3).enumerate() {
            for &index in tri {
                if index >= count {
                    return Err(MapperError::InvalidVertexIndex { triangle, index });
                }
            }
        }
        Ok(())
    }

    /// Recompute area-weighted vertex normals from the index topology.
    ///
    /// Each triangle's cross product (magnitude proportional to area) is
    /// accumulated at its three vertices and the sums normalized. Degenerate
    /// triangles contribute nothing; isolated vertices keep a zero normal.
    pub fn compute_vertex_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.positions.len(), [0.0, 0.0, 0.0]);

        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            let pa = Vec3::from(self.positions[a]);
            let pb = Vec3::from(self.positions[b]);
            let pc = Vec3::from(self.positions[c]);

            let face_normal = (pb - pa).cross(pc - pa);
            for &v in &[a, b, c] {
                let n = Vec3::from(self.normals[v]) + face_normal;
                self.normals[v] = n.to_array();
            }
        }

        for normal in &mut self.normals {
            let n = Vec3::from(*normal);
            let len = n.length();
            if len > 1e-10 {
                *normal = (n / len).to_array();
            }
        }
    }

    /// Raw bytes of the positions array. Zero-allocation view.
    pub fn positions_bytes(&self) -> &[u8] {
        cast_slice(&self.positions)
    }

    /// Raw bytes of the normals array. Zero-allocation view.
    pub fn normals_bytes(&self) -> &[u8] {
        cast_slice(&self.normals)
    }

    /// Raw bytes of the UVs array. Zero-allocation view.
    pub fn uvs_bytes(&self) -> &[u8] {
        cast_slice(&self.uvs)
    }

    /// Raw bytes of the indices array. Zero-allocation view.
    pub fn indices_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }
}

/// Cast a slice of `T` to a byte slice without allocation.
fn cast_slice<T: Copy>(slice: &[T]) -> &[u8] {
    let ptr = slice.as_ptr() as *const u8;
    let len = slice.len() * mem::size_of::<T>();
    // SAFETY: [f32; N], [u32] are all Pod-like types with no padding.
    unsafe { std::slice::from_raw_parts(ptr, len) }
}
