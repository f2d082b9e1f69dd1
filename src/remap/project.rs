//! Planar UV projection into the two-panel cover atlas.
//!
//! Front-cover vertices map into the left half of the atlas, back-cover
//! vertices into the right half, via a planar X/Y projection normalized by
//! the mesh bounding box. Edge vertices get an off-texture sentinel and are
//! rendered from flat material parameters instead.

use crate::geometry::Mesh;
use crate::remap::classify::CoverThresholds;
use crate::types::{BoundingBox, CoverSide};

/// Sentinel UV for vertices outside both covers. Deliberately far outside
/// `[0, 1]` so edge-clamped sampling never lands on cover texels.
pub const EDGE_UV: [f32; 2] = [-10.0, -10.0];

/// Populate the UV buffer of a seam-split mesh.
///
/// Vertex normals are recomputed on the split topology first; duplication
/// changes the averaging neighborhoods at the seam, so pre-split normals
/// must never be reused. Each vertex is then re-evaluated as front or back
/// on its own, independent of the coarse tag that drove the split.
///
/// `bounds` is the box of the original vertex set; the split mesh has the
/// same extents since positions are only ever copied.
pub fn project(mesh: &mut Mesh, bounds: &BoundingBox, thresholds: &CoverThresholds) {
    mesh.compute_vertex_normals();

    mesh.uvs.clear();
    mesh.uvs.reserve(mesh.positions.len());
    for i in 0..mesh.positions.len() {
        let position = mesh.positions[i];
        let side = thresholds.cover_side(position, mesh.normals[i], bounds);
        mesh.uvs.push(atlas_uv(side, position, bounds));
    }
}

/// Map a classified vertex into the combined atlas.
///
/// Degenerate bounding-box axes normalize to `0` (see
/// [`BoundingBox::normalized`]), so a mesh collapsed onto a plane still
/// produces finite UVs.
pub fn atlas_uv(side: Option<CoverSide>, position: [f32; 3], bounds: &BoundingBox) -> [f32; 2] {
    let Some(side) = side else {
        return EDGE_UV;
    };

    let u = bounds.normalized(0, position[0]);
    let v = bounds.normalized(1, position[1]);

    match side {
        CoverSide::Front => [0.5 * u, v],
        CoverSide::Back => [0.5 + 0.5 * u, v],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_bounds() -> BoundingBox {
        BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    #[test]
    fn test_front_maps_to_left_half() {
        let bounds = unit_bounds();
        let [u, v] = atlas_uv(Some(CoverSide::Front), [1.0, 0.5, 1.0], &bounds);
        assert_relative_eq!(u, 0.5);
        assert_relative_eq!(v, 0.5);

        let [u, _] = atlas_uv(Some(CoverSide::Front), [0.0, 0.0, 1.0], &bounds);
        assert_relative_eq!(u, 0.0);
    }

    #[test]
    fn test_back_maps_to_right_half() {
        let bounds = unit_bounds();
        let [u, v] = atlas_uv(Some(CoverSide::Back), [0.0, 1.0, 0.0], &bounds);
        assert_relative_eq!(u, 0.5);
        assert_relative_eq!(v, 1.0);

        let [u, _] = atlas_uv(Some(CoverSide::Back), [1.0, 0.0, 0.0], &bounds);
        assert_relative_eq!(u, 1.0);
    }

    #[test]
    fn test_edge_gets_sentinel() {
        let uv = atlas_uv(None, [0.5, 0.5, 0.5], &unit_bounds());
        assert_eq!(uv, EDGE_UV);
    }

    #[test]
    fn test_degenerate_width_yields_zero_not_nan() {
        // Mesh collapsed onto the x = 0 plane: zero width.
        let bounds = BoundingBox::new([0.0, 0.0, 0.0], [0.0, 1.0, 1.0]);

        let [u, v] = atlas_uv(Some(CoverSide::Front), [0.0, 0.5, 1.0], &bounds);
        assert_eq!(u, 0.0);
        assert!(v.is_finite());

        let [u, _] = atlas_uv(Some(CoverSide::Back), [0.0, 0.5, 0.0], &bounds);
        assert_eq!(u, 0.5);
    }

    #[test]
    fn test_project_two_facing_quads() {
        // A front quad at z = 1 facing +Z and a back quad at z = 0 facing -Z.
        // No shared vertices, so this exercises projection in isolation.
        let mut mesh = Mesh::from_buffers(
            vec![
                [0.0, 0.0, 1.0],
                [1.0, 0.0, 1.0],
                [1.0, 1.0, 1.0],
                [0.0, 1.0, 1.0],
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![0, 1, 2, 0, 2, 3, 4, 6, 5, 4, 7, 6],
        );
        let bounds = mesh.bounds().unwrap();

        project(&mut mesh, &bounds, &CoverThresholds::default());

        assert_eq!(mesh.uvs.len(), 8);
        for (i, &[u, v]) in mesh.uvs.iter().enumerate() {
            if i < 4 {
                assert!((0.0..=0.5).contains(&u), "front u out of range: {u}");
            } else {
                assert!((0.5..=1.0).contains(&u), "back u out of range: {u}");
            }
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
