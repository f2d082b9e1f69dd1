//! Cover/edge region classification.
//!
//! Covers are the two large near-flat faces perpendicular to Z; everything
//! curved or angled is the edge band. Classification uses freshly computed
//! vertex normals plus a narrow Z band at each end of the bounding box, so
//! a spine vertex close to a cover plane but with a tilted normal stays
//! untextured.

use crate::types::{BoundingBox, CoverSide, RegionTag};

/// Angular and positional thresholds for cover detection.
#[derive(Debug, Clone, Copy)]
pub struct CoverThresholds {
    /// Minimum normal Z component for a front-cover vertex.
    pub front_dot: f32,
    /// Maximum normal Z component for a back-cover vertex (negative).
    pub back_dot: f32,
    /// Maximum |nx| and |ny| for a normal to count as Z-aligned.
    pub max_xy_deviation: f32,
    /// Fraction of the Z range forming the positional band at each cover.
    pub z_band: f32,
}

impl Default for CoverThresholds {
    fn default() -> Self {
        Self {
            front_dot: 0.98,
            back_dot: -0.98,
            max_xy_deviation: 0.1,
            z_band: 0.05,
        }
    }
}

impl CoverThresholds {
    /// Decide whether a vertex lies on the front or back cover.
    ///
    /// Requires the normal to point predominantly along Z in the right
    /// direction and the vertex to sit inside the matching Z band.
    pub fn cover_side(
        &self,
        position: [f32; 3],
        normal: [f32; 3],
        bounds: &BoundingBox,
    ) -> Option<CoverSide> {
        let z_range = bounds.max[2] - bounds.min[2];
        let front_z = bounds.max[2] - z_range * self.z_band;
        let back_z = bounds.min[2] + z_range * self.z_band;

        let [nx, ny, nz] = normal;
        let z = position[2];
        let has_good_normal =
            nx.abs() < self.max_xy_deviation && ny.abs() < self.max_xy_deviation;

        if nz >= self.front_dot && has_good_normal && z >= front_z {
            Some(CoverSide::Front)
        } else if nz <= self.back_dot && has_good_normal && z <= back_z {
            Some(CoverSide::Back)
        } else {
            None
        }
    }
}

/// Tag each vertex as cover or edge.
///
/// `normals` must be freshly computed from the mesh topology (see
/// [`Mesh::compute_vertex_normals`](crate::Mesh::compute_vertex_normals));
/// asset-supplied normals would misalign the region boundary. Pure function
/// of its inputs.
pub fn classify(
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    bounds: &BoundingBox,
    thresholds: &CoverThresholds,
) -> Vec<RegionTag> {
    debug_assert_eq!(positions.len(), normals.len());

    positions
        .iter()
        .zip(normals)
        .map(|(&position, &normal)| {
            if thresholds.cover_side(position, normal, bounds).is_some() {
                RegionTag::Cover
            } else {
                RegionTag::Edge
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> BoundingBox {
        BoundingBox::new([0.0, 0.0, 0.0], [1.0, 1.0, 1.0])
    }

    #[test]
    fn test_front_and_back_detection() {
        let thresholds = CoverThresholds::default();
        let bounds = unit_bounds();

        let front = thresholds.cover_side([0.5, 0.5, 1.0], [0.0, 0.0, 1.0], &bounds);
        assert_eq!(front, Some(CoverSide::Front));

        let back = thresholds.cover_side([0.5, 0.5, 0.0], [0.0, 0.0, -1.0], &bounds);
        assert_eq!(back, Some(CoverSide::Back));
    }

    #[test]
    fn test_tilted_normal_is_edge() {
        let thresholds = CoverThresholds::default();
        let bounds = unit_bounds();

        // Right height, wrong direction: a curved spine vertex near the top.
        let side = thresholds.cover_side([0.5, 0.5, 1.0], [0.3, 0.0, 0.95], &bounds);
        assert_eq!(side, None);
    }

    #[test]
    fn test_good_normal_outside_band_is_edge() {
        let thresholds = CoverThresholds::default();
        let bounds = unit_bounds();

        // A +Z normal halfway down the book (e.g. an interior page surface)
        // must not be mapped as a cover.
        let side = thresholds.cover_side([0.5, 0.5, 0.5], [0.0, 0.0, 1.0], &bounds);
        assert_eq!(side, None);
    }

    #[test]
    fn test_classify_tags() {
        let thresholds = CoverThresholds::default();
        let bounds = unit_bounds();
        let positions = [[0.5, 0.5, 1.0], [0.5, 0.5, 0.0], [1.0, 0.5, 0.5]];
        let normals = [[0.0, 0.0, 1.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]];

        let tags = classify(&positions, &normals, &bounds, &thresholds);
        assert_eq!(tags, vec![RegionTag::Cover, RegionTag::Cover, RegionTag::Edge]);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let thresholds = CoverThresholds::default();
        let bounds = unit_bounds();
        let positions: Vec<[f32; 3]> = (0..32)
            .map(|i| [0.1 * i as f32, 0.2, (i % 2) as f32])
            .collect();
        let normals: Vec<[f32; 3]> = (0..32)
            .map(|i| if i % 3 == 0 { [0.0, 0.0, 1.0] } else { [0.7, 0.0, 0.7] })
            .collect();

        let first = classify(&positions, &normals, &bounds, &thresholds);
        let second = classify(&positions, &normals, &bounds, &thresholds);
        assert_eq!(first, second);
    }
}
