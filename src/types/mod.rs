//! Shared types used throughout the library.

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

impl BoundingBox {
    pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
        Self { min, max }
    }

    pub fn from_points(points: impl Iterator<Item = [f32; 3]>) -> Option<Self> {
        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];
        let mut has_points = false;

        for p in points {
            has_points = true;
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }

        if has_points {
            Some(Self { min, max })
        } else {
            None
        }
    }

    pub fn dimensions(&self) -> [f32; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    /// Normalize a coordinate into `[0, 1]` along the given axis.
    ///
    /// A zero-extent axis maps everything to `0.0` instead of dividing by
    /// zero, so a mesh collapsed onto a plane still gets finite UVs.
    pub fn normalized(&self, axis: usize, value: f32) -> f32 {
        let extent = self.max[axis] - self.min[axis];
        if extent <= 0.0 {
            0.0
        } else {
            (value - self.min[axis]) / extent
        }
    }
}

/// Coarse per-vertex region classification of the original mesh.
///
/// Decides where the seam splitter cuts. The finer front/back distinction
/// ([`CoverSide`]) is re-derived later on the split topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTag {
    /// One of the two large flat faces that carries a photographic texture.
    Cover,
    /// The curved spine/edge band between the covers, left untextured.
    Edge,
}

impl RegionTag {
    pub fn is_cover(self) -> bool {
        matches!(self, RegionTag::Cover)
    }
}

/// Which cover a vertex belongs to, decided per final vertex during
/// projection from its own recomputed normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverSide {
    /// Maps into the left half of the atlas.
    Front,
    /// Maps into the right half of the atlas.
    Back,
}
