//! The re-UV-mapping pipeline.
//!
//! Classification, seam splitting, and projection run as one synchronous
//! pass over a mesh: tag vertices as cover or edge, cut the topology along
//! tag discontinuities, then recompute normals and assign atlas UVs on the
//! new vertex set. The pipeline never mutates its input; it produces a fresh
//! mesh for the caller to swap in.

pub mod classify;
pub mod project;
pub mod split;

pub use classify::{classify, CoverThresholds};
pub use project::EDGE_UV;

use crate::error::{MapperError, Result};
use crate::geometry::Mesh;

/// Mapper configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapperConfig {
    /// Cover detection thresholds shared by classification and projection.
    pub thresholds: CoverThresholds,
}

/// Output of one remap run.
#[derive(Debug)]
pub struct RemapOutput {
    /// The rebuilt mesh: split topology, fresh normals, populated UVs.
    pub mesh: Mesh,
    /// Number of vertices duplicated at the cover/edge seam.
    pub duplicated_vertices: usize,
    /// Number of final vertices that received cover UVs.
    pub cover_vertices: usize,
}

/// The re-UV mapper.
///
/// Stateless apart from its configuration; each [`remap`](UvMapper::remap)
/// call is an independent run-to-completion transform.
#[derive(Debug, Clone, Default)]
pub struct UvMapper {
    config: MapperConfig,
}

impl UvMapper {
    /// Create a mapper with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with custom configuration.
    pub fn with_config(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Run classification, seam splitting, and UV projection on a mesh.
    ///
    /// The input is left untouched. Source normals are discarded and
    /// recomputed from topology before classification; the bounding box is
    /// derived once from the original vertex set and reused for projection.
    pub fn remap(&self, mesh: &Mesh) -> Result<RemapOutput> {
        let bounds = mesh
            .bounds()
            .ok_or(MapperError::MissingAttribute("position"))?;
        mesh.validate()?;

        let mut source = mesh.clone();
        source.compute_vertex_normals();

        let tags = classify::classify(
            &source.positions,
            &source.normals,
            &bounds,
            &self.config.thresholds,
        );

        let (mut out, _tags) = split::split(&source, &tags);
        project::project(&mut out, &bounds, &self.config.thresholds);

        let duplicated_vertices = out.vertex_count() - mesh.vertex_count();
        let cover_vertices = out.uvs.iter().filter(|uv| **uv != EDGE_UV).count();

        Ok(RemapOutput {
            mesh: out,
            duplicated_vertices,
            cover_vertices,
        })
    }
}
