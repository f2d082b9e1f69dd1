//! Seam splitting between cover and edge regions.
//!
//! Triangles straddling the cover/edge boundary would interpolate UVs across
//! the seam and bleed the photographic texture onto the spine. Splitting
//! duplicates the disagreeing vertices so every output triangle is
//! region-pure before projection.

use crate::geometry::Mesh;
use crate::types::RegionTag;
use std::collections::HashMap;

/// Split the mesh so that every triangle's vertices share one region tag.
///
/// Returns the rebuilt mesh (positions copied, UVs zeroed, indices rewired)
/// together with the tag array extended over the duplicates. Duplicates
/// inherit the tag of the face they were created for, which is always the
/// opposite of their source vertex's tag.
///
/// Mixed faces are biased toward edge: a face gets cover treatment only when
/// all three vertices are tagged cover. The asymmetry is intentional — it
/// guarantees the photographic texture never reaches a partially-edge face,
/// which is what keeps the seam invisible.
///
/// Triangle count is unchanged; vertex count only grows, and stays equal to
/// the input exactly when no triangle was mixed.
pub fn split(mesh: &Mesh, tags: &[RegionTag]) -> (Mesh, Vec<RegionTag>) {
    debug_assert_eq!(mesh.positions.len(), tags.len());

    let mut out = Mesh {
        positions: mesh.positions.clone(),
        normals: Vec::new(),
        uvs: vec![[0.0, 0.0]; mesh.positions.len()],
        indices: Vec::with_capacity(mesh.indices.len()),
    };
    let mut out_tags = tags.to_vec();

    // One duplicate per original vertex, shared by every mixed face that
    // needs it.
    let mut duplicates: HashMap<u32, u32> = HashMap::new();

    for tri in mesh.indices.chunks_exact(3) {
        let mut ids = [tri[0], tri[1], tri[2]];

        let face_is_cover = ids.iter().all(|&i| tags[i as usize].is_cover());
        let face_is_edge = ids.iter().all(|&i| !tags[i as usize].is_cover());

        if !(face_is_cover || face_is_edge) {
            let face_tag = if face_is_cover {
                RegionTag::Cover
            } else {
                RegionTag::Edge
            };

            for id in &mut ids {
                if tags[*id as usize] != face_tag {
                    let dup = *duplicates.entry(*id).or_insert_with(|| {
                        let new_id = out.positions.len() as u32;
                        out.positions.push(mesh.positions[*id as usize]);
                        out.uvs.push([0.0, 0.0]);
                        out_tags.push(face_tag);
                        new_id
                    });
                    *id = dup;
                }
            }
        }

        out.indices.extend_from_slice(&ids);
    }

    (out, out_tags)
}
