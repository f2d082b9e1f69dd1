//! Material parameters and the renderer-facing binding handle.

use crate::atlas::CoverAtlas;
use serde::{Deserialize, Serialize};

/// Texture coordinate wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp samples to the texture edge. Required for the cover atlas so
    /// the sentinel UVs and the `u = 0.5` seam never bleed.
    ClampToEdge,
    /// Tile the texture.
    Repeat,
}

/// Standard material parameters for the book surface.
///
/// Edge vertices carry sentinel UVs and are shaded from these values alone;
/// cover vertices sample the atlas on top of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProps {
    /// Base color (RGB, linear).
    pub color: [f32; 3],
    pub metalness: f32,
    pub roughness: f32,
    /// Emissive color (RGB, linear).
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    /// Texture offset applied by the renderer.
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for MaterialProps {
    fn default() -> Self {
        // The preset used once a cover texture is bound: white base so the
        // photograph is unfiltered, slight metalness for a glossy jacket.
        Self {
            color: [1.0, 1.0, 1.0],
            metalness: 0.4,
            roughness: 1.0,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

/// Everything the external renderer needs to bind a remapped mesh.
#[derive(Debug, Clone)]
pub struct MaterialBinding {
    /// The combined cover atlas. `None` leaves the book on flat material
    /// parameters (the fallback when image loading failed).
    pub atlas: Option<CoverAtlas>,
    /// Wrapping mode for the atlas.
    pub wrap: WrapMode,
    /// Surface parameters.
    pub props: MaterialProps,
}

impl MaterialBinding {
    /// Bind a cover atlas with the textured preset.
    pub fn textured(atlas: CoverAtlas) -> Self {
        Self {
            atlas: Some(atlas),
            wrap: WrapMode::ClampToEdge,
            props: MaterialProps::default(),
        }
    }

    /// Flat material only, no photographic texture.
    pub fn flat(props: MaterialProps) -> Self {
        Self {
            atlas: None,
            wrap: WrapMode::ClampToEdge,
            props,
        }
    }

    /// Returns `true` if an atlas is bound.
    pub fn has_texture(&self) -> bool {
        self.atlas.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureData;

    #[test]
    fn test_textured_binding_clamps() {
        let tex = TextureData::placeholder();
        let atlas = CoverAtlas::combine(&tex, &tex).unwrap();
        let binding = MaterialBinding::textured(atlas);

        assert!(binding.has_texture());
        assert_eq!(binding.wrap, WrapMode::ClampToEdge);
        assert_eq!(binding.props.color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_flat_binding_has_no_texture() {
        let props = MaterialProps {
            color: [0.8, 0.1, 0.1],
            metalness: 0.1,
            ..MaterialProps::default()
        };
        let binding = MaterialBinding::flat(props.clone());

        assert!(!binding.has_texture());
        assert_eq!(binding.props, props);
    }
}
