//! Two-panel cover atlas: front image on the left, back image on the right.

use crate::error::{MapperError, Result};
use crate::texture::TextureData;
use image::ImageEncoder;

/// A rectangular region within the atlas.
#[derive(Debug, Clone, Copy)]
pub struct AtlasRegion {
    /// U coordinate of the left edge (0-1).
    pub u_min: f32,
    /// V coordinate of the top edge (0-1).
    pub v_min: f32,
    /// U coordinate of the right edge (0-1).
    pub u_max: f32,
    /// V coordinate of the bottom edge (0-1).
    pub v_max: f32,
}

impl AtlasRegion {
    /// Get the width of this region in UV space.
    pub fn width(&self) -> f32 {
        self.u_max - self.u_min
    }

    /// Get the height of this region in UV space.
    pub fn height(&self) -> f32 {
        self.v_max - self.v_min
    }

    /// Transform a local UV coordinate (0-1) to atlas coordinates.
    pub fn transform_uv(&self, u: f32, v: f32) -> [f32; 2] {
        [self.u_min + u * self.width(), self.v_min + v * self.height()]
    }
}

/// The combined `2W x H` cover atlas.
///
/// Built from two equally-sized cover images. The projector maps front-cover
/// vertices into `u < 0.5` and back-cover vertices into `u >= 0.5`; the
/// renderer must bind this with edge-clamped wrapping so nothing bleeds
/// across the center seam.
#[derive(Debug, Clone)]
pub struct CoverAtlas {
    /// Width of the atlas in pixels (twice the cover width).
    pub width: u32,
    /// Height of the atlas in pixels.
    pub height: u32,
    /// RGBA pixel data.
    pub pixels: Vec<u8>,
}

impl CoverAtlas {
    /// Composite the front and back cover images side by side.
    ///
    /// Both images must have identical dimensions; anything else would
    /// silently clip or stretch one cover, so it is rejected instead.
    pub fn combine(front: &TextureData, back: &TextureData) -> Result<CoverAtlas> {
        if front.width != back.width || front.height != back.height {
            return Err(MapperError::CoverSizeMismatch {
                front_width: front.width,
                front_height: front.height,
                back_width: back.width,
                back_height: back.height,
            });
        }

        let width = front.width * 2;
        let height = front.height;
        let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];

        blit(&mut pixels, width, front, 0);
        blit(&mut pixels, width, back, front.width);

        Ok(CoverAtlas {
            width,
            height,
            pixels,
        })
    }

    /// The left half, carrying the front cover.
    pub fn front_region() -> AtlasRegion {
        AtlasRegion {
            u_min: 0.0,
            v_min: 0.0,
            u_max: 0.5,
            v_max: 1.0,
        }
    }

    /// The right half, carrying the back cover.
    pub fn back_region() -> AtlasRegion {
        AtlasRegion {
            u_min: 0.5,
            v_min: 0.0,
            u_max: 1.0,
            v_max: 1.0,
        }
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Export the atlas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder
            .write_image(
                &self.pixels,
                self.width,
                self.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| MapperError::AtlasBuild(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }
}

/// Copy a source image into the atlas at the given column offset.
fn blit(pixels: &mut [u8], atlas_width: u32, src: &TextureData, x_offset: u32) {
    for y in 0..src.height {
        let src_start = (y as usize) * (src.width as usize) * 4;
        let src_end = src_start + (src.width as usize) * 4;
        let dst_start = ((y * atlas_width + x_offset) * 4) as usize;
        let dst_end = dst_start + (src.width as usize) * 4;

        pixels[dst_start..dst_end].copy_from_slice(&src.pixels[src_start..src_end]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_texture(width: u32, height: u32, color: [u8; 4]) -> TextureData {
        let pixels: Vec<u8> = (0..width * height)
            .flat_map(|_| color.iter().copied())
            .collect();
        TextureData::new(width, height, pixels)
    }

    #[test]
    fn test_combine_places_covers_side_by_side() {
        let front = solid_texture(4, 2, [255, 0, 0, 255]);
        let back = solid_texture(4, 2, [0, 0, 255, 255]);

        let atlas = CoverAtlas::combine(&front, &back).unwrap();
        assert_eq!(atlas.width, 8);
        assert_eq!(atlas.height, 2);

        assert_eq!(atlas.get_pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(atlas.get_pixel(3, 1), [255, 0, 0, 255]);
        assert_eq!(atlas.get_pixel(4, 0), [0, 0, 255, 255]);
        assert_eq!(atlas.get_pixel(7, 1), [0, 0, 255, 255]);
    }

    #[test]
    fn test_combine_rejects_mismatched_sizes() {
        let front = solid_texture(4, 2, [255, 0, 0, 255]);
        let back = solid_texture(2, 2, [0, 0, 255, 255]);

        let err = CoverAtlas::combine(&front, &back).unwrap_err();
        assert!(matches!(err, MapperError::CoverSizeMismatch { .. }));
    }

    #[test]
    fn test_halves_meet_at_u_half() {
        let front = CoverAtlas::front_region();
        let back = CoverAtlas::back_region();

        assert_eq!(front.transform_uv(1.0, 0.5), [0.5, 0.5]);
        assert_eq!(back.transform_uv(0.0, 0.5), [0.5, 0.5]);
        assert_eq!(front.width() + back.width(), 1.0);
    }

    #[test]
    fn test_to_png() {
        let front = solid_texture(2, 2, [10, 20, 30, 255]);
        let back = solid_texture(2, 2, [40, 50, 60, 255]);
        let atlas = CoverAtlas::combine(&front, &back).unwrap();

        let png = atlas.to_png().unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }
}
