//! Cover image loading and the startup preload cache.

use crate::error::Result;
use std::collections::HashMap;

/// Raw decoded image data.
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// RGBA8 pixel data (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Create a new texture from RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a placeholder texture (magenta/black checkerboard).
    pub fn placeholder() -> Self {
        let size = 16;
        let mut pixels = vec![0u8; (size * size * 4) as usize];

        for y in 0..size {
            for x in 0..size {
                let idx = ((y * size + x) * 4) as usize;
                let is_magenta = ((x / 2) + (y / 2)) % 2 == 0;

                if is_magenta {
                    pixels[idx] = 255;
                    pixels[idx + 2] = 255;
                }
                pixels[idx + 3] = 255;
            }
        }

        Self {
            width: size,
            height: size,
            pixels,
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
}

/// Decode a texture from PNG or JPEG bytes.
pub fn load_texture_from_bytes(data: &[u8]) -> Result<TextureData> {
    let img = image::load_from_memory(data)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureData::new(width, height, rgba.into_raw()))
}

/// Cover images decoded ahead of time, keyed by asset path.
///
/// Built explicitly at startup and passed to whoever needs it; queried
/// synchronously and never invalidated. A preload failure is not fatal —
/// lookups fall back to a direct load.
#[derive(Debug, Clone, Default)]
pub struct PreloadCache {
    textures: HashMap<String, TextureData>,
}

impl PreloadCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an already-decoded texture.
    pub fn insert(&mut self, path: impl Into<String>, texture: TextureData) {
        self.textures.insert(path.into(), texture);
    }

    /// Decode and store a texture. Callers preloading a batch may ignore
    /// individual failures; the path just stays cold.
    pub fn preload(&mut self, path: impl Into<String>, data: &[u8]) -> Result<()> {
        let texture = load_texture_from_bytes(data)?;
        self.insert(path, texture);
        Ok(())
    }

    /// Look up a preloaded texture.
    pub fn get(&self, path: &str) -> Option<&TextureData> {
        self.textures.get(path)
    }

    /// Number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Returns `true` if nothing has been preloaded.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Fetch from the cache, or fall back to a direct load on a miss.
    pub fn get_or_load(
        &self,
        path: &str,
        load: impl FnOnce() -> Result<TextureData>,
    ) -> Result<TextureData> {
        if let Some(texture) = self.get(path) {
            return Ok(texture.clone());
        }
        load()
    }
}
