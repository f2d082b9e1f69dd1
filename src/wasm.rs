//! WASM bindings for book-uv-mapper.
//!
//! This module provides JavaScript-friendly APIs for use in the browser:
//! build a mesh handle from typed arrays, remap it, and read the rebuilt
//! buffers back for upload into the rendering library of choice.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

/// Mapper options.
#[wasm_bindgen]
#[derive(Default)]
pub struct MapperOptions {
    front_dot: f32,
    back_dot: f32,
    max_xy_deviation: f32,
    z_band: f32,
}

#[wasm_bindgen]
impl MapperOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MapperOptions {
        let defaults = crate::CoverThresholds::default();
        MapperOptions {
            front_dot: defaults.front_dot,
            back_dot: defaults.back_dot,
            max_xy_deviation: defaults.max_xy_deviation,
            z_band: defaults.z_band,
        }
    }

    #[wasm_bindgen(setter)]
    pub fn set_front_dot(&mut self, value: f32) {
        self.front_dot = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_back_dot(&mut self, value: f32) {
        self.back_dot = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_max_xy_deviation(&mut self, value: f32) {
        self.max_xy_deviation = value;
    }

    #[wasm_bindgen(setter)]
    pub fn set_z_band(&mut self, value: f32) {
        self.z_band = value;
    }

    fn to_config(&self) -> crate::MapperConfig {
        crate::MapperConfig {
            thresholds: crate::CoverThresholds {
                front_dot: self.front_dot,
                back_dot: self.back_dot,
                max_xy_deviation: self.max_xy_deviation,
                z_band: self.z_band,
            },
        }
    }
}

/// An indexed triangle mesh held on the Rust side.
#[wasm_bindgen]
pub struct MeshHandle {
    inner: crate::Mesh,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Build a mesh from flat position and index arrays.
    #[wasm_bindgen(constructor)]
    pub fn new(positions: &[f32], indices: &[u32]) -> Result<MeshHandle, JsError> {
        if positions.len() % 3 != 0 {
            return Err(JsError::new("positions length must be a multiple of 3"));
        }
        let positions: Vec<[f32; 3]> = positions
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        let mesh = crate::Mesh::from_buffers(positions, indices.to_vec());
        mesh.validate().map_err(|e| JsError::new(&e.to_string()))?;

        Ok(MeshHandle { inner: mesh })
    }

    /// Run the remap pipeline, producing a new handle.
    pub fn remap(&self, options: Option<MapperOptions>) -> Result<MeshHandle, JsError> {
        let config = options.map(|o| o.to_config()).unwrap_or_default();
        let mapper = crate::UvMapper::with_config(config);
        let output = mapper
            .remap(&self.inner)
            .map_err(|e| JsError::new(&e.to_string()))?;

        Ok(MeshHandle { inner: output.mesh })
    }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.inner.triangle_count()
    }

    /// Flat position buffer (3 floats per vertex).
    pub fn positions(&self) -> js_sys::Float32Array {
        flatten3(&self.inner.positions)
    }

    /// Flat normal buffer (3 floats per vertex).
    pub fn normals(&self) -> js_sys::Float32Array {
        flatten3(&self.inner.normals)
    }

    /// Flat UV buffer (2 floats per vertex).
    pub fn uvs(&self) -> js_sys::Float32Array {
        let flat: Vec<f32> = self.inner.uvs.iter().flatten().copied().collect();
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Triangle index buffer.
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(self.inner.indices.as_slice())
    }
}

fn flatten3(buffer: &[[f32; 3]]) -> js_sys::Float32Array {
    let flat: Vec<f32> = buffer.iter().flatten().copied().collect();
    js_sys::Float32Array::from(flat.as_slice())
}

/// Composite two equally-sized cover images into the combined atlas and
/// return it as PNG bytes.
#[wasm_bindgen]
pub fn combine_covers(front: &[u8], back: &[u8]) -> Result<Vec<u8>, JsError> {
    let front = crate::texture::load_texture_from_bytes(front)
        .map_err(|e| JsError::new(&e.to_string()))?;
    let back = crate::texture::load_texture_from_bytes(back)
        .map_err(|e| JsError::new(&e.to_string()))?;

    let atlas = crate::CoverAtlas::combine(&front, &back)
        .map_err(|e| JsError::new(&e.to_string()))?;
    atlas.to_png().map_err(|e| JsError::new(&e.to_string()))
}
