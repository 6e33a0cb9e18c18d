//! WASM-compatible wrapper types for pixel buffers.
//!
//! This module provides JavaScript-friendly types that wrap the core buffer
//! types, and the shared conversions between core errors/options and `JsValue`.

use std::fmt::Display;

use lbp_core::{BufferError, LbpImage, LbpOptions, PixelBuffer};
use wasm_bindgen::prelude::*;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and RGBA pixel data.
    ///
    /// # Errors
    /// Returns an error if `pixels.length != width * height * 4` or a dimension is zero.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        Self::try_new(width, height, pixels).map_err(to_js_error)
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_bytes().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_bytes().to_vec()
    }
}

impl JsPixelBuffer {
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        PixelBuffer::from_raw(width, height, pixels).map(Self::from_buffer)
    }

    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn as_buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// Result of an LBP extraction for JavaScript.
#[wasm_bindgen]
pub struct JsLbpImage {
    image: PixelBuffer,
    masks: Option<Vec<u8>>,
}

#[wasm_bindgen]
impl JsLbpImage {
    /// Output width (input width - 2)
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Output height (input height - 2)
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The `(m, m, m, 255)` visualization as a new pixel buffer.
    pub fn image(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.image.clone())
    }

    /// Row-major mask bytes, or `undefined` unless `keepMasks` was set.
    pub fn masks(&self) -> Option<Vec<u8>> {
        self.masks.clone()
    }
}

impl From<LbpImage> for JsLbpImage {
    fn from(out: LbpImage) -> Self {
        Self {
            image: out.image,
            masks: out.masks,
        }
    }
}

/// Convert any displayable error into a JavaScript `Error`.
pub(crate) fn to_js_error(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Parse an options object such as `{ grayscale: "roundedAverage", keepMasks: true }`.
///
/// `undefined` and `null` select the defaults; missing fields fall back individually.
pub(crate) fn options_from_js(value: JsValue) -> Result<LbpOptions, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(LbpOptions::default());
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| to_js_error(format!("Invalid LBP options: {}", e)))
}
