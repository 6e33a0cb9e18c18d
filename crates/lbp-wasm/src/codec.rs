//! Image codec WASM bindings.
//!
//! - [`decode_image`] - Decode PNG/JPEG bytes into an RGBA buffer
//! - [`encode_png`] - Encode an RGBA buffer to PNG bytes
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_png } from '@lbp/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const png = encode_png(image);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use lbp_core::codec::{ImageCodec, PngCodec};
use wasm_bindgen::prelude::*;

/// Decode image file bytes (PNG or JPEG) into an RGBA pixel buffer.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the file is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    PngCodec
        .decode(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(to_js_error)
}

/// Encode an RGBA pixel buffer to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    PngCodec.encode(image.as_buffer()).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip_through_wrapper() {
        let img = JsPixelBuffer::try_new(3, 2, (0..24).collect()).unwrap();
        let bytes = PngCodec.encode(img.as_buffer()).unwrap();
        let decoded = JsPixelBuffer::from_buffer(PngCodec.decode(&bytes).unwrap());
        assert_eq!(decoded.pixels(), img.pixels());
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_encode_then_decode() {
        let img = JsPixelBuffer::new(4, 4, vec![90u8; 4 * 4 * 4]).unwrap();
        let png = encode_png(&img).unwrap();
        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.pixels(), img.pixels());
    }

    #[wasm_bindgen_test]
    fn test_decode_garbage() {
        assert!(decode_image(b"not an image").is_err());
    }
}
