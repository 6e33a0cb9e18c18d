//! WASM bindings for grayscale reduction and LBP extraction.
//!
//! All functions take an optional options object:
//!
//! ```typescript
//! const out = compute_lbp(image, { grayscale: "legacy", keepMasks: true });
//! console.log(`${out.width}x${out.height}`, out.masks());
//!
//! // Bytes in, PNG bytes out
//! const png = extract_lbp_png(bytes, undefined);
//! ```

use crate::types::{options_from_js, to_js_error, JsLbpImage, JsPixelBuffer};
use lbp_core::codec::PngCodec;
use lbp_core::{grayscale, lbp, pipeline};
use wasm_bindgen::prelude::*;

/// Return a grayscale copy of `image` using the configured formula.
#[wasm_bindgen]
pub fn to_grayscale(image: &JsPixelBuffer, options: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let options = options_from_js(options)?;
    let gray = grayscale::reduce(image.as_buffer(), options.grayscale);
    Ok(JsPixelBuffer::from_buffer(gray))
}

/// Reduce `image` to grayscale and compute its LBP image.
///
/// # Errors
///
/// Returns an error if the image is smaller than 3x3.
#[wasm_bindgen]
pub fn compute_lbp(image: &JsPixelBuffer, options: JsValue) -> Result<JsLbpImage, JsValue> {
    let options = options_from_js(options)?;
    lbp::extract(image.as_buffer(), &options)
        .map(JsLbpImage::from)
        .map_err(to_js_error)
}

/// Decode image bytes, extract the LBP image and return it as PNG bytes.
#[wasm_bindgen]
pub fn extract_lbp_png(bytes: &[u8], options: JsValue) -> Result<Vec<u8>, JsValue> {
    let options = options_from_js(options)?;
    pipeline::process(bytes, &PngCodec, &options).map_err(to_js_error)
}

/// Tests for LBP bindings.
///
/// Functions taking `JsValue` options only work on wasm32 targets; these
/// native tests exercise the same core calls through the wrapper types.
#[cfg(test)]
mod tests {
    use super::*;
    use lbp_core::LbpOptions;

    fn ring() -> JsPixelBuffer {
        let values = [150u8, 50, 150, 50, 100, 50, 150, 50, 150];
        let pixels = values.iter().flat_map(|&v| [v, v, v, 255]).collect();
        JsPixelBuffer::try_new(3, 3, pixels).unwrap()
    }

    #[test]
    fn test_lbp_through_wrapper() {
        let options = LbpOptions {
            keep_masks: true,
            ..Default::default()
        };
        let out = JsLbpImage::from(lbp::extract(ring().as_buffer(), &options).unwrap());
        assert_eq!((out.width(), out.height()), (1, 1));
        assert_eq!(out.masks(), Some(vec![0xAA]));
        assert_eq!(out.image().pixels(), vec![0xAA, 0xAA, 0xAA, 0xFF]);
    }
}
