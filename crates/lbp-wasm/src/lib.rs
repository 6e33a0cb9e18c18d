//! LBP WASM - WebAssembly bindings for LBP texture extraction
//!
//! This crate exposes the lbp-core functionality to JavaScript/TypeScript.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel buffers and LBP output
//! - `codec` - PNG/JPEG decoding and PNG encoding
//! - `lbp` - Grayscale reduction and LBP extraction
//! - `logging` - Console backend for the `log` facade
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, compute_lbp } from '@lbp/wasm';
//!
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const lbp = compute_lbp(image, { keepMasks: true });
//! console.log(`LBP ${lbp.width}x${lbp.height}`);
//! ```

use log::LevelFilter;
use wasm_bindgen::prelude::*;

mod codec;
mod lbp;
mod logging;
mod types;

// Re-export public types
pub use codec::{decode_image, encode_png};
pub use lbp::{compute_lbp, extract_lbp_png, to_grayscale};
pub use types::{JsLbpImage, JsPixelBuffer};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    if let Err(e) = logging::init(LevelFilter::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "lbp-wasm: console logging disabled: {}",
            e
        )));
    }
}

/// Set the console log level (`"off"`, `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`).
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| types::to_js_error(format!("Unknown log level: {}", level)))?;
    logging::init(filter).map_err(types::to_js_error)
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
