//! LBP Core - Local Binary Pattern texture descriptor extraction
//!
//! This crate computes the 8-neighbor Local Binary Pattern of an image:
//! every interior pixel is compared against its eight neighbors and the
//! outcomes are packed into one byte, producing a grayscale visualization
//! two pixels smaller than the input in each dimension.
//!
//! # Pipeline
//!
//! 1. Decode file bytes into a [`PixelBuffer`] ([`codec`])
//! 2. Reduce to grayscale ([`grayscale`])
//! 3. Scan interior pixels and emit masks ([`lbp`])
//! 4. Encode the result ([`codec`])
//!
//! [`pipeline::process`] runs all four steps over in-memory bytes.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod grayscale;
pub mod lbp;
pub mod pipeline;

pub use buffer::{BufferError, PixelBuffer};
pub use codec::{DecodeError, EncodeError, ImageCodec, PngCodec};
pub use error::{Error, Result};
pub use grayscale::GrayscaleMethod;
pub use lbp::{LbpError, LbpImage};

/// Options for LBP extraction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LbpOptions {
    /// Formula used to collapse color channels before the neighbor scan
    pub grayscale: GrayscaleMethod,
    /// Retain the per-pixel mask bytes alongside the output image
    pub keep_masks: bool,
}

impl LbpOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }
}
