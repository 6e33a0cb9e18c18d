//! Image file codec boundary.
//!
//! The transform stages only ever see [`PixelBuffer`]s. Turning file bytes
//! into a buffer and back is delegated to an [`ImageCodec`]; the crate ships
//! [`PngCodec`], backed by the `image` crate. Codec errors are passed to the
//! caller unchanged.
//!
//! # Examples
//!
//! ```ignore
//! use lbp_core::codec::{ImageCodec, PngCodec};
//!
//! let bytes = std::fs::read("lenna.png").unwrap();
//! let buffer = PngCodec.decode(&bytes).unwrap();
//! println!("Decoded {}x{} image", buffer.width(), buffer.height());
//! ```

mod png;

use thiserror::Error;

use crate::buffer::{BufferError, PixelBuffer};

pub use png::PngCodec;

/// Errors that can occur while decoding file bytes.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoded pixels don't form a valid buffer (e.g. zero-sized image).
    #[error("Decoded image is not a valid pixel buffer: {0}")]
    Buffer(#[from] BufferError),
}

/// Errors that can occur while encoding a buffer.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),
}

/// Converts between file bytes and RGBA pixel buffers.
pub trait ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError>;

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError>;
}
