//! PNG output codec using the `image` crate.
//!
//! Decoding accepts any format enabled on the `image` dependency (PNG and
//! JPEG) and always yields RGBA8; images without an alpha channel come back
//! fully opaque. Encoding always writes an RGBA8 PNG, which is lossless, so
//! `decode(encode(b)) == b` for every buffer.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ImageReader;
use log::debug;

use super::{DecodeError, EncodeError, ImageCodec};
use crate::buffer::PixelBuffer;

/// Codec that decodes PNG/JPEG and encodes PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn decode(&self, bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

        let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

        let img = reader
            .decode()
            .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

        let buffer = PixelBuffer::from_rgba_image(img.into_rgba8())?;
        debug!(
            "PngCodec::decode {:?} {}x{}",
            format,
            buffer.width(),
            buffer.height()
        );
        Ok(buffer)
    }

    fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        let img = buffer.to_rgba_image().ok_or_else(|| {
            EncodeError::EncodingFailed(format!(
                "{}x{} buffer does not fit an RGBA image",
                buffer.width(),
                buffer.height()
            ))
        })?;

        let mut out = Cursor::new(Vec::new());
        img.write_with_encoder(PngEncoder::new(&mut out))
            .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;
        Ok(out.into_inner())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let n = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), n..=n)
                .prop_map(move |pixels| PixelBuffer::from_raw(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: PNG round-trip reproduces pixels and dimensions exactly.
        #[test]
        fn prop_roundtrip(buffer in buffer_strategy()) {
            let bytes = PngCodec.encode(&buffer).unwrap();
            let decoded = PngCodec.decode(&bytes).unwrap();
            prop_assert_eq!(decoded, buffer);
        }
    }
}
