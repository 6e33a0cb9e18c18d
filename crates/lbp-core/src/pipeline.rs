//! End-to-end LBP extraction over encoded image bytes.
//!
//! Stages run strictly in order: decode, full grayscale reduction, LBP scan,
//! encode. The grayscale stage finishes over the whole buffer before the
//! first neighbor comparison.

use log::debug;

use crate::codec::ImageCodec;
use crate::error::Result;
use crate::lbp::{self, LbpImage};
use crate::LbpOptions;

/// Decode `bytes` and compute the LBP image without encoding it.
pub fn decode_and_extract<C: ImageCodec + ?Sized>(
    bytes: &[u8],
    codec: &C,
    options: &LbpOptions,
) -> Result<LbpImage> {
    let input = codec.decode(bytes)?;
    debug!(
        "pipeline: decoded {}x{} ({} bytes in)",
        input.width(),
        input.height(),
        bytes.len()
    );
    Ok(lbp::extract(&input, options)?)
}

/// Decode `bytes`, extract the LBP image and encode it with the same codec.
pub fn process<C: ImageCodec + ?Sized>(
    bytes: &[u8],
    codec: &C,
    options: &LbpOptions,
) -> Result<Vec<u8>> {
    let output = decode_and_extract(bytes, codec, options)?;
    let encoded = codec.encode(&output.image)?;
    debug!(
        "pipeline: encoded {}x{} ({} bytes out)",
        output.width(),
        output.height(),
        encoded.len()
    );
    Ok(encoded)
}
