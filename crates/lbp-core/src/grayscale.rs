//! Grayscale reduction of RGBA pixel buffers.
//!
//! Each pixel's three color channels are replaced by a single 8-bit
//! intensity. The alpha channel is never touched.
//!
//! # Formulas
//!
//! - [`GrayscaleMethod::Legacy`]: `sum / 3 + sum % 3`, truncated to 8 bits.
//!   The full remainder is re-added, so this is not a rounded average and it
//!   wraps for a handful of very bright inputs (e.g. `255, 255, 254` → `0`).
//!   It is the default because existing LBP outputs were produced with it.
//! - [`GrayscaleMethod::RoundedAverage`]: `(sum + 1) / 3`, the nearest
//!   integer to the mean. Always in range.
//!
//! Both formulas map an already-gray pixel `(n, n, n)` to `n`.

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, CHANNELS};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How three color channels are collapsed into one intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrayscaleMethod {
    /// `sum / 3 + sum % 3`, truncated to 8 bits.
    #[default]
    Legacy,
    /// `(sum + 1) / 3`.
    RoundedAverage,
}

impl GrayscaleMethod {
    #[inline]
    pub fn luma(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayscaleMethod::Legacy => legacy_luma(r, g, b),
            GrayscaleMethod::RoundedAverage => rounded_average_luma(r, g, b),
        }
    }
}

/// `(sum / 3) + (sum % 3)` masked to the low 8 bits.
#[inline]
pub fn legacy_luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 + g as u32 + b as u32;
    let luma = sum / 3 + sum % 3;
    (luma & 0xFF) as u8
}

/// Mean of the three channels, rounded to nearest.
#[inline]
pub fn rounded_average_luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = r as u32 + g as u32 + b as u32;
    ((sum + 1) / 3) as u8
}

#[inline]
fn reduce_pixels(row: &mut [u8], method: GrayscaleMethod) {
    for px in row.chunks_exact_mut(CHANNELS) {
        let value = method.luma(px[0], px[1], px[2]);
        px[0] = value;
        px[1] = value;
        px[2] = value;
    }
}

/// Row-by-row reduction on the calling thread.
#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn reduce_rows_seq(bytes: &mut [u8], stride: usize, method: GrayscaleMethod) {
    bytes
        .chunks_mut(stride)
        .for_each(|row| reduce_pixels(row, method));
}

/// Row-parallel reduction; byte-identical to [`reduce_rows_seq`].
#[cfg(feature = "parallel")]
pub(crate) fn reduce_rows_par(bytes: &mut [u8], stride: usize, method: GrayscaleMethod) {
    bytes
        .par_chunks_mut(stride)
        .for_each(|row| reduce_pixels(row, method));
}

/// Convert every pixel of `buffer` to grayscale in place.
///
/// The whole buffer is converted before this returns, so any neighbor read
/// afterwards sees grayscale values only.
pub fn reduce_in_place(buffer: &mut PixelBuffer, method: GrayscaleMethod) {
    let stride = buffer.width() as usize * CHANNELS;
    let bytes = buffer.as_bytes_mut();

    #[cfg(feature = "parallel")]
    reduce_rows_par(bytes, stride, method);

    #[cfg(not(feature = "parallel"))]
    reduce_rows_seq(bytes, stride, method);
}

/// Return a grayscale copy of `buffer`, leaving the input untouched.
pub fn reduce(buffer: &PixelBuffer, method: GrayscaleMethod) -> PixelBuffer {
    let mut out = buffer.clone();
    reduce_in_place(&mut out, method);
    out
}
