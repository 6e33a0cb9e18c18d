//! Local Binary Pattern transform.
//!
//! For every interior pixel the eight neighbors are compared against the
//! center intensity with a strict `>` and the outcomes are packed into one
//! byte, clockwise from the top-left neighbor, most significant bit first:
//!
//! ```text
//!   7 6 5
//!   0 c 4
//!   1 2 3
//! ```
//!
//! The output image is two pixels narrower and two pixels shorter than the
//! input (the border has no full neighbor ring). Each output pixel is
//! `(m, m, m, 255)` for its mask `m`, so it can be encoded and viewed as is.

use log::debug;
use thiserror::Error;

use crate::buffer::{BufferError, PixelBuffer, CHANNELS};
use crate::grayscale;
use crate::LbpOptions;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Smallest width and height with at least one interior pixel.
pub const MIN_DIMENSION: u32 = 3;

/// Neighbor offsets `(dx, dy)`; entry `i` sets bit `7 - i` of the mask.
pub const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Errors that can occur during the LBP transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LbpError {
    /// Input has no interior pixels.
    #[error("Invalid dimension: {width}x{height} image must be at least 3x3")]
    InvalidDimension { width: u32, height: u32 },

    /// Input was not reduced to grayscale first.
    #[error("Pixel ({x}, {y}) is not grayscale")]
    NotGrayscale { x: u32, y: u32 },

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

/// Result of an LBP transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LbpImage {
    /// `(width - 2) x (height - 2)` visualization, one `(m, m, m, 255)` per mask.
    pub image: PixelBuffer,
    /// Row-major masks, present only when requested.
    pub masks: Option<Vec<u8>>,
}

impl LbpImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn into_image(self) -> PixelBuffer {
        self.image
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), LbpError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(LbpError::InvalidDimension { width, height });
    }
    Ok(())
}

/// Masks for interior row `y` of a grayscale RGBA byte slice.
///
/// Caller guarantees `1 <= y <= height - 2` and `out.len() == width - 2`.
#[inline]
fn row_masks(src: &[u8], width: usize, y: usize, out: &mut [u8]) {
    let stride = width * CHANNELS;
    let above = &src[(y - 1) * stride..y * stride];
    let row = &src[y * stride..(y + 1) * stride];
    let below = &src[(y + 1) * stride..(y + 2) * stride];
    let at = |line: &[u8], x: usize| line[x * CHANNELS];

    for (i, m) in out.iter_mut().enumerate() {
        let x = i + 1;
        let c = at(row, x);
        *m = ((at(above, x - 1) > c) as u8) << 7
            | ((at(above, x) > c) as u8) << 6
            | ((at(above, x + 1) > c) as u8) << 5
            | ((at(row, x + 1) > c) as u8) << 4
            | ((at(below, x + 1) > c) as u8) << 3
            | ((at(below, x) > c) as u8) << 2
            | ((at(below, x - 1) > c) as u8) << 1
            | (at(row, x - 1) > c) as u8;
    }
}

/// Fill `masks` (`(width - 2)` per row) on the calling thread.
#[cfg_attr(feature = "parallel", allow(dead_code))]
pub(crate) fn fill_masks_seq(src: &[u8], width: usize, masks: &mut [u8]) {
    masks
        .chunks_mut(width - 2)
        .enumerate()
        .for_each(|(i, out)| row_masks(src, width, i + 1, out));
}

/// Row-parallel variant of [`fill_masks_seq`] with identical output.
#[cfg(feature = "parallel")]
pub(crate) fn fill_masks_par(src: &[u8], width: usize, masks: &mut [u8]) {
    masks
        .par_chunks_mut(width - 2)
        .enumerate()
        .for_each(|(i, out)| row_masks(src, width, i + 1, out));
}

fn fill_masks(src: &[u8], width: usize, masks: &mut [u8]) {
    #[cfg(feature = "parallel")]
    fill_masks_par(src, width, masks);

    #[cfg(not(feature = "parallel"))]
    fill_masks_seq(src, width, masks);
}

/// Mask for a single interior pixel of a grayscale buffer.
///
/// Border pixels have no full neighbor ring and are reported as out of range.
pub fn mask_at(buffer: &PixelBuffer, x: u32, y: u32) -> Result<u8, LbpError> {
    check_dimensions(buffer.width(), buffer.height())?;
    if x == 0 || y == 0 || x >= buffer.width() - 1 || y >= buffer.height() - 1 {
        return Err(BufferError::OutOfRange {
            x,
            y,
            width: buffer.width(),
            height: buffer.height(),
        }
        .into());
    }

    let c = buffer.get_channel(x, y, 0)?;
    let mut m = 0u8;
    for (i, (dx, dy)) in NEIGHBORS.iter().enumerate() {
        let nx = (x as i64 + *dx as i64) as u32;
        let ny = (y as i64 + *dy as i64) as u32;
        if buffer.get_channel(nx, ny, 0)? > c {
            m |= 1 << (7 - i);
        }
    }
    Ok(m)
}

/// Compute the LBP image of an already-grayscale buffer.
///
/// Fails before allocating anything if the buffer is smaller than 3x3 or
/// has a pixel whose color channels differ.
pub fn compute(gray: &PixelBuffer, keep_masks: bool) -> Result<LbpImage, LbpError> {
    let (width, height) = (gray.width(), gray.height());
    check_dimensions(width, height)?;
    if let Some((x, y)) = gray.first_non_gray() {
        return Err(LbpError::NotGrayscale { x, y });
    }

    let (out_width, out_height) = (width - 2, height - 2);
    let mut masks = vec![0u8; out_width as usize * out_height as usize];
    fill_masks(gray.as_bytes(), width as usize, &mut masks);

    let mut pixels = Vec::with_capacity(masks.len() * CHANNELS);
    for &m in &masks {
        pixels.extend_from_slice(&[m, m, m, 0xFF]);
    }
    let image = PixelBuffer::from_raw(out_width, out_height, pixels)?;

    debug!(
        "lbp::compute {}x{} -> {}x{} ({} masks)",
        width,
        height,
        out_width,
        out_height,
        masks.len()
    );

    Ok(LbpImage {
        image,
        masks: keep_masks.then_some(masks),
    })
}

/// Reduce `input` to grayscale and compute its LBP image.
///
/// `input` is borrowed and left unchanged.
pub fn extract(input: &PixelBuffer, options: &LbpOptions) -> Result<LbpImage, LbpError> {
    check_dimensions(input.width(), input.height())?;
    let gray = grayscale::reduce(input, options.grayscale);
    compute(&gray, options.keep_masks)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
