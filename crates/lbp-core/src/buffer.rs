//! RGBA pixel buffer with bounds-checked addressing.
//!
//! Every buffer handled by this crate stores 4 interleaved 8-bit channels
//! per pixel (`c0, c1, c2, alpha`), row-major, top row first. The length of
//! the byte vector is always exactly `width * height * 4`.

use thiserror::Error;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// Index of the opacity channel within a pixel.
pub const ALPHA: usize = 3;

/// Errors raised by pixel buffer construction and addressing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// Pixel coordinate lies outside the image.
    #[error("Pixel ({x}, {y}) is out of range for a {width}x{height} image")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Channel index is not one of 0..4.
    #[error("Channel {0} is out of range (expected 0..4)")]
    InvalidChannel(usize),

    /// Byte vector length doesn't match `width * height * 4`.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Width or height is zero, or the byte size overflows.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// A W×H image in 4-channel interleaved 8-bit layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// Byte length of a `width x height` RGBA buffer, rejecting empty or overflowing sizes.
fn byte_len(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(BufferError::InvalidDimensions { width, height })
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![0u8; len],
        })
    }

    /// Wrap existing RGBA bytes, validating the length invariant.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BufferError> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a PixelBuffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, BufferError> {
        let (width, height) = img.dimensions();
        Self::from_raw(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbaImage` for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len() / CHANNELS
    }

    /// Raw RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the buffer and return its RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Index of the first byte of pixel `(x, y)`: `y*width*4 + x*4`.
    pub fn offset(&self, x: u32, y: u32) -> Result<usize, BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize * self.width as usize + x as usize) * CHANNELS)
    }

    pub fn get_channel(&self, x: u32, y: u32, c: usize) -> Result<u8, BufferError> {
        if c >= CHANNELS {
            return Err(BufferError::InvalidChannel(c));
        }
        Ok(self.pixels[self.offset(x, y)? + c])
    }

    pub fn set_channel(&mut self, x: u32, y: u32, c: usize, value: u8) -> Result<(), BufferError> {
        if c >= CHANNELS {
            return Err(BufferError::InvalidChannel(c));
        }
        let idx = self.offset(x, y)?;
        self.pixels[idx + c] = value;
        Ok(())
    }

    /// All four channels of pixel `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4], BufferError> {
        let idx = self.offset(x, y)?;
        let p = &self.pixels[idx..idx + CHANNELS];
        Ok([p[0], p[1], p[2], p[3]])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, value: [u8; 4]) -> Result<(), BufferError> {
        let idx = self.offset(x, y)?;
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&value);
        Ok(())
    }

    /// Coordinates of the first pixel (scan order) whose color channels differ.
    pub fn first_non_gray(&self) -> Option<(u32, u32)> {
        let width = self.width as usize;
        self.pixels
            .chunks_exact(CHANNELS)
            .position(|p| p[0] != p[1] || p[1] != p[2])
            .map(|idx| ((idx % width) as u32, (idx / width) as u32))
    }

    /// Check whether every pixel has equal color channels.
    pub fn is_grayscale(&self) -> bool {
        self.first_non_gray().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let buf = PixelBuffer::new(4, 3).unwrap();
        assert_eq!(buf.width(), 4);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.pixel_count(), 12);
        assert_eq!(buf.as_bytes().len(), 48);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            PixelBuffer::new(0, 5),
            Err(BufferError::InvalidDimensions { width: 0, height: 5 })
        );
        assert!(matches!(
            PixelBuffer::from_raw(5, 0, vec![]),
            Err(BufferError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_raw_size_mismatch() {
        let result = PixelBuffer::from_raw(2, 2, vec![0u8; 15]);
        assert_eq!(
            result,
            Err(BufferError::SizeMismatch {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn test_offset_formula() {
        let buf = PixelBuffer::new(5, 4).unwrap();
        assert_eq!(buf.offset(0, 0), Ok(0));
        assert_eq!(buf.offset(1, 0), Ok(4));
        assert_eq!(buf.offset(0, 1), Ok(20));
        assert_eq!(buf.offset(4, 3), Ok(3 * 5 * 4 + 4 * 4));
    }

    #[test]
    fn test_offset_out_of_range() {
        let buf = PixelBuffer::new(5, 4).unwrap();
        assert_eq!(
            buf.offset(5, 0),
            Err(BufferError::OutOfRange {
                x: 5,
                y: 0,
                width: 5,
                height: 4
            })
        );
        assert!(buf.offset(0, 4).is_err());
        assert!(buf.offset(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_channel_access() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        buf.set_channel(1, 2, 3, 200).unwrap();
        assert_eq!(buf.get_channel(1, 2, 3), Ok(200));
        assert_eq!(buf.get_channel(1, 2, 0), Ok(0));
        assert_eq!(buf.as_bytes()[2 * 3 * 4 + 4 + 3], 200);
    }

    #[test]
    fn test_invalid_channel() {
        let mut buf = PixelBuffer::new(3, 3).unwrap();
        assert_eq!(buf.get_channel(0, 0, 4), Err(BufferError::InvalidChannel(4)));
        assert_eq!(
            buf.set_channel(0, 0, 7, 1),
            Err(BufferError::InvalidChannel(7))
        );
        // Nothing was written by the failed call
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set_pixel(1, 1, [10, 20, 30, 40]).unwrap();
        assert_eq!(buf.pixel(1, 1), Ok([10, 20, 30, 40]));
        assert_eq!(&buf.as_bytes()[12..16], &[10, 20, 30, 40]);
        assert!(buf.set_pixel(2, 0, [0; 4]).is_err());
    }

    #[test]
    fn test_first_non_gray() {
        let mut buf = PixelBuffer::new(3, 2).unwrap();
        assert!(buf.is_grayscale());

        buf.set_pixel(2, 1, [1, 1, 2, 255]).unwrap();
        assert_eq!(buf.first_non_gray(), Some((2, 1)));

        buf.set_pixel(1, 0, [9, 8, 9, 0]).unwrap();
        assert_eq!(buf.first_non_gray(), Some((1, 0)));
        assert!(!buf.is_grayscale());
    }

    #[test]
    fn test_rgba_image_bridge() {
        let pixels: Vec<u8> = (0..36).collect();
        let buf = PixelBuffer::from_raw(3, 3, pixels.clone()).unwrap();
        let img = buf.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (3, 3));

        let back = PixelBuffer::from_rgba_image(img).unwrap();
        assert_eq!(back.into_raw(), pixels);
    }

    #[test]
    fn test_error_display() {
        let err = BufferError::OutOfRange {
            x: 7,
            y: 1,
            width: 4,
            height: 4,
        };
        assert_eq!(err.to_string(), "Pixel (7, 1) is out of range for a 4x4 image");
    }
}
