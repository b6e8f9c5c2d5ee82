// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Owned image buffer referenced by the opaque handles the bridge accepts.

use image::{GrayImage, ImageBuffer, Rgba, RgbaImage};
use vistab_core::error::{Result, VistabError};
use vistab_core::types::PixelFormat;

/// An owned, tightly packed, row-major 8-bit image buffer.
///
/// `ImageMat` values are allocated and freed by the caller; the bridge only
/// ever borrows one for the duration of a single conversion call. There is no
/// stride or padding: row `y` starts at byte `y * width * bytes_per_pixel`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMat {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl ImageMat {
    // -- Construction ---------------------------------------------------------

    /// Allocate a zero-filled buffer of the given dimensions and format.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(format.bytes_per_pixel()))
            .ok_or_else(|| {
                VistabError::Mat(format!("buffer size overflow for {width}x{height} {format}"))
            })?;
        Ok(Self {
            width,
            height,
            format,
            data: vec![0; len],
        })
    }

    /// Wrap a decoded RGBA image.
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Rgba8,
            data: image.into_raw(),
        }
    }

    /// Wrap a decoded grayscale image.
    pub fn from_gray(image: GrayImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Gray8,
            data: image.into_raw(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Buffer width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel layout of the buffer.
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Whether the buffer holds zero pixels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the raw pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw pixel bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow the buffer as a zero-copy RGBA view for the conversion path.
    ///
    /// Fails if the buffer is not `Rgba8`.
    pub fn as_rgba_view(&self) -> Result<ImageBuffer<Rgba<u8>, &[u8]>> {
        if self.format != PixelFormat::Rgba8 {
            return Err(VistabError::Mat(format!(
                "expected an rgba8 buffer, got {}",
                self.format
            )));
        }
        ImageBuffer::from_raw(self.width, self.height, self.data.as_slice()).ok_or_else(|| {
            VistabError::Mat(format!(
                "rgba buffer length {} does not match {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn new_gray_buffer_is_zero_filled() {
        let mat = ImageMat::new(8, 4, PixelFormat::Gray8).expect("allocation");
        assert_eq!(mat.dimensions(), (8, 4));
        assert_eq!(mat.data().len(), 8 * 4);
        assert!(mat.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn rgba_buffer_accounts_for_four_channels() {
        let mat = ImageMat::new(10, 3, PixelFormat::Rgba8).expect("allocation");
        assert_eq!(mat.data().len(), 10 * 3 * 4);
    }

    #[test]
    fn from_rgba_preserves_dimensions_and_bytes() {
        let image = RgbaImage::from_pixel(5, 7, Rgba([1, 2, 3, 4]));
        let raw = image.as_raw().clone();
        let mat = ImageMat::from_rgba(image);

        assert_eq!(mat.dimensions(), (5, 7));
        assert_eq!(mat.format(), PixelFormat::Rgba8);
        assert_eq!(mat.data(), raw.as_slice());
    }

    #[test]
    fn rgba_view_rejects_gray_buffers() {
        let mat = ImageMat::new(4, 4, PixelFormat::Gray8).expect("allocation");
        assert!(mat.as_rgba_view().is_err());
    }

    #[test]
    fn rgba_view_of_empty_buffer_is_valid() {
        let mat = ImageMat::new(0, 0, PixelFormat::Rgba8).expect("allocation");
        let view = mat.as_rgba_view().expect("empty view");
        assert_eq!(view.dimensions(), (0, 0));
    }
}
