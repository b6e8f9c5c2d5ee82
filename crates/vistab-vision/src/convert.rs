// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Grayscale conversion and the version constant reported over the bridge.

use image::imageops;
use tracing::{debug, instrument};
use vistab_core::error::{Result, VistabError};
use vistab_core::types::{PixelFormat, VersionInfo};

use crate::mat::ImageMat;

/// Name the version query reports for the linked vision engine.
const ENGINE_NAME: &str = "vistab-vision";

/// Convert a 4-channel RGBA buffer into a 1-channel gray buffer, in place.
///
/// The destination must already be allocated with the same dimensions as the
/// source. The luma weighting is the `image` crate's own transform; this
/// function adds nothing beyond validation and the copy into `dst`.
///
/// Mismatched formats or dimensions are validation errors; the destination
/// is left untouched, never resized or partially written.
#[instrument(skip_all, fields(width = src.width(), height = src.height()))]
pub fn convert_to_gray(src: &ImageMat, dst: &mut ImageMat) -> Result<()> {
    if src.format() != PixelFormat::Rgba8 {
        return Err(VistabError::Conversion(format!(
            "source must be {}, got {}",
            PixelFormat::Rgba8,
            src.format()
        )));
    }
    if dst.format() != PixelFormat::Gray8 {
        return Err(VistabError::Conversion(format!(
            "destination must be {}, got {}",
            PixelFormat::Gray8,
            dst.format()
        )));
    }
    if src.dimensions() != dst.dimensions() {
        return Err(VistabError::Conversion(format!(
            "destination is {}x{} but source is {}x{}",
            dst.width(),
            dst.height(),
            src.width(),
            src.height()
        )));
    }

    let rgba = src.as_rgba_view()?;
    let gray = imageops::grayscale(&rgba);
    dst.data_mut().copy_from_slice(gray.as_raw());

    debug!("grayscale conversion complete");
    Ok(())
}

/// Structured version of the linked vision engine.
pub fn version_info() -> VersionInfo {
    VersionInfo {
        name: ENGINE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Version string handed across the foreign-function boundary.
///
/// A pure in-memory constant lookup, identical on every call.
pub fn version_string() -> String {
    version_info().to_string()
}

// -- Tests --------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Deterministic RGBA test pattern.
    fn gradient_rgba(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([
                (x * 7 % 256) as u8,
                (y * 13 % 256) as u8,
                ((x + y) * 3 % 256) as u8,
                255,
            ])
        })
    }

    #[test]
    fn conversion_matches_the_engines_luma_transform() {
        let rgba = gradient_rgba(32, 24);
        let expected = imageops::grayscale(&rgba);

        let src = ImageMat::from_rgba(rgba);
        let mut dst = ImageMat::new(32, 24, PixelFormat::Gray8).expect("gray buffer");
        convert_to_gray(&src, &mut dst).expect("conversion should succeed");

        assert_eq!(dst.data(), expected.as_raw().as_slice());
    }

    #[test]
    fn repeated_conversion_is_bit_identical() {
        let src = ImageMat::from_rgba(gradient_rgba(20, 20));
        let mut first = ImageMat::new(20, 20, PixelFormat::Gray8).expect("gray buffer");
        let mut second = ImageMat::new(20, 20, PixelFormat::Gray8).expect("gray buffer");

        convert_to_gray(&src, &mut first).expect("first run");
        convert_to_gray(&src, &mut second).expect("second run");

        assert_eq!(first.data(), second.data());
    }

    #[test]
    fn mismatched_destination_dimensions_fail_and_leave_dst_untouched() {
        let src = ImageMat::from_rgba(gradient_rgba(16, 16));
        let mut dst = ImageMat::new(8, 8, PixelFormat::Gray8).expect("gray buffer");

        let err = convert_to_gray(&src, &mut dst).unwrap_err();
        assert!(matches!(err, VistabError::Conversion(_)));
        assert!(dst.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn wrong_destination_format_fails() {
        let src = ImageMat::from_rgba(gradient_rgba(16, 16));
        let mut dst = ImageMat::new(16, 16, PixelFormat::Rgba8).expect("rgba buffer");

        assert!(convert_to_gray(&src, &mut dst).is_err());
    }

    #[test]
    fn wrong_source_format_fails() {
        let src = ImageMat::new(16, 16, PixelFormat::Gray8).expect("gray buffer");
        let mut dst = ImageMat::new(16, 16, PixelFormat::Gray8).expect("gray buffer");

        assert!(convert_to_gray(&src, &mut dst).is_err());
    }

    #[test]
    fn empty_pair_converts_trivially() {
        let src = ImageMat::new(0, 0, PixelFormat::Rgba8).expect("rgba buffer");
        let mut dst = ImageMat::new(0, 0, PixelFormat::Gray8).expect("gray buffer");

        convert_to_gray(&src, &mut dst).expect("empty conversion");
        assert!(dst.is_empty());
    }

    /// Conversions on disjoint buffer pairs from separate threads must not
    /// interfere; there is no shared state to corrupt.
    #[test]
    fn concurrent_conversions_on_disjoint_pairs() {
        let rgba_a = gradient_rgba(64, 48);
        let rgba_b = gradient_rgba(48, 64);
        let expected_a = imageops::grayscale(&rgba_a);
        let expected_b = imageops::grayscale(&rgba_b);

        let src_a = ImageMat::from_rgba(rgba_a);
        let src_b = ImageMat::from_rgba(rgba_b);
        let mut dst_a = ImageMat::new(64, 48, PixelFormat::Gray8).expect("gray buffer");
        let mut dst_b = ImageMat::new(48, 64, PixelFormat::Gray8).expect("gray buffer");

        std::thread::scope(|scope| {
            scope.spawn(|| convert_to_gray(&src_a, &mut dst_a).expect("pair A"));
            scope.spawn(|| convert_to_gray(&src_b, &mut dst_b).expect("pair B"));
        });

        assert_eq!(dst_a.data(), expected_a.as_raw().as_slice());
        assert_eq!(dst_b.data(), expected_b.as_raw().as_slice());
    }

    #[test]
    fn version_string_is_non_empty_and_stable() {
        let first = version_string();
        assert!(!first.is_empty());
        assert_eq!(first, version_string());
        assert!(first.starts_with("vistab-vision "));
    }
}
