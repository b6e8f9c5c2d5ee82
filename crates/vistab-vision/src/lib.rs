// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// vistab-vision — Image buffers and color conversion for the Vistab engine.
//
// Owns the `ImageMat` buffer type the bridge hands out opaque handles to,
// the single RGBA-to-gray conversion entry point, and the version constant
// reported across the foreign-function boundary. The luma transform itself
// is delegated to the `image` crate.

pub mod convert;
pub mod mat;

pub use convert::{convert_to_gray, version_info, version_string};
pub use mat::ImageMat;
