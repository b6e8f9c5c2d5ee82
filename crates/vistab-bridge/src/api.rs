// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-independent bridge entry logic.
//
// The JNI layer in `android` is a thin shell over these two functions.
// Handle resolution happens at the FFI edge; the logging, the delegation
// into the vision engine, and the collapse of errors to a boolean all live
// here where host builds can exercise them.

use tracing::{error, info};
use vistab_vision::ImageMat;

/// Query the version string of the linked vision engine.
///
/// No failure path: the underlying lookup is a pure in-memory constant.
pub fn version_query() -> String {
    info!("querying vision engine version");
    let version = vistab_vision::version_string();
    info!(version = %version, "vision engine version resolved");
    version
}

/// Convert a 4-channel RGBA buffer into a 1-channel gray buffer.
///
/// Returns `true` on success. Every failure collapses to `false` with no
/// distinction between causes; the message is written to the error log
/// channel and otherwise discarded. No error detail crosses the bridge.
pub fn grayscale_convert(src: &ImageMat, dst: &mut ImageMat) -> bool {
    match vistab_vision::convert_to_gray(src, dst) {
        Ok(()) => true,
        Err(err) => {
            error!(error = %err, "grayscale conversion failed");
            false
        }
    }
}

// -- Tests --------------------------------------------------------------------
