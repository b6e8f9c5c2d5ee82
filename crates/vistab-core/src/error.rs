// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Vistab.

use thiserror::Error;

/// Top-level error type for all Vistab operations.
#[derive(Debug, Error)]
pub enum VistabError {
    // -- Vision errors --
    #[error("image buffer error: {0}")]
    Mat(String),

    #[error("color conversion failed: {0}")]
    Conversion(String),

    // -- Serialization --
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, VistabError>;
