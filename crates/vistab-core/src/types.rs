// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Vistab vision bridge.

use serde::{Deserialize, Serialize};

/// Component identifier tagged onto every entry in the platform log sink.
pub const COMPONENT_TAG: &str = "VistabVision";

/// Pixel layout of an image buffer handed across the bridge.
///
/// All formats use 8-bit channels, tightly packed and row-major. The bridge
/// only ever deals with the two layouts the conversion entry point accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PixelFormat {
    /// Four interleaved channels per pixel (red/green/blue/alpha).
    Rgba8,
    /// A single intensity channel per pixel.
    Gray8,
}

impl PixelFormat {
    /// Number of interleaved channels per pixel.
    pub fn channels(self) -> u32 {
        match self {
            Self::Rgba8 => 4,
            Self::Gray8 => 1,
        }
    }

    /// Bytes occupied by one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        self.channels() as usize
    }
}

impl std::fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rgba8 => write!(f, "rgba8"),
            Self::Gray8 => write!(f, "gray8"),
        }
    }
}

/// Identifying version of the linked vision engine.
///
/// The `Display` form is the exact string handed across the foreign-function
/// boundary; the structured form stays available host-side for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
}

impl VersionInfo {
    /// JSON rendering for host-side tooling.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

// -- Tests --------------------------------------------------------------------
