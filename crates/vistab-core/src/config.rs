// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge diagnostics configuration.

use serde::{Deserialize, Serialize};

/// Settings for the bridge diagnostic channels.
///
/// The bridge itself has no other configurable behaviour (both entry points
/// are fixed pass-throughs), so this covers only how log entries are emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Component identifier tagged onto entries in the platform log sink.
    pub component_tag: String,
    /// Emit debug-level entries in addition to info and error.
    pub verbose: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            component_tag: crate::types::COMPONENT_TAG.to_string(),
            verbose: false,
        }
    }
}
