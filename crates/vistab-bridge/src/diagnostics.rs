// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Diagnostic sink installation for both sides of the bridge.

use vistab_core::config::DiagnosticsConfig;

/// Install the diagnostic log sink for this process.
///
/// On Android this wires `android_logger` tagged with the configured
/// component identifier; `tracing` events reach logcat through tracing's
/// `log` compatibility layer, which only fires while no tracing subscriber
/// is installed, so no subscriber is set up on that path. Elsewhere a
/// `tracing-subscriber` fmt layer with env-filter support is installed.
///
/// Calling this more than once is a no-op.
pub fn init_diagnostics(config: &DiagnosticsConfig) {
    #[cfg(target_os = "android")]
    {
        let max_level = if config.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(max_level)
                .with_tag(config.component_tag.as_str()),
        );
    }

    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::EnvFilter;

        let default_directive = if config.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive));
        // try_init fails if a global subscriber is already set. That is the
        // repeat-call case, not an error worth surfacing.
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialisation_is_harmless() {
        let config = DiagnosticsConfig::default();
        init_diagnostics(&config);
        init_diagnostics(&config);
    }
}
