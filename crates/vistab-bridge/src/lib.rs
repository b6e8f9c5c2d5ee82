// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Vistab — Native platform bridge for the vision engine.
//
// Exposes two operations to the managed (Android/ART) side across JNI: a
// version-string query and an RGBA-to-gray conversion over opaque handles to
// caller-owned image buffers. Both are stateless, synchronous pass-throughs
// into `vistab-vision`; the only control-flow transformation at the boundary
// is the collapse of every conversion failure to `false`.
//
// Non-Android builds keep the same entry logic available as plain Rust
// functions so host-side tests and tooling can exercise it.

pub mod api;
pub mod diagnostics;
pub mod handle;

#[cfg(target_os = "android")]
pub mod android;

pub use api::{grayscale_convert, version_query};
pub use diagnostics::init_diagnostics;
