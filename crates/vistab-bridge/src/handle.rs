// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Opaque numeric handles to caller-owned image buffers.
//
// The managed side holds each `ImageMat` as a raw address (a `long` on the
// Java side) and passes it back for every conversion call. The bridge never
// allocates or frees through these handles; it borrows the referent for the
// duration of one call and drops the borrow on return.

use vistab_core::error::{Result, VistabError};
use vistab_vision::ImageMat;

/// Address of a caller-owned `ImageMat`, as carried across the FFI boundary.
pub type MatHandle = i64;

/// Handle for a buffer owned by the caller.
///
/// The borrow ends as soon as the returned value is produced; the handle is
/// only meaningful while the caller keeps the `ImageMat` alive and pinned at
/// this address.
pub fn handle_of(mat: &mut ImageMat) -> MatHandle {
    mat as *mut ImageMat as MatHandle
}

/// Resolve a source/destination handle pair to borrows for one conversion.
///
/// Null handles and aliased pairs are rejected: handing safe code a `&` and
/// a `&mut` to the same buffer would be undefined behaviour, so the aliasing
/// precondition from the bridge contract is checked here rather than assumed.
///
/// # Safety
///
/// Each non-null, non-aliased handle must be the address of a live `ImageMat`
/// that no other thread mutates or frees until the returned borrows are
/// dropped. Serializing access to a buffer is entirely the caller's
/// responsibility.
pub unsafe fn resolve_pair<'a>(
    src: MatHandle,
    dst: MatHandle,
) -> Result<(&'a ImageMat, &'a mut ImageMat)> {
    if src == 0 || dst == 0 {
        return Err(VistabError::Bridge("null buffer handle".into()));
    }
    if src == dst {
        return Err(VistabError::Bridge(
            "source and destination handles alias the same buffer".into(),
        ));
    }
    // SAFETY: both addresses are non-null and distinct; the caller guarantees
    // they point at live `ImageMat` values with no concurrent access.
    let src_ref = unsafe { &*(src as *const ImageMat) };
    let dst_ref = unsafe { &mut *(dst as *mut ImageMat) };
    Ok((src_ref, dst_ref))
}

// -- Tests --------------------------------------------------------------------
