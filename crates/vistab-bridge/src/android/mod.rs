// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android JNI entry points.
//
// Loaded by the managed side as `System.loadLibrary("vistab_bridge")` and
// called through the `com.vistab.vision.NativeVision` declarations. Both
// entry points are synchronous and reentrant; the buffers behind the handles
// must not be mutated or freed by another thread while a call is in flight.
//
// Nothing unwinds across this boundary: conversion failures are already
// collapsed to a boolean in `api`, and a panic inside the native code is
// caught here and reported as `JNI_FALSE`.

#![cfg(target_os = "android")]

use jni::objects::JClass;
use jni::sys::{JNI_FALSE, JNI_TRUE, JNI_VERSION_1_6, jboolean, jint, jlong, jstring};
use jni::{JNIEnv, JavaVM};

use vistab_core::config::DiagnosticsConfig;

use crate::{api, diagnostics, handle};

/// Library load hook. Installs the logcat diagnostic sink.
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut std::ffi::c_void) -> jint {
    diagnostics::init_diagnostics(&DiagnosticsConfig::default());
    tracing::info!("vistab native bridge loaded");
    JNI_VERSION_1_6
}

/// `String NativeVision.nativeVersion()`
///
/// Returns the version string of the linked vision engine as a Java UTF
/// string. Ownership of the string transfers to the JVM on return.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_vistab_vision_NativeVision_nativeVersion(
    mut env: JNIEnv,
    _class: JClass,
) -> jstring {
    let version = api::version_query();
    match env.new_string(&version) {
        Ok(s) => s.into_raw(),
        Err(err) => {
            tracing::error!(error = %err, "failed to hand version string to the JVM");
            std::ptr::null_mut()
        }
    }
}

/// `boolean NativeVision.nativeConvertToGray(long srcAddr, long dstAddr)`
///
/// Converts the 4-channel RGBA buffer at `srcAddr` into the 1-channel gray
/// buffer at `dstAddr`. Returns `JNI_FALSE` on any failure; the failure
/// detail is logged and discarded.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_vistab_vision_NativeVision_nativeConvertToGray(
    _env: JNIEnv,
    _class: JClass,
    src_addr: jlong,
    dst_addr: jlong,
) -> jboolean {
    let outcome = std::panic::catch_unwind(|| {
        // SAFETY: per the bridge contract the caller passes addresses of
        // live, distinct `ImageMat` values and does not touch them while the
        // call is in flight. Null and aliased pairs are rejected inside
        // `resolve_pair`.
        let (src, dst) = match unsafe { handle::resolve_pair(src_addr, dst_addr) } {
            Ok(pair) => pair,
            Err(err) => {
                tracing::error!(error = %err, "handle resolution failed");
                return false;
            }
        };
        api::grayscale_convert(src, dst)
    });

    match outcome {
        Ok(true) => JNI_TRUE,
        Ok(false) => JNI_FALSE,
        Err(_) => {
            tracing::error!("panic caught at the convert boundary");
            JNI_FALSE
        }
    }
}
