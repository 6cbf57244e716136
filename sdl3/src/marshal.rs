// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Conversions between host values and the shapes SDL passes across its ABI.
//!
//! Arrays come back from SDL as a pointer plus an out-parameter count. The
//! allocation belongs to the caller and is always a single block: arrays of
//! strings or records carry their payload inside the same allocation, so only
//! the outer pointer is ever freed.

pub(crate) mod buffer;
pub(crate) mod text;

use std::os::raw::c_int;

use crate::{Result, api::SdlApi, marshal::buffer::NativeBuffer};

/// Copies `count` elements out of a caller-owned array and frees it.
///
/// A NULL pointer or a non-positive count yields an empty vector and the
/// pointer is not read. The allocation is freed either way.
///
/// # Safety
///
/// A non-NULL `ptr` must point to at least `count` initialised elements
/// allocated by SDL.
pub(crate) unsafe fn take_array<T: Copy>(api: &SdlApi, ptr: *mut T, count: c_int) -> Vec<T> {
    let _buffer = NativeBuffer::new(api, ptr.cast());
    if ptr.is_null() || count <= 0 {
        return Vec::new();
    }
    unsafe { std::slice::from_raw_parts(ptr, count as usize) }.to_vec()
}

/// Like [`take_array`] for arrays of pointers, mapping each non-NULL element.
///
/// The allocation is freed even when `convert` fails part way through.
pub(crate) unsafe fn take_pointer_array<T, U>(
    api: &SdlApi,
    ptr: *mut *mut T,
    count: c_int,
    mut convert: impl FnMut(*mut T) -> Result<U>,
) -> Result<Vec<U>> {
    let _buffer = NativeBuffer::new(api, ptr.cast());
    if ptr.is_null() || count <= 0 {
        return Ok(Vec::new());
    }
    let elements = unsafe { std::slice::from_raw_parts(ptr, count as usize) };
    elements
        .iter()
        .filter(|element| !element.is_null())
        .map(|&element| convert(element))
        .collect()
}

/// Calls an entry point returning a caller-owned array and copies it out.
///
/// SDL returns NULL both for "nothing to report" and for failure, so the error
/// slot is cleared first and consulted if the result is NULL.
pub(crate) fn fetch_array<T: Copy>(
    api: &SdlApi,
    function: &'static str,
    call: impl FnOnce(*mut c_int) -> core::result::Result<*mut T, sdl3_sys::MissingSymbol>,
) -> Result<Vec<T>> {
    api.clear_last_error()?;
    let mut count: c_int = 0;
    let ptr = call(&mut count)?;
    if ptr.is_null() {
        api.check_error_set(function)?;
        return Ok(Vec::new());
    }
    Ok(unsafe { take_array(api, ptr, count) })
}

/// [`fetch_array`] for entry points returning an array of pointers.
pub(crate) fn fetch_pointer_array<T, U>(
    api: &SdlApi,
    function: &'static str,
    call: impl FnOnce(*mut c_int) -> core::result::Result<*mut *mut T, sdl3_sys::MissingSymbol>,
    convert: impl FnMut(*mut T) -> Result<U>,
) -> Result<Vec<U>> {
    api.clear_last_error()?;
    let mut count: c_int = 0;
    let ptr = call(&mut count)?;
    if ptr.is_null() {
        api.check_error_set(function)?;
        return Ok(Vec::new());
    }
    unsafe { take_pointer_array(api, ptr, count, convert) }
}

/// Native booleans: zero is false, anything else is true.
pub(crate) fn from_bool(value: sdl3_sys::Bool) -> bool {
    value != sdl3_sys::SDL_FALSE
}
