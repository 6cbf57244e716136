// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Text crossing the boundary as NUL-terminated UTF-8.

use std::{
    ffi::{CStr, CString},
    os::raw::c_char,
};

use crate::{Error, Result, api::SdlApi, marshal::buffer::NativeBuffer};

/// Longest encoded text (terminator included) that is staged on the stack.
pub(crate) const MAX_STACK_ALLOCATION: usize = 384;

/// Runs `f` with a NUL-terminated copy of `text`.
///
/// Interior NUL bytes are rejected before `f` runs. The pointer is only valid
/// inside `f`.
pub(crate) fn with_c_str<T>(text: &str, f: impl FnOnce(*const c_char) -> Result<T>) -> Result<T> {
    let bytes = text.as_bytes();
    if let Some(position) = bytes.iter().position(|&byte| byte == 0) {
        return Err(Error::NulString { position });
    }

    if bytes.len() < MAX_STACK_ALLOCATION {
        let mut buffer = [0u8; MAX_STACK_ALLOCATION];
        buffer[..bytes.len()].copy_from_slice(bytes);
        f(buffer.as_ptr().cast())
    } else {
        let owned = CString::new(bytes)?;
        f(owned.as_ptr())
    }
}

/// [`with_c_str`] where `None` is passed as a NULL pointer.
pub(crate) fn with_opt_c_str<T>(
    text: Option<&str>,
    f: impl FnOnce(*const c_char) -> Result<T>,
) -> Result<T> {
    match text {
        Some(text) => with_c_str(text, f),
        None => f(std::ptr::null()),
    }
}

/// Copies a string SDL keeps ownership of. NULL maps to `None`.
///
/// # Safety
///
/// A non-NULL `ptr` must point to a NUL-terminated string that stays valid
/// for the duration of this call.
pub(crate) unsafe fn from_borrowed(ptr: *const c_char) -> Result<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }
    let text = unsafe { CStr::from_ptr(ptr) }.to_str()?;
    Ok(Some(text.to_owned()))
}

/// Copies and frees a string the caller owns. NULL maps to `None`.
///
/// The allocation is freed even if decoding fails.
///
/// # Safety
///
/// A non-NULL `ptr` must be a NUL-terminated string allocated by SDL that no
/// one else will free.
pub(crate) unsafe fn take_owned(api: &SdlApi, ptr: *mut c_char) -> Result<Option<String>> {
    let _buffer = NativeBuffer::new(api, ptr.cast());
    unsafe { from_borrowed(ptr) }
}

/// Calls an entry point returning a caller-owned string that may be NULL
/// either because there is nothing to return or because the call failed.
///
/// The error slot is cleared first and consulted only for a NULL result.
pub(crate) fn fetch_owned(
    api: &SdlApi,
    function: &'static str,
    call: impl FnOnce() -> core::result::Result<*mut c_char, sdl3_sys::MissingSymbol>,
) -> Result<Option<String>> {
    api.clear_last_error()?;
    let ptr = call()?;
    if ptr.is_null() {
        api.check_error_set(function)?;
        return Ok(None);
    }
    unsafe { take_owned(api, ptr) }
}
