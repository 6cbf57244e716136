// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

use std::os::raw::c_void;

use crate::api::SdlApi;

/// Scoped owner of an allocation SDL handed to the caller.
///
/// Frees the block with `SDL_free` exactly once when dropped, on every exit
/// path of the function that holds it.
pub(crate) struct NativeBuffer<'a> {
    api: &'a SdlApi,
    ptr: *mut c_void,
}

impl<'a> NativeBuffer<'a> {
    pub(crate) fn new(api: &'a SdlApi, ptr: *mut c_void) -> Self {
        Self { api, ptr }
    }
}

impl Drop for NativeBuffer<'_> {
    fn drop(&mut self) {
        if !self.ptr.is_null()
            && let Err(err) = unsafe { self.api.free(self.ptr) }
        {
            tracing::error!("Failed to free SDL allocation: {err}");
        }
    }
}
