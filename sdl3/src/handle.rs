// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Ownership-tagged wrapper around native resource pointers.

use std::rc::Rc;

use crate::Result;

/// Who is responsible for releasing a native resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// SDL or another handle owns the resource; this handle never releases it.
    Borrowed,
    /// This handle releases the resource exactly once.
    Owned,
}

/// A native resource type and the entry point that releases it.
pub(crate) trait NativeResource {
    /// State that must outlive the resource (the initialised library).
    type Context;

    /// Short name used in log messages.
    const KIND: &'static str;

    /// Releases `raw`. Called at most once per resource.
    ///
    /// # Safety
    ///
    /// `raw` must be a live, owned resource of this type.
    unsafe fn release(context: &Self::Context, raw: *mut Self) -> Result<()>;
}

/// A native resource pointer tagged with its [`Ownership`].
///
/// The pointer is nulled once released, so release runs at most once whether
/// it happens through an explicit `close()`/`destroy()` or on drop.
pub(crate) struct Handle<T: NativeResource> {
    context: Rc<T::Context>,
    raw: *mut T,
    ownership: Ownership,
}

impl<T: NativeResource> Handle<T> {
    pub(crate) fn new(context: Rc<T::Context>, raw: *mut T, ownership: Ownership) -> Self {
        Self {
            context,
            raw,
            ownership,
        }
    }

    pub(crate) fn context(&self) -> &T::Context {
        &self.context
    }

    pub(crate) fn shared_context(&self) -> &Rc<T::Context> {
        &self.context
    }

    pub(crate) fn as_ptr(&self) -> *mut T {
        self.raw
    }

    pub(crate) fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Releases an owned resource now. Borrowed resources are only forgotten.
    pub(crate) fn release(&mut self) -> Result<()> {
        let raw = std::mem::replace(&mut self.raw, std::ptr::null_mut());
        if raw.is_null() || self.ownership == Ownership::Borrowed {
            return Ok(());
        }
        unsafe { T::release(&self.context, raw) }
    }
}

impl<T: NativeResource> Drop for Handle<T> {
    fn drop(&mut self) {
        if !self.raw.is_null()
            && let Err(err) = self.release()
        {
            tracing::error!("Failed to release SDL {}: {:?}", T::KIND, err);
        }
    }
}

impl<T: NativeResource> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(T::KIND)
            .field("raw", &self.raw)
            .field("ownership", &self.ownership)
            .finish()
    }
}
