// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Loading the SDL3 entry-point table and the checks every call goes through.

use std::{
    ffi::{CStr, OsStr},
    ops::Deref,
    os::raw::c_char,
    ptr::NonNull,
    sync::Arc,
};

use tracing::{debug, warn};

use crate::{Error, Result, marshal::text};

/// Shared handle to a loaded SDL3 library.
pub type SdlApiHandle = Arc<SdlApi>;

/// The resolved SDL3 core entry points.
///
/// Dereferences to the raw [`sdl3_sys::Api`] table, whose methods are all
/// `unsafe`. The inherent methods here are the safe surface.
#[derive(Debug)]
pub struct SdlApi {
    table: sdl3_sys::Api,
}

/// Loads the SDL3 core library from `path`.
///
/// Entry points that the library does not export are logged and left
/// unresolved; calling an operation that needs one returns
/// [`Error::MissingSymbol`].
///
/// # Examples
///
/// ```no_run
/// use sdl3::{InitFlags, Sdl, config::get_sdl3_library_path, load_api};
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// let sdl = Sdl::init(api, InitFlags::VIDEO | InitFlags::EVENTS)?;
/// # Ok(())
/// # }
/// ```
pub fn load_api(path: impl AsRef<OsStr>) -> Result<SdlApiHandle> {
    let path = path.as_ref();
    let table = unsafe { sdl3_sys::Api::new(path) }?;
    debug!("Loaded SDL3 library from {}", path.to_string_lossy());
    for symbol in table.missing_symbols() {
        warn!("SDL3 library does not export {symbol}");
    }
    Ok(Arc::new(SdlApi::from_table(table)))
}

impl SdlApi {
    /// Wraps an entry-point table that was populated by other means.
    pub fn from_table(table: sdl3_sys::Api) -> Self {
        Self { table }
    }

    /// The raw entry-point table, for calls whose safe wrapper shares its name.
    pub(crate) fn raw(&self) -> &sdl3_sys::Api {
        &self.table
    }

    /// Returns a copy of the calling thread's last-error message.
    ///
    /// The message is empty when no error is set.
    pub fn last_error(&self) -> Result<String> {
        let message = unsafe { self.get_error() }?;
        Ok(unsafe { lossy(message) })
    }

    /// Clears the calling thread's last-error message.
    pub fn clear_last_error(&self) -> Result<()> {
        unsafe { self.clear_error() }?;
        Ok(())
    }

    /// Builds the failure for `function` from the last-error slot.
    ///
    /// Must run before any other native call on this thread, or the message
    /// may already have been replaced.
    pub(crate) fn call_failed(&self, function: &'static str) -> Error {
        let message = match unsafe { self.get_error() } {
            Ok(message) => unsafe { lossy(message) },
            Err(_) => String::new(),
        };
        call_error(function, message)
    }

    /// Maps a boolean sentinel to a result.
    pub(crate) fn check_bool(&self, function: &'static str, ok: sdl3_sys::Bool) -> Result<()> {
        if ok != sdl3_sys::SDL_FALSE {
            Ok(())
        } else {
            Err(self.call_failed(function))
        }
    }

    /// Maps a NULL sentinel to a result.
    pub(crate) fn check_non_null<T>(
        &self,
        function: &'static str,
        ptr: *mut T,
    ) -> Result<NonNull<T>> {
        NonNull::new(ptr).ok_or_else(|| self.call_failed(function))
    }

    /// Disambiguates a NULL or empty result when the error slot was cleared
    /// before the call: a message now present means the call failed.
    pub(crate) fn check_error_set(&self, function: &'static str) -> Result<()> {
        let message = self.last_error()?;
        if message.is_empty() {
            Ok(())
        } else {
            Err(Error::Call { function, message })
        }
    }

    /// Returns the version of the loaded library.
    pub fn version(&self) -> Result<Version> {
        Ok(Version::from_raw(unsafe { self.get_version() }?))
    }

    /// Returns the source revision the library was built from.
    pub fn revision(&self) -> Result<Option<String>> {
        unsafe { text::from_borrowed(self.get_revision()?) }
    }

    /// Returns the name of the platform the library was built for.
    pub fn platform(&self) -> Result<Option<String>> {
        unsafe { text::from_borrowed(self.get_platform()?) }
    }
}

impl Deref for SdlApi {
    type Target = sdl3_sys::Api;

    fn deref(&self) -> &Self::Target {
        &self.table
    }
}

pub(crate) fn call_error(function: &'static str, message: String) -> Error {
    let message = if message.is_empty() {
        format!("{function} failed without setting an error message")
    } else {
        message
    };
    Error::Call { function, message }
}

/// Copies a borrowed error message, replacing invalid UTF-8.
unsafe fn lossy(message: *const c_char) -> String {
    if message.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(message) }
        .to_string_lossy()
        .into_owned()
}

/// Library version as reported by `SDL_GetVersion`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// Decodes `major * 1000000 + minor * 1000 + micro`.
    pub fn from_raw(raw: i32) -> Self {
        let raw = raw.max(0) as u32;
        Self {
            major: raw / 1_000_000,
            minor: (raw / 1_000) % 1_000,
            micro: raw % 1_000,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
