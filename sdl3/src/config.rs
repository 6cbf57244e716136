// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Build-time configuration and path resolution for the SDL3 libraries.
//!
//! Resolution order for each library:
//!
//! 1. the runtime environment variable (`SDL3_LIBRARY_PATH`,
//!    `SDL3_MIXER_LIBRARY_PATH`), taken verbatim;
//! 2. the directory captured from `SDL3_LIB_DIR` when the crate was built,
//!    joined with the platform library name;
//! 3. the bare platform library name, left to the system loader's search path.

use std::ffi::OsString;
use std::path::PathBuf;

// Build script generates constants.rs with the library names and SDL3_LIB_DIR
include!(concat!(env!("OUT_DIR"), "/constants.rs"));

/// Runtime override for the SDL3 core library path.
pub const SDL3_LIBRARY_PATH_ENV: &str = "SDL3_LIBRARY_PATH";

/// Runtime override for the SDL3_mixer library path.
pub const SDL3_MIXER_LIBRARY_PATH_ENV: &str = "SDL3_MIXER_LIBRARY_PATH";

/// Returns the path to the SDL3 core shared library.
///
/// # Examples
///
/// ```no_run
/// use sdl3::config::get_sdl3_library_path;
/// use sdl3::load_api;
///
/// # fn main() -> Result<(), sdl3::Error> {
/// let api = load_api(get_sdl3_library_path())?;
/// # Ok(())
/// # }
/// ```
pub fn get_sdl3_library_path() -> PathBuf {
    resolve(
        std::env::var_os(SDL3_LIBRARY_PATH_ENV),
        SDL3_LIB_DIR,
        SDL3_LIBRARY_NAME,
    )
}

/// Returns the path to the SDL3_mixer shared library.
pub fn get_sdl3_mixer_library_path() -> PathBuf {
    resolve(
        std::env::var_os(SDL3_MIXER_LIBRARY_PATH_ENV),
        SDL3_LIB_DIR,
        SDL3_MIXER_LIBRARY_NAME,
    )
}

fn resolve(over: Option<OsString>, lib_dir: Option<&str>, name: &str) -> PathBuf {
    match (over, lib_dir) {
        (Some(path), _) if !path.is_empty() => PathBuf::from(path),
        (_, Some(dir)) => PathBuf::from(dir).join(name),
        _ => PathBuf::from(name),
    }
}
