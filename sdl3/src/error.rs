// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for SDL operations.
//!
//! SDL reports failure through a sentinel return value (NULL, `false`, a
//! negative count) and leaves a message in its thread-local last-error slot.
//! The adapter turns that pair into [`Error::Call`] at the point of the call.

use std::ffi::NulError;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when using the SDL API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A native entry point returned its failure sentinel.
    ///
    /// `message` is the text `SDL_GetError` returned immediately after the call.
    #[error("{function} failed: {message}")]
    Call {
        /// The C entry point that failed, e.g. `SDL_CreateWindow`.
        function: &'static str,
        /// The message SDL recorded for this failure.
        message: String,
    },

    /// The loaded library does not export the requested entry point.
    #[error("Missing symbol: {0}")]
    MissingSymbol(&'static str),

    /// Host text contains an interior NUL byte and cannot cross the boundary.
    #[error("Text contains a NUL byte at position {position}")]
    NulString {
        /// Byte offset of the first NUL.
        position: usize,
    },

    /// Native text is not valid UTF-8.
    #[error("Invalid UTF-8 from native code: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// An integer that is not a member of the requested constant table.
    #[error("Invalid {kind} value: {value}")]
    InvalidValue {
        /// Name of the table, e.g. `GamepadAxis`.
        kind: &'static str,
        /// The offending raw value.
        value: i64,
    },

    /// A gamepad mapping string could not be parsed.
    #[error("Invalid gamepad mapping: {0}")]
    Mapping(String),

    /// Reading a mapping source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A generic error for adapter-level failures not reported by SDL itself.
    #[error("Other error: {0}")]
    Other(String),

    /// Failed to load the SDL dynamic library.
    #[error("Loading library: {0}")]
    LibLoading(#[from] libloading::Error),
}

impl From<NulError> for Error {
    fn from(error: NulError) -> Self {
        Error::NulString {
            position: error.nul_position(),
        }
    }
}

impl From<sdl3_sys::MissingSymbol> for Error {
    fn from(missing: sdl3_sys::MissingSymbol) -> Self {
        Error::MissingSymbol(missing.0)
    }
}

impl Error {
    /// Returns the SDL message for [`Error::Call`] failures.
    pub fn sdl_message(&self) -> Option<&str> {
        match self {
            Error::Call { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Returns the failing entry point for [`Error::Call`] failures.
    pub fn function(&self) -> Option<&'static str> {
        match self {
            Error::Call { function, .. } => Some(function),
            _ => None,
        }
    }
}
