// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! # sdl3-sys: Raw FFI bindings to the SDL3 C library
//!
//! This crate provides low-level, unsafe Rust bindings to SDL3 and SDL3_mixer.
//! Entry points are resolved at runtime with `libloading`; nothing is linked at
//! build time.
//!
//! ## Overview
//!
//! `sdl3-sys` exposes:
//! - Opaque handle types (`Window`, `Renderer`, `Texture`, `Gamepad`, `Camera`, `Music`)
//! - Fixed-layout records mirroring the C headers (`Surface`, `PixelFormatDetails`, `Event`, ...)
//! - Integer constants for flags and enumerations, named exactly as in C
//! - Entry-point tables ([`Api`], [`MixerApi`]) with one field per C symbol
//!   (`SDL_GetError`) and one snake_case method per entry point (`get_error`)
//!
//! ## Usage
//!
//! **Most users should NOT use this crate directly.** Use the safe [`sdl3`] wrapper
//! crate instead, which provides:
//! - Ownership-tagged handles released exactly once
//! - Rust-idiomatic error handling with `Result`, including SDL's last-error message
//! - Text, array and struct marshaling that never leaks raw pointers
//!
//! ## Safety
//!
//! All entry-point methods are `unsafe` and require the caller to uphold SDL's
//! invariants:
//! - Most video, render and event functions may only be called on the main thread
//! - Pointers must remain valid for the duration of the call
//! - Memory returned as "caller must free" must be released with `SDL_free`
//! - Null checks are the caller's responsibility
//!
//! ## Versioning
//!
//! Record layouts and constant values match SDL 3.2. Layouts are checked at
//! compile time; see `types.rs`.
//!
//! [`sdl3`]: https://docs.rs/sdl3

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

extern crate libloading;

mod api;
mod consts;
mod types;

pub use api::*;
pub use consts::*;
pub use types::*;
