// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! # SDL3
//!
//! Safe bindings for the SDL3 C library: windows and 2D rendering, input
//! events, joysticks and gamepads, camera capture, and music playback via
//! SDL3_mixer.
//!
//! The library is loaded at runtime ([`load_api`]) and every entry point is
//! called through the raw table in [`sdl3_sys`]. This crate owns the rules
//! for crossing that boundary:
//!
//! - Text goes in as NUL-terminated UTF-8 that lives only for the call.
//!   Optional text maps `None` to a NULL pointer.
//! - Text and arrays coming back are copied into owned Rust values. Buffers
//!   the caller owns are freed with `SDL_free` exactly once.
//! - Every failure sentinel (NULL, `false`, a negative count) becomes
//!   [`Error::Call`] carrying the message `SDL_GetError` held right after
//!   the call.
//! - Native resources are wrapped in handles that are released once, either
//!   explicitly or when dropped on the thread that created them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────┐
//! │ Sdl │  (SDL_Init .. SDL_Quit)
//! └──┬──┘
//!    ├─► Window ──► Renderer ──► Texture
//!    ├─► Gamepad
//!    ├─► Camera ──► CameraFrame
//!    ├─► EventSender             (Send + Sync)
//!    └─► Mixer  ──► Music        (SDL3_mixer)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use sdl3::{Color, Event, InitFlags, Sdl, WindowFlags, config::get_sdl3_library_path, load_api};
//!
//! # fn main() -> Result<(), sdl3::Error> {
//! let api = load_api(get_sdl3_library_path())?;
//! let sdl = Sdl::init(api, InitFlags::VIDEO)?;
//! let (window, renderer) =
//!     sdl.create_window_and_renderer("demo", 640, 480, WindowFlags::RESIZABLE)?;
//! window.set_title("still a demo")?;
//!
//! 'running: loop {
//!     for event in sdl.poll_iter() {
//!         if let Event::Quit { .. } = event? {
//!             break 'running;
//!         }
//!     }
//!     renderer.set_draw_color(Color { r: 0, g: 0, b: 0, a: 255 })?;
//!     renderer.clear()?;
//!     renderer.present()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! [`SdlApi`] and [`EventSender`] are `Send + Sync`. [`Sdl`] and every
//! handle are neither: SDL expects video, input and device calls on the
//! thread that initialised it, and releasing on that thread is what makes
//! drop-time cleanup safe.

#[macro_use]
mod enums;

mod api;
mod camera;
mod context;
mod error;
mod event;
mod gamepad;
mod handle;
mod joystick;
mod keyboard;
mod marshal;
mod mixer;
mod pixels;
mod render;
mod video;

pub mod config;
pub mod hints;
pub mod props;

pub use api::{SdlApi, SdlApiHandle, Version, load_api};
pub use camera::{Camera, CameraFrame, CameraId, CameraPermission, CameraSpec};
pub use context::{InitFlags, Sdl};
pub use error::{Error, Result};
pub use event::{Event, EventSender, EventType};
pub use gamepad::{
    Gamepad, GamepadAxis, GamepadType,
    mapping::{GamepadMapping, MappingBinding},
};
pub use handle::Ownership;
pub use joystick::JoystickId;
pub use keyboard::Keycode;
pub use mixer::{
    AudioFormat, AudioSpec, MAX_VOLUME, Mixer, MixerApiHandle, MixerInitFlags, Music,
    load_mixer_api,
};
pub use pixels::{Color, FRect, PixelFormat, PixelFormatInfo, Rect};
pub use render::{Renderer, Texture, TextureAccess};
pub use video::{Window, WindowFlags};
