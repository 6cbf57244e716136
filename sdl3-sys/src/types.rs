// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Opaque handles, scalar typedefs and fixed-layout records.
//!
//! Every record is `#[repr(C)]` with fields in header order. Padding that the
//! C headers spell out is kept as named fields so the byte layout stays
//! identical. Sizes and offsets are asserted at the bottom of this file.

use std::mem::{offset_of, size_of};
use std::os::raw::{c_int, c_void};

/// C `bool` as used by SDL3 (one byte). Zero is false, anything else is true.
pub type Bool = u8;
pub const SDL_FALSE: Bool = 0;
pub const SDL_TRUE: Bool = 1;

pub type InitFlags = u32;
pub type WindowFlags = u64;
pub type WindowID = u32;
pub type JoystickID = u32;
pub type CameraID = u32;
pub type KeyboardID = u32;
pub type MouseID = u32;
pub type AudioDeviceID = u32;
pub type SurfaceFlags = u32;
pub type PixelFormat = u32;
pub type Colorspace = u32;
pub type Keycode = u32;
pub type Keymod = u16;
pub type Scancode = c_int;
pub type EventType = u32;
pub type TextureAccess = c_int;
pub type GamepadType = c_int;
pub type GamepadAxis = c_int;
pub type CameraPermissionState = c_int;
pub type AudioFormat = c_int;
pub type MIX_InitFlags = u32;

macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            #[derive(Debug)]
            pub struct $name {
                _unused: [u8; 0],
            }
        )*
    };
}

opaque! {
    /// `SDL_Window`
    Window,
    /// `SDL_Renderer`
    Renderer,
    /// `SDL_Texture`
    Texture,
    /// `SDL_Gamepad`
    Gamepad,
    /// `SDL_Camera`
    Camera,
    /// `Mix_Music`
    Music,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: c_int,
    pub y: c_int,
    pub w: c_int,
    pub h: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// `SDL_GUID`, passed and returned by value.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GUID {
    pub data: [u8; 16],
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormatDetails {
    pub format: PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    pub padding: [u8; 2],
    pub Rmask: u32,
    pub Gmask: u32,
    pub Bmask: u32,
    pub Amask: u32,
    pub Rbits: u8,
    pub Gbits: u8,
    pub Bbits: u8,
    pub Abits: u8,
    pub Rshift: u8,
    pub Gshift: u8,
    pub Bshift: u8,
    pub Ashift: u8,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Surface {
    pub flags: SurfaceFlags,
    pub format: PixelFormat,
    pub w: c_int,
    pub h: c_int,
    pub pitch: c_int,
    pub pixels: *mut c_void,
    pub refcount: c_int,
    pub reserved: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CameraSpec {
    pub format: PixelFormat,
    pub colorspace: Colorspace,
    pub width: c_int,
    pub height: c_int,
    pub framerate_numerator: c_int,
    pub framerate_denominator: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioSpec {
    pub format: AudioFormat,
    pub channels: c_int,
    pub freq: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct CommonEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct QuitEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub data1: i32,
    pub data2: i32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: KeyboardID,
    pub scancode: Scancode,
    pub key: Keycode,
    pub mod_: Keymod,
    pub raw: u16,
    pub down: Bool,
    pub repeat: Bool,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct MouseButtonEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub which: MouseID,
    pub button: u8,
    pub down: Bool,
    pub clicks: u8,
    pub padding: u8,
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct GamepadDeviceEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: JoystickID,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct GamepadAxisEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: JoystickID,
    pub axis: u8,
    pub padding1: u8,
    pub padding2: u8,
    pub padding3: u8,
    pub value: i16,
    pub padding4: u16,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct GamepadButtonEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: JoystickID,
    pub button: u8,
    pub down: Bool,
    pub padding1: u8,
    pub padding2: u8,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct CameraDeviceEvent {
    pub type_: EventType,
    pub reserved: u32,
    pub timestamp: u64,
    pub which: CameraID,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct UserEvent {
    pub type_: u32,
    pub reserved: u32,
    pub timestamp: u64,
    pub windowID: WindowID,
    pub code: i32,
    pub data1: *mut c_void,
    pub data2: *mut c_void,
}

/// `SDL_Event`: 128 bytes regardless of which member is active.
#[repr(C)]
#[derive(Clone, Copy)]
pub union Event {
    pub type_: u32,
    pub common: CommonEvent,
    pub quit: QuitEvent,
    pub window: WindowEvent,
    pub key: KeyboardEvent,
    pub button: MouseButtonEvent,
    pub gdevice: GamepadDeviceEvent,
    pub gaxis: GamepadAxisEvent,
    pub gbutton: GamepadButtonEvent,
    pub cdevice: CameraDeviceEvent,
    pub user: UserEvent,
    pub padding: [u8; 128],
}

impl Default for Event {
    fn default() -> Self {
        Self { padding: [0; 128] }
    }
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Every member starts with the 32-bit event type.
        f.debug_struct("Event")
            .field("type_", &unsafe { self.type_ })
            .finish_non_exhaustive()
    }
}

const _: () = {
    assert!(size_of::<Bool>() == 1);
    assert!(size_of::<Rect>() == 16);
    assert!(size_of::<FRect>() == 16);
    assert!(size_of::<Color>() == 4);
    assert!(size_of::<GUID>() == 16);
    assert!(size_of::<CameraSpec>() == 24);
    assert!(size_of::<AudioSpec>() == 12);
    assert!(size_of::<Event>() == 128);

    assert!(size_of::<PixelFormatDetails>() == 32);
    assert!(offset_of!(PixelFormatDetails, bits_per_pixel) == 4);
    assert!(offset_of!(PixelFormatDetails, padding) == 6);
    assert!(offset_of!(PixelFormatDetails, Rmask) == 8);
    assert!(offset_of!(PixelFormatDetails, Amask) == 20);
    assert!(offset_of!(PixelFormatDetails, Rbits) == 24);
    assert!(offset_of!(PixelFormatDetails, Ashift) == 31);

    assert!(offset_of!(Surface, pitch) == 16);
    assert!(offset_of!(KeyboardEvent, timestamp) == 8);
    assert!(offset_of!(KeyboardEvent, key) == 28);
    assert!(offset_of!(KeyboardEvent, down) == 36);
    assert!(offset_of!(MouseButtonEvent, button) == 24);
    assert!(offset_of!(MouseButtonEvent, x) == 28);
    assert!(offset_of!(GamepadAxisEvent, value) == 24);
    assert!(offset_of!(UserEvent, code) == 20);
    assert!(offset_of!(UserEvent, data1) == 24);
};

#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(size_of::<Surface>() == 48);
    assert!(offset_of!(Surface, pixels) == 24);
    assert!(offset_of!(Surface, refcount) == 32);
    assert!(offset_of!(Surface, reserved) == 40);
    assert!(size_of::<UserEvent>() == 40);
    assert!(offset_of!(UserEvent, data2) == 32);
    assert!(size_of::<KeyboardEvent>() == 40);
    assert!(size_of::<MouseButtonEvent>() == 40);
};

#[cfg(target_pointer_width = "32")]
const _: () = {
    assert!(size_of::<Surface>() == 32);
    assert!(offset_of!(Surface, pixels) == 20);
    assert!(offset_of!(Surface, refcount) == 24);
    assert!(offset_of!(Surface, reserved) == 28);
    assert!(size_of::<UserEvent>() == 32);
    assert!(offset_of!(UserEvent, data2) == 28);
};
