// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Layout checks against the SDL 3.2 headers.
//!
//! A mismatch here means silent memory corruption at the boundary, so the
//! expected values are spelled out literally rather than computed.

use std::mem::{align_of, offset_of, size_of};

use sdl3_sys::*;

#[test]
fn pixel_format_details_matches_header() {
    assert_eq!(size_of::<PixelFormatDetails>(), 32);
    assert_eq!(offset_of!(PixelFormatDetails, format), 0);
    assert_eq!(offset_of!(PixelFormatDetails, bits_per_pixel), 4);
    assert_eq!(offset_of!(PixelFormatDetails, bytes_per_pixel), 5);
    assert_eq!(offset_of!(PixelFormatDetails, padding), 6);
    assert_eq!(offset_of!(PixelFormatDetails, Rmask), 8);
    assert_eq!(offset_of!(PixelFormatDetails, Gmask), 12);
    assert_eq!(offset_of!(PixelFormatDetails, Bmask), 16);
    assert_eq!(offset_of!(PixelFormatDetails, Amask), 20);
    assert_eq!(offset_of!(PixelFormatDetails, Rbits), 24);
    assert_eq!(offset_of!(PixelFormatDetails, Abits), 27);
    assert_eq!(offset_of!(PixelFormatDetails, Rshift), 28);
    assert_eq!(offset_of!(PixelFormatDetails, Ashift), 31);
}

#[test]
fn plain_records_match_header() {
    assert_eq!(size_of::<Rect>(), 16);
    assert_eq!(size_of::<FRect>(), 16);
    assert_eq!(size_of::<Color>(), 4);
    assert_eq!(size_of::<GUID>(), 16);
    assert_eq!(align_of::<GUID>(), 1);

    assert_eq!(size_of::<CameraSpec>(), 24);
    assert_eq!(offset_of!(CameraSpec, colorspace), 4);
    assert_eq!(offset_of!(CameraSpec, width), 8);
    assert_eq!(offset_of!(CameraSpec, framerate_denominator), 20);

    assert_eq!(size_of::<AudioSpec>(), 12);
    assert_eq!(offset_of!(AudioSpec, channels), 4);
    assert_eq!(offset_of!(AudioSpec, freq), 8);
}

#[test]
fn event_members_share_the_common_prefix() {
    assert_eq!(size_of::<Event>(), 128);
    assert_eq!(offset_of!(CommonEvent, timestamp), 8);
    assert_eq!(offset_of!(WindowEvent, windowID), 16);
    assert_eq!(offset_of!(WindowEvent, data2), 24);
    assert_eq!(offset_of!(KeyboardEvent, which), 20);
    assert_eq!(offset_of!(KeyboardEvent, scancode), 24);
    assert_eq!(offset_of!(KeyboardEvent, key), 28);
    assert_eq!(offset_of!(KeyboardEvent, mod_), 32);
    assert_eq!(offset_of!(KeyboardEvent, raw), 34);
    assert_eq!(offset_of!(KeyboardEvent, down), 36);
    assert_eq!(offset_of!(KeyboardEvent, repeat), 37);
    assert_eq!(offset_of!(MouseButtonEvent, clicks), 26);
    assert_eq!(offset_of!(MouseButtonEvent, padding), 27);
    assert_eq!(offset_of!(MouseButtonEvent, y), 32);
    assert_eq!(offset_of!(GamepadAxisEvent, axis), 20);
    assert_eq!(offset_of!(GamepadAxisEvent, value), 24);
    assert_eq!(offset_of!(GamepadButtonEvent, down), 21);
    assert_eq!(offset_of!(CameraDeviceEvent, which), 16);
    assert_eq!(offset_of!(UserEvent, windowID), 16);
    assert_eq!(offset_of!(UserEvent, code), 20);
    assert_eq!(offset_of!(UserEvent, data1), 24);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pointer_width_dependent_records_64() {
    assert_eq!(size_of::<Surface>(), 48);
    assert_eq!(offset_of!(Surface, pitch), 16);
    assert_eq!(offset_of!(Surface, pixels), 24);
    assert_eq!(offset_of!(Surface, refcount), 32);
    assert_eq!(offset_of!(Surface, reserved), 40);
    assert_eq!(size_of::<UserEvent>(), 40);
    assert_eq!(offset_of!(UserEvent, data2), 32);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn pointer_width_dependent_records_32() {
    assert_eq!(size_of::<Surface>(), 32);
    assert_eq!(offset_of!(Surface, pitch), 16);
    assert_eq!(offset_of!(Surface, pixels), 20);
    assert_eq!(offset_of!(Surface, refcount), 24);
    assert_eq!(offset_of!(Surface, reserved), 28);
    assert_eq!(size_of::<UserEvent>(), 32);
    assert_eq!(offset_of!(UserEvent, data2), 28);
}

#[test]
fn enum_widths_match_header() {
    assert_eq!(size_of::<Bool>(), 1);
    assert_eq!(size_of::<InitFlags>(), 4);
    assert_eq!(size_of::<WindowFlags>(), 8);
    assert_eq!(size_of::<GamepadAxis>(), 4);
    assert_eq!(size_of::<Keymod>(), 2);
    assert_eq!(SDL_GAMEPAD_AXIS_INVALID, -1);
    assert_eq!(SDL_PIXELFORMAT_ARGB8888, 0x16362004);
}

#[test]
fn default_table_reports_every_symbol_missing() {
    let api = Api::default();
    assert!(!api.is_loaded());
    assert_eq!(api.missing_symbols().len(), Api::SYMBOLS.len());
    let err = unsafe { api.get_error() }.unwrap_err();
    assert_eq!(err, MissingSymbol("SDL_GetError"));
    assert_eq!(
        err.to_string(),
        "SDL_GetError is not exported by the loaded library"
    );
}

#[test]
fn table_fields_forward_calls() {
    unsafe extern "C" fn get_version() -> std::os::raw::c_int {
        3_002_010
    }

    let mut api = Api::default();
    api.SDL_GetVersion = Some(get_version);
    assert_eq!(unsafe { api.get_version() }, Ok(3_002_010));
    assert!(!api.missing_symbols().contains(&"SDL_GetVersion"));
}
