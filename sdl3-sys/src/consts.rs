// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Numeric constants from the SDL3 and SDL3_mixer headers.
//!
//! The value is the contract; names follow the C headers.

use std::os::raw::c_int;

use crate::types::*;

pub const SDL_INIT_AUDIO: InitFlags = 0x0000_0010;
pub const SDL_INIT_VIDEO: InitFlags = 0x0000_0020;
pub const SDL_INIT_JOYSTICK: InitFlags = 0x0000_0200;
pub const SDL_INIT_HAPTIC: InitFlags = 0x0000_1000;
pub const SDL_INIT_GAMEPAD: InitFlags = 0x0000_2000;
pub const SDL_INIT_EVENTS: InitFlags = 0x0000_4000;
pub const SDL_INIT_SENSOR: InitFlags = 0x0000_8000;
pub const SDL_INIT_CAMERA: InitFlags = 0x0001_0000;

pub const SDL_WINDOW_FULLSCREEN: WindowFlags = 0x0000_0000_0000_0001;
pub const SDL_WINDOW_OPENGL: WindowFlags = 0x0000_0000_0000_0002;
pub const SDL_WINDOW_OCCLUDED: WindowFlags = 0x0000_0000_0000_0004;
pub const SDL_WINDOW_HIDDEN: WindowFlags = 0x0000_0000_0000_0008;
pub const SDL_WINDOW_BORDERLESS: WindowFlags = 0x0000_0000_0000_0010;
pub const SDL_WINDOW_RESIZABLE: WindowFlags = 0x0000_0000_0000_0020;
pub const SDL_WINDOW_MINIMIZED: WindowFlags = 0x0000_0000_0000_0040;
pub const SDL_WINDOW_MAXIMIZED: WindowFlags = 0x0000_0000_0000_0080;
pub const SDL_WINDOW_MOUSE_GRABBED: WindowFlags = 0x0000_0000_0000_0100;
pub const SDL_WINDOW_INPUT_FOCUS: WindowFlags = 0x0000_0000_0000_0200;
pub const SDL_WINDOW_MOUSE_FOCUS: WindowFlags = 0x0000_0000_0000_0400;
pub const SDL_WINDOW_EXTERNAL: WindowFlags = 0x0000_0000_0000_0800;
pub const SDL_WINDOW_MODAL: WindowFlags = 0x0000_0000_0000_1000;
pub const SDL_WINDOW_HIGH_PIXEL_DENSITY: WindowFlags = 0x0000_0000_0000_2000;
pub const SDL_WINDOW_MOUSE_CAPTURE: WindowFlags = 0x0000_0000_0000_4000;
pub const SDL_WINDOW_ALWAYS_ON_TOP: WindowFlags = 0x0000_0000_0001_0000;
pub const SDL_WINDOW_UTILITY: WindowFlags = 0x0000_0000_0002_0000;
pub const SDL_WINDOW_TOOLTIP: WindowFlags = 0x0000_0000_0004_0000;
pub const SDL_WINDOW_POPUP_MENU: WindowFlags = 0x0000_0000_0008_0000;
pub const SDL_WINDOW_KEYBOARD_GRABBED: WindowFlags = 0x0000_0000_0010_0000;
pub const SDL_WINDOW_VULKAN: WindowFlags = 0x0000_0000_1000_0000;
pub const SDL_WINDOW_METAL: WindowFlags = 0x0000_0000_2000_0000;
pub const SDL_WINDOW_TRANSPARENT: WindowFlags = 0x0000_0000_4000_0000;
pub const SDL_WINDOW_NOT_FOCUSABLE: WindowFlags = 0x0000_0000_8000_0000;

pub const SDL_EVENT_FIRST: EventType = 0;
pub const SDL_EVENT_QUIT: EventType = 0x100;
pub const SDL_EVENT_TERMINATING: EventType = 0x101;
pub const SDL_EVENT_LOW_MEMORY: EventType = 0x102;
pub const SDL_EVENT_WILL_ENTER_BACKGROUND: EventType = 0x103;
pub const SDL_EVENT_DID_ENTER_BACKGROUND: EventType = 0x104;
pub const SDL_EVENT_WILL_ENTER_FOREGROUND: EventType = 0x105;
pub const SDL_EVENT_DID_ENTER_FOREGROUND: EventType = 0x106;
pub const SDL_EVENT_LOCALE_CHANGED: EventType = 0x107;
pub const SDL_EVENT_SYSTEM_THEME_CHANGED: EventType = 0x108;
pub const SDL_EVENT_WINDOW_SHOWN: EventType = 0x202;
pub const SDL_EVENT_WINDOW_HIDDEN: EventType = 0x203;
pub const SDL_EVENT_WINDOW_EXPOSED: EventType = 0x204;
pub const SDL_EVENT_WINDOW_MOVED: EventType = 0x205;
pub const SDL_EVENT_WINDOW_RESIZED: EventType = 0x206;
pub const SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED: EventType = 0x207;
pub const SDL_EVENT_WINDOW_METAL_VIEW_RESIZED: EventType = 0x208;
pub const SDL_EVENT_WINDOW_MINIMIZED: EventType = 0x209;
pub const SDL_EVENT_WINDOW_MAXIMIZED: EventType = 0x20A;
pub const SDL_EVENT_WINDOW_RESTORED: EventType = 0x20B;
pub const SDL_EVENT_WINDOW_MOUSE_ENTER: EventType = 0x20C;
pub const SDL_EVENT_WINDOW_MOUSE_LEAVE: EventType = 0x20D;
pub const SDL_EVENT_WINDOW_FOCUS_GAINED: EventType = 0x20E;
pub const SDL_EVENT_WINDOW_FOCUS_LOST: EventType = 0x20F;
pub const SDL_EVENT_WINDOW_CLOSE_REQUESTED: EventType = 0x210;
pub const SDL_EVENT_KEY_DOWN: EventType = 0x300;
pub const SDL_EVENT_KEY_UP: EventType = 0x301;
pub const SDL_EVENT_TEXT_EDITING: EventType = 0x302;
pub const SDL_EVENT_TEXT_INPUT: EventType = 0x303;
pub const SDL_EVENT_MOUSE_MOTION: EventType = 0x400;
pub const SDL_EVENT_MOUSE_BUTTON_DOWN: EventType = 0x401;
pub const SDL_EVENT_MOUSE_BUTTON_UP: EventType = 0x402;
pub const SDL_EVENT_MOUSE_WHEEL: EventType = 0x403;
pub const SDL_EVENT_JOYSTICK_ADDED: EventType = 0x605;
pub const SDL_EVENT_JOYSTICK_REMOVED: EventType = 0x606;
pub const SDL_EVENT_GAMEPAD_AXIS_MOTION: EventType = 0x650;
pub const SDL_EVENT_GAMEPAD_BUTTON_DOWN: EventType = 0x651;
pub const SDL_EVENT_GAMEPAD_BUTTON_UP: EventType = 0x652;
pub const SDL_EVENT_GAMEPAD_ADDED: EventType = 0x653;
pub const SDL_EVENT_GAMEPAD_REMOVED: EventType = 0x654;
pub const SDL_EVENT_GAMEPAD_REMAPPED: EventType = 0x655;
pub const SDL_EVENT_CAMERA_DEVICE_ADDED: EventType = 0x1400;
pub const SDL_EVENT_CAMERA_DEVICE_REMOVED: EventType = 0x1401;
pub const SDL_EVENT_CAMERA_DEVICE_APPROVED: EventType = 0x1402;
pub const SDL_EVENT_CAMERA_DEVICE_DENIED: EventType = 0x1403;
pub const SDL_EVENT_USER: EventType = 0x8000;
pub const SDL_EVENT_LAST: EventType = 0xFFFF;

pub const SDL_PIXELFORMAT_UNKNOWN: PixelFormat = 0;
pub const SDL_PIXELFORMAT_RGB565: PixelFormat = 0x1515_1002;
pub const SDL_PIXELFORMAT_XRGB8888: PixelFormat = 0x1616_1804;
pub const SDL_PIXELFORMAT_ARGB8888: PixelFormat = 0x1636_2004;
pub const SDL_PIXELFORMAT_RGBA8888: PixelFormat = 0x1646_2004;
pub const SDL_PIXELFORMAT_ABGR8888: PixelFormat = 0x1676_2004;
pub const SDL_PIXELFORMAT_BGRA8888: PixelFormat = 0x1686_2004;
pub const SDL_PIXELFORMAT_RGB24: PixelFormat = 0x1710_1803;
pub const SDL_PIXELFORMAT_BGR24: PixelFormat = 0x1740_1803;
pub const SDL_PIXELFORMAT_YV12: PixelFormat = 0x3231_5659;
pub const SDL_PIXELFORMAT_IYUV: PixelFormat = 0x5655_5949;
pub const SDL_PIXELFORMAT_YUY2: PixelFormat = 0x3259_5559;
pub const SDL_PIXELFORMAT_UYVY: PixelFormat = 0x5956_5955;
pub const SDL_PIXELFORMAT_YVYU: PixelFormat = 0x5559_5659;
pub const SDL_PIXELFORMAT_NV12: PixelFormat = 0x3231_564E;
pub const SDL_PIXELFORMAT_NV21: PixelFormat = 0x3132_564E;
pub const SDL_PIXELFORMAT_MJPG: PixelFormat = 0x4750_4A4D;

pub const SDL_TEXTUREACCESS_STATIC: TextureAccess = 0;
pub const SDL_TEXTUREACCESS_STREAMING: TextureAccess = 1;
pub const SDL_TEXTUREACCESS_TARGET: TextureAccess = 2;

pub const SDL_GAMEPAD_TYPE_UNKNOWN: GamepadType = 0;
pub const SDL_GAMEPAD_TYPE_STANDARD: GamepadType = 1;
pub const SDL_GAMEPAD_TYPE_XBOX360: GamepadType = 2;
pub const SDL_GAMEPAD_TYPE_XBOXONE: GamepadType = 3;
pub const SDL_GAMEPAD_TYPE_PS3: GamepadType = 4;
pub const SDL_GAMEPAD_TYPE_PS4: GamepadType = 5;
pub const SDL_GAMEPAD_TYPE_PS5: GamepadType = 6;
pub const SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_PRO: GamepadType = 7;
pub const SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_LEFT: GamepadType = 8;
pub const SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_RIGHT: GamepadType = 9;
pub const SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_PAIR: GamepadType = 10;
pub const SDL_GAMEPAD_TYPE_COUNT: GamepadType = 11;

pub const SDL_GAMEPAD_AXIS_INVALID: GamepadAxis = -1;
pub const SDL_GAMEPAD_AXIS_LEFTX: GamepadAxis = 0;
pub const SDL_GAMEPAD_AXIS_LEFTY: GamepadAxis = 1;
pub const SDL_GAMEPAD_AXIS_RIGHTX: GamepadAxis = 2;
pub const SDL_GAMEPAD_AXIS_RIGHTY: GamepadAxis = 3;
pub const SDL_GAMEPAD_AXIS_LEFT_TRIGGER: GamepadAxis = 4;
pub const SDL_GAMEPAD_AXIS_RIGHT_TRIGGER: GamepadAxis = 5;
pub const SDL_GAMEPAD_AXIS_COUNT: GamepadAxis = 6;

pub const SDL_CAMERA_PERMISSION_STATE_DENIED: CameraPermissionState = -1;
pub const SDL_CAMERA_PERMISSION_STATE_PENDING: CameraPermissionState = 0;
pub const SDL_CAMERA_PERMISSION_STATE_APPROVED: CameraPermissionState = 1;

pub const SDL_AUDIO_UNKNOWN: AudioFormat = 0x0000;
pub const SDL_AUDIO_U8: AudioFormat = 0x0008;
pub const SDL_AUDIO_S8: AudioFormat = 0x8008;
pub const SDL_AUDIO_S16LE: AudioFormat = 0x8010;
pub const SDL_AUDIO_S16BE: AudioFormat = 0x9010;
pub const SDL_AUDIO_S32LE: AudioFormat = 0x8020;
pub const SDL_AUDIO_S32BE: AudioFormat = 0x9020;
pub const SDL_AUDIO_F32LE: AudioFormat = 0x8120;
pub const SDL_AUDIO_F32BE: AudioFormat = 0x9120;

pub const SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK: AudioDeviceID = 0xFFFF_FFFF;
pub const SDL_AUDIO_DEVICE_DEFAULT_RECORDING: AudioDeviceID = 0xFFFF_FFFE;

/// `SDL_GUIDToString` needs 33 bytes: 32 hex digits plus the terminator.
pub const SDL_GUID_STRING_LENGTH: c_int = 33;

pub const MIX_INIT_FLAC: MIX_InitFlags = 0x0000_0001;
pub const MIX_INIT_MOD: MIX_InitFlags = 0x0000_0002;
pub const MIX_INIT_MP3: MIX_InitFlags = 0x0000_0008;
pub const MIX_INIT_OGG: MIX_InitFlags = 0x0000_0010;
pub const MIX_INIT_MID: MIX_InitFlags = 0x0000_0020;
pub const MIX_INIT_OPUS: MIX_InitFlags = 0x0000_0040;
pub const MIX_INIT_WAVPACK: MIX_InitFlags = 0x0000_0080;

pub const MIX_MAX_VOLUME: c_int = 128;
