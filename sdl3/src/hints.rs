// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Configuration hints (`SDL_SetHint` and friends).
//!
//! Hints may be set before [`crate::Sdl::init`], so they live on the loaded
//! library rather than on the initialised context.

use crate::{Result, api::SdlApi, marshal::text};

pub const APP_NAME: &str = "SDL_APP_NAME";
pub const APP_ID: &str = "SDL_APP_ID";
pub const RENDER_DRIVER: &str = "SDL_RENDER_DRIVER";
pub const RENDER_VSYNC: &str = "SDL_RENDER_VSYNC";
pub const VIDEO_DRIVER: &str = "SDL_VIDEO_DRIVER";
pub const CAMERA_DRIVER: &str = "SDL_CAMERA_DRIVER";
pub const GAMECONTROLLERCONFIG: &str = "SDL_GAMECONTROLLERCONFIG";
pub const GAMECONTROLLERCONFIG_FILE: &str = "SDL_GAMECONTROLLERCONFIG_FILE";
pub const JOYSTICK_ALLOW_BACKGROUND_EVENTS: &str = "SDL_JOYSTICK_ALLOW_BACKGROUND_EVENTS";

impl SdlApi {
    /// Sets a hint at normal priority.
    ///
    /// `None` clears the value by passing NULL, which is not the same as
    /// setting it to the empty string.
    pub fn set_hint(&self, name: &str, value: Option<&str>) -> Result<()> {
        text::with_c_str(name, |name| {
            text::with_opt_c_str(value, |value| {
                let ok = unsafe { self.raw().set_hint(name, value) }?;
                self.check_bool("SDL_SetHint", ok)
            })
        })
    }

    /// Returns the current value of a hint, `None` if it is unset.
    pub fn hint(&self, name: &str) -> Result<Option<String>> {
        text::with_c_str(name, |name| {
            let value = unsafe { self.get_hint(name) }?;
            unsafe { text::from_borrowed(value) }
        })
    }

    /// Resets a hint to its default (environment) value.
    pub fn reset_hint(&self, name: &str) -> Result<()> {
        text::with_c_str(name, |name| {
            let ok = unsafe { self.raw().reset_hint(name) }?;
            self.check_bool("SDL_ResetHint", ok)
        })
    }
}
