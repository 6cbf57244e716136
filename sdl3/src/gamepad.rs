// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Gamepads and the mapping database.

pub mod mapping;

use std::{io::BufRead, path::Path};

use sdl3_sys as sys;
use uuid::Uuid;

use crate::{
    Error, JoystickId, Result, Sdl, SdlApi,
    context::SdlContext,
    handle::{Handle, NativeResource, Ownership},
    joystick::uuid_to_guid,
    marshal::{self, text},
};

native_enum! {
    /// The family of a gamepad (`SDL_GamepadType`).
    pub enum GamepadType: sys::GamepadType {
        Unknown = sys::SDL_GAMEPAD_TYPE_UNKNOWN,
        Standard = sys::SDL_GAMEPAD_TYPE_STANDARD,
        Xbox360 = sys::SDL_GAMEPAD_TYPE_XBOX360,
        XboxOne = sys::SDL_GAMEPAD_TYPE_XBOXONE,
        Ps3 = sys::SDL_GAMEPAD_TYPE_PS3,
        Ps4 = sys::SDL_GAMEPAD_TYPE_PS4,
        Ps5 = sys::SDL_GAMEPAD_TYPE_PS5,
        NintendoSwitchPro = sys::SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_PRO,
        NintendoSwitchJoyconLeft = sys::SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_LEFT,
        NintendoSwitchJoyconRight = sys::SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_RIGHT,
        NintendoSwitchJoyconPair = sys::SDL_GAMEPAD_TYPE_NINTENDO_SWITCH_JOYCON_PAIR,
    }
}

native_enum! {
    /// An analog axis (`SDL_GamepadAxis`).
    ///
    /// Sticks range over `-32768..=32767`; triggers over `0..=32767`.
    pub enum GamepadAxis: sys::GamepadAxis {
        LeftX = sys::SDL_GAMEPAD_AXIS_LEFTX,
        LeftY = sys::SDL_GAMEPAD_AXIS_LEFTY,
        RightX = sys::SDL_GAMEPAD_AXIS_RIGHTX,
        RightY = sys::SDL_GAMEPAD_AXIS_RIGHTY,
        LeftTrigger = sys::SDL_GAMEPAD_AXIS_LEFT_TRIGGER,
        RightTrigger = sys::SDL_GAMEPAD_AXIS_RIGHT_TRIGGER,
    }
}

impl NativeResource for sys::Gamepad {
    type Context = SdlContext;
    const KIND: &'static str = "gamepad";

    unsafe fn release(context: &SdlContext, raw: *mut Self) -> Result<()> {
        unsafe { context.api.close_gamepad(raw) }?;
        Ok(())
    }
}

/// An opened gamepad. Closed when dropped.
#[derive(Debug)]
pub struct Gamepad {
    handle: Handle<sys::Gamepad>,
}

impl Gamepad {
    fn api(&self) -> &SdlApi {
        &self.handle.context().api
    }

    /// Closes the gamepad now.
    pub fn close(mut self) -> Result<()> {
        self.handle.release()
    }

    /// The gamepad's name, `None` if it has none.
    pub fn name(&self) -> Result<Option<String>> {
        let name = unsafe { self.api().get_gamepad_name(self.handle.as_ptr()) }?;
        unsafe { text::from_borrowed(name) }
    }

    pub fn gamepad_type(&self) -> Result<GamepadType> {
        GamepadType::try_from(unsafe { self.api().get_gamepad_type(self.handle.as_ptr()) }?)
    }

    /// Current position of `axis`.
    ///
    /// SDL reports a failed query as 0, which is also a valid resting
    /// position, so a failure cannot be told apart here.
    pub fn axis(&self, axis: GamepadAxis) -> Result<i16> {
        Ok(unsafe {
            self.api()
                .get_gamepad_axis(self.handle.as_ptr(), axis.to_raw())
        }?)
    }

    /// The mapping in use, `None` if the gamepad has none.
    pub fn mapping(&self) -> Result<Option<String>> {
        let api = self.api();
        text::fetch_owned(api, "SDL_GetGamepadMapping", || unsafe {
            api.get_gamepad_mapping(self.handle.as_ptr())
        })
    }
}

impl Sdl {
    /// Adds or replaces one mapping.
    ///
    /// Returns `true` if the mapping was new and `false` if it replaced an
    /// existing one for the same GUID.
    pub fn add_gamepad_mapping(&self, mapping: &str) -> Result<bool> {
        let api = self.api();
        let result = text::with_c_str(mapping, |mapping| {
            Ok(unsafe { api.add_gamepad_mapping(mapping) }?)
        })?;
        match result {
            1 => Ok(true),
            0 => Ok(false),
            _ => Err(api.call_failed("SDL_AddGamepadMapping")),
        }
    }

    /// Loads mappings from a file in the `gamecontrollerdb.txt` format.
    ///
    /// Returns the number of mappings added or updated.
    pub fn add_gamepad_mappings_from_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let path = path
            .to_str()
            .ok_or_else(|| Error::Other(format!("path is not valid UTF-8: {}", path.display())))?;
        let api = self.api();
        let added = text::with_c_str(path, |path| {
            Ok(unsafe { api.add_gamepad_mappings_from_file(path) }?)
        })?;
        usize::try_from(added).map_err(|_| api.call_failed("SDL_AddGamepadMappingsFromFile"))
    }

    /// Adds every mapping line read from `reader`.
    ///
    /// Blank lines and lines starting with `#` are skipped. Stops at the
    /// first line SDL rejects. Returns the number of mappings added or
    /// updated.
    pub fn add_gamepad_mappings_from_reader<R: BufRead>(&self, reader: R) -> Result<usize> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.add_gamepad_mapping(line)?;
            added += 1;
        }
        Ok(added)
    }

    /// Re-reads the mapping database, including the hint-provided mappings.
    pub fn reload_gamepad_mappings(&self) -> Result<()> {
        let ok = unsafe { self.api().reload_gamepad_mappings() }?;
        self.api().check_bool("SDL_ReloadGamepadMappings", ok)
    }

    /// Every mapping currently known to SDL.
    pub fn gamepad_mappings(&self) -> Result<Vec<String>> {
        let api = self.api();
        marshal::fetch_pointer_array(
            api,
            "SDL_GetGamepadMappings",
            |count| unsafe { api.get_gamepad_mappings(count) },
            |mapping| Ok(unsafe { text::from_borrowed(mapping) }?.unwrap_or_default()),
        )
    }

    /// The mapping for a device GUID, `None` if there is none.
    pub fn gamepad_mapping_for_guid(&self, guid: &Uuid) -> Result<Option<String>> {
        let api = self.api();
        text::fetch_owned(api, "SDL_GetGamepadMappingForGUID", || unsafe {
            api.get_gamepad_mapping_for_guid(uuid_to_guid(guid))
        })
    }

    /// Lists the connected joysticks that have a gamepad mapping.
    pub fn gamepads(&self) -> Result<Vec<JoystickId>> {
        let api = self.api();
        marshal::fetch_array(api, "SDL_GetGamepads", |count| unsafe {
            api.get_gamepads(count)
        })
    }

    /// Opens a gamepad for use.
    pub fn open_gamepad(&self, id: JoystickId) -> Result<Gamepad> {
        let api = self.api();
        let raw = unsafe { api.open_gamepad(id) }?;
        let raw = api.check_non_null("SDL_OpenGamepad", raw)?;
        Ok(Gamepad {
            handle: Handle::new(self.context().clone(), raw.as_ptr(), Ownership::Owned),
        })
    }
}
