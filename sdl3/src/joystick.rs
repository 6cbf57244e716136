// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Joystick enumeration and GUIDs.
//!
//! SDL identifies device models by a 16-byte GUID. It is surfaced here as a
//! [`Uuid`] holding the same bytes, so its simple (undashed, lowercase hex)
//! form is exactly the text SDL uses in gamepad mappings.

use std::os::raw::{c_char, c_int};

use sdl3_sys as sys;
use uuid::Uuid;

use crate::{Result, Sdl, SdlApi, marshal};

/// Instance ID of a connected joystick or gamepad. Never reused while SDL
/// is running.
pub type JoystickId = u32;

pub(crate) fn guid_to_uuid(guid: sys::GUID) -> Uuid {
    Uuid::from_bytes(guid.data)
}

pub(crate) fn uuid_to_guid(uuid: &Uuid) -> sys::GUID {
    sys::GUID {
        data: *uuid.as_bytes(),
    }
}

impl Sdl {
    /// Lists the currently connected joysticks.
    pub fn joysticks(&self) -> Result<Vec<JoystickId>> {
        let api = self.api();
        marshal::fetch_array(api, "SDL_GetJoysticks", |count| unsafe {
            api.get_joysticks(count)
        })
    }

    /// The name of a connected joystick, `None` if it has none.
    pub fn joystick_name(&self, id: JoystickId) -> Result<Option<String>> {
        let name = unsafe { self.api().get_joystick_name_for_id(id) }?;
        unsafe { marshal::text::from_borrowed(name) }
    }

    /// The GUID of a connected joystick.
    pub fn joystick_guid(&self, id: JoystickId) -> Result<Uuid> {
        self.api().clear_last_error()?;
        let guid = unsafe { self.api().get_joystick_guid_for_id(id) }?;
        // An invalid ID yields the zero GUID.
        if guid.data == [0; 16] {
            return Err(self.api().call_failed("SDL_GetJoystickGUIDForID"));
        }
        Ok(guid_to_uuid(guid))
    }
}

impl SdlApi {
    /// Formats a GUID the way SDL writes it in mappings.
    pub fn guid_to_string(&self, guid: &Uuid) -> Result<String> {
        let mut buffer = [0 as c_char; sys::SDL_GUID_STRING_LENGTH as usize];
        unsafe {
            self.raw().guid_to_string(
                uuid_to_guid(guid),
                buffer.as_mut_ptr(),
                buffer.len() as c_int,
            )
        }?;
        // SDL always terminates within the buffer; keep the last byte as a stop.
        buffer[buffer.len() - 1] = 0;
        let text = unsafe { marshal::text::from_borrowed(buffer.as_ptr()) }?;
        Ok(text.unwrap_or_default())
    }
}
