// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! The event queue.
//!
//! Events arrive as the 128-byte `SDL_Event` union and are decoded into
//! [`Event`] by their leading type field. Types this crate does not decode
//! are kept as [`Event::Other`].

use std::ptr;

use sdl3_sys as sys;

use crate::{Error, Keycode, Result, Sdl, api::SdlApiHandle, marshal::from_bool};

native_constants! {
    /// An event type code (`SDL_EventType`). Values from
    /// [`Sdl::register_events`] fall in `USER..=LAST`.
    pub struct EventType(u32) {
        QUIT = sys::SDL_EVENT_QUIT,
        TERMINATING = sys::SDL_EVENT_TERMINATING,
        LOW_MEMORY = sys::SDL_EVENT_LOW_MEMORY,
        WILL_ENTER_BACKGROUND = sys::SDL_EVENT_WILL_ENTER_BACKGROUND,
        DID_ENTER_BACKGROUND = sys::SDL_EVENT_DID_ENTER_BACKGROUND,
        WILL_ENTER_FOREGROUND = sys::SDL_EVENT_WILL_ENTER_FOREGROUND,
        DID_ENTER_FOREGROUND = sys::SDL_EVENT_DID_ENTER_FOREGROUND,
        LOCALE_CHANGED = sys::SDL_EVENT_LOCALE_CHANGED,
        SYSTEM_THEME_CHANGED = sys::SDL_EVENT_SYSTEM_THEME_CHANGED,
        WINDOW_SHOWN = sys::SDL_EVENT_WINDOW_SHOWN,
        WINDOW_HIDDEN = sys::SDL_EVENT_WINDOW_HIDDEN,
        WINDOW_EXPOSED = sys::SDL_EVENT_WINDOW_EXPOSED,
        WINDOW_MOVED = sys::SDL_EVENT_WINDOW_MOVED,
        WINDOW_RESIZED = sys::SDL_EVENT_WINDOW_RESIZED,
        WINDOW_PIXEL_SIZE_CHANGED = sys::SDL_EVENT_WINDOW_PIXEL_SIZE_CHANGED,
        WINDOW_METAL_VIEW_RESIZED = sys::SDL_EVENT_WINDOW_METAL_VIEW_RESIZED,
        WINDOW_MINIMIZED = sys::SDL_EVENT_WINDOW_MINIMIZED,
        WINDOW_MAXIMIZED = sys::SDL_EVENT_WINDOW_MAXIMIZED,
        WINDOW_RESTORED = sys::SDL_EVENT_WINDOW_RESTORED,
        WINDOW_MOUSE_ENTER = sys::SDL_EVENT_WINDOW_MOUSE_ENTER,
        WINDOW_MOUSE_LEAVE = sys::SDL_EVENT_WINDOW_MOUSE_LEAVE,
        WINDOW_FOCUS_GAINED = sys::SDL_EVENT_WINDOW_FOCUS_GAINED,
        WINDOW_FOCUS_LOST = sys::SDL_EVENT_WINDOW_FOCUS_LOST,
        WINDOW_CLOSE_REQUESTED = sys::SDL_EVENT_WINDOW_CLOSE_REQUESTED,
        KEY_DOWN = sys::SDL_EVENT_KEY_DOWN,
        KEY_UP = sys::SDL_EVENT_KEY_UP,
        TEXT_EDITING = sys::SDL_EVENT_TEXT_EDITING,
        TEXT_INPUT = sys::SDL_EVENT_TEXT_INPUT,
        MOUSE_MOTION = sys::SDL_EVENT_MOUSE_MOTION,
        MOUSE_BUTTON_DOWN = sys::SDL_EVENT_MOUSE_BUTTON_DOWN,
        MOUSE_BUTTON_UP = sys::SDL_EVENT_MOUSE_BUTTON_UP,
        MOUSE_WHEEL = sys::SDL_EVENT_MOUSE_WHEEL,
        JOYSTICK_ADDED = sys::SDL_EVENT_JOYSTICK_ADDED,
        JOYSTICK_REMOVED = sys::SDL_EVENT_JOYSTICK_REMOVED,
        GAMEPAD_AXIS_MOTION = sys::SDL_EVENT_GAMEPAD_AXIS_MOTION,
        GAMEPAD_BUTTON_DOWN = sys::SDL_EVENT_GAMEPAD_BUTTON_DOWN,
        GAMEPAD_BUTTON_UP = sys::SDL_EVENT_GAMEPAD_BUTTON_UP,
        GAMEPAD_ADDED = sys::SDL_EVENT_GAMEPAD_ADDED,
        GAMEPAD_REMOVED = sys::SDL_EVENT_GAMEPAD_REMOVED,
        GAMEPAD_REMAPPED = sys::SDL_EVENT_GAMEPAD_REMAPPED,
        CAMERA_DEVICE_ADDED = sys::SDL_EVENT_CAMERA_DEVICE_ADDED,
        CAMERA_DEVICE_REMOVED = sys::SDL_EVENT_CAMERA_DEVICE_REMOVED,
        CAMERA_DEVICE_APPROVED = sys::SDL_EVENT_CAMERA_DEVICE_APPROVED,
        CAMERA_DEVICE_DENIED = sys::SDL_EVENT_CAMERA_DEVICE_DENIED,
        USER = sys::SDL_EVENT_USER,
        LAST = sys::SDL_EVENT_LAST,
    }
}

impl EventType {
    /// `true` for application-defined types (`USER..=LAST`).
    pub fn is_user(self) -> bool {
        (EventType::USER..=EventType::LAST).contains(&self)
    }
}

/// A decoded event. Timestamps are nanoseconds since SDL was initialised.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Quit {
        timestamp: u64,
    },
    Window {
        event_type: EventType,
        timestamp: u64,
        window_id: u32,
        data1: i32,
        data2: i32,
    },
    Keyboard {
        event_type: EventType,
        timestamp: u64,
        window_id: u32,
        which: u32,
        scancode: i32,
        key: Keycode,
        modifiers: u16,
        down: bool,
        repeat: bool,
    },
    MouseButton {
        event_type: EventType,
        timestamp: u64,
        window_id: u32,
        which: u32,
        button: u8,
        down: bool,
        clicks: u8,
        x: f32,
        y: f32,
    },
    GamepadDevice {
        event_type: EventType,
        timestamp: u64,
        which: u32,
    },
    GamepadAxis {
        timestamp: u64,
        which: u32,
        axis: u8,
        value: i16,
    },
    GamepadButton {
        event_type: EventType,
        timestamp: u64,
        which: u32,
        button: u8,
        down: bool,
    },
    CameraDevice {
        event_type: EventType,
        timestamp: u64,
        which: u32,
    },
    User {
        event_type: EventType,
        timestamp: u64,
        window_id: u32,
        code: i32,
    },
    Other {
        event_type: EventType,
        timestamp: u64,
    },
}

impl Event {
    /// Decodes the union by its type field.
    pub fn from_raw(raw: &sys::Event) -> Self {
        // Every member is plain integers, floats or pointers, so reading any
        // of them from the 128 initialised bytes is sound.
        let (raw_type, timestamp) = unsafe { (raw.type_, raw.common.timestamp) };
        let event_type = EventType(raw_type);
        match raw_type {
            sys::SDL_EVENT_QUIT => Event::Quit { timestamp },
            sys::SDL_EVENT_WINDOW_SHOWN..=sys::SDL_EVENT_WINDOW_CLOSE_REQUESTED => {
                let window = unsafe { raw.window };
                Event::Window {
                    event_type,
                    timestamp,
                    window_id: window.windowID,
                    data1: window.data1,
                    data2: window.data2,
                }
            }
            sys::SDL_EVENT_KEY_DOWN | sys::SDL_EVENT_KEY_UP => {
                let key = unsafe { raw.key };
                Event::Keyboard {
                    event_type,
                    timestamp,
                    window_id: key.windowID,
                    which: key.which,
                    scancode: key.scancode,
                    key: Keycode(key.key),
                    modifiers: key.mod_,
                    down: from_bool(key.down),
                    repeat: from_bool(key.repeat),
                }
            }
            sys::SDL_EVENT_MOUSE_BUTTON_DOWN | sys::SDL_EVENT_MOUSE_BUTTON_UP => {
                let button = unsafe { raw.button };
                Event::MouseButton {
                    event_type,
                    timestamp,
                    window_id: button.windowID,
                    which: button.which,
                    button: button.button,
                    down: from_bool(button.down),
                    clicks: button.clicks,
                    x: button.x,
                    y: button.y,
                }
            }
            sys::SDL_EVENT_GAMEPAD_ADDED
            | sys::SDL_EVENT_GAMEPAD_REMOVED
            | sys::SDL_EVENT_GAMEPAD_REMAPPED => Event::GamepadDevice {
                event_type,
                timestamp,
                which: unsafe { raw.gdevice.which },
            },
            sys::SDL_EVENT_GAMEPAD_AXIS_MOTION => {
                let axis = unsafe { raw.gaxis };
                Event::GamepadAxis {
                    timestamp,
                    which: axis.which,
                    axis: axis.axis,
                    value: axis.value,
                }
            }
            sys::SDL_EVENT_GAMEPAD_BUTTON_DOWN | sys::SDL_EVENT_GAMEPAD_BUTTON_UP => {
                let button = unsafe { raw.gbutton };
                Event::GamepadButton {
                    event_type,
                    timestamp,
                    which: button.which,
                    button: button.button,
                    down: from_bool(button.down),
                }
            }
            sys::SDL_EVENT_CAMERA_DEVICE_ADDED..=sys::SDL_EVENT_CAMERA_DEVICE_DENIED => {
                Event::CameraDevice {
                    event_type,
                    timestamp,
                    which: unsafe { raw.cdevice.which },
                }
            }
            sys::SDL_EVENT_USER..=sys::SDL_EVENT_LAST => {
                let user = unsafe { raw.user };
                Event::User {
                    event_type,
                    timestamp,
                    window_id: user.windowID,
                    code: user.code,
                }
            }
            _ => Event::Other {
                event_type,
                timestamp,
            },
        }
    }

    pub fn event_type(&self) -> EventType {
        match self {
            Event::Quit { .. } => EventType::QUIT,
            Event::GamepadAxis { .. } => EventType::GAMEPAD_AXIS_MOTION,
            Event::Window { event_type, .. }
            | Event::Keyboard { event_type, .. }
            | Event::MouseButton { event_type, .. }
            | Event::GamepadDevice { event_type, .. }
            | Event::GamepadButton { event_type, .. }
            | Event::CameraDevice { event_type, .. }
            | Event::User { event_type, .. }
            | Event::Other { event_type, .. } => *event_type,
        }
    }

    pub fn timestamp(&self) -> u64 {
        match self {
            Event::Quit { timestamp }
            | Event::Window { timestamp, .. }
            | Event::Keyboard { timestamp, .. }
            | Event::MouseButton { timestamp, .. }
            | Event::GamepadDevice { timestamp, .. }
            | Event::GamepadAxis { timestamp, .. }
            | Event::GamepadButton { timestamp, .. }
            | Event::CameraDevice { timestamp, .. }
            | Event::User { timestamp, .. }
            | Event::Other { timestamp, .. } => *timestamp,
        }
    }
}

impl Sdl {
    /// Takes the next event from the queue, `None` if it is empty.
    ///
    /// Never blocks.
    pub fn poll_event(&self) -> Result<Option<Event>> {
        let mut raw = sys::Event::default();
        let pending = unsafe { self.api().poll_event(&mut raw) }?;
        Ok(from_bool(pending).then(|| Event::from_raw(&raw)))
    }

    /// Drains the queue.
    pub fn poll_iter(&self) -> impl Iterator<Item = Result<Event>> + '_ {
        std::iter::from_fn(move || self.poll_event().transpose())
    }

    /// Allocates `count` consecutive application event types and returns the
    /// first one.
    pub fn register_events(&self, count: i32) -> Result<EventType> {
        self.api().clear_last_error()?;
        let first = unsafe { self.api().register_events(count) }?;
        if first == 0 {
            return Err(self.api().call_failed("SDL_RegisterEvents"));
        }
        Ok(EventType(first))
    }

    /// Returns a handle that can push events from any thread.
    pub fn event_sender(&self) -> EventSender {
        EventSender {
            api: self.api().clone(),
        }
    }
}

/// Pushes events onto the queue. `Send + Sync`: `SDL_PushEvent` may be
/// called from any thread.
#[derive(Debug, Clone)]
pub struct EventSender {
    api: SdlApiHandle,
}

impl EventSender {
    /// Pushes an application event of a type from [`Sdl::register_events`]
    /// (or [`EventType::USER`]).
    ///
    /// Returns `Ok(false)` if an event filter dropped the event.
    pub fn push_user_event(
        &self,
        event_type: EventType,
        window_id: u32,
        code: i32,
    ) -> Result<bool> {
        if !event_type.is_user() {
            return Err(Error::InvalidValue {
                kind: "user EventType",
                value: event_type.raw() as i64,
            });
        }
        let mut raw = sys::Event::default();
        raw.user = sys::UserEvent {
            type_: event_type.raw(),
            reserved: 0,
            timestamp: 0,
            windowID: window_id,
            code,
            data1: ptr::null_mut(),
            data2: ptr::null_mut(),
        };
        self.push(&mut raw)
    }

    /// Asks the application to quit.
    pub fn push_quit(&self) -> Result<bool> {
        let mut raw = sys::Event::default();
        raw.quit = sys::QuitEvent {
            type_: sys::SDL_EVENT_QUIT,
            ..Default::default()
        };
        self.push(&mut raw)
    }

    fn push(&self, raw: &mut sys::Event) -> Result<bool> {
        // A filtered event also returns false, but without setting an error.
        self.api.clear_last_error()?;
        let pushed = unsafe { self.api.push_event(raw) }?;
        if from_bool(pushed) {
            return Ok(true);
        }
        self.api.check_error_set("SDL_PushEvent")?;
        Ok(false)
    }
}
