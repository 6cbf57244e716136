// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Library initialisation and the context every handle keeps alive.
//!
//! [`Sdl`] calls `SDL_Init` on construction and `SDL_Quit` when the last
//! reference to its context goes away. Every handle created through it holds
//! that context, so SDL cannot be shut down underneath a live window, gamepad
//! or camera.

use std::{marker::PhantomData, rc::Rc};

use sdl3_sys as sys;

use crate::{
    Error, Result,
    api::SdlApiHandle,
    marshal::{self, buffer::NativeBuffer, text},
};

native_flags! {
    /// Subsystems passed to `SDL_Init`.
    pub struct InitFlags(u32) {
        AUDIO = sys::SDL_INIT_AUDIO,
        /// Implies `EVENTS`.
        VIDEO = sys::SDL_INIT_VIDEO,
        /// Implies `EVENTS`.
        JOYSTICK = sys::SDL_INIT_JOYSTICK,
        HAPTIC = sys::SDL_INIT_HAPTIC,
        /// Implies `JOYSTICK`.
        GAMEPAD = sys::SDL_INIT_GAMEPAD,
        EVENTS = sys::SDL_INIT_EVENTS,
        SENSOR = sys::SDL_INIT_SENSOR,
        /// Implies `EVENTS`.
        CAMERA = sys::SDL_INIT_CAMERA,
    }
}

/// Shared state behind [`Sdl`] and every handle created from it.
pub(crate) struct SdlContext {
    pub(crate) api: SdlApiHandle,
    initialized: bool,
    // SDL's video, event and device state is bound to the initialising thread.
    _not_send: PhantomData<*const ()>,
}

impl SdlContext {
    fn quit(mut self) -> Result<()> {
        self.initialized = false;
        unsafe { self.api.quit() }?;
        Ok(())
    }
}

impl Drop for SdlContext {
    fn drop(&mut self) {
        if self.initialized
            && let Err(err) = unsafe { self.api.quit() }
        {
            tracing::error!("Failed to shut down SDL: {:?}", err);
        }
    }
}

/// An initialised SDL library.
///
/// Cheap to clone; `SDL_Quit` runs once the last clone and the last handle
/// created from it are gone. Not `Send`: SDL expects to be driven from the
/// thread that initialised it.
#[derive(Clone)]
pub struct Sdl {
    context: Rc<SdlContext>,
}

impl Sdl {
    /// Initialises the requested subsystems.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Call`] with SDL's message if any subsystem fails to
    /// start.
    pub fn init(api: SdlApiHandle, flags: InitFlags) -> Result<Self> {
        let ok = unsafe { api.init(flags.bits()) }?;
        api.check_bool("SDL_Init", ok)?;
        tracing::debug!("SDL initialised with {:?}", flags);
        Ok(Self {
            context: Rc::new(SdlContext {
                api,
                initialized: true,
                _not_send: PhantomData,
            }),
        })
    }

    /// Shuts SDL down now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if clones of this context or handles created
    /// from it are still alive. Nothing is shut down in that case.
    pub fn quit(self) -> Result<()> {
        Rc::into_inner(self.context)
            .ok_or_else(|| Error::Other("SDL context is still in use".to_string()))?
            .quit()
    }

    /// The loaded library behind this context.
    pub fn api(&self) -> &SdlApiHandle {
        &self.context.api
    }

    pub(crate) fn context(&self) -> &Rc<SdlContext> {
        &self.context
    }

    /// Returns which of `flags` are currently initialised.
    pub fn was_init(&self, flags: InitFlags) -> Result<InitFlags> {
        Ok(InitFlags::from_bits(unsafe { self.api().was_init(flags.bits()) }?))
    }

    /// Puts `text` on the clipboard.
    pub fn set_clipboard_text(&self, text: &str) -> Result<()> {
        let api = self.api();
        text::with_c_str(text, |text| {
            let ok = unsafe { api.set_clipboard_text(text) }?;
            api.check_bool("SDL_SetClipboardText", ok)
        })
    }

    /// Returns the clipboard contents, empty if there are none.
    pub fn clipboard_text(&self) -> Result<String> {
        let api = self.api();
        api.clear_last_error()?;
        let ptr = unsafe { api.get_clipboard_text() }?;
        let _buffer = NativeBuffer::new(api, ptr.cast());
        let clipboard = unsafe { text::from_borrowed(ptr) }?.unwrap_or_default();
        // SDL answers failure with an empty string.
        if clipboard.is_empty() {
            api.check_error_set("SDL_GetClipboardText")?;
        }
        Ok(clipboard)
    }

    pub fn has_clipboard_text(&self) -> Result<bool> {
        Ok(marshal::from_bool(unsafe {
            self.api().has_clipboard_text()
        }?))
    }
}

impl std::fmt::Debug for Sdl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sdl")
            .field("api", &self.context.api)
            .finish_non_exhaustive()
    }
}
