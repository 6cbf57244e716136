// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Windows.

use std::{os::raw::c_int, ptr, rc::Rc};

use sdl3_sys as sys;

use crate::{
    Error, Renderer, Result, Sdl,
    context::SdlContext,
    handle::{Handle, NativeResource, Ownership},
    marshal::text,
    render::RendererInner,
};

native_flags! {
    /// Window creation and state flags (`SDL_WindowFlags`).
    pub struct WindowFlags(u64) {
        FULLSCREEN = sys::SDL_WINDOW_FULLSCREEN,
        OPENGL = sys::SDL_WINDOW_OPENGL,
        OCCLUDED = sys::SDL_WINDOW_OCCLUDED,
        HIDDEN = sys::SDL_WINDOW_HIDDEN,
        BORDERLESS = sys::SDL_WINDOW_BORDERLESS,
        RESIZABLE = sys::SDL_WINDOW_RESIZABLE,
        MINIMIZED = sys::SDL_WINDOW_MINIMIZED,
        MAXIMIZED = sys::SDL_WINDOW_MAXIMIZED,
        MOUSE_GRABBED = sys::SDL_WINDOW_MOUSE_GRABBED,
        INPUT_FOCUS = sys::SDL_WINDOW_INPUT_FOCUS,
        MOUSE_FOCUS = sys::SDL_WINDOW_MOUSE_FOCUS,
        EXTERNAL = sys::SDL_WINDOW_EXTERNAL,
        MODAL = sys::SDL_WINDOW_MODAL,
        HIGH_PIXEL_DENSITY = sys::SDL_WINDOW_HIGH_PIXEL_DENSITY,
        MOUSE_CAPTURE = sys::SDL_WINDOW_MOUSE_CAPTURE,
        ALWAYS_ON_TOP = sys::SDL_WINDOW_ALWAYS_ON_TOP,
        UTILITY = sys::SDL_WINDOW_UTILITY,
        TOOLTIP = sys::SDL_WINDOW_TOOLTIP,
        POPUP_MENU = sys::SDL_WINDOW_POPUP_MENU,
        KEYBOARD_GRABBED = sys::SDL_WINDOW_KEYBOARD_GRABBED,
        VULKAN = sys::SDL_WINDOW_VULKAN,
        METAL = sys::SDL_WINDOW_METAL,
        TRANSPARENT = sys::SDL_WINDOW_TRANSPARENT,
        NOT_FOCUSABLE = sys::SDL_WINDOW_NOT_FOCUSABLE,
    }
}

impl NativeResource for sys::Window {
    type Context = SdlContext;
    const KIND: &'static str = "window";

    unsafe fn release(context: &SdlContext, raw: *mut Self) -> Result<()> {
        unsafe { context.api.destroy_window(raw) }?;
        Ok(())
    }
}

/// A window.
///
/// Renderers created for the window keep it alive; SDL destroys a window's
/// renderer together with the window, so the window is only destroyed after
/// its renderer.
#[derive(Debug)]
pub struct Window {
    pub(crate) handle: Rc<Handle<sys::Window>>,
}

impl Window {
    pub(crate) fn new(handle: Handle<sys::Window>) -> Self {
        Self {
            handle: Rc::new(handle),
        }
    }

    /// Whether this window is destroyed when dropped.
    pub fn ownership(&self) -> Ownership {
        self.handle.ownership()
    }

    /// Destroys the window now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if a renderer still uses the window.
    pub fn destroy(self) -> Result<()> {
        Rc::try_unwrap(self.handle)
            .map_err(|_| Error::Other("window is still in use by a renderer".to_string()))?
            .release()
    }

    fn api(&self) -> &crate::SdlApi {
        &self.handle.context().api
    }

    /// The numeric ID SDL uses for this window in events.
    pub fn id(&self) -> Result<u32> {
        self.api().clear_last_error()?;
        let id = unsafe { self.api().get_window_id(self.handle.as_ptr()) }?;
        if id == 0 {
            return Err(self.api().call_failed("SDL_GetWindowID"));
        }
        Ok(id)
    }

    pub fn set_title(&self, title: &str) -> Result<()> {
        text::with_c_str(title, |title| {
            let ok = unsafe { self.api().set_window_title(self.handle.as_ptr(), title) }?;
            self.api().check_bool("SDL_SetWindowTitle", ok)
        })
    }

    /// The window title, empty if it has none.
    pub fn title(&self) -> Result<String> {
        let title = unsafe { self.api().get_window_title(self.handle.as_ptr()) }?;
        Ok(unsafe { text::from_borrowed(title) }?.unwrap_or_default())
    }

    pub fn set_size(&self, width: i32, height: i32) -> Result<()> {
        let ok = unsafe {
            self.api()
                .set_window_size(self.handle.as_ptr(), width, height)
        }?;
        self.api().check_bool("SDL_SetWindowSize", ok)
    }

    /// The size of the client area in window coordinates.
    pub fn size(&self) -> Result<(i32, i32)> {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        let ok = unsafe {
            self.api()
                .get_window_size(self.handle.as_ptr(), &mut width, &mut height)
        }?;
        self.api().check_bool("SDL_GetWindowSize", ok)?;
        Ok((width, height))
    }
}

impl Sdl {
    /// Creates a window. The window is destroyed when dropped.
    pub fn create_window(
        &self,
        title: &str,
        width: i32,
        height: i32,
        flags: WindowFlags,
    ) -> Result<Window> {
        let api = self.api();
        let raw = text::with_c_str(title, |title| {
            Ok(unsafe { api.create_window(title, width, height, flags.bits()) }?)
        })?;
        let raw = api.check_non_null("SDL_CreateWindow", raw)?;
        Ok(Window::new(Handle::new(
            self.context().clone(),
            raw.as_ptr(),
            Ownership::Owned,
        )))
    }

    /// Looks up a window by the ID carried in its events.
    ///
    /// The returned window is borrowed: dropping it leaves the window open.
    pub fn window_from_id(&self, id: u32) -> Result<Window> {
        let api = self.api();
        let raw = unsafe { api.get_window_from_id(id) }?;
        let raw = api.check_non_null("SDL_GetWindowFromID", raw)?;
        Ok(Window::new(Handle::new(
            self.context().clone(),
            raw.as_ptr(),
            Ownership::Borrowed,
        )))
    }

    /// Creates a window together with a renderer for it.
    pub fn create_window_and_renderer(
        &self,
        title: &str,
        width: i32,
        height: i32,
        flags: WindowFlags,
    ) -> Result<(Window, Renderer)> {
        let api = self.api();
        let mut window: *mut sys::Window = ptr::null_mut();
        let mut renderer: *mut sys::Renderer = ptr::null_mut();
        text::with_c_str(title, |title| {
            let ok = unsafe {
                api.create_window_and_renderer(
                    title,
                    width,
                    height,
                    flags.bits(),
                    &mut window,
                    &mut renderer,
                )
            }?;
            api.check_bool("SDL_CreateWindowAndRenderer", ok)
        })?;

        let window = Window::new(Handle::new(
            self.context().clone(),
            window,
            Ownership::Owned,
        ));
        let renderer = RendererInner::new(
            Handle::new(self.context().clone(), renderer, Ownership::Owned),
            window.handle.clone(),
        );
        Ok((window, Renderer::from_inner(renderer)))
    }
}
