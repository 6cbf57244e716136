// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! 2D renderers and textures.

use std::{os::raw::c_int, ptr, rc::Rc};

use sdl3_sys as sys;

use crate::{
    CameraFrame, Color, Error, FRect, PixelFormat, Rect, Result, SdlApi, Window,
    context::SdlContext,
    handle::{Handle, NativeResource, Ownership},
    marshal::text,
};

native_enum! {
    /// How a texture's pixels are expected to change (`SDL_TextureAccess`).
    pub enum TextureAccess: sys::TextureAccess {
        /// Changes rarely, not lockable.
        Static = sys::SDL_TEXTUREACCESS_STATIC,
        /// Changes frequently, lockable.
        Streaming = sys::SDL_TEXTUREACCESS_STREAMING,
        /// Can be used as a render target.
        Target = sys::SDL_TEXTUREACCESS_TARGET,
    }
}

impl NativeResource for sys::Renderer {
    type Context = SdlContext;
    const KIND: &'static str = "renderer";

    unsafe fn release(context: &SdlContext, raw: *mut Self) -> Result<()> {
        unsafe { context.api.destroy_renderer(raw) }?;
        Ok(())
    }
}

impl NativeResource for sys::Texture {
    type Context = SdlContext;
    const KIND: &'static str = "texture";

    unsafe fn release(context: &SdlContext, raw: *mut Self) -> Result<()> {
        unsafe { context.api.destroy_texture(raw) }?;
        Ok(())
    }
}

/// A renderer and the window it draws to.
///
/// Field order is drop order: the renderer is destroyed before the window
/// reference is let go.
#[derive(Debug)]
pub(crate) struct RendererInner {
    handle: Handle<sys::Renderer>,
    _window: Rc<Handle<sys::Window>>,
}

impl RendererInner {
    pub(crate) fn new(handle: Handle<sys::Renderer>, window: Rc<Handle<sys::Window>>) -> Self {
        Self {
            handle,
            _window: window,
        }
    }

    fn api(&self) -> &SdlApi {
        &self.handle.context().api
    }
}

/// A 2D rendering context for a window.
///
/// Textures created from the renderer keep it alive.
#[derive(Debug)]
pub struct Renderer {
    inner: Rc<RendererInner>,
}

impl Renderer {
    pub(crate) fn from_inner(inner: RendererInner) -> Self {
        Self {
            inner: Rc::new(inner),
        }
    }

    fn api(&self) -> &SdlApi {
        self.inner.api()
    }

    fn raw(&self) -> *mut sys::Renderer {
        self.inner.handle.as_ptr()
    }

    /// Destroys the renderer now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Other`] if textures created from it are still alive.
    pub fn destroy(self) -> Result<()> {
        let mut inner = Rc::try_unwrap(self.inner)
            .map_err(|_| Error::Other("renderer is still in use by a texture".to_string()))?;
        inner.handle.release()
    }

    /// The name of the rendering driver in use.
    pub fn name(&self) -> Result<String> {
        let name = unsafe { self.api().get_renderer_name(self.raw()) }?;
        let name = unsafe { text::from_borrowed(name) }?;
        name.ok_or_else(|| self.api().call_failed("SDL_GetRendererName"))
    }

    /// Sets the vertical sync interval: 0 off, 1 every refresh, -1 adaptive.
    pub fn set_vsync(&self, vsync: i32) -> Result<()> {
        let ok = unsafe { self.api().set_render_vsync(self.raw(), vsync) }?;
        self.api().check_bool("SDL_SetRenderVSync", ok)
    }

    pub fn set_draw_color(&self, color: Color) -> Result<()> {
        let ok = unsafe {
            self.api()
                .set_render_draw_color(self.raw(), color.r, color.g, color.b, color.a)
        }?;
        self.api().check_bool("SDL_SetRenderDrawColor", ok)
    }

    /// Clears the target with the draw color.
    pub fn clear(&self) -> Result<()> {
        let ok = unsafe { self.api().render_clear(self.raw()) }?;
        self.api().check_bool("SDL_RenderClear", ok)
    }

    pub fn present(&self) -> Result<()> {
        let ok = unsafe { self.api().render_present(self.raw()) }?;
        self.api().check_bool("SDL_RenderPresent", ok)
    }

    /// Creates a texture. `width` and `height` are in pixels.
    pub fn create_texture(
        &self,
        format: PixelFormat,
        access: TextureAccess,
        width: i32,
        height: i32,
    ) -> Result<Texture> {
        let raw = unsafe {
            self.api()
                .create_texture(self.raw(), format.raw(), access.to_raw(), width, height)
        }?;
        let raw = self.api().check_non_null("SDL_CreateTexture", raw)?;
        Ok(Texture {
            handle: Handle::new(
                self.inner.handle.shared_context().clone(),
                raw.as_ptr(),
                Ownership::Owned,
            ),
            _renderer: self.inner.clone(),
            format,
            width,
            height,
        })
    }

    /// Copies a texture to the target. `None` means the whole texture or
    /// the whole target respectively.
    pub fn render_texture(
        &self,
        texture: &Texture,
        src: Option<FRect>,
        dst: Option<FRect>,
    ) -> Result<()> {
        let src = src.as_ref().map_or(ptr::null(), |rect| rect as *const FRect);
        let dst = dst.as_ref().map_or(ptr::null(), |rect| rect as *const FRect);
        let ok = unsafe {
            self.api()
                .render_texture(self.raw(), texture.handle.as_ptr(), src, dst)
        }?;
        self.api().check_bool("SDL_RenderTexture", ok)
    }
}

/// A texture owned by a [`Renderer`].
#[derive(Debug)]
pub struct Texture {
    handle: Handle<sys::Texture>,
    _renderer: Rc<RendererInner>,
    format: PixelFormat,
    width: i32,
    height: i32,
}

impl Texture {
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Destroys the texture now.
    pub fn destroy(mut self) -> Result<()> {
        self.handle.release()
    }

    /// Replaces the pixels in `rect` (the whole texture if `None`).
    ///
    /// `pitch` is the length of one row of `pixels` in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] if `pitch` is narrower than one row of
    /// the updated area or `pixels` is shorter than the rows SDL will read
    /// for the texture's format, before anything is passed to SDL.
    pub fn update(&mut self, rect: Option<Rect>, pixels: &[u8], pitch: usize) -> Result<()> {
        let width = rect.map_or(self.width, |rect| rect.w).max(0) as usize;
        let rows = rect.map_or(self.height, |rect| rect.h).max(0) as usize;
        match self.format.min_pitch(width) {
            Some(min) if pitch >= min => {}
            _ => {
                return Err(Error::InvalidValue {
                    kind: "texture pitch",
                    value: pitch as i64,
                });
            }
        }
        let needed = self
            .format
            .buffer_len(pitch, rows)
            .ok_or(Error::InvalidValue {
                kind: "texture pitch",
                value: pitch as i64,
            })?;
        if pixels.len() < needed {
            return Err(Error::InvalidValue {
                kind: "texture pixel buffer length",
                value: pixels.len() as i64,
            });
        }
        let pitch = c_int::try_from(pitch).map_err(|_| Error::InvalidValue {
            kind: "texture pitch",
            value: pitch as i64,
        })?;

        let api = &self.handle.context().api;
        let rect = rect.as_ref().map_or(ptr::null(), |rect| rect as *const Rect);
        let ok = unsafe {
            api.update_texture(self.handle.as_ptr(), rect, pixels.as_ptr().cast(), pitch)
        }?;
        api.check_bool("SDL_UpdateTexture", ok)
    }

    /// Uploads a camera frame into the whole texture.
    pub fn update_from_frame(&mut self, frame: &CameraFrame<'_>) -> Result<()> {
        self.update(None, frame.pixels(), frame.pitch())
    }
}

impl Window {
    /// Creates a renderer for this window.
    ///
    /// `driver` selects a rendering driver by name; `None` lets SDL choose.
    pub fn create_renderer(&self, driver: Option<&str>) -> Result<Renderer> {
        let api = &self.handle.context().api;
        let raw = text::with_opt_c_str(driver, |driver| {
            Ok(unsafe { api.create_renderer(self.handle.as_ptr(), driver) }?)
        })?;
        let raw = api.check_non_null("SDL_CreateRenderer", raw)?;
        Ok(Renderer::from_inner(RendererInner::new(
            Handle::new(
                self.handle.shared_context().clone(),
                raw.as_ptr(),
                Ownership::Owned,
            ),
            self.handle.clone(),
        )))
    }
}
