// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Camera capture.
//!
//! Frames are acquired without blocking and must be handed back to SDL
//! before the camera can reuse their memory. [`CameraFrame`] does that when
//! it goes out of scope.

use std::{mem::ManuallyDrop, ptr, ptr::NonNull};

use sdl3_sys as sys;

use crate::{
    PixelFormat, Result, Sdl, SdlApi,
    context::SdlContext,
    handle::{Handle, NativeResource, Ownership},
    marshal::{self, text},
};

/// Instance ID of a connected camera.
pub type CameraId = u32;

native_enum! {
    /// Whether the user allowed access to a camera.
    pub enum CameraPermission: sys::CameraPermissionState {
        Denied = sys::SDL_CAMERA_PERMISSION_STATE_DENIED,
        Pending = sys::SDL_CAMERA_PERMISSION_STATE_PENDING,
        Approved = sys::SDL_CAMERA_PERMISSION_STATE_APPROVED,
    }
}

/// A capture format a camera supports (`SDL_CameraSpec`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CameraSpec {
    pub format: PixelFormat,
    pub colorspace: u32,
    pub width: i32,
    pub height: i32,
    pub framerate_numerator: i32,
    pub framerate_denominator: i32,
}

impl CameraSpec {
    /// Frames per second, 0 if the denominator is 0.
    pub fn framerate(&self) -> f64 {
        if self.framerate_denominator == 0 {
            return 0.0;
        }
        f64::from(self.framerate_numerator) / f64::from(self.framerate_denominator)
    }

    fn to_raw(self) -> sys::CameraSpec {
        sys::CameraSpec {
            format: self.format.raw(),
            colorspace: self.colorspace,
            width: self.width,
            height: self.height,
            framerate_numerator: self.framerate_numerator,
            framerate_denominator: self.framerate_denominator,
        }
    }
}

impl From<&sys::CameraSpec> for CameraSpec {
    fn from(spec: &sys::CameraSpec) -> Self {
        Self {
            format: PixelFormat(spec.format),
            colorspace: spec.colorspace,
            width: spec.width,
            height: spec.height,
            framerate_numerator: spec.framerate_numerator,
            framerate_denominator: spec.framerate_denominator,
        }
    }
}

impl NativeResource for sys::Camera {
    type Context = SdlContext;
    const KIND: &'static str = "camera";

    unsafe fn release(context: &SdlContext, raw: *mut Self) -> Result<()> {
        unsafe { context.api.close_camera(raw) }?;
        Ok(())
    }
}

/// An opened camera. Closed when dropped.
#[derive(Debug)]
pub struct Camera {
    handle: Handle<sys::Camera>,
}

impl Camera {
    fn api(&self) -> &SdlApi {
        &self.handle.context().api
    }

    /// Closes the camera now.
    pub fn close(mut self) -> Result<()> {
        self.handle.release()
    }

    /// Whether the user has approved access yet.
    ///
    /// Frames only arrive once this is [`CameraPermission::Approved`].
    pub fn permission_state(&self) -> Result<CameraPermission> {
        let state = unsafe { self.api().get_camera_permission_state(self.handle.as_ptr()) }?;
        CameraPermission::try_from(state)
    }

    /// Takes the newest frame, `None` if no new frame is ready.
    ///
    /// Never blocks.
    pub fn acquire_frame(&self) -> Result<Option<CameraFrame<'_>>> {
        let mut timestamp_ns = 0u64;
        let surface = unsafe {
            self.api()
                .acquire_camera_frame(self.handle.as_ptr(), &mut timestamp_ns)
        }?;
        Ok(NonNull::new(surface).map(|surface| CameraFrame {
            camera: self,
            surface,
            timestamp_ns,
        }))
    }
}

/// A frame on loan from a [`Camera`]. Returned to SDL when dropped.
#[derive(Debug)]
pub struct CameraFrame<'c> {
    camera: &'c Camera,
    surface: NonNull<sys::Surface>,
    timestamp_ns: u64,
}

impl CameraFrame<'_> {
    fn surface(&self) -> &sys::Surface {
        unsafe { self.surface.as_ref() }
    }

    pub fn width(&self) -> i32 {
        self.surface().w
    }

    pub fn height(&self) -> i32 {
        self.surface().h
    }

    /// Length of one row in bytes.
    pub fn pitch(&self) -> usize {
        self.surface().pitch.max(0) as usize
    }

    pub fn format(&self) -> PixelFormat {
        PixelFormat(self.surface().format)
    }

    /// Capture time in nanoseconds, 0 if the camera does not report one.
    pub fn timestamp_ns(&self) -> u64 {
        self.timestamp_ns
    }

    /// The frame's pixels, all planes included.
    ///
    /// For compressed formats this is the encoded frame, `pitch()` bytes long.
    pub fn pixels(&self) -> &[u8] {
        let surface = self.surface();
        let len = self
            .format()
            .buffer_len(self.pitch(), surface.h.max(0) as usize)
            .unwrap_or(0);
        if surface.pixels.is_null() || len == 0 {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(surface.pixels.cast::<u8>(), len) }
    }

    /// Returns the frame to SDL now.
    pub fn release(self) -> Result<()> {
        let frame = ManuallyDrop::new(self);
        unsafe {
            frame
                .camera
                .api()
                .release_camera_frame(frame.camera.handle.as_ptr(), frame.surface.as_ptr())
        }?;
        Ok(())
    }
}

impl Drop for CameraFrame<'_> {
    fn drop(&mut self) {
        if let Err(err) = unsafe {
            self.camera
                .api()
                .release_camera_frame(self.camera.handle.as_ptr(), self.surface.as_ptr())
        } {
            tracing::error!("Failed to release SDL camera frame: {:?}", err);
        }
    }
}

impl Sdl {
    /// Lists the connected cameras.
    pub fn cameras(&self) -> Result<Vec<CameraId>> {
        let api = self.api();
        marshal::fetch_array(api, "SDL_GetCameras", |count| unsafe {
            api.get_cameras(count)
        })
    }

    /// A camera's human-readable name, `None` if it has none.
    pub fn camera_name(&self, id: CameraId) -> Result<Option<String>> {
        let name = unsafe { self.api().get_camera_name(id) }?;
        unsafe { text::from_borrowed(name) }
    }

    /// The formats a camera can capture in.
    pub fn camera_supported_formats(&self, id: CameraId) -> Result<Vec<CameraSpec>> {
        let api = self.api();
        marshal::fetch_pointer_array(
            api,
            "SDL_GetCameraSupportedFormats",
            |count| unsafe { api.get_camera_supported_formats(id, count) },
            |spec| Ok(CameraSpec::from(unsafe { &*spec })),
        )
    }

    /// Opens a camera. `spec` requests a format; `None` lets SDL choose.
    ///
    /// Opening succeeds before the user grants permission; check
    /// [`Camera::permission_state`] or wait for an approval event.
    pub fn open_camera(&self, id: CameraId, spec: Option<&CameraSpec>) -> Result<Camera> {
        let api = self.api();
        let spec = spec.map(|spec| spec.to_raw());
        let spec_ptr = spec
            .as_ref()
            .map_or(ptr::null(), |spec| spec as *const sys::CameraSpec);
        let raw = unsafe { api.open_camera(id, spec_ptr) }?;
        let raw = api.check_non_null("SDL_OpenCamera", raw)?;
        Ok(Camera {
            handle: Handle::new(self.context().clone(), raw.as_ptr(), Ownership::Owned),
        })
    }
}
