// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Pixel format codes and their layout details.

use sdl3_sys as sys;

use crate::{Result, api::SdlApi, marshal::text};

pub use sys::{Color, FRect, Rect};

native_constants! {
    /// A pixel format code (`SDL_PixelFormat`).
    pub struct PixelFormat(u32) {
        UNKNOWN = sys::SDL_PIXELFORMAT_UNKNOWN,
        RGB565 = sys::SDL_PIXELFORMAT_RGB565,
        XRGB8888 = sys::SDL_PIXELFORMAT_XRGB8888,
        ARGB8888 = sys::SDL_PIXELFORMAT_ARGB8888,
        RGBA8888 = sys::SDL_PIXELFORMAT_RGBA8888,
        ABGR8888 = sys::SDL_PIXELFORMAT_ABGR8888,
        BGRA8888 = sys::SDL_PIXELFORMAT_BGRA8888,
        RGB24 = sys::SDL_PIXELFORMAT_RGB24,
        BGR24 = sys::SDL_PIXELFORMAT_BGR24,
        YV12 = sys::SDL_PIXELFORMAT_YV12,
        IYUV = sys::SDL_PIXELFORMAT_IYUV,
        YUY2 = sys::SDL_PIXELFORMAT_YUY2,
        UYVY = sys::SDL_PIXELFORMAT_UYVY,
        YVYU = sys::SDL_PIXELFORMAT_YVYU,
        NV12 = sys::SDL_PIXELFORMAT_NV12,
        NV21 = sys::SDL_PIXELFORMAT_NV21,
        MJPG = sys::SDL_PIXELFORMAT_MJPG,
    }
}

impl PixelFormat {
    /// `true` for FourCC codes (YUV and compressed formats).
    pub fn is_fourcc(self) -> bool {
        self.0 != 0 && (self.0 >> 28) & 0x0F != 1
    }

    /// `true` for compressed formats, whose frames have no row layout.
    pub fn is_compressed(self) -> bool {
        self == Self::MJPG
    }

    /// Bytes per pixel in the first plane, as `SDL_BYTESPERPIXEL` computes it.
    ///
    /// `None` for compressed and unknown formats.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self {
            Self::UNKNOWN | Self::MJPG => None,
            Self::YUY2 | Self::UYVY | Self::YVYU => Some(2),
            format if format.is_fourcc() => Some(1),
            format => Some((format.0 & 0xFF) as usize).filter(|&bytes| bytes > 0),
        }
    }

    /// Smallest pitch that holds `width` pixels of this format.
    pub fn min_pitch(self, width: usize) -> Option<usize> {
        self.bytes_per_pixel()?.checked_mul(width)
    }

    /// Bytes occupied by `rows` rows of `pitch` bytes in this format.
    ///
    /// Planar YUV formats carry two subsampled chroma planes after the luma
    /// plane (interleaved for NV12/NV21), which add half of the luma size.
    /// For compressed formats `pitch` is the size of the whole frame.
    pub fn buffer_len(self, pitch: usize, rows: usize) -> Option<usize> {
        if self.is_compressed() {
            return Some(pitch);
        }
        let luma = pitch.checked_mul(rows)?;
        match self {
            Self::YV12 | Self::IYUV | Self::NV12 | Self::NV21 => {
                let chroma = pitch.div_ceil(2).checked_mul(rows.div_ceil(2))?;
                luma.checked_add(chroma.checked_mul(2)?)
            }
            _ => Some(luma),
        }
    }
}

/// Owned copy of `SDL_PixelFormatDetails`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelFormatInfo {
    pub format: PixelFormat,
    pub bits_per_pixel: u8,
    pub bytes_per_pixel: u8,
    /// Channel masks in R, G, B, A order.
    pub masks: [u32; 4],
    pub bits: [u8; 4],
    pub shifts: [u8; 4],
}

impl From<&sys::PixelFormatDetails> for PixelFormatInfo {
    fn from(details: &sys::PixelFormatDetails) -> Self {
        Self {
            format: PixelFormat(details.format),
            bits_per_pixel: details.bits_per_pixel,
            bytes_per_pixel: details.bytes_per_pixel,
            masks: [details.Rmask, details.Gmask, details.Bmask, details.Amask],
            bits: [details.Rbits, details.Gbits, details.Bbits, details.Abits],
            shifts: [details.Rshift, details.Gshift, details.Bshift, details.Ashift],
        }
    }
}

impl SdlApi {
    /// Returns the layout of `format`.
    ///
    /// The record SDL returns is cached for the life of the library; this
    /// copies it.
    pub fn pixel_format_details(&self, format: PixelFormat) -> Result<PixelFormatInfo> {
        let details = unsafe { self.get_pixel_format_details(format.raw()) }?;
        let details = self.check_non_null("SDL_GetPixelFormatDetails", details.cast_mut())?;
        Ok(PixelFormatInfo::from(unsafe { details.as_ref() }))
    }

    /// Returns SDL's name for `format`, e.g. `SDL_PIXELFORMAT_ARGB8888`.
    pub fn pixel_format_name(&self, format: PixelFormat) -> Result<String> {
        let name = unsafe { self.get_pixel_format_name(format.raw()) }?;
        let name = unsafe { text::from_borrowed(name) }?;
        name.ok_or_else(|| self.call_failed("SDL_GetPixelFormatName"))
    }
}
