// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Music playback through SDL3_mixer.
//!
//! SDL3_mixer is a separate library with its own entry-point table. It
//! reports failures through SDL core's last-error slot, so every mixer call
//! is checked against the core library the mixer was initialised with.

use std::{cell::Cell, ffi::OsStr, path::Path, ptr, rc::Rc, sync::Arc};

use sdl3_sys as sys;
use tracing::{debug, warn};

use crate::{
    Error, Result, Sdl, SdlApi,
    context::SdlContext,
    handle::{Handle, NativeResource, Ownership},
    marshal::text,
};

/// Shared handle to a loaded SDL3_mixer library.
pub type MixerApiHandle = Arc<sys::MixerApi>;

/// Loads the SDL3_mixer library from `path`.
pub fn load_mixer_api(path: impl AsRef<OsStr>) -> Result<MixerApiHandle> {
    let path = path.as_ref();
    let table = unsafe { sys::MixerApi::new(path) }?;
    debug!("Loaded SDL3_mixer library from {}", path.to_string_lossy());
    for symbol in table.missing_symbols() {
        warn!("SDL3_mixer library does not export {symbol}");
    }
    Ok(Arc::new(table))
}

native_flags! {
    /// Decoders to load with `Mix_Init`.
    pub struct MixerInitFlags(u32) {
        FLAC = sys::MIX_INIT_FLAC,
        MOD = sys::MIX_INIT_MOD,
        MP3 = sys::MIX_INIT_MP3,
        OGG = sys::MIX_INIT_OGG,
        MID = sys::MIX_INIT_MID,
        OPUS = sys::MIX_INIT_OPUS,
        WAVPACK = sys::MIX_INIT_WAVPACK,
    }
}

native_constants! {
    /// A sample format (`SDL_AudioFormat`).
    pub struct AudioFormat(i32) {
        UNKNOWN = sys::SDL_AUDIO_UNKNOWN,
        U8 = sys::SDL_AUDIO_U8,
        S8 = sys::SDL_AUDIO_S8,
        S16LE = sys::SDL_AUDIO_S16LE,
        S16BE = sys::SDL_AUDIO_S16BE,
        S32LE = sys::SDL_AUDIO_S32LE,
        S32BE = sys::SDL_AUDIO_S32BE,
        F32LE = sys::SDL_AUDIO_F32LE,
        F32BE = sys::SDL_AUDIO_F32BE,
    }
}

/// Output format requested from the audio device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AudioSpec {
    pub format: AudioFormat,
    pub channels: i32,
    pub freq: i32,
}

/// Loudest music volume accepted by [`Mixer::set_music_volume`].
pub const MAX_VOLUME: i32 = sys::MIX_MAX_VOLUME;

pub(crate) struct MixerContext {
    sdl: Rc<SdlContext>,
    mixer: MixerApiHandle,
    audio_open: Cell<bool>,
}

impl MixerContext {
    fn api(&self) -> &SdlApi {
        &self.sdl.api
    }
}

impl Drop for MixerContext {
    fn drop(&mut self) {
        if self.audio_open.get()
            && let Err(err) = unsafe { self.mixer.close_audio() }
        {
            tracing::error!("Failed to close SDL3_mixer audio: {:?}", err);
        }
        if let Err(err) = unsafe { self.mixer.quit() } {
            tracing::error!("Failed to shut down SDL3_mixer: {:?}", err);
        }
    }
}

/// An initialised SDL3_mixer. Shut down once it and every [`Music`] loaded
/// through it are dropped.
pub struct Mixer {
    context: Rc<MixerContext>,
}

impl std::fmt::Debug for Mixer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mixer")
            .field("audio_open", &self.context.audio_open.get())
            .finish_non_exhaustive()
    }
}

impl Mixer {
    /// Initialises the requested decoders.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Call`] if any of `flags` could not be initialised.
    pub fn init(sdl: &Sdl, mixer: MixerApiHandle, flags: MixerInitFlags) -> Result<Self> {
        let initialized = MixerInitFlags::from_bits(unsafe { mixer.init(flags.bits()) }?);
        let context = MixerContext {
            sdl: sdl.context().clone(),
            mixer,
            audio_open: Cell::new(false),
        };
        if !initialized.contains(flags) {
            // Dropping the context balances the partial Mix_Init.
            let err = context.api().call_failed("Mix_Init");
            drop(context);
            return Err(err);
        }
        Ok(Self {
            context: Rc::new(context),
        })
    }

    fn api(&self) -> &SdlApi {
        self.context.api()
    }

    /// Opens an audio device for playback.
    ///
    /// `device` defaults to the system's default playback device and `spec`
    /// to the device's native format.
    pub fn open_audio(&self, device: Option<u32>, spec: Option<AudioSpec>) -> Result<()> {
        let device = device.unwrap_or(sys::SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK);
        let spec = spec.map(|spec| sys::AudioSpec {
            format: spec.format.raw(),
            channels: spec.channels,
            freq: spec.freq,
        });
        let spec_ptr = spec
            .as_ref()
            .map_or(ptr::null(), |spec| spec as *const sys::AudioSpec);
        let ok = unsafe { self.context.mixer.open_audio(device, spec_ptr) }?;
        self.api().check_bool("Mix_OpenAudio", ok)?;
        self.context.audio_open.set(true);
        Ok(())
    }

    pub fn close_audio(&self) -> Result<()> {
        if self.context.audio_open.replace(false) {
            unsafe { self.context.mixer.close_audio() }?;
        }
        Ok(())
    }

    /// Loads a music file. The format is detected from its contents.
    pub fn load_music(&self, path: impl AsRef<Path>) -> Result<Music> {
        let path = path.as_ref();
        let path = path
            .to_str()
            .ok_or_else(|| Error::Other(format!("path is not valid UTF-8: {}", path.display())))?;
        let raw = text::with_c_str(path, |path| {
            Ok(unsafe { self.context.mixer.load_mus(path) }?)
        })?;
        let raw = self.api().check_non_null("Mix_LoadMUS", raw)?;
        Ok(Music {
            handle: Handle::new(self.context.clone(), raw.as_ptr(), Ownership::Owned),
        })
    }

    /// Stops music playback.
    pub fn halt_music(&self) -> Result<()> {
        unsafe { self.context.mixer.halt_music() }?;
        Ok(())
    }

    /// The current music volume, `0..=MAX_VOLUME`.
    pub fn music_volume(&self) -> Result<i32> {
        Ok(unsafe { self.context.mixer.volume_music(-1) }?)
    }

    /// Sets the music volume, clamped to `0..=MAX_VOLUME`, and returns the
    /// previous volume.
    pub fn set_music_volume(&self, volume: i32) -> Result<i32> {
        let volume = volume.clamp(0, MAX_VOLUME);
        Ok(unsafe { self.context.mixer.volume_music(volume) }?)
    }
}

impl NativeResource for sys::Music {
    type Context = MixerContext;
    const KIND: &'static str = "music";

    unsafe fn release(context: &MixerContext, raw: *mut Self) -> Result<()> {
        unsafe { context.mixer.free_music(raw) }?;
        Ok(())
    }
}

/// A loaded music file. Freed when dropped.
#[derive(Debug)]
pub struct Music {
    handle: Handle<sys::Music>,
}

impl Music {
    /// Starts playing. `loops` is the number of extra repeats; -1 repeats
    /// forever.
    pub fn play(&self, loops: i32) -> Result<()> {
        let context = self.handle.context();
        let ok = unsafe { context.mixer.play_music(self.handle.as_ptr(), loops) }?;
        context.api().check_bool("Mix_PlayMusic", ok)
    }

    /// Frees the music now.
    pub fn free(mut self) -> Result<()> {
        self.handle.release()
    }
}
