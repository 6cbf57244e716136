// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! SDL3_mixer tests. The mixer has its own entry-point table but reports
//! failures through the core library's last-error slot.

mod common;

use std::{
    cell::RefCell,
    os::raw::{c_char, c_int},
    ptr,
    sync::Arc,
};

use common::*;
use sdl3::{AudioFormat, AudioSpec, Error, MAX_VOLUME, Mixer, MixerApiHandle, MixerInitFlags};
use sdl3_sys as sys;

#[derive(Default)]
struct Native {
    volume: c_int,
    audio_error: Option<String>,
    /// Device and whether a spec was passed to `Mix_OpenAudio`.
    opened: Option<(sys::AudioDeviceID, Option<AudioSpec>)>,
    played: Vec<c_int>,
}

thread_local! {
    static NATIVE: RefCell<Native> = RefCell::new(Native::default());
}

fn native<T>(f: impl FnOnce(&mut Native) -> T) -> T {
    NATIVE.with_borrow_mut(f)
}

const SUPPORTED: sys::MIX_InitFlags = sys::MIX_INIT_FLAC | sys::MIX_INIT_MP3 | sys::MIX_INIT_OGG;

unsafe extern "C" fn mix_init(flags: sys::MIX_InitFlags) -> sys::MIX_InitFlags {
    log_call("Mix_Init");
    if flags & !SUPPORTED != 0 {
        set_error("MOD support not available");
    }
    flags & SUPPORTED
}

unsafe extern "C" fn mix_quit() {
    log_call("Mix_Quit");
}

unsafe extern "C" fn open_audio(
    device: sys::AudioDeviceID,
    spec: *const sys::AudioSpec,
) -> sys::Bool {
    if let Some(message) = native(|native| native.audio_error.clone()) {
        set_error(&message);
        return sys::SDL_FALSE;
    }
    log_call("Mix_OpenAudio");
    let spec = unsafe { spec.as_ref() }.map(|spec| AudioSpec {
        format: AudioFormat(spec.format),
        channels: spec.channels,
        freq: spec.freq,
    });
    native(|native| native.opened = Some((device, spec)));
    sys::SDL_TRUE
}

unsafe extern "C" fn close_audio() {
    log_call("Mix_CloseAudio");
}

unsafe extern "C" fn load_mus(file: *const c_char) -> *mut sys::Music {
    let file = unsafe { arg(file) }.unwrap_or_default();
    if !file.ends_with(".ogg") {
        set_error("Unrecognized audio format");
        return ptr::null_mut();
    }
    log_call("Mix_LoadMUS");
    ptr::without_provenance_mut(0x9000)
}

unsafe extern "C" fn free_music(_music: *mut sys::Music) {
    log_call("Mix_FreeMusic");
}

unsafe extern "C" fn play_music(_music: *mut sys::Music, loops: c_int) -> sys::Bool {
    native(|native| native.played.push(loops));
    sys::SDL_TRUE
}

unsafe extern "C" fn halt_music() {
    log_call("Mix_HaltMusic");
}

unsafe extern "C" fn volume_music(volume: c_int) -> c_int {
    native(|native| {
        let previous = native.volume;
        if volume >= 0 {
            native.volume = volume;
        }
        previous
    })
}

fn mixer_table() -> MixerApiHandle {
    NATIVE.with_borrow_mut(|native| {
        *native = Native {
            volume: sys::MIX_MAX_VOLUME,
            ..Native::default()
        }
    });
    let mut table = sys::MixerApi::default();
    table.Mix_Init = Some(mix_init);
    table.Mix_Quit = Some(mix_quit);
    table.Mix_OpenAudio = Some(open_audio);
    table.Mix_CloseAudio = Some(close_audio);
    table.Mix_LoadMUS = Some(load_mus);
    table.Mix_FreeMusic = Some(free_music);
    table.Mix_PlayMusic = Some(play_music);
    table.Mix_HaltMusic = Some(halt_music);
    table.Mix_VolumeMusic = Some(volume_music);
    Arc::new(table)
}

/// A partial initialisation is a failure and is undone.
#[test]
fn partial_init_is_undone() {
    setup();
    let sdl = sdl_with(core_table());

    let err = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG | MixerInitFlags::MOD)
        .unwrap_err();

    assert_eq!(err.function(), Some("Mix_Init"));
    assert_eq!(err.sdl_message(), Some("MOD support not available"));
    assert_eq!(call_log(), ["SDL_Init", "Mix_Init", "Mix_Quit"]);
}

/// Music is freed, then audio closed, then the mixer and SDL shut down.
#[test]
fn shutdown_order() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG).unwrap();
    mixer.open_audio(None, None).unwrap();
    let music = mixer.load_music("/usr/share/sounds/theme.ogg").unwrap();
    music.play(-1).unwrap();

    drop(sdl);
    drop(mixer);
    assert!(!call_log().contains(&"Mix_Quit".to_string()));
    drop(music);

    assert_eq!(
        call_log(),
        [
            "SDL_Init",
            "Mix_Init",
            "Mix_OpenAudio",
            "Mix_LoadMUS",
            "Mix_FreeMusic",
            "Mix_CloseAudio",
            "Mix_Quit",
            "SDL_Quit",
        ]
    );
    assert_eq!(native(|native| native.played.clone()), [-1]);
}

/// Without an explicit device or spec the defaults are requested.
#[test]
fn open_audio_defaults_and_spec() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::MP3).unwrap();

    mixer.open_audio(None, None).unwrap();
    assert_eq!(
        native(|native| native.opened),
        Some((sys::SDL_AUDIO_DEVICE_DEFAULT_PLAYBACK, None))
    );
    mixer.close_audio().unwrap();

    let spec = AudioSpec {
        format: AudioFormat::F32LE,
        channels: 2,
        freq: 48_000,
    };
    mixer.open_audio(Some(3), Some(spec)).unwrap();
    assert_eq!(native(|native| native.opened), Some((3, Some(spec))));
}

#[test]
fn open_audio_failure() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG).unwrap();
    native(|native| native.audio_error = Some("Audio device is busy".into()));

    let err = mixer.open_audio(None, None).unwrap_err();

    assert_eq!(err.function(), Some("Mix_OpenAudio"));
    assert_eq!(err.sdl_message(), Some("Audio device is busy"));
    drop(mixer);
    assert!(!call_log().contains(&"Mix_CloseAudio".to_string()));
}

#[test]
fn load_failure() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG).unwrap();

    let err = mixer.load_music("notes.txt").unwrap_err();

    assert_eq!(err.function(), Some("Mix_LoadMUS"));
    assert_eq!(err.sdl_message(), Some("Unrecognized audio format"));
}

#[test]
fn explicit_free_and_halt() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG).unwrap();
    let music = mixer.load_music("theme.ogg").unwrap();

    mixer.halt_music().unwrap();
    music.free().unwrap();
    drop(mixer);

    let log = call_log();
    assert_eq!(log.iter().filter(|call| *call == "Mix_FreeMusic").count(), 1);
    assert!(log.contains(&"Mix_HaltMusic".to_string()));
}

/// Volumes are clamped to the mixer's range.
#[test]
fn music_volume_is_clamped() {
    setup();
    let sdl = sdl_with(core_table());
    let mixer = Mixer::init(&sdl, mixer_table(), MixerInitFlags::OGG).unwrap();

    assert_eq!(mixer.music_volume().unwrap(), MAX_VOLUME);
    assert_eq!(mixer.set_music_volume(500).unwrap(), MAX_VOLUME);
    assert_eq!(mixer.music_volume().unwrap(), MAX_VOLUME);
    mixer.set_music_volume(-20).unwrap();
    assert_eq!(mixer.music_volume().unwrap(), 0);
    mixer.set_music_volume(64).unwrap();
    assert_eq!(mixer.music_volume().unwrap(), 64);
}

#[test]
fn missing_mixer_symbol() {
    setup();
    let sdl = sdl_with(core_table());

    let err = Mixer::init(&sdl, Arc::new(sys::MixerApi::default()), MixerInitFlags::OGG)
        .unwrap_err();

    assert!(matches!(err, Error::MissingSymbol("Mix_Init")));
}
