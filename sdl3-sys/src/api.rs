// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Dynamically resolved entry-point tables.
//!
//! Each table is generated from a declarative list of `method = SYMBOL(args) -> ret`
//! entries. For every entry the table gets:
//!
//! - a public field named after the C symbol holding `Option<unsafe extern "C" fn>`,
//!   `None` when the loaded library does not export it;
//! - an `unsafe` snake_case method that forwards the call, or returns
//!   [`MissingSymbol`] when the field is `None`.
//!
//! Tables are built either from a shared library ([`Api::new`]) or field by
//! field starting from [`Default`], which is how embedders that already hold
//! function pointers (and the test suites) use them.

use std::ffi::OsStr;
use std::fmt;
use std::os::raw::{c_char, c_int, c_void};

use crate::types::*;

/// An entry point that is not exported by the loaded library version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingSymbol(pub &'static str);

impl fmt::Display for MissingSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not exported by the loaded library", self.0)
    }
}

impl std::error::Error for MissingSymbol {}

macro_rules! native_api {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };
    (
        $(#[$meta:meta])*
        pub struct $api:ident {
            $(
                $(#[$fmeta:meta])*
                fn $method:ident = $symbol:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
            )*
        }
    ) => {
        $(#[$meta])*
        pub struct $api {
            library: Option<libloading::Library>,
            $(
                pub $symbol: Option<unsafe extern "C" fn($($ty),*) $(-> $ret)?>,
            )*
        }

        impl Default for $api {
            fn default() -> Self {
                Self {
                    library: None,
                    $( $symbol: None, )*
                }
            }
        }

        impl fmt::Debug for $api {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($api))
                    .field("library", &self.library)
                    .field("missing", &self.missing_symbols())
                    .finish()
            }
        }

        impl $api {
            /// Every C symbol this table knows about, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[$( stringify!($symbol) ),*];

            /// Opens the shared library at `path` and resolves every known symbol.
            ///
            /// Symbols that the library does not export are left as `None`; calling
            /// their method returns [`MissingSymbol`].
            ///
            /// # Safety
            ///
            /// Loading a library runs its initialisation routines. The library must
            /// be an SDL3 build whose ABI matches the declarations in this crate.
            pub unsafe fn new<P: AsRef<OsStr>>(path: P) -> Result<Self, libloading::Error> {
                let library = unsafe { libloading::Library::new(path) }?;
                let mut api = Self::default();
                $(
                    api.$symbol = unsafe {
                        library.get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                            concat!(stringify!($symbol), "\0").as_bytes(),
                        )
                    }
                    .ok()
                    .map(|symbol| *symbol);
                )*
                api.library = Some(library);
                Ok(api)
            }

            /// Returns `true` if the table was built from a shared library.
            pub fn is_loaded(&self) -> bool {
                self.library.is_some()
            }

            /// Returns the symbols that are not resolved.
            pub fn missing_symbols(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$symbol.is_none() {
                        missing.push(stringify!($symbol));
                    }
                )*
                missing
            }

            $(
                $(#[$fmeta])*
                #[inline]
                pub unsafe fn $method(
                    &self,
                    $($arg: $ty),*
                ) -> Result<native_api!(@ret $($ret)?), MissingSymbol> {
                    match self.$symbol {
                        Some(function) => Ok(unsafe { function($($arg),*) }),
                        None => Err(MissingSymbol(stringify!($symbol))),
                    }
                }
            )*
        }
    };
}

native_api! {
    /// SDL3 core entry points.
    pub struct Api {
        fn init = SDL_Init(flags: InitFlags) -> Bool;
        fn quit = SDL_Quit();
        fn was_init = SDL_WasInit(flags: InitFlags) -> InitFlags;
        /// Borrowed, thread-local; valid until the next SDL call on this thread.
        fn get_error = SDL_GetError() -> *const c_char;
        fn clear_error = SDL_ClearError() -> Bool;
        fn free = SDL_free(mem: *mut c_void);
        fn get_version = SDL_GetVersion() -> c_int;
        fn get_revision = SDL_GetRevision() -> *const c_char;
        fn get_platform = SDL_GetPlatform() -> *const c_char;

        fn set_hint = SDL_SetHint(name: *const c_char, value: *const c_char) -> Bool;
        fn get_hint = SDL_GetHint(name: *const c_char) -> *const c_char;
        fn reset_hint = SDL_ResetHint(name: *const c_char) -> Bool;

        fn set_clipboard_text = SDL_SetClipboardText(text: *const c_char) -> Bool;
        /// Caller-owned; release with `SDL_free`.
        fn get_clipboard_text = SDL_GetClipboardText() -> *mut c_char;
        fn has_clipboard_text = SDL_HasClipboardText() -> Bool;

        fn create_window = SDL_CreateWindow(title: *const c_char, w: c_int, h: c_int, flags: WindowFlags) -> *mut Window;
        fn destroy_window = SDL_DestroyWindow(window: *mut Window);
        fn get_window_from_id = SDL_GetWindowFromID(id: WindowID) -> *mut Window;
        fn get_window_id = SDL_GetWindowID(window: *mut Window) -> WindowID;
        fn set_window_title = SDL_SetWindowTitle(window: *mut Window, title: *const c_char) -> Bool;
        fn get_window_title = SDL_GetWindowTitle(window: *mut Window) -> *const c_char;
        fn set_window_size = SDL_SetWindowSize(window: *mut Window, w: c_int, h: c_int) -> Bool;
        fn get_window_size = SDL_GetWindowSize(window: *mut Window, w: *mut c_int, h: *mut c_int) -> Bool;
        fn create_window_and_renderer = SDL_CreateWindowAndRenderer(
            title: *const c_char,
            width: c_int,
            height: c_int,
            window_flags: WindowFlags,
            window: *mut *mut Window,
            renderer: *mut *mut Renderer,
        ) -> Bool;

        fn create_renderer = SDL_CreateRenderer(window: *mut Window, name: *const c_char) -> *mut Renderer;
        fn destroy_renderer = SDL_DestroyRenderer(renderer: *mut Renderer);
        fn get_renderer_name = SDL_GetRendererName(renderer: *mut Renderer) -> *const c_char;
        fn set_render_vsync = SDL_SetRenderVSync(renderer: *mut Renderer, vsync: c_int) -> Bool;
        fn set_render_draw_color = SDL_SetRenderDrawColor(renderer: *mut Renderer, r: u8, g: u8, b: u8, a: u8) -> Bool;
        fn render_clear = SDL_RenderClear(renderer: *mut Renderer) -> Bool;
        fn render_present = SDL_RenderPresent(renderer: *mut Renderer) -> Bool;
        fn create_texture = SDL_CreateTexture(
            renderer: *mut Renderer,
            format: PixelFormat,
            access: TextureAccess,
            w: c_int,
            h: c_int,
        ) -> *mut Texture;
        fn update_texture = SDL_UpdateTexture(texture: *mut Texture, rect: *const Rect, pixels: *const c_void, pitch: c_int) -> Bool;
        fn render_texture = SDL_RenderTexture(renderer: *mut Renderer, texture: *mut Texture, srcrect: *const FRect, dstrect: *const FRect) -> Bool;
        fn destroy_texture = SDL_DestroyTexture(texture: *mut Texture);

        fn poll_event = SDL_PollEvent(event: *mut Event) -> Bool;
        /// Safe to call from any thread.
        fn push_event = SDL_PushEvent(event: *mut Event) -> Bool;
        fn register_events = SDL_RegisterEvents(numevents: c_int) -> u32;

        fn get_key_name = SDL_GetKeyName(key: Keycode) -> *const c_char;
        fn get_key_from_name = SDL_GetKeyFromName(name: *const c_char) -> Keycode;

        fn get_pixel_format_details = SDL_GetPixelFormatDetails(format: PixelFormat) -> *const PixelFormatDetails;
        fn get_pixel_format_name = SDL_GetPixelFormatName(format: PixelFormat) -> *const c_char;

        /// Caller-owned array; release with `SDL_free`.
        fn get_joysticks = SDL_GetJoysticks(count: *mut c_int) -> *mut JoystickID;
        fn get_joystick_name_for_id = SDL_GetJoystickNameForID(instance_id: JoystickID) -> *const c_char;
        fn get_joystick_guid_for_id = SDL_GetJoystickGUIDForID(instance_id: JoystickID) -> GUID;
        fn guid_to_string = SDL_GUIDToString(guid: GUID, psz_guid: *mut c_char, cb_guid: c_int);

        fn add_gamepad_mapping = SDL_AddGamepadMapping(mapping: *const c_char) -> c_int;
        fn add_gamepad_mappings_from_file = SDL_AddGamepadMappingsFromFile(file: *const c_char) -> c_int;
        fn reload_gamepad_mappings = SDL_ReloadGamepadMappings() -> Bool;
        /// Single caller-owned allocation holding the pointer array and the strings.
        fn get_gamepad_mappings = SDL_GetGamepadMappings(count: *mut c_int) -> *mut *mut c_char;
        /// Caller-owned; release with `SDL_free`.
        fn get_gamepad_mapping_for_guid = SDL_GetGamepadMappingForGUID(guid: GUID) -> *mut c_char;
        /// Caller-owned array; release with `SDL_free`.
        fn get_gamepads = SDL_GetGamepads(count: *mut c_int) -> *mut JoystickID;
        fn open_gamepad = SDL_OpenGamepad(instance_id: JoystickID) -> *mut Gamepad;
        fn close_gamepad = SDL_CloseGamepad(gamepad: *mut Gamepad);
        fn get_gamepad_name = SDL_GetGamepadName(gamepad: *mut Gamepad) -> *const c_char;
        fn get_gamepad_type = SDL_GetGamepadType(gamepad: *mut Gamepad) -> GamepadType;
        fn get_gamepad_axis = SDL_GetGamepadAxis(gamepad: *mut Gamepad, axis: GamepadAxis) -> i16;
        /// Caller-owned; release with `SDL_free`.
        fn get_gamepad_mapping = SDL_GetGamepadMapping(gamepad: *mut Gamepad) -> *mut c_char;

        /// Caller-owned array; release with `SDL_free`.
        fn get_cameras = SDL_GetCameras(count: *mut c_int) -> *mut CameraID;
        fn get_camera_name = SDL_GetCameraName(instance_id: CameraID) -> *const c_char;
        /// Single caller-owned allocation holding the pointer array and the specs.
        fn get_camera_supported_formats = SDL_GetCameraSupportedFormats(instance_id: CameraID, count: *mut c_int) -> *mut *mut CameraSpec;
        fn open_camera = SDL_OpenCamera(instance_id: CameraID, spec: *const CameraSpec) -> *mut Camera;
        fn get_camera_permission_state = SDL_GetCameraPermissionState(camera: *mut Camera) -> CameraPermissionState;
        /// Never blocks; NULL when no frame is ready.
        fn acquire_camera_frame = SDL_AcquireCameraFrame(camera: *mut Camera, timestamp_ns: *mut u64) -> *mut Surface;
        fn release_camera_frame = SDL_ReleaseCameraFrame(camera: *mut Camera, frame: *mut Surface);
        fn close_camera = SDL_CloseCamera(camera: *mut Camera);
    }
}

native_api! {
    /// SDL3_mixer entry points. Failures are reported through SDL core's `SDL_GetError`.
    pub struct MixerApi {
        fn init = Mix_Init(flags: MIX_InitFlags) -> MIX_InitFlags;
        fn quit = Mix_Quit();
        fn open_audio = Mix_OpenAudio(devid: AudioDeviceID, spec: *const AudioSpec) -> Bool;
        fn close_audio = Mix_CloseAudio();
        fn load_mus = Mix_LoadMUS(file: *const c_char) -> *mut Music;
        fn free_music = Mix_FreeMusic(music: *mut Music);
        fn play_music = Mix_PlayMusic(music: *mut Music, loops: c_int) -> Bool;
        fn halt_music = Mix_HaltMusic();
        fn volume_music = Mix_VolumeMusic(volume: c_int) -> c_int;
    }
}
