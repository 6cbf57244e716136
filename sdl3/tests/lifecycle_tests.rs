// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Handle lifecycle tests.
//!
//! Windows, renderers and textures are released exactly once, borrowed
//! handles never, and dependents always go before what they depend on:
//! texture, then renderer, then window, then `SDL_Quit`.

mod common;

use std::{
    cell::RefCell,
    collections::HashMap,
    ffi::CString,
    os::raw::{c_char, c_int, c_void},
    ptr,
};

use common::*;
use sdl3::{
    Color, Error, FRect, InitFlags, Ownership, PixelFormat, Rect, Sdl, TextureAccess, WindowFlags,
};
use sdl3_sys as sys;

#[derive(Default)]
struct Native {
    next_address: usize,
    window_error: Option<String>,
    /// Answer `SDL_GetWindowID` with 0 and no message.
    lost_window_ids: bool,
    titles: HashMap<usize, CString>,
    sizes: HashMap<usize, (c_int, c_int)>,
    /// Pitch of every texture update.
    updates: Vec<c_int>,
    /// Whether the source and destination rectangles were present.
    copies: Vec<(bool, bool)>,
    draw_color: Option<(u8, u8, u8, u8)>,
}

thread_local! {
    static NATIVE: RefCell<Native> = RefCell::new(Native::default());
}

fn native<T>(f: impl FnOnce(&mut Native) -> T) -> T {
    NATIVE.with_borrow_mut(f)
}

/// A distinct, never dereferenced address for a fake native object.
fn fake<T>() -> *mut T {
    let address = native(|native| {
        native.next_address += 0x100;
        0x10_0000 + native.next_address
    });
    ptr::without_provenance_mut(address)
}

unsafe extern "C" fn create_window(
    title: *const c_char,
    w: c_int,
    h: c_int,
    _flags: sys::WindowFlags,
) -> *mut sys::Window {
    if let Some(message) = native(|native| native.window_error.clone()) {
        set_error(&message);
        return ptr::null_mut();
    }
    log_call("SDL_CreateWindow");
    let window = fake::<sys::Window>();
    let title = unsafe { arg(title) }.unwrap_or_default();
    native(|native| {
        native
            .titles
            .insert(window as usize, CString::new(title).unwrap_or_default());
        native.sizes.insert(window as usize, (w, h));
    });
    window
}

unsafe extern "C" fn destroy_window(_window: *mut sys::Window) {
    log_call("SDL_DestroyWindow");
}

unsafe extern "C" fn get_window_from_id(id: sys::WindowID) -> *mut sys::Window {
    if id == 0 {
        set_error("Invalid window ID");
        return ptr::null_mut();
    }
    fake()
}

unsafe extern "C" fn get_window_id(window: *mut sys::Window) -> sys::WindowID {
    if native(|native| native.lost_window_ids) {
        return 0;
    }
    (window as usize >> 8) as sys::WindowID
}

unsafe extern "C" fn set_window_title(window: *mut sys::Window, title: *const c_char) -> sys::Bool {
    let title = unsafe { arg(title) }.unwrap_or_default();
    native(|native| {
        native
            .titles
            .insert(window as usize, CString::new(title).unwrap_or_default())
    });
    sys::SDL_TRUE
}

unsafe extern "C" fn get_window_title(window: *mut sys::Window) -> *const c_char {
    native(|native| {
        native
            .titles
            .get(&(window as usize))
            .map_or(ptr::null(), |title| title.as_ptr())
    })
}

unsafe extern "C" fn set_window_size(window: *mut sys::Window, w: c_int, h: c_int) -> sys::Bool {
    if w <= 0 || h <= 0 {
        set_error("Parameter 'w' is invalid");
        return sys::SDL_FALSE;
    }
    native(|native| native.sizes.insert(window as usize, (w, h)));
    sys::SDL_TRUE
}

unsafe extern "C" fn get_window_size(
    window: *mut sys::Window,
    w: *mut c_int,
    h: *mut c_int,
) -> sys::Bool {
    let (width, height) = native(|native| native.sizes.get(&(window as usize)).copied())
        .unwrap_or_default();
    unsafe {
        *w = width;
        *h = height;
    }
    sys::SDL_TRUE
}

unsafe extern "C" fn create_window_and_renderer(
    title: *const c_char,
    width: c_int,
    height: c_int,
    flags: sys::WindowFlags,
    window: *mut *mut sys::Window,
    renderer: *mut *mut sys::Renderer,
) -> sys::Bool {
    let created = unsafe { create_window(title, width, height, flags) };
    if created.is_null() {
        return sys::SDL_FALSE;
    }
    log_call("SDL_CreateRenderer");
    unsafe {
        *window = created;
        *renderer = fake();
    }
    sys::SDL_TRUE
}

unsafe extern "C" fn create_renderer(
    _window: *mut sys::Window,
    name: *const c_char,
) -> *mut sys::Renderer {
    match unsafe { arg(name) } {
        Some(name) if name != "software" && name != "opengl" => {
            set_error(&format!("Couldn't find matching render driver {name}"));
            ptr::null_mut()
        }
        _ => {
            log_call("SDL_CreateRenderer");
            fake()
        }
    }
}

unsafe extern "C" fn destroy_renderer(_renderer: *mut sys::Renderer) {
    log_call("SDL_DestroyRenderer");
}

unsafe extern "C" fn get_renderer_name(_renderer: *mut sys::Renderer) -> *const c_char {
    c"software".as_ptr()
}

unsafe extern "C" fn set_render_draw_color(
    _renderer: *mut sys::Renderer,
    r: u8,
    g: u8,
    b: u8,
    a: u8,
) -> sys::Bool {
    native(|native| native.draw_color = Some((r, g, b, a)));
    sys::SDL_TRUE
}

unsafe extern "C" fn render_clear(_renderer: *mut sys::Renderer) -> sys::Bool {
    log_call("SDL_RenderClear");
    sys::SDL_TRUE
}

unsafe extern "C" fn render_present(_renderer: *mut sys::Renderer) -> sys::Bool {
    log_call("SDL_RenderPresent");
    sys::SDL_TRUE
}

unsafe extern "C" fn create_texture(
    _renderer: *mut sys::Renderer,
    format: sys::PixelFormat,
    _access: sys::TextureAccess,
    w: c_int,
    h: c_int,
) -> *mut sys::Texture {
    if format == sys::SDL_PIXELFORMAT_UNKNOWN || w <= 0 || h <= 0 {
        set_error("Texture dimensions are limited to 16384x16384");
        return ptr::null_mut();
    }
    log_call("SDL_CreateTexture");
    fake()
}

unsafe extern "C" fn update_texture(
    _texture: *mut sys::Texture,
    _rect: *const sys::Rect,
    _pixels: *const c_void,
    pitch: c_int,
) -> sys::Bool {
    native(|native| native.updates.push(pitch));
    sys::SDL_TRUE
}

unsafe extern "C" fn render_texture(
    _renderer: *mut sys::Renderer,
    _texture: *mut sys::Texture,
    src: *const sys::FRect,
    dst: *const sys::FRect,
) -> sys::Bool {
    native(|native| native.copies.push((!src.is_null(), !dst.is_null())));
    sys::SDL_TRUE
}

unsafe extern "C" fn destroy_texture(_texture: *mut sys::Texture) {
    log_call("SDL_DestroyTexture");
}

fn test_table() -> sys::Api {
    NATIVE.with_borrow_mut(|native| *native = Native::default());
    let mut table = core_table();
    table.SDL_CreateWindow = Some(create_window);
    table.SDL_DestroyWindow = Some(destroy_window);
    table.SDL_GetWindowFromID = Some(get_window_from_id);
    table.SDL_GetWindowID = Some(get_window_id);
    table.SDL_SetWindowTitle = Some(set_window_title);
    table.SDL_GetWindowTitle = Some(get_window_title);
    table.SDL_SetWindowSize = Some(set_window_size);
    table.SDL_GetWindowSize = Some(get_window_size);
    table.SDL_CreateWindowAndRenderer = Some(create_window_and_renderer);
    table.SDL_CreateRenderer = Some(create_renderer);
    table.SDL_DestroyRenderer = Some(destroy_renderer);
    table.SDL_GetRendererName = Some(get_renderer_name);
    table.SDL_SetRenderDrawColor = Some(set_render_draw_color);
    table.SDL_RenderClear = Some(render_clear);
    table.SDL_RenderPresent = Some(render_present);
    table.SDL_CreateTexture = Some(create_texture);
    table.SDL_UpdateTexture = Some(update_texture);
    table.SDL_RenderTexture = Some(render_texture);
    table.SDL_DestroyTexture = Some(destroy_texture);
    table
}

fn count(call: &str) -> usize {
    call_log().iter().filter(|logged| *logged == call).count()
}

#[test]
fn init_failure_reports_message_and_skips_quit() {
    setup();
    with_state(|state| state.init_error = Some("No available video device".into()));

    let err = Sdl::init(api_from(test_table()), InitFlags::VIDEO).unwrap_err();

    assert_eq!(err.function(), Some("SDL_Init"));
    assert_eq!(err.sdl_message(), Some("No available video device"));
    assert_eq!(call_log(), ["SDL_Init"]);
}

#[test]
fn init_and_was_init() {
    setup();
    let sdl = sdl_with(test_table());

    assert_eq!(sdl.was_init(InitFlags::VIDEO).unwrap(), InitFlags::VIDEO);
    assert!(sdl.was_init(InitFlags::CAMERA).unwrap().is_empty());
}

/// An owned window is destroyed exactly once when dropped.
#[test]
fn owned_window_destroyed_on_drop() {
    setup();
    let sdl = sdl_with(test_table());

    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::RESIZABLE)
        .unwrap();
    assert_eq!(window.ownership(), Ownership::Owned);
    drop(window);

    assert_eq!(count("SDL_DestroyWindow"), 1);
}

/// Explicit destruction is not repeated on drop.
#[test]
fn explicit_destroy_releases_once() {
    setup();
    let sdl = sdl_with(test_table());

    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    window.destroy().unwrap();
    drop(sdl);

    assert_eq!(
        call_log(),
        [
            "SDL_Init",
            "SDL_CreateWindow",
            "SDL_DestroyWindow",
            "SDL_Quit"
        ]
    );
}

/// A window looked up by ID is borrowed and never destroyed.
#[test]
fn borrowed_window_is_not_destroyed() {
    setup();
    let sdl = sdl_with(test_table());

    let window = sdl.window_from_id(42).unwrap();
    assert_eq!(window.ownership(), Ownership::Borrowed);
    window.destroy().unwrap();
    drop(sdl.window_from_id(42).unwrap());

    assert_eq!(count("SDL_DestroyWindow"), 0);
}

#[test]
fn window_lookup_failure() {
    setup();
    let sdl = sdl_with(test_table());

    let err = sdl.window_from_id(0).unwrap_err();

    assert_eq!(err.sdl_message(), Some("Invalid window ID"));
}

/// Creation failure yields the native message and no handle.
#[test]
fn window_creation_failure() {
    setup();
    let sdl = sdl_with(test_table());
    native(|native| native.window_error = Some("No available video device".into()));

    let err = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Call {
            function: "SDL_CreateWindow",
            ref message,
        } if message == "No available video device"
    ));
    assert_eq!(count("SDL_DestroyWindow"), 0);
}

#[test]
fn window_properties() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();

    assert_eq!(window.title().unwrap(), "viewer");
    window.set_title("Kamera – Vorschau").unwrap();
    assert_eq!(window.title().unwrap(), "Kamera – Vorschau");

    assert_eq!(window.size().unwrap(), (640, 480));
    window.set_size(800, 600).unwrap();
    assert_eq!(window.size().unwrap(), (800, 600));
    let err = window.set_size(0, 600).unwrap_err();
    assert_eq!(err.function(), Some("SDL_SetWindowSize"));

    assert_ne!(window.id().unwrap(), 0);
}

#[test]
fn window_id_failure_ignores_stale_error() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    native(|native| native.lost_window_ids = true);
    set_error("Couldn't open audio device");

    let err = window.id().unwrap_err();

    assert_eq!(err.function(), Some("SDL_GetWindowID"));
    assert_eq!(
        err.sdl_message(),
        Some("SDL_GetWindowID failed without setting an error message")
    );
}

/// Dropping in any order releases texture, renderer, window, then SDL.
#[test]
fn dependents_are_released_first() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(None).unwrap();
    let texture = renderer
        .create_texture(PixelFormat::ARGB8888, TextureAccess::Streaming, 64, 64)
        .unwrap();

    drop(sdl);
    drop(window);
    drop(renderer);
    assert_eq!(count("SDL_DestroyWindow"), 0);
    assert_eq!(count("SDL_DestroyRenderer"), 0);
    assert_eq!(count("SDL_Quit"), 0);

    drop(texture);

    assert_eq!(
        call_log(),
        [
            "SDL_Init",
            "SDL_CreateWindow",
            "SDL_CreateRenderer",
            "SDL_CreateTexture",
            "SDL_DestroyTexture",
            "SDL_DestroyRenderer",
            "SDL_DestroyWindow",
            "SDL_Quit",
        ]
    );
}

#[test]
fn window_and_renderer_together() {
    setup();
    let sdl = sdl_with(test_table());

    let (window, renderer) = sdl
        .create_window_and_renderer("viewer", 320, 240, WindowFlags::HIDDEN)
        .unwrap();
    assert_eq!(renderer.name().unwrap(), "software");
    assert_eq!(window.size().unwrap(), (320, 240));

    drop(window);
    drop(renderer);

    let log = call_log();
    let renderer_at = log.iter().position(|call| call == "SDL_DestroyRenderer");
    let window_at = log.iter().position(|call| call == "SDL_DestroyWindow");
    assert!(renderer_at.unwrap() < window_at.unwrap());
}

/// Destroying something still in use fails without releasing it.
#[test]
fn destroy_in_use_is_refused() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(Some("software")).unwrap();
    let texture = renderer
        .create_texture(PixelFormat::RGB24, TextureAccess::Static, 8, 8)
        .unwrap();

    assert!(matches!(sdl.clone().quit(), Err(Error::Other(_))));
    assert!(matches!(window.destroy(), Err(Error::Other(_))));
    assert!(matches!(renderer.destroy(), Err(Error::Other(_))));
    assert_eq!(count("SDL_DestroyRenderer"), 0);

    texture.destroy().unwrap();
    assert_eq!(count("SDL_DestroyTexture"), 1);
    assert_eq!(count("SDL_DestroyRenderer"), 1);
    assert_eq!(count("SDL_DestroyWindow"), 1);

    sdl.quit().unwrap();
    assert_eq!(count("SDL_Quit"), 1);
}

#[test]
fn unknown_render_driver() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();

    let err = window.create_renderer(Some("direct3d12")).unwrap_err();

    assert_eq!(
        err.sdl_message(),
        Some("Couldn't find matching render driver direct3d12")
    );
}

#[test]
fn draw_and_present() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(None).unwrap();
    let texture = renderer
        .create_texture(PixelFormat::ARGB8888, TextureAccess::Streaming, 16, 16)
        .unwrap();

    renderer
        .set_draw_color(Color {
            r: 10,
            g: 20,
            b: 30,
            a: 255,
        })
        .unwrap();
    renderer.clear().unwrap();
    renderer.render_texture(&texture, None, None).unwrap();
    let dst = FRect {
        x: 0.0,
        y: 0.0,
        w: 32.0,
        h: 32.0,
    };
    renderer.render_texture(&texture, None, Some(dst)).unwrap();
    renderer.present().unwrap();

    assert_eq!(native(|native| native.draw_color), Some((10, 20, 30, 255)));
    assert_eq!(
        native(|native| native.copies.clone()),
        [(false, false), (false, true)]
    );
}

#[test]
fn texture_creation_failure() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(None).unwrap();

    let err = renderer
        .create_texture(PixelFormat::ARGB8888, TextureAccess::Static, 0, 16)
        .unwrap_err();

    assert_eq!(err.function(), Some("SDL_CreateTexture"));
}

/// Buffers too short for the format are refused before reaching SDL.
#[test]
fn texture_update_checks_buffer_length() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(None).unwrap();
    let mut texture = renderer
        .create_texture(PixelFormat::IYUV, TextureAccess::Streaming, 4, 4)
        .unwrap();
    assert_eq!(texture.format(), PixelFormat::IYUV);
    assert_eq!((texture.width(), texture.height()), (4, 4));

    // The luma plane alone is not enough for a planar format.
    let err = texture.update(None, &[0; 16], 4).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { value: 16, .. }));
    assert!(native(|native| native.updates.is_empty()));

    texture.update(None, &[0; 24], 4).unwrap();
    let rect = Rect {
        x: 0,
        y: 0,
        w: 4,
        h: 2,
    };
    texture.update(Some(rect), &[0; 12], 4).unwrap();

    assert_eq!(native(|native| native.updates.clone()), [4, 4]);
}

/// A pitch narrower than one row would let SDL read past the slice.
#[test]
fn texture_update_checks_pitch() {
    setup();
    let sdl = sdl_with(test_table());
    let window = sdl
        .create_window("viewer", 640, 480, WindowFlags::empty())
        .unwrap();
    let renderer = window.create_renderer(None).unwrap();
    let mut texture = renderer
        .create_texture(PixelFormat::ARGB8888, TextureAccess::Streaming, 64, 64)
        .unwrap();

    let err = texture.update(None, &[0; 64], 1).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidValue {
            kind: "texture pitch",
            value: 1
        }
    ));
    let err = texture.update(None, &[], 0).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { value: 0, .. }));
    // The rectangle's width sets the row length.
    let rect = Rect {
        x: 0,
        y: 0,
        w: 8,
        h: 2,
    };
    let err = texture.update(Some(rect), &[0; 62], 31).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { value: 31, .. }));
    assert!(native(|native| native.updates.is_empty()));

    texture.update(Some(rect), &[0; 64], 32).unwrap();
    texture.update(None, &vec![0; 64 * 256], 256).unwrap();

    assert_eq!(native(|native| native.updates.clone()), [32, 256]);
}
