// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! In-process stand-ins for the SDL3 entry points.
//!
//! The tests never load a real library. Each test builds an entry-point table
//! from these `extern "C"` functions, which keep their state (last error,
//! allocations, call log) in a thread-local so tests running in parallel do
//! not see each other. Call [`setup`] at the start of every test.

#![allow(dead_code)]

use std::{
    alloc::{Layout, alloc_zeroed, dealloc},
    cell::RefCell,
    collections::HashMap,
    ffi::{CStr, CString},
    os::raw::{c_char, c_int, c_void},
    sync::{Arc, Once},
};

use sdl3::{SdlApi, SdlApiHandle};
use sdl3_sys as sys;

/// Ensures logging is initialized only once across all tests.
static LOG_ONCE: Once = Once::new();

#[derive(Default)]
pub struct MockState {
    pub error: CString,
    /// Live caller-owned allocations by address.
    pub allocations: HashMap<usize, Layout>,
    pub alloc_count: usize,
    pub free_count: usize,
    /// `SDL_free` calls on addresses that were not live.
    pub bad_frees: usize,
    /// Ordered record of lifecycle calls, e.g. `"SDL_DestroyWindow"`.
    pub log: Vec<String>,
    pub init_error: Option<String>,
    pub initialized: u32,
}

thread_local! {
    pub static STATE: RefCell<MockState> = RefCell::new(MockState::default());
}

/// Initializes logging and clears the mock state for this thread.
pub fn setup() {
    LOG_ONCE.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .with_test_writer()
            .init();
    });
    STATE.with_borrow_mut(|state| *state = MockState::default());
}

pub fn with_state<T>(f: impl FnOnce(&mut MockState) -> T) -> T {
    STATE.with_borrow_mut(f)
}

/// Sets the thread's last-error message, as a failing SDL call would.
pub fn set_error(message: &str) {
    let message = CString::new(message).unwrap_or_default();
    with_state(|state| state.error = message);
}

pub fn log_call(call: &str) {
    with_state(|state| state.log.push(call.to_string()));
}

pub fn call_log() -> Vec<String> {
    with_state(|state| state.log.clone())
}

/// Number of caller-owned allocations not yet freed.
pub fn live_allocations() -> usize {
    with_state(|state| state.allocations.len())
}

pub fn alloc_counts() -> (usize, usize) {
    with_state(|state| (state.alloc_count, state.free_count))
}

pub fn bad_frees() -> usize {
    with_state(|state| state.bad_frees)
}

/// Allocates a zeroed, tracked block that the code under test must free.
pub fn alloc_block(size: usize, align: usize) -> *mut u8 {
    let Ok(layout) = Layout::from_size_align(size.max(1), align) else {
        return std::ptr::null_mut();
    };
    let ptr = unsafe { alloc_zeroed(layout) };
    if !ptr.is_null() {
        with_state(|state| {
            state.allocations.insert(ptr as usize, layout);
            state.alloc_count += 1;
        });
    }
    ptr
}

/// A tracked, caller-owned copy of `text`.
pub fn alloc_c_string(text: &str) -> *mut c_char {
    let bytes = text.as_bytes();
    let ptr = alloc_block(bytes.len() + 1, 1);
    if !ptr.is_null() {
        unsafe { ptr.copy_from_nonoverlapping(bytes.as_ptr(), bytes.len()) };
    }
    ptr.cast()
}

/// A tracked, caller-owned copy of `items`.
pub fn alloc_array<T: Copy>(items: &[T]) -> *mut T {
    let size = std::mem::size_of_val(items);
    let ptr = alloc_block(size, std::mem::align_of::<T>()).cast::<T>();
    if !ptr.is_null() {
        unsafe { ptr.copy_from_nonoverlapping(items.as_ptr(), items.len()) };
    }
    ptr
}

/// A NULL-terminated array of string pointers with the strings stored in
/// the same allocation, the way SDL returns string lists.
pub fn alloc_string_list(items: &[&str]) -> *mut *mut c_char {
    let pointer_size = std::mem::size_of::<*mut c_char>();
    let header = (items.len() + 1) * pointer_size;
    let payload: usize = items.iter().map(|item| item.len() + 1).sum();
    let block = alloc_block(header + payload, std::mem::align_of::<*mut c_char>());
    if block.is_null() {
        return std::ptr::null_mut();
    }
    let pointers = block.cast::<*mut c_char>();
    let mut cursor = unsafe { block.add(header) };
    for (index, item) in items.iter().enumerate() {
        unsafe {
            cursor.copy_from_nonoverlapping(item.as_ptr(), item.len());
            *cursor.add(item.len()) = 0;
            *pointers.add(index) = cursor.cast();
            cursor = cursor.add(item.len() + 1);
        }
    }
    pointers
}

/// A NULL-terminated array of record pointers with the records stored in the
/// same allocation.
pub fn alloc_record_list<T: Copy>(items: &[T]) -> *mut *mut T {
    let pointer_size = std::mem::size_of::<*mut T>();
    let align = std::mem::align_of::<T>().max(std::mem::align_of::<*mut T>());
    let header = ((items.len() + 1) * pointer_size).next_multiple_of(std::mem::align_of::<T>());
    let block = alloc_block(header + std::mem::size_of_val(items), align);
    if block.is_null() {
        return std::ptr::null_mut();
    }
    let pointers = block.cast::<*mut T>();
    let records = unsafe { block.add(header) }.cast::<T>();
    for (index, item) in items.iter().enumerate() {
        unsafe {
            records.add(index).write(*item);
            *pointers.add(index) = records.add(index);
        }
    }
    pointers
}

pub unsafe extern "C" fn get_error() -> *const c_char {
    STATE.with_borrow(|state| state.error.as_ptr())
}

pub unsafe extern "C" fn clear_error() -> sys::Bool {
    set_error("");
    sys::SDL_TRUE
}

pub unsafe extern "C" fn free(mem: *mut c_void) {
    if mem.is_null() {
        return;
    }
    let layout = with_state(|state| {
        let layout = state.allocations.remove(&(mem as usize));
        match layout {
            Some(_) => state.free_count += 1,
            None => state.bad_frees += 1,
        }
        layout
    });
    if let Some(layout) = layout {
        unsafe { dealloc(mem.cast(), layout) };
    }
}

pub unsafe extern "C" fn init(flags: sys::InitFlags) -> sys::Bool {
    log_call("SDL_Init");
    let failure = with_state(|state| state.init_error.clone());
    if let Some(message) = failure {
        set_error(&message);
        return sys::SDL_FALSE;
    }
    with_state(|state| state.initialized |= flags);
    sys::SDL_TRUE
}

pub unsafe extern "C" fn quit() {
    log_call("SDL_Quit");
    with_state(|state| state.initialized = 0);
}

pub unsafe extern "C" fn was_init(flags: sys::InitFlags) -> sys::InitFlags {
    with_state(|state| state.initialized & flags)
}

pub unsafe extern "C" fn get_version() -> c_int {
    3_002_010
}

/// Reads a C string argument passed to a mock.
pub unsafe fn arg(text: *const c_char) -> Option<String> {
    if text.is_null() {
        None
    } else {
        Some(unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned())
    }
}

/// The core entry points every test needs.
pub fn core_table() -> sys::Api {
    let mut table = sys::Api::default();
    table.SDL_GetError = Some(get_error);
    table.SDL_ClearError = Some(clear_error);
    table.SDL_free = Some(free);
    table.SDL_Init = Some(init);
    table.SDL_Quit = Some(quit);
    table.SDL_WasInit = Some(was_init);
    table.SDL_GetVersion = Some(get_version);
    table
}

pub fn api_from(table: sys::Api) -> SdlApiHandle {
    Arc::new(SdlApi::from_table(table))
}

/// Initialises SDL over `table`.
pub fn sdl_with(table: sys::Api) -> sdl3::Sdl {
    sdl3::Sdl::init(api_from(table), sdl3::InitFlags::VIDEO).expect("SDL_Init failed")
}
