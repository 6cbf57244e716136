// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Build script for the `sdl3` crate.
//!
//! Generates `constants.rs` holding the platform's default library file
//! names and, when `SDL3_LIB_DIR` is set at build time, the directory the
//! libraries should be loaded from.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SDL3_LIB_DIR");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let (sdl, mixer) = match target_os.as_str() {
        "windows" => ("SDL3.dll", "SDL3_mixer.dll"),
        "macos" | "ios" => ("libSDL3.dylib", "libSDL3_mixer.dylib"),
        _ => ("libSDL3.so.0", "libSDL3_mixer.so.0"),
    };

    let lib_dir = match env::var("SDL3_LIB_DIR") {
        Ok(dir) if !dir.is_empty() => format!("Some({dir:?})"),
        _ => "None".to_string(),
    };

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("failed to get output directory"))
        .join("constants.rs");

    let data = format!(
        "pub const SDL3_LIBRARY_NAME: &str = {sdl:?};\n\
        pub const SDL3_MIXER_LIBRARY_NAME: &str = {mixer:?};\n\
        pub const SDL3_LIB_DIR: Option<&str> = {lib_dir};\n"
    );
    std::fs::write(out_path, data).expect("Unable to write file");
}
