// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Loads a gamepad mapping database and prints gamepad input until Ctrl-C.

mod common;

use std::path::PathBuf;

use clap::Parser;
use sdl3::{
    Event, GamepadMapping, InitFlags, Sdl, config::get_sdl3_library_path, hints, load_api,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// A `gamecontrollerdb.txt` style file to load before opening gamepads.
    #[arg(long)]
    mappings: Option<PathBuf>,

    /// Print every known mapping as JSON and exit.
    #[arg(long)]
    dump: bool,

    /// Path to the SDL3 library. Defaults to the build configuration.
    #[arg(long, env = "SDL3_LIBRARY_PATH")]
    library: Option<PathBuf>,
}

fn main() -> Result<(), sdl3::Error> {
    common::setup_logging();
    let args = Args::parse();

    let api = load_api(args.library.unwrap_or_else(get_sdl3_library_path))?;
    api.set_hint(hints::JOYSTICK_ALLOW_BACKGROUND_EVENTS, Some("1"))?;
    let sdl = Sdl::init(api, InitFlags::GAMEPAD)?;

    if let Some(path) = &args.mappings {
        let added = sdl.add_gamepad_mappings_from_file(path)?;
        info!("Loaded {added} mappings from {}", path.display());
    }

    if args.dump {
        for mapping in sdl.gamepad_mappings()? {
            match mapping.parse::<GamepadMapping>() {
                Ok(mapping) => println!(
                    "{}",
                    serde_json::to_string(&mapping).map_err(|err| sdl3::Error::Other(err.to_string()))?
                ),
                Err(err) => warn!("Skipping mapping: {err}"),
            }
        }
        return Ok(());
    }

    let mut open = Vec::new();
    for id in sdl.gamepads()? {
        let gamepad = sdl.open_gamepad(id)?;
        info!(
            "Gamepad {id}: {} ({:?}, GUID {})",
            gamepad.name()?.unwrap_or_default(),
            gamepad.gamepad_type()?,
            sdl.api().guid_to_string(&sdl.joystick_guid(id)?)?
        );
        open.push(gamepad);
    }

    loop {
        for event in sdl.poll_iter() {
            match event? {
                Event::Quit { .. } => return Ok(()),
                Event::GamepadDevice {
                    event_type, which, ..
                } => info!("{event_type} {which}"),
                Event::GamepadAxis {
                    which, axis, value, ..
                } => info!("gamepad {which} axis {axis} = {value}"),
                Event::GamepadButton {
                    which,
                    button,
                    down,
                    ..
                } => info!("gamepad {which} button {button} down={down}"),
                _ => {}
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
}
