// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Shows a live camera preview in a window.
//!
//! Press Escape or close the window to quit.

mod common;

use clap::Parser;
use sdl3::{
    CameraPermission, Color, Event, InitFlags, Keycode, Sdl, TextureAccess, WindowFlags,
    config::get_sdl3_library_path, hints, load_api,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Index of the camera in the list of connected cameras.
    #[arg(long, default_value_t = 0)]
    camera: usize,

    #[arg(long, default_value_t = 1280)]
    width: i32,

    #[arg(long, default_value_t = 720)]
    height: i32,

    /// Rendering driver to request, e.g. "opengl" or "software".
    #[arg(long)]
    renderer: Option<String>,

    /// Path to the SDL3 library. Defaults to the build configuration.
    #[arg(long, env = "SDL3_LIBRARY_PATH")]
    library: Option<std::path::PathBuf>,
}

fn main() -> Result<(), sdl3::Error> {
    common::setup_logging();
    let args = Args::parse();

    let api = load_api(args.library.unwrap_or_else(get_sdl3_library_path))?;
    info!("SDL {} on {:?}", api.version()?, api.platform()?);
    api.set_hint(hints::APP_NAME, Some("Camera preview"))?;

    let sdl = Sdl::init(api, InitFlags::VIDEO | InitFlags::CAMERA)?;
    let cameras = sdl.cameras()?;
    let Some(&camera_id) = cameras.get(args.camera) else {
        return Err(sdl3::Error::Other(format!(
            "camera {} requested but {} connected",
            args.camera,
            cameras.len()
        )));
    };
    info!(
        "Opening {}",
        sdl.camera_name(camera_id)?.unwrap_or_else(|| camera_id.to_string())
    );
    for spec in sdl.camera_supported_formats(camera_id)? {
        info!(
            "  {}x{} {} @ {:.1} fps",
            spec.width,
            spec.height,
            spec.format,
            spec.framerate()
        );
    }

    let camera = sdl.open_camera(camera_id, None)?;
    let window = sdl.create_window("Camera", args.width, args.height, WindowFlags::RESIZABLE)?;
    let renderer = window.create_renderer(args.renderer.as_deref())?;
    info!("Rendering with {}", renderer.name()?);
    renderer.set_vsync(1)?;

    let mut texture = None;
    'running: loop {
        for event in sdl.poll_iter() {
            match event? {
                Event::Quit { .. } => break 'running,
                Event::Keyboard {
                    key: Keycode::ESCAPE,
                    down: true,
                    ..
                } => break 'running,
                Event::CameraDevice { event_type, .. } => info!("Camera event {event_type}"),
                _ => {}
            }
        }

        match camera.permission_state()? {
            CameraPermission::Denied => {
                warn!("Camera access was denied");
                break;
            }
            CameraPermission::Pending => {}
            CameraPermission::Approved => {
                if let Some(frame) = camera.acquire_frame()? {
                    // Sized from the first frame, since the camera picks the format.
                    if texture.is_none() {
                        texture = Some(renderer.create_texture(
                            frame.format(),
                            TextureAccess::Streaming,
                            frame.width(),
                            frame.height(),
                        )?);
                    }
                    if let Some(texture) = &mut texture {
                        texture.update_from_frame(&frame)?;
                    }
                }
            }
        }

        renderer.set_draw_color(Color {
            r: 0x20,
            g: 0x20,
            b: 0x20,
            a: 0xff,
        })?;
        renderer.clear()?;
        if let Some(texture) = &texture {
            renderer.render_texture(texture, None, None)?;
        }
        renderer.present()?;
    }

    Ok(())
}
