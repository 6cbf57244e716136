// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! Well-known property names.

pub const SURFACE_SDR_WHITE_POINT_FLOAT: &str = "SDL.surface.SDR_white_point";
pub const SURFACE_HDR_HEADROOM_FLOAT: &str = "SDL.surface.HDR_headroom";
pub const SURFACE_TONEMAP_OPERATOR_STRING: &str = "SDL.surface.tonemap";
pub const SURFACE_HOTSPOT_X_NUMBER: &str = "SDL.surface.hotspot.x";
pub const SURFACE_HOTSPOT_Y_NUMBER: &str = "SDL.surface.hotspot.y";
