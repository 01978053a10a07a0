//! Shared color constants for the UI.

use egui::Color32;

/// Red used for error titles and failed states.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Background behind the QR image. Must stay white: scanners need a light
/// quiet zone around the symbol.
pub const QUIET_ZONE: Color32 = Color32::WHITE;

/// Muted gray for hints and the placeholder.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(140, 140, 140);
