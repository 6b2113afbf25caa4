//! Color constants and brightness helpers for the energy dial.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! The palette below is authored in familiar 8-bit-per-channel values and
//! converted through [`rgb565`] at compile time. Each power ring reuses one
//! base color at three brightness levels (background circle, dimmed arc,
//! bright arc), produced by [`change_color`] and [`dim_color`] rather than
//! by hand-picking three shades per ring.

use embedded_graphics::{
    pixelcolor::{Rgb565, RgbColor},
    prelude::IntoStorage,
};

use crate::clamp::{clamp_f32, clamp_u32};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0). Screen background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Text on dark background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

// =============================================================================
// Dial Palette (application-specific)
// =============================================================================

/// Hour tick marks. Mid gray, visible but not competing with the rings.
pub const TICK_GRAY: Rgb565 = rgb565(128, 128, 128);

/// Grid ring while importing from the grid (consuming).
pub const GRID_IMPORT_RED: Rgb565 = rgb565(210, 50, 66);

/// Grid ring while exporting to the grid. The seconds dot shares this blue.
pub const GRID_EXPORT_BLUE: Rgb565 = rgb565(66, 50, 210);

/// PV production ring and battery discharge fill.
pub const PV_GREEN: Rgb565 = rgb565(117, 235, 10);

/// AC load ring.
pub const AC_CYAN: Rgb565 = rgb565(25, 193, 202);

/// Hour dot on the clock track.
pub const DOT_SILVER: Rgb565 = rgb565(220, 220, 220);

/// Battery fill while charging.
pub const CHARGE_RED: Rgb565 = rgb565(200, 40, 56);

// =============================================================================
// Brightness Helpers
// =============================================================================

/// Build an [`Rgb565`] from 8-bit-per-channel values.
///
/// Truncates each channel to the 5/6/5 bit widths, same as the usual
/// `color565` conversion on display controllers.
pub const fn rgb565(r: u8, g: u8, b: u8) -> Rgb565 {
    Rgb565::new(r >> 3, g >> 2, b >> 3)
}

/// Darken a color by `percent` (0 = unchanged, 100 = black).
///
/// Scales each channel in native 5/6/5 space with integer math.
/// Out-of-range percentages are clamped.
pub fn dim_color(color: Rgb565, percent: u32) -> Rgb565 {
    let keep = 100 - clamp_u32(percent, 0, 100);
    let raw = color.into_storage();

    let r = u32::from((raw >> 11) & 0x1F) * keep / 100;
    let g = u32::from((raw >> 5) & 0x3F) * keep / 100;
    let b = u32::from(raw & 0x1F) * keep / 100;

    Rgb565::new(r as u8, g as u8, b as u8)
}

/// Scale a color's brightness by `fraction` (0.0 = black, 1.0 = unchanged).
///
/// Used for the faint full background circles behind the value arcs.
/// Out-of-range fractions are clamped before scaling.
pub fn change_color(color: Rgb565, fraction: f32) -> Rgb565 {
    let f = clamp_f32(fraction, 0.0, 1.0);
    let raw = color.into_storage();

    let r = (f32::from((raw >> 11) & 0x1F) * f) as u8;
    let g = (f32::from((raw >> 5) & 0x3F) * f) as u8;
    let b = (f32::from(raw & 0x1F) * f) as u8;

    Rgb565::new(r, g, b)
}

// =============================================================================
// Unit Tests
// =============================================================================
