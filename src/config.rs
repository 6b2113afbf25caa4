//! Application configuration constants.
//!
//! Layout positions for the round dial are pre-computed as `const` and used
//! throughout the rendering code instead of recalculating them every frame.
//! All radii and anchor points come from the 240x240 watch face layout; the
//! dial is a set of concentric rings around the screen center with the text
//! rows stacked on the vertical axis.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (round 1.28" GC9A01 panel: 240x240)
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

/// Dial center X coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Dial center Y coordinate. Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

// =============================================================================
// Gauge Configuration
// =============================================================================

/// Power at which a gauge sweep reaches the full 360 degrees. Everything above
/// is clamped. Two inverter sizes are supported via the `full-scale-10kw`
/// feature; the default matches the 15 kW hybrid.
#[cfg(not(feature = "full-scale-10kw"))]
pub const POWER_FULL_SCALE_W: i32 = 15_000;

/// Power at which a gauge sweep reaches the full 360 degrees (10 kW build).
#[cfg(feature = "full-scale-10kw")]
pub const POWER_FULL_SCALE_W: i32 = 10_000;

/// Battery state of charge is a percentage; readings outside 0..=100 are clamped.
pub const BATTERY_SOC_MAX: i32 = 100;

/// Dial angle of the 12 o'clock anchor where every sweep starts, in degrees.
/// Dial angles grow clockwise from this anchor.
pub const ANGLE_OFFSET_DEG: i32 = 180;

// =============================================================================
// Dial Layout
// =============================================================================

/// Radius of the twelve hour tick marks (the outermost dial element).
pub const HOUR_TICKS_RADIUS: i32 = 112;

/// Hour ticks extend this many pixels to either side of [`HOUR_TICKS_RADIUS`].
pub const HOUR_TICK_HALF_LEN: i32 = 5;

/// Grid power ring radius (outermost power ring).
pub const GRID_RING_RADIUS: u32 = 95;

/// PV power ring radius (middle power ring, also carries the forecast arc).
pub const PV_RING_RADIUS: u32 = 82;

/// AC load ring radius (innermost power ring).
pub const AC_RING_RADIUS: u32 = 69;

/// Stroke width of the full background circle behind each ring.
pub const RING_BG_STROKE: u32 = 3;

/// Stroke width of the dimmed value arc drawn under the bright one.
pub const RING_DIM_STROKE: u32 = 4;

/// Stroke width of the bright value arc.
pub const RING_BRIGHT_STROKE: u32 = 5;

/// Clock dot radii: hour is the largest, second the smallest.
pub const HOUR_DOT_RADIUS: u32 = 6;
pub const MINUTE_DOT_RADIUS: u32 = 4;
pub const SECOND_DOT_RADIUS: u32 = 2;

// =============================================================================
// Battery Bar Layout
// =============================================================================

/// Battery bar outline: top-left corner and size.
pub const BATTERY_FRAME_X: i32 = 93;
pub const BATTERY_FRAME_Y: i32 = 66;
pub const BATTERY_FRAME_W: u32 = 56;
pub const BATTERY_FRAME_H: u32 = 17;

/// Inner fill area, one pixel inside the outline.
pub const BATTERY_INNER_X: i32 = BATTERY_FRAME_X + 1;
pub const BATTERY_INNER_Y: i32 = BATTERY_FRAME_Y + 1;
pub const BATTERY_INNER_W: u32 = BATTERY_FRAME_W - 2;
pub const BATTERY_INNER_H: u32 = BATTERY_FRAME_H - 2;

/// Terminal nub on the right edge of the battery outline.
pub const BATTERY_NUB_X: i32 = 149;
pub const BATTERY_NUB_Y: i32 = 69;
pub const BATTERY_NUB_W: u32 = 4;
pub const BATTERY_NUB_H: u32 = 11;

// =============================================================================
// Text Row Anchors
// =============================================================================

/// Battery percentage label, centered over the bar.
pub const BATTERY_LABEL_Y: i32 = 70;

/// Battery current / temperature row.
pub const BATTERY_LINE_Y: i32 = 86;

/// Large PV / forecast block in the dial center (also the connect prompt anchor).
pub const CENTER_BLOCK_Y: i32 = 103;

/// AC load row. Caption and value sit one pixel apart vertically.
pub const AC_CAPTION_Y: i32 = 171;
pub const AC_VALUE_Y: i32 = 172;

/// PV caption row.
pub const PV_CAPTION_Y: i32 = 198;

/// Grid power row.
pub const GRID_ROW_Y: i32 = 220;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~20 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Minimum interval between unconditional full redraws. Between these, frames
/// are only rendered while an animation is still converging.
pub const REDRAW_INTERVAL_MS: u64 = 1000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rings_are_ordered_inward() {
        assert!((HOUR_TICKS_RADIUS as u32) > GRID_RING_RADIUS);
        assert!(GRID_RING_RADIUS > PV_RING_RADIUS);
        assert!(PV_RING_RADIUS > AC_RING_RADIUS);
    }

    #[test]
    fn test_full_scale_is_positive() {
        assert!(POWER_FULL_SCALE_W > 0);
    }

    #[test]
    fn test_battery_inner_fits_frame() {
        assert!(BATTERY_INNER_W < BATTERY_FRAME_W);
        assert!(BATTERY_INNER_H < BATTERY_FRAME_H);
        assert_eq!(BATTERY_INNER_X, BATTERY_FRAME_X + 1);
        assert_eq!(BATTERY_INNER_Y, BATTERY_FRAME_Y + 1);
    }
}
