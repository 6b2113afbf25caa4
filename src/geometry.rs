//! Dial geometry: power-to-angle mapping and clock track trigonometry.
//!
//! Two angle systems meet here:
//!
//! - **Dial degrees** (integers). Every power sweep starts at the 12 o'clock
//!   anchor ([`ANGLE_OFFSET_DEG`] = 180) and grows clockwise on screen as the
//!   angle increases. Values may leave 0..360; only the distance from the
//!   anchor matters to the arc renderer.
//! - **Clock radians** (floats). The hour/minute/second dots use the
//!   `x = sin, y = cos` convention: 0 rad is 6 o'clock, `PI` is 12 o'clock,
//!   and increasing time moves the dots clockwise.
//!
//! All power math stays in integer degrees so the same reading always lands
//! on the same pixel; floats only enter for the trig at the very end.

use core::f32::consts::{PI, TAU};

use crate::config::{ANGLE_OFFSET_DEG, CENTER_X, CENTER_Y};

/// Hours on the clock track.
pub const CLOCK_HOURS: u32 = 12;

/// Minute (and second) positions on the clock track.
pub const CLOCK_MINUTES: u32 = 60;

// =============================================================================
// Power Sweeps
// =============================================================================

/// Direction a gauge sweep grows in as its reading increases.
///
/// Production and load sweep clockwise; grid power sweeps the other way so
/// import and export are visually distinct at a glance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

impl Sweep {
    /// Sign applied to the angular offset: clockwise is positive.
    pub const fn sign(self) -> i32 {
        match self {
            Sweep::Clockwise => 1,
            Sweep::CounterClockwise => -1,
        }
    }
}

/// Map a power reading to the dial degree where its arc stops.
///
/// The sweep starts at [`ANGLE_OFFSET_DEG`] and covers 360 degrees at
/// `full_scale_w`. Integer division truncates toward zero, so readings below
/// `full_scale_w / 360` collapse onto the anchor and the arc stays empty.
///
/// Callers clamp `power_w` to `-full_scale_w..=full_scale_w` first; this
/// function itself never saturates.
pub fn power_stop_angle(power_w: i32, full_scale_w: i32, sweep: Sweep) -> i32 {
    ANGLE_OFFSET_DEG + (power_w * sweep.sign() * 360) / full_scale_w
}

// =============================================================================
// Clock Track
// =============================================================================

/// Angle of the hour dot, dragged forward by the elapsed minutes.
pub fn hour_dot_angle(hour: u32, minute: u32) -> f32 {
    PI - (TAU / CLOCK_HOURS as f32) * (hour as f32 + minute as f32 / CLOCK_MINUTES as f32)
}

/// Angle of the minute dot, dragged forward by the elapsed seconds.
pub fn minute_dot_angle(minute: u32, second: u32) -> f32 {
    PI - (TAU / CLOCK_MINUTES as f32) * (minute as f32 + second as f32 / CLOCK_MINUTES as f32)
}

/// Angle of the seconds dot. Whole-second positions only.
pub fn second_dot_angle(second: u32) -> f32 {
    PI - (TAU / CLOCK_MINUTES as f32) * second as f32
}

/// Angle of hour tick `index` (0..12). Ticks are direction-agnostic marks,
/// so no 12 o'clock phase shift is needed.
pub fn hour_tick_angle(index: u32) -> f32 {
    (TAU / CLOCK_HOURS as f32) * index as f32
}

/// Project a clock-track angle onto the screen at the given radius.
///
/// Returns pixel coordinates relative to the dial center, truncated toward
/// zero like the rest of the integer pipeline.
pub fn dial_point(angle_rad: f32, radius: f32) -> (i32, i32) {
    let x = CENTER_X as f32 + micromath::F32(angle_rad).sin().0 * radius;
    let y = CENTER_Y as f32 + micromath::F32(angle_rad).cos().0 * radius;
    (x as i32, y as i32)
}

// =============================================================================
// Unit Tests
// =============================================================================
