//! Concentric power rings.
//!
//! Every ring is three layers at one radius: a faint full circle so the
//! track is visible at zero, a dim arc and a bright arc from the 12 o'clock
//! anchor to the value's stop angle. The PV ring deviates: its "dim" layer
//! is the day-ahead forecast at full green, and the bright layer is actual
//! production in darkened green, so production visibly fills in under the
//! forecast as the day progresses.
//!
//! Arc sweeps come from [`geometry`](crate::geometry) in dial degrees;
//! the conversion to the embedded-graphics angle convention (0 degrees at
//! 3 o'clock, positive counter-clockwise) happens only here.

use embedded_graphics::geometry::Angle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};

use crate::colors::{AC_CYAN, GRID_EXPORT_BLUE, GRID_IMPORT_RED, PV_GREEN, change_color, dim_color};
use crate::config::{
    AC_RING_RADIUS, ANGLE_OFFSET_DEG, CENTER_X, CENTER_Y, GRID_RING_RADIUS, PV_RING_RADIUS,
    RING_BG_STROKE, RING_BRIGHT_STROKE, RING_DIM_STROKE,
};
use crate::geometry::{Sweep, power_stop_angle};

/// Background circle brightness for the grid and load rings.
const BG_FRACTION: f32 = 0.25;

/// The PV background sits under two value arcs and runs slightly darker.
const PV_BG_FRACTION: f32 = 0.20;

fn dial_center() -> Point {
    Point::new(CENTER_X, CENTER_Y)
}

/// Convert a dial degree to the embedded-graphics angle convention.
fn screen_angle(dial_deg: i32) -> Angle {
    Angle::from_degrees((270 - dial_deg) as f32)
}

/// Grid ring color by flow direction: red while importing, blue otherwise.
pub fn grid_ring_color(grid_power_w: i32) -> Rgb565 {
    if grid_power_w > 0 {
        GRID_IMPORT_RED
    } else {
        GRID_EXPORT_BLUE
    }
}

fn draw_ring_background<D>(display: &mut D, radius: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(dial_center(), radius * 2)
        .into_styled(PrimitiveStyle::with_stroke(color, RING_BG_STROKE))
        .draw(display)
}

/// Stroke an arc from the anchor to `stop_deg`. A stop on the anchor means
/// an empty arc and draws nothing.
fn draw_value_arc<D>(
    display: &mut D,
    radius: u32,
    stop_deg: i32,
    stroke: u32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if stop_deg == ANGLE_OFFSET_DEG {
        return Ok(());
    }
    // Dial degrees run clockwise, screen degrees counter-clockwise, so the
    // sweep flips sign in the conversion.
    let sweep = Angle::from_degrees((ANGLE_OFFSET_DEG - stop_deg) as f32);
    Arc::with_center(dial_center(), radius * 2, screen_angle(ANGLE_OFFSET_DEG), sweep)
        .into_styled(PrimitiveStyle::with_stroke(color, stroke))
        .draw(display)
}

/// Outermost ring: grid power, counter-clockwise for import so that import
/// and export occupy opposite halves of the dial.
pub fn draw_grid_ring<D>(
    display: &mut D,
    grid_power_w: i32,
    full_scale_w: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = grid_ring_color(grid_power_w);
    let stop = power_stop_angle(grid_power_w, full_scale_w, Sweep::CounterClockwise);
    draw_ring_background(display, GRID_RING_RADIUS, change_color(color, BG_FRACTION))?;
    draw_value_arc(display, GRID_RING_RADIUS, stop, RING_DIM_STROKE, dim_color(color, 25))?;
    draw_value_arc(display, GRID_RING_RADIUS, stop, RING_BRIGHT_STROKE, color)
}

/// Middle ring: actual PV production layered over the forecast arc.
pub fn draw_pv_ring<D>(
    display: &mut D,
    pv_power_w: i32,
    pred_pv_power_w: i32,
    full_scale_w: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_ring_background(display, PV_RING_RADIUS, change_color(PV_GREEN, PV_BG_FRACTION))?;
    let pred_stop = power_stop_angle(pred_pv_power_w, full_scale_w, Sweep::Clockwise);
    draw_value_arc(display, PV_RING_RADIUS, pred_stop, RING_DIM_STROKE, PV_GREEN)?;
    let pv_stop = power_stop_angle(pv_power_w, full_scale_w, Sweep::Clockwise);
    draw_value_arc(display, PV_RING_RADIUS, pv_stop, RING_BRIGHT_STROKE, dim_color(PV_GREEN, 50))
}

/// Innermost ring: AC load, clockwise.
pub fn draw_load_ring<D>(
    display: &mut D,
    ac_power_w: i32,
    full_scale_w: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let stop = power_stop_angle(ac_power_w, full_scale_w, Sweep::Clockwise);
    draw_ring_background(display, AC_RING_RADIUS, change_color(AC_CYAN, BG_FRACTION))?;
    draw_value_arc(display, AC_RING_RADIUS, stop, RING_DIM_STROKE, dim_color(AC_CYAN, 25))?;
    draw_value_arc(display, AC_RING_RADIUS, stop, RING_BRIGHT_STROKE, AC_CYAN)
}

/// The three empty ring tracks, used by the connect screen before any
/// telemetry exists.
pub fn draw_ring_backgrounds<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_ring_background(display, GRID_RING_RADIUS, change_color(GRID_EXPORT_BLUE, BG_FRACTION))?;
    draw_ring_background(display, PV_RING_RADIUS, change_color(PV_GREEN, PV_BG_FRACTION))?;
    draw_ring_background(display, AC_RING_RADIUS, change_color(AC_CYAN, BG_FRACTION))
}

// =============================================================================
// Unit Tests
// =============================================================================
