//! Clock track: hour ticks and the hour/minute/second dots.
//!
//! The watch keeps telling time while showing power. Twelve gray ticks mark
//! the hours; three filled dots ride the tick radius in place of hands. Dots
//! are drawn hour first and seconds last, so when they stack the smallest
//! one stays visible on top.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::colors::{DOT_SILVER, GRID_EXPORT_BLUE, PV_GREEN, TICK_GRAY, dim_color};
use crate::config::{
    HOUR_DOT_RADIUS, HOUR_TICK_HALF_LEN, HOUR_TICKS_RADIUS, MINUTE_DOT_RADIUS, SECOND_DOT_RADIUS,
};
use crate::geometry::{
    CLOCK_HOURS, dial_point, hour_dot_angle, hour_tick_angle, minute_dot_angle, second_dot_angle,
};

/// Twelve radial tick marks straddling the clock track radius.
pub fn draw_hour_ticks<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_stroke(TICK_GRAY, 1);
    for i in 0..CLOCK_HOURS {
        let angle = hour_tick_angle(i);
        let (x0, y0) = dial_point(angle, (HOUR_TICKS_RADIUS - HOUR_TICK_HALF_LEN) as f32);
        let (x1, y1) = dial_point(angle, (HOUR_TICKS_RADIUS + HOUR_TICK_HALF_LEN) as f32);
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

fn draw_dot<D>(display: &mut D, angle: f32, radius: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, y) = dial_point(angle, HOUR_TICKS_RADIUS as f32);
    // Odd diameter keeps the dot centered on its computed pixel.
    Circle::with_center(Point::new(x, y), radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// The three time dots. Minutes drag with seconds and hours with minutes,
/// so the dots glide instead of jumping.
pub fn draw_clock_dots<D>(
    display: &mut D,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_dot(display, hour_dot_angle(hour, minute), HOUR_DOT_RADIUS, DOT_SILVER)?;
    draw_dot(
        display,
        minute_dot_angle(minute, second),
        MINUTE_DOT_RADIUS,
        dim_color(PV_GREEN, 25),
    )?;
    draw_dot(display, second_dot_angle(second), SECOND_DOT_RADIUS, GRID_EXPORT_BLUE)
}
