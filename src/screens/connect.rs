//! Connect screen shown while no broker session is up.
//!
//! Keeps the dial recognizable with the empty ring tracks, plus a prompt
//! saying whether the watch is still trying. No clock and no values; those
//! only render from live state on the dashboard.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::BLACK;
use crate::widgets::{draw_connect_prompt, draw_ring_backgrounds};

pub fn draw_connect_screen<D>(display: &mut D, connecting: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;
    draw_ring_backgrounds(display)?;
    draw_connect_prompt(display, connecting)
}
