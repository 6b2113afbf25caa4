//! Text rows on the dial.
//!
//! All captions and values sit on the vertical center line, stacked between
//! the battery bar at the top and the grid row at the bottom. Caption/value
//! pairs share one anchor: the caption ends at it, the value starts at it,
//! which keeps rows visually centered without measuring string widths.
//! Formatting goes through `heapless::String`, so drawing never allocates.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use heapless::String;

use crate::config::{
    AC_CAPTION_Y, AC_VALUE_Y, BATTERY_LINE_Y, CENTER_BLOCK_Y, CENTER_X, GRID_ROW_Y, PV_CAPTION_Y,
};
use crate::styles::{
    CENTER_VALUE_STYLE, CENTERED_MIDDLE, CENTERED_TOP, LABEL_STYLE_WHITE, LEFT_MIDDLE,
    PROMPT_STYLE_WHITE, RIGHT_MIDDLE,
};

/// Grid and AC rows plus the "PV" caption over the center block.
///
/// Grid power prints signed, so export shows as a negative number.
pub fn draw_power_rows<D>(
    display: &mut D,
    grid_power_w: i32,
    ac_power_w: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let anchor = Point::new(CENTER_X, GRID_ROW_Y);
    Text::with_text_style("Grid ", anchor, LABEL_STYLE_WHITE, RIGHT_MIDDLE).draw(display)?;
    let mut grid_str: String<16> = String::new();
    let _ = write!(grid_str, "{grid_power_w}");
    Text::with_text_style(&grid_str, anchor, LABEL_STYLE_WHITE, LEFT_MIDDLE).draw(display)?;

    Text::with_text_style(
        "PV",
        Point::new(CENTER_X, PV_CAPTION_Y),
        LABEL_STYLE_WHITE,
        CENTERED_MIDDLE,
    )
    .draw(display)?;

    Text::with_text_style(
        "AC ",
        Point::new(CENTER_X, AC_CAPTION_Y),
        LABEL_STYLE_WHITE,
        RIGHT_MIDDLE,
    )
    .draw(display)?;
    let mut ac_str: String<16> = String::new();
    let _ = write!(ac_str, "{ac_power_w}");
    Text::with_text_style(
        &ac_str,
        Point::new(CENTER_X, AC_VALUE_Y),
        LABEL_STYLE_WHITE,
        LEFT_MIDDLE,
    )
    .draw(display)?;

    Ok(())
}

/// Battery current and temperature row under the bar.
pub fn draw_battery_line<D>(display: &mut D, current_a: f32, temp_c: f32) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut line: String<32> = String::new();
    let _ = write!(line, "{current_a:.1} A {temp_c:.1} C");
    Text::with_text_style(
        &line,
        Point::new(CENTER_X, BATTERY_LINE_Y),
        LABEL_STYLE_WHITE,
        CENTERED_TOP,
    )
    .draw(display)
    .map(|_| ())
}

/// The large three-line block in the dial center: actual PV over forecast.
pub fn draw_center_block<D>(
    display: &mut D,
    pv_power_w: i32,
    pred_pv_power_w: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut block: String<32> = String::new();
    let _ = write!(block, "PV/Pred:\n{pv_power_w}/{pred_pv_power_w}\n W ");
    Text::with_text_style(
        &block,
        Point::new(CENTER_X, CENTER_BLOCK_Y),
        CENTER_VALUE_STYLE,
        CENTERED_TOP,
    )
    .draw(display)
    .map(|_| ())
}

/// Connect-screen prompt in the dial center.
pub fn draw_connect_prompt<D>(display: &mut D, connecting: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let prompt = if connecting {
        "Energy monitor\nConnecting ..."
    } else {
        "Energy monitor\nDisconnected"
    };
    Text::with_text_style(
        prompt,
        Point::new(CENTER_X, CENTER_BLOCK_Y),
        PROMPT_STYLE_WHITE,
        CENTERED_TOP,
    )
    .draw(display)
    .map(|_| ())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn test_rows_draw_at_range_extremes() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));
        draw_power_rows(&mut display, -15_000, 15_000).unwrap();
        draw_battery_line(&mut display, -118.4, 45.0).unwrap();
        draw_center_block(&mut display, 15_000, 15_000).unwrap();
    }

    #[test]
    fn test_prompt_draws_both_variants() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));
        draw_connect_prompt(&mut display, true).unwrap();
        draw_connect_prompt(&mut display, false).unwrap();
    }
}
