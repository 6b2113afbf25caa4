//! Battery state-of-charge bar.
//!
//! A small horizontal battery outline above the dial center: silver frame,
//! black well, a fill proportional to the state of charge and a terminal
//! nub on the right. The fill is red while the battery charges and dimmed
//! green while it discharges, matching the grid/PV color language. The
//! percentage prints over the bar.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;

use crate::clamp::clamp_i32;
use crate::colors::{BLACK, CHARGE_RED, DOT_SILVER, PV_GREEN, dim_color};
use crate::config::{
    BATTERY_FRAME_H, BATTERY_FRAME_W, BATTERY_FRAME_X, BATTERY_FRAME_Y, BATTERY_INNER_H,
    BATTERY_INNER_W, BATTERY_INNER_X, BATTERY_INNER_Y, BATTERY_LABEL_Y, BATTERY_NUB_H,
    BATTERY_NUB_W, BATTERY_NUB_X, BATTERY_NUB_Y, BATTERY_SOC_MAX, CENTER_X,
};
use crate::styles::{CENTERED_MIDDLE, LABEL_STYLE_WHITE};

/// Fill width in pixels for a state of charge. Integer-scaled so 100%
/// exactly fills the inner well; out-of-range input is clamped.
fn fill_width(soc_percent: i32) -> u32 {
    let soc = clamp_i32(soc_percent, 0, BATTERY_SOC_MAX);
    (BATTERY_INNER_W as i32 * soc / BATTERY_SOC_MAX) as u32
}

/// Draw the bar and its percentage label.
///
/// `charging` selects the fill color; pass the sign of the battery current.
pub fn draw_battery_bar<D>(
    display: &mut D,
    soc_percent: i32,
    charging: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(
        Point::new(BATTERY_FRAME_X, BATTERY_FRAME_Y),
        Size::new(BATTERY_FRAME_W, BATTERY_FRAME_H),
    )
    .into_styled(PrimitiveStyle::with_fill(DOT_SILVER))
    .draw(display)?;

    Rectangle::new(
        Point::new(BATTERY_INNER_X, BATTERY_INNER_Y),
        Size::new(BATTERY_INNER_W, BATTERY_INNER_H),
    )
    .into_styled(PrimitiveStyle::with_fill(BLACK))
    .draw(display)?;

    let fill = fill_width(soc_percent);
    if fill > 0 {
        let color = if charging { CHARGE_RED } else { dim_color(PV_GREEN, 50) };
        Rectangle::new(
            Point::new(BATTERY_INNER_X, BATTERY_INNER_Y),
            Size::new(fill, BATTERY_INNER_H),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)?;
    }

    Rectangle::new(
        Point::new(BATTERY_NUB_X, BATTERY_NUB_Y),
        Size::new(BATTERY_NUB_W, BATTERY_NUB_H),
    )
    .into_styled(PrimitiveStyle::with_fill(DOT_SILVER))
    .draw(display)?;

    let mut label: String<8> = String::new();
    let _ = write!(label, "{}%", clamp_i32(soc_percent, 0, BATTERY_SOC_MAX));
    Text::with_text_style(
        &label,
        Point::new(CENTER_X, BATTERY_LABEL_Y),
        LABEL_STYLE_WHITE,
        CENTERED_MIDDLE,
    )
    .draw(display)?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn test_fill_width_scales_with_soc() {
        assert_eq!(fill_width(0), 0);
        assert_eq!(fill_width(100), BATTERY_INNER_W);
        assert_eq!(fill_width(50), BATTERY_INNER_W / 2);
        // 54 * 33 / 100 = 17.82 -> truncates
        assert_eq!(fill_width(33), 17);
    }

    #[test]
    fn test_fill_width_clamps_bad_input() {
        assert_eq!(fill_width(-20), 0);
        assert_eq!(fill_width(400), BATTERY_INNER_W);
    }

    #[test]
    fn test_bar_draws_in_both_charge_directions() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));
        draw_battery_bar(&mut display, 80, true).unwrap();
        draw_battery_bar(&mut display, 80, false).unwrap();
        draw_battery_bar(&mut display, 0, false).unwrap();
    }
}
