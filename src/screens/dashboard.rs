//! The live energy dial.
//!
//! Draw order is back to front: clear, hour ticks and clock dots on the
//! outer track, the three power rings working inward, then the text rows
//! and the battery bar. Power rings and numeric rows draw the *animated*
//! values so arcs and digits move in lockstep; only the battery current and
//! temperature line prints raw readings, since those are informational and
//! never animate.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::animation::GaugeSet;
use crate::colors::BLACK;
use crate::config::POWER_FULL_SCALE_W;
use crate::readings::ReadingStore;
use crate::widgets::{
    draw_battery_bar, draw_battery_line, draw_center_block, draw_clock_dots, draw_grid_ring,
    draw_hour_ticks, draw_load_ring, draw_power_rows, draw_pv_ring,
};

pub fn draw_dashboard_screen<D>(
    display: &mut D,
    store: &ReadingStore,
    gauges: &GaugeSet,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK)?;

    draw_hour_ticks(display)?;
    draw_clock_dots(display, hour, minute, second)?;

    draw_grid_ring(display, gauges.grid.current(), POWER_FULL_SCALE_W)?;
    draw_pv_ring(
        display,
        gauges.pv.current(),
        gauges.pred_pv.current(),
        POWER_FULL_SCALE_W,
    )?;
    draw_load_ring(display, gauges.ac.current(), POWER_FULL_SCALE_W)?;

    draw_power_rows(display, gauges.grid.current(), gauges.ac.current())?;
    draw_battery_line(display, store.battery_current(), store.battery_temp())?;
    draw_center_block(display, gauges.pv.current(), gauges.pred_pv.current())?;

    draw_battery_bar(
        display,
        gauges.battery_soc.current(),
        store.battery_current() > 0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn test_dashboard_draws_fresh_state() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));
        let store = ReadingStore::new();
        let gauges = GaugeSet::new();
        draw_dashboard_screen(&mut display, &store, &gauges, 0, 0, 0).unwrap();
    }

    #[test]
    fn test_dashboard_draws_settled_readings() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));

        let mut store = ReadingStore::new();
        store.set_pred_pv_power(6_000);
        store.set_pv_power(4_200);
        store.set_ac_power(1_100);
        store.set_grid_power(-3_100);
        store.set_battery_soc(76);
        store.set_battery_current(5.4);
        store.set_battery_temp(28.1);

        let mut gauges = GaugeSet::new();
        gauges.pull_targets(&store);
        while gauges.advance() {}

        draw_dashboard_screen(&mut display, &store, &gauges, 14, 30, 45).unwrap();
    }
}
