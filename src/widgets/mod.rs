//! Widget components for the energy dial.
//!
//! Each submodule draws one layer of the watch face:
//!
//! - [`gauge`]: concentric power rings (grid, PV + forecast, AC load)
//! - [`clock`]: hour ticks and the hour/minute/second dots
//! - [`battery`]: state-of-charge bar with charge direction coloring
//! - [`labels`]: all text rows, formatted into `heapless::String` buffers
//!
//! # Architecture
//!
//! Widgets are pure functions, generic over `DrawTarget<Color = Rgb565>` so
//! the same code renders to the simulator and to a device framebuffer. They
//! draw from pre-computed layout constants in [`config`](crate::config) and
//! static styles from [`styles`](crate::styles); no widget holds state. Draw
//! errors propagate to the caller, which decides whether a failed frame is
//! fatal.
//!
//! Layering relies on draw order, not clipping: the dashboard screen clears
//! to black, then stacks ticks, dots, rings, text and the battery bar. The
//! radii are spaced so no two layers collide.

mod battery;
mod clock;
mod gauge;
mod labels;

pub use battery::draw_battery_bar;
pub use clock::{draw_clock_dots, draw_hour_ticks};
pub use gauge::{
    draw_grid_ring,
    draw_load_ring,
    draw_pv_ring,
    draw_ring_backgrounds,
    grid_ring_color,
};
pub use labels::{
    draw_battery_line,
    draw_center_block,
    draw_connect_prompt,
    draw_power_rows,
};
