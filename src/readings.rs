//! Latest-value store for decoded telemetry.
//!
//! The dial only ever shows the most recent reading of each quantity, so
//! this is a plain struct of fields with no history. Raw values are stored
//! exactly as received; the display-facing accessors clamp to the gauge
//! ranges so a bad sender cannot push an arc past full scale. Battery
//! current and temperature are informational text and stay unclamped.

use crate::clamp::{clamp_i32, clamp_u32};
use crate::config::{BATTERY_SOC_MAX, POWER_FULL_SCALE_W};

/// Most recent value of every displayed quantity.
///
/// Power readings from the inverter are unsigned on the wire; they pass
/// through the signed accessors because the animation accumulators and the
/// angle math are signed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReadingStore {
    pred_pv_power_w: u32,
    pv_power_w: u32,
    ac_power_w: u32,
    grid_power_w: i32,
    battery_soc_percent: i32,
    battery_current_a: f32,
    battery_temp_c: f32,
}

impl ReadingStore {
    /// All readings start at zero until telemetry arrives.
    pub const fn new() -> Self {
        Self {
            pred_pv_power_w: 0,
            pv_power_w: 0,
            ac_power_w: 0,
            grid_power_w: 0,
            battery_soc_percent: 0,
            battery_current_a: 0.0,
            battery_temp_c: 0.0,
        }
    }

    // -------------------------------------------------------------------------
    // Setters (called by the ingress decoder)
    // -------------------------------------------------------------------------

    pub fn set_pred_pv_power(&mut self, watts: u32) {
        self.pred_pv_power_w = watts;
    }

    pub fn set_pv_power(&mut self, watts: u32) {
        self.pv_power_w = watts;
    }

    pub fn set_ac_power(&mut self, watts: u32) {
        self.ac_power_w = watts;
    }

    pub fn set_grid_power(&mut self, watts: i32) {
        self.grid_power_w = watts;
    }

    pub fn set_battery_soc(&mut self, percent: i32) {
        self.battery_soc_percent = percent;
    }

    pub fn set_battery_current(&mut self, amps: f32) {
        self.battery_current_a = amps;
    }

    pub fn set_battery_temp(&mut self, celsius: f32) {
        self.battery_temp_c = celsius;
    }

    // -------------------------------------------------------------------------
    // Display accessors (clamped to gauge ranges)
    // -------------------------------------------------------------------------

    /// Forecast PV power, clamped to `0..=POWER_FULL_SCALE_W`.
    pub fn pred_pv_power(&self) -> i32 {
        clamp_u32(self.pred_pv_power_w, 0, POWER_FULL_SCALE_W as u32) as i32
    }

    /// PV production, clamped to `0..=POWER_FULL_SCALE_W`.
    pub fn pv_power(&self) -> i32 {
        clamp_u32(self.pv_power_w, 0, POWER_FULL_SCALE_W as u32) as i32
    }

    /// AC load, clamped to `0..=POWER_FULL_SCALE_W`.
    pub fn ac_power(&self) -> i32 {
        clamp_u32(self.ac_power_w, 0, POWER_FULL_SCALE_W as u32) as i32
    }

    /// Grid power, clamped to one full scale in either direction.
    /// Positive is import, negative is export.
    pub fn grid_power(&self) -> i32 {
        clamp_i32(self.grid_power_w, -POWER_FULL_SCALE_W, POWER_FULL_SCALE_W)
    }

    /// Battery state of charge, clamped to `0..=100`.
    pub fn battery_soc(&self) -> i32 {
        clamp_i32(self.battery_soc_percent, 0, BATTERY_SOC_MAX)
    }

    /// Battery current in amps. Positive while charging. Unclamped.
    pub fn battery_current(&self) -> f32 {
        self.battery_current_a
    }

    /// Battery temperature in degrees Celsius. Unclamped.
    pub fn battery_temp(&self) -> f32 {
        self.battery_temp_c
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
