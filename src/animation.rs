//! Eased value transitions for the power gauges.
//!
//! Readings arrive in coarse jumps (one MQTT publish per second or slower)
//! while the display can redraw every frame. Each displayed quantity is
//! therefore an [`AnimatedValue`]: the decoder moves the *target*, and every
//! animation tick moves *current* a fifth of the remaining distance toward
//! it. The exponential approach makes large jumps sweep quickly and settle
//! gently, without any per-quantity tuning.
//!
//! # Convergence
//!
//! A pure fifth-of-the-remainder step never quite arrives, so two snap rules
//! finish the approach:
//! - within 2% of a non-zero target, jump straight to it;
//! - when integer truncation grinds the step to zero (remaining distance
//!   under 5, which includes every approach to a zero target), jump as well.
//!
//! Together these bound every transition to a few dozen ticks and avoid a
//! dead zone where the step truncates to 0 but the 2% test never fires,
//! which would leave `current` hanging a few watts off target forever. The
//! step is computed from signed distance, so a value can never overshoot.

use crate::readings::ReadingStore;

// =============================================================================
// Easing Constants
// =============================================================================

/// Each tick covers this fraction of the remaining distance (1/5).
const STEP_DIVISOR: i32 = 5;

/// Snap to target once the remaining distance falls below this fraction
/// of the target value.
const SNAP_RATIO: f32 = 0.02;

// =============================================================================
// Animated Value
// =============================================================================

/// One display quantity easing toward its most recent reading.
///
/// `current` is what the renderer draws; `target` is where the decoder wants
/// it. Both are signed: grid power legitimately goes negative, and unsigned
/// quantities ride through unchanged.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedValue {
    target: i32,
    current: i32,
}

impl AnimatedValue {
    /// Start settled at zero.
    pub const fn new() -> Self {
        Self { target: 0, current: 0 }
    }

    /// Move the target. The displayed value starts easing toward it on the
    /// next [`advance`](Self::advance); retargeting mid-flight is fine.
    pub const fn set_target(&mut self, target: i32) {
        self.target = target;
    }

    pub const fn target(&self) -> i32 {
        self.target
    }

    /// Value the renderer should draw this frame.
    pub const fn current(&self) -> i32 {
        self.current
    }

    /// Advance one animation tick.
    ///
    /// Returns `true` if the displayed value changed, `false` once settled.
    /// The frame loop uses this to keep rendering only while something is
    /// still moving.
    pub fn advance(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }

        let delta = self.target - self.current;
        let step = delta / STEP_DIVISOR;

        let snap = if step == 0 {
            true
        } else if self.target != 0 {
            let delta_ratio = delta as f32 / self.target as f32;
            delta_ratio.abs() < SNAP_RATIO
        } else {
            // Zero target never passes the relative test; the step==0 rule
            // above finishes that approach instead.
            false
        };

        if snap {
            self.current = self.target;
        } else {
            self.current += step;
        }
        true
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Gauge Set
// =============================================================================

/// All animated quantities on the dial, advanced together once per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaugeSet {
    pub pred_pv: AnimatedValue,
    pub pv: AnimatedValue,
    pub ac: AnimatedValue,
    pub grid: AnimatedValue,
    pub battery_soc: AnimatedValue,
}

impl GaugeSet {
    pub const fn new() -> Self {
        Self {
            pred_pv: AnimatedValue::new(),
            pv: AnimatedValue::new(),
            ac: AnimatedValue::new(),
            grid: AnimatedValue::new(),
            battery_soc: AnimatedValue::new(),
        }
    }

    /// Refresh every target from the store's clamped accessors.
    pub fn pull_targets(&mut self, store: &ReadingStore) {
        self.pred_pv.set_target(store.pred_pv_power());
        self.pv.set_target(store.pv_power());
        self.ac.set_target(store.ac_power());
        self.grid.set_target(store.grid_power());
        self.battery_soc.set_target(store.battery_soc());
    }

    /// Advance every gauge one tick. Returns `true` if any displayed value
    /// changed.
    pub fn advance(&mut self) -> bool {
        // Bitwise or so every gauge steps even after one reports a change.
        let mut changed = self.pred_pv.advance();
        changed |= self.pv.advance();
        changed |= self.ac.advance();
        changed |= self.grid.advance();
        changed |= self.battery_soc.advance();
        changed
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
