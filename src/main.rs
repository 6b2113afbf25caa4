// Crate-level lints: Allow common graphics casts that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for scripted telemetry
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in signal generation
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Energy dashboard simulator for the round watch display.
//!
//! Runs the full dial against a scripted broker instead of a live MQTT
//! session: the transport "connects" after a short handshake, then publishes
//! one batch of the three telemetry topics per second, swept by slow sine
//! waves so every ring crosses its whole range. Everything above the
//! transport is the same code a device build runs.
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key | Action |
//! |--------|-----|--------|
//! | Side | `C` / `Space` | Disconnect; while offline, toggle reconnect attempts |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

use std::collections::VecDeque;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use energy_watch_dashboard::app::{EnergyApp, TickResult, WallClock};
use energy_watch_dashboard::colors::BLACK;
use energy_watch_dashboard::config::{FRAME_TIME, POWER_FULL_SCALE_W, SCREEN_HEIGHT, SCREEN_WIDTH};
use energy_watch_dashboard::ingress::{TOPIC_BATTERY, TOPIC_FORECAST, TOPIC_INVERTER};
use energy_watch_dashboard::transport::{InboundMessage, Transport};
use log::warn;
use serde_json::json;

/// Connect steps before the scripted broker reports a session (~1.2 s of the
/// connect screen at the target frame rate).
const HANDSHAKE_STEPS: u32 = 24;

/// Scripted publish cadence, one batch of all three topics per interval.
const PUBLISH_INTERVAL_MS: u64 = 1000;

fn main() {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Energy Watch Sim", &output_settings);

    // Initial clear so the first events() poll has a frame behind it
    display.clear(BLACK).ok();
    window.update(&display);

    let mut app = EnergyApp::new(SimTransport::new());
    let started = Instant::now();

    // ==========================================================================
    // Main Frame Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, side button presses)
        // The watch has a single side button; C or Space stands in for it
        let mut button_pressed = false;
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat, the app wants a went-down edge
                    if !repeat && matches!(keycode, Keycode::C | Keycode::Space) {
                        button_pressed = true;
                    }
                }
                _ => {}
            }
        }

        let now_ms = started.elapsed().as_millis() as u64;
        if app.tick(now_ms, button_pressed) == TickResult::RenderRequested {
            if let Err(err) = app.draw(&mut display, local_wall_clock()) {
                warn!("screen draw failed: {err:?}");
            }
        }

        // Update window every frame, even when the tick skipped rendering
        window.update(&display);

        // Sleep to maintain target frame rate (~20 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

// ==============================================================================
// Scripted Transport
// ==============================================================================

/// Broker stand-in that generates plausible telemetry instead of opening a
/// socket.
///
/// PV follows a slow irradiance sweep below its own forecast, the house load
/// wanders independently, and grid power is whatever the two leave over, so
/// the grid ring swings through both import and export. Batch timing runs
/// off a local monotonic clock so the cadence matches a real broker session.
struct SimTransport {
    connected: bool,
    handshake_left: u32,
    started: Instant,
    last_batch_ms: Option<u64>,
    pending: VecDeque<InboundMessage>,
    /// Signal generation time parameter (advances once per published batch)
    t: f32,
}

impl SimTransport {
    fn new() -> Self {
        Self {
            connected: false,
            handshake_left: HANDSHAKE_STEPS,
            started: Instant::now(),
            last_batch_ms: None,
            pending: VecDeque::new(),
            t: 0.0,
        }
    }

    /// Queue one batch of the three telemetry publishes.
    fn publish_batch(&mut self) {
        self.t += 1.0;

        let pred = demo_wave(self.t, 0.0, POWER_FULL_SCALE_W as f32, 0.041) as u32;
        let pv = (pred as f32 * demo_wave(self.t, 0.35, 1.0, 0.09)) as u32;
        let ac = demo_wave(self.t, 150.0, 4200.0, 0.063) as u32;
        // Net import: whatever the load needs beyond local production
        let grid = ac as i32 - pv as i32;

        let soc = demo_wave(self.t, 8.0, 97.0, 0.011) as i32;
        let current = round_tenths(demo_wave(self.t, -12.0, 12.0, 0.033));
        let temp = round_tenths(demo_wave(self.t, 18.0, 41.0, 0.017));

        self.queue_json(TOPIC_FORECAST, &json!({ "pred_pv_power": pred }));
        self.queue_json(
            TOPIC_INVERTER,
            &json!({ "pv_power": pv, "ac_power": ac, "grid_power": grid }),
        );
        self.queue_json(
            TOPIC_BATTERY,
            &json!({ "batt_soc": soc, "batt_current": current, "batt_temp": temp }),
        );
    }

    fn queue_json(&mut self, topic: &str, value: &serde_json::Value) {
        let payload = value.to_string();
        match InboundMessage::new(topic, payload.as_bytes()) {
            Some(msg) => self.pending.push_back(msg),
            None => warn!("scripted publish on {topic} exceeds the receive buffer"),
        }
    }
}

impl Transport for SimTransport {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn connect_step(&mut self) {
        if self.connected {
            return;
        }
        if self.handshake_left == 0 {
            self.connected = true;
        } else {
            self.handshake_left -= 1;
        }
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.handshake_left = HANDSHAKE_STEPS;
        self.pending.clear();
        self.last_batch_ms = None;
    }

    fn poll_message(&mut self) -> Option<InboundMessage> {
        if !self.connected {
            return None;
        }
        let now_ms = self.started.elapsed().as_millis() as u64;
        let batch_due = match self.last_batch_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= PUBLISH_INTERVAL_MS,
        };
        if batch_due {
            self.last_batch_ms = Some(now_ms);
            self.publish_batch();
        }
        self.pending.pop_front()
    }
}

// ==============================================================================
// Helpers
// ==============================================================================

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// Used to script telemetry in simulator mode.
///
/// # Parameters
/// - `t`: Time parameter (advances once per published batch)
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn demo_wave(
    t: f32,
    min: f32,
    max: f32,
    freq: f32,
) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}

/// Keep scripted floats to one decimal so payloads stay short and readable.
fn round_tenths(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Wall-clock time for the watch face, derived from the system clock (UTC).
fn local_wall_clock() -> WallClock {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    WallClock::new(
        ((secs / 3600) % 24) as u32,
        ((secs / 60) % 60) as u32,
        (secs % 60) as u32,
    )
}
