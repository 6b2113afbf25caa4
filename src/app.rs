//! Application core: connection state, tick processing, render policy.
//!
//! [`EnergyApp`] owns everything except the display and the clock. The
//! binary calls [`tick`](EnergyApp::tick) once per frame with a monotonic
//! timestamp and the button edge, then draws only when the tick asks for
//! it. All decisions are made here, against the [`Transport`] trait, so the
//! whole state machine runs in host tests with a scripted transport.
//!
//! # Tick order
//!
//! 1. Apply the button edge (connect/disconnect toggle).
//! 2. Disconnected: step the connection attempt while a link is wanted.
//!    Connected: drain every queued publish into the store, then refresh
//!    the animation targets.
//! 3. Advance the animations one step.
//! 4. Decide whether this frame renders.
//!
//! # Render policy
//!
//! The dial is static most of the time, so frames render only when
//! something is worth showing: unconditionally on the first tick and after
//! every state change, while any gauge is still easing, and otherwise at a
//! steady once-per-second refresh that keeps the clock dots moving.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, info, warn};

use crate::animation::GaugeSet;
use crate::config::REDRAW_INTERVAL_MS;
use crate::ingress::{self, DecodeOutcome, SUBSCRIBE_PATTERN};
use crate::readings::ReadingStore;
use crate::screens::{draw_connect_screen, draw_dashboard_screen};
use crate::transport::Transport;

/// Broker session state, which doubles as the screen selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectionState {
    /// No session; the connect screen is shown.
    Disconnected,
    /// Authenticated and subscribed; the dashboard is shown.
    Connected,
}

/// What the frame loop should do after a tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Local wall-clock time for the watch face.
#[derive(Clone, Copy, Debug)]
pub struct WallClock {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl WallClock {
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }
}

/// The dashboard application, generic over its broker transport.
pub struct EnergyApp<T: Transport> {
    transport: T,
    store: ReadingStore,
    gauges: GaugeSet,
    state: ConnectionState,
    /// User intent: keep (re)connecting while true. Starts true so the
    /// watch dials out immediately after power-on.
    link_wanted: bool,
    last_render_ms: Option<u64>,
}

impl<T: Transport> EnergyApp<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            store: ReadingStore::new(),
            gauges: GaugeSet::new(),
            state: ConnectionState::Disconnected,
            link_wanted: true,
            last_render_ms: None,
        }
    }

    pub const fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub const fn store(&self) -> &ReadingStore {
        &self.store
    }

    pub const fn gauges(&self) -> &GaugeSet {
        &self.gauges
    }

    /// Process one frame tick.
    ///
    /// `now_ms` must come from a monotonic clock; it gates the once-per-
    /// second refresh. `button_pressed` is a went-down edge, not a level:
    /// the frame loop reports each press exactly once.
    pub fn tick(&mut self, now_ms: u64, button_pressed: bool) -> TickResult {
        let mut force_render = false;

        if button_pressed {
            self.on_button();
            force_render = true;
        }

        match self.state {
            ConnectionState::Disconnected => {
                if self.link_wanted {
                    self.transport.connect_step();
                    if self.transport.is_connected() {
                        info!("broker session up, subscribed to {SUBSCRIBE_PATTERN}");
                        self.state = ConnectionState::Connected;
                        force_render = true;
                    }
                }
            }
            ConnectionState::Connected => {
                if self.transport.is_connected() {
                    self.drain_messages();
                    self.gauges.pull_targets(&self.store);
                } else {
                    warn!("broker session lost, reconnecting");
                    self.state = ConnectionState::Disconnected;
                    force_render = true;
                }
            }
        }

        // Gauges only move while the dashboard is visible; a disconnect
        // freezes them so a later session resumes from the last picture.
        let animating =
            self.state == ConnectionState::Connected && self.gauges.advance();

        let refresh_due = match self.last_render_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= REDRAW_INTERVAL_MS,
        };

        if refresh_due || animating || force_render {
            self.last_render_ms = Some(now_ms);
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Render the screen for the current state.
    pub fn draw<D>(&self, display: &mut D, clock: WallClock) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        match self.state {
            ConnectionState::Disconnected => draw_connect_screen(display, self.link_wanted),
            ConnectionState::Connected => draw_dashboard_screen(
                display,
                &self.store,
                &self.gauges,
                clock.hour,
                clock.minute,
                clock.second,
            ),
        }
    }

    /// Connect/disconnect toggle. Connected: drop the session. Otherwise:
    /// flip between retrying and staying offline.
    fn on_button(&mut self) {
        match self.state {
            ConnectionState::Connected => {
                info!("disconnect requested");
                self.transport.disconnect();
                self.link_wanted = false;
                self.state = ConnectionState::Disconnected;
            }
            ConnectionState::Disconnected => {
                self.link_wanted = !self.link_wanted;
                info!(
                    "connect attempts {}",
                    if self.link_wanted { "resumed" } else { "paused" }
                );
            }
        }
    }

    /// Pull every queued publish out of the transport. Outcomes are already
    /// logged where they are decided; unknown topics are only worth a debug
    /// line since the wildcard subscription legitimately over-matches.
    fn drain_messages(&mut self) {
        while let Some(msg) = self.transport.poll_message() {
            match ingress::apply_message(&mut self.store, msg.topic.as_str(), &msg.payload) {
                DecodeOutcome::Applied | DecodeOutcome::Malformed => {}
                DecodeOutcome::UnknownTopic => {
                    debug!("ignoring publish on {}", msg.topic);
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingress::{TOPIC_BATTERY, TOPIC_FORECAST, TOPIC_INVERTER};
    use crate::transport::InboundMessage;
    use embedded_graphics_simulator::SimulatorDisplay;
    use std::collections::VecDeque;

    const TICK_MS: u64 = 50;

    /// Transport stand-in driven entirely by the test.
    struct ScriptedTransport {
        connected: bool,
        steps_until_connected: u32,
        connect_steps_taken: u32,
        queue: VecDeque<(std::string::String, Vec<u8>)>,
    }

    impl ScriptedTransport {
        fn new(steps_until_connected: u32) -> Self {
            Self {
                connected: false,
                steps_until_connected,
                connect_steps_taken: 0,
                queue: VecDeque::new(),
            }
        }

        fn push(&mut self, topic: &str, payload: &[u8]) {
            self.queue.push_back((topic.into(), payload.to_vec()));
        }

        /// Drop the session; reconnect attempts succeed again after
        /// `steps_to_recover` connect steps.
        fn kill_link(&mut self, steps_to_recover: u32) {
            self.connected = false;
            self.steps_until_connected = steps_to_recover;
        }
    }

    impl Transport for ScriptedTransport {
        fn is_connected(&self) -> bool {
            self.connected
        }

        fn connect_step(&mut self) {
            if self.connected {
                return;
            }
            self.connect_steps_taken += 1;
            if self.steps_until_connected == 0 {
                self.connected = true;
            } else {
                self.steps_until_connected -= 1;
            }
        }

        fn disconnect(&mut self) {
            self.connected = false;
        }

        fn poll_message(&mut self) -> Option<InboundMessage> {
            let (topic, payload) = self.queue.pop_front()?;
            InboundMessage::new(&topic, &payload)
        }
    }

    /// Tick until connected, advancing time. Panics if it takes too long.
    fn connect(app: &mut EnergyApp<ScriptedTransport>, now_ms: &mut u64) {
        for _ in 0..100 {
            if app.connection_state() == ConnectionState::Connected {
                return;
            }
            app.tick(*now_ms, false);
            *now_ms += TICK_MS;
        }
        panic!("transport never came up");
    }

    /// Tick until no gauge moves anymore.
    fn settle(app: &mut EnergyApp<ScriptedTransport>, now_ms: &mut u64) {
        for _ in 0..200 {
            app.tick(*now_ms, false);
            *now_ms += TICK_MS;
        }
    }

    #[test]
    fn test_first_tick_always_renders() {
        let mut app = EnergyApp::new(ScriptedTransport::new(5));
        assert_eq!(app.tick(0, false), TickResult::RenderRequested);
        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_connects_once_transport_comes_up() {
        let mut app = EnergyApp::new(ScriptedTransport::new(3));
        let mut now = 0;
        connect(&mut app, &mut now);
        assert_eq!(app.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_connecting_tick_requests_render() {
        // Transport connects on the very first step, so the first tick both
        // connects and renders the new screen.
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        assert_eq!(app.tick(0, false), TickResult::RenderRequested);
        assert_eq!(app.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_telemetry_reaches_store_and_gauges() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        app.transport.push(
            TOPIC_INVERTER,
            b"{\"pv_power\": 4300, \"ac_power\": 1250, \"grid_power\": -2100}",
        );
        app.tick(now, false);

        assert_eq!(app.store().pv_power(), 4_300);
        assert_eq!(app.gauges().pv.target(), 4_300);
        assert_eq!(app.gauges().grid.target(), -2_100);
    }

    #[test]
    fn test_backlog_drains_in_a_single_tick() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        app.transport.push(TOPIC_FORECAST, b"{\"pred_pv_power\": 5200}");
        app.transport.push(TOPIC_INVERTER, b"{\"pv_power\": 3300}");
        app.transport.push(TOPIC_BATTERY, b"{\"batt_soc\": 64}");
        app.tick(now, false);

        assert!(app.transport.queue.is_empty(), "tick must drain the whole queue");
        assert_eq!(app.store().pred_pv_power(), 5_200);
        assert_eq!(app.store().pv_power(), 3_300);
        assert_eq!(app.store().battery_soc(), 64);
    }

    #[test]
    fn test_renders_every_tick_while_animating() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        app.transport.push(TOPIC_INVERTER, b"{\"pv_power\": 8000}");

        // The easing takes well over a dozen ticks; every one must render
        // even though the 1 Hz refresh is not due.
        let mut renders = 0;
        for _ in 0..15 {
            if app.tick(now, false) == TickResult::RenderRequested {
                renders += 1;
            }
            now += TICK_MS;
        }
        assert_eq!(renders, 15, "animation frames must all render");
    }

    #[test]
    fn test_idle_cadence_drops_to_one_hertz() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);
        settle(&mut app, &mut now);

        // Align on a fresh render, then count frames over two full seconds.
        while app.tick(now, false) == TickResult::NoRender {
            now += TICK_MS;
        }
        now += TICK_MS;

        let mut renders = 0;
        for _ in 0..40 {
            if app.tick(now, false) == TickResult::RenderRequested {
                renders += 1;
            }
            now += TICK_MS;
        }
        assert_eq!(renders, 2, "idle dashboard refreshes once per second");
    }

    #[test]
    fn test_button_disconnects_and_stops_retrying() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        assert_eq!(app.tick(now, true), TickResult::RenderRequested);
        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
        assert!(!app.transport.is_connected(), "transport must be torn down");

        // No reconnect attempts while the link is unwanted.
        let steps_before = app.transport.connect_steps_taken;
        now += TICK_MS;
        for _ in 0..10 {
            app.tick(now, false);
            now += TICK_MS;
        }
        assert_eq!(app.transport.connect_steps_taken, steps_before);
        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
    }

    #[test]
    fn test_button_resumes_connecting() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        // Disconnect, then press again to resume; the session comes back.
        app.tick(now, true);
        now += TICK_MS;
        app.tick(now, true);
        now += TICK_MS;
        connect(&mut app, &mut now);
        assert_eq!(app.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_link_loss_recovers_automatically() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        app.transport.push(TOPIC_INVERTER, b"{\"ac_power\": 900}");
        app.tick(now, false);
        now += TICK_MS;

        app.transport.kill_link(3);
        assert_eq!(app.tick(now, false), TickResult::RenderRequested);
        assert_eq!(app.connection_state(), ConnectionState::Disconnected);
        now += TICK_MS;

        // The link was lost, not dismissed, so attempts continue.
        connect(&mut app, &mut now);
        assert_eq!(app.connection_state(), ConnectionState::Connected);
        assert_eq!(app.store().ac_power(), 900, "readings survive the outage");
    }

    #[test]
    fn test_gauges_freeze_while_disconnected() {
        let mut app = EnergyApp::new(ScriptedTransport::new(0));
        let mut now = 0;
        connect(&mut app, &mut now);

        app.transport.push(TOPIC_INVERTER, b"{\"pv_power\": 8000}");
        app.tick(now, false);
        now += TICK_MS;
        app.tick(now, false);
        now += TICK_MS;

        let frozen = app.gauges().pv.current();
        assert!(frozen > 0, "easing should have started");

        // Session stays down for longer than the observation window.
        app.transport.kill_link(u32::MAX);
        for _ in 0..6 {
            app.tick(now, false);
            now += TICK_MS;
        }
        assert_eq!(app.gauges().pv.current(), frozen, "no easing while disconnected");
    }

    #[test]
    fn test_full_session_scenario() {
        let mut app = EnergyApp::new(ScriptedTransport::new(2));
        let mut now = 0;

        // Power-on: connect screen, then the session comes up.
        assert_eq!(app.tick(now, false), TickResult::RenderRequested);
        now += TICK_MS;
        connect(&mut app, &mut now);

        // First telemetry sweep eases in.
        app.transport.push(
            TOPIC_INVERTER,
            b"{\"pv_power\": 5000, \"ac_power\": 700, \"grid_power\": 1200}",
        );
        app.transport.push(TOPIC_BATTERY, b"{\"batt_soc\": 55, \"batt_current\": 3.1}");
        settle(&mut app, &mut now);
        assert_eq!(app.gauges().pv.current(), 5_000);
        assert_eq!(app.gauges().battery_soc.current(), 55);

        // Cloud passes over: a new reading re-eases from the settled value.
        app.transport.push(TOPIC_INVERTER, b"{\"pv_power\": 800}");
        app.tick(now, false);
        now += TICK_MS;
        assert_eq!(app.gauges().pv.target(), 800);
        settle(&mut app, &mut now);
        assert_eq!(app.gauges().pv.current(), 800);

        // Outage and recovery.
        app.transport.kill_link(2);
        app.tick(now, false);
        now += TICK_MS;
        connect(&mut app, &mut now);
        assert_eq!(app.connection_state(), ConnectionState::Connected);
    }

    #[test]
    fn test_draw_renders_both_screens() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(240, 240));
        let mut app = EnergyApp::new(ScriptedTransport::new(0));

        app.draw(&mut display, WallClock::new(12, 0, 0)).unwrap();

        let mut now = 0;
        connect(&mut app, &mut now);
        app.draw(&mut display, WallClock::new(23, 59, 59)).unwrap();
    }
}
