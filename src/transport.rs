//! Broker transport seam.
//!
//! The app core never talks to a socket. It drives a [`Transport`] through
//! three non-blocking calls per tick: step the connection state machine
//! while disconnected, then drain buffered messages while connected. The
//! simulator binary provides a scripted implementation; a device build wires
//! the same trait to its MQTT client.

use heapless::{String, Vec};

/// Longest accepted topic.
pub const TOPIC_BYTES: usize = 64;

/// Receive buffer size per message. Battery telemetry has outgrown 256
/// bytes in the field, so the buffer carries headroom beyond the current
/// largest payload.
pub const RX_BUFFER_BYTES: usize = 512;

/// One received publish, copied out of the transport's receive buffer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InboundMessage {
    pub topic: String<TOPIC_BYTES>,
    pub payload: Vec<u8, RX_BUFFER_BYTES>,
}

impl InboundMessage {
    /// Copy a topic and payload into fixed-size storage.
    ///
    /// Returns `None` if either part exceeds its buffer; oversized publishes
    /// are dropped at the edge rather than truncated into broken JSON.
    pub fn new(topic: &str, payload: &[u8]) -> Option<Self> {
        let mut t = String::new();
        t.push_str(topic).ok()?;
        let mut p = Vec::new();
        p.extend_from_slice(payload).ok()?;
        Some(Self { topic: t, payload: p })
    }
}

/// Connection lifecycle and message delivery, polled from the tick loop.
///
/// Implementations must never block: each call does one bounded unit of
/// work and returns. A session counts as connected only once it is
/// authenticated and subscribed, so the first `true` from
/// [`is_connected`](Self::is_connected) means telemetry can arrive.
pub trait Transport {
    /// Whether an authenticated, subscribed session is up.
    fn is_connected(&self) -> bool;

    /// Advance connection setup by one bounded step. Called once per tick
    /// while the app wants a link and none is up; idempotent once connected.
    fn connect_step(&mut self);

    /// Tear the session down. The next [`is_connected`](Self::is_connected)
    /// reports `false`.
    fn disconnect(&mut self);

    /// Pop the oldest buffered publish, or `None` when the queue is empty.
    /// The app drains this to empty every tick, so implementations only
    /// need enough buffer for one tick's worth of traffic.
    fn poll_message(&mut self) -> Option<InboundMessage>;
}

// =============================================================================
// Unit Tests
// =============================================================================
