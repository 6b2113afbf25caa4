//! Energy dashboard library - testable modules for the round watch display.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the simulator window plus
//! a scripted broker transport. A device port would swap in its own display
//! driver and MQTT client behind the same seams ([`transport::Transport`] and
//! `DrawTarget`).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no display dependencies) ===

// Configuration and shared math
pub mod clamp;
pub mod config;
pub mod geometry;

// Telemetry state and easing
pub mod animation;
pub mod readings;

// Broker plumbing
pub mod ingress;
pub mod transport;

// === Application core ===

pub mod app;

// === Rendering (embedded-graphics against any DrawTarget) ===

pub mod colors;
pub mod screens;
pub mod styles;
pub mod widgets;
