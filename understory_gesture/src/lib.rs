// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: single-pointer swipe recognition with haptic feedback.
//!
//! This crate turns one pointer's down/move/up stream into left, right, up, or
//! down swipes, and coordinates two tactile pulses along the way. It is a small
//! stack of focused pieces:
//!
//! - [`session`]: the mutable record of one in-progress gesture.
//! - [`classify`](mod@classify): pure functions for dominant axis, direction, and progress,
//!   plus the two named [`CommitPolicy`] strategies.
//! - [`haptics`]: the [`Actuator`] seam and the coordinator that fires each pulse
//!   category at most once per gesture.
//! - [`engine`]: [`GestureEngine`], which owns the session and runs the
//!   begin/update/end lifecycle.
//! - [`overlay`] and [`headless`]: two adapters over the same engine, one
//!   producing a live directional badge, one invoking per-direction callbacks.
//! - [`sample`]: tagged host samples, the [`SwipeSurface`] trait, and a
//!   single-pointer gate.
//!
//! ## Lifecycle
//!
//! Every surface follows `Idle → Tracking → Idle`:
//!
//! - `begin(point)` opens a session (silently discarding any open one).
//! - `update(point)` reclassifies from the anchor and may fire the preview pulse.
//! - `end()` evaluates the commit policy, returns a [`SwipeEvent`] and fires the
//!   confirmation pulse when it commits, and always closes the session.
//!
//! Stray `update`/`end` calls with no open session do nothing. None of the
//! lifecycle calls can fail.
//!
//! ## Commit policies
//!
//! Deltas are measured as `anchor - current`. With `dx`/`dy` the components:
//!
//! - [`CommitPolicy::Loose`]: `|dx| > commit_threshold && |dx| > |dy|`. Horizontal
//!   only, diagonal wobble allowed.
//! - [`CommitPolicy::Strict`]: the dominant component exceeds `commit_threshold`
//!   and the other stays below `orthogonal_tolerance`. All four directions.
//!
//! The same diagonal gesture can therefore commit under one policy and not the
//! other:
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::{
//!     CommitPolicy, Direction, GestureEngine, NoActuator, SwipeConfig, SwipeEvent,
//! };
//!
//! let mut strict = GestureEngine::new(SwipeConfig::headless(), CommitPolicy::Strict, NoActuator);
//! let mut loose = GestureEngine::new(SwipeConfig::overlay(), CommitPolicy::Loose, NoActuator);
//!
//! for engine in [&mut strict, &mut loose] {
//!     engine.begin(Point::new(0.0, 0.0));
//!     engine.update(Point::new(-60.0, -30.0));
//! }
//!
//! assert_eq!(strict.end(), None);
//! assert_eq!(
//!     loose.end(),
//!     Some(SwipeEvent { direction: Direction::Left, distance: 60.0 })
//! );
//! ```
//!
//! ## Haptics
//!
//! Implement [`Actuator`] for the host's vibration motor. The preview pulse
//! ([`HapticPulse::Light`]) fires the first time a horizontal gesture passes 70%
//! of the commit threshold; the confirmation pulse ([`HapticPulse::Medium`])
//! fires with each committed swipe. Actuators that report themselves
//! unavailable are skipped silently.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `ui_events`: `pointer::PointerSampler` translates
//!   `ui_events::pointer::PointerEvent` streams into samples.
//! - `web`: `haptics::NavigatorActuator` drives `navigator.vibrate` on `wasm32`.
//!
//! Diagnostics go through the `log` facade; the crate never installs a logger.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod classify;
pub mod config;
pub mod engine;
pub mod haptics;
pub mod headless;
pub mod overlay;
#[cfg(feature = "ui_events")]
pub mod pointer;
pub mod sample;
pub mod session;

pub use classify::{
    Axis, Classification, CommitPolicy, Direction, SwipeEvent, classify, classify_delta,
};
pub use config::{ConfigError, SwipeConfig};
pub use engine::{EndOutcome, GestureEngine, GesturePhase};
pub use haptics::{Actuator, HapticPulse, NoActuator};
pub use headless::SwipeDetector;
pub use overlay::{OverlayState, SwipeOverlay};
pub use sample::{Sample, SwipeSurface};
pub use session::GestureSession;
