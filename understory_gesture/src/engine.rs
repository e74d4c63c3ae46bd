// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture engine: the begin/update/end lifecycle.
//!
//! ## Usage
//!
//! 1) Call [`GestureEngine::begin`] when the pointer goes down. Any session still
//!    open from an earlier gesture is dropped without emitting anything.
//! 2) Call [`GestureEngine::update`] for each move. The engine reclassifies from
//!    the anchor and may fire the preview pulse; [`GestureEngine::preview`] reads
//!    the latest classification.
//! 3) Call [`GestureEngine::end`] (or [`GestureEngine::end_at`]) on release. A
//!    committed swipe is returned and the confirmation pulse fires; either way the
//!    engine is idle afterwards.
//!
//! Calls that arrive without an open session are silent no-ops.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{Direction, GestureEngine, SwipeConfig, SwipeEvent};
//!
//! let mut engine = GestureEngine::headless(SwipeConfig::headless());
//!
//! engine.begin(Point::new(100.0, 100.0));
//! engine.update(Point::new(40.0, 100.0));
//! assert_eq!(engine.preview().map(|c| c.progress), Some(1.0));
//!
//! let swipe = engine.end();
//! assert_eq!(swipe, Some(SwipeEvent { direction: Direction::Left, distance: 60.0 }));
//!
//! // The session is gone; a second `end` does nothing.
//! assert_eq!(engine.end(), None);
//! ```

use kurbo::Point;
use log::{debug, trace};

use crate::classify::{Classification, CommitPolicy, SwipeEvent, classify};
use crate::config::{ConfigError, SwipeConfig};
use crate::haptics::{Actuator, HapticCoordinator, NoActuator};
use crate::sample::SwipeSurface;
use crate::session::GestureSession;

/// Whether the engine currently tracks a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No pointer is down.
    #[default]
    Idle,
    /// A session is open.
    Tracking,
}

/// Result of releasing an open session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// The gesture was recognized as a swipe.
    Committed(SwipeEvent),
    /// The gesture did not meet the commit policy.
    Cancelled,
}

impl EndOutcome {
    /// The committed swipe, if any.
    #[must_use]
    pub fn swipe(self) -> Option<SwipeEvent> {
        match self {
            Self::Committed(event) => Some(event),
            Self::Cancelled => None,
        }
    }
}

/// Single-pointer swipe recognizer for one gesture surface.
///
/// The engine owns at most one [`GestureSession`]. It is configured once at
/// construction with a [`SwipeConfig`] and a [`CommitPolicy`], and drives an
/// [`Actuator`] through a [`HapticCoordinator`].
#[derive(Clone, Debug)]
pub struct GestureEngine<A = NoActuator> {
    config: SwipeConfig,
    policy: CommitPolicy,
    session: Option<GestureSession>,
    haptics: HapticCoordinator<A>,
}

impl GestureEngine<NoActuator> {
    /// Strict-policy engine without haptics hardware.
    #[must_use]
    pub fn headless(config: SwipeConfig) -> Self {
        Self::new(config, CommitPolicy::Strict, NoActuator)
    }
}

impl<A: Actuator> GestureEngine<A> {
    /// Create an engine.
    ///
    /// The configuration is taken as-is; use [`GestureEngine::try_new`] to
    /// validate it first.
    #[must_use]
    pub fn new(config: SwipeConfig, policy: CommitPolicy, actuator: A) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid swipe config: {config:?}");
        Self {
            config,
            policy,
            session: None,
            haptics: HapticCoordinator::new(actuator, config.haptics_enabled),
        }
    }

    /// Create an engine after validating `config`.
    pub fn try_new(
        config: SwipeConfig,
        policy: CommitPolicy,
        actuator: A,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, policy, actuator))
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// The engine's commit policy.
    #[must_use]
    pub fn policy(&self) -> CommitPolicy {
        self.policy
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        if self.session.is_some() {
            GesturePhase::Tracking
        } else {
            GesturePhase::Idle
        }
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    /// The driven actuator.
    #[must_use]
    pub fn actuator(&self) -> &A {
        self.haptics.actuator()
    }

    /// Mutable access to the driven actuator.
    pub fn actuator_mut(&mut self) -> &mut A {
        self.haptics.actuator_mut()
    }

    /// Start a new session at `point`, discarding any open one.
    pub fn begin(&mut self, point: Point) {
        if let Some(abandoned) = self.session.replace(GestureSession::new(point)) {
            trace!(
                "swipe session at {:?} abandoned by a new begin",
                abandoned.anchor()
            );
        }
    }

    /// Track the pointer at `point`.
    pub fn update(&mut self, point: Point) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.track(point);
        if let Some(reading) = classify(session.anchor(), point, self.config.commit_threshold) {
            self.haptics.observe(session, &reading);
        }
    }

    /// Latest classification of the open session.
    ///
    /// Returns `None` when idle or while the pointer has not left the anchor.
    #[must_use]
    pub fn preview(&self) -> Option<Classification> {
        let session = self.session.as_ref()?;
        classify(
            session.anchor(),
            session.current()?,
            self.config.commit_threshold,
        )
    }

    /// Release the pointer, returning the committed swipe if there is one.
    pub fn end(&mut self) -> Option<SwipeEvent> {
        self.finish().and_then(EndOutcome::swipe)
    }

    /// Record a final position and release the pointer.
    ///
    /// The position is stored without considering a preview pulse. Without an
    /// open session this does nothing.
    pub fn end_at(&mut self, point: Point) -> Option<SwipeEvent> {
        if let Some(session) = self.session.as_mut() {
            session.track(point);
        }
        self.end()
    }

    /// Release the pointer and report the outcome.
    ///
    /// Returns `None` if no session was open.
    pub fn finish(&mut self) -> Option<EndOutcome> {
        let session = self.session.take()?;
        let delta = session.delta();
        match self.policy.evaluate(delta, &self.config) {
            Some(event) => {
                debug!(
                    "swipe committed: {:?} over {} px ({:?} policy)",
                    event.direction, event.distance, self.policy
                );
                self.haptics.confirm();
                Some(EndOutcome::Committed(event))
            }
            None => {
                trace!("swipe rejected: delta {delta:?} ({:?} policy)", self.policy);
                Some(EndOutcome::Cancelled)
            }
        }
    }

    /// Drop the open session without evaluating it.
    ///
    /// Use this when the host loses the pointer (for example on a platform
    /// cancel). Returns `true` if a session was dropped.
    pub fn cancel(&mut self) -> bool {
        self.session.take().is_some()
    }
}

impl<A: Actuator> SwipeSurface for GestureEngine<A> {
    fn begin(&mut self, point: Point) {
        Self::begin(self, point);
    }

    fn update(&mut self, point: Point) {
        Self::update(self, point);
    }

    fn end(&mut self) -> Option<SwipeEvent> {
        Self::end(self)
    }

    fn end_at(&mut self, point: Point) -> Option<SwipeEvent> {
        Self::end_at(self, point)
    }

    fn cancel(&mut self) -> bool {
        Self::cancel(self)
    }
}
