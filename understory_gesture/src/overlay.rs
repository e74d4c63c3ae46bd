// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay adapter: a live directional badge for horizontal swipes.
//!
//! [`SwipeOverlay`] wraps a [`GestureEngine`] running [`CommitPolicy::Loose`] and
//! keeps an [`OverlayState`] that a UI tree can render on every frame:
//!
//! - The badge is visible only while the horizontal axis dominates and the
//!   vertical wobble stays below the configured orthogonal tolerance.
//! - Its opacity and scale follow progress (see [`OverlayState::badge`]).
//! - It is hidden as soon as the gesture ends, whether or not it committed, so
//!   nothing leaks into the next gesture.
//!
//! Enter/exit animation of the badge is left to the host; the state here only
//! says what should be on screen right now.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{Direction, NoActuator, SwipeConfig};
//! use understory_gesture::overlay::{Edge, SwipeOverlay};
//!
//! let mut overlay = SwipeOverlay::new(SwipeConfig::overlay(), NoActuator);
//!
//! overlay.begin(Point::new(200.0, 100.0));
//! overlay.update(Point::new(175.0, 104.0));
//!
//! let badge = overlay.state().badge().unwrap();
//! assert_eq!(badge.direction, Direction::Left);
//! assert_eq!(badge.edge, Edge::Right);
//! assert_eq!(badge.opacity, 1.0);
//! assert_eq!(badge.scale, 1.0);
//!
//! overlay.end();
//! assert!(!overlay.state().visible);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::classify::{Axis, Classification, CommitPolicy, Direction, SwipeEvent};
use crate::config::SwipeConfig;
use crate::engine::GestureEngine;
use crate::haptics::{Actuator, NoActuator};
use crate::sample::SwipeSurface;

/// Render-time snapshot of the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct OverlayState {
    /// Whether the badge should be on screen.
    pub visible: bool,
    /// Direction the badge points to, when visible.
    pub direction: Option<Direction>,
    /// Progress toward the commit threshold, in `[0, 1]`.
    pub progress: f64,
}

impl OverlayState {
    /// Hidden state.
    pub const HIDDEN: Self = Self {
        visible: false,
        direction: None,
        progress: 0.0,
    };

    /// Badge opacity for the current progress: `min(progress * 2, 1)`.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        (self.progress * 2.0).min(1.0)
    }

    /// Badge scale for the current progress: `0.8 + progress * 0.4`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        0.8 + self.progress * 0.4
    }

    /// Visual parameters of the badge, or `None` while hidden.
    #[must_use]
    pub fn badge(&self) -> Option<Badge> {
        if !self.visible {
            return None;
        }
        let direction = self.direction?;
        Some(Badge {
            direction,
            edge: Edge::for_direction(direction)?,
            opacity: self.opacity(),
            scale: self.scale(),
        })
    }
}

/// Surface edge the badge is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge of the surface.
    Left,
    /// Right edge of the surface.
    Right,
}

impl Edge {
    /// The edge the incoming content appears from for a horizontal swipe.
    ///
    /// A leftward swipe pulls content in from the right edge and vice versa.
    /// Vertical directions have no edge.
    #[must_use]
    pub const fn for_direction(direction: Direction) -> Option<Self> {
        match direction {
            Direction::Left => Some(Self::Right),
            Direction::Right => Some(Self::Left),
            Direction::Up | Direction::Down => None,
        }
    }
}

/// Resolved visual parameters of a visible badge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Badge {
    /// Direction the badge points to.
    pub direction: Direction,
    /// Edge the badge is pinned to.
    pub edge: Edge,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale in `[0.8, 1.2]`.
    pub scale: f64,
}

type SwipeCallback = Box<dyn FnMut(Direction)>;

/// Horizontal swipe recognizer with a live directional badge.
pub struct SwipeOverlay<A = NoActuator> {
    engine: GestureEngine<A>,
    state: OverlayState,
    on_swipe: Option<SwipeCallback>,
}

impl<A: fmt::Debug> fmt::Debug for SwipeOverlay<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeOverlay")
            .field("engine", &self.engine)
            .field("state", &self.state)
            .field("on_swipe", &self.on_swipe.is_some())
            .finish()
    }
}

impl<A: Actuator> SwipeOverlay<A> {
    /// Create an overlay using the loose commit policy.
    #[must_use]
    pub fn new(config: SwipeConfig, actuator: A) -> Self {
        Self {
            engine: GestureEngine::new(config, CommitPolicy::Loose, actuator),
            state: OverlayState::HIDDEN,
            on_swipe: None,
        }
    }

    /// Set the commit callback.
    #[must_use]
    pub fn on_swipe(mut self, callback: impl FnMut(Direction) + 'static) -> Self {
        self.on_swipe = Some(Box::new(callback));
        self
    }

    /// Replace the commit callback.
    pub fn set_on_swipe(&mut self, callback: Option<Box<dyn FnMut(Direction)>>) {
        self.on_swipe = callback;
    }

    /// Current render state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// The underlying engine.
    #[must_use]
    pub fn engine(&self) -> &GestureEngine<A> {
        &self.engine
    }

    /// Mutable access to the underlying engine's actuator.
    pub fn actuator_mut(&mut self) -> &mut A {
        self.engine.actuator_mut()
    }

    /// Start a gesture; the badge starts hidden.
    pub fn begin(&mut self, point: Point) {
        self.engine.begin(point);
        self.state = OverlayState::HIDDEN;
    }

    /// Track the pointer and refresh the badge.
    pub fn update(&mut self, point: Point) {
        if !self.engine.is_tracking() {
            return;
        }
        self.engine.update(point);
        let tolerance = self.engine.config().orthogonal_tolerance;
        self.state = match self.engine.preview() {
            Some(reading) if shows_badge(&reading, tolerance) => OverlayState {
                visible: true,
                direction: Some(reading.direction),
                progress: reading.progress,
            },
            _ => OverlayState::HIDDEN,
        };
    }

    /// Release the pointer, hide the badge, and notify the callback on commit.
    pub fn end(&mut self) -> Option<SwipeEvent> {
        let swipe = self.engine.end();
        self.settle(swipe)
    }

    /// Record a final position, then behave like [`SwipeOverlay::end`].
    pub fn end_at(&mut self, point: Point) -> Option<SwipeEvent> {
        let swipe = self.engine.end_at(point);
        self.settle(swipe)
    }

    /// Drop the gesture and hide the badge.
    pub fn cancel(&mut self) -> bool {
        self.state = OverlayState::HIDDEN;
        self.engine.cancel()
    }

    fn settle(&mut self, swipe: Option<SwipeEvent>) -> Option<SwipeEvent> {
        self.state = OverlayState::HIDDEN;
        if let (Some(event), Some(callback)) = (swipe, self.on_swipe.as_mut()) {
            callback(event.direction);
        }
        swipe
    }
}

fn shows_badge(reading: &Classification, tolerance: f64) -> bool {
    reading.axis == Axis::Horizontal && reading.cross_distance() < tolerance
}

impl<A: Actuator> SwipeSurface for SwipeOverlay<A> {
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
