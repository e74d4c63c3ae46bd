// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless adapter: four directional callbacks, no visual state.
//!
//! [`SwipeDetector`] wraps a [`GestureEngine`] running [`CommitPolicy::Strict`],
//! so all four directions are recognized but diagonal gestures are rejected.
//! Callbacks run synchronously from the commit path of `end`.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_gesture::{NoActuator, SwipeConfig};
//! use understory_gesture::headless::SwipeDetector;
//!
//! let ups = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&ups);
//! let mut detector = SwipeDetector::new(SwipeConfig::headless(), NoActuator)
//!     .on_swipe_up(move || counter.set(counter.get() + 1));
//!
//! detector.begin(Point::new(50.0, 300.0));
//! detector.update(Point::new(52.0, 200.0));
//! detector.end();
//! assert_eq!(ups.get(), 1);
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::Point;

use crate::classify::{CommitPolicy, Direction, SwipeEvent};
use crate::config::SwipeConfig;
use crate::engine::GestureEngine;
use crate::haptics::{Actuator, NoActuator};
use crate::sample::SwipeSurface;

type Handler = Box<dyn FnMut()>;

/// Callback slots, one per direction.
#[derive(Default)]
pub struct SwipeHandlers {
    left: Option<Handler>,
    right: Option<Handler>,
    up: Option<Handler>,
    down: Option<Handler>,
}

impl fmt::Debug for SwipeHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeHandlers")
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("up", &self.up.is_some())
            .field("down", &self.down.is_some())
            .finish()
    }
}

impl SwipeHandlers {
    /// Install or clear the handler for `direction`.
    pub fn set(&mut self, direction: Direction, handler: Option<Box<dyn FnMut()>>) {
        *self.slot(direction) = handler;
    }

    /// Returns `true` if a handler is installed for `direction`.
    #[must_use]
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left.is_some(),
            Direction::Right => self.right.is_some(),
            Direction::Up => self.up.is_some(),
            Direction::Down => self.down.is_some(),
        }
    }

    /// Invoke the handler for `direction`, if any. Returns `true` if one ran.
    pub fn dispatch(&mut self, direction: Direction) -> bool {
        match self.slot(direction) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    fn slot(&mut self, direction: Direction) -> &mut Option<Handler> {
        match direction {
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
        }
    }
}

/// Four-direction swipe recognizer reporting through callbacks.
#[derive(Debug)]
pub struct SwipeDetector<A = NoActuator> {
    engine: GestureEngine<A>,
    handlers: SwipeHandlers,
}

impl<A: Actuator> SwipeDetector<A> {
    /// Create a detector using the strict commit policy.
    #[must_use]
    pub fn new(config: SwipeConfig, actuator: A) -> Self {
        Self {
            engine: GestureEngine::new(config, CommitPolicy::Strict, actuator),
            handlers: SwipeHandlers::default(),
        }
    }

    /// Set the handler for leftward swipes.
    #[must_use]
    pub fn on_swipe_left(self, handler: impl FnMut() + 'static) -> Self {
        self.with_handler(Direction::Left, handler)
    }

    /// Set the handler for rightward swipes.
    #[must_use]
    pub fn on_swipe_right(self, handler: impl FnMut() + 'static) -> Self {
        self.with_handler(Direction::Right, handler)
    }

    /// Set the handler for upward swipes.
    #[must_use]
    pub fn on_swipe_up(self, handler: impl FnMut() + 'static) -> Self {
        self.with_handler(Direction::Up, handler)
    }

    /// Set the handler for downward swipes.
    #[must_use]
    pub fn on_swipe_down(self, handler: impl FnMut() + 'static) -> Self {
        self.with_handler(Direction::Down, handler)
    }

    fn with_handler(mut self, direction: Direction, handler: impl FnMut() + 'static) -> Self {
        self.handlers.set(direction, Some(Box::new(handler)));
        self
    }

    /// The callback slots.
    #[must_use]
    pub fn handlers(&self) -> &SwipeHandlers {
        &self.handlers
    }

    /// Mutable access to the callback slots.
    pub fn handlers_mut(&mut self) -> &mut SwipeHandlers {
        &mut self.handlers
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

    /// Start a gesture.
    pub fn begin(&mut self, point: Point) {
        self.engine.begin(point);
    }

    /// Track the pointer.
    pub fn update(&mut self, point: Point) {
        self.engine.update(point);
    }

    /// Release the pointer and run the matching handler on commit.
    pub fn end(&mut self) -> Option<SwipeEvent> {
        let swipe = self.engine.end();
        self.dispatch(swipe)
    }

    /// Record a final position, then behave like [`SwipeDetector::end`].
    pub fn end_at(&mut self, point: Point) -> Option<SwipeEvent> {
        let swipe = self.engine.end_at(point);
        self.dispatch(swipe)
    }

    /// Drop the gesture without evaluating it.
    pub fn cancel(&mut self) -> bool {
        self.engine.cancel()
    }

    fn dispatch(&mut self, swipe: Option<SwipeEvent>) -> Option<SwipeEvent> {
        if let Some(event) = swipe {
            self.handlers.dispatch(event.direction);
        }
        swipe
    }
}

impl<A: Actuator> SwipeSurface for SwipeDetector<A> {
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
