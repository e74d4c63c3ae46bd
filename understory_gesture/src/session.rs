// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture session: the mutable record of one in-progress swipe.
//!
//! A session is created when a pointer goes down, follows the pointer while it
//! moves, and is dropped when the pointer is released. Sessions are owned by a
//! [`GestureEngine`](crate::engine::GestureEngine); hosts only ever see them
//! through [`GestureEngine::session`](crate::engine::GestureEngine::session).
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::session::GestureSession;
//!
//! let mut session = GestureSession::new(Point::new(100.0, 100.0));
//! assert_eq!(session.delta(), Vec2::ZERO);
//!
//! session.track(Point::new(40.0, 90.0));
//! // Deltas are measured as anchor - current.
//! assert_eq!(session.delta(), Vec2::new(60.0, 10.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one swipe from pointer down to pointer up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    anchor: Point,
    current: Option<Point>,
    preview_haptic_fired: bool,
}

impl GestureSession {
    /// Start a session anchored at `anchor`.
    #[must_use]
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            current: None,
            preview_haptic_fired: false,
        }
    }

    /// Position where the pointer went down.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Last tracked position, if the pointer has moved since the session began.
    #[must_use]
    pub fn current(&self) -> Option<Point> {
        self.current
    }

    /// Record the latest pointer position.
    pub fn track(&mut self, pos: Point) {
        self.current = Some(pos);
    }

    /// Displacement as `anchor - current`.
    ///
    /// A positive `x` means the pointer travelled left, a positive `y` means it
    /// travelled up. Sessions that never moved report [`Vec2::ZERO`].
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.anchor - self.current.unwrap_or(self.anchor)
    }

    /// Returns `true` once the preview pulse has been claimed in this session.
    #[must_use]
    pub fn preview_haptic_fired(&self) -> bool {
        self.preview_haptic_fired
    }

    /// Claim the preview pulse for this session.
    ///
    /// Returns `true` only for the first call; later calls leave the flag set
    /// and return `false`.
    pub fn claim_preview(&mut self) -> bool {
        !core::mem::replace(&mut self.preview_haptic_fired, true)
    }
}
