// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ui-events` integration: turn [`PointerEvent`]s into swipe samples.
//!
//! [`PointerSampler`] keeps a [`SampleGate`] keyed by [`PointerId`], so the
//! first pointer to go down with the primary button (or a touch/pen contact)
//! owns the gesture and other pointers are ignored until it lifts. Positions
//! are read in logical pixels.
//!
//! | `PointerEvent`  | Sample                    |
//! |-----------------|---------------------------|
//! | `Down`          | [`Sample::Begin`]         |
//! | `Move`          | [`Sample::Update`]        |
//! | `Up`            | [`Sample::End`] with the release position |
//! | `Cancel`        | [`Sample::Cancel`]        |
//! | anything else   | ignored                   |
//!
//! ```rust,no_run
//! use ui_events::pointer::PointerEvent;
//! use understory_gesture::pointer::PointerSampler;
//! use understory_gesture::{GestureEngine, SwipeConfig};
//!
//! let mut engine = GestureEngine::headless(SwipeConfig::headless());
//! let mut sampler = PointerSampler::new();
//!
//! # let events: Vec<PointerEvent> = Vec::new();
//! for event in &events {
//!     if let Some(swipe) = sampler.feed(&mut engine, event) {
//!         // React to the committed swipe.
//!         let _ = swipe.direction;
//!     }
//! }
//! ```

use kurbo::Point;
use ui_events::pointer::{PointerButton, PointerEvent, PointerId};

use crate::classify::SwipeEvent;
use crate::sample::{Sample, SampleGate, SampleKind, SwipeSurface};

/// Translates a pointer event stream into single-pointer swipe samples.
#[derive(Clone, Debug, Default)]
pub struct PointerSampler {
    gate: SampleGate<Option<PointerId>>,
}

impl PointerSampler {
    /// Create a sampler with no active pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `event`, or return `None` if it does not affect the gesture.
    pub fn sample(&mut self, event: &PointerEvent) -> Option<Sample> {
        let (kind, pointer_id, point) = match event {
            PointerEvent::Down(e) => {
                if !matches!(e.button, None | Some(PointerButton::Primary)) {
                    return None;
                }
                (SampleKind::Down, e.pointer.pointer_id, e.state.logical_point())
            }
            PointerEvent::Move(e) => {
                (SampleKind::Move, e.pointer.pointer_id, e.current.logical_point())
            }
            PointerEvent::Up(e) => (SampleKind::Up, e.pointer.pointer_id, e.state.logical_point()),
            PointerEvent::Cancel(info) => (SampleKind::Cancel, info.pointer_id, Point::ZERO),
            _ => return None,
        };
        self.gate.filter(kind, pointer_id, point)
    }

    /// Translate `event` and apply it to `surface`.
    ///
    /// Returns the swipe committed by this event, if any.
    pub fn feed<S: SwipeSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        event: &PointerEvent,
    ) -> Option<SwipeEvent> {
        let sample = self.sample(event)?;
        surface.apply(sample)
    }

    /// Forget the active pointer, e.g. after the surface lost focus.
    pub fn reset(&mut self) {
        self.gate.reset();
    }
}
