// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host samples and the single-pointer gate.
//!
//! Hosts describe pointer activity as a stream of [`Sample`]s and feed them to
//! anything implementing [`SwipeSurface`]: the bare
//! [`GestureEngine`](crate::engine::GestureEngine) or either adapter.
//!
//! Swipe recognition reads exactly one pointer. When the host's event source
//! can report several pointers, route samples through a [`SampleGate`] keyed by
//! the host's pointer identity: the first pointer to go down owns the gesture
//! until it is released or cancelled, and every other pointer is ignored.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::{GestureEngine, SwipeConfig};
//! use understory_gesture::sample::{SampleGate, SampleKind, SwipeSurface};
//!
//! let mut engine = GestureEngine::headless(SwipeConfig::headless());
//! let mut gate = SampleGate::new();
//!
//! // Finger 1 goes down, finger 2 joins and wanders off; only finger 1 counts.
//! for (kind, finger, x) in [
//!     (SampleKind::Down, 1, 100.0),
//!     (SampleKind::Down, 2, 300.0),
//!     (SampleKind::Move, 2, 0.0),
//!     (SampleKind::Move, 1, 40.0),
//! ] {
//!     if let Some(sample) = gate.filter(kind, finger, Point::new(x, 50.0)) {
//!         engine.apply(sample);
//!     }
//! }
//! assert_eq!(engine.session().unwrap().current(), Some(Point::new(40.0, 50.0)));
//! ```

use kurbo::Point;

use crate::classify::SwipeEvent;

/// One tagged host input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sample {
    /// Pointer went down.
    Begin(Point),
    /// Pointer moved.
    Update(Point),
    /// Pointer was released, optionally at a known final position.
    End(Option<Point>),
    /// Host lost the pointer.
    Cancel,
}

/// Anything that accepts the begin/update/end lifecycle.
pub trait SwipeSurface {
    /// Start a gesture at `point`.
    fn begin(&mut self, point: Point);

    /// Track the pointer at `point`.
    fn update(&mut self, point: Point);

    /// Release the pointer.
    fn end(&mut self) -> Option<SwipeEvent>;

    /// Record a final position and release the pointer.
    fn end_at(&mut self, point: Point) -> Option<SwipeEvent>;

    /// Drop the open gesture without evaluating it.
    fn cancel(&mut self) -> bool;

    /// Dispatch one [`Sample`], returning a swipe if the sample committed one.
    fn apply(&mut self, sample: Sample) -> Option<SwipeEvent> {
        match sample {
            Sample::Begin(point) => {
                self.begin(point);
                None
            }
            Sample::Update(point) => {
                self.update(point);
                None
            }
            Sample::End(Some(point)) => self.end_at(point),
            Sample::End(None) => self.end(),
            Sample::Cancel => {
                self.cancel();
                None
            }
        }
    }
}

/// Raw pointer activity before gating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// Pointer pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Pointer released.
    Up,
    /// Pointer lost by the platform.
    Cancel,
}

/// Admits samples from a single pointer at a time.
///
/// `I` is the host's pointer identity (a touch id, a device id, or `()` for
/// hosts with one pointer).
#[derive(Clone, Debug)]
pub struct SampleGate<I> {
    active: Option<I>,
}

impl<I> Default for SampleGate<I> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<I: Copy + PartialEq> SampleGate<I> {
    /// Create a gate with no active pointer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the pointer that currently owns the gesture.
    #[must_use]
    pub fn active(&self) -> Option<I> {
        self.active
    }

    /// Translate raw activity into a [`Sample`], or `None` if it is ignored.
    ///
    /// - `Down` claims the gate when it is free; a second pointer going down
    ///   while another is active is ignored.
    /// - `Move`, `Up`, and `Cancel` pass only for the active pointer. `Up` and
    ///   `Cancel` release the gate.
    pub fn filter(&mut self, kind: SampleKind, id: I, point: Point) -> Option<Sample> {
        match kind {
            SampleKind::Down => {
                if self.active.is_some() {
                    return None;
                }
                self.active = Some(id);
                Some(Sample::Begin(point))
            }
            _ if self.active != Some(id) => None,
            SampleKind::Move => Some(Sample::Update(point)),
            SampleKind::Up => {
                self.active = None;
                Some(Sample::End(Some(point)))
            }
            SampleKind::Cancel => {
                self.active = None;
                Some(Sample::Cancel)
            }
        }
    }

    /// Forget the active pointer.
    pub fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Point = Point::new(1.0, 2.0);

    #[test]
    fn first_down_claims_gate() {
        let mut gate = SampleGate::new();

        assert_eq!(gate.filter(SampleKind::Down, 7_u32, P), Some(Sample::Begin(P)));
        assert_eq!(gate.active(), Some(7));
    }

    #[test]
    fn second_pointer_is_ignored_while_active() {
        let mut gate = SampleGate::new();
        gate.filter(SampleKind::Down, 1_u32, P);

        assert_eq!(gate.filter(SampleKind::Down, 2, P), None);
        assert_eq!(gate.filter(SampleKind::Move, 2, P), None);
        assert_eq!(gate.filter(SampleKind::Up, 2, P), None);
        assert_eq!(gate.filter(SampleKind::Cancel, 2, P), None);
        assert_eq!(gate.active(), Some(1));
    }

    #[test]
    fn active_pointer_moves_and_releases() {
        let mut gate = SampleGate::new();
        gate.filter(SampleKind::Down, 1_u32, P);

        assert_eq!(gate.filter(SampleKind::Move, 1, P), Some(Sample::Update(P)));
        assert_eq!(gate.filter(SampleKind::Up, 1, P), Some(Sample::End(Some(P))));
        assert_eq!(gate.active(), None);
    }

    #[test]
    fn cancel_releases_gate() {
        let mut gate = SampleGate::new();
        gate.filter(SampleKind::Down, 1_u32, P);

        assert_eq!(gate.filter(SampleKind::Cancel, 1, P), Some(Sample::Cancel));
        assert_eq!(gate.filter(SampleKind::Down, 2, P), Some(Sample::Begin(P)));
    }

    #[test]
    fn samples_without_active_pointer_are_ignored() {
        let mut gate = SampleGate::<u32>::new();

        assert_eq!(gate.filter(SampleKind::Move, 1, P), None);
        assert_eq!(gate.filter(SampleKind::Up, 1, P), None);
    }

    #[test]
    fn reset_frees_gate() {
        let mut gate = SampleGate::new();
        gate.filter(SampleKind::Down, (), P);

        gate.reset();

        assert_eq!(gate.active(), None);
        assert_eq!(gate.filter(SampleKind::Down, (), P), Some(Sample::Begin(P)));
    }
}
