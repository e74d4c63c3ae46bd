// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction classification and commit policies.
//!
//! Classification is a pure function of the session anchor, the current
//! position, and a [`SwipeConfig`]. Two distinct questions are answered:
//!
//! - **Preview** ([`classify`]): while the pointer is down, which axis dominates,
//!   which way is it heading, and how far along toward the commit threshold is it?
//!   Progress is recomputed from the anchor on every sample, so reversing the
//!   gesture lowers it again.
//! - **Commit** ([`CommitPolicy::evaluate`]): when the pointer is released, does
//!   the gesture count as a swipe?
//!
//! Deltas follow the `anchor - current` convention throughout: a positive `x`
//! means the pointer travelled left, a positive `y` means it travelled up.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Vec2;
//! use understory_gesture::{Axis, CommitPolicy, Direction, SwipeConfig, classify_delta};
//!
//! let config = SwipeConfig::headless();
//!
//! // 60px to the left with a 30px vertical wobble.
//! let delta = Vec2::new(60.0, 30.0);
//! let preview = classify_delta(delta, config.commit_threshold).unwrap();
//! assert_eq!(preview.axis, Axis::Horizontal);
//! assert_eq!(preview.direction, Direction::Left);
//! assert_eq!(preview.progress, 1.0);
//!
//! // The loose policy accepts it; the strict policy rejects the wobble.
//! assert!(CommitPolicy::Loose.evaluate(delta, &config).is_some());
//! assert!(CommitPolicy::Strict.evaluate(delta, &config).is_none());
//! ```

use kurbo::{Point, Vec2};

use crate::config::SwipeConfig;

/// Progress above which a horizontal gesture earns its preview pulse.
pub const PREVIEW_PROGRESS: f64 = 0.7;

/// Movement axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left/right movement.
    Horizontal,
    /// Up/down movement.
    Vertical,
}

/// Swipe direction, named after the way the pointer travelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Pointer travelled toward smaller `x`.
    Left,
    /// Pointer travelled toward larger `x`.
    Right,
    /// Pointer travelled toward smaller `y`.
    Up,
    /// Pointer travelled toward larger `y`.
    Down,
}

impl Direction {
    /// Axis this direction lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// Direction along `axis` for a signed `anchor - current` component.
    #[must_use]
    pub fn from_component(axis: Axis, component: f64) -> Self {
        match axis {
            Axis::Horizontal if component > 0.0 => Self::Left,
            Axis::Horizontal => Self::Right,
            Axis::Vertical if component > 0.0 => Self::Up,
            Axis::Vertical => Self::Down,
        }
    }
}

/// Live reading of an in-progress gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Dominant axis.
    pub axis: Axis,
    /// Direction along the dominant axis.
    pub direction: Direction,
    /// Dominant travel normalized by the commit threshold, clamped to `[0, 1]`.
    pub progress: f64,
    /// Raw `anchor - current` displacement.
    pub delta: Vec2,
}

impl Classification {
    /// Absolute travel along the dominant axis.
    #[must_use]
    pub fn dominant_distance(&self) -> f64 {
        dominant_component(self.delta, self.axis).abs()
    }

    /// Absolute travel across the dominant axis.
    #[must_use]
    pub fn cross_distance(&self) -> f64 {
        match self.axis {
            Axis::Horizontal => self.delta.y.abs(),
            Axis::Vertical => self.delta.x.abs(),
        }
    }

    /// Returns `true` when this reading should trigger the preview pulse.
    ///
    /// Only horizontal gestures qualify.
    #[must_use]
    pub fn crosses_preview(&self) -> bool {
        self.axis == Axis::Horizontal && self.progress > PREVIEW_PROGRESS
    }
}

/// A committed swipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeEvent {
    /// Direction of travel.
    pub direction: Direction,
    /// Absolute travel along the swipe's axis.
    pub distance: f64,
}

/// Dominant axis of `delta`: horizontal only when `|x|` strictly exceeds `|y|`.
#[must_use]
pub fn dominant_axis(delta: Vec2) -> Axis {
    if delta.x.abs() > delta.y.abs() {
        Axis::Horizontal
    } else {
        Axis::Vertical
    }
}

fn dominant_component(delta: Vec2, axis: Axis) -> f64 {
    match axis {
        Axis::Horizontal => delta.x,
        Axis::Vertical => delta.y,
    }
}

/// Classify a gesture from its anchor and current position.
///
/// Returns `None` while the pointer sits exactly on the anchor, since no axis
/// dominates yet.
#[must_use]
pub fn classify(anchor: Point, current: Point, commit_threshold: f64) -> Option<Classification> {
    classify_delta(anchor - current, commit_threshold)
}

/// Classify an `anchor - current` displacement.
#[must_use]
pub fn classify_delta(delta: Vec2, commit_threshold: f64) -> Option<Classification> {
    if delta == Vec2::ZERO {
        return None;
    }
    let axis = dominant_axis(delta);
    let component = dominant_component(delta, axis);
    Some(Classification {
        axis,
        direction: Direction::from_component(axis, component),
        progress: (component.abs() / commit_threshold).min(1.0),
        delta,
    })
}

/// Rule deciding whether a released gesture counts as a swipe.
///
/// Both variants share [`classify`]'s notion of dominance and direction; they
/// differ only in which gestures they accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CommitPolicy {
    /// Horizontal-only, no cross-axis check.
    ///
    /// Commits when `|dx| > commit_threshold` and `|dx| > |dy|`. Vertical
    /// gestures never commit, whatever their length, and diagonal gestures
    /// commit as long as the horizontal component dominates.
    Loose,
    /// Any axis, with a cross-axis purity gate.
    ///
    /// Commits when the dominant component exceeds `commit_threshold` and the
    /// cross-axis component is strictly below `orthogonal_tolerance`.
    #[default]
    Strict,
}

impl CommitPolicy {
    /// Evaluate a released gesture's `anchor - current` displacement.
    #[must_use]
    pub fn evaluate(self, delta: Vec2, config: &SwipeConfig) -> Option<SwipeEvent> {
        let axis = dominant_axis(delta);
        let component = dominant_component(delta, axis);
        let distance = component.abs();
        let accepted = match self {
            Self::Loose => axis == Axis::Horizontal && distance > config.commit_threshold,
            Self::Strict => {
                let cross = match axis {
                    Axis::Horizontal => delta.y.abs(),
                    Axis::Vertical => delta.x.abs(),
                };
                distance > config.commit_threshold && cross < config.orthogonal_tolerance
            }
        };
        accepted.then(|| SwipeEvent {
            direction: Direction::from_component(axis, component),
            distance,
        })
    }
}
