// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_gesture` crate.
//!
//! These drive whole gestures through the engine and both adapters, checking
//! which swipes commit and which pulses reach the actuator.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use understory_gesture::haptics::{LIGHT_PATTERN, MEDIUM_PATTERN};
use understory_gesture::sample::{SampleGate, SampleKind};
use understory_gesture::{
    Actuator, CommitPolicy, Direction, EndOutcome, GestureEngine, Sample, SwipeConfig,
    SwipeDetector, SwipeEvent, SwipeOverlay, SwipeSurface,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pulse {
    Light,
    Medium,
}

/// Actuator that records pulses into a shared log.
#[derive(Clone, Debug, Default)]
struct PulseLog(Rc<RefCell<Vec<Pulse>>>);

impl PulseLog {
    fn pulses(&self) -> Vec<Pulse> {
        self.0.borrow().clone()
    }

    fn count(&self, pulse: Pulse) -> usize {
        self.0.borrow().iter().filter(|&&p| p == pulse).count()
    }
}

impl Actuator for PulseLog {
    fn is_available(&self) -> bool {
        true
    }

    fn pulse(&mut self, pattern: &[u32]) {
        let pulse = if pattern == LIGHT_PATTERN {
            Pulse::Light
        } else {
            assert_eq!(pattern, MEDIUM_PATTERN, "unexpected pattern");
            Pulse::Medium
        };
        self.0.borrow_mut().push(pulse);
    }
}

fn strict_engine() -> (GestureEngine<PulseLog>, PulseLog) {
    let log = PulseLog::default();
    let engine = GestureEngine::new(SwipeConfig::headless(), CommitPolicy::Strict, log.clone());
    (engine, log)
}

fn loose_engine() -> (GestureEngine<PulseLog>, PulseLog) {
    let log = PulseLog::default();
    let engine = GestureEngine::new(SwipeConfig::overlay(), CommitPolicy::Loose, log.clone());
    (engine, log)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn scenario_full_left_swipe_commits_with_both_pulses() {
    let (mut engine, log) = strict_engine();

    engine.begin(pt(100.0, 100.0));
    engine.update(pt(40.0, 100.0));

    let preview = engine.preview().unwrap();
    assert_eq!(preview.direction, Direction::Left);
    assert_eq!(preview.progress, 1.0);
    assert_eq!(log.pulses(), [Pulse::Light]);

    assert_eq!(
        engine.end(),
        Some(SwipeEvent {
            direction: Direction::Left,
            distance: 60.0
        })
    );
    assert_eq!(log.pulses(), [Pulse::Light, Pulse::Medium]);
}

#[test]
fn scenario_short_swipe_emits_nothing() {
    for (mut engine, log) in [strict_engine(), loose_engine()] {
        engine.begin(pt(100.0, 100.0));
        engine.update(pt(65.0, 100.0));

        assert_eq!(engine.end(), None);
        assert_eq!(log.count(Pulse::Medium), 0);
        // 35px is exactly 70% of the threshold, which is not past it.
        assert_eq!(log.count(Pulse::Light), 0);
    }
}

#[test]
fn scenario_diagonal_rejected_by_strict_policy() {
    let (mut engine, log) = strict_engine();

    engine.begin(pt(0.0, 0.0));
    assert_eq!(engine.end_at(pt(-60.0, -30.0)), None);

    assert!(log.pulses().is_empty());
}

#[test]
fn scenario_same_diagonal_commits_under_loose_policy() {
    let (mut engine, log) = loose_engine();

    engine.begin(pt(0.0, 0.0));
    assert_eq!(
        engine.end_at(pt(-60.0, -30.0)),
        Some(SwipeEvent {
            direction: Direction::Left,
            distance: 60.0
        })
    );

    assert_eq!(log.pulses(), [Pulse::Medium]);
}

#[test]
fn strict_threshold_gate_holds_across_distances() {
    for dx in [0.0, 10.0, 35.0, 49.9, 50.0] {
        for sign in [1.0, -1.0] {
            let (mut engine, log) = strict_engine();
            engine.begin(pt(200.0, 200.0));
            engine.update(pt(200.0 - sign * dx, 200.0));

            assert_eq!(engine.end(), None, "dx = {}", sign * dx);
            assert_eq!(log.count(Pulse::Medium), 0);
        }
    }
}

#[test]
fn strict_axis_purity_rejects_wobble_at_or_beyond_tolerance() {
    for dy in [5.0, 6.0, 20.0, 59.0] {
        let (mut engine, log) = strict_engine();
        engine.begin(pt(100.0, 100.0));
        engine.update(pt(40.0, 100.0 - dy));

        assert_eq!(engine.finish(), Some(EndOutcome::Cancelled), "dy = {dy}");
        assert_eq!(log.count(Pulse::Medium), 0);
    }
}

#[test]
fn loose_policy_accepts_the_same_wobble() {
    for dy in [5.0, 6.0, 20.0, 59.0] {
        let (mut engine, _) = loose_engine();
        engine.begin(pt(100.0, 100.0));
        engine.update(pt(40.0, 100.0 - dy));

        assert_eq!(
            engine.end().map(|e| e.direction),
            Some(Direction::Left),
            "dy = {dy}"
        );
    }
}

#[test]
fn preview_pulse_fires_once_despite_repeated_crossings() {
    let (mut engine, log) = strict_engine();
    engine.begin(pt(100.0, 100.0));

    for x in [80.0, 60.0, 90.0, 55.0, 95.0, 40.0, 20.0] {
        engine.update(pt(x, 100.0));
    }

    assert_eq!(log.count(Pulse::Light), 1);
    assert!(engine.session().unwrap().preview_haptic_fired());
}

#[test]
fn vertical_gestures_never_get_a_preview_pulse() {
    let (mut engine, log) = strict_engine();
    engine.begin(pt(100.0, 100.0));

    engine.update(pt(101.0, 20.0));
    let swipe = engine.end();

    assert_eq!(swipe.map(|e| e.direction), Some(Direction::Up));
    assert_eq!(log.pulses(), [Pulse::Medium]);
}

#[test]
fn confirmation_pulse_matches_commits() {
    let gestures = [
        (pt(-60.0, 0.0), true),
        (pt(-60.0, -30.0), false),
        (pt(10.0, 0.0), false),
        (pt(0.0, 80.0), true),
        (pt(51.0, 4.0), true),
        (pt(0.0, 0.0), false),
    ];
    let (mut engine, log) = strict_engine();
    let mut commits = 0;

    for (end, expect_commit) in gestures {
        engine.begin(pt(0.0, 0.0));
        engine.update(end);
        let before = log.count(Pulse::Medium);
        let committed = engine.end().is_some();

        assert_eq!(committed, expect_commit, "gesture ending at {end:?}");
        assert_eq!(log.count(Pulse::Medium) - before, usize::from(committed));
        commits += usize::from(committed);
    }
    assert_eq!(log.count(Pulse::Medium), commits);
}

#[test]
fn repeated_end_is_inert() {
    let (mut engine, log) = strict_engine();
    engine.begin(pt(100.0, 100.0));
    engine.update(pt(40.0, 100.0));

    assert!(engine.end().is_some());
    let pulses = log.pulses();

    assert_eq!(engine.end(), None);
    assert_eq!(engine.finish(), None);
    assert_eq!(log.pulses(), pulses);
}

#[test]
fn abandoned_session_emits_nothing() {
    let (mut engine, log) = strict_engine();
    engine.begin(pt(100.0, 100.0));
    engine.update(pt(0.0, 100.0));

    // No end: the next begin silently replaces the session.
    engine.begin(pt(500.0, 500.0));
    assert_eq!(log.count(Pulse::Medium), 0);

    engine.update(pt(505.0, 500.0));
    assert_eq!(engine.end(), None);
    assert_eq!(log.pulses(), [Pulse::Light]);
}

#[test]
fn adapters_share_lifecycle_through_samples() {
    let overlay_hits = Rc::new(RefCell::new(Vec::new()));
    let detector_hits = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&overlay_hits);
    let mut overlay = SwipeOverlay::new(SwipeConfig::overlay(), PulseLog::default())
        .on_swipe(move |direction| sink.borrow_mut().push(direction));

    let sink = Rc::clone(&detector_hits);
    let mut detector = SwipeDetector::new(SwipeConfig::headless(), PulseLog::default())
        .on_swipe_left(move || sink.borrow_mut().push(Direction::Left));

    let samples = [
        Sample::Begin(pt(0.0, 0.0)),
        Sample::Update(pt(-30.0, -10.0)),
        Sample::Update(pt(-60.0, -30.0)),
        Sample::End(None),
        Sample::Begin(pt(0.0, 0.0)),
        Sample::Update(pt(-70.0, 1.0)),
        Sample::End(None),
    ];

    let surfaces: [&mut dyn SwipeSurface; 2] = [&mut overlay, &mut detector];
    for surface in surfaces {
        for sample in samples {
            surface.apply(sample);
        }
    }

    assert_eq!(*overlay_hits.borrow(), [Direction::Left, Direction::Left]);
    assert_eq!(*detector_hits.borrow(), [Direction::Left]);
    assert!(!overlay.state().visible);
}

#[test]
fn overlay_badge_is_hidden_between_sessions() {
    let mut overlay = SwipeOverlay::new(SwipeConfig::overlay(), PulseLog::default());

    overlay.begin(pt(100.0, 100.0));
    overlay.update(pt(80.0, 100.0));
    assert!(overlay.state().visible);
    overlay.end();
    assert!(!overlay.state().visible);

    overlay.begin(pt(100.0, 100.0));
    assert!(!overlay.state().visible);
    assert_eq!(overlay.state().badge(), None);
}

#[test]
fn gated_stream_ignores_second_pointer() {
    let (mut engine, log) = strict_engine();
    let mut gate = SampleGate::new();

    let raw = [
        (SampleKind::Down, 1_u64, pt(100.0, 100.0)),
        (SampleKind::Down, 2, pt(300.0, 100.0)),
        (SampleKind::Move, 2, pt(400.0, 100.0)),
        (SampleKind::Move, 1, pt(70.0, 100.0)),
        (SampleKind::Up, 2, pt(400.0, 100.0)),
        (SampleKind::Move, 1, pt(30.0, 100.0)),
        (SampleKind::Up, 1, pt(30.0, 100.0)),
    ];

    let mut swipes = Vec::new();
    for (kind, id, point) in raw {
        if let Some(sample) = gate.filter(kind, id, point) {
            swipes.extend(engine.apply(sample));
        }
    }

    assert_eq!(
        swipes,
        [SwipeEvent {
            direction: Direction::Left,
            distance: 70.0
        }]
    );
    assert_eq!(log.pulses(), [Pulse::Light, Pulse::Medium]);
}

#[test]
fn cancel_sample_drops_gesture_without_pulse() {
    let (mut engine, log) = strict_engine();

    engine.apply(Sample::Begin(pt(100.0, 100.0)));
    engine.apply(Sample::Update(pt(20.0, 100.0)));
    assert_eq!(engine.apply(Sample::Cancel), None);
    assert_eq!(engine.apply(Sample::End(None)), None);

    assert_eq!(log.pulses(), [Pulse::Light]);
}
