// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Haptic feedback: pulse categories, the actuator seam, and the per-session coordinator.
//!
//! Two pulse categories exist:
//!
//! - [`HapticPulse::Light`]: the preview pulse, fired the first time a horizontal
//!   gesture passes [`PREVIEW_PROGRESS`](crate::classify::PREVIEW_PROGRESS) of
//!   the way to the commit threshold.
//! - [`HapticPulse::Medium`]: the confirmation pulse, fired together with a
//!   committed swipe.
//!
//! Each category fires at most once per session. Devices are reached through the
//! [`Actuator`] trait; an actuator that reports itself unavailable is skipped
//! silently, as is everything when haptics are disabled in the
//! [`SwipeConfig`](crate::SwipeConfig).
//!
//! ## Minimal example
//!
//! ```
//! use understory_gesture::haptics::{Actuator, HapticCoordinator, HapticPulse};
//!
//! #[derive(Default)]
//! struct Counter(u32);
//!
//! impl Actuator for Counter {
//!     fn is_available(&self) -> bool {
//!         true
//!     }
//!     fn pulse(&mut self, _pattern: &[u32]) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut haptics = HapticCoordinator::new(Counter::default(), true);
//! assert!(haptics.fire(HapticPulse::Medium));
//! assert_eq!(haptics.actuator().0, 1);
//! ```

use log::trace;

use crate::classify::Classification;
use crate::session::GestureSession;

/// Vibration pattern for the preview pulse, in milliseconds.
pub const LIGHT_PATTERN: &[u32] = &[10];

/// Vibration pattern for the confirmation pulse, in milliseconds.
pub const MEDIUM_PATTERN: &[u32] = &[20];

/// Category of tactile feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HapticPulse {
    /// Short tick signalling that releasing now would almost commit.
    Light,
    /// Firmer tick confirming a committed swipe.
    Medium,
}

impl HapticPulse {
    /// Vibration pattern sent to the actuator for this category.
    #[must_use]
    pub const fn pattern(self) -> &'static [u32] {
        match self {
            Self::Light => LIGHT_PATTERN,
            Self::Medium => MEDIUM_PATTERN,
        }
    }
}

/// A device able to produce tactile pulses.
///
/// `pattern` alternates vibration and pause durations in milliseconds, starting
/// with a vibration; a single element is a plain pulse of that length.
pub trait Actuator {
    /// Capability probe. Returning `false` is a normal condition, not an error.
    fn is_available(&self) -> bool;

    /// Vibrate according to `pattern`.
    fn pulse(&mut self, pattern: &[u32]);
}

impl<A: Actuator + ?Sized> Actuator for &mut A {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn pulse(&mut self, pattern: &[u32]) {
        (**self).pulse(pattern);
    }
}

/// Actuator for hosts without a vibration motor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoActuator;

impl Actuator for NoActuator {
    fn is_available(&self) -> bool {
        false
    }

    fn pulse(&mut self, _pattern: &[u32]) {}
}

/// Maps gesture progress and commits onto actuator pulses.
#[derive(Clone, Debug, Default)]
pub struct HapticCoordinator<A> {
    actuator: A,
    enabled: bool,
}

impl<A: Actuator> HapticCoordinator<A> {
    /// Create a coordinator driving `actuator`.
    #[must_use]
    pub fn new(actuator: A, enabled: bool) -> Self {
        Self { actuator, enabled }
    }

    /// Returns `true` if pulses are requested at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The driven actuator.
    #[must_use]
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Mutable access to the driven actuator.
    pub fn actuator_mut(&mut self) -> &mut A {
        &mut self.actuator
    }

    /// Fire `pulse` if haptics are enabled and the device can vibrate.
    ///
    /// Returns `true` if the actuator was asked to vibrate.
    pub fn fire(&mut self, pulse: HapticPulse) -> bool {
        if !self.enabled || !self.actuator.is_available() {
            return false;
        }
        self.actuator.pulse(pulse.pattern());
        true
    }

    /// Consider a preview pulse for the latest reading of `session`.
    ///
    /// The session's preview flag is claimed on the first qualifying reading
    /// even if no pulse can be delivered, so a session never pulses twice.
    /// Returns `true` if a pulse was delivered.
    pub fn observe(&mut self, session: &mut GestureSession, reading: &Classification) -> bool {
        if !reading.crosses_preview() || !session.claim_preview() {
            return false;
        }
        trace!("swipe preview threshold crossed at progress {}", reading.progress);
        self.fire(HapticPulse::Light)
    }

    /// Fire the confirmation pulse for a committed swipe.
    pub fn confirm(&mut self) -> bool {
        self.fire(HapticPulse::Medium)
    }

    /// Consume the coordinator, returning the actuator.
    pub fn into_actuator(self) -> A {
        self.actuator
    }
}

#[cfg(feature = "web")]
pub use web::NavigatorActuator;

#[cfg(feature = "web")]
mod web {
    use super::Actuator;

    /// Actuator backed by the browser's `navigator.vibrate`.
    ///
    /// On targets other than `wasm32` it always reports itself unavailable.
    #[derive(Clone, Debug, Default)]
    pub struct NavigatorActuator {
        #[cfg(target_arch = "wasm32")]
        navigator: Option<web_sys::Navigator>,
    }

    impl NavigatorActuator {
        /// Bind to the current window's navigator, if there is one.
        #[must_use]
        pub fn new() -> Self {
            Self {
                #[cfg(target_arch = "wasm32")]
                navigator: web_sys::window().map(|window| window.navigator()),
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    impl Actuator for NavigatorActuator {
        fn is_available(&self) -> bool {
            use wasm_bindgen::JsValue;

            self.navigator.as_ref().is_some_and(|navigator| {
                let target: &js_sys::Object = navigator.as_ref();
                js_sys::Reflect::has(target, &JsValue::from_str("vibrate")).unwrap_or(false)
            })
        }

        fn pulse(&mut self, pattern: &[u32]) {
            let Some(navigator) = &self.navigator else {
                return;
            };
            // The return value only reports whether the UA accepted the request.
            let _ = match pattern {
                [duration] => navigator.vibrate_with_duration(*duration),
                _ => {
                    let steps: js_sys::Array = pattern
                        .iter()
                        .map(|&ms| wasm_bindgen::JsValue::from(ms))
                        .collect();
                    navigator.vibrate_with_pattern(&steps)
                }
            };
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    impl Actuator for NavigatorActuator {
        fn is_available(&self) -> bool {
            false
        }

        fn pulse(&mut self, _pattern: &[u32]) {}
    }
}
