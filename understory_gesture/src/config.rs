// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition configuration.

use core::fmt;

/// Default minimum dominant-axis travel, in logical pixels, for a swipe to commit.
pub const DEFAULT_COMMIT_THRESHOLD: f64 = 50.0;

/// Default cross-axis allowance for [`CommitPolicy::Strict`](crate::classify::CommitPolicy::Strict).
pub const DEFAULT_ORTHOGONAL_TOLERANCE: f64 = 5.0;

/// Default cross-axis allowance for the overlay's live preview.
///
/// The overlay uses the tolerance only to decide whether its badge is shown;
/// its commit policy ignores it.
pub const OVERLAY_ORTHOGONAL_TOLERANCE: f64 = 16.0;

/// Thresholds and switches for one gesture engine.
///
/// All distances are in the surface's logical pixel space.
///
/// ```
/// use understory_gesture::SwipeConfig;
///
/// let config = SwipeConfig::headless()
///     .with_commit_threshold(80.0)
///     .with_haptics(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.orthogonal_tolerance, 5.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Minimum dominant-axis travel for a swipe to commit.
    pub commit_threshold: f64,
    /// Maximum cross-axis travel still considered a straight swipe.
    pub orthogonal_tolerance: f64,
    /// Whether haptic pulses are requested at all.
    pub haptics_enabled: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::headless()
    }
}

impl SwipeConfig {
    /// Preset used by [`SwipeDetector`](crate::headless::SwipeDetector).
    #[must_use]
    pub const fn headless() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            orthogonal_tolerance: DEFAULT_ORTHOGONAL_TOLERANCE,
            haptics_enabled: true,
        }
    }

    /// Preset used by [`SwipeOverlay`](crate::overlay::SwipeOverlay).
    #[must_use]
    pub const fn overlay() -> Self {
        Self {
            commit_threshold: DEFAULT_COMMIT_THRESHOLD,
            orthogonal_tolerance: OVERLAY_ORTHOGONAL_TOLERANCE,
            haptics_enabled: true,
        }
    }

    /// Set the commit threshold.
    #[must_use]
    pub const fn with_commit_threshold(mut self, px: f64) -> Self {
        self.commit_threshold = px;
        self
    }

    /// Set the orthogonal tolerance.
    #[must_use]
    pub const fn with_orthogonal_tolerance(mut self, px: f64) -> Self {
        self.orthogonal_tolerance = px;
        self
    }

    /// Enable or disable haptic pulses.
    #[must_use]
    pub const fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }

    /// Check that the thresholds describe a usable classifier.
    ///
    /// The commit threshold must be finite and strictly positive, since progress
    /// is normalized by it. The orthogonal tolerance must be finite and not
    /// negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.commit_threshold.is_finite() || self.commit_threshold <= 0.0 {
            return Err(ConfigError::CommitThreshold(self.commit_threshold));
        }
        if !self.orthogonal_tolerance.is_finite() || self.orthogonal_tolerance < 0.0 {
            return Err(ConfigError::OrthogonalTolerance(self.orthogonal_tolerance));
        }
        Ok(())
    }
}

/// Error returned by [`SwipeConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The commit threshold was non-finite, zero, or negative.
    CommitThreshold(f64),
    /// The orthogonal tolerance was non-finite or negative.
    OrthogonalTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommitThreshold(px) => {
                write!(f, "commit threshold must be finite and positive, got {px}")
            }
            Self::OrthogonalTolerance(px) => {
                write!(f, "orthogonal tolerance must be finite and non-negative, got {px}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
