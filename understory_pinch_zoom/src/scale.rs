// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale limits and the pinch multiplier computation.
//!
//! Limits are configured relative to the content's start transform: a range of
//! `0.6..8.0` means "from 60% of the resting fit up to eight times it". The
//! absolute range used while a gesture runs is a [`CalculatedScaleRange`],
//! obtained with [`ScaleRange::relative_to`].

use crate::error::ConfigError;

/// A validated, relative scale range.
///
/// Both bounds are finite and positive, and `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleRange {
    min: f64,
    max: f64,
}

impl ScaleRange {
    /// Creates a range, rejecting non-positive, non-finite or empty ranges.
    pub fn new(min: f64, max: f64) -> Result<Self, ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(min) || !positive(max) {
            return Err(ConfigError::NonPositiveScale { min, max });
        }
        if min >= max {
            return Err(ConfigError::EmptyScaleRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps a relative factor into the range.
    #[must_use]
    pub fn clamp(&self, factor: f64) -> f64 {
        factor.clamp(self.min, self.max)
    }

    /// Scales the range by the start transform's scale, yielding absolute limits.
    #[must_use]
    pub fn relative_to(&self, start_scale: f64) -> CalculatedScaleRange {
        CalculatedScaleRange {
            min: self.min * start_scale,
            max: self.max * start_scale,
        }
    }
}

/// Absolute scale limits, in transform units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalculatedScaleRange {
    /// Smallest allowed absolute scale.
    pub min: f64,
    /// Largest allowed absolute scale.
    pub max: f64,
}

impl CalculatedScaleRange {
    /// Returns whether `scale` lies inside the range, allowing `epsilon` of slack.
    #[must_use]
    pub fn contains(&self, scale: f64, epsilon: f64) -> bool {
        scale >= self.min - epsilon && scale <= self.max + epsilon
    }

    /// Computes the multiplier to apply to the current transform for one pinch update.
    ///
    /// `factor` is the recognizer's cumulative factor since the pinch began and
    /// `begin_scale` the absolute scale at that moment, so the result targets
    /// `begin_scale * factor` instead of compounding per-update drift. The
    /// target is clamped into the range.
    ///
    /// The result is always finite; degenerate inputs yield `1.0`.
    #[must_use]
    pub fn constrain(&self, begin_scale: f64, factor: f64, current_scale: f64) -> f64 {
        if !(current_scale.is_finite() && current_scale > 0.0)
            || !(factor.is_finite() && factor > 0.0)
            || !begin_scale.is_finite()
        {
            return 1.0;
        }
        let applied = begin_scale * factor / current_scale;
        let projected = applied * current_scale;
        if projected < self.min {
            self.min / current_scale
        } else if projected > self.max {
            self.max / current_scale
        } else {
            applied
        }
    }
}
