// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::error::ConfigError;
use crate::modes::AutoResetMode;
use crate::scale::ScaleRange;

/// Default lower scale bound, relative to the start transform.
pub const DEFAULT_MIN_SCALE: f64 = 0.6;
/// Default upper scale bound, relative to the start transform.
pub const DEFAULT_MAX_SCALE: f64 = 8.0;
/// Default double-tap zoom factor.
pub const DEFAULT_DOUBLE_TAP_SCALE_FACTOR: f64 = 3.0;
/// Default duration of reset, centering and double-tap animations.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Behavior switches and limits for a [`crate::GestureCoordinator`].
///
/// Scale values are relative to the start transform, so `1.0` is the resting
/// fit of the content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoomConfig {
    /// Whether gestures are processed at all.
    pub enabled: bool,
    /// Pinch to zoom.
    pub zoomable: bool,
    /// Pan while zoomed in.
    pub translatable: bool,
    /// Double tap toggles between the start scale and a zoomed-in scale.
    pub double_tap_to_zoom: bool,
    /// Keep content edges from being pulled inside (or pushed outside) the viewport.
    pub restrict_bounds: bool,
    /// Animate resets instead of snapping.
    pub animate_on_reset: bool,
    /// Pull stray content back into view when a gesture ends without a reset.
    pub auto_center: bool,
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale reached by a double tap; clamped into `min_scale..=max_scale`.
    pub double_tap_scale_factor: f64,
    /// Reset-or-center policy applied when a gesture ends.
    pub auto_reset_mode: AutoResetMode,
    /// Duration of reset, centering and double-tap animations.
    pub animation_duration: Duration,
    /// Number of pointers required to pan.
    ///
    /// The default of two leaves single-finger drags to the host.
    pub pan_pointer_threshold: usize,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            zoomable: true,
            translatable: true,
            double_tap_to_zoom: false,
            restrict_bounds: false,
            animate_on_reset: true,
            auto_center: true,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            double_tap_scale_factor: DEFAULT_DOUBLE_TAP_SCALE_FACTOR,
            auto_reset_mode: AutoResetMode::default(),
            animation_duration: DEFAULT_ANIMATION_DURATION,
            pan_pointer_threshold: 2,
        }
    }
}

impl ZoomConfig {
    /// Validates the scale range and clamps the double-tap factor into it.
    ///
    /// Returns the validated range.
    pub fn validate(&mut self) -> Result<ScaleRange, ConfigError> {
        let range = ScaleRange::new(self.min_scale, self.max_scale)?;
        let clamped = range.clamp(self.double_tap_scale_factor);
        if clamped != self.double_tap_scale_factor {
            log::debug!(
                "double tap scale factor {} clamped to {clamped}",
                self.double_tap_scale_factor
            );
            self.double_tap_scale_factor = clamped;
        }
        Ok(range)
    }

    /// Returns whether any gesture would change the transform.
    #[must_use]
    pub fn handles_gestures(&self) -> bool {
        self.enabled && (self.zoomable || self.translatable)
    }
}
