// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Error returned when a configuration would leave the controller without a
/// usable scale range.
///
/// This is the only failure the controller reports. Once configured, every
/// gesture and animation path clamps instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A scale bound was zero, negative, or not finite.
    #[error("scale bounds must be finite and greater than zero (min: {min}, max: {max})")]
    NonPositiveScale {
        /// The requested minimum scale.
        min: f64,
        /// The requested maximum scale.
        max: f64,
    },
    /// The minimum scale was not strictly below the maximum scale.
    #[error("min scale ({min}) must be less than max scale ({max})")]
    EmptyScaleRange {
        /// The requested minimum scale.
        min: f64,
        /// The requested maximum scale.
        max: f64,
    },
}
