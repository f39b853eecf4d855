// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the resting placement positions content inside the viewport.
///
/// Consulted by [`crate::Placement::Fit`] whenever the content size, viewport
/// size or placement changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitMode {
    /// Scale uniformly so the whole content fits, then center it.
    #[default]
    Center,
    /// Scale uniformly so the whole content fits, aligned to the viewport origin.
    AlignMin,
    /// Keep the content at its intrinsic size, anchored at the viewport origin.
    Unscaled,
}

/// What happens when a touch sequence ends.
///
/// The mode is compared against the scale of the start transform; see
/// [`resolve`] for the exact table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AutoResetMode {
    /// Reset when zoomed out to or below the start scale, otherwise center.
    #[default]
    Under,
    /// Reset when zoomed in past the start scale, otherwise center.
    Over,
    /// Always reset.
    Always,
    /// Never reset; only center.
    Never,
}

/// Outcome of [`resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Return to the start transform.
    Reset,
    /// Pull stray edges back toward the viewport (if auto-centering is on).
    Center,
}

/// Decides how to settle the transform after a gesture ends.
///
/// | mode     | `current <= start` | `current > start` |
/// |----------|--------------------|-------------------|
/// | `Under`  | `Reset`            | `Center`          |
/// | `Over`   | `Center`           | `Reset`           |
/// | `Always` | `Reset`            | `Reset`           |
/// | `Never`  | `Center`           | `Center`          |
#[must_use]
pub fn resolve(mode: AutoResetMode, current_scale: f64, start_scale: f64) -> Resolution {
    let zoomed_in = current_scale > start_scale;
    match (mode, zoomed_in) {
        (AutoResetMode::Always, _)
        | (AutoResetMode::Under, false)
        | (AutoResetMode::Over, true) => Resolution::Reset,
        (AutoResetMode::Never, _) | (AutoResetMode::Under, true) | (AutoResetMode::Over, false) => {
            Resolution::Center
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoResetMode, Resolution, resolve};

    #[test]
    fn under_resets_when_shrunk_and_centers_when_enlarged() {
        assert_eq!(resolve(AutoResetMode::Under, 2.0, 1.0), Resolution::Center);
        assert_eq!(resolve(AutoResetMode::Under, 0.5, 1.0), Resolution::Reset);
        assert_eq!(resolve(AutoResetMode::Under, 1.0, 1.0), Resolution::Reset);
    }

    #[test]
    fn over_is_the_mirror_of_under() {
        assert_eq!(resolve(AutoResetMode::Over, 2.0, 1.0), Resolution::Reset);
        assert_eq!(resolve(AutoResetMode::Over, 0.5, 1.0), Resolution::Center);
        assert_eq!(resolve(AutoResetMode::Over, 1.0, 1.0), Resolution::Center);
    }

    #[test]
    fn always_and_never_ignore_scale() {
        for current in [0.25, 1.0, 4.0] {
            assert_eq!(
                resolve(AutoResetMode::Always, current, 1.0),
                Resolution::Reset,
                "Always must reset at {current}"
            );
            assert_eq!(
                resolve(AutoResetMode::Never, current, 1.0),
                Resolution::Center,
                "Never must center at {current}"
            );
        }
    }
}
