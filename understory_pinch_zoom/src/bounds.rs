// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation clamping relative to the viewport.
//!
//! Every function here is total: it clamps rather than fails. Axes are
//! handled independently with the viewport spanning `0..extent`.

use kurbo::{Rect, Size, Vec2};

/// One of the two translation axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// Both axes, X first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Returns the `(near, far)` edges of `rect` along this axis.
    #[must_use]
    pub fn edges(self, rect: Rect) -> (f64, f64) {
        match self {
            Self::X => (rect.x0, rect.x1),
            Self::Y => (rect.y0, rect.y1),
        }
    }

    /// Returns the viewport extent along this axis.
    #[must_use]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    /// Returns this axis' component of `v`.
    #[must_use]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }
}

/// Clamps a translation `delta` along one axis.
///
/// `near..far` is the content's current span and `0..extent` the viewport.
///
/// With `restrict` set:
/// - content at least as large as the viewport may not pull an edge inward
///   past the matching viewport edge,
/// - smaller content may not push an edge outward past the viewport edge.
///
/// Neither rule applies while `pinching`, so translation does not fight the
/// simultaneous rescale. Regardless of `restrict`, the delta is truncated so the
/// content never leaves the viewport entirely: at worst one edge ends flush
/// with the opposite viewport edge.
#[must_use]
pub fn restrict_axis(
    delta: f64,
    near: f64,
    far: f64,
    extent: f64,
    restrict: bool,
    pinching: bool,
) -> f64 {
    let mut delta = delta;
    if restrict && !pinching {
        if far - near >= extent {
            if near <= 0.0 && near + delta > 0.0 {
                delta = -near;
            } else if far >= extent && far + delta < extent {
                delta = extent - far;
            }
        } else if near >= 0.0 && near + delta < 0.0 {
            delta = -near;
        } else if far <= extent && far + delta > extent {
            delta = extent - far;
        }
    }

    if far + delta < 0.0 {
        delta = -far;
    } else if near + delta > extent {
        delta = extent - near;
    }
    delta
}

/// Returns the translation an axis should settle at, if its edges stray.
///
/// Content larger than the viewport pulls an inward edge back to the viewport
/// edge; smaller content pulls an outward edge back inside. The near edge is
/// considered first. `None` means the axis is already acceptable.
#[must_use]
pub fn center_target(near: f64, far: f64, extent: f64) -> Option<f64> {
    if far - near > extent {
        if near > 0.0 {
            Some(0.0)
        } else if far < extent {
            Some(near + extent - far)
        } else {
            None
        }
    } else if near < 0.0 {
        Some(0.0)
    } else if far > extent {
        Some(near + extent - far)
    } else {
        None
    }
}

/// Applies [`restrict_axis`] to both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundsRestrictor {
    /// Whether the edge rules are enforced in addition to the safety clamp.
    pub restrict: bool,
}

impl BoundsRestrictor {
    /// Creates a restrictor.
    #[must_use]
    pub fn new(restrict: bool) -> Self {
        Self { restrict }
    }

    /// Clamps a pan `delta` for content currently covering `bounds`.
    #[must_use]
    pub fn restrict(&self, delta: Vec2, bounds: Rect, viewport: Size, pinching: bool) -> Vec2 {
        let [x, y] = Axis::ALL.map(|axis| {
            let (near, far) = axis.edges(bounds);
            restrict_axis(
                axis.component(delta),
                near,
                far,
                axis.extent(viewport),
                self.restrict,
                pinching,
            )
        });
        Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size, Vec2};

    use super::{Axis, BoundsRestrictor, center_target, restrict_axis};

    #[test]
    fn large_content_cannot_pull_edges_inward() {
        // Content 0..200 in a 100 viewport.
        assert_eq!(restrict_axis(30.0, 0.0, 200.0, 100.0, true, false), 0.0);
        // Content -100..100: right edge flush, moving left would expose a gap.
        assert_eq!(restrict_axis(-30.0, -100.0, 100.0, 100.0, true, false), 0.0);
        // Moving within the slack is untouched.
        assert_eq!(restrict_axis(-30.0, -50.0, 150.0, 100.0, true, false), -30.0);
        // Clamped exactly to the edge.
        assert_eq!(restrict_axis(80.0, -50.0, 150.0, 100.0, true, false), 50.0);
    }

    #[test]
    fn small_content_stays_inside() {
        // Content 10..60 in a 100 viewport.
        assert_eq!(restrict_axis(-30.0, 10.0, 60.0, 100.0, true, false), -10.0);
        assert_eq!(restrict_axis(70.0, 10.0, 60.0, 100.0, true, false), 40.0);
        assert_eq!(restrict_axis(5.0, 10.0, 60.0, 100.0, true, false), 5.0);
    }

    #[test]
    fn pinch_in_progress_lifts_edge_rules() {
        assert_eq!(restrict_axis(30.0, 0.0, 200.0, 100.0, true, true), 30.0);
        assert_eq!(restrict_axis(-30.0, 10.0, 60.0, 100.0, true, true), -30.0);
    }

    #[test]
    fn safety_clamp_applies_without_restriction() {
        // Far edge would go past 0.
        assert_eq!(restrict_axis(-500.0, 10.0, 60.0, 100.0, false, false), -60.0);
        // Near edge would go past the extent.
        assert_eq!(restrict_axis(500.0, 10.0, 60.0, 100.0, false, true), 90.0);
    }

    #[test]
    fn safety_clamp_holds_for_any_delta() {
        for restrict in [false, true] {
            for pinching in [false, true] {
                for (near, far) in [(-300.0, -10.0), (10.0, 60.0), (-50.0, 250.0)] {
                    for delta in [-1000.0, -75.0, -1.0, 0.0, 2.0, 80.0, 1000.0] {
                        let d = restrict_axis(delta, near, far, 100.0, restrict, pinching);
                        assert!(
                            far + d >= 0.0 && near + d <= 100.0,
                            "delta {delta} on {near}..{far} became {d}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn center_targets() {
        // Large content with a gap on the left.
        assert_eq!(center_target(20.0, 220.0, 100.0), Some(0.0));
        // Large content with a gap on the right.
        assert_eq!(center_target(-150.0, 50.0, 100.0), Some(-100.0));
        // Large content covering the viewport.
        assert_eq!(center_target(-50.0, 150.0, 100.0), None);
        // Small content hanging off the left.
        assert_eq!(center_target(-20.0, 30.0, 100.0), Some(0.0));
        // Small content hanging off the right.
        assert_eq!(center_target(80.0, 130.0, 100.0), Some(50.0));
        // Small content fully inside.
        assert_eq!(center_target(10.0, 60.0, 100.0), None);
    }

    #[test]
    fn restrictor_handles_axes_independently() {
        let restrictor = BoundsRestrictor::new(true);
        let bounds = Rect::new(0.0, 10.0, 200.0, 60.0);
        let viewport = Size::new(100.0, 100.0);
        let delta = restrictor.restrict(Vec2::new(30.0, 70.0), bounds, viewport, false);
        assert_eq!(delta, Vec2::new(0.0, 40.0));
        assert_eq!(Axis::Y.edges(bounds), (10.0, 60.0));
    }
}
