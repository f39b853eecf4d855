// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven linear animations of the content transform.
//!
//! Nothing here owns a clock. The host calls [`AnimationDriver::advance`] once
//! per frame with the elapsed time, and the driver writes interpolated values
//! into the transform it is handed.

use core::time::Duration;

use crate::bounds::Axis;
use crate::transform::ContentTransform;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    /// Returns the value `t` of the way from `self` to `target`.
    #[must_use]
    fn lerp(&self, target: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Lerp for ContentTransform {
    fn lerp(&self, target: &Self, t: f64) -> Self {
        Self {
            scale_x: self.scale_x.lerp(&target.scale_x, t),
            scale_y: self.scale_y.lerp(&target.scale_y, t),
            translate_x: self.translate_x.lerp(&target.translate_x, t),
            translate_y: self.translate_y.lerp(&target.translate_y, t),
        }
    }
}

/// A single linear animation job from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: Duration,
    elapsed: Duration,
}

impl<T: Lerp> Tween<T> {
    /// Creates a job that has not advanced yet.
    #[must_use]
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Returns progress in `[0, 1]`. A zero duration counts as complete.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Returns whether the job has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.fraction() >= 1.0
    }

    /// Returns the value at fraction `t`; `t >= 1` yields the target verbatim.
    #[must_use]
    pub fn sample(&self, t: f64) -> T {
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(&self.to, t.max(0.0))
        }
    }

    /// Advances by `dt` and returns the value for the new position.
    pub fn advance(&mut self, dt: Duration) -> T {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.sample(self.fraction())
    }
}

/// Which animation, if any, is driving the transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationDriver {
    transform: Option<Tween<ContentTransform>>,
    axes: [Option<Tween<f64>>; 2],
}

impl AnimationDriver {
    /// Creates an idle driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating the whole transform, replacing every in-flight job.
    ///
    /// The replaced jobs do not jump to their targets.
    pub fn animate_transform(
        &mut self,
        from: ContentTransform,
        to: ContentTransform,
        duration: Duration,
    ) {
        self.cancel();
        self.transform = Some(Tween::new(from, to, duration));
    }

    /// Starts animating one translation component.
    ///
    /// Replaces an in-flight job on the same axis and any whole-transform job;
    /// a job on the other axis keeps running.
    pub fn animate_axis(&mut self, axis: Axis, from: f64, to: f64, duration: Duration) {
        self.transform = None;
        self.axes[axis_slot(axis)] = Some(Tween::new(from, to, duration));
    }

    /// Drops every job, leaving the transform where the last frame put it.
    pub fn cancel(&mut self) {
        self.transform = None;
        self.axes = [None, None];
    }

    /// Returns whether any job is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.transform.is_some() || self.axes.iter().any(Option::is_some)
    }

    /// Returns the target of the whole-transform job, if one is running.
    #[must_use]
    pub fn transform_target(&self) -> Option<ContentTransform> {
        self.transform.map(|job| job.target())
    }

    /// Returns the target of the job on `axis`, if one is running.
    #[must_use]
    pub fn axis_target(&self, axis: Axis) -> Option<f64> {
        self.axes[axis_slot(axis)].map(|job| job.target())
    }

    /// Advances all jobs by `dt`, writing their values into `transform`.
    ///
    /// Finished jobs write their exact target and are dropped. Returns whether
    /// any job is still running afterwards.
    pub fn advance(&mut self, dt: Duration, transform: &mut ContentTransform) -> bool {
        if let Some(job) = &mut self.transform {
            *transform = job.advance(dt);
            if job.is_finished() {
                self.transform = None;
            }
        }
        for axis in Axis::ALL {
            let slot = &mut self.axes[axis_slot(axis)];
            if let Some(job) = slot {
                let value = job.advance(dt);
                match axis {
                    Axis::X => transform.translate_x = value,
                    Axis::Y => transform.translate_y = value,
                }
                if job.is_finished() {
                    *slot = None;
                }
            }
        }
        self.is_running()
    }
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::X => 0,
        Axis::Y => 1,
    }
}
