// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::{Affine, Point, Rect, Size};

use crate::animation::AnimationDriver;
use crate::bounds::{Axis, BoundsRestrictor, center_target};
use crate::config::ZoomConfig;
use crate::error::ConfigError;
use crate::focal::FocalAnchor;
use crate::input::{PointerAction, PointerEvent, PointerResponse};
use crate::modes::{AutoResetMode, Resolution, resolve};
use crate::scale::ScaleRange;
use crate::transform::{ContentTransform, Placement, TransformState};

/// Which driver currently owns the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveDriver {
    /// Nothing is touching or animating the transform.
    Idle,
    /// A touch sequence is in progress.
    Gesture,
    /// An animation is writing the transform.
    Animating,
}

/// Per-touch-sequence bookkeeping.
#[derive(Clone, Copy, Debug)]
struct GestureSession {
    anchor: FocalAnchor,
    tracking: bool,
    pointer_count: usize,
    previous_pointer_count: usize,
    single_tap_pending: bool,
    double_tap_pending: bool,
    scaling: bool,
    begin_scale: f64,
    scale_by: f64,
    scale_focus: Option<Point>,
}

impl GestureSession {
    fn new() -> Self {
        Self {
            anchor: FocalAnchor::default(),
            tracking: false,
            pointer_count: 0,
            previous_pointer_count: 1,
            single_tap_pending: false,
            double_tap_pending: false,
            scaling: false,
            begin_scale: 1.0,
            scale_by: 1.0,
            scale_focus: None,
        }
    }
}

/// Gesture-driven controller for a zoomable, pannable content surface.
///
/// The host feeds it three kinds of input, all on one thread:
/// - recognizer signals ([`GestureCoordinator::on_scale`],
///   [`GestureCoordinator::on_double_tap`], ...) for an event,
/// - then the event itself via [`GestureCoordinator::handle_pointer`],
/// - and, once per frame, [`GestureCoordinator::on_frame`] to advance animations.
///
/// Between calls the host reads [`GestureCoordinator::current_transform`] (or
/// [`GestureCoordinator::to_affine`]) to paint the content.
///
/// A live gesture and an animation never write the transform together: a
/// pointer down cancels any animation before the gesture mutates anything, and
/// starting an animation ends the touch sequence until the next pointer down.
#[derive(Clone, Debug)]
pub struct GestureCoordinator {
    config: ZoomConfig,
    range: ScaleRange,
    state: TransformState,
    animator: AnimationDriver,
    session: GestureSession,
}

impl GestureCoordinator {
    /// Creates a controller, validating `config`.
    pub fn new(mut config: ZoomConfig, state: TransformState) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        Ok(Self {
            config,
            range,
            state,
            animator: AnimationDriver::new(),
            session: GestureSession::new(),
        })
    }

    /// Creates a controller for content of `content_size` fitted into `viewport_size`.
    pub fn for_content(
        config: ZoomConfig,
        content_size: Size,
        viewport_size: Size,
    ) -> Result<Self, ConfigError> {
        Self::new(
            config,
            TransformState::new(content_size, viewport_size, Placement::default()),
        )
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The configuration is validated before anything changes. A changed scale
    /// range invalidates the start transform, as with
    /// [`GestureCoordinator::set_scale_range`].
    pub fn set_config(&mut self, mut config: ZoomConfig) -> Result<(), ConfigError> {
        let range = config.validate()?;
        let range_changed = range != self.range;
        let enabled = config.enabled;
        self.config = config;
        self.range = range;
        if range_changed {
            self.state.invalidate_start();
        }
        self.set_enabled(enabled);
        Ok(())
    }

    /// Sets the relative scale limits.
    ///
    /// Fails without changing anything unless `0 < min < max`. On success the
    /// start transform is forgotten (the next touch recaptures it) and the
    /// double-tap factor is clamped into the new range.
    pub fn set_scale_range(&mut self, min: f64, max: f64) -> Result<(), ConfigError> {
        let range = ScaleRange::new(min, max)?;
        log::debug!("scale range set to {min}..{max}");
        self.range = range;
        self.config.min_scale = min;
        self.config.max_scale = max;
        self.config.double_tap_scale_factor = range.clamp(self.config.double_tap_scale_factor);
        self.state.invalidate_start();
        Ok(())
    }

    /// Sets the double-tap zoom factor, clamped into the scale range.
    pub fn set_double_tap_scale_factor(&mut self, factor: f64) {
        self.config.double_tap_scale_factor = self.range.clamp(factor);
    }

    /// Sets whether pinching changes the scale.
    pub fn set_zoomable(&mut self, zoomable: bool) {
        self.config.zoomable = zoomable;
    }

    /// Sets whether multi-finger drags pan zoomed-in content.
    pub fn set_translatable(&mut self, translatable: bool) {
        self.config.translatable = translatable;
    }

    /// Sets whether a double tap zooms.
    pub fn set_double_tap_to_zoom(&mut self, enabled: bool) {
        self.config.double_tap_to_zoom = enabled;
    }

    /// Sets whether panning keeps content edges from pulling away from the viewport.
    pub fn set_restrict_bounds(&mut self, restrict: bool) {
        self.config.restrict_bounds = restrict;
    }

    /// Sets whether resets animate.
    pub fn set_animate_on_reset(&mut self, animate: bool) {
        self.config.animate_on_reset = animate;
    }

    /// Sets whether released content is pulled back into view.
    pub fn set_auto_center(&mut self, auto_center: bool) {
        self.config.auto_center = auto_center;
    }

    /// Sets what happens when the last pointer is released.
    pub fn set_auto_reset_mode(&mut self, mode: AutoResetMode) {
        log::debug!("auto reset mode set to {mode:?}");
        self.config.auto_reset_mode = mode;
    }

    /// Enables or disables gesture handling.
    ///
    /// Disabling snaps the content back to its placement.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        if !enabled {
            log::debug!("disabled; returning to placement");
            self.animator.cancel();
            self.session = GestureSession::new();
            self.state.rest();
        }
    }

    /// Sets the intrinsic content size, returning to the placement if it changed.
    ///
    /// Use [`GestureCoordinator::set_content`] when new content is shown.
    pub fn set_content_size(&mut self, size: Size) {
        self.animator.cancel();
        self.state.set_content_size(size);
    }

    /// Shows new content of `size`, returning to the placement and forgetting
    /// the start transform even if the size did not change.
    pub fn set_content(&mut self, size: Size) {
        log::debug!(
            "new content {size:?} (was {:?}); returning to placement",
            self.state.content_size()
        );
        self.animator.cancel();
        self.end_gesture();
        self.state.replace_content(size);
    }

    /// Sets the viewport size.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.animator.cancel();
        self.state.set_viewport_size(size);
    }

    /// Sets how content rests in the viewport, and returns to that placement.
    pub fn set_placement(&mut self, placement: Placement) {
        self.animator.cancel();
        self.state.set_placement(placement);
    }

    /// Returns the transform state.
    #[must_use]
    pub fn state(&self) -> &TransformState {
        &self.state
    }

    /// Returns the current content transform.
    #[must_use]
    pub fn current_transform(&self) -> ContentTransform {
        self.state.current()
    }

    /// Returns the current content transform as an affine for painting.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.state.current().to_affine()
    }

    /// Returns the viewport-space rectangle occupied by the content.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.state.content_bounds()
    }

    /// Current scale relative to the start transform.
    #[must_use]
    pub fn current_scale_factor(&self) -> f64 {
        self.state.scale_factor()
    }

    /// Returns whether an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Returns whether a pinch is in progress.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.session.scaling
    }

    /// Returns which driver currently owns the transform.
    #[must_use]
    pub fn active_driver(&self) -> ActiveDriver {
        if self.animator.is_running() {
            ActiveDriver::Animating
        } else if self.session.tracking {
            ActiveDriver::Gesture
        } else {
            ActiveDriver::Idle
        }
    }

    /// The pinch recognizer started a scale gesture.
    pub fn on_scale_begin(&mut self) {
        if !self.config.handles_gestures() {
            return;
        }
        self.session.scaling = true;
        self.session.begin_scale = self.state.current().scale_x;
        self.session.scale_by = 1.0;
    }

    /// The pinch recognizer reports a cumulative `factor` about `focus`.
    ///
    /// The clamped multiplier is applied by the next move event.
    pub fn on_scale(&mut self, factor: f64, focus: Point) {
        if !self.config.handles_gestures() {
            return;
        }
        let current = self.state.current().scale_x;
        let range = self.state.calculated_range(&self.range);
        if !range.contains(self.session.begin_scale * factor, 0.0) {
            log::trace!("pinch factor {factor} clamped to {range:?}");
        }
        self.session.scale_by = range.constrain(self.session.begin_scale, factor, current);
        self.session.scale_focus = Some(focus);
    }

    /// The pinch recognizer ended the scale gesture.
    pub fn on_scale_end(&mut self) {
        self.session.scaling = false;
        self.session.scale_by = 1.0;
        self.session.scale_focus = None;
    }

    /// The tap recognizer saw a tap that may still become a double tap.
    pub fn on_single_tap_up(&mut self) {
        self.session.single_tap_pending = true;
    }

    /// The tap recognizer confirmed a single tap.
    pub fn on_single_tap_confirmed(&mut self) {
        self.session.single_tap_pending = false;
    }

    /// The tap recognizer completed a double tap.
    pub fn on_double_tap(&mut self) {
        self.session.double_tap_pending = true;
        self.session.single_tap_pending = false;
    }

    /// Processes a routed pointer event.
    ///
    /// Recognizer signals belonging to the same platform event must be
    /// delivered first.
    ///
    /// Starting an animation ends the touch sequence: later events are
    /// consumed without moving the content until the next pointer down.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> PointerResponse {
        if !self.config.handles_gestures() {
            return PointerResponse::IGNORED;
        }
        let start = self.state.ensure_start();
        if event.action == PointerAction::Down {
            if self.animator.is_running() {
                log::trace!("pointer down cancels animation");
                self.animator.cancel();
            }
            self.session.tracking = true;
        }
        self.session.pointer_count = event.pointer_count;

        if self.session.double_tap_pending {
            self.session.double_tap_pending = false;
            if self.config.double_tap_to_zoom {
                self.session.single_tap_pending = false;
                self.double_tap(event.position, start);
                return self.finish_event(event);
            }
        }

        if !self.session.tracking {
            log::trace!("{:?} outside a tracked sequence; ignored", event.action);
            self.session.scale_by = 1.0;
            self.session.scale_focus = None;
            return self.finish_event(event);
        }

        if !self.session.single_tap_pending {
            if event.action == PointerAction::Down
                || event.pointer_count != self.session.previous_pointer_count
            {
                self.session.anchor.reset(event.position);
            } else if event.action == PointerAction::Move {
                self.apply_move(event);
            }
            if event.is_terminal() {
                self.session.scale_by = 1.0;
                self.settle();
            }
        }

        self.finish_event(event)
    }

    /// Advances animations by `dt`. Returns whether more frames are needed.
    pub fn on_frame(&mut self, dt: Duration) -> bool {
        if !self.animator.is_running() {
            return false;
        }
        let mut transform = self.state.current();
        let running = self.animator.advance(dt, &mut transform);
        self.state.set_current(transform);
        running
    }

    /// Returns to the start transform, animating if `animate_on_reset` is set.
    pub fn reset(&mut self) {
        self.reset_with(self.config.animate_on_reset);
    }

    /// Returns to the start transform, animated or snapping.
    pub fn reset_with(&mut self, animate: bool) {
        let target = self.state.reset_target();
        if animate && self.animator.transform_target() == Some(target) {
            return;
        }
        log::debug!("reset to scale {} (animated: {animate})", target.scale_x);
        if animate {
            self.animate_to(target);
        } else {
            self.animator.cancel();
            self.state.set_current(target);
        }
    }

    fn finish_event(&mut self, event: PointerEvent) -> PointerResponse {
        if event.is_terminal() {
            self.session.tracking = false;
            self.session.anchor.clear();
        }
        self.session.previous_pointer_count = event.pointer_count;
        PointerResponse {
            consumed: true,
            disallow_intercept: event.pointer_count > 1
                || self.state.scale_factor() > 1.0
                || self.animator.is_running(),
        }
    }

    /// Hands the transform to an animation toward `target`.
    fn animate_to(&mut self, target: ContentTransform) {
        self.end_gesture();
        self.animator.animate_transform(
            self.state.current(),
            target,
            self.config.animation_duration,
        );
    }

    /// Ends the current touch sequence; nothing moves until the next down.
    fn end_gesture(&mut self) {
        self.session.tracking = false;
        self.session.anchor.clear();
        self.session.scale_by = 1.0;
        self.session.scale_focus = None;
    }

    fn apply_move(&mut self, event: PointerEvent) {
        let Some(delta) = self.session.anchor.update(event.position) else {
            return;
        };

        if self.allow_translate(event.pointer_count) {
            let restrictor = BoundsRestrictor::new(self.config.restrict_bounds);
            let delta = restrictor.restrict(
                delta,
                self.state.content_bounds(),
                self.state.viewport_size(),
                self.session.scaling,
            );
            log::trace!("pan by {delta:?}");
            self.state.update(|t| t.post_translate(delta));
        }

        if self.config.zoomable && self.session.scale_by != 1.0 {
            let factor = self.session.scale_by;
            let pivot = self.session.scale_focus.unwrap_or(event.position);
            log::trace!("scale by {factor} about {pivot:?}");
            self.state.update(|t| t.post_scale(factor, pivot));
            self.session.scale_by = 1.0;
        }
    }

    fn allow_translate(&self, pointer_count: usize) -> bool {
        self.config.translatable
            && self.state.scale_factor() > 1.0
            && pointer_count >= self.config.pan_pointer_threshold
    }

    fn double_tap(&mut self, focus: Point, start: ContentTransform) {
        let current = self.state.current();
        if current.scale_x != start.scale_x {
            log::debug!("double tap while zoomed; resetting");
            self.reset();
        } else {
            let factor = self.config.double_tap_scale_factor;
            log::debug!("double tap; zooming {factor}x toward {focus:?}");
            self.animate_to(current.scaled_about(factor, focus));
        }
    }

    fn settle(&mut self) {
        let current = self.state.current().scale_x;
        match resolve(self.config.auto_reset_mode, current, self.state.start_scale()) {
            Resolution::Reset => self.reset(),
            Resolution::Center => self.center(),
        }
    }

    fn center(&mut self) {
        if !self.config.auto_center {
            return;
        }
        let bounds = self.state.content_bounds();
        let viewport = self.state.viewport_size();
        let current = self.state.current();
        for axis in Axis::ALL {
            let (near, far) = axis.edges(bounds);
            if let Some(target) = center_target(near, far, axis.extent(viewport)) {
                if self.animator.axis_target(axis) == Some(target) {
                    continue;
                }
                self.end_gesture();
                let from = axis.component(current.translation());
                log::debug!("centering {axis:?} from {from} to {target}");
                self.animator
                    .animate_axis(axis, from, target, self.config.animation_duration);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Point, Size};

    use super::{ActiveDriver, GestureCoordinator};
    use crate::config::ZoomConfig;
    use crate::input::{PointerAction, PointerEvent};
    use crate::modes::AutoResetMode;

    fn square() -> GestureCoordinator {
        GestureCoordinator::for_content(
            ZoomConfig::default(),
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        )
        .unwrap()
    }

    fn pinch(c: &mut GestureCoordinator, factor: f64, focus: Point) {
        c.handle_pointer(PointerEvent::down(focus));
        c.handle_pointer(PointerEvent::moved(2, focus));
        c.on_scale_begin();
        c.on_scale(factor, focus);
        c.handle_pointer(PointerEvent::moved(2, focus));
        c.on_scale_end();
    }

    #[test]
    fn ignored_when_nothing_is_enabled() {
        let config = ZoomConfig {
            zoomable: false,
            translatable: false,
            ..ZoomConfig::default()
        };
        let mut c = GestureCoordinator::for_content(
            config,
            Size::new(10.0, 10.0),
            Size::new(10.0, 10.0),
        )
        .unwrap();
        let response = c.handle_pointer(PointerEvent::down((1.0, 1.0)));
        assert!(!response.consumed);
        assert_eq!(c.state().start(), None);
    }

    #[test]
    fn pinch_scales_about_focus() {
        let mut c = square();
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        let t = c.current_transform();
        assert!((t.scale_x - 2.0).abs() < 1e-12);
        assert!((t.translate_x + 50.0).abs() < 1e-9);
        assert!((c.current_scale_factor() - 2.0).abs() < 1e-12);
        assert_eq!(c.active_driver(), ActiveDriver::Gesture);
    }

    #[test]
    fn zoom_disabled_leaves_scale_alone() {
        let mut c = square();
        c.set_zoomable(false);
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        assert_eq!(c.current_transform().scale_x, 1.0);
    }

    #[test]
    fn pointer_count_change_does_not_jump() {
        let mut c = square();
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        let before = c.current_transform();
        // A third finger lands far away; the centroid jumps but nothing moves.
        c.handle_pointer(PointerEvent::moved(3, (90.0, 90.0)));
        assert_eq!(c.current_transform(), before);
        // The next move pans relative to the new centroid.
        c.handle_pointer(PointerEvent::moved(3, (95.0, 90.0)));
        assert!((c.current_transform().translate_x - (before.translate_x + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn single_finger_does_not_pan_by_default() {
        let mut c = square();
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        c.handle_pointer(PointerEvent::moved(1, (50.0, 50.0)));
        let before = c.current_transform();
        c.handle_pointer(PointerEvent::moved(1, (60.0, 50.0)));
        assert_eq!(c.current_transform(), before);
    }

    #[test]
    fn single_finger_pans_with_lower_threshold() {
        let mut c = square();
        let mut config = *c.config();
        config.pan_pointer_threshold = 1;
        c.set_config(config).unwrap();
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        c.handle_pointer(PointerEvent::moved(1, (50.0, 50.0)));
        let before = c.current_transform();
        c.handle_pointer(PointerEvent::moved(1, (60.0, 50.0)));
        assert!((c.current_transform().translate_x - (before.translate_x + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn pending_single_tap_suppresses_mutation() {
        let mut c = square();
        pinch(&mut c, 2.0, Point::new(50.0, 50.0));
        let before = c.current_transform();
        c.on_single_tap_up();
        c.handle_pointer(PointerEvent::moved(2, (70.0, 70.0)));
        c.handle_pointer(PointerEvent::up((70.0, 70.0)));
        assert_eq!(c.current_transform(), before);
        assert!(!c.is_animating());
        c.on_single_tap_confirmed();
        assert_eq!(c.active_driver(), ActiveDriver::Idle);
    }

    #[test]
    fn down_cancels_animation() {
        let mut c = square();
        pinch(&mut c, 0.7, Point::new(50.0, 50.0));
        c.handle_pointer(PointerEvent::up((50.0, 50.0)));
        assert_eq!(c.active_driver(), ActiveDriver::Animating);
        c.on_frame(Duration::from_millis(50));
        let mid = c.current_transform();

        c.handle_pointer(PointerEvent::down((10.0, 10.0)));
        assert!(!c.is_animating());
        assert_eq!(c.active_driver(), ActiveDriver::Gesture);
        assert!(!c.on_frame(Duration::from_millis(500)));
        assert_eq!(c.current_transform(), mid);
    }

    #[test]
    fn repeated_reset_keeps_the_running_animation() {
        let mut c = square();
        pinch(&mut c, 0.7, Point::new(50.0, 50.0));
        c.handle_pointer(PointerEvent::up((50.0, 50.0)));
        assert!(c.on_frame(Duration::from_millis(50)));

        c.reset();
        // The first reset's 200ms budget still applies.
        assert!(!c.on_frame(Duration::from_millis(150)));
        assert_eq!(c.current_transform(), c.state().start().unwrap());
    }

    #[test]
    fn never_mode_only_centers() {
        let mut c = square();
        c.set_auto_reset_mode(AutoResetMode::Never);
        pinch(&mut c, 0.6, Point::new(0.0, 0.0));
        c.handle_pointer(PointerEvent::new(PointerAction::Cancel, 1, (0.0, 0.0)));
        // Shrunk content hugging the origin is already inside: nothing to do.
        assert!(!c.is_animating());
        assert!((c.current_transform().scale_x - 0.6).abs() < 1e-12);
    }
}
