// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch_zoom --heading-base-level=0

//! Understory Pinch Zoom: a headless pinch-zoom and pan controller.
//!
//! This crate turns multi-touch input into a bounded scale + translate
//! transform for a content surface (an image, a drawing, a tile). It covers:
//! - Pinch zoom about the gesture's focal point, clamped to a scale range
//!   expressed relative to the content's resting fit.
//! - Multi-finger panning, optionally restricted so content edges stay put.
//! - Double tap to zoom in, and again to return.
//! - Settling after a gesture: animated (or snapping) reset to the start
//!   transform, or pulling stray edges back into view, per [`AutoResetMode`].
//!
//! It does **not** recognize gestures or paint anything. Callers are
//! expected to:
//! - Run the platform's pinch and tap recognizers and forward their signals
//!   ([`GestureCoordinator::on_scale`], [`GestureCoordinator::on_double_tap`], ...)
//!   before the [`PointerEvent`] they were derived from.
//! - Call [`GestureCoordinator::on_frame`] once per frame while
//!   [`GestureCoordinator::is_animating`] reports `true`.
//! - Paint the content through [`GestureCoordinator::to_affine`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size};
//! use understory_pinch_zoom::{GestureCoordinator, PointerEvent, ZoomConfig};
//!
//! // A 400x300 image shown in an 800x600 view.
//! let mut zoom = GestureCoordinator::for_content(
//!     ZoomConfig::default(),
//!     Size::new(400.0, 300.0),
//!     Size::new(800.0, 600.0),
//! )
//! .unwrap();
//!
//! // Two fingers pinch outward around the middle of the view.
//! let focus = Point::new(400.0, 300.0);
//! zoom.handle_pointer(PointerEvent::down(focus));
//! zoom.handle_pointer(PointerEvent::moved(2, focus));
//! zoom.on_scale_begin();
//! zoom.on_scale(2.0, focus);
//! zoom.handle_pointer(PointerEvent::moved(2, focus));
//! zoom.on_scale_end();
//! assert!((zoom.current_scale_factor() - 2.0).abs() < 1e-9);
//!
//! // Releasing while zoomed in keeps the zoom (the default mode only resets
//! // when zoomed out).
//! zoom.handle_pointer(PointerEvent::up(focus));
//! while zoom.on_frame(Duration::from_millis(16)) {}
//! assert!((zoom.current_scale_factor() - 2.0).abs() < 1e-9);
//!
//! // An explicit reset snaps back to where the gesture started.
//! zoom.reset_with(false);
//! assert_eq!(zoom.current_scale_factor(), 1.0);
//! ```
//!
//! ## Design notes
//!
//! - Transforms are axis-aligned; rotation and skew are out of scope.
//! - Scale limits are relative: `min_scale = 0.6` means 60% of the start
//!   transform's scale, whatever the fit produced.
//! - All geometry clamps rather than fails. The only error is an invalid
//!   scale range, reported as [`ConfigError`].
//! - A gesture and an animation never write the transform together; a
//!   pointer down cancels animations first. See [`ActiveDriver`].
//!
//! This crate is `no_std`.

#![no_std]

mod animation;
mod bounds;
mod config;
mod coordinator;
mod error;
mod focal;
mod input;
mod modes;
mod scale;
mod transform;

pub use animation::{AnimationDriver, Lerp, Tween};
pub use bounds::{Axis, BoundsRestrictor, center_target, restrict_axis};
pub use config::{
    DEFAULT_ANIMATION_DURATION, DEFAULT_DOUBLE_TAP_SCALE_FACTOR, DEFAULT_MAX_SCALE,
    DEFAULT_MIN_SCALE, ZoomConfig,
};
pub use coordinator::{ActiveDriver, GestureCoordinator};
pub use error::ConfigError;
pub use focal::FocalAnchor;
pub use input::{PointerAction, PointerEvent, PointerResponse};
pub use modes::{AutoResetMode, FitMode, Resolution, resolve};
pub use scale::{CalculatedScaleRange, ScaleRange};
pub use transform::{ContentTransform, Placement, TransformState, fit_content};
