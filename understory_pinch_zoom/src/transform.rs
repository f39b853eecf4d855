// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::FitMode;
use crate::scale::{CalculatedScaleRange, ScaleRange};

/// Axis-aligned scale + translate mapping from content to viewport coordinates.
///
/// Rotation and skew are intentionally unsupported. The X and Y scales are
/// tracked separately so that an animation can interpolate each component
/// independently, although gestures always scale uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform {
    /// Horizontal scale.
    pub scale_x: f64,
    /// Vertical scale.
    pub scale_y: f64,
    /// Horizontal translation, in viewport units.
    pub translate_x: f64,
    /// Vertical translation, in viewport units.
    pub translate_y: f64,
}

impl ContentTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Creates a uniform scale followed by a translation.
    #[must_use]
    pub fn new(scale: f64, translation: Vec2) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x: translation.x,
            translate_y: translation.y,
        }
    }

    /// Returns the translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Translates after the existing mapping.
    pub fn post_translate(&mut self, delta: Vec2) {
        self.translate_x += delta.x;
        self.translate_y += delta.y;
    }

    /// Scales after the existing mapping, keeping `pivot` (in viewport space) fixed.
    pub fn post_scale(&mut self, factor: f64, pivot: Point) {
        self.scale_x *= factor;
        self.scale_y *= factor;
        self.translate_x = factor * (self.translate_x - pivot.x) + pivot.x;
        self.translate_y = factor * (self.translate_y - pivot.y) + pivot.y;
    }

    /// Returns a copy scaled about `pivot`.
    #[must_use]
    pub fn scaled_about(mut self, factor: f64, pivot: Point) -> Self {
        self.post_scale(factor, pivot);
        self
    }

    /// Maps a content-space point into viewport space.
    #[must_use]
    pub fn apply(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale_x + self.translate_x,
            pt.y * self.scale_y + self.translate_y,
        )
    }

    /// Returns the viewport-space rectangle covered by content of the given size.
    ///
    /// Zero-size content yields a zero-extent rectangle at the translation.
    #[must_use]
    pub fn bounds_of(&self, content: Size) -> Rect {
        let origin = Point::new(self.translate_x, self.translate_y);
        let far = self.apply(Point::new(content.width, content.height));
        Rect::from_points(origin, far)
    }

    /// Converts into a [`kurbo::Affine`] for rendering.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::new([
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Where content rests when nothing is zoomed or panned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Recomputed from the content and viewport sizes with the given mode.
    Fit(FitMode),
    /// A host-supplied transform, used verbatim.
    Fixed(ContentTransform),
}

impl Default for Placement {
    fn default() -> Self {
        Self::Fit(FitMode::default())
    }
}

impl Placement {
    /// Resolves the resting transform for the given content and viewport sizes.
    #[must_use]
    pub fn resolve(&self, content: Size, viewport: Size) -> ContentTransform {
        match *self {
            Self::Fixed(transform) => transform,
            Self::Fit(mode) => fit_content(content, viewport, mode),
        }
    }
}

/// Computes a uniform, aspect-preserving fit of `content` into `viewport`.
///
/// Degenerate sizes fall back to the identity transform.
#[must_use]
pub fn fit_content(content: Size, viewport: Size, mode: FitMode) -> ContentTransform {
    if mode == FitMode::Unscaled
        || content.width <= 0.0
        || content.height <= 0.0
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return ContentTransform::IDENTITY;
    }
    let sx = viewport.width / content.width;
    let sy = viewport.height / content.height;
    let scale = sx.min(sy);
    let translation = match mode {
        FitMode::Center => Vec2::new(
            (viewport.width - content.width * scale) * 0.5,
            (viewport.height - content.height * scale) * 0.5,
        ),
        FitMode::AlignMin | FitMode::Unscaled => Vec2::ZERO,
    };
    ContentTransform::new(scale, translation)
}

/// Owner of the live transform and everything derived from it.
///
/// `TransformState` keeps three transforms:
/// - the *placement*, where content rests for the current sizes,
/// - the *start* transform, captured lazily on the first touch and used as
///   the reset target and the anchor for scale limits,
/// - the *current* transform, mutated by gestures and animations.
///
/// [`TransformState::content_bounds`] is recomputed on every mutation.
#[derive(Clone, Debug)]
pub struct TransformState {
    content_size: Size,
    viewport_size: Size,
    placement: Placement,
    resting: ContentTransform,
    current: ContentTransform,
    start: Option<ContentTransform>,
    bounds: Rect,
}

impl TransformState {
    /// Creates a state showing `content_size` content inside `viewport_size`,
    /// at its placement.
    #[must_use]
    pub fn new(content_size: Size, viewport_size: Size, placement: Placement) -> Self {
        let resting = placement.resolve(content_size, viewport_size);
        let mut state = Self {
            content_size,
            viewport_size,
            placement,
            resting,
            current: resting,
            start: None,
            bounds: Rect::ZERO,
        };
        state.rebuild_bounds();
        state
    }

    /// Returns the current transform.
    #[must_use]
    pub fn current(&self) -> ContentTransform {
        self.current
    }

    /// Replaces the current transform.
    pub fn set_current(&mut self, transform: ContentTransform) {
        self.current = transform;
        self.rebuild_bounds();
    }

    /// Applies `f` to the current transform, then refreshes the bounds.
    pub fn update(&mut self, f: impl FnOnce(&mut ContentTransform)) {
        f(&mut self.current);
        self.rebuild_bounds();
    }

    /// Returns the viewport-space rectangle occupied by the content.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the captured start transform, if any.
    #[must_use]
    pub fn start(&self) -> Option<ContentTransform> {
        self.start
    }

    /// Captures the current transform as the start transform unless one is held.
    pub fn ensure_start(&mut self) -> ContentTransform {
        *self.start.get_or_insert(self.current)
    }

    /// Forgets the start transform; the next touch captures a fresh one.
    pub fn invalidate_start(&mut self) {
        self.start = None;
    }

    /// Returns the transform a reset returns to.
    ///
    /// This is the start transform when one has been captured, otherwise the
    /// resting placement.
    #[must_use]
    pub fn reset_target(&self) -> ContentTransform {
        self.start.unwrap_or(self.resting)
    }

    /// Returns the scale of the start transform, falling back to the resting one.
    #[must_use]
    pub fn start_scale(&self) -> f64 {
        self.reset_target().scale_x
    }

    /// Current horizontal scale relative to the start scale.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        let start = self.start_scale();
        if start > 0.0 {
            self.current.scale_x / start
        } else {
            1.0
        }
    }

    /// Absolute scale limits derived from `range` and the start scale.
    #[must_use]
    pub fn calculated_range(&self, range: &ScaleRange) -> CalculatedScaleRange {
        range.relative_to(self.start_scale())
    }

    /// Returns the intrinsic content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }

    /// Sets the intrinsic content size, returning to the placement.
    pub fn set_content_size(&mut self, size: Size) {
        if self.content_size == size {
            return;
        }
        self.content_size = size;
        self.rest();
    }

    /// Replaces the content, returning to the placement even if `size` is unchanged.
    pub fn replace_content(&mut self, size: Size) {
        self.content_size = size;
        self.rest();
    }

    /// Sets the viewport size, returning to the placement.
    pub fn set_viewport_size(&mut self, size: Size) {
        if self.viewport_size == size {
            return;
        }
        self.viewport_size = size;
        self.rest();
    }

    /// Sets the placement policy, returning to the new placement.
    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
        self.rest();
    }

    /// Snaps back to the placement and forgets the start transform.
    pub fn rest(&mut self) {
        self.resting = self.placement.resolve(self.content_size, self.viewport_size);
        self.start = None;
        self.set_current(self.resting);
    }

    fn rebuild_bounds(&mut self) {
        self.bounds = self.current.bounds_of(self.content_size);
    }
}
