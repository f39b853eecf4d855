// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focal anchor: turns a stream of focal points into pan deltas.
//!
//! ## Usage
//!
//! 1) Call [`FocalAnchor::reset`] on a pointer down, and whenever the number of
//!    pointers changes, so that the new centroid does not read as a jump.
//! 2) On each move, call [`FocalAnchor::update`] to get the movement since the
//!    previous focal point.
//! 3) Call [`FocalAnchor::clear`] when the touch sequence ends.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_pinch_zoom::FocalAnchor;
//!
//! let mut anchor = FocalAnchor::default();
//! anchor.reset(Point::new(10.0, 20.0));
//! assert_eq!(anchor.update(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
//!
//! // A second finger lands; the centroid moves but no pan should happen.
//! anchor.reset(Point::new(40.0, 25.0));
//! assert_eq!(anchor.update(Point::new(41.0, 25.0)), Some(Vec2::new(1.0, 0.0)));
//! ```

use kurbo::{Point, Vec2};

/// Last focal point of the current touch sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FocalAnchor {
    last: Option<Point>,
}

impl FocalAnchor {
    /// Treats `pos` as a fresh drag origin.
    pub fn reset(&mut self, pos: Point) {
        self.last = Some(pos);
    }

    /// Moves the anchor to `pos`, returning the delta from the previous anchor.
    ///
    /// Returns `None` (and starts tracking from `pos`) if no anchor was set.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let delta = self.last.map(|last| pos - last);
        self.last = Some(pos);
        delta
    }

    /// Stops tracking.
    pub fn clear(&mut self) {
        self.last = None;
    }
}
