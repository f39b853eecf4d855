// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Phase of a routed pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first pointer touched down.
    Down,
    /// One or more pointers moved, or a pointer was added or removed mid-sequence.
    Move,
    /// The last pointer lifted.
    Up,
    /// The platform cancelled the touch sequence.
    Cancel,
}

/// A pointer event as delivered by the host after its recognizers ran.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event phase.
    pub action: PointerAction,
    /// Number of pointers currently down, including the one that changed.
    pub pointer_count: usize,
    /// Focal point (centroid of the active pointers) in viewport coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(action: PointerAction, pointer_count: usize, position: impl Into<Point>) -> Self {
        Self {
            action,
            pointer_count,
            position: position.into(),
        }
    }

    /// Shorthand for a single-pointer [`PointerAction::Down`].
    #[must_use]
    pub fn down(position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Down, 1, position)
    }

    /// Shorthand for a [`PointerAction::Move`].
    #[must_use]
    pub fn moved(pointer_count: usize, position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Move, pointer_count, position)
    }

    /// Shorthand for a single-pointer [`PointerAction::Up`].
    #[must_use]
    pub fn up(position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Up, 1, position)
    }

    /// Returns whether this event ends the touch sequence.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.action, PointerAction::Up | PointerAction::Cancel)
    }
}

/// What the host should do with an event after the controller saw it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// The controller consumed the event.
    pub consumed: bool,
    /// Ancestors should not steal the touch stream (for example to scroll).
    pub disallow_intercept: bool,
}

impl PointerResponse {
    /// The event was ignored and may propagate.
    pub const IGNORED: Self = Self {
        consumed: false,
        disallow_intercept: false,
    };
}
