//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Pointer down
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer cancelled (e.g., parent intercepted the stream)
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Mouse wheel scrolled
    Scroll {
        /// Horizontal scroll delta
        delta_x: f32,
        /// Vertical scroll delta
        delta_y: f32,
    },
    /// Widget gained focus
    FocusIn,
    /// Widget lost focus
    FocusOut,
}

impl Event {
    /// Primary touch pointer going down at `position`.
    #[must_use]
    pub const fn pointer_down(position: Point) -> Self {
        Self::PointerDown {
            pointer_id: PointerId::PRIMARY,
            pointer_type: PointerType::Touch,
            position,
        }
    }

    /// Primary pointer moving to `position`.
    #[must_use]
    pub const fn pointer_move(position: Point) -> Self {
        Self::PointerMove {
            pointer_id: PointerId::PRIMARY,
            position,
        }
    }

    /// Primary pointer lifting at `position`.
    #[must_use]
    pub const fn pointer_up(position: Point) -> Self {
        Self::PointerUp {
            pointer_id: PointerId::PRIMARY,
            position,
        }
    }

    /// Primary pointer stream cancelled.
    #[must_use]
    pub const fn pointer_cancel() -> Self {
        Self::PointerCancel {
            pointer_id: PointerId::PRIMARY,
        }
    }

    /// Classify a pointer event. Non-pointer events yield `None`.
    #[must_use]
    pub const fn pointer_action(&self) -> Option<PointerAction> {
        match self {
            Self::PointerDown { .. } => Some(PointerAction::Down),
            Self::PointerMove { .. } => Some(PointerAction::Move),
            Self::PointerUp { .. } => Some(PointerAction::Up),
            Self::PointerCancel { .. } => Some(PointerAction::Cancel),
            _ => None,
        }
    }
}

/// The action kind of a pointer event, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerAction {
    /// Pointer went down
    Down,
    /// Pointer moved
    Move,
    /// Pointer lifted
    Up,
    /// Pointer stream cancelled
    Cancel,
}

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The first pointer of a stream.
    pub const PRIMARY: Self = Self(0);
}

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}
