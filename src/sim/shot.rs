//! Drag-gesture shot controller
//!
//! Converts a press/drag/release gesture into a launch impulse using the
//! slingshot convention: pull back and release to fire the opposite way.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_DRAG_DISTANCE, MIN_DRAG_DISTANCE, POWER_SCALE};
use crate::direction_or_zero;

/// A completed shot, consumed immediately to impulse the ball
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    pub start_drag: Vec2,
    pub end_drag: Vec2,
    /// Drag distance clamped to the maximum (px)
    pub power: f32,
    /// Unit launch direction (from release back toward the drag origin)
    pub direction: Vec2,
}

impl Shot {
    /// Initial ball velocity for this shot
    pub fn launch_velocity(&self) -> Vec2 {
        self.direction * self.power * POWER_SCALE
    }
}

/// In-progress drag gesture
#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Vec2,
    current: Vec2,
}

/// Tracks one drag gesture at a time and turns it into a `Shot` on release.
///
/// The controller is deliberately ignorant of ball and phase; the tick
/// driver only feeds it gestures while aiming, which enforces one shot at a
/// time.
#[derive(Debug, Clone, Default)]
pub struct ShotController {
    drag: Option<Drag>,
}

impl ShotController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag. A second press while dragging restarts the gesture.
    pub fn begin_drag(&mut self, point: Vec2) {
        self.drag = Some(Drag {
            start: point,
            current: point,
        });
    }

    /// Update the drag position; no-op when no drag is active
    pub fn update_drag(&mut self, point: Vec2) {
        if let Some(drag) = &mut self.drag {
            drag.current = point;
        }
    }

    /// Release the drag.
    ///
    /// Returns `None` when no drag was active (stray release) or the drag
    /// distance is below the minimum (cancelled shot, no stroke counted).
    pub fn release_drag(&mut self, point: Vec2) -> Option<Shot> {
        let drag = self.drag.take()?;
        let distance = point.distance(drag.start);
        if distance < MIN_DRAG_DISTANCE {
            return None;
        }

        Some(Shot {
            start_drag: drag.start,
            end_drag: point,
            power: distance.min(MAX_DRAG_DISTANCE),
            direction: direction_or_zero(point, drag.start),
        })
    }

    /// Abandon any in-progress drag (e.g. phase change mid-gesture)
    pub fn cancel(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current aim vector (drag start minus current point) for the renderer
    pub fn aim_preview(&self) -> Option<(Vec2, Vec2)> {
        self.drag.map(|d| (d.start, d.current))
    }
}
