//! The ball entity
//!
//! Owned exclusively by the current hole session and reset at each tee.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::BALL_RADIUS;

/// Mutable ball state advanced by the physics engine.
///
/// Invariant: `is_moving == false` implies `vel == Vec2::ZERO`. The only
/// paths that clear `is_moving` (`halt` and `reset_at`) also zero velocity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub is_moving: bool,
    pub in_hole: bool,
}

impl Ball {
    /// New ball at rest on the tee
    pub fn new(tee: Vec2) -> Self {
        Self {
            pos: tee,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            is_moving: false,
            in_hole: false,
        }
    }

    /// Reset to a position at rest (hole start, or out-of-bounds recovery)
    pub fn reset_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.is_moving = false;
        self.in_hole = false;
    }

    /// Apply a shot impulse; the ball is in flight until the engine stops it
    pub fn strike(&mut self, velocity: Vec2) {
        self.vel = velocity;
        self.is_moving = true;
    }

    /// Bring the ball to a complete stop
    pub fn halt(&mut self) {
        self.vel = Vec2::ZERO;
        self.is_moving = false;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}
