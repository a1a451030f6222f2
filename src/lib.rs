//! Golf Chaos - a casual 2D physics golf game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (course model, ball physics, shot
//!   controller, hole/round state machine)
//! - `render`: Backend-agnostic camera mapping and draw-list building
//! - `leaderboard`: Online leaderboard wire types and local top-10 mirror
//! - `assets`: Stable logical sprite names

pub mod assets;
pub mod leaderboard;
pub mod render;
pub mod sim;

pub use leaderboard::Leaderboard;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Friction table values are expressed per-frame at this reference rate
    pub const REFERENCE_HZ: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Speed below which the ball is considered at rest (px/s)
    pub const STOP_EPSILON: f32 = 4.0;
    /// Maximum speed at which the cup can still capture the ball (px/s)
    pub const CAPTURE_MAX_SPEED: f32 = 140.0;

    /// Cup defaults
    pub const CUP_RADIUS: f32 = 18.0;

    /// Drag-to-shot mapping
    pub const MIN_DRAG_DISTANCE: f32 = 12.0;
    pub const MAX_DRAG_DISTANCE: f32 = 180.0;
    pub const MAX_SHOT_SPEED: f32 = 900.0;
    pub const POWER_SCALE: f32 = MAX_SHOT_SPEED / MAX_DRAG_DISTANCE;

    /// Down-slope acceleration applied while the ball is on a ramp (px/s²)
    pub const RAMP_ACCEL: f32 = 220.0;
}

/// Normalized direction from `from` toward `to`.
///
/// Convention: returns `Vec2::ZERO` when the points coincide (zero-length
/// input), so callers never see a NaN direction.
#[inline]
pub fn direction_or_zero(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Clamp a vector's magnitude to `max` without changing its direction
#[inline]
pub fn clamp_magnitude(v: Vec2, max: f32) -> Vec2 {
    let len = v.length();
    if len > max { v * (max / len) } else { v }
}

/// Signed angle from `a` to `b` in radians, in [-π, π]
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b).atan2(a.dot(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_direction_or_zero_degenerate() {
        let p = Vec2::new(40.0, -12.0);
        assert_eq!(direction_or_zero(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_direction_or_zero_unit_length() {
        let d = direction_or_zero(Vec2::ZERO, Vec2::new(30.0, 40.0));
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!((d.x - 0.6).abs() < 1e-6);
        assert!((d.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_magnitude() {
        let v = Vec2::new(300.0, 400.0);
        let clamped = clamp_magnitude(v, 100.0);
        assert!((clamped.length() - 100.0).abs() < 1e-3);
        // Direction preserved
        assert!(clamped.normalize().dot(v.normalize()) > 0.999);
        // Short vectors pass through untouched
        let short = Vec2::new(3.0, 4.0);
        assert_eq!(clamp_magnitude(short, 100.0), short);
    }

    #[test]
    fn test_angle_between() {
        let right = Vec2::X;
        let up = Vec2::Y;
        assert!((angle_between(right, up) - FRAC_PI_2).abs() < 1e-6);
        assert!((angle_between(up, right) + FRAC_PI_2).abs() < 1e-6);
        assert!(angle_between(right, right).abs() < 1e-6);
    }
}
