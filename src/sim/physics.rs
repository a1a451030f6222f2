//! Per-tick ball integration and collision response
//!
//! Advances the ball under slope, friction, and restitution rules, resolving
//! collisions against the static course model. Recovery policy for
//! out-of-bounds and water events lives in the tick driver; this module only
//! reports them.

use glam::Vec2;

use super::ball::Ball;
use super::course::{HoleDef, ObstacleKind, SurfaceType};
use crate::clamp_magnitude;
use crate::consts::{CAPTURE_MAX_SPEED, MAX_SHOT_SPEED, REFERENCE_HZ, STOP_EPSILON};

/// Events produced by a single physics tick
#[derive(Debug, Clone, Copy, Default)]
pub struct StepOutcome {
    /// Obstacle the ball bounced off this tick, if any
    pub collided: Option<ObstacleKind>,
    /// Ball left the playable boundary (caller applies penalty + reset)
    pub out_of_bounds: bool,
    /// Ball stopped on water (caller applies penalty + reset)
    pub water_hazard: bool,
    /// Ball was captured by the cup this tick
    pub captured: bool,
    /// Ball decayed below the stop threshold this tick
    pub came_to_rest: bool,
}

/// Advance the ball by one fixed timestep.
///
/// Order per tick: slope acceleration, friction, semi-implicit Euler
/// integration with substepped obstacle collision, boundary check, hazard
/// check, cup capture, rest check. A ball at rest or in the hole is never
/// touched.
pub fn step(ball: &mut Ball, hole: &HoleDef, dt: f32) -> StepOutcome {
    let mut outcome = StepOutcome::default();
    if !ball.is_moving || ball.in_hole {
        return outcome;
    }

    // Slope acceleration (flat terrain contributes nothing)
    ball.vel += hole.slope_at(ball.pos) * dt;

    // Friction opposes motion and can only shrink speed, never reverse it.
    // Coefficients are per-frame at the reference rate, so raise to the
    // dt-proportional power to stay rate-independent.
    let surface = hole.surface_at(ball.pos);
    if surface != SurfaceType::Water {
        ball.vel *= surface.friction().powf(dt * REFERENCE_HZ);
    }

    // Ramps can keep feeding speed in; cap it at the launch maximum
    ball.vel = clamp_magnitude(ball.vel, MAX_SHOT_SPEED);

    // Substepped integration so a fast ball cannot tunnel through a wall
    // thinner than one tick of travel
    let move_dist = ball.speed() * dt;
    let step_size = ball.radius * 0.5;
    let num_steps = ((move_dist / step_size).ceil() as usize).clamp(1, 20);
    let sub_dt = dt / num_steps as f32;

    for _ in 0..num_steps {
        ball.pos += ball.vel * sub_dt;

        if let Some(contact) = hole.collide_obstacle(ball.pos, ball.radius) {
            // Only reflect when moving into the surface; a ball grazing
            // along it keeps its velocity
            if ball.vel.dot(contact.normal) < 0.0 {
                ball.vel = reflect(ball.vel, contact.normal) * contact.kind.restitution();
                outcome.collided = Some(contact.kind);
            }
            // Reposition to the obstacle boundary
            ball.pos += contact.normal * (contact.penetration + 0.5);
        }
    }

    // Out of bounds: report and leave recovery to the caller
    if !hole.contains_point(ball.pos) {
        outcome.out_of_bounds = true;
        return outcome;
    }

    // Water hazard: same recovery policy as out of bounds
    if hole.surface_at(ball.pos) == SurfaceType::Water {
        outcome.water_hazard = true;
        return outcome;
    }

    // Cup capture: close enough and slow enough
    let capture_dist = hole.cup_radius - ball.radius;
    if ball.pos.distance(hole.cup) <= capture_dist && ball.speed() <= CAPTURE_MAX_SPEED {
        ball.pos = hole.cup;
        ball.in_hole = true;
        ball.halt();
        outcome.captured = true;
        return outcome;
    }

    // Rest check: clamp to exactly zero rather than letting friction
    // asymptote forever
    if ball.speed() < STOP_EPSILON {
        ball.halt();
        outcome.came_to_rest = true;
    }

    outcome
}

/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
