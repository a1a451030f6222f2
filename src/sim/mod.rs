//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (demo mode; gameplay physics is RNG-free)
//! - No rendering or platform dependencies

pub mod ball;
pub mod course;
pub mod physics;
pub mod round;
pub mod shot;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use course::{
    Contact, Course, CourseError, HoleDef, Obstacle, ObstacleKind, Shape, SurfaceType, TerrainZone,
};
pub use physics::{StepOutcome, step};
pub use round::{HoleResult, RoundState, RoundSummary};
pub use shot::{Shot, ShotController};
pub use state::{GamePhase, GameState};
pub use tick::{GestureEvent, TickInput, tick};
