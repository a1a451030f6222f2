//! Render support: camera mapping, draw-list building, frame driver
//!
//! Rendering backends live outside this crate; the sim hands them a
//! backend-agnostic draw list plus a camera for world-to-screen mapping.

pub mod camera;
pub mod scene;

pub use camera::Camera;
pub use scene::{DrawCmd, build_scene};

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameState, TickInput, tick};

/// Accumulator-based fixed-substep driver.
///
/// The host calls `advance` once per display frame with its monotonic clock;
/// the clock runs as many fixed sim ticks as the elapsed time covers, capped
/// to avoid the spiral of death on slow frames. Queued gestures are consumed
/// by the first tick of the frame.
#[derive(Debug, Default)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run sim ticks for the frame at `now` (seconds). Returns the number
    /// of ticks executed.
    pub fn advance(&mut self, now: f64, state: &mut GameState, input: &mut TickInput) -> u32 {
        let dt = match self.last_time {
            // Clamp long stalls (tab hidden, debugger) to one short frame
            Some(last) => ((now - last) as f32).clamp(0.0, 0.1),
            None => 0.0,
        };
        self.last_time = Some(now);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // One-shot input: gestures apply to exactly one tick
            input.gestures.clear();
        }
        substeps
    }
}
