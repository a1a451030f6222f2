//! Round bookkeeping: strokes, per-hole results, score relative to par
//!
//! Mutated only on stroke-taken, penalty, and hole-complete events; finalized
//! into a `RoundSummary` for the leaderboard collaborator at round end.

use serde::{Deserialize, Serialize};

/// Result of one completed hole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole_index: usize,
    pub strokes: u32,
    pub relative_to_par: i32,
}

/// Accumulated state for the round in progress
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundState {
    pub strokes_this_hole: u32,
    pub total_strokes: u32,
    pub score_relative_to_par: i32,
    pub results: Vec<HoleResult>,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    /// One valid (non-cancelled) drag release
    pub fn record_stroke(&mut self) {
        self.strokes_this_hole += 1;
        self.total_strokes += 1;
    }

    /// Out-of-bounds / water hazard penalty: one stroke, same counters
    pub fn record_penalty(&mut self) {
        self.record_stroke();
    }

    /// Close out the current hole and append its result
    pub fn complete_hole(&mut self, hole_index: usize, par: u32) -> HoleResult {
        let strokes = self.strokes_this_hole;
        let relative_to_par = strokes as i32 - par as i32;
        self.score_relative_to_par += relative_to_par;
        self.strokes_this_hole = 0;

        let result = HoleResult {
            hole_index,
            strokes,
            relative_to_par,
        };
        self.results.push(result);
        result
    }

    pub fn holes_completed(&self) -> usize {
        self.results.len()
    }
}

/// Finalized round, handed to the leaderboard collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSummary {
    pub score_relative_to_par: i32,
    pub total_strokes: u32,
    pub results: Vec<HoleResult>,
}

impl From<&RoundState> for RoundSummary {
    fn from(round: &RoundState) -> Self {
        Self {
            score_relative_to_par: round.score_relative_to_par,
            total_strokes: round.total_strokes,
            results: round.results.clone(),
        }
    }
}
