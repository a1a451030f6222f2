//! Game state and the hole/round phase machine
//!
//! One `GameState` owns everything for a round: the immutable course, the
//! ball for the current hole, the shot controller, and the score. No ambient
//! singletons; the frame loop passes this around explicitly.

use glam::Vec2;

use super::ball::Ball;
use super::course::{Course, CourseError, HoleDef};
use super::round::{RoundState, RoundSummary};
use super::shot::{Shot, ShotController};

/// Current phase of play for the active hole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for a drag gesture; ball at rest
    Aiming,
    /// Ball in flight, physics active
    BallMoving,
    /// Ball stopped this tick; holed-or-next-stroke decision pending
    Settled,
    /// Cup captured the ball; waiting for the host to advance
    HoleComplete,
    /// Last hole finished; round state finalized
    RoundComplete,
}

/// Complete game state for one round
#[derive(Debug, Clone)]
pub struct GameState {
    /// Static course data, validated at construction
    pub course: Course,
    pub hole_index: usize,
    pub phase: GamePhase,
    pub ball: Ball,
    pub shot: ShotController,
    pub round: RoundState,
    /// Ball position before the current shot (out-of-bounds recovery target)
    pub(crate) pre_shot_pos: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Run seed (demo-mode aim jitter only)
    pub seed: u64,
}

impl GameState {
    /// Start a round on the given course.
    ///
    /// Fails when the course data is invalid; a hole cannot be started
    /// against undefined terrain.
    pub fn new(course: Course, seed: u64) -> Result<Self, CourseError> {
        let course = Course::new(course.holes)?;
        let tee = course.holes[0].tee;
        log::info!("Starting round: {} holes, par {}", course.len(), course.total_par());

        Ok(Self {
            course,
            hole_index: 0,
            phase: GamePhase::Aiming,
            ball: Ball::new(tee),
            shot: ShotController::new(),
            round: RoundState::new(),
            pre_shot_pos: tee,
            time_ticks: 0,
            seed,
        })
    }

    /// The hole currently being played
    pub fn current_hole(&self) -> &HoleDef {
        // hole_index is only ever set to a validated index
        &self.course.holes[self.hole_index]
    }

    /// Reset the ball on the tee of hole `index` and begin aiming
    pub fn start_hole(&mut self, index: usize) -> Result<(), CourseError> {
        let hole = self.course.hole(index).ok_or(CourseError::Empty)?;
        let tee = hole.tee;
        log::info!("Hole {}: par {}", index + 1, hole.par);

        self.hole_index = index;
        self.ball.reset_at(tee);
        self.pre_shot_pos = tee;
        self.shot.cancel();
        self.phase = GamePhase::Aiming;
        Ok(())
    }

    /// Commit a valid shot: count the stroke, launch the ball
    pub(crate) fn begin_shot(&mut self, shot: Shot) {
        self.round.record_stroke();
        self.pre_shot_pos = self.ball.pos;
        self.ball.strike(shot.launch_velocity());
        self.phase = GamePhase::BallMoving;
        log::info!(
            "Stroke {} on hole {} (power {:.0})",
            self.round.strokes_this_hole,
            self.hole_index + 1,
            shot.power
        );
    }

    /// Close out a captured hole and append its result
    pub(crate) fn finish_hole(&mut self) {
        let par = self.current_hole().par;
        let result = self.round.complete_hole(self.hole_index, par);
        self.phase = GamePhase::HoleComplete;
        log::info!(
            "Hole {} complete: {} strokes ({:+})",
            self.hole_index + 1,
            result.strokes,
            result.relative_to_par
        );
    }

    /// Host hook: move on from a completed hole.
    ///
    /// Transitions to aiming on the next hole, or to `RoundComplete` after
    /// the last one. No-op in any other phase.
    pub fn advance_hole(&mut self) {
        if self.phase != GamePhase::HoleComplete {
            return;
        }
        let next = self.hole_index + 1;
        if next < self.course.len() {
            // Indices below len are always valid
            let _ = self.start_hole(next);
        } else {
            self.phase = GamePhase::RoundComplete;
            log::info!(
                "Round complete: {} strokes, {:+} to par",
                self.round.total_strokes,
                self.round.score_relative_to_par
            );
        }
    }

    /// Finalized score for the leaderboard collaborator
    pub fn round_summary(&self) -> RoundSummary {
        RoundSummary::from(&self.round)
    }

    pub fn is_round_complete(&self) -> bool {
        self.phase == GamePhase::RoundComplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_starts_aiming_at_first_tee() {
        let state = GameState::new(Course::standard(), 7).expect("valid course");
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.hole_index, 0);
        assert_eq!(state.ball.pos, state.course.holes[0].tee);
        assert!(!state.ball.is_moving);
    }

    #[test]
    fn test_invalid_course_rejected() {
        let empty = Course { holes: vec![] };
        assert!(matches!(GameState::new(empty, 0), Err(CourseError::Empty)));
    }

    #[test]
    fn test_advance_hole_walks_the_course() {
        let mut state = GameState::new(Course::standard(), 7).expect("valid course");
        let holes = state.course.len();

        for i in 0..holes {
            assert_eq!(state.hole_index, i);
            // Pretend the hole was captured
            state.round.record_stroke();
            state.finish_hole();
            assert_eq!(state.phase, GamePhase::HoleComplete);
            state.advance_hole();
        }

        assert!(state.is_round_complete());
        assert_eq!(state.round.holes_completed(), holes);
        // advance_hole past the end stays terminal
        state.advance_hole();
        assert!(state.is_round_complete());
    }

    #[test]
    fn test_advance_hole_ignored_outside_hole_complete() {
        let mut state = GameState::new(Course::standard(), 7).expect("valid course");
        state.advance_hole();
        assert_eq!(state.phase, GamePhase::Aiming);
        assert_eq!(state.hole_index, 0);
    }

    #[test]
    fn test_start_hole_rejects_bad_index() {
        let mut state = GameState::new(Course::standard(), 7).expect("valid course");
        assert!(state.start_hole(99).is_err());
    }
}
