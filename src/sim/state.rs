//! Match state and core simulation types
//!
//! Everything one match mutates lives in [`MatchState`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bounce::Side;
use super::enemy::Enemy;
use super::player::Player;
use crate::consts::SCREEN_HEIGHT;
use crate::tuning::Tuning;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Ball served (or about to be) and not yet returned by a paddle
    FirstService,
    /// Active rally
    Playing,
    /// Frozen by the player
    Paused,
    /// Someone reached the winning score; terminal
    GameOver,
}

/// Which side the ball is travelling toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Player,
    Enemy,
}

impl Turn {
    /// Turn implied by a horizontal velocity (enemy is on the left)
    pub fn from_vx(vx: f32) -> Self {
        if vx < 0.0 { Turn::Enemy } else { Turn::Player }
    }
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Served { turn: Turn },
    WallBounce,
    CornerBounce,
    PaddleHit { side: Side, volley: u32 },
    PointScored { scorer: Side },
    MatchWon { winner: Side },
    Paused,
    Resumed,
}

/// Complete state of one match
#[derive(Debug, Clone)]
pub struct MatchState {
    pub ball: Ball,
    pub player: Player,
    pub enemy: Enemy,
    pub phase: MatchPhase,
    pub turn: Turn,
    /// Paddle hits since the last serve
    pub volley_count: u32,
    /// Simulated frames (not counted while paused or over)
    pub frames: u64,
    pub tuning: Tuning,
    /// Phase to return to when unpausing
    pub(crate) resume_phase: MatchPhase,
    pub(crate) rng: Pcg32,
}

impl MatchState {
    /// Fresh match with the ball at rest and the first serve pending
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let center_y = SCREEN_HEIGHT / 2.0;
        Self {
            ball: Ball::new(tuning.ball_size, tuning.ball_max_speed),
            player: Player::new(tuning.player_paddle_x(), center_y, &tuning),
            enemy: Enemy::new(tuning.enemy_paddle_x(), center_y, &tuning),
            phase: MatchPhase::FirstService,
            turn: Turn::Player,
            volley_count: 0,
            frames: 0,
            tuning,
            resume_phase: MatchPhase::FirstService,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Serve a new ball; returns the resulting event
    pub fn serve(&mut self) -> GameEvent {
        self.volley_count = 0;
        self.ball.serve(&mut self.rng, self.tuning.serve_speed_factor);
        self.turn = Turn::from_vx(self.ball.vel.x);
        self.phase = MatchPhase::FirstService;
        log::debug!(
            "Serve toward {:?} at ({:.2}, {:.2})",
            self.turn,
            self.ball.vel.x,
            self.ball.vel.y
        );
        GameEvent::Served { turn: self.turn }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player.score,
            Side::Enemy => self.enemy.score,
        }
    }

    /// Winning side once the match is over
    pub fn winner(&self) -> Option<Side> {
        if self.player.score >= self.tuning.points_to_win {
            Some(Side::Player)
        } else if self.enemy.score >= self.tuning.points_to_win {
            Some(Side::Enemy)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::GameOver
    }
}

/// Final tally, printed by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub player_score: u32,
    pub enemy_score: u32,
    pub winner: Option<Side>,
    pub phase: MatchPhase,
    pub frames: u64,
}

impl From<&MatchState> for MatchSummary {
    fn from(state: &MatchState) -> Self {
        Self {
            player_score: state.player.score,
            enemy_score: state.enemy.score,
            winner: state.winner(),
            phase: state.phase,
            frames: state.frames,
        }
    }
}
