//! Data-driven game balance
//!
//! Every number the simulation reads lives here so a settings file can
//! override it. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a tuning table is rejected
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("paddle margin {0} leaves no court between the paddles")]
    PaddlesCross(f32),
    #[error("serve speed factor {0} outside 0.25..=0.7")]
    ServeFactor(f32),
    #[error("feint chance {0} outside 0..=1")]
    FeintChance(f64),
    #[error("patrol interval must be at least one frame")]
    PatrolInterval,
    #[error("paddle height {0} does not fit the screen")]
    PaddleTooTall(f32),
    #[error("points to win must be at least 1")]
    PointsToWin,
}

/// Physics, AI and match constants for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub ball_size: f32,
    pub ball_max_speed: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub serve_speed_factor: f32,
    pub hit_speed_base: f32,
    pub hit_speed_per_volley: f32,
    pub ai_dead_zone: f32,
    pub patrol_tolerance: f32,
    pub patrol_interval: u32,
    pub feint_chance: f64,
    pub points_to_win: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ball_size: BALL_SIZE,
            ball_max_speed: BALL_MAX_SPEED,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            player_speed: PLAYER_PADDLE_SPEED,
            enemy_speed: ENEMY_PADDLE_SPEED,
            serve_speed_factor: SERVE_SPEED_FACTOR,
            hit_speed_base: HIT_SPEED_BASE,
            hit_speed_per_volley: HIT_SPEED_PER_VOLLEY,
            ai_dead_zone: AI_DEAD_ZONE,
            patrol_tolerance: PATROL_TOLERANCE,
            patrol_interval: PATROL_INTERVAL,
            feint_chance: FEINT_CHANCE,
            points_to_win: POINTS_TO_WIN,
        }
    }
}

impl Tuning {
    /// Check every field the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("ball_size", self.ball_size),
            ("ball_max_speed", self.ball_max_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("hit_speed_base", self.hit_speed_base),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("hit_speed_per_volley", self.hit_speed_per_volley),
            ("ai_dead_zone", self.ai_dead_zone),
            ("patrol_tolerance", self.patrol_tolerance),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }
        if 2.0 * (self.paddle_margin + self.paddle_width) >= SCREEN_WIDTH {
            return Err(TuningError::PaddlesCross(self.paddle_margin));
        }
        if !(0.25..=0.7).contains(&self.serve_speed_factor) {
            return Err(TuningError::ServeFactor(self.serve_speed_factor));
        }
        if !(0.0..=1.0).contains(&self.feint_chance) {
            return Err(TuningError::FeintChance(self.feint_chance));
        }
        if self.patrol_interval == 0 {
            return Err(TuningError::PatrolInterval);
        }
        if self.paddle_height >= SCREEN_HEIGHT {
            return Err(TuningError::PaddleTooTall(self.paddle_height));
        }
        if self.points_to_win == 0 {
            return Err(TuningError::PointsToWin);
        }
        Ok(())
    }

    /// Hit acceleration as a fraction of max speed for the given volley
    pub fn hit_speed(&self, volley: u32) -> f32 {
        (self.hit_speed_base + self.hit_speed_per_volley * volley as f32).min(1.0)
    }

    /// Left edge of the enemy paddle
    pub fn enemy_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Left edge of the player paddle
    pub fn player_paddle_x(&self) -> f32 {
        SCREEN_WIDTH - self.paddle_margin - self.paddle_width
    }
}
