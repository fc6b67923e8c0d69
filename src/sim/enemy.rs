//! CPU opponent on the left
//!
//! Two modes:
//! - Track: the ball is coming. Aim for where it will cross the paddle
//!   face, mirroring the projection off the walls, with a small dead zone.
//! - Patrol: the ball is going away. Wander between random heights,
//!   stepping only every few frames so it looks less mechanical.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use super::state::Turn;
use crate::rand_range;
use crate::tuning::Tuning;

/// What the AI did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiMode {
    Track,
    Patrol,
}

/// The AI-controlled opponent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub paddle: Paddle,
    pub score: u32,
    /// Current patrol destination (paddle center Y)
    pub patrol_target: Option<f32>,
    /// Cycles 0..patrol_interval; patrol steps when it wraps to 0
    pub patrol_timer: u32,
}

impl Enemy {
    pub fn new(x: f32, center_y: f32, tuning: &Tuning) -> Self {
        Self {
            paddle: Paddle::new(
                x,
                center_y,
                tuning.paddle_width,
                tuning.paddle_height,
                tuning.enemy_speed,
            ),
            score: 0,
            patrol_target: None,
            patrol_timer: 0,
        }
    }

    /// Decide this frame's paddle velocity, then move and clamp
    pub fn think<R: Rng + ?Sized>(
        &mut self,
        ball: &Ball,
        turn: Turn,
        tuning: &Tuning,
        screen_height: f32,
        rng: &mut R,
    ) -> AiMode {
        let incoming = turn == Turn::Enemy && !ball.is_at_rest();
        let mode = if incoming { AiMode::Track } else { AiMode::Patrol };

        self.paddle.vel.y = match mode {
            AiMode::Track => {
                self.patrol_target = None;
                self.track(ball, tuning, screen_height, rng)
            }
            AiMode::Patrol => self.patrol(tuning, screen_height, rng),
        };

        self.paddle.integrate();
        self.paddle.clamp_to_screen(screen_height);
        mode
    }

    fn track<R: Rng + ?Sized>(
        &mut self,
        ball: &Ball,
        tuning: &Tuning,
        screen_height: f32,
        rng: &mut R,
    ) -> f32 {
        if tuning.feint_chance > 0.0 && rng.random_bool(tuning.feint_chance) {
            return 0.0;
        }

        let target = predict_intercept(ball, self.paddle.rect.right(), screen_height);
        let distance = (target - self.paddle.rect.center_y()).abs();
        if distance <= tuning.ai_dead_zone {
            return 0.0;
        }
        self.paddle.step_toward(target, self.paddle.speed)
    }

    fn patrol<R: Rng + ?Sized>(&mut self, tuning: &Tuning, screen_height: f32, rng: &mut R) -> f32 {
        let tick = self.patrol_timer == 0;
        self.patrol_timer = (self.patrol_timer + 1) % tuning.patrol_interval.max(1);
        if !tick {
            return 0.0;
        }

        let half = self.paddle.rect.height / 2.0;
        let target = *self.patrol_target.get_or_insert_with(|| {
            let y = rand_range(rng, half, screen_height - half).round();
            log::trace!("Enemy patrol target {y}");
            y
        });

        let center = self.paddle.rect.center_y();
        if (target - center).abs() < tuning.patrol_tolerance {
            self.patrol_target = None;
            return 0.0;
        }
        if target < center {
            -self.paddle.speed
        } else {
            self.paddle.speed
        }
    }
}

/// Ball center Y when its leading edge reaches `face_x`
///
/// Straight-line extrapolation of the current velocity, folded back into
/// the court to account for wall bounces on the way.
pub fn predict_intercept(ball: &Ball, face_x: f32, screen_height: f32) -> f32 {
    let center_y = ball.rect.center_y();
    if ball.vel.x == 0.0 {
        return center_y;
    }

    let leading_x = if ball.vel.x < 0.0 {
        ball.rect.left()
    } else {
        ball.rect.right()
    };
    let frames = (face_x - leading_x) / ball.vel.x;
    if frames <= 0.0 {
        return center_y;
    }

    let half = ball.rect.height / 2.0;
    fold(center_y + ball.vel.y * frames, half, screen_height - half)
}

/// Mirror `y` back into `[lo, hi]` as if bouncing between the bounds
fn fold(y: f32, lo: f32, hi: f32) -> f32 {
    let span = hi - lo;
    if span <= 0.0 {
        return lo;
    }
    let m = (y - lo).rem_euclid(2.0 * span);
    if m > span {
        lo + 2.0 * span - m
    } else {
        lo + m
    }
}
