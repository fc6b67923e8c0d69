//! Keyboard-controlled paddle on the right

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::tuning::Tuning;

/// Edge-triggered state of one key for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEdges {
    pub pressed: bool,
    pub released: bool,
}

impl KeyEdges {
    pub const PRESS: Self = Self {
        pressed: true,
        released: false,
    };
    pub const RELEASE: Self = Self {
        pressed: false,
        released: true,
    };
}

/// The human player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub paddle: Paddle,
    pub score: u32,
}

impl Player {
    pub fn new(x: f32, center_y: f32, tuning: &Tuning) -> Self {
        Self {
            paddle: Paddle::new(
                x,
                center_y,
                tuning.paddle_width,
                tuning.paddle_height,
                tuning.player_speed,
            ),
            score: 0,
        }
    }

    /// Fold key edges into the paddle velocity
    ///
    /// A press adds the paddle speed in its direction, the matching release
    /// takes it back out, so the velocity is zero whenever no key is held.
    pub fn apply_input(&mut self, up: KeyEdges, down: KeyEdges) {
        let speed = self.paddle.speed;
        let vel = &mut self.paddle.vel.y;
        if up.pressed {
            *vel -= speed;
        } else if up.released {
            *vel += speed;
        }
        if down.pressed {
            *vel += speed;
        } else if down.released {
            *vel -= speed;
        }
    }

    /// Move by the held-key velocity and stay on screen
    pub fn update(&mut self, screen_height: f32) {
        self.paddle.integrate();
        self.paddle.clamp_to_screen(screen_height);
    }

    /// Idle-mode autopilot: follow the ball center at paddle speed
    pub fn autopilot(&mut self, ball: &Ball, screen_height: f32) {
        let step = self
            .paddle
            .step_toward(ball.rect.center_y(), self.paddle.speed)
            .round();
        self.paddle.rect.y += step;
        self.paddle.clamp_to_screen(screen_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(1190.0, 360.0, &Tuning::default())
    }

    #[test]
    fn test_press_and_release_cancel() {
        let mut p = player();
        p.apply_input(KeyEdges::PRESS, KeyEdges::default());
        assert_eq!(p.paddle.vel.y, -15.0);
        p.apply_input(KeyEdges::default(), KeyEdges::PRESS);
        assert_eq!(p.paddle.vel.y, 0.0);
        p.apply_input(KeyEdges::RELEASE, KeyEdges::default());
        assert_eq!(p.paddle.vel.y, 15.0);
        p.apply_input(KeyEdges::default(), KeyEdges::RELEASE);
        assert_eq!(p.paddle.vel.y, 0.0);
    }

    #[test]
    fn test_held_up_stops_at_top() {
        let mut p = player();
        p.apply_input(KeyEdges::PRESS, KeyEdges::default());
        for _ in 0..100 {
            p.update(720.0);
            assert!(p.paddle.rect.top() >= 0.0);
        }
        assert_eq!(p.paddle.rect.top(), 0.0);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut p = player();
        let mut ball = Ball::new(20.0, 15.0);
        ball.rect.y = 100.0;
        p.autopilot(&ball, 720.0);
        assert_eq!(p.paddle.rect.center_y(), 345.0);
    }
}
