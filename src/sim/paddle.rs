//! Paddle body shared by the player and the enemy

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// A vertical paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Only `vel.y` is used
    pub vel: Vec2,
    /// Pixels per frame
    pub speed: f32,
}

impl Paddle {
    /// A paddle with its left edge at `x`, vertically centered on `center_y`
    pub fn new(x: f32, center_y: f32, width: f32, height: f32, speed: f32) -> Self {
        Self {
            rect: Rect::new(x, center_y - height / 2.0, width, height),
            vel: Vec2::ZERO,
            speed,
        }
    }

    /// Move by the rounded vertical velocity
    pub fn integrate(&mut self) {
        self.rect.y += self.vel.y.round();
    }

    /// Keep the paddle inside `[0, height]`
    pub fn clamp_to_screen(&mut self, height: f32) {
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
        }
        if self.rect.bottom() > height {
            self.rect.set_bottom(height);
        }
    }

    /// Signed step that brings the center toward `target_y`, at most `max_step` long
    pub fn step_toward(&self, target_y: f32, max_step: f32) -> f32 {
        let delta = target_y - self.rect.center_y();
        delta.clamp(-max_step, max_step)
    }
}
