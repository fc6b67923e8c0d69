//! The ball: motion, wall bounces and serving

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::{rand_range, random_choice};

/// The pong ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per frame
    pub vel: Vec2,
    pub max_speed: f32,
}

impl Ball {
    /// A ball at rest in the middle of the screen
    pub fn new(size: f32, max_speed: f32) -> Self {
        let mut rect = Rect::new(0.0, 0.0, size, size);
        rect.set_center(screen_center());
        Self {
            rect,
            vel: Vec2::ZERO,
            max_speed,
        }
    }

    /// True while a serve is pending
    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Advance one frame by the rounded velocity
    pub fn integrate(&mut self) {
        self.rect.translate(self.vel.round());
    }

    /// Reflect off the top and bottom walls
    ///
    /// Returns true when a bounce happened. The offending edge is clamped
    /// back onto the wall and the vertical velocity is negated once.
    pub fn resolve_wall_collision(&mut self, height: f32) -> bool {
        if self.rect.top() >= 0.0 && self.rect.bottom() <= height {
            return false;
        }
        if self.rect.bottom() > height {
            self.rect.set_bottom(height);
        } else {
            self.rect.set_top(0.0);
        }
        self.vel.y = -self.vel.y;
        true
    }

    /// Kick the ball out of a screen corner
    ///
    /// Checked after the wall bounce. A ball corner sitting on or past two
    /// screen edges at once is snapped onto that screen corner and both
    /// velocity components are reversed.
    pub fn resolve_corner(&mut self, width: f32, height: f32) -> bool {
        let tl = self.rect.top_left();
        let tr = self.rect.top_right();
        let bl = self.rect.bottom_left();
        let br = self.rect.bottom_right();

        if tl.x <= 0.0 && tl.y <= 0.0 {
            self.rect.set_left(0.0);
            self.rect.set_top(0.0);
        } else if tr.x >= width && tr.y <= 0.0 {
            self.rect.set_right(width);
            self.rect.set_top(0.0);
        } else if bl.x <= 0.0 && bl.y >= height {
            self.rect.set_left(0.0);
            self.rect.set_bottom(height);
        } else if br.x >= width && br.y >= height {
            self.rect.set_right(width);
            self.rect.set_bottom(height);
        } else {
            return false;
        }

        self.vel = -self.vel;
        true
    }

    /// Scale velocity down to `max_speed` when it overshoots
    pub fn normalize_speed(&mut self) {
        let speed = self.speed();
        if speed > self.max_speed {
            self.vel *= self.max_speed / speed;
        }
    }

    /// Set both components to `max_speed * amount`, keeping their signs
    pub fn accelerate(&mut self, amount: f32) {
        let sign_x = if self.vel.x < 0.0 { -1.0 } else { 1.0 };
        let sign_y = if self.vel.y < 0.0 { -1.0 } else { 1.0 };
        self.vel.x = sign_x * self.max_speed * amount;
        self.vel.y = sign_y * self.max_speed * amount;
    }

    /// Vertical speed giving a trajectory of `degrees` at the current `vel.x`
    pub fn at_angle(&self, degrees: f32) -> f32 {
        deflect_vy(degrees, self.vel.x)
    }

    /// Stop and re-center, leaving a serve pending
    pub fn reset(&mut self) {
        self.vel = Vec2::ZERO;
        self.rect.set_center(screen_center());
    }

    /// Center the ball and launch it at a reduced speed in a random direction
    ///
    /// `|vel.x|` and `|vel.y|` never exceed `max_speed * factor`, and `vel.x`
    /// is never zero.
    pub fn serve<R: Rng + ?Sized>(&mut self, rng: &mut R, factor: f32) {
        self.reset();

        let left = rand_range(rng, -1.0, -0.5);
        let right = rand_range(rng, 0.5, 1.0);
        let dir_x = random_choice(rng, left, right);
        let dir_y = rand_range(rng, -1.0, 1.0);

        let serve_speed = self.max_speed * factor;
        self.vel = Vec2::new(serve_speed * dir_x, serve_speed * dir_y);
    }
}

/// `round(tan(degrees) * vx)`
#[inline]
pub fn deflect_vy(degrees: f32, vx: f32) -> f32 {
    (degrees.to_radians().tan() * vx).round()
}

fn screen_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}
