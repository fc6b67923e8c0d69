//! Ball vs paddle collision response
//!
//! One resolver serves both paddles; the [`Side`] picks the face the ball
//! is snapped to and the angle table used for the rebound.

use super::ball::Ball;
use super::bounce::{Side, bounce_vy};
use super::geom::Rect;
use crate::tuning::Tuning;

/// Result of a resolved paddle hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    pub side: Side,
    /// Volley count including this hit
    pub volley: u32,
    /// Vertical speed after the rebound
    pub vy: f32,
}

/// True when the ball overlaps the paddle while travelling toward its face
pub fn is_paddle_hit(ball: &Ball, paddle: &Rect, side: Side) -> bool {
    let approaching = match side {
        Side::Player => ball.vel.x > 0.0,
        Side::Enemy => ball.vel.x < 0.0,
    };
    approaching && ball.rect.overlaps(paddle)
}

/// Bounce the ball off a paddle
///
/// Snaps the ball flush against the paddle face, bumps the volley count,
/// accelerates, reflects horizontally, picks the vertical speed from the
/// side's angle table and finally caps the speed at `max_speed`.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Rect,
    side: Side,
    volley_count: &mut u32,
    tuning: &Tuning,
) -> PaddleHit {
    match side {
        Side::Player => ball.rect.set_right(paddle.left()),
        Side::Enemy => ball.rect.set_left(paddle.right()),
    }

    *volley_count += 1;
    let volley = *volley_count;

    ball.accelerate(tuning.hit_speed(volley));
    ball.normalize_speed();
    ball.vel.x = -ball.vel.x;

    let offset = ball.rect.top() - paddle.top();
    ball.vel.y = bounce_vy(side, volley, offset, paddle.height, ball.vel.x);
    ball.normalize_speed();

    PaddleHit {
        side,
        volley,
        vy: ball.vel.y,
    }
}
