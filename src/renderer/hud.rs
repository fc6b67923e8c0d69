//! Court, paddles, ball and score display

use glam::Vec2;

use super::{FontSize, Renderer, colors};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{MatchPhase, MatchState, Rect, Side};

/// Dash length of the center net
const NET_DASH: f32 = 60.0;
/// Distance between dash starts
const NET_PERIOD: usize = 100;
const NET_WIDTH: f32 = 10.0;

/// Draw one frame of the match
pub fn draw_frame<R: Renderer + ?Sized>(state: &MatchState, r: &mut R) {
    let half_w = SCREEN_WIDTH / 2.0;
    let half_h = SCREEN_HEIGHT / 2.0;

    r.fill_rect(
        &Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
        colors::BACKGROUND,
    );

    for y in (0..SCREEN_HEIGHT as usize).step_by(NET_PERIOD) {
        let y = y as f32;
        r.stroke_line(
            Vec2::new(half_w, y),
            Vec2::new(half_w, y + NET_DASH),
            NET_WIDTH,
            colors::NET,
        );
    }

    r.fill_rect(&state.ball.rect, colors::BALL);
    r.fill_rect(&state.player.paddle.rect, colors::PADDLE);
    r.fill_rect(&state.enemy.paddle.rect, colors::PADDLE);

    r.text(
        &state.enemy.score.to_string(),
        Vec2::new(half_w - 360.0, 120.0),
        FontSize::Large,
        colors::TEXT,
    );
    r.text(
        &state.player.score.to_string(),
        Vec2::new(half_w + 360.0 - 75.0, 120.0),
        FontSize::Large,
        colors::TEXT,
    );

    match state.phase {
        MatchPhase::Paused => {
            r.text(
                "PAUSED",
                Vec2::new(half_w - 100.0, half_h - 100.0),
                FontSize::Large,
                colors::TEXT,
            );
        }
        MatchPhase::GameOver => {
            // Winner's label on the winner's half
            let (winner_x, loser_x) = match state.winner() {
                Some(Side::Player) => (half_w + 450.0, half_w - 450.0),
                _ => (half_w - 450.0, half_w + 350.0),
            };
            r.text("WINNER", Vec2::new(winner_x, half_h), FontSize::Small, colors::TEXT);
            r.text("LOSER", Vec2::new(loser_x, half_h), FontSize::Small, colors::TEXT);
        }
        MatchPhase::FirstService | MatchPhase::Playing => {}
    }
}
