//! Per-frame simulation step
//!
//! Order within a frame: serve, move ball, walls and corners, paddles,
//! score, player paddle, enemy AI. Bounds are enforced as each paddle moves.

use serde::{Deserialize, Serialize};

use super::bounce::Side;
use super::collision::{is_paddle_hit, resolve_paddle_hit};
use super::player::KeyEdges;
use super::state::{GameEvent, MatchPhase, MatchState};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: KeyEdges,
    pub down: KeyEdges,
    /// Pause toggle
    pub pause: bool,
    /// Idle/demo mode - the player paddle follows the ball on its own
    pub idle_mode: bool,
}

impl TickInput {
    /// Strip one-shot edges, keeping persistent modes
    pub fn persistent(&self) -> Self {
        Self {
            idle_mode: self.idle_mode,
            ..Default::default()
        }
    }
}

/// Advance the match by one frame, returning what happened
pub fn tick(state: &mut MatchState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Key edges always count so held keys stay balanced across pauses
    state.player.apply_input(input.up, input.down);

    if input.pause {
        match state.phase {
            MatchPhase::Playing | MatchPhase::FirstService => {
                state.resume_phase = state.phase;
                state.phase = MatchPhase::Paused;
                events.push(GameEvent::Paused);
                return events;
            }
            MatchPhase::Paused => {
                state.phase = state.resume_phase;
                events.push(GameEvent::Resumed);
            }
            MatchPhase::GameOver => {}
        }
    }

    if matches!(state.phase, MatchPhase::Paused | MatchPhase::GameOver) {
        return events;
    }

    state.frames += 1;

    if state.phase == MatchPhase::FirstService && state.ball.is_at_rest() {
        events.push(state.serve());
    }

    state.ball.integrate();
    if state.ball.resolve_wall_collision(SCREEN_HEIGHT) {
        events.push(GameEvent::WallBounce);
    }
    if state.ball.resolve_corner(SCREEN_WIDTH, SCREEN_HEIGHT) {
        events.push(GameEvent::CornerBounce);
    }

    for side in [Side::Player, Side::Enemy] {
        let paddle = match side {
            Side::Player => state.player.paddle.rect,
            Side::Enemy => state.enemy.paddle.rect,
        };
        if is_paddle_hit(&state.ball, &paddle, side) {
            let hit = resolve_paddle_hit(
                &mut state.ball,
                &paddle,
                side,
                &mut state.volley_count,
                &state.tuning,
            );
            state.turn = side.next_turn();
            state.phase = MatchPhase::Playing;
            log::debug!(
                "{} return #{} -> vel ({:.2}, {:.2})",
                side.as_str(),
                hit.volley,
                state.ball.vel.x,
                hit.vy
            );
            events.push(GameEvent::PaddleHit {
                side,
                volley: hit.volley,
            });
            break;
        }
    }

    if let Some(scorer) = check_score(state) {
        events.push(GameEvent::PointScored { scorer });
        log::info!(
            "Point {}: enemy {} - player {}",
            scorer.as_str(),
            state.enemy.score,
            state.player.score
        );

        if state.score(scorer) >= state.tuning.points_to_win {
            state.phase = MatchPhase::GameOver;
            state.ball.vel = glam::Vec2::ZERO;
            log::info!("Game over, {} wins", scorer.as_str());
            events.push(GameEvent::MatchWon { winner: scorer });
            return events;
        }

        events.push(state.serve());
    }

    if input.idle_mode {
        state.player.autopilot(&state.ball, SCREEN_HEIGHT);
    } else {
        state.player.update(SCREEN_HEIGHT);
    }

    state.enemy.think(
        &state.ball,
        state.turn,
        &state.tuning,
        SCREEN_HEIGHT,
        &mut state.rng,
    );

    events
}

/// Award a point when the ball reaches a side edge; at most one per frame
fn check_score(state: &mut MatchState) -> Option<Side> {
    let scorer = if state.ball.rect.left() <= 0.0 {
        Side::Player
    } else if state.ball.rect.right() >= SCREEN_WIDTH {
        Side::Enemy
    } else {
        return None;
    };

    match scorer {
        Side::Player => state.player.score += 1,
        Side::Enemy => state.enemy.score += 1,
    }
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Turn;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn calm_state(seed: u64) -> MatchState {
        let tuning = Tuning {
            feint_chance: 0.0,
            ..Default::default()
        };
        MatchState::new(tuning, seed)
    }

    fn count_points(events: &[GameEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::PointScored { .. }))
            .count()
    }

    #[test]
    fn test_first_tick_serves() {
        let mut state = calm_state(12345);
        let events = tick(&mut state, &TickInput::default());

        assert!(matches!(events[0], GameEvent::Served { .. }));
        assert_eq!(state.phase, MatchPhase::FirstService);
        assert!(!state.ball.is_at_rest());
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_player_scores_when_ball_exits_left() {
        let mut state = calm_state(1);
        state.phase = MatchPhase::Playing;
        state.ball.rect.x = 0.0;
        state.ball.rect.set_center(Vec2::new(state.ball.rect.center_x(), 360.0));
        state.ball.vel = Vec2::new(-5.0, 0.0);
        state.turn = Turn::Enemy;

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.player.score, 1);
        assert_eq!(state.enemy.score, 0);
        assert_eq!(count_points(&events), 1);
        assert_eq!(state.phase, MatchPhase::FirstService);
        assert_eq!(state.ball.rect.center(), Vec2::new(640.0, 360.0));
        assert!(state.ball.vel.x != 0.0);
        assert_eq!(state.volley_count, 0);
    }

    #[test]
    fn test_enemy_scores_when_ball_exits_right() {
        let mut state = calm_state(1);
        state.phase = MatchPhase::Playing;
        state.ball.rect.set_right(1275.0);
        state.ball.rect.y = 100.0;
        state.ball.vel = Vec2::new(8.0, 0.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.enemy.score, 1);
        assert_eq!(count_points(&events), 1);
    }

    #[test]
    fn test_winning_point_ends_match() {
        let mut state = calm_state(1);
        state.phase = MatchPhase::Playing;
        state.player.score = 9;
        state.ball.rect.x = 2.0;
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.player.score, 10);
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(
            events.last(),
            Some(&GameEvent::MatchWon {
                winner: Side::Player
            })
        );
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = calm_state(1);
        state.phase = MatchPhase::GameOver;
        state.enemy.score = 10;
        state.ball.vel = Vec2::new(5.0, 5.0);
        let ball = state.ball.rect;
        let enemy = state.enemy.paddle.rect;
        let player = state.player.paddle.rect;

        for _ in 0..30 {
            let events = tick(&mut state, &TickInput::default());
            assert!(events.is_empty());
        }
        // Pause toggle does nothing either
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );

        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(state.ball.rect, ball);
        assert_eq!(state.enemy.paddle.rect, enemy);
        assert_eq!(state.player.paddle.rect, player);
        assert_eq!(state.enemy.score, 10);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.frames, 0);
    }

    #[test]
    fn test_pause_freezes_and_resumes() {
        let mut state = calm_state(99);
        tick(&mut state, &TickInput::default());
        state.phase = MatchPhase::Playing;
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };

        let events = tick(&mut state, &pause);
        assert_eq!(events, vec![GameEvent::Paused]);
        assert_eq!(state.phase, MatchPhase::Paused);

        let frozen = state.ball.rect;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.ball.rect, frozen);

        let events = tick(&mut state, &pause);
        assert_eq!(events[0], GameEvent::Resumed);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_ne!(state.ball.rect, frozen);
    }

    #[test]
    fn test_key_release_during_pause_is_not_lost() {
        let mut state = calm_state(5);
        let press_up = TickInput {
            up: KeyEdges::PRESS,
            ..Default::default()
        };
        tick(&mut state, &press_up);
        tick(
            &mut state,
            &TickInput {
                pause: true,
                ..Default::default()
            },
        );
        tick(
            &mut state,
            &TickInput {
                up: KeyEdges::RELEASE,
                ..Default::default()
            },
        );
        assert_eq!(state.player.paddle.vel.y, 0.0);
    }

    #[test]
    fn test_enemy_return_uses_top_band_angle() {
        let mut state = calm_state(4);
        state.phase = MatchPhase::Playing;
        state.turn = Turn::Enemy;
        // Enemy paddle spans y 305..415 at x 70..90; arrive overlapping its top eighth
        state.ball.rect.x = 95.0;
        state.ball.rect.y = 300.0;
        state.ball.vel = Vec2::new(-8.0, 0.0);

        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::PaddleHit {
            side: Side::Enemy,
            volley: 1
        }));
        assert!(state.ball.vel.x > 0.0);
        let expected = ((-45.0f32).to_radians().tan() * state.ball.vel.x).round();
        assert_eq!(state.ball.vel.y, expected);
        assert_eq!(state.phase, MatchPhase::Playing);
        assert_eq!(state.turn, Turn::Player);
        assert_eq!(state.player.score + state.enemy.score, 0);
    }

    /// Send the ball into the player paddle (y 305..415) with its top at
    /// `ball_top`, after `volley_before` returns in this rally
    fn player_return(volley_before: u32, ball_top: f32) -> (MatchState, Vec<GameEvent>) {
        let mut state = calm_state(9);
        state.phase = MatchPhase::Playing;
        state.turn = Turn::Player;
        state.volley_count = volley_before;
        state.ball.rect.set_right(1185.0);
        state.ball.rect.y = ball_top;
        state.ball.vel = Vec2::new(8.0, 0.0);
        let events = tick(&mut state, &TickInput::default());
        (state, events)
    }

    #[test]
    fn test_player_return_in_rally_tier() {
        // Fourth return, band 1 (offset 20): -165 degrees
        let (state, events) = player_return(3, 325.0);

        assert!(events.contains(&GameEvent::PaddleHit {
            side: Side::Player,
            volley: 4
        }));
        assert!(state.ball.vel.x < 0.0);
        assert!(state.ball.speed() <= state.ball.max_speed);
        let expected = ((-165.0f32).to_radians().tan() * state.ball.vel.x).round();
        assert_eq!(state.ball.vel.y, expected);
        assert_eq!(state.ball.vel.y, -3.0);
        assert_eq!(state.turn, Turn::Enemy);
    }

    #[test]
    fn test_player_return_in_long_tier() {
        // Eighth return, band 3 (offset 45): 165 degrees
        let (state, events) = player_return(7, 350.0);

        assert!(events.contains(&GameEvent::PaddleHit {
            side: Side::Player,
            volley: 8
        }));
        assert!(state.ball.vel.x < 0.0);
        let expected = (165.0f32.to_radians().tan() * state.ball.vel.x).round();
        assert_eq!(state.ball.vel.y, expected);
        assert_eq!(state.ball.vel.y, 3.0);
        assert_eq!(state.volley_count, 8);
    }

    #[test]
    fn test_paddle_clamped_at_top() {
        let mut state = calm_state(8);
        state.player.paddle.rect.set_top(0.0);
        let press_up = TickInput {
            up: KeyEdges::PRESS,
            ..Default::default()
        };
        tick(&mut state, &press_up);
        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
            assert_eq!(state.player.paddle.rect.top(), 0.0);
        }
    }

    #[test]
    fn test_scores_never_double_count() {
        let mut state = calm_state(2024);
        let input = TickInput {
            idle_mode: false,
            ..Default::default()
        };
        let mut points = 0;
        for _ in 0..20_000 {
            let before = state.player.score + state.enemy.score;
            let events = tick(&mut state, &input);
            let after = state.player.score + state.enemy.score;
            assert_eq!((after - before) as usize, count_points(&events));
            assert!(after - before <= 1);
            points += count_points(&events);
            if state.is_over() {
                break;
            }
        }
        assert_eq!(points as u32, state.player.score + state.enemy.score);
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = calm_state(777);
        let mut b = calm_state(777);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        for _ in 0..2_000 {
            tick(&mut a, &input);
            tick(&mut b, &input);
        }
        assert_eq!(a.ball.rect, b.ball.rect);
        assert_eq!(a.player.score, b.player.score);
        assert_eq!(a.enemy.score, b.enemy.score);
    }
}
