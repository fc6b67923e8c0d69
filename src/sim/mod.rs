//! Match simulation module
//!
//! All gameplay logic lives here. This module stays pure:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod ball;
pub mod bounce;
pub mod collision;
pub mod enemy;
pub mod geom;
pub mod paddle;
pub mod player;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bounce::{Side, VolleyTier, bounce_angle, bounce_vy};
pub use collision::{PaddleHit, is_paddle_hit, resolve_paddle_hit};
pub use enemy::{AiMode, Enemy, predict_intercept};
pub use geom::Rect;
pub use paddle::Paddle;
pub use player::{KeyEdges, Player};
pub use state::{GameEvent, MatchPhase, MatchState, MatchSummary, Turn};
pub use tick::{TickInput, tick};
