//! Bounce-angle tables
//!
//! Each paddle is cut into 8 equal horizontal bands. A hit in a band sends
//! the ball off at that band's angle: flat near the middle, steep near the
//! ends. Longer volleys switch to steeper tables.
//!
//! Angles are trajectory angles in degrees; the new vertical speed is
//! `round(tan(angle) * vx)` with the already reflected `vx`. The player sits
//! on the right, so its table is the enemy's rotated by roughly 180°.

use serde::{Deserialize, Serialize};

use super::ball::deflect_vy;
use super::state::Turn;

/// Number of bands a paddle face is split into
pub const BANDS: usize = 8;

/// Which paddle was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Right paddle, keyboard controlled
    Player,
    /// Left paddle, AI controlled
    Enemy,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Player => "player",
            Side::Enemy => "enemy",
        }
    }

    /// Whose turn it is after this side returns the ball
    pub fn next_turn(&self) -> Turn {
        match self {
            Side::Player => Turn::Enemy,
            Side::Enemy => Turn::Player,
        }
    }

    /// Angle table for the given tier
    pub fn angles(&self, tier: VolleyTier) -> &'static [f32; BANDS] {
        let table = match self {
            Side::Player => &PLAYER_ANGLES,
            Side::Enemy => &ENEMY_ANGLES,
        };
        &table[tier as usize]
    }
}

/// Difficulty tier picked from the volley count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolleyTier {
    /// Volleys 0-3
    Opening = 0,
    /// Volleys 4-7
    Rally = 1,
    /// Volley 8 and up
    Long = 2,
}

impl VolleyTier {
    pub fn from_volley(volley: u32) -> Self {
        match volley {
            0..=3 => VolleyTier::Opening,
            4..=7 => VolleyTier::Rally,
            _ => VolleyTier::Long,
        }
    }
}

const ENEMY_ANGLES: [[f32; BANDS]; 3] = [
    [-45.0, -30.0, -15.0, 0.0, 0.0, 15.0, 30.0, 45.0],
    [-60.0, -45.0, -30.0, -15.0, 0.0, 0.0, 15.0, 30.0],
    [-75.0, -60.0, -45.0, -30.0, -15.0, 0.0, 15.0, 30.0],
];

const PLAYER_ANGLES: [[f32; BANDS]; 3] = [
    [-135.0, -150.0, -165.0, -180.0, -180.0, 165.0, 150.0, 135.0],
    [-150.0, -165.0, -180.0, -180.0, 165.0, 150.0, 135.0, 120.0],
    [-165.0, -180.0, -180.0, 165.0, 150.0, 135.0, 120.0, 105.0],
];

/// Band index for a hit `offset` pixels below the paddle top
///
/// Offsets above the paddle fall in band 0, offsets past its bottom in the
/// last band.
pub fn band(offset: f32, paddle_height: f32) -> usize {
    let part = paddle_height / BANDS as f32;
    if offset <= 0.0 {
        return 0;
    }
    ((offset / part).floor() as usize).min(BANDS - 1)
}

/// Bounce angle in degrees
pub fn bounce_angle(side: Side, volley: u32, band: usize) -> f32 {
    side.angles(VolleyTier::from_volley(volley))[band.min(BANDS - 1)]
}

/// New vertical speed for a hit; pure in all of its inputs
pub fn bounce_vy(side: Side, volley: u32, offset: f32, paddle_height: f32, vx: f32) -> f32 {
    deflect_vy(bounce_angle(side, volley, band(offset, paddle_height)), vx)
}
