//! Host-facing game driver
//!
//! Owns the match, runs fixed ticks from wall-clock time, turns physics
//! events into sound cues and forwards drawing to a [`Renderer`].

use crate::audio::{AudioError, AudioSink, SoundEffect};
use crate::consts::{MAX_SUBSTEPS, SCREEN_HEIGHT, SCREEN_WIDTH, SIM_DT};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{GameEvent, MatchState, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// Sound cue for a simulation event, if it makes a sound
pub fn sound_for(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallBounce | GameEvent::CornerBounce => Some(SoundEffect::Wall),
        GameEvent::PaddleHit { .. } => Some(SoundEffect::Paddle),
        GameEvent::PointScored { .. } => Some(SoundEffect::Score),
        _ => None,
    }
}

pub struct Game<A: AudioSink> {
    pub state: MatchState,
    audio: A,
    accumulator: f32,
    events: Vec<GameEvent>,
}

impl<A: AudioSink> Game<A> {
    pub fn new(tuning: Tuning, seed: u64, audio: A) -> Result<Self, TuningError> {
        tuning.validate()?;
        log::info!(
            "Match started (seed {}, first to {})",
            seed,
            tuning.points_to_win
        );
        Ok(Self {
            state: MatchState::new(tuning, seed),
            audio,
            accumulator: 0.0,
            events: Vec::new(),
        })
    }

    /// Run exactly one tick and play its cues
    pub fn update(&mut self, input: &TickInput) -> Result<(), AudioError> {
        self.events = tick(&mut self.state, input);
        for effect in self.events.iter().filter_map(sound_for) {
            self.audio.play(effect)?;
        }
        Ok(())
    }

    /// Run as many fixed ticks as `elapsed` seconds allow; returns the count
    ///
    /// One-shot inputs reach only the first tick.
    pub fn advance(&mut self, elapsed: f32, input: &TickInput) -> Result<u32, AudioError> {
        // NaN or infinite frame times count as no time passing
        let elapsed = if elapsed.is_finite() {
            elapsed.clamp(0.0, 0.1)
        } else {
            0.0
        };
        self.accumulator += elapsed;

        let mut substeps = 0;
        let mut input = *input;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.update(&input)?;
            input = input.persistent();
        }
        if substeps == MAX_SUBSTEPS {
            // Drop the backlog instead of spiralling
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        Ok(substeps)
    }

    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        draw_frame(&self.state, renderer);
    }

    /// Fixed logical resolution
    pub fn layout(&self) -> (u32, u32) {
        (SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }
}
