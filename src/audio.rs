//! Audio system
//!
//! Procedurally generated sound effects - no external files needed!
//! Each cue is synthesized once into a sample buffer at startup; the host
//! pulls mixed samples with [`AudioManager::mix_into`].

use std::f32::consts::TAU;

use thiserror::Error;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits top or bottom wall
    Wall,
    /// Ball hits a paddle
    Paddle,
    /// Someone scored
    Score,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Wall, SoundEffect::Paddle, SoundEffect::Score];

    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Wall => "wall",
            SoundEffect::Paddle => "paddle",
            SoundEffect::Score => "score",
        }
    }

    /// Synthesis parameters for this cue
    fn tone(&self) -> Tone {
        match self {
            // Higher ping
            SoundEffect::Wall => Tone {
                start_hz: 400.0,
                end_hz: 400.0,
                duration: 0.08,
                gain: 0.3,
            },
            // Solid thump
            SoundEffect::Paddle => Tone {
                start_hz: 150.0,
                end_hz: 60.0,
                duration: 0.1,
                gain: 0.6,
            },
            // Falling sweep
            SoundEffect::Score => Tone {
                start_hz: 600.0,
                end_hz: 150.0,
                duration: 0.4,
                gain: 0.5,
            },
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AudioError {
    #[error("no clip loaded for sound '{0}'")]
    MissingClip(&'static str),
    #[error("invalid sample rate {0} Hz")]
    InvalidSampleRate(u32),
    #[error("sound '{0}' synthesized to an empty clip")]
    EmptyClip(&'static str),
}

/// Anything that can play sound cues
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError>;
}

/// Exponential frequency sweep with an exponential decay envelope
#[derive(Debug, Clone, Copy)]
struct Tone {
    start_hz: f32,
    end_hz: f32,
    duration: f32,
    gain: f32,
}

impl Tone {
    fn synthesize(&self, sample_rate: u32) -> Vec<f32> {
        let len = (self.duration * sample_rate as f32) as usize;
        let rate = sample_rate as f32;
        let mut phase = 0.0f32;
        (0..len)
            .map(|i| {
                let t = i as f32 / len as f32;
                let freq = self.start_hz * (self.end_hz / self.start_hz).powf(t);
                // Decay to 1% like an exponential ramp to 0.01
                let env = self.gain * 0.01f32.powf(t);
                phase = (phase + TAU * freq / rate) % TAU;
                phase.sin() * env
            })
            .collect()
    }
}

/// One synthesized cue and its playback cursor
#[derive(Debug, Clone)]
struct Clip {
    effect: SoundEffect,
    samples: Vec<f32>,
    /// `None` when idle
    cursor: Option<usize>,
}

impl Clip {
    fn is_playing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Play from the first sample
    fn restart(&mut self) {
        self.cursor = Some(0);
    }

    /// Move the cursor forward, stopping at the end
    fn skip(&mut self, frames: usize) {
        if let Some(pos) = self.cursor {
            let next = pos + frames;
            self.cursor = (next < self.samples.len()).then_some(next);
        }
    }
}

/// Audio manager for the game
#[derive(Debug)]
pub struct AudioManager {
    sample_rate: u32,
    clips: Vec<Clip>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    /// Build the full sound bank
    pub fn new(sample_rate: u32) -> Result<Self, AudioError> {
        Self::with_bank(sample_rate, &SoundEffect::ALL)
    }

    /// Build a bank holding only `effects`
    pub fn with_bank(sample_rate: u32, effects: &[SoundEffect]) -> Result<Self, AudioError> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate(sample_rate));
        }
        let clips = effects
            .iter()
            .map(|&effect| {
                let samples = effect.tone().synthesize(sample_rate);
                if samples.is_empty() {
                    return Err(AudioError::EmptyClip(effect.name()));
                }
                Ok(Clip {
                    effect,
                    samples,
                    cursor: None,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!("Synthesized {} sound clips at {} Hz", clips.len(), sample_rate);
        Ok(Self {
            sample_rate,
            clips,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        })
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn is_playing(&self, effect: SoundEffect) -> bool {
        self.clips
            .iter()
            .any(|c| c.effect == effect && c.is_playing())
    }

    /// Move every playing clip forward by `seconds`
    pub fn advance(&mut self, seconds: f32) {
        let frames = (seconds.max(0.0) * self.sample_rate as f32) as usize;
        for clip in &mut self.clips {
            clip.skip(frames);
        }
    }

    /// Mix playing clips into `out` (mono) and advance past them
    pub fn mix_into(&mut self, out: &mut [f32]) {
        let vol = self.effective_volume();
        out.fill(0.0);
        for clip in self.clips.iter_mut() {
            let Some(pos) = clip.cursor else { continue };
            let end = (pos + out.len()).min(clip.samples.len());
            for (o, s) in out.iter_mut().zip(&clip.samples[pos..end]) {
                *o += s * vol;
            }
            clip.skip(out.len());
        }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, effect: SoundEffect) -> Result<(), AudioError> {
        if self.effective_volume() <= 0.0 {
            return Ok(());
        }
        let clip = self
            .clips
            .iter_mut()
            .find(|c| c.effect == effect)
            .ok_or(AudioError::MissingClip(effect.name()))?;
        if clip.is_playing() {
            return Ok(());
        }
        clip.restart();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 44_100;

    #[test]
    fn test_bank_has_every_cue() {
        let audio = AudioManager::new(RATE).unwrap();
        assert_eq!(audio.clips.len(), 3);
        let paddle = audio
            .clips
            .iter()
            .find(|c| c.effect == SoundEffect::Paddle)
            .unwrap();
        assert_eq!(paddle.samples.len(), 4410);
        assert!(paddle.samples.iter().all(|s| s.abs() <= 0.6));
    }

    #[test]
    fn test_reports_sample_rate() {
        assert_eq!(AudioManager::new(22_050).unwrap().sample_rate(), 22_050);
    }

    #[test]
    fn test_invalid_sample_rate() {
        assert_eq!(
            AudioManager::new(0).unwrap_err(),
            AudioError::InvalidSampleRate(0)
        );
    }

    #[test]
    fn test_empty_clip_is_rejected() {
        // 0.08 s at 5 Hz rounds down to zero samples
        assert_eq!(
            AudioManager::new(5).unwrap_err(),
            AudioError::EmptyClip("wall")
        );
    }

    #[test]
    fn test_missing_clip() {
        let mut audio = AudioManager::with_bank(RATE, &[SoundEffect::Wall]).unwrap();
        assert!(audio.play(SoundEffect::Wall).is_ok());
        assert_eq!(
            audio.play(SoundEffect::Score),
            Err(AudioError::MissingClip("score"))
        );
    }

    #[test]
    fn test_replay_while_playing_is_noop() {
        let mut audio = AudioManager::new(RATE).unwrap();
        audio.play(SoundEffect::Score).unwrap();
        audio.advance(0.1);
        let cursor = audio.clips[2].cursor;
        assert_eq!(cursor, Some(4410));

        audio.play(SoundEffect::Score).unwrap();
        assert_eq!(audio.clips[2].cursor, cursor);
    }

    #[test]
    fn test_finished_clip_restarts() {
        let mut audio = AudioManager::new(RATE).unwrap();
        audio.play(SoundEffect::Wall).unwrap();
        audio.advance(1.0);
        assert!(!audio.is_playing(SoundEffect::Wall));

        audio.play(SoundEffect::Wall).unwrap();
        assert_eq!(audio.clips[0].cursor, Some(0));
    }

    #[test]
    fn test_muted_play_does_nothing() {
        let mut audio = AudioManager::new(RATE).unwrap();
        audio.set_muted(true);
        audio.play(SoundEffect::Paddle).unwrap();
        assert!(!audio.is_playing(SoundEffect::Paddle));
    }

    #[test]
    fn test_mix_scales_by_volume() {
        let mut loud = AudioManager::new(RATE).unwrap();
        let mut quiet = AudioManager::new(RATE).unwrap();
        quiet.set_master_volume(0.4);
        loud.play(SoundEffect::Paddle).unwrap();
        quiet.play(SoundEffect::Paddle).unwrap();

        let mut a = [0.0f32; 64];
        let mut b = [0.0f32; 64];
        loud.mix_into(&mut a);
        quiet.mix_into(&mut b);
        for (x, y) in a.iter().zip(&b) {
            assert!((x * 0.5 - y).abs() < 1e-6);
        }
        assert_eq!(loud.clips[1].cursor, Some(64));
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioManager::new(RATE).unwrap();
        audio.set_master_volume(3.0);
        audio.set_sfx_volume(-1.0);
        assert_eq!(audio.master_volume, 1.0);
        assert_eq!(audio.sfx_volume, 0.0);
        assert_eq!(audio.effective_volume(), 0.0);
    }
}
