use thiserror::Error;

use crate::audio::AudioError;
use crate::settings::SettingsError;
use crate::tuning::TuningError;

/// Anything that stops the game from starting
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_sources() {
        let err: GameError = AudioError::InvalidSampleRate(0).into();
        assert_eq!(err.to_string(), "Audio error: invalid sample rate 0 Hz");

        let err: GameError = TuningError::PointsToWin.into();
        assert!(matches!(err, GameError::Tuning(TuningError::PointsToWin)));
    }
}
