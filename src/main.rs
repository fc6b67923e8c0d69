//! Pong - headless host
//!
//! Runs an attract-mode match (both paddles computer-driven) at one tick
//! per frame and prints the final tally as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pong::audio::AudioManager;
use pong::consts::SIM_DT;
use pong::renderer::VertexBatch;
use pong::sim::{MatchSummary, TickInput};
use pong::{Difficulty, Game, GameError, Settings};

const SAMPLE_RATE: u32 = 44_100;

#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Classic Pong in attract mode", long_about = None)]
struct Cli {
    /// Settings JSON file
    #[arg(long, default_value = "pong_settings.json")]
    settings: PathBuf,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many frames even if nobody has won
    #[arg(long, default_value_t = 60 * 60 * 10)]
    max_frames: u64,

    /// Opponent difficulty: easy, normal or hard
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong (headless) starting...");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GameError> {
    let mut settings = Settings::load(&cli.settings)?;
    if let Some(difficulty) = cli.difficulty {
        settings.difficulty = difficulty;
    }
    let tuning = settings.tuning()?;
    let seed = cli.seed.or(settings.seed).unwrap_or_else(rand::random);
    log::info!(
        "Difficulty {}, enemy speed {:.1}",
        settings.difficulty.as_str(),
        tuning.enemy_speed
    );

    let mut audio = AudioManager::new(SAMPLE_RATE)?;
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);
    log::debug!("Sound bank ready at {} Hz", audio.sample_rate());

    let mut game = Game::new(tuning, seed, audio)?;
    let (width, height) = game.layout();
    log::debug!("Logical resolution {width}x{height}");

    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut batch = VertexBatch::new();
    let mut frame = 0;
    let mut uploaded = 0usize;
    while frame < cli.max_frames && !game.state.is_over() {
        if let Err(e) = game.update(&input) {
            log::warn!("Dropped sound cue: {e}");
        }
        game.audio_mut().advance(SIM_DT);

        batch.clear();
        game.draw(&mut batch);
        uploaded += batch.as_bytes().len();
        frame += 1;
    }
    log::debug!(
        "Last frame: {} triangles, {} labels; {} vertex bytes over {} frames",
        batch.triangle_count(),
        batch.labels.len(),
        uploaded,
        frame
    );

    let summary = MatchSummary::from(&game.state);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
