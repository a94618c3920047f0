//! Recorded matches
//!
//! A replay is a seed plus the keys held on each rendered frame. Played back
//! at the fixed frame step it reproduces the match exactly.

use std::fs;
use std::path::Path;
use std::vec;

use serde::{Deserialize, Serialize};

use crate::assets::AssetCatalog;
use crate::audio::AudioManager;
use crate::consts::SIM_DT;
use crate::game::Game;
use crate::platform::{Key, KeySnapshot, KeySource, ManualClock, Platform};
use crate::renderer::TessellatingSink;
use crate::settings::Settings;
use crate::sim::MatchOutcome;

#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    #[error("cannot read replay: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed replay: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u64,
    /// Keys held during each frame
    #[serde(default)]
    pub frames: Vec<Vec<Key>>,
}

impl Replay {
    pub fn from_json_str(json: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplayError> {
        let replay = Self::from_json_str(&fs::read_to_string(path.as_ref())?)?;
        log::info!(
            "Loaded replay {:?}: seed {}, {} frames",
            path.as_ref(),
            replay.seed,
            replay.frames.len()
        );
        Ok(replay)
    }

    pub fn to_json(&self) -> Result<String, ReplayError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Key source that plays back recorded frames, then asks to quit
pub struct ReplayKeys {
    frames: vec::IntoIter<Vec<Key>>,
}

impl ReplayKeys {
    pub fn new(replay: Replay) -> Self {
        Self {
            frames: replay.frames.into_iter(),
        }
    }
}

impl KeySource for ReplayKeys {
    fn poll(&mut self) -> KeySnapshot {
        match self.frames.next() {
            Some(keys) => KeySnapshot::with_keys(keys),
            None => KeySnapshot::quit(),
        }
    }
}

/// Result of a headless playback
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessRun {
    /// `None` when the recording ran out before either ship was destroyed
    pub outcome: Option<MatchOutcome>,
    pub frames: u64,
    pub ticks: u64,
}

/// Play a replay without a window, one fixed step per frame
pub fn run_headless(
    replay: Replay,
    settings: Settings,
    audio: AudioManager,
    catalog: Box<dyn AssetCatalog>,
) -> HeadlessRun {
    let mut game = Game::new(replay.seed, settings, audio, catalog);
    let mut keys = ReplayKeys::new(replay);
    let mut clock = ManualClock::new(SIM_DT);
    let mut sink = TessellatingSink::new();

    let outcome = game.run(&mut Platform {
        keys: &mut keys,
        clock: &mut clock,
        frames: &mut sink,
    });

    HeadlessRun {
        outcome,
        frames: sink.frames_presented(),
        ticks: game.state.time_ticks,
    }
}
