//! Space Fight entry point
//!
//! Plays a recorded match headlessly and prints how it ended.
//! Usage: `space-fight <replay.json> [settings.json]`

use std::process::ExitCode;

use space_fight::assets::{ASSET_DIR, AssetManifest};
use space_fight::audio::{AudioManager, LogBackend};
use space_fight::replay::{Replay, run_headless};
use space_fight::settings::Settings;

fn main() -> ExitCode {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(replay_path) = args.next() else {
        log::error!("usage: space-fight <replay.json> [settings.json]");
        eprintln!("usage: space-fight <replay.json> [settings.json]");
        return ExitCode::FAILURE;
    };

    let replay = match Replay::load(&replay_path) {
        Ok(replay) => replay,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = args
        .next()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    let assets = AssetManifest::scan_or_empty(ASSET_DIR);
    let audio = AudioManager::new(Box::new(LogBackend), &assets);

    let run = run_headless(replay, settings, audio, Box::new(assets));
    match run.outcome {
        Some(outcome) => println!("{} ({} ticks)", outcome.banner(), run.ticks),
        None => println!("Unfinished after {} frames", run.frames),
    }
    ExitCode::SUCCESS
}
