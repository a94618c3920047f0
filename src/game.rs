//! Fixed-timestep frame driver
//!
//! Owns the match state and everything that turns platform input into ticks
//! and ticks into frames and sound.

use crate::assets::AssetCatalog;
use crate::audio::AudioManager;
use crate::consts::*;
use crate::platform::{InputTracker, KeySnapshot, Platform};
use crate::renderer::{Frame, build_frame};
use crate::settings::Settings;
use crate::sim::{GameState, MatchOutcome, Side, TickInput, tick};

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    settings: Settings,
    tracker: InputTracker,
    /// Input for the next tick; fire stays pending until a tick consumes it
    input: TickInput,
    accumulator: f32,
    audio: AudioManager,
    catalog: Box<dyn AssetCatalog>,
}

impl Game {
    pub fn new(
        seed: u64,
        settings: Settings,
        mut audio: AudioManager,
        catalog: Box<dyn AssetCatalog>,
    ) -> Self {
        audio.apply_settings(&settings);
        Self {
            state: GameState::new(seed),
            settings,
            tracker: InputTracker::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            audio,
            catalog,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Sample input and run simulation ticks; returns how many ticks ran
    pub fn update(&mut self, keys: &KeySnapshot, frame_dt: f32) -> u32 {
        let sampled = self.tracker.sample(keys);
        for side in Side::BOTH {
            let next = self.input.ship_mut(side);
            next.keys = sampled.ship(side).keys;
            next.fire |= sampled.ship(side).fire;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_one_shots();
        }
        if substeps == MAX_SUBSTEPS {
            // Running behind: drop the backlog instead of chasing it
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        let events = self.state.drain_events();
        self.audio.handle_events(&events);
        substeps
    }

    /// Draw list for the current state
    pub fn render(&self) -> Frame {
        build_frame(&self.state, self.catalog.as_ref(), &self.settings)
    }

    /// Play until quit (`None`) or until a ship is destroyed
    pub fn run(&mut self, platform: &mut Platform<'_>) -> Option<MatchOutcome> {
        log::info!("Match started (seed {})", self.state.seed);
        loop {
            let dt = platform.clock.wait_frame();
            let keys = platform.keys.poll();
            if keys.quit {
                log::info!("Quit after {} ticks", self.state.time_ticks);
                return None;
            }

            self.update(&keys, dt);
            platform.frames.present(&self.render());

            if let Some(outcome) = self.state.outcome() {
                platform.clock.hold(END_DELAY);
                return Some(outcome);
            }
        }
    }
}
