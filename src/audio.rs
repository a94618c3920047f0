//! Sound cues
//!
//! Fire-and-forget: the game never waits on audio and never fails because of
//! it. Effects whose asset is missing are skipped.

use crate::assets::{AssetCatalog, names};
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Bullet fired
    Laser,
    /// Ship damaged
    Explosion,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::Laser, SoundEffect::Explosion];

    pub fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Laser => names::LASER,
            SoundEffect::Explosion => names::EXPLOSION,
        }
    }

    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BulletFired { .. } => Some(SoundEffect::Laser),
            GameEvent::ShipDamaged(_) => Some(SoundEffect::Explosion),
            GameEvent::MeteorShattered { .. } | GameEvent::MatchOver(_) => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("audio device unavailable")]
    DeviceUnavailable,
    #[error("cannot play {name}: {reason}")]
    Playback { name: String, reason: String },
}

/// Plays a sound by logical asset name
pub trait AudioBackend {
    fn play(&mut self, name: &str, volume: f32) -> Result<(), AudioError>;
}

/// Backend that only logs what it would play
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, name: &str, volume: f32) -> Result<(), AudioError> {
        log::debug!("play {name} at volume {volume:.2}");
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    available: Vec<SoundEffect>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>, catalog: &dyn AssetCatalog) -> Self {
        let available: Vec<SoundEffect> = SoundEffect::ALL
            .into_iter()
            .filter(|effect| catalog.has_sound(effect.asset_name()))
            .collect();
        if available.len() < SoundEffect::ALL.len() {
            log::warn!(
                "{} of {} sound effects missing - those cues stay silent",
                SoundEffect::ALL.len() - available.len(),
                SoundEffect::ALL.len()
            );
        }
        Self {
            backend: Some(backend),
            available,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// No backend at all
    pub fn silent() -> Self {
        Self {
            backend: None,
            available: Vec::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 || !self.available.contains(&effect) {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        if let Err(e) = backend.play(effect.asset_name(), vol) {
            log::debug!("{e}");
        }
    }

    /// Play the cues for a frame's worth of events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;

    use super::*;
    use crate::assets::{AssetManifest, NoAssets};
    use crate::sim::{HitCause, ShipHit, Side};

    #[derive(Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<(String, f32)>>>);

    impl AudioBackend for Recorder {
        fn play(&mut self, name: &str, volume: f32) -> Result<(), AudioError> {
            self.0.borrow_mut().push((name.to_string(), volume));
            Ok(())
        }
    }

    struct Broken;

    impl AudioBackend for Broken {
        fn play(&mut self, _name: &str, _volume: f32) -> Result<(), AudioError> {
            Err(AudioError::DeviceUnavailable)
        }
    }

    fn all_sounds() -> AssetManifest {
        AssetManifest::from_names([], [names::LASER, names::EXPLOSION])
    }

    fn hit() -> GameEvent {
        GameEvent::ShipDamaged(ShipHit {
            side: Side::Left,
            cause: HitCause::Bullet,
            at: Vec2::ZERO,
        })
    }

    #[test]
    fn test_events_map_to_cues() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()), &all_sounds());
        audio.handle_events(&[
            GameEvent::BulletFired { side: Side::Right },
            GameEvent::MeteorShattered { at: Vec2::ZERO },
            hit(),
        ]);
        let played: Vec<String> = recorder.0.borrow().iter().map(|(n, _)| n.clone()).collect();
        assert_eq!(played, vec![names::LASER.to_string(), names::EXPLOSION.to_string()]);
    }

    #[test]
    fn test_missing_asset_is_skipped() {
        let recorder = Recorder::default();
        let catalog = AssetManifest::from_names([], [names::LASER]);
        let mut audio = AudioManager::new(Box::new(recorder.clone()), &catalog);
        audio.play(SoundEffect::Explosion);
        audio.play(SoundEffect::Laser);
        assert_eq!(recorder.0.borrow().len(), 1);

        let mut none = AudioManager::new(Box::new(recorder.clone()), &NoAssets);
        none.play(SoundEffect::Laser);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_volume_and_mute() {
        let recorder = Recorder::default();
        let mut audio = AudioManager::new(Box::new(recorder.clone()), &all_sounds());
        audio.apply_settings(&Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        });
        audio.play(SoundEffect::Laser);
        assert_eq!(recorder.0.borrow()[0].1, 0.25);

        audio.set_muted(true);
        audio.play(SoundEffect::Laser);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn test_backend_errors_are_ignored() {
        let mut audio = AudioManager::new(Box::new(Broken), &all_sounds());
        audio.handle_events(&[hit(), hit()]);
        AudioManager::silent().play(SoundEffect::Laser);
    }
}
