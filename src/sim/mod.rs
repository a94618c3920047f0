//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only (held in `GameState`)
//! - Stable iteration order
//! - No rendering, audio or platform dependencies

pub mod arena;
pub mod body;
pub mod collision;
pub mod combat;
pub mod meteor;
pub mod particles;
pub mod projectile;
pub mod shake;
pub mod state;
pub mod tick;

pub use arena::{Arena, Side};
pub use body::{Body, MoveKeys};
pub use collision::Rect;
pub use meteor::Meteor;
pub use particles::{Burst, Particle, ParticleSystem, Tint};
pub use projectile::{Bullet, fire};
pub use shake::ScreenShake;
pub use state::{GameEvent, GameState, HitCause, MatchOutcome, MatchPhase, Ship, ShipHit};
pub use tick::{ShipInput, TickInput, tick};
