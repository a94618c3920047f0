//! Keyboard mapping and edge detection
//!
//! Movement is polled every frame. Fire only triggers on the frame its key
//! goes down, so holding it does not auto-fire.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::{MoveKeys, ShipInput, Side, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    LeftCtrl,
    Up,
    Down,
    Left,
    Right,
    RightCtrl,
}

/// Pressed keys for one frame, plus the window-close signal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pub pressed: HashSet<Key>,
    pub quit: bool,
}

impl KeySnapshot {
    pub fn with_keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
            quit: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            pressed: HashSet::new(),
            quit: true,
        }
    }

    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

/// Source of polled keyboard state (window/input layer)
pub trait KeySource {
    fn poll(&mut self) -> KeySnapshot;
}

/// Fixed key set for one ship
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub fire: Key,
}

impl Controls {
    pub const LEFT_SHIP: Controls = Controls {
        up: Key::W,
        down: Key::S,
        left: Key::A,
        right: Key::D,
        fire: Key::LeftCtrl,
    };

    pub const RIGHT_SHIP: Controls = Controls {
        up: Key::Up,
        down: Key::Down,
        left: Key::Left,
        right: Key::Right,
        fire: Key::RightCtrl,
    };

    pub fn for_side(side: Side) -> Controls {
        match side {
            Side::Left => Self::LEFT_SHIP,
            Side::Right => Self::RIGHT_SHIP,
        }
    }

    pub fn move_keys(&self, keys: &KeySnapshot) -> MoveKeys {
        MoveKeys {
            up: keys.is_down(self.up),
            down: keys.is_down(self.down),
            left: keys.is_down(self.left),
            right: keys.is_down(self.right),
        }
    }
}

/// Turns successive snapshots into tick input
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    fire_held: [bool; 2],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, keys: &KeySnapshot) -> TickInput {
        let mut input = TickInput::default();
        for side in Side::BOTH {
            let controls = Controls::for_side(side);
            let down = keys.is_down(controls.fire);
            let held = &mut self.fire_held[side.index()];
            *input.ship_mut(side) = ShipInput {
                keys: controls.move_keys(keys),
                fire: down && !*held,
            };
            *held = down;
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut tracker = InputTracker::new();
        let held = KeySnapshot::with_keys([Key::LeftCtrl]);

        assert!(tracker.sample(&held).ship(Side::Left).fire);
        assert!(!tracker.sample(&held).ship(Side::Left).fire);
        assert!(!tracker.sample(&KeySnapshot::default()).ship(Side::Left).fire);
        assert!(tracker.sample(&held).ship(Side::Left).fire);
    }

    #[test]
    fn test_sides_are_independent() {
        let mut tracker = InputTracker::new();
        let input = tracker.sample(&KeySnapshot::with_keys([Key::RightCtrl, Key::W, Key::Left]));
        assert!(!input.ship(Side::Left).fire);
        assert!(input.ship(Side::Right).fire);
        assert!(input.ship(Side::Left).keys.up);
        assert!(input.ship(Side::Right).keys.left);
        assert!(!input.ship(Side::Right).keys.up);
    }

    #[test]
    fn test_movement_is_level_triggered() {
        let mut tracker = InputTracker::new();
        let keys = KeySnapshot::with_keys([Key::D]);
        for _ in 0..3 {
            assert!(tracker.sample(&keys).ship(Side::Left).keys.right);
        }
    }
}
