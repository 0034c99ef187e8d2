//! Seeded autopilot
//!
//! Stands in for a player at the keyboard during headless runs: holds a
//! direction (or nothing) for a random number of frames, then switches.
//! Same seed, same key events.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::{InputEvent, Key};

/// Shortest and longest hold, in frames
const MIN_HOLD_FRAMES: u32 = 10;
const MAX_HOLD_FRAMES: u32 = 90;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    held: Option<Key>,
    frames_left: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            held: None,
            frames_left: 0,
        }
    }

    /// Key events for the next frame
    pub fn poll(&mut self) -> Vec<InputEvent> {
        if self.frames_left > 0 {
            self.frames_left -= 1;
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(key) = self.held.take() {
            events.push(InputEvent::KeyUp(key));
        }

        self.held = match self.rng.random_range(0..3) {
            0 => Some(Key::Left),
            1 => Some(Key::Right),
            _ => None,
        };
        if let Some(key) = self.held {
            events.push(InputEvent::KeyDown(key));
        }

        self.frames_left = self.rng.random_range(MIN_HOLD_FRAMES..=MAX_HOLD_FRAMES);
        events
    }

    /// Random frame length in `[interval - jitter, interval + jitter]`
    pub fn frame_time(&mut self, interval: f32, jitter: f32) -> f32 {
        if jitter <= 0.0 {
            return interval;
        }
        interval + self.rng.random_range(-jitter..=jitter)
    }
}
