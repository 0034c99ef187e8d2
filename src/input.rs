//! Keyboard state sampled once per frame
//!
//! The windowing backend delivers `InputEvent`s; `InputState` folds them
//! into held-key state and a quit latch, then yields the frame's
//! `TickInput`.

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    left: bool,
    right: bool,
    quit_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Space) => self.quit_requested = true,
            InputEvent::KeyDown(Key::Left) => self.left = true,
            InputEvent::KeyDown(Key::Right) => self.right = true,
            InputEvent::KeyUp(Key::Left) => self.left = false,
            InputEvent::KeyUp(Key::Right) => self.right = false,
            InputEvent::KeyDown(_) | InputEvent::KeyUp(_) => {}
        }
    }

    pub fn apply_all(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Left beats right when both are held
    pub fn thrust(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            thrust: self.thrust(),
        }
    }
}
