//! Platform abstraction layer
//!
//! Handles browser/headless differences for:
//! - Time and one-shot timers (`FrameClock`)
//! - Input events (`InputEvent`)

pub mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::ManualClock;

use crate::sim::Direction;

/// Deferred work handed to a clock
pub type Callback = Box<dyn FnOnce()>;

/// Scheduling primitive driving the tick rate
pub trait FrameClock {
    /// Run `callback` once, `delay_ms` milliseconds from now
    fn schedule_once(&self, callback: Callback, delay_ms: u32);

    /// Monotonic timestamp in milliseconds
    fn now_ms(&self) -> f64;
}

/// Discrete player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Start, or restart after game over
    Start,
    /// Toggle pause
    Pause,
}

impl InputEvent {
    /// Map a `KeyboardEvent.code` value
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(InputEvent::MoveLeft),
            "ArrowRight" => Some(InputEvent::MoveRight),
            "ArrowUp" => Some(InputEvent::MoveUp),
            "ArrowDown" => Some(InputEvent::MoveDown),
            "KeyS" => Some(InputEvent::Start),
            "KeyP" => Some(InputEvent::Pause),
            _ => None,
        }
    }

    /// Steering direction, for the four move commands
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::Start | InputEvent::Pause => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(InputEvent::from_key_code("ArrowUp"), Some(InputEvent::MoveUp));
        assert_eq!(InputEvent::from_key_code("KeyS"), Some(InputEvent::Start));
        assert_eq!(InputEvent::from_key_code("KeyP"), Some(InputEvent::Pause));
        assert_eq!(InputEvent::from_key_code("KeyW"), None);
        assert_eq!(InputEvent::from_key_code("Space"), None);
    }

    #[test]
    fn test_directions() {
        assert_eq!(InputEvent::MoveLeft.direction(), Some(Direction::Left));
        assert_eq!(InputEvent::MoveDown.direction(), Some(Direction::Down));
        assert_eq!(InputEvent::Start.direction(), None);
        assert_eq!(InputEvent::Pause.direction(), None);
    }
}
