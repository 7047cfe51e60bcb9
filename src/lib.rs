//! Countdown Timer Library
//!
//! This library provides the core functionality for the countdown timer CLI.
//! It includes:
//! - Timer engine owning the countdown state machine
//! - Interactive terminal session driving the engine
//! - CLI command parsing and display utilities
//! - Type definitions for state, snapshots, and presets
//! - Alarm sound playback

pub mod app;
pub mod cli;
pub mod engine;
pub mod sound;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    find_preset, format_hms, Preset, TimerError, TimerInput, TimerPhase, TimerSnapshot,
    TimerState, MAX_TOTAL_SECONDS, PRESETS, URGENT_THRESHOLD_SECS,
};

// Re-export engine types
pub use engine::{TimerEngine, TimerEvent};

// Re-export sound types
pub use sound::{try_create_player, MockSoundPlayer, RodioSoundPlayer, SoundError, SoundPlayer};

// Re-export the interactive session
pub use app::App;
