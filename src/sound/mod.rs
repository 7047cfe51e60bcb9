//! Alarm sound playback for the countdown timer.
//!
//! This module provides the audio side of the expiry alarm:
//!
//! - A single fixed beep, synthesized at playback time
//! - Non-blocking playback
//! - Graceful degradation when audio is unavailable
//!
//! The alarm sound is intentionally not configurable; the driver pulses
//! it once per second while the alarm is active.

mod error;
mod player;

pub use error::SoundError;
pub use player::{try_create_player, RodioSoundPlayer};

/// Trait for alarm beep playback implementations.
///
/// This abstracts the sound playback functionality, allowing for
/// different implementations (e.g., rodio-based, mock for testing).
pub trait SoundPlayer {
    /// Plays one alarm beep.
    ///
    /// This method should be non-blocking; the beep plays in the
    /// background.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails.
    fn play_beep(&self) -> Result<(), SoundError>;

    /// Returns true if the audio system is available.
    fn is_available(&self) -> bool;

    /// Returns true if sound playback is disabled.
    fn is_disabled(&self) -> bool;

    /// Enables sound playback.
    fn enable(&self);

    /// Disables sound playback.
    fn disable(&self);
}

impl SoundPlayer for RodioSoundPlayer {
    fn play_beep(&self) -> Result<(), SoundError> {
        RodioSoundPlayer::play_beep(self)
    }

    fn is_available(&self) -> bool {
        RodioSoundPlayer::is_available(self)
    }

    fn is_disabled(&self) -> bool {
        RodioSoundPlayer::is_disabled(self)
    }

    fn enable(&self) {
        RodioSoundPlayer::enable(self)
    }

    fn disable(&self) {
        RodioSoundPlayer::disable(self)
    }
}

/// Mock sound player for testing.
#[derive(Debug, Default)]
pub struct MockSoundPlayer {
    beep_count: std::sync::atomic::AtomicUsize,
    available: std::sync::atomic::AtomicBool,
    disabled: std::sync::atomic::AtomicBool,
    should_fail: std::sync::atomic::AtomicBool,
}

impl MockSoundPlayer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            beep_count: std::sync::atomic::AtomicUsize::new(0),
            available: std::sync::atomic::AtomicBool::new(true),
            disabled: std::sync::atomic::AtomicBool::new(false),
            should_fail: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available
            .store(available, std::sync::atomic::Ordering::SeqCst);
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail
            .store(should_fail, std::sync::atomic::Ordering::SeqCst);
    }

    #[must_use]
    pub fn beep_count(&self) -> usize {
        self.beep_count.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn clear_beeps(&self) {
        self.beep_count.store(0, std::sync::atomic::Ordering::SeqCst);
    }
}

impl SoundPlayer for MockSoundPlayer {
    fn play_beep(&self) -> Result<(), SoundError> {
        if self.should_fail.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(SoundError::PlaybackError("Mock failure".to_string()));
        }
        if self.disabled.load(std::sync::atomic::Ordering::SeqCst) {
            return Ok(());
        }
        self.beep_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }

    fn is_available(&self) -> bool {
        self.available.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn enable(&self) {
        self.disabled
            .store(false, std::sync::atomic::Ordering::SeqCst);
    }

    fn disable(&self) {
        self.disabled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}
