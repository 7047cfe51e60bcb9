//! Alarm beep playback using rodio.
//!
//! The alarm sound is a fixed synthesized chime; there is nothing to
//! configure and no sound files to load.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};
use tracing::{debug, warn};

use super::error::SoundError;

/// Beep pitch in hertz.
const BEEP_FREQUENCY_HZ: f32 = 880.0;

/// Beep length in milliseconds. Short enough to repeat once per second.
const BEEP_DURATION_MS: u64 = 180;

/// Playback gain. Full-scale sine is unpleasant at alarm cadence.
const BEEP_AMPLITUDE: f32 = 0.25;

/// A sound player that uses rodio for audio playback.
///
/// This player is thread-safe and can be shared using `Arc`. Playback is
/// non-blocking; the beep continues in the background.
pub struct RodioSoundPlayer {
    /// The audio output stream (must be kept alive for playback).
    _stream: OutputStream,
    /// Handle to the output stream for creating sinks.
    stream_handle: OutputStreamHandle,
    /// Whether sound playback is disabled.
    disabled: AtomicBool,
}

impl RodioSoundPlayer {
    /// Creates a new sound player.
    ///
    /// # Arguments
    ///
    /// * `disabled` - If true, all beeps will be silently skipped.
    ///
    /// # Errors
    ///
    /// Returns `SoundError::DeviceNotAvailable` if no audio output device
    /// is available.
    pub fn new(disabled: bool) -> Result<Self, SoundError> {
        let (stream, stream_handle) = OutputStream::try_default()
            .map_err(|e| SoundError::DeviceNotAvailable(e.to_string()))?;

        debug!("Audio output stream initialized");

        Ok(Self {
            _stream: stream,
            stream_handle,
            disabled: AtomicBool::new(disabled),
        })
    }

    /// Creates a disabled sound player.
    ///
    /// All calls to `play_beep` will silently succeed without producing
    /// sound. Useful for testing.
    ///
    /// # Errors
    ///
    /// May still fail if the audio stream cannot be initialized.
    pub fn disabled() -> Result<Self, SoundError> {
        Self::new(true)
    }

    /// Plays one alarm beep.
    ///
    /// This method is non-blocking; the beep plays in the background.
    ///
    /// # Errors
    ///
    /// Returns an error if the playback sink cannot be created.
    pub fn play_beep(&self) -> Result<(), SoundError> {
        if self.disabled.load(Ordering::Relaxed) {
            debug!("Sound playback disabled, skipping beep");
            return Ok(());
        }

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| SoundError::StreamError(e.to_string()))?;

        let chime = SineWave::new(BEEP_FREQUENCY_HZ)
            .take_duration(std::time::Duration::from_millis(BEEP_DURATION_MS))
            .amplify(BEEP_AMPLITUDE);

        sink.append(chime);
        sink.detach(); // Non-blocking: beep continues after this returns

        debug!("Alarm beep started (detached)");
        Ok(())
    }

    /// Returns true if sound playback is currently disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Relaxed)
    }

    /// Enables sound playback.
    pub fn enable(&self) {
        self.disabled.store(false, Ordering::Relaxed);
        debug!("Sound playback enabled");
    }

    /// Disables sound playback.
    pub fn disable(&self) {
        self.disabled.store(true, Ordering::Relaxed);
        debug!("Sound playback disabled");
    }

    /// Returns true if the audio system is available.
    ///
    /// This always returns true if the player was successfully created,
    /// as the audio stream is initialized during construction.
    #[must_use]
    pub fn is_available(&self) -> bool {
        true
    }
}

impl std::fmt::Debug for RodioSoundPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RodioSoundPlayer")
            .field("disabled", &self.disabled.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Creates a sound player, returning None if audio is unavailable.
///
/// If audio initialization fails, a warning is logged and the timer runs
/// without sound.
#[must_use]
pub fn try_create_player(disabled: bool) -> Option<Arc<RodioSoundPlayer>> {
    match RodioSoundPlayer::new(disabled) {
        Ok(player) => Some(Arc::new(player)),
        Err(e) => {
            warn!("Audio not available, sound disabled: {}", e);
            None
        }
    }
}
