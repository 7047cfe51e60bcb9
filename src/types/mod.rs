//! Core data types for the countdown timer.
//!
//! This module defines the data structures used for:
//! - Timer state management (phase transitions, countdown bookkeeping)
//! - Bounded duration input (hours/minutes/seconds)
//! - Display snapshots for the front-end
//! - The read-only preset table

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Remaining-seconds threshold below which the display is emphasized.
pub const URGENT_THRESHOLD_SECS: u32 = 10;

/// Maximum configurable duration (23h 59m 59s).
pub const MAX_TOTAL_SECONDS: u32 = 23 * 3600 + 59 * 60 + 59;

// ============================================================================
// TimerPhase
// ============================================================================

/// Represents the current phase of the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    /// No countdown configured or running
    Idle,
    /// Counting down
    Running,
    /// Countdown suspended, remaining time preserved
    Paused,
    /// Countdown reached zero; stays here until reset
    Expired,
}

impl TimerPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::Idle => "idle",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Expired => "expired",
        }
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_active(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }
}

impl Default for TimerPhase {
    fn default() -> Self {
        TimerPhase::Idle
    }
}

impl fmt::Display for TimerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TimerError
// ============================================================================

/// Errors reported by timer operations.
///
/// None of these are fatal: callers log them and carry on. An operation
/// that returns an error has left the timer state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Start was requested with a total duration of zero.
    #[error("時間が設定されていません")]
    InvalidDuration,

    /// The operation has no defined effect in the current phase.
    #[error("{op}は現在の状態（{phase}）では実行できません")]
    InvalidTransition {
        /// Operation name (for logging)
        op: &'static str,
        /// Phase the timer was in
        phase: TimerPhase,
    },

    /// Duration inputs are locked between start and reset.
    #[error("カウントダウン中は時間を変更できません")]
    InputLocked,
}

// ============================================================================
// TimerInput
// ============================================================================

/// A duration entered as separate hour/minute/second fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerInput {
    /// Hours (0-23)
    pub hours: u32,
    /// Minutes (0-59)
    pub minutes: u32,
    /// Seconds (0-59)
    pub seconds: u32,
}

impl TimerInput {
    /// Creates a new input from hour/minute/second fields.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decomposes a total-seconds value into hour/minute/second fields.
    pub fn from_total(total_seconds: u32) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: (total_seconds % 3600) / 60,
            seconds: total_seconds % 60,
        }
    }

    /// Validates the input ranges.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.hours > 23 {
            return Err("時間は0-23の範囲で指定してください".to_string());
        }
        if self.minutes > 59 {
            return Err("分は0-59の範囲で指定してください".to_string());
        }
        if self.seconds > 59 {
            return Err("秒は0-59の範囲で指定してください".to_string());
        }
        Ok(())
    }

    /// Returns the total duration in seconds.
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Returns true if the total duration is zero.
    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Formats a second count as zero-padded `HH:MM:SS`.
///
/// The hours field grows beyond two digits rather than truncating.
pub fn format_hms(total_seconds: u32) -> String {
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}

// ============================================================================
// TimerState
// ============================================================================

/// Represents the current state of the countdown timer.
///
/// All transition methods are total: calling one in a phase where it has
/// no defined effect leaves the state unchanged. Guarding and error
/// reporting live in the engine layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerState {
    /// Current phase of the timer
    pub phase: TimerPhase,
    /// Configured duration of the current run, in seconds
    pub total_seconds: u32,
    /// Remaining seconds, counts down to zero
    pub remaining_seconds: u32,
    /// Whether the expiry alarm is currently ringing
    pub alarm_active: bool,
    /// Pending duration input, applied on the next start from idle
    pub input: TimerInput,
}

impl TimerState {
    /// Creates a new state in idle with zero durations.
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
            total_seconds: 0,
            remaining_seconds: 0,
            alarm_active: false,
            input: TimerInput::default(),
        }
    }

    /// Returns true if the duration inputs may be changed.
    ///
    /// Inputs unlock only in idle: they stay locked from start until
    /// reset, including while paused and after expiry.
    pub fn inputs_unlocked(&self) -> bool {
        self.phase == TimerPhase::Idle
    }

    /// Stores a new duration input. Caller must check `inputs_unlocked`.
    pub fn set_input(&mut self, input: TimerInput) {
        self.input = input;
    }

    /// Begins a fresh countdown from the pending input.
    pub fn begin(&mut self) {
        self.total_seconds = self.input.total_seconds();
        self.remaining_seconds = self.total_seconds;
        self.phase = TimerPhase::Running;
    }

    /// Resumes a paused countdown without touching the remaining time.
    pub fn resume(&mut self) {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
        }
    }

    /// Pauses a running countdown.
    pub fn pause(&mut self) {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
        }
    }

    /// Resets to idle: clears both counters and the alarm, unlocks inputs.
    ///
    /// The pending input values are kept, matching the behavior of the
    /// duration fields which retain their values across a reset.
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.total_seconds = 0;
        self.remaining_seconds = 0;
        self.alarm_active = false;
    }

    /// Decrements the countdown by one second.
    ///
    /// Returns true if the countdown has completed (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Marks the countdown as expired and starts the alarm.
    pub fn expire(&mut self) {
        self.phase = TimerPhase::Expired;
        self.remaining_seconds = 0;
        self.alarm_active = true;
    }

    /// Silences the alarm. The phase stays expired until reset.
    pub fn stop_alarm(&mut self) {
        self.alarm_active = false;
    }

    /// Returns true if the timer is actively counting down.
    pub fn is_running(&self) -> bool {
        self.phase.is_active()
    }

    /// Returns true if the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.phase == TimerPhase::Paused
    }

    /// Returns the elapsed fraction as an integer percentage (0-100).
    ///
    /// Zero when no duration is configured.
    pub fn progress_percent(&self) -> u8 {
        if self.total_seconds == 0 {
            return 0;
        }
        let elapsed = self.total_seconds - self.remaining_seconds;
        let percent = (u64::from(elapsed) * 100) / u64::from(self.total_seconds);
        percent.min(100) as u8
    }

    /// Returns true if the remaining time is low enough to emphasize.
    pub fn is_urgent(&self) -> bool {
        self.total_seconds > 0 && self.remaining_seconds <= URGENT_THRESHOLD_SECS
    }

    /// Renders the remaining time as zero-padded `HH:MM:SS`.
    pub fn formatted_remaining(&self) -> String {
        format_hms(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// A point-in-time view of the timer for rendering.
///
/// This is everything the front-end needs to draw a frame: the formatted
/// clock, the progress percentage, and the alarm/urgency flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Current phase
    pub phase: TimerPhase,
    /// Remaining seconds
    #[serde(rename = "remainingSeconds")]
    pub remaining_seconds: u32,
    /// Configured total seconds
    #[serde(rename = "totalSeconds")]
    pub total_seconds: u32,
    /// Remaining time as `HH:MM:SS`
    pub formatted: String,
    /// Elapsed fraction as an integer percentage (0-100)
    #[serde(rename = "progressPercent")]
    pub progress_percent: u8,
    /// Whether the alarm is ringing
    #[serde(rename = "alarmActive")]
    pub alarm_active: bool,
    /// Whether the remaining time should be emphasized
    pub urgent: bool,
}

impl TimerSnapshot {
    /// Creates a snapshot from the current timer state.
    pub fn from_state(state: &TimerState) -> Self {
        Self {
            phase: state.phase,
            remaining_seconds: state.remaining_seconds,
            total_seconds: state.total_seconds,
            formatted: state.formatted_remaining(),
            progress_percent: state.progress_percent(),
            alarm_active: state.alarm_active,
            urgent: state.is_urgent(),
        }
    }
}

// ============================================================================
// Presets
// ============================================================================

/// A named, predefined duration for quick selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Stable key used to select the preset from the command line
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Duration in seconds
    pub seconds: u32,
}

impl Preset {
    /// Decomposes the preset duration into hour/minute/second fields.
    pub fn input(&self) -> TimerInput {
        TimerInput::from_total(self.seconds)
    }
}

/// The built-in preset table. Read-only.
pub const PRESETS: &[Preset] = &[
    Preset {
        key: "25m",
        label: "25分",
        seconds: 25 * 60,
    },
    Preset {
        key: "5m",
        label: "5分",
        seconds: 5 * 60,
    },
    Preset {
        key: "15m",
        label: "15分",
        seconds: 15 * 60,
    },
    Preset {
        key: "1h",
        label: "1時間",
        seconds: 60 * 60,
    },
    Preset {
        key: "30m",
        label: "30分",
        seconds: 30 * 60,
    },
];

/// Looks up a preset by its key (case-insensitive).
pub fn find_preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key.eq_ignore_ascii_case(key))
}

// ============================================================================
// Tests
// ============================================================================
