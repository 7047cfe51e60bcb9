//! Timer engine for the countdown timer.
//!
//! This module provides the core countdown functionality:
//! - State transitions (Idle → Running → Paused/Expired)
//! - Countdown with tokio::time::interval
//! - Event firing for rendering and the alarm sound
//! - Alarm pulsing once per second until silenced

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::debug;

use crate::types::{Preset, TimerError, TimerInput, TimerPhase, TimerSnapshot, TimerState};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for rendering and sound playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// Duration input changed
    Configured {
        /// New total duration in seconds
        total_seconds: u32,
    },
    /// Countdown started from idle
    Started {
        /// Configured duration in seconds
        total_seconds: u32,
    },
    /// Countdown resumed from pause
    Resumed {
        /// Remaining seconds at resume
        remaining_seconds: u32,
    },
    /// Countdown paused
    Paused {
        /// Remaining seconds at pause
        remaining_seconds: u32,
    },
    /// Timer reset to idle
    Reset,
    /// One second elapsed
    Tick {
        /// Display state after the tick
        snapshot: TimerSnapshot,
    },
    /// Countdown reached zero (fires once per run)
    Expired,
    /// Alarm is ringing; fires once per second while active
    AlarmPulse,
    /// Alarm was silenced
    AlarmStopped,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Timer engine that manages the countdown state and events.
///
/// The engine is the single source of truth for remaining time, progress,
/// and alarm status. Operations that have no defined effect in the current
/// phase return a [`TimerError`] and leave the state untouched; callers
/// treat those as no-ops.
pub struct TimerEngine {
    /// Current timer state
    state: TimerState,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new engine in idle with the given event channel.
    pub fn new(event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            state: TimerState::new(),
            event_tx,
        }
    }

    /// Sets the duration input from hour/minute/second fields.
    ///
    /// Returns the combined total in seconds. Inputs are locked from
    /// start until reset, including while paused.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InputLocked` outside of idle.
    pub fn configure(&mut self, input: TimerInput) -> Result<u32, TimerError> {
        if !self.state.inputs_unlocked() {
            return Err(TimerError::InputLocked);
        }

        self.state.set_input(input);
        let total_seconds = input.total_seconds();
        self.emit(TimerEvent::Configured { total_seconds });
        Ok(total_seconds)
    }

    /// Prefills the duration input from a preset. Never auto-starts.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InputLocked` outside of idle.
    pub fn apply_preset(&mut self, preset: &Preset) -> Result<u32, TimerError> {
        self.configure(preset.input())
    }

    /// Starts the countdown.
    ///
    /// From idle this begins a fresh run with the configured duration;
    /// from pause it resumes with the preserved remaining time.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidDuration` when starting from idle with
    /// a zero duration, and `TimerError::InvalidTransition` when already
    /// running or expired.
    pub fn start(&mut self) -> Result<(), TimerError> {
        match self.state.phase {
            TimerPhase::Idle => {
                if self.state.input.is_zero() {
                    return Err(TimerError::InvalidDuration);
                }

                self.state.begin();
                self.emit(TimerEvent::Started {
                    total_seconds: self.state.total_seconds,
                });
                Ok(())
            }
            TimerPhase::Paused => {
                self.state.resume();
                self.emit(TimerEvent::Resumed {
                    remaining_seconds: self.state.remaining_seconds,
                });
                Ok(())
            }
            phase => Err(TimerError::InvalidTransition { op: "start", phase }),
        }
    }

    /// Pauses a running countdown, preserving the remaining time.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTransition` when not running.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        if !self.state.is_running() {
            return Err(TimerError::InvalidTransition {
                op: "pause",
                phase: self.state.phase,
            });
        }

        self.state.pause();
        self.emit(TimerEvent::Paused {
            remaining_seconds: self.state.remaining_seconds,
        });
        Ok(())
    }

    /// Resets the timer to idle from any phase.
    ///
    /// Stops the countdown, silences the alarm, zeroes both counters,
    /// and unlocks the duration inputs.
    pub fn reset(&mut self) {
        self.state.reset();
        self.emit(TimerEvent::Reset);
    }

    /// Silences the alarm. The timer stays expired until reset.
    ///
    /// # Errors
    ///
    /// Returns `TimerError::InvalidTransition` when the alarm is not
    /// ringing.
    pub fn stop_alarm(&mut self) -> Result<(), TimerError> {
        if !self.state.alarm_active {
            return Err(TimerError::InvalidTransition {
                op: "stop_alarm",
                phase: self.state.phase,
            });
        }

        self.state.stop_alarm();
        self.emit(TimerEvent::AlarmStopped);
        Ok(())
    }

    /// Performs the once-per-second work.
    ///
    /// While running, decrements the countdown and fires a tick event;
    /// on reaching zero, transitions to expired and starts the alarm.
    /// While the alarm is active, fires one alarm pulse. The same call
    /// drives both, so a single timer source suffices.
    pub fn advance(&mut self) {
        if self.state.is_running() {
            let completed = self.state.tick();
            if completed {
                self.state.expire();
            }

            self.emit(TimerEvent::Tick {
                snapshot: self.snapshot(),
            });

            if completed {
                self.emit(TimerEvent::Expired);
            }
        }

        if self.state.alarm_active {
            self.emit(TimerEvent::AlarmPulse);
        }
    }

    /// Returns a display snapshot of the current state.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from_state(&self.state)
    }

    /// Returns a reference to the current timer state.
    pub fn state(&self) -> &TimerState {
        &self.state
    }

    /// Sends an event, logging instead of failing if the receiver is gone.
    fn emit(&self, event: TimerEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("event receiver dropped, discarding event");
        }
    }
}

// ============================================================================
// Tick driver
// ============================================================================

/// Drives the engine's one-second cadence.
///
/// This runs an infinite loop that advances the engine every second.
/// It should be spawned as a separate tokio task; the shared mutex
/// serializes the tick against user commands.
pub async fn run(engine: Arc<Mutex<TimerEngine>>) {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        engine.lock().await.advance();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_engine() -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(tx);
        (engine, rx)
    }

    /// Configures and starts a countdown, draining the setup events.
    fn start_engine(
        engine: &mut TimerEngine,
        rx: &mut mpsc::UnboundedReceiver<TimerEvent>,
        h: u32,
        m: u32,
        s: u32,
    ) {
        engine.configure(TimerInput::new(h, m, s)).unwrap();
        engine.start().unwrap();
        while rx.try_recv().is_ok() {}
    }

    // ------------------------------------------------------------------------
    // TimerEvent Tests
    // ------------------------------------------------------------------------

    mod timer_event_tests {
        use super::*;

        #[test]
        fn test_started_event() {
            let event = TimerEvent::Started {
                total_seconds: 1500,
            };
            assert_eq!(
                event,
                TimerEvent::Started {
                    total_seconds: 1500
                }
            );
        }

        #[test]
        fn test_paused_event() {
            let event = TimerEvent::Paused {
                remaining_seconds: 9,
            };
            assert_eq!(
                event,
                TimerEvent::Paused {
                    remaining_seconds: 9
                }
            );
        }

        #[test]
        fn test_alarm_events() {
            assert_eq!(TimerEvent::AlarmPulse, TimerEvent::AlarmPulse);
            assert_eq!(TimerEvent::AlarmStopped, TimerEvent::AlarmStopped);
        }

        #[test]
        fn test_event_clone() {
            let event = TimerEvent::Resumed {
                remaining_seconds: 42,
            };
            let cloned = event.clone();
            assert_eq!(event, cloned);
        }

        #[test]
        fn test_event_debug() {
            let event = TimerEvent::Expired;
            let debug_str = format!("{:?}", event);
            assert_eq!(debug_str, "Expired");
        }
    }

    // ------------------------------------------------------------------------
    // TimerEngine Tests
    // ------------------------------------------------------------------------

    mod timer_engine_tests {
        use super::*;

        #[test]
        fn test_new_engine() {
            let (engine, _rx) = create_engine();
            let state = engine.state();

            assert_eq!(state.phase, TimerPhase::Idle);
            assert_eq!(state.remaining_seconds, 0);
            assert_eq!(state.total_seconds, 0);
            assert!(!state.alarm_active);
        }

        #[test]
        fn test_configure() {
            let (mut engine, mut rx) = create_engine();

            let total = engine.configure(TimerInput::new(0, 25, 0)).unwrap();
            assert_eq!(total, 1500);

            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Configured {
                    total_seconds: 1500
                }
            );
        }

        #[test]
        fn test_configure_locked_while_running() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            let result = engine.configure(TimerInput::new(0, 5, 0));
            assert_eq!(result, Err(TimerError::InputLocked));

            // Input is unchanged
            assert_eq!(engine.state().input.total_seconds(), 10);
        }

        #[test]
        fn test_configure_locked_while_paused() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);
            engine.pause().unwrap();

            // Inputs stay locked until reset, even though the countdown
            // is suspended.
            let result = engine.configure(TimerInput::new(0, 5, 0));
            assert_eq!(result, Err(TimerError::InputLocked));
        }

        #[test]
        fn test_configure_unlocked_after_reset() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            engine.reset();
            assert!(engine.configure(TimerInput::new(0, 5, 0)).is_ok());
        }

        #[test]
        fn test_apply_preset_prefills_without_starting() {
            let (mut engine, mut rx) = create_engine();
            let preset = crate::types::find_preset("25m").unwrap();

            let total = engine.apply_preset(preset).unwrap();
            assert_eq!(total, 1500);
            assert_eq!(engine.state().phase, TimerPhase::Idle);
            assert_eq!(engine.state().remaining_seconds, 0);

            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Configured {
                    total_seconds: 1500
                }
            );
        }

        #[test]
        fn test_start_sets_both_counters() {
            let (mut engine, mut rx) = create_engine();

            engine.configure(TimerInput::new(1, 2, 3)).unwrap();
            let _ = rx.try_recv();

            engine.start().unwrap();

            let state = engine.state();
            assert_eq!(state.phase, TimerPhase::Running);
            assert_eq!(state.total_seconds, 3723);
            assert_eq!(state.remaining_seconds, 3723);

            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Started {
                    total_seconds: 3723
                }
            );
        }

        #[test]
        fn test_start_with_zero_duration_is_rejected() {
            let (mut engine, mut rx) = create_engine();

            engine.configure(TimerInput::new(0, 0, 0)).unwrap();
            let _ = rx.try_recv();

            let result = engine.start();
            assert_eq!(result, Err(TimerError::InvalidDuration));

            // No countdown begins and no event fires
            assert_eq!(engine.state().phase, TimerPhase::Idle);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_start_while_running_is_rejected() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            let result = engine.start();
            assert_eq!(
                result,
                Err(TimerError::InvalidTransition {
                    op: "start",
                    phase: TimerPhase::Running
                })
            );
        }

        #[test]
        fn test_pause_and_resume_preserve_remaining() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            engine.advance();
            while rx.try_recv().is_ok() {}

            engine.pause().unwrap();
            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Paused {
                    remaining_seconds: 9
                }
            );

            // Ticks while paused change nothing
            engine.advance();
            assert_eq!(engine.state().remaining_seconds, 9);
            assert!(rx.try_recv().is_err());

            // Start from pause resumes, it does not restart
            engine.start().unwrap();
            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Resumed {
                    remaining_seconds: 9
                }
            );
            assert_eq!(engine.state().remaining_seconds, 9);
            assert_eq!(engine.state().total_seconds, 10);
        }

        #[test]
        fn test_pause_when_not_running_is_rejected() {
            let (mut engine, _rx) = create_engine();

            let result = engine.pause();
            assert_eq!(
                result,
                Err(TimerError::InvalidTransition {
                    op: "pause",
                    phase: TimerPhase::Idle
                })
            );
        }

        #[test]
        fn test_double_pause_second_is_noop() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            engine.pause().unwrap();
            let result = engine.pause();

            assert!(result.is_err());
            assert_eq!(engine.state().phase, TimerPhase::Paused);
        }

        #[test]
        fn test_tick_monotonic_decrease() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 5);

            for expected in (1..5).rev() {
                engine.advance();
                assert_eq!(engine.state().remaining_seconds, expected);
            }
        }

        #[test]
        fn test_tick_emits_snapshot() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 4);

            engine.advance();

            match rx.try_recv().unwrap() {
                TimerEvent::Tick { snapshot } => {
                    assert_eq!(snapshot.remaining_seconds, 3);
                    assert_eq!(snapshot.formatted, "00:00:03");
                    assert_eq!(snapshot.progress_percent, 25);
                    assert!(snapshot.urgent);
                }
                other => panic!("Expected Tick event, got {:?}", other),
            }
        }

        #[test]
        fn test_advance_does_nothing_when_idle() {
            let (mut engine, mut rx) = create_engine();

            engine.advance();

            assert_eq!(engine.state().phase, TimerPhase::Idle);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_expiry_sequence() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 1);

            engine.advance();

            let state = engine.state();
            assert_eq!(state.phase, TimerPhase::Expired);
            assert_eq!(state.remaining_seconds, 0);
            assert!(state.alarm_active);
            assert_eq!(state.progress_percent(), 100);

            // Tick (final snapshot), then Expired, then the first pulse
            match rx.try_recv().unwrap() {
                TimerEvent::Tick { snapshot } => {
                    assert_eq!(snapshot.phase, TimerPhase::Expired);
                    assert_eq!(snapshot.formatted, "00:00:00");
                    assert_eq!(snapshot.progress_percent, 100);
                    assert!(snapshot.alarm_active);
                }
                other => panic!("Expected Tick event, got {:?}", other),
            }
            assert_eq!(rx.try_recv().unwrap(), TimerEvent::Expired);
            assert_eq!(rx.try_recv().unwrap(), TimerEvent::AlarmPulse);
        }

        #[test]
        fn test_expired_fires_once_but_alarm_repeats() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 1);

            engine.advance();
            while rx.try_recv().is_ok() {}

            // Subsequent advances pulse the alarm only
            engine.advance();
            engine.advance();

            assert_eq!(rx.try_recv().unwrap(), TimerEvent::AlarmPulse);
            assert_eq!(rx.try_recv().unwrap(), TimerEvent::AlarmPulse);
            assert!(rx.try_recv().is_err());
            assert_eq!(engine.state().remaining_seconds, 0);
        }

        #[test]
        fn test_stop_alarm_keeps_expired() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 1);

            engine.advance();
            while rx.try_recv().is_ok() {}

            engine.stop_alarm().unwrap();
            assert_eq!(rx.try_recv().unwrap(), TimerEvent::AlarmStopped);

            let state = engine.state();
            assert!(!state.alarm_active);
            assert_eq!(state.phase, TimerPhase::Expired);

            // No more pulses once silenced
            engine.advance();
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_stop_alarm_when_not_ringing_is_rejected() {
            let (mut engine, _rx) = create_engine();

            let result = engine.stop_alarm();
            assert_eq!(
                result,
                Err(TimerError::InvalidTransition {
                    op: "stop_alarm",
                    phase: TimerPhase::Idle
                })
            );
        }

        #[test]
        fn test_reset_from_expired() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 1);

            engine.advance();
            while rx.try_recv().is_ok() {}

            engine.reset();

            let state = engine.state();
            assert_eq!(state.phase, TimerPhase::Idle);
            assert_eq!(state.remaining_seconds, 0);
            assert_eq!(state.total_seconds, 0);
            assert!(!state.alarm_active);

            assert_eq!(rx.try_recv().unwrap(), TimerEvent::Reset);
        }

        #[test]
        fn test_progress_boundaries() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 4);

            // Immediately after start
            assert_eq!(engine.snapshot().progress_percent, 0);

            for _ in 0..4 {
                engine.advance();
            }

            // At expiry
            assert_eq!(engine.snapshot().progress_percent, 100);
        }

        #[test]
        fn test_scenario_five_second_countdown() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 5);

            for _ in 0..5 {
                engine.advance();
            }

            let state = engine.state();
            assert_eq!(state.phase, TimerPhase::Expired);
            assert!(state.alarm_active);
            assert_eq!(state.formatted_remaining(), "00:00:00");
        }

        #[test]
        fn test_scenario_pause_resume_no_reset() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 10);

            engine.advance();
            assert_eq!(engine.state().remaining_seconds, 9);

            engine.pause().unwrap();
            engine.advance();
            assert_eq!(engine.state().remaining_seconds, 9);

            engine.start().unwrap();
            assert_eq!(engine.state().remaining_seconds, 9);
            assert_eq!(engine.state().total_seconds, 10);
        }

        #[test]
        fn test_scenario_stop_alarm_then_reset() {
            let (mut engine, mut rx) = create_engine();
            start_engine(&mut engine, &mut rx, 0, 0, 1);

            engine.advance();

            engine.stop_alarm().unwrap();
            assert!(!engine.state().alarm_active);
            assert_eq!(engine.state().phase, TimerPhase::Expired);

            engine.reset();
            assert_eq!(engine.state().phase, TimerPhase::Idle);
            assert_eq!(engine.state().remaining_seconds, 0);
        }

        #[test]
        fn test_full_input_range_identity() {
            // configure then start sets total = remaining = h*3600+m*60+s
            let cases = [(0, 0, 1), (0, 59, 59), (23, 59, 59), (1, 0, 0)];
            for (h, m, s) in cases {
                let (mut engine, _rx) = create_engine();
                engine.configure(TimerInput::new(h, m, s)).unwrap();
                engine.start().unwrap();

                let expected = h * 3600 + m * 60 + s;
                assert_eq!(engine.state().total_seconds, expected);
                assert_eq!(engine.state().remaining_seconds, expected);
            }
        }

        #[test]
        fn test_events_survive_dropped_receiver() {
            let (mut engine, rx) = create_engine();
            drop(rx);

            // Operations must not fail when nobody is listening
            engine.configure(TimerInput::new(0, 0, 2)).unwrap();
            engine.start().unwrap();
            engine.advance();
            engine.advance();
            engine.reset();

            assert_eq!(engine.state().phase, TimerPhase::Idle);
        }
    }

    // ------------------------------------------------------------------------
    // Integration Tests with Tokio Runtime
    // ------------------------------------------------------------------------

    mod integration_tests {
        use super::*;
        use tokio::time::{timeout, Duration};

        #[tokio::test]
        async fn test_run_emits_tick_events() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let engine = Arc::new(Mutex::new(TimerEngine::new(tx)));

            {
                let mut engine = engine.lock().await;
                engine.configure(TimerInput::new(0, 1, 0)).unwrap();
                engine.start().unwrap();
            }
            while rx.try_recv().is_ok() {}

            let handle = tokio::spawn(run(engine.clone()));

            let result = timeout(Duration::from_secs(2), async {
                loop {
                    if let Ok(event) = rx.try_recv() {
                        if matches!(event, TimerEvent::Tick { .. }) {
                            return event;
                        }
                    }
                    tokio::time::sleep(Duration::from_millis(100)).await;
                }
            })
            .await;

            handle.abort();

            assert!(result.is_ok(), "Should receive at least one tick event");
        }

        #[tokio::test]
        async fn test_run_silent_when_idle() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let engine = Arc::new(Mutex::new(TimerEngine::new(tx)));

            let handle = tokio::spawn(run(engine));

            tokio::time::sleep(Duration::from_millis(1500)).await;
            handle.abort();

            assert!(
                rx.try_recv().is_err(),
                "Should not receive events when the timer is idle"
            );
        }

        #[tokio::test]
        async fn test_run_silent_when_paused() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let engine = Arc::new(Mutex::new(TimerEngine::new(tx)));

            {
                let mut engine = engine.lock().await;
                engine.configure(TimerInput::new(0, 1, 0)).unwrap();
                engine.start().unwrap();
                engine.pause().unwrap();
            }
            while rx.try_recv().is_ok() {}

            let handle = tokio::spawn(run(engine.clone()));

            tokio::time::sleep(Duration::from_millis(1500)).await;
            handle.abort();

            assert!(
                rx.try_recv().is_err(),
                "Should not receive tick events while paused"
            );
            assert_eq!(engine.lock().await.state().remaining_seconds, 60);
        }

        #[tokio::test]
        async fn test_run_tick_cadence() {
            let (tx, mut rx) = mpsc::unbounded_channel();
            let engine = Arc::new(Mutex::new(TimerEngine::new(tx)));

            {
                let mut engine = engine.lock().await;
                engine.configure(TimerInput::new(0, 1, 0)).unwrap();
                engine.start().unwrap();
            }
            while rx.try_recv().is_ok() {}

            let handle = tokio::spawn(run(engine));

            tokio::time::sleep(Duration::from_millis(3100)).await;
            handle.abort();

            let mut tick_count = 0;
            while let Ok(event) = rx.try_recv() {
                if matches!(event, TimerEvent::Tick { .. }) {
                    tick_count += 1;
                }
            }

            // ~3 ticks expected, ±1 for timing variance
            assert!(
                (2..=4).contains(&tick_count),
                "Expected ~3 ticks, got {}",
                tick_count
            );
        }
    }
}
