//! Interactive countdown session.
//!
//! This module is the front-end driver for the timer engine:
//! - Spawns the one-second tick task
//! - Maps stdin commands to engine operations
//! - Renders engine events (countdown line, confirmations, expiry)
//! - Pulses the alarm sound while the alarm is active

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, warn};

use crate::cli::{Display, StartArgs};
use crate::engine::{self, TimerEngine, TimerEvent};
use crate::sound::{try_create_player, SoundPlayer};
use crate::types::{find_preset, Preset, TimerError, TimerInput};

// ============================================================================
// SessionCommand
// ============================================================================

/// A parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SessionCommand {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset the timer to idle
    Reset,
    /// Silence the alarm
    Mute,
    /// Change the duration input
    Set(TimerInput),
    /// Prefill the duration input from a preset
    Preset(&'static Preset),
    /// End the session
    Quit,
    /// Empty line
    Noop,
}

impl SessionCommand {
    /// Parses one line of input.
    ///
    /// Returns a user-facing message for unknown or malformed commands.
    fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Ok(SessionCommand::Noop);
        };

        match word {
            "start" | "s" => Ok(SessionCommand::Start),
            "pause" | "p" => Ok(SessionCommand::Pause),
            "reset" | "r" => Ok(SessionCommand::Reset),
            "mute" | "m" => Ok(SessionCommand::Mute),
            "quit" | "q" | "exit" => Ok(SessionCommand::Quit),
            "set" => {
                let fields: Vec<&str> = parts.collect();
                if fields.len() != 3 {
                    return Err("使い方: set <時> <分> <秒>".to_string());
                }

                let mut values = [0u32; 3];
                for (slot, field) in values.iter_mut().zip(&fields) {
                    *slot = field
                        .parse()
                        .map_err(|_| format!("数値を指定してください: {}", field))?;
                }

                let input = TimerInput::new(values[0], values[1], values[2]);
                input.validate()?;
                Ok(SessionCommand::Set(input))
            }
            "preset" => {
                let fields: Vec<&str> = parts.collect();
                if fields.len() != 1 {
                    return Err("使い方: preset <キー>".to_string());
                }

                find_preset(fields[0]).map(SessionCommand::Preset).ok_or_else(|| {
                    format!(
                        "不明なプリセットです: {}（countdown presets で一覧を表示）",
                        fields[0]
                    )
                })
            }
            other => Err(format!(
                "不明なコマンドです: {}（start / pause / reset / mute / set / preset / quit）",
                other
            )),
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// The interactive countdown session.
pub struct App {
    /// Shared timer engine, also locked by the tick task
    engine: Arc<Mutex<TimerEngine>>,
    /// Engine event receiver
    events: mpsc::UnboundedReceiver<TimerEvent>,
    /// Alarm sound player, absent when audio is unavailable
    sound: Option<Arc<dyn SoundPlayer>>,
    /// Whether an in-place countdown line is currently open
    tick_line_open: bool,
}

impl App {
    /// Creates a new session.
    ///
    /// # Arguments
    ///
    /// * `no_sound` - If true, the alarm is silent.
    pub fn new(no_sound: bool) -> Self {
        let sound = try_create_player(no_sound).map(|p| p as Arc<dyn SoundPlayer>);
        Self::with_player(sound)
    }

    /// Creates a session with an explicit sound player (or none).
    fn with_player(sound: Option<Arc<dyn SoundPlayer>>) -> Self {
        let (event_tx, events) = mpsc::unbounded_channel();
        Self {
            engine: Arc::new(Mutex::new(TimerEngine::new(event_tx))),
            events,
            sound,
            tick_line_open: false,
        }
    }

    /// Runs the session until quit, Ctrl-C, or end of input.
    pub async fn run(mut self, args: &StartArgs) -> Result<()> {
        self.configure_from_args(args).await?;
        Display::show_session_help();

        // Begin counting down right away; with a zero duration the
        // session just waits in idle.
        match self.engine.lock().await.start() {
            Ok(()) => {}
            Err(TimerError::InvalidDuration) => Display::show_zero_duration_hint(),
            Err(e) => debug!("start ignored: {}", e),
        }

        let ticker = tokio::spawn(engine::run(self.engine.clone()));

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    match line.context("標準入力の読み取りに失敗しました")? {
                        Some(line) => {
                            if self.handle_line(&line).await {
                                break;
                            }
                        }
                        None => break,
                    }
                }
                event = self.events.recv() => {
                    if let Some(event) = event {
                        self.handle_event(event);
                    }
                }
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        ticker.abort();
        self.finish_tick_line();
        Ok(())
    }

    /// Applies the command-line duration (or preset) to the engine.
    async fn configure_from_args(&self, args: &StartArgs) -> Result<()> {
        let mut engine = self.engine.lock().await;

        let result = if let Some(key) = &args.preset {
            let preset =
                find_preset(key).with_context(|| format!("不明なプリセットです: {}", key))?;
            engine.apply_preset(preset)
        } else {
            engine.configure(TimerInput::new(args.hours, args.minutes, args.seconds))
        };

        if let Err(e) = result {
            debug!("configure ignored: {}", e);
        }
        Ok(())
    }

    /// Handles one line of input. Returns true when the session should end.
    async fn handle_line(&mut self, line: &str) -> bool {
        let command = match SessionCommand::parse(line) {
            Ok(command) => command,
            Err(message) => {
                self.finish_tick_line();
                Display::show_notice(&message);
                return false;
            }
        };

        let result = {
            let mut engine = self.engine.lock().await;
            match command {
                SessionCommand::Noop => Ok(()),
                SessionCommand::Quit => return true,
                SessionCommand::Start => engine.start(),
                SessionCommand::Pause => engine.pause(),
                SessionCommand::Reset => {
                    engine.reset();
                    Ok(())
                }
                SessionCommand::Mute => engine.stop_alarm(),
                SessionCommand::Set(input) => engine.configure(input).map(|_| ()),
                SessionCommand::Preset(preset) => engine.apply_preset(preset).map(|_| ()),
            }
        };

        match result {
            Ok(()) => {}
            Err(TimerError::InvalidDuration) => {
                self.finish_tick_line();
                Display::show_zero_duration_hint();
            }
            Err(e @ TimerError::InputLocked) => {
                self.finish_tick_line();
                Display::show_notice(&e.to_string());
            }
            Err(e @ TimerError::InvalidTransition { .. }) => {
                // Silent no-op per the state machine contract
                debug!("operation ignored: {}", e);
            }
        }
        false
    }

    /// Renders one engine event.
    fn handle_event(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick { snapshot } => {
                Display::render_tick(&snapshot);
                self.tick_line_open = true;
            }
            TimerEvent::Configured { total_seconds } => {
                self.finish_tick_line();
                Display::show_configured(total_seconds);
            }
            TimerEvent::Started { total_seconds } => {
                self.finish_tick_line();
                Display::show_started(total_seconds);
            }
            TimerEvent::Resumed { remaining_seconds } => {
                self.finish_tick_line();
                Display::show_resumed(remaining_seconds);
            }
            TimerEvent::Paused { remaining_seconds } => {
                self.finish_tick_line();
                Display::show_paused(remaining_seconds);
            }
            TimerEvent::Reset => {
                self.finish_tick_line();
                Display::show_reset();
            }
            TimerEvent::Expired => {
                self.finish_tick_line();
                Display::show_expired();
            }
            TimerEvent::AlarmPulse => {
                if let Some(player) = &self.sound {
                    if let Err(e) = player.play_beep() {
                        warn!("アラーム音の再生に失敗しました: {}", e);
                    }
                }
            }
            TimerEvent::AlarmStopped => {
                self.finish_tick_line();
                Display::show_alarm_stopped();
            }
        }
    }

    /// Terminates an open countdown line before a discrete message.
    fn finish_tick_line(&mut self) {
        if self.tick_line_open {
            Display::end_tick_line();
            self.tick_line_open = false;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
