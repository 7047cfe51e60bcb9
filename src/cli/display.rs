//! Display utilities for the countdown timer CLI.
//!
//! This module provides formatted output for:
//! - The once-per-second countdown line (clock, progress bar, percent)
//! - Confirmation messages for timer operations
//! - The preset table
//! - Error messages

use std::io::{self, Write};

use anyhow::Result;

use crate::types::{format_hms, TimerSnapshot, PRESETS};

/// Width of the ASCII progress bar in characters.
const PROGRESS_BAR_WIDTH: usize = 20;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the interactive command summary at session start.
    pub fn show_session_help() {
        println!("コマンド: start / pause / reset / mute / set <時> <分> <秒> / preset <キー> / quit");
    }

    /// Shows a confirmation for a changed duration input.
    pub fn show_configured(total_seconds: u32) {
        println!("時間を設定しました: {}", format_hms(total_seconds));
    }

    /// Shows a confirmation for countdown start.
    pub fn show_started(total_seconds: u32) {
        println!("> カウントダウンを開始しました（{}）", format_hms(total_seconds));
    }

    /// Shows a confirmation for countdown resume.
    pub fn show_resumed(remaining_seconds: u32) {
        println!("> 再開しました（残り {}）", format_hms(remaining_seconds));
    }

    /// Shows a confirmation for countdown pause.
    pub fn show_paused(remaining_seconds: u32) {
        println!("|| 一時停止しました（残り {}）", format_hms(remaining_seconds));
    }

    /// Shows a confirmation for timer reset.
    pub fn show_reset() {
        println!("* リセットしました");
    }

    /// Shows the expiry banner.
    pub fn show_expired() {
        println!("- 時間になりました！（mute でアラーム停止）");
    }

    /// Shows a confirmation for alarm stop.
    pub fn show_alarm_stopped() {
        println!("* アラームを停止しました");
    }

    /// Shown when start is attempted with a zero duration.
    pub fn show_zero_duration_hint() {
        println!("時間が設定されていません（set <時> <分> <秒> で設定できます）");
    }

    /// Shows an informational notice line.
    pub fn show_notice(message: &str) {
        println!("{}", message);
    }

    /// Renders the once-per-second countdown line in place.
    ///
    /// Uses a carriage return so the line is rewritten each tick; callers
    /// must terminate the line before printing discrete messages.
    pub fn render_tick(snapshot: &TimerSnapshot) {
        let bar = Self::progress_bar(snapshot.progress_percent);
        let marker = if snapshot.urgent { " !" } else { "  " };
        print!(
            "\r{} {} {:>3}%{}",
            snapshot.formatted, bar, snapshot.progress_percent, marker
        );
        let _ = io::stdout().flush();
    }

    /// Terminates an in-place countdown line.
    pub fn end_tick_line() {
        println!();
    }

    /// Shows the preset table.
    pub fn show_presets() {
        println!("プリセット一覧");
        println!("─────────────────────────────");
        for preset in PRESETS {
            println!(
                "{:<4} {} ({})",
                preset.key,
                preset.label,
                format_hms(preset.seconds)
            );
        }
    }

    /// Shows the preset table as JSON.
    pub fn show_presets_json() -> Result<()> {
        println!("{}", serde_json::to_string_pretty(PRESETS)?);
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Builds the ASCII progress bar for a percentage.
    fn progress_bar(percent: u8) -> String {
        let filled = (usize::from(percent) * PROGRESS_BAR_WIDTH) / 100;
        let mut bar = String::with_capacity(PROGRESS_BAR_WIDTH + 2);
        bar.push('[');
        for i in 0..PROGRESS_BAR_WIDTH {
            bar.push(if i < filled { '#' } else { '-' });
        }
        bar.push(']');
        bar
    }
}

// ============================================================================
// Tests
// ============================================================================
