//! Command definitions for the countdown timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand};

use crate::types::find_preset;

// ============================================================================
// CLI Structure
// ============================================================================

/// Countdown Timer CLI
#[derive(Parser, Debug)]
#[command(
    name = "countdown",
    version,
    about = "ターミナルで動くカウントダウンタイマー",
    long_about = "シンプルなカウントダウンタイマー。\n\
                  時間を設定して開始すると1秒ごとに残り時間と進捗を表示し、\n\
                  0になるとアラームが鳴ります。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive countdown session
    Start(StartArgs),

    /// List the built-in duration presets
    Presets {
        /// Output the preset table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Start Command Arguments
// ============================================================================

/// Arguments for the start command
#[derive(Args, Debug, Clone)]
pub struct StartArgs {
    /// Hours (0-23)
    #[arg(
        short = 'H',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=23)
    )]
    pub hours: u32,

    /// Minutes (0-59)
    #[arg(
        short = 'M',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub minutes: u32,

    /// Seconds (0-59)
    #[arg(
        short = 'S',
        long,
        default_value = "0",
        value_parser = clap::value_parser!(u32).range(0..=59)
    )]
    pub seconds: u32,

    /// Preset key to prefill the duration (see `countdown presets`)
    #[arg(
        short,
        long,
        value_parser = validate_preset_key,
        conflicts_with_all = ["hours", "minutes", "seconds"]
    )]
    pub preset: Option<String>,

    /// Disable the alarm sound
    #[arg(long)]
    pub no_sound: bool,
}

impl Default for StartArgs {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            preset: None,
            no_sound: false,
        }
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates a preset key against the built-in table.
fn validate_preset_key(s: &str) -> Result<String, String> {
    if find_preset(s).is_none() {
        return Err(format!(
            "不明なプリセットです: {}（countdown presets で一覧を表示）",
            s
        ));
    }
    Ok(s.to_string())
}

// ============================================================================
// Tests
// ============================================================================
