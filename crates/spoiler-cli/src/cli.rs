//! CLI argument definitions for the spoiler gate tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use spoiler_cli::profile::ProfileOverrides;

#[derive(Parser)]
#[command(
    name = "spoiler",
    version,
    about = "Spoiler gate - check what a reader may see at their chapter",
    long_about = "Evaluate exported wiki content against a reader's progress.\n\n\
                  Items are hidden while their spoiler chapter is ahead of the\n\
                  reader; chapter-tagged variants resolve to the latest one the\n\
                  reader has reached."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Reader profile to use instead of the one in the config directory.
    #[arg(long = "profile", value_name = "PATH", global = true)]
    pub profile: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decide which items of a content export are hidden.
    Gate(GateArgs),

    /// Pick the variant of an entity that matches the reader's progress.
    Select(SelectArgs),

    /// Step through an entity's variants from the progress-derived start.
    Cycle(CycleArgs),

    /// Show or update the stored reader profile.
    Profile(ProfileArgs),
}

/// Progress values that override the stored profile for one run.
#[derive(Args, Clone, Copy, Default)]
pub struct ProgressArgs {
    /// Chapters the reader has read.
    #[arg(long = "progress", value_name = "CHAPTER")]
    pub progress: Option<u32>,

    /// Tolerance override; 0 turns it off.
    #[arg(long = "tolerance", value_name = "CHAPTER")]
    pub tolerance: Option<u32>,

    /// Disable gating entirely (`--show-all=false` turns it back on).
    #[arg(
        long = "show-all",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub show_all: Option<bool>,

    /// Hide untagged content while progress is at or below this chapter.
    #[arg(long = "untagged-threshold", value_name = "CHAPTER")]
    pub untagged_threshold: Option<u32>,
}

impl From<ProgressArgs> for ProfileOverrides {
    fn from(args: ProgressArgs) -> Self {
        Self {
            raw_progress: args.progress,
            tolerance_override: args.tolerance,
            show_all: args.show_all,
            untagged_threshold: args.untagged_threshold,
        }
    }
}

#[derive(Parser)]
pub struct GateArgs {
    /// JSON array of `{ key, title?, spoilerChapter?, isSpoiler? }` records.
    #[arg(value_name = "ITEMS_JSON")]
    pub items: PathBuf,

    #[command(flatten)]
    pub progress: ProgressArgs,

    /// Only list items that stay hidden.
    #[arg(long = "hidden-only")]
    pub hidden_only: bool,

    /// Treat this item as revealed for the run (repeatable).
    #[arg(long = "reveal", value_name = "KEY")]
    pub reveal: Vec<String>,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// JSON `{ owner: "kind:id", variants: [{ chapterNumber?, payload }] }`.
    #[arg(value_name = "GROUP_JSON")]
    pub group: PathBuf,

    #[command(flatten)]
    pub progress: ProgressArgs,
}

#[derive(Parser)]
pub struct CycleArgs {
    /// Variant group JSON, same shape as for `select`.
    #[arg(value_name = "GROUP_JSON")]
    pub group: PathBuf,

    #[command(flatten)]
    pub progress: ProgressArgs,

    /// Positions to move; negative values walk backwards.
    #[arg(long = "steps", default_value_t = 1, allow_hyphen_values = true)]
    pub steps: i64,

    /// Reveal the variant the walk lands on.
    #[arg(long = "reveal")]
    pub reveal: bool,
}

#[derive(Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Print the stored profile and its effective progress.
    Show,

    /// Update stored values; omitted flags keep their current value.
    Set(ProgressArgs),

    /// Print the profile file location.
    Path,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
