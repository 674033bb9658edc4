use clap::Parser;
use hive_config::GeneralConfig;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `hive` binary.
#[derive(Debug, Parser)]
#[command(name = "hive", version, about = "TechHive - engineers, projects, and inquiries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, filling gaps from the `[general]` config section.
    #[must_use]
    pub fn global_flags(&self, general: &GeneralConfig) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(&general.default_format)),
            quiet: self.quiet,
            skill_preview: general.skill_preview,
        }
    }
}
