use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a configured default, falling back to `Table` on anything unknown.
    #[must_use]
    pub fn from_config(value: &str) -> Self {
        <Self as ValueEnum>::from_str(value, true).unwrap_or_else(|_| {
            tracing::warn!(value, "unknown general.default_format, using table");
            Self::Table
        })
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    /// Skills listed per engineer before collapsing into `+N`.
    pub skill_preview: usize,
}
