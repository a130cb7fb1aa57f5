//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - bordered tables and colored messages for humans
    #[default]
    Pretty,
    /// Table format - borderless, one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format name from the config file, ignoring case.
    pub fn parse_preference(value: &str) -> Option<Self> {
        <OutputFormat as ValueEnum>::from_str(value, true).ok()
    }
}
