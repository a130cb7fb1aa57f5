//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, if given on the command line
    pub format: Option<OutputFormat>,

    /// Organization (ID or name) override
    pub org: Option<String>,

    /// Custom config file path (defaults to ~/.orgctl/config.yaml)
    pub config: Option<String>,

    /// Server URL override
    pub url: Option<String>,

    /// API token override
    pub token: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            org: cli.org.clone(),
            config: cli.config.clone(),
            url: cli.url.clone(),
            token: cli.token.clone(),
        }
    }

    pub fn org_ref(&self) -> Option<&str> {
        self.org.as_deref()
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "orgctl",
            "--format",
            "json",
            "--org",
            "acme",
            "--url",
            "http://localhost:9999",
            "status",
        ])
        .unwrap();

        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.format, Some(OutputFormat::Json));
        assert_eq!(opts.org_ref(), Some("acme"));
        assert_eq!(opts.url.as_deref(), Some("http://localhost:9999"));
        assert_eq!(opts.config_ref(), None);
    }
}
