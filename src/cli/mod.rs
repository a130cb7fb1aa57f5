//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod init;
pub mod member;
pub mod org;
pub mod secret;
pub mod status;

pub use args::{GlobalOptions, OrgListArgs, OutputFormat};
pub use context::CommandContext;

/// orgctl - manage InfluxDB organizations, their secrets, members and owners
#[derive(Parser, Debug)]
#[command(name = "orgctl")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "ORGCTL_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override default organization (ID or name)
    #[arg(long, global = true, env = "ORGCTL_ORG_ID", hide_env = true)]
    pub org: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ORGCTL_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override InfluxDB server URL
    #[arg(long, global = true, env = "ORGCTL_URL", hide_env = true)]
    pub url: Option<String>,

    /// Override API token
    #[arg(long, global = true, env = "ORGCTL_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGCTL_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize orgctl configuration
    Init,

    /// Show configuration and authentication status
    Status,

    /// Display version information
    Version,

    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage organization secrets
    #[command(subcommand)]
    Secret(SecretCommands),

    /// Manage organization members
    #[command(subcommand)]
    Member(MemberCommands),

    /// Manage organization owners
    #[command(subcommand)]
    Owner(MemberCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  orgctl completion bash > ~/.local/share/bash-completion/completions/orgctl
  orgctl completion zsh > ~/.zfunc/_orgctl
  orgctl completion fish > ~/.config/fish/completions/orgctl.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: OrgListArgs,
    },

    /// Show an organization (defaults to the configured one)
    Get {
        /// Organization ID or name
        #[arg(value_name = "ORG")]
        org_ref: Option<String>,
    },

    /// Create an organization
    Create {
        /// Name of the new organization
        name: String,

        /// Description of the new organization
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Rename or re-describe an organization
    Update {
        /// Organization ID or name (defaults to the configured one)
        #[arg(value_name = "ORG")]
        org_ref: Option<String>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Delete an organization
    Delete {
        /// Organization ID or name
        #[arg(value_name = "ORG")]
        org_ref: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },

    /// Set default organization
    Set {
        /// Organization ID or name
        #[arg(value_name = "ORG")]
        org_ref: String,
    },
}

/// Secret management subcommands
#[derive(Subcommand, Debug)]
pub enum SecretCommands {
    /// List secret keys (values are never returned)
    #[command(visible_alias = "ls")]
    List,

    /// Create or update secrets
    #[command(after_help = "\
Values left out (KEY instead of KEY=VALUE) are prompted for without echo.")]
    Set {
        /// Secrets as KEY=VALUE or KEY
        #[arg(required = true, value_name = "KEY[=VALUE]")]
        secrets: Vec<String>,
    },

    /// Delete secrets
    #[command(visible_alias = "rm")]
    Delete {
        /// Keys to delete
        #[arg(required = true, value_name = "KEY")]
        keys: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Show what would be deleted without deleting
        #[arg(long, short = 'n')]
        dry_run: bool,
    },
}

/// Member and owner subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List users with this role
    #[command(visible_alias = "ls")]
    List,

    /// Grant the role to a user
    Add {
        /// User ID
        user_id: String,

        /// User name sent alongside the ID
        #[arg(long)]
        name: Option<String>,
    },

    /// Revoke the role from a user
    #[command(visible_alias = "rm")]
    Remove {
        /// User ID
        user_id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_org_list_flags() {
        let cli = Cli::try_parse_from([
            "orgctl",
            "org",
            "list",
            "--limit",
            "5",
            "--descending",
            "--name",
            "acme",
        ])
        .unwrap();

        match cli.command {
            Commands::Org(OrgCommands::List { args }) => {
                assert_eq!(args.limit, Some(5));
                assert!(args.descending);
                assert_eq!(args.name.as_deref(), Some("acme"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_positional_org_does_not_clash_with_global_flag() {
        let cli =
            Cli::try_parse_from(["orgctl", "--org", "default-org", "org", "get", "other"]).unwrap();

        assert_eq!(cli.org.as_deref(), Some("default-org"));
        match cli.command {
            Commands::Org(OrgCommands::Get { org_ref }) => {
                assert_eq!(org_ref.as_deref(), Some("other"))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_secret_set_requires_an_argument() {
        assert!(Cli::try_parse_from(["orgctl", "secret", "set"]).is_err());
    }

    #[test]
    fn test_owner_uses_member_subcommands() {
        let cli = Cli::try_parse_from(["orgctl", "owner", "add", "0a1b2c3d4e5f6a7b"]).unwrap();
        match cli.command {
            Commands::Owner(MemberCommands::Add { user_id, name }) => {
                assert_eq!(user_id, "0a1b2c3d4e5f6a7b");
                assert!(name.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
