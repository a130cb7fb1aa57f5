//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::load_config;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration status
///
/// Never contacts the server.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "orgctl Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    match load_config(opts) {
        Ok(config) => {
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    config_path.display().to_string().cyan(),
                    "(not created, using flags/environment)".dimmed()
                );
            }
            println!("Server: {}", config.api_url());
            println!();

            match config.token.as_deref() {
                Some(token) if !token.is_empty() => {
                    println!("{} API token configured", "✓".green())
                }
                _ => {
                    println!("{} API token not configured", "✗".red());
                    println!("  → Run 'orgctl init' to configure");
                }
            }

            if let Some(ref org_id) = config.org_id {
                println!("{} Default organization: {}", "✓".green(), org_id);
            } else {
                println!("{} No default organization set", "○".dimmed());
                println!("  → Run 'orgctl org set <ORG>' to set one");
            }

            println!(
                "{} Request timeout: {}s",
                "○".dimmed(),
                config.preferences.timeout_secs
            );
            println!();
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "orgctl init".cyan()
            );
            println!();
        }
        Err(e) => {
            println!("{} Configuration could not be loaded", "✗".red());
            return Err(e);
        }
    }

    Ok(())
}
