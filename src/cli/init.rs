//! Init command implementation

use std::time::Duration;

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::requests::GetOrgsRequest;
use crate::client::{ApiBase, OrgsApi, OrgsClient, RequestOptions};
use crate::config::{Config, DEFAULT_URL};
use crate::error::Result;

/// Upper bound on the token check so a wrong URL fails fast
const VERIFY_TIMEOUT_SECS: u64 = 10;

/// Run the init command
///
/// `--url` and `--token` skip their prompts. The token is verified by
/// listing organizations before anything is written.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to orgctl!".bold().green());
    println!("Let's connect to your InfluxDB server.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    let url = match opts.url {
        Some(ref url) => url.clone(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("InfluxDB URL")
            .default(config.url.clone().unwrap_or_else(|| DEFAULT_URL.to_string()))
            .interact_text()?,
    };

    let token = match opts.token {
        Some(ref token) => token.clone(),
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Enter your InfluxDB API token")
            .interact()?,
    };

    println!("\n{}", "Verifying token...".cyan());
    let client = OrgsClient::new(ApiBase::new(
        &url,
        Some(token.clone()),
        Duration::from_secs(config.preferences.timeout_secs),
    )?);
    let options = RequestOptions::new().timeout(Duration::from_secs(VERIFY_TIMEOUT_SECS));
    let orgs = client
        .get_orgs(&GetOrgsRequest::new().limit(100), Some(&options))
        .await?
        .orgs;

    println!("{}", "✓ Authentication successful!".green());

    let org_id = if orgs.is_empty() {
        println!("{}", "⚠ No organizations found.".yellow());
        None
    } else if orgs.len() == 1 {
        let org = &orgs[0];
        println!("Found organization: {}", org.name.bold());
        let use_org = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Set this as your default organization?")
            .default(true)
            .interact()?;

        if use_org { org.id.clone() } else { None }
    } else {
        let org_names: Vec<String> = orgs.iter().map(|o| o.name.clone()).collect();

        println!("Found {} organizations.", orgs.len());
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select your default organization")
            .items(&org_names)
            .default(0)
            .interact_opt()?;

        selection.and_then(|idx| orgs[idx].id.clone())
    };

    config.url = Some(url);
    config.token = Some(token);
    if org_id.is_some() {
        config.org_id = org_id;
    }
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    if let Some(ref org_id) = config.org_id {
        println!("  Default organization: {}", org_id.bold());
    }

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "orgctl status".cyan());
    println!("  {} - List organizations", "orgctl org list".cyan());

    Ok(())
}
