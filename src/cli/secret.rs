//! Organization secret management commands

use colored::Colorize;
use dialoguer::{Confirm, Password, theme::ColorfulTheme};
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OrgsApi;
use crate::client::models::{SecretKeys, Secrets};
use crate::client::requests::{
    DeleteOrgsIdSecretsIdRequest, GetOrgsIdSecretsRequest, PatchOrgsIdSecretsRequest,
    PostOrgsIdSecretsRequest,
};
use crate::error::{ApiError, Result};
use crate::models::SecretKeyDisplay;
use crate::output::{Formattable, json};

/// Run the secret list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id().await?;

    let request = GetOrgsIdSecretsRequest { org_id };
    let response = ctx.client.get_orgs_id_secrets(&request, None).await?;

    SecretKeyDisplay::from_response(response).print(ctx.format)
}

/// Run the secret set command
pub async fn set(args: &[String], opts: &GlobalOptions) -> Result<()> {
    let mut secrets = Secrets::new();
    for arg in args {
        let (key, value) = parse_secret_arg(arg)?;
        let value = match value {
            Some(value) => value,
            None => Password::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Value for {}", key))
                .interact()?,
        };
        secrets.insert(key, value);
    }

    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id().await?;

    let keys: Vec<String> = secrets.keys().cloned().collect();
    let request = PatchOrgsIdSecretsRequest {
        org_id: org_id.clone(),
        body: secrets,
    };
    ctx.client.patch_orgs_id_secrets(&request, None).await?;

    if ctx.format == OutputFormat::Json {
        let record = json!({"action": "set", "org_id": org_id, "keys": keys});
        println!("{}", json::format_json(&record)?);
        return Ok(());
    }

    println!("{} Saved {}", "✓".green(), keys.join(", ").bold());
    Ok(())
}

/// Run the secret delete command
pub async fn delete(keys: &[String], yes: bool, dry_run: bool, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id().await?;
    let listed = keys.join(", ");

    if dry_run {
        if ctx.format == OutputFormat::Json {
            println!("{}", deletion_record(&org_id, keys, true)?);
        } else {
            println!("{} Would delete {}", "→".cyan(), listed.bold());
        }
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete secrets: {}?", listed))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    match keys {
        [key] => {
            let request = DeleteOrgsIdSecretsIdRequest {
                org_id: org_id.clone(),
                secret_id: key.clone(),
            };
            ctx.client.delete_orgs_id_secrets_id(&request, None).await?;
        }
        _ => {
            let request = PostOrgsIdSecretsRequest {
                org_id: org_id.clone(),
                body: SecretKeys {
                    secrets: keys.to_vec(),
                },
            };
            ctx.client.post_orgs_id_secrets(&request, None).await?;
        }
    }

    if ctx.format == OutputFormat::Json {
        println!("{}", deletion_record(&org_id, keys, false)?);
        return Ok(());
    }

    println!("{} Deleted {}", "✓".green(), listed.bold());
    Ok(())
}

fn deletion_record(org_id: &str, keys: &[String], dry_run: bool) -> Result<String> {
    let record = json!({"action": "delete", "dry_run": dry_run, "org_id": org_id, "keys": keys});
    Ok(json::format_json(&record)?)
}

/// Split `KEY=VALUE` at the first `=`. A bare `KEY` leaves the value to prompt for.
fn parse_secret_arg(arg: &str) -> Result<(String, Option<String>)> {
    let (key, value) = match arg.split_once('=') {
        Some((key, value)) => (key, Some(value.to_string())),
        None => (arg, None),
    };

    if key.is_empty() {
        return Err(ApiError::InvalidRequest(format!("secret '{}' has an empty key", arg)).into());
    }

    Ok((key.to_string(), value))
}
