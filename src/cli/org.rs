//! Organization command implementations

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use log::debug;
use serde_json::json;

use crate::cli::context::{resolve_org, resolve_org_id};
use crate::cli::{CommandContext, GlobalOptions, OrgListArgs, OutputFormat};
use crate::client::models::{Organization, PatchOrganizationRequest, PostOrganizationRequest};
use crate::client::requests::{DeleteOrgsIdRequest, PatchOrgsIdRequest, PostOrgsRequest};
use crate::client::{OrgsApi, fetch_all_orgs};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};
use crate::models::OrgDisplay;
use crate::models::display::common::{format_datetime, or_placeholder};
use crate::output::{Formattable, json};

/// Run the org list command
pub async fn list(args: &OrgListArgs, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let request = args.to_request(ctx.config.preferences.page_size);

    let orgs = if args.all {
        fetch_all_orgs(&ctx.client, &request).await?
    } else {
        ctx.client.get_orgs(&request, None).await?.orgs
    };
    debug!("Fetched {} organizations", orgs.len());

    let rows: Vec<OrgDisplay> = orgs.into_iter().map(OrgDisplay::from).collect();
    rows.print(ctx.format)
}

/// Run the org get command
pub async fn get(org_ref: Option<&str>, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let reference = target_ref(org_ref, &ctx.config)?;

    let org = resolve_org(&ctx.client, reference).await?;
    print_org(&org, ctx.format)
}

/// Run the org create command
pub async fn create(name: &str, description: Option<&str>, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = PostOrgsRequest {
        body: PostOrganizationRequest {
            name: name.to_string(),
            description: description.map(str::to_string),
        },
    };
    let org = ctx.client.post_orgs(&request, None).await?;

    if ctx.format == OutputFormat::Json {
        return print_org(&org, ctx.format);
    }

    println!(
        "{} Created organization {} ({})",
        "✓".green(),
        org.name.bold(),
        or_placeholder(org.id.as_deref())
    );
    Ok(())
}

/// Run the org update command
pub async fn update(
    org_ref: Option<&str>,
    name: Option<&str>,
    description: Option<&str>,
    opts: &GlobalOptions,
) -> Result<()> {
    let patch = PatchOrganizationRequest {
        name: name.map(str::to_string),
        description: description.map(str::to_string),
    };
    if patch.is_empty() {
        return Err(ApiError::InvalidRequest(
            "nothing to update; pass --name and/or --description".to_string(),
        )
        .into());
    }

    let ctx = CommandContext::new(opts)?;
    let reference = target_ref(org_ref, &ctx.config)?;
    let org_id = resolve_org_id(&ctx.client, reference).await?;

    let request = PatchOrgsIdRequest {
        org_id,
        body: patch,
    };
    let org = ctx.client.patch_orgs_id(&request, None).await?;

    if ctx.format == OutputFormat::Json {
        return print_org(&org, ctx.format);
    }

    println!("{} Updated organization {}", "✓".green(), org.name.bold());
    Ok(())
}

/// Run the org delete command
pub async fn delete(org_ref: &str, yes: bool, dry_run: bool, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org = resolve_org(&ctx.client, org_ref).await?;
    let org_id = org
        .id
        .clone()
        .ok_or_else(|| ApiError::InvalidResponse("organization has no ID".to_string()))?;

    if dry_run {
        if ctx.format == OutputFormat::Json {
            let record = json!({"action": "delete", "dry_run": true, "organization": org});
            println!("{}", json::format_json(&record)?);
        } else {
            println!(
                "{} Would delete organization {} ({})",
                "→".cyan(),
                org.name.bold(),
                org_id
            );
        }
        return Ok(());
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!(
                "Delete organization '{}' and everything it owns?",
                org.name
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let request = DeleteOrgsIdRequest {
        org_id: org_id.clone(),
    };
    ctx.client.delete_orgs_id(&request, None).await?;

    if ctx.format == OutputFormat::Json {
        let record = json!({"action": "delete", "dry_run": false, "organization": org});
        println!("{}", json::format_json(&record)?);
        return Ok(());
    }

    println!(
        "{} Deleted organization {} ({})",
        "✓".green(),
        org.name.bold(),
        org_id
    );
    Ok(())
}

/// Run the org set command
pub async fn set(org_ref: &str, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if ctx.format != OutputFormat::Json {
        println!("Verifying organization...");
    }
    let org = resolve_org(&ctx.client, org_ref).await?;
    let org_id = org
        .id
        .clone()
        .ok_or_else(|| ApiError::InvalidResponse("organization has no ID".to_string()))?;

    // Re-read the file so CLI overrides are not persisted
    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    if config.token.is_none() {
        config.token = ctx.config.token.clone();
    }
    if config.url.is_none() {
        config.url = ctx.config.url.clone();
    }
    config.org_id = Some(org_id.clone());
    config.save_at(opts.config_ref())?;

    if ctx.format == OutputFormat::Json {
        let record = json!({
            "default_org": {"id": org_id, "name": org.name},
            "config": Config::resolve_path(opts.config_ref())?,
        });
        println!("{}", json::format_json(&record)?);
        return Ok(());
    }

    println!(
        "{} Set default organization to: {} ({})",
        "✓".green(),
        org.name.bold(),
        org_id
    );
    Ok(())
}

/// Explicit argument first, then `--org` / configured default.
fn target_ref<'a>(org_ref: Option<&'a str>, config: &'a Config) -> Result<&'a str> {
    org_ref
        .or(config.org_id.as_deref())
        .ok_or_else(|| ConfigError::MissingOrgId.into())
}

fn print_org(org: &Organization, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", json::format_json(org)?);
        }
        OutputFormat::Table => vec![OrgDisplay::from(org)].print(format)?,
        OutputFormat::Pretty => {
            println!("{}", org.name.bold());
            println!();
            println!("  ID:          {}", or_placeholder(org.id.as_deref()));
            println!(
                "  Status:      {}",
                or_placeholder(org.status.map(|s| s.as_str()))
            );
            println!(
                "  Description: {}",
                or_placeholder(org.description.as_deref())
            );
            println!("  Created:     {}", format_datetime(org.created_at.as_ref()));
            println!("  Updated:     {}", format_datetime(org.updated_at.as_ref()));
        }
    }
    Ok(())
}
