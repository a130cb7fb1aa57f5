//! Organization member and owner commands
//!
//! Both roles share one set of handlers; [`Role`] picks the endpoints.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};
use serde_json::json;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::OrgsApi;
use crate::client::models::AddResourceMemberRequestBody;
use crate::client::requests::{
    DeleteOrgsIdMembersIdRequest, DeleteOrgsIdOwnersIdRequest, GetOrgsIdMembersRequest,
    GetOrgsIdOwnersRequest, PostOrgsIdMembersRequest, PostOrgsIdOwnersRequest,
};
use crate::error::Result;
use crate::models::MemberDisplay;
use crate::output::{Formattable, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Member,
    Owner,
}

impl Role {
    fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Owner => "owner",
        }
    }
}

/// Run the member/owner list command
pub async fn list(role: Role, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let rows = list_users(&ctx.client, role, ctx.require_org_id().await?).await?;
    rows.print(ctx.format)
}

/// Run the member/owner add command
pub async fn add(
    role: Role,
    user_id: &str,
    name: Option<&str>,
    opts: &GlobalOptions,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id().await?;

    let added = add_user(&ctx.client, role, org_id, user_id, name).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&added)?);
        return Ok(());
    }

    println!(
        "{} Added {} as {}",
        "✓".green(),
        added.name.bold(),
        role.as_str()
    );
    Ok(())
}

/// Run the member/owner remove command
pub async fn remove(role: Role, user_id: &str, yes: bool, opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let org_id = ctx.require_org_id().await?;

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Remove {} {}?", role.as_str(), user_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    remove_user(&ctx.client, role, org_id.clone(), user_id).await?;

    if ctx.format == OutputFormat::Json {
        let record = json!({
            "action": "remove",
            "role": role.as_str(),
            "org_id": org_id,
            "user_id": user_id,
        });
        println!("{}", json::format_json(&record)?);
        return Ok(());
    }

    println!("{} Removed {} {}", "✓".green(), role.as_str(), user_id.bold());
    Ok(())
}

async fn list_users<A: OrgsApi + ?Sized>(
    api: &A,
    role: Role,
    org_id: String,
) -> Result<Vec<MemberDisplay>> {
    let rows = match role {
        Role::Member => {
            let request = GetOrgsIdMembersRequest { org_id };
            let members = api.get_orgs_id_members(&request, None).await?;
            members.users.into_iter().map(MemberDisplay::from).collect()
        }
        Role::Owner => {
            let request = GetOrgsIdOwnersRequest { org_id };
            let owners = api.get_orgs_id_owners(&request, None).await?;
            owners.users.into_iter().map(MemberDisplay::from).collect()
        }
    };
    Ok(rows)
}

async fn add_user<A: OrgsApi + ?Sized>(
    api: &A,
    role: Role,
    org_id: String,
    user_id: &str,
    name: Option<&str>,
) -> Result<MemberDisplay> {
    let body = AddResourceMemberRequestBody {
        id: user_id.to_string(),
        name: name.map(str::to_string),
    };

    let added = match role {
        Role::Member => {
            let request = PostOrgsIdMembersRequest { org_id, body };
            MemberDisplay::from(api.post_orgs_id_members(&request, None).await?)
        }
        Role::Owner => {
            let request = PostOrgsIdOwnersRequest { org_id, body };
            MemberDisplay::from(api.post_orgs_id_owners(&request, None).await?)
        }
    };
    Ok(added)
}

async fn remove_user<A: OrgsApi + ?Sized>(
    api: &A,
    role: Role,
    org_id: String,
    user_id: &str,
) -> Result<()> {
    let user_id = user_id.to_string();
    match role {
        Role::Member => {
            let request = DeleteOrgsIdMembersIdRequest { user_id, org_id };
            api.delete_orgs_id_members_id(&request, None).await
        }
        Role::Owner => {
            let request = DeleteOrgsIdOwnersIdRequest { user_id, org_id };
            api.delete_orgs_id_owners_id(&request, None).await
        }
    }
}
