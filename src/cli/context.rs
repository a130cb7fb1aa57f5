//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, authentication validation, and client initialization.

use std::time::Duration;

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::models::Organization;
use crate::client::requests::{GetOrgsIdRequest, GetOrgsRequest};
use crate::client::{ApiBase, OrgsApi, OrgsClient};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration with CLI/env overrides applied
    pub config: Config,
    /// Authenticated Organizations API client
    pub client: OrgsClient<ApiBase>,
    /// Output format (flag > config preference > default)
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is fine as long as a token was supplied through
    /// `--token` or `ORGCTL_TOKEN`.
    ///
    /// # Errors
    /// Returns error if the config cannot be parsed, no token is available,
    /// or the server URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;
        config.validate_auth()?;

        let client = OrgsClient::new(ApiBase::new(
            config.api_url(),
            config.token.clone(),
            Duration::from_secs(config.preferences.timeout_secs),
        )?);

        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Resolve the target organization ID, returning an error if none is set.
    ///
    /// Uses `--org` / `ORGCTL_ORG_ID` first, then the configured default.
    /// Names are looked up through the API.
    pub async fn require_org_id(&self) -> Result<String> {
        let reference = self
            .config
            .org_id
            .as_deref()
            .ok_or(ConfigError::MissingOrgId)?;

        resolve_org_id(&self.client, reference).await
    }
}

/// Load the config file and layer CLI/env overrides on top.
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) if opts.token.is_some() => {
            debug!("No config file, using CLI/env settings only");
            Config::default()
        }
        Err(e) => return Err(e),
    };

    if let Some(ref url) = opts.url {
        config.url = Some(url.clone());
    }
    if let Some(ref token) = opts.token {
        config.token = Some(token.clone());
    }
    if let Some(org) = opts.org_ref() {
        config.org_id = Some(org.to_string());
    }

    Ok(config)
}

/// Pick the output format: explicit flag, then config preference, then default.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::parse_preference)
    })
    .unwrap_or_default()
}

/// Whether `reference` has the shape of an InfluxDB ID (16 lowercase hex digits).
pub fn is_org_id(reference: &str) -> bool {
    reference.len() == 16
        && reference
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Fetch an organization by ID or name.
pub async fn resolve_org<A: OrgsApi + ?Sized>(api: &A, reference: &str) -> Result<Organization> {
    if is_org_id(reference) {
        let request = GetOrgsIdRequest {
            org_id: reference.to_string(),
        };
        return api.get_orgs_id(&request, None).await;
    }

    debug!("Resolving organization name '{}'", reference);
    let request = GetOrgsRequest::new().org(reference);
    let orgs = api.get_orgs(&request, None).await?;

    orgs.orgs
        .into_iter()
        .find(|org| org.name == reference)
        .ok_or_else(|| ApiError::NotFound(format!("organization '{}'", reference)).into())
}

/// Resolve an organization ID or name to an ID.
///
/// IDs are passed through without a round trip.
pub async fn resolve_org_id<A: OrgsApi + ?Sized>(api: &A, reference: &str) -> Result<String> {
    if is_org_id(reference) {
        return Ok(reference.to_string());
    }

    let org = resolve_org(api, reference).await?;
    org.id.ok_or_else(|| {
        ApiError::InvalidResponse(format!("organization '{}' has no ID", reference)).into()
    })
}
