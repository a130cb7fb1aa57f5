//! Organization models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Organization lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrgStatus {
    Active,
    Inactive,
}

impl OrgStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgStatus::Active => "active",
            OrgStatus::Inactive => "inactive",
        }
    }
}

/// Related resource URIs of an organization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owners: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secrets: Option<String>,
}

/// Organization resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Related resource links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<OrganizationLinks>,

    /// Organization ID (assigned by the server, never changes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Organization name
    pub name: String,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrgStatus>,
}

/// Paging links returned with collections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    /// URI of the next page, absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,
}

/// Organization list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organizations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(default)]
    pub orgs: Vec<Organization>,
}

/// Body for creating an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostOrganizationRequest {
    /// Organization name
    pub name: String,

    /// Organization description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body for updating an organization.
///
/// Fields left as `None` are not sent and remain unchanged on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchOrganizationRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PatchOrganizationRequest {
    /// Check if the update carries any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
