//! Organization membership models

use serde::{Deserialize, Serialize};

/// User account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,
}

/// User with the `member` role in an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "oauthID", default, skip_serializing_if = "Option::is_none")]
    pub oauth_id: Option<String>,

    /// User name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    /// Always `member` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,
}

/// User with the `owner` role in an organization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceOwner {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "oauthID", default, skip_serializing_if = "Option::is_none")]
    pub oauth_id: Option<String>,

    /// User name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,

    /// Always `owner` when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,
}

/// Organization members list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceMembers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,

    #[serde(default)]
    pub users: Vec<ResourceMember>,
}

/// Organization owners list response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceOwners {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<UserLinks>,

    #[serde(default)]
    pub users: Vec<ResourceOwner>,
}

/// Body for adding a member or an owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddResourceMemberRequestBody {
    /// ID of the user to add
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
