//! Member and owner display model

use serde::Serialize;
use tabled::Tabled;

use super::common::or_placeholder;
use crate::client::models::{ResourceMember, ResourceOwner};

/// Organization member or owner for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "USER ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "ROLE")]
    pub role: String,
}

impl From<ResourceMember> for MemberDisplay {
    fn from(member: ResourceMember) -> Self {
        Self {
            id: or_placeholder(member.id.as_deref()),
            name: member.name,
            status: or_placeholder(member.status.map(|s| s.as_str())),
            role: member.role.unwrap_or_else(|| "member".to_string()),
        }
    }
}

impl From<ResourceOwner> for MemberDisplay {
    fn from(owner: ResourceOwner) -> Self {
        Self {
            id: or_placeholder(owner.id.as_deref()),
            name: owner.name,
            status: or_placeholder(owner.status.map(|s| s.as_str())),
            role: owner.role.unwrap_or_else(|| "owner".to_string()),
        }
    }
}
