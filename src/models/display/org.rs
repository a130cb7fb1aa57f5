//! Organization display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_datetime, or_placeholder, truncate_string};
use crate::client::models::Organization;

/// Longest description shown in a table cell
const DESCRIPTION_WIDTH: usize = 40;

/// Organization display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    #[tabled(rename = "ORG ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        OrgDisplay::from(&org)
    }
}

impl From<&Organization> for OrgDisplay {
    fn from(org: &Organization) -> Self {
        Self {
            id: or_placeholder(org.id.as_deref()),
            name: org.name.clone(),
            status: or_placeholder(org.status.map(|s| s.as_str())),
            description: org
                .description
                .as_deref()
                .map(|d| truncate_string(d, DESCRIPTION_WIDTH))
                .unwrap_or_else(|| or_placeholder(None)),
            created: format_datetime(org.created_at.as_ref()),
        }
    }
}
