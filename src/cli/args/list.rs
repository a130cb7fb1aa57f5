//! Organization list arguments

use clap::Args;

use crate::client::requests::GetOrgsRequest;

/// Filters and paging for `org list`.
#[derive(Args, Debug, Default, Clone)]
pub struct OrgListArgs {
    /// Number of records to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Maximum results per page (1-100)
    #[arg(long, short = 'n')]
    pub limit: Option<u32>,

    /// Sort in descending order
    #[arg(long)]
    pub descending: bool,

    /// Only the organization with this name
    #[arg(long)]
    pub name: Option<String>,

    /// Only the organization with this ID
    #[arg(long)]
    pub id: Option<String>,

    /// Only organizations this user belongs to
    #[arg(long)]
    pub user: Option<String>,

    /// Follow pages until every organization is fetched
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl OrgListArgs {
    /// Convert CLI args to an API request.
    ///
    /// `default_limit` applies when no `--limit` is given and `--all` is off.
    pub fn to_request(&self, default_limit: u32) -> GetOrgsRequest {
        let mut request = GetOrgsRequest::new();

        if let Some(offset) = self.offset {
            request = request.offset(offset);
        }
        match self.limit {
            Some(limit) => request = request.limit(limit),
            None if !self.all => request = request.limit(default_limit),
            None => {}
        }
        if self.descending {
            request = request.descending(true);
        }
        if let Some(ref name) = self.name {
            request = request.org(name);
        }
        if let Some(ref id) = self.id {
            request = request.org_id(id);
        }
        if let Some(ref user) = self.user {
            request = request.user_id(user);
        }

        request
    }
}
