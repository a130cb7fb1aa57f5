//! Request shapes for the Organizations API
//!
//! Each operation takes one request record bundling its path parameters,
//! query parameters and/or body.

use super::models::{
    AddResourceMemberRequestBody, PatchOrganizationRequest, PostOrganizationRequest, SecretKeys,
    Secrets,
};

/// Query parameters for listing organizations.
///
/// All fields are optional; unset fields are left out of the query string.
///
/// # Example
/// ```ignore
/// let request = GetOrgsRequest::new().limit(50).descending(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOrgsRequest {
    /// Number of records to skip
    pub offset: Option<u32>,
    /// Page size (server default 20, maximum 100)
    pub limit: Option<u32>,
    pub descending: Option<bool>,
    /// Filter to a specific organization name
    pub org: Option<String>,
    /// Filter to a specific organization ID
    pub org_id: Option<String>,
    /// Filter to organizations a user belongs to
    pub user_id: Option<String>,
}

impl GetOrgsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = Some(descending);
        self
    }

    pub fn org(mut self, name: impl Into<String>) -> Self {
        self.org = Some(name.into());
        self
    }

    pub fn org_id(mut self, id: impl Into<String>) -> Self {
        self.org_id = Some(id.into());
        self
    }

    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    /// Convert to query string parameters.
    ///
    /// Only set fields are emitted, using the API's wire names in the order
    /// `offset`, `limit`, `descending`, `org`, `orgID`, `userID`.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(offset) = self.offset {
            params.push(("offset", offset.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(descending) = self.descending {
            params.push(("descending", descending.to_string()));
        }
        if let Some(ref org) = self.org {
            params.push(("org", org.clone()));
        }
        if let Some(ref org_id) = self.org_id {
            params.push(("orgID", org_id.clone()));
        }
        if let Some(ref user_id) = self.user_id {
            params.push(("userID", user_id.clone()));
        }

        params
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostOrgsRequest {
    /// Organization to create
    pub body: PostOrganizationRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrgsIdRequest {
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchOrgsIdRequest {
    pub org_id: String,
    /// Organization update to apply
    pub body: PatchOrganizationRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrgsIdRequest {
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrgsIdSecretsRequest {
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchOrgsIdSecretsRequest {
    pub org_id: String,
    /// Secret key/value pairs to update or add
    pub body: Secrets,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostOrgsIdSecretsRequest {
    pub org_id: String,
    /// Secret keys to delete
    pub body: SecretKeys,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrgsIdSecretsIdRequest {
    pub org_id: String,
    pub secret_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrgsIdMembersRequest {
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostOrgsIdMembersRequest {
    pub org_id: String,
    /// User to add as member
    pub body: AddResourceMemberRequestBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrgsIdMembersIdRequest {
    /// ID of the member to remove
    pub user_id: String,
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrgsIdOwnersRequest {
    pub org_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostOrgsIdOwnersRequest {
    pub org_id: String,
    /// User to add as owner
    pub body: AddResourceMemberRequestBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOrgsIdOwnersIdRequest {
    /// ID of the owner to remove
    pub user_id: String,
    pub org_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_orgs_request_default_is_empty() {
        let request = GetOrgsRequest::new();
        assert!(request.to_query_params().is_empty());
    }

    #[test]
    fn test_get_orgs_request_builder() {
        let request = GetOrgsRequest::new()
            .offset(40)
            .limit(20)
            .descending(true)
            .org("acme")
            .org_id("0a1b2c3d4e5f6789")
            .user_id("09f1c2d3e4b5a697");

        assert_eq!(
            request.to_query_params(),
            vec![
                ("offset", "40".to_string()),
                ("limit", "20".to_string()),
                ("descending", "true".to_string()),
                ("org", "acme".to_string()),
                ("orgID", "0a1b2c3d4e5f6789".to_string()),
                ("userID", "09f1c2d3e4b5a697".to_string()),
            ]
        );
    }

    #[test]
    fn test_get_orgs_request_only_set_params() {
        let request = GetOrgsRequest::new().limit(5).user_id("u1");
        let params = request.to_query_params();

        assert_eq!(params.len(), 2);
        assert!(params.contains(&("limit", "5".to_string())));
        assert!(params.contains(&("userID", "u1".to_string())));
    }

    #[test]
    fn test_get_orgs_request_descending_false_is_sent() {
        let params = GetOrgsRequest::new().descending(false).to_query_params();
        assert_eq!(params, vec![("descending", "false".to_string())]);
    }
}
