//! Organizations API client
//!
//! One method per `/api/v2/orgs` endpoint. Each call builds the request and
//! hands it to the shared [`Transport`] unchanged: no validation, caching or
//! retries happen here.

use async_trait::async_trait;

use super::base::{ApiBase, ApiRequest, RequestOptions, Transport};
use super::models::{
    Organization, Organizations, ResourceMember, ResourceMembers, ResourceOwner, ResourceOwners,
    SecretKeysResponse,
};
use super::requests::{
    DeleteOrgsIdMembersIdRequest, DeleteOrgsIdOwnersIdRequest, DeleteOrgsIdRequest,
    DeleteOrgsIdSecretsIdRequest, GetOrgsIdMembersRequest, GetOrgsIdOwnersRequest,
    GetOrgsIdRequest, GetOrgsIdSecretsRequest, GetOrgsRequest, PatchOrgsIdRequest,
    PatchOrgsIdSecretsRequest, PostOrgsIdMembersRequest, PostOrgsIdOwnersRequest,
    PostOrgsIdSecretsRequest, PostOrgsRequest,
};
use crate::error::Result;

const ORGS_PATH: [&str; 3] = ["api", "v2", "orgs"];

/// Path segments under `/api/v2/orgs`
fn orgs_path(rest: &[&str]) -> Vec<String> {
    ORGS_PATH
        .iter()
        .chain(rest.iter())
        .map(|s| s.to_string())
        .collect()
}

/// Organization operations of the InfluxDB v2 API
///
/// See <https://docs.influxdata.com/influxdb/v2/api/#tag/Organizations>.
#[async_trait]
pub trait OrgsApi: Send + Sync {
    /// List all organizations.
    async fn get_orgs(
        &self,
        request: &GetOrgsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organizations>;

    /// Create an organization.
    async fn post_orgs(
        &self,
        request: &PostOrgsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization>;

    /// Retrieve an organization.
    async fn get_orgs_id(
        &self,
        request: &GetOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization>;

    /// Update an organization.
    async fn patch_orgs_id(
        &self,
        request: &PatchOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization>;

    /// Delete an organization.
    async fn delete_orgs_id(
        &self,
        request: &DeleteOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;

    /// List all secret keys for an organization.
    async fn get_orgs_id_secrets(
        &self,
        request: &GetOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<SecretKeysResponse>;

    /// Update secrets in an organization.
    async fn patch_orgs_id_secrets(
        &self,
        request: &PatchOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;

    /// Delete secrets from an organization.
    async fn post_orgs_id_secrets(
        &self,
        request: &PostOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;

    /// Delete a secret from an organization.
    async fn delete_orgs_id_secrets_id(
        &self,
        request: &DeleteOrgsIdSecretsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;

    /// List all members of an organization.
    async fn get_orgs_id_members(
        &self,
        request: &GetOrgsIdMembersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceMembers>;

    /// Add a member to an organization.
    async fn post_orgs_id_members(
        &self,
        request: &PostOrgsIdMembersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceMember>;

    /// Remove a member from an organization.
    async fn delete_orgs_id_members_id(
        &self,
        request: &DeleteOrgsIdMembersIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;

    /// List all owners of an organization.
    async fn get_orgs_id_owners(
        &self,
        request: &GetOrgsIdOwnersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceOwners>;

    /// Add an owner to an organization.
    async fn post_orgs_id_owners(
        &self,
        request: &PostOrgsIdOwnersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceOwner>;

    /// Remove an owner from an organization.
    async fn delete_orgs_id_owners_id(
        &self,
        request: &DeleteOrgsIdOwnersIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()>;
}

/// Organizations API client over a shared transport
pub struct OrgsClient<T: Transport = ApiBase> {
    base: T,
}

impl<T: Transport> OrgsClient<T> {
    /// Create an Organizations client on top of `base`.
    pub fn new(base: T) -> Self {
        Self { base }
    }

    /// Access the underlying transport.
    #[allow(dead_code)]
    pub fn base(&self) -> &T {
        &self.base
    }

    async fn fetch<R: serde::de::DeserializeOwned>(
        &self,
        request: ApiRequest,
        options: Option<&RequestOptions>,
    ) -> Result<R> {
        self.base.send(request, options).await?.json()
    }

    async fn execute(&self, request: ApiRequest, options: Option<&RequestOptions>) -> Result<()> {
        self.base.send(request, options).await?;
        Ok(())
    }
}

#[async_trait]
impl<T: Transport> OrgsApi for OrgsClient<T> {
    async fn get_orgs(
        &self,
        request: &GetOrgsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organizations> {
        let api_request = ApiRequest::get(&orgs_path(&[])).query(request.to_query_params());
        self.fetch(api_request, options).await
    }

    async fn post_orgs(
        &self,
        request: &PostOrgsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization> {
        let api_request = ApiRequest::post(&orgs_path(&[])).json(&request.body)?;
        self.fetch(api_request, options).await
    }

    async fn get_orgs_id(
        &self,
        request: &GetOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization> {
        let api_request = ApiRequest::get(&orgs_path(&[request.org_id.as_str()]));
        self.fetch(api_request, options).await
    }

    async fn patch_orgs_id(
        &self,
        request: &PatchOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<Organization> {
        let api_request =
            ApiRequest::patch(&orgs_path(&[request.org_id.as_str()])).json(&request.body)?;
        self.fetch(api_request, options).await
    }

    async fn delete_orgs_id(
        &self,
        request: &DeleteOrgsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let api_request = ApiRequest::delete(&orgs_path(&[request.org_id.as_str()]));
        self.execute(api_request, options).await
    }

    async fn get_orgs_id_secrets(
        &self,
        request: &GetOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<SecretKeysResponse> {
        let api_request = ApiRequest::get(&orgs_path(&[request.org_id.as_str(), "secrets"]));
        self.fetch(api_request, options).await
    }

    async fn patch_orgs_id_secrets(
        &self,
        request: &PatchOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path = orgs_path(&[request.org_id.as_str(), "secrets"]);
        let api_request = ApiRequest::patch(&path).json(&request.body)?;
        self.execute(api_request, options).await
    }

    async fn post_orgs_id_secrets(
        &self,
        request: &PostOrgsIdSecretsRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let path = orgs_path(&[request.org_id.as_str(), "secrets", "delete"]);
        let api_request = ApiRequest::post(&path).json(&request.body)?;
        self.execute(api_request, options).await
    }

    async fn delete_orgs_id_secrets_id(
        &self,
        request: &DeleteOrgsIdSecretsIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let api_request = ApiRequest::delete(&orgs_path(&[
            request.org_id.as_str(),
            "secrets",
            request.secret_id.as_str(),
        ]));
        self.execute(api_request, options).await
    }

    async fn get_orgs_id_members(
        &self,
        request: &GetOrgsIdMembersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceMembers> {
        let api_request = ApiRequest::get(&orgs_path(&[request.org_id.as_str(), "members"]));
        self.fetch(api_request, options).await
    }

    async fn post_orgs_id_members(
        &self,
        request: &PostOrgsIdMembersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceMember> {
        let path = orgs_path(&[request.org_id.as_str(), "members"]);
        let api_request = ApiRequest::post(&path).json(&request.body)?;
        self.fetch(api_request, options).await
    }

    async fn delete_orgs_id_members_id(
        &self,
        request: &DeleteOrgsIdMembersIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let api_request = ApiRequest::delete(&orgs_path(&[
            request.org_id.as_str(),
            "members",
            request.user_id.as_str(),
        ]));
        self.execute(api_request, options).await
    }

    async fn get_orgs_id_owners(
        &self,
        request: &GetOrgsIdOwnersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceOwners> {
        let api_request = ApiRequest::get(&orgs_path(&[request.org_id.as_str(), "owners"]));
        self.fetch(api_request, options).await
    }

    async fn post_orgs_id_owners(
        &self,
        request: &PostOrgsIdOwnersRequest,
        options: Option<&RequestOptions>,
    ) -> Result<ResourceOwner> {
        let path = orgs_path(&[request.org_id.as_str(), "owners"]);
        let api_request = ApiRequest::post(&path).json(&request.body)?;
        self.fetch(api_request, options).await
    }

    async fn delete_orgs_id_owners_id(
        &self,
        request: &DeleteOrgsIdOwnersIdRequest,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        let api_request = ApiRequest::delete(&orgs_path(&[
            request.org_id.as_str(),
            "owners",
            request.user_id.as_str(),
        ]));
        self.execute(api_request, options).await
    }
}
