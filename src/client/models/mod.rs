//! InfluxDB Organizations API data models
//!
//! Plain request/response records for the `/api/v2/orgs` resource group.
//! Models are organized by resource type for easy discovery.

pub mod member;
pub mod org;
pub mod secret;

// Re-export the records callers work with; link and status types stay in
// their modules
pub use member::{
    AddResourceMemberRequestBody, ResourceMember, ResourceMembers, ResourceOwner, ResourceOwners,
};
pub use org::{Organization, Organizations, PatchOrganizationRequest, PostOrganizationRequest};
pub use secret::{SecretKeys, SecretKeysResponse, Secrets};
