//! Secret models
//!
//! Secret values are write-only: read operations only ever return key names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Secret key/value pairs to add or update
pub type Secrets = BTreeMap<String, String>;

/// A list of secret keys
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretKeys {
    #[serde(default)]
    pub secrets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretKeysLinks {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
}

/// Secret keys of an organization (names only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretKeysResponse {
    #[serde(default)]
    pub secrets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<SecretKeysLinks>,
}
