//! Secret key display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::SecretKeysResponse;

/// Secret key for table/JSON output. Values are never readable.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SecretKeyDisplay {
    #[tabled(rename = "KEY")]
    pub key: String,
}

impl SecretKeyDisplay {
    /// One row per key, sorted
    pub fn from_response(response: SecretKeysResponse) -> Vec<Self> {
        let mut keys = response.secrets;
        keys.sort();
        keys.into_iter().map(|key| Self { key }).collect()
    }
}
