//! InfluxDB v2 API client
//!
//! - [`base`] - shared transport (URL assembly, auth header, status mapping)
//! - [`orgs`] - the Organizations resource client
//! - [`requests`] / [`models`] - request shapes and response records

pub mod base;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod orgs;
pub mod pagination;
pub mod requests;

pub use base::{ApiBase, RequestOptions};
pub use orgs::{OrgsApi, OrgsClient};
pub use pagination::fetch_all_orgs;
