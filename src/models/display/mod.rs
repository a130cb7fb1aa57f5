//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

pub mod common;
mod member;
mod org;
mod secret;

pub use member::MemberDisplay;
pub use org::OrgDisplay;
pub use secret::SecretKeyDisplay;
